//! Raster backend over the `image` crate.

use image::DynamicImage;
use image::imageops::FilterType;

use super::ImageScaler;
use super::fit::{Dimensions, display_size};

/// Portable scaler backed by `image`'s Lanczos3 resampling.
#[derive(Debug, Default, Clone, Copy)]
pub struct RasterScaler;

impl ImageScaler for RasterScaler {
    fn fit_width(&self, image: &DynamicImage, target_width: u32) -> DynamicImage {
        let original = Dimensions {
            width: image.width(),
            height: image.height(),
        };
        let target = display_size(original, target_width);
        if target == original {
            return image.clone();
        }
        image.resize_exact(target.width, target.height, FilterType::Lanczos3)
    }
}
