//! Image scaling for display.
//!
//! Separates what to do from how: the width-fit math lives in [`fit`]
//! as pure functions, and backends implement [`ImageScaler`]. The
//! bundled [`RasterScaler`] covers every platform through the pure-Rust
//! `image` crate; embedders with platform scalers of their own can
//! implement the trait instead.

pub mod fit;
pub mod raster;

pub use fit::{Dimensions, display_size};
pub use raster::RasterScaler;

use image::DynamicImage;

/// Backend seam for proportional width-fit scaling.
pub trait ImageScaler: Send + Sync {
    /// Scale `image` so its width is at most `target_width`, keeping
    /// the aspect ratio. Must never upscale.
    fn fit_width(&self, image: &DynamicImage, target_width: u32) -> DynamicImage;
}
