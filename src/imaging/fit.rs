//! Pure dimension math for width-fit scaling. No I/O, fully
//! unit-testable.

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Dimensions of `original` proportionally scaled so its width is at
/// most `target_width`.
///
/// The scale factor is capped at 1, so an image already narrower than
/// the target keeps its original dimensions.
pub fn display_size(original: Dimensions, target_width: u32) -> Dimensions {
    if original.width == 0 || original.height == 0 {
        return original;
    }
    let scale = f64::min(1.0, f64::from(target_width) / f64::from(original.width));
    if scale >= 1.0 {
        return original;
    }
    Dimensions {
        width: target_width,
        height: ((f64::from(original.height) * scale).round() as u32).max(1),
    }
}
