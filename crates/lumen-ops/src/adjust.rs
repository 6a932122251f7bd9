//! Whole-image adjustments built on the remapper.
//!
//! - [`grayscale`] - RGB to single-channel luma (Rec.601 weights)
//! - [`threshold`] - luma, then binary threshold
//! - [`adjust_brightness_contrast`] - saturating `|contrast * x + brightness|`
//! - [`gamma_correct`] - power-law remap
//!
//! ```rust
//! use lumen_core::Image;
//! use lumen_ops::adjust::{grayscale, threshold};
//!
//! let img = Image::new(2, 1, 3, vec![255, 255, 255, 10, 20, 30]).unwrap();
//! let gray = grayscale(&img).unwrap();
//! assert_eq!(gray.channels(), 1);
//! assert_eq!(gray.data()[0], 255);
//!
//! let bin = threshold(&img, 127).unwrap();
//! assert_eq!(bin.data(), &[255, 0]);
//! ```

use lumen_core::Image;
use tracing::{debug, trace};

use crate::remap::{remap, Mapping};
use crate::OpsResult;

/// Rec.601 luma weights in 14-bit fixed point (they sum to `1 << 14`).
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_SHIFT: u32 = 14;

/// Converts an RGB image to a single-channel luma image.
///
/// `Y = 0.299 R + 0.587 G + 0.114 B`, rounded. A grayscale input is
/// returned as a copy.
pub fn grayscale(image: &Image) -> OpsResult<Image> {
    let (width, height) = image.dimensions();
    trace!(width, height, channels = image.channels(), "grayscale");

    if image.is_grayscale() {
        return Ok(image.clone());
    }

    let luma = image
        .data()
        .chunks_exact(3)
        .map(|px| {
            let y = u32::from(px[0]) * LUMA_R
                + u32::from(px[1]) * LUMA_G
                + u32::from(px[2]) * LUMA_B;
            ((y + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8
        })
        .collect();

    Ok(Image::new(width, height, 1, luma)?)
}

/// Binary threshold on luma: samples above `level` become 255, the rest 0.
///
/// Always returns a single-channel image.
pub fn threshold(image: &Image, level: u8) -> OpsResult<Image> {
    debug!(level, "Applying binary threshold");
    let gray = grayscale(image)?;
    remap(&gray, &Mapping::Threshold { level })
}

/// Brightness/contrast: `clamp(round(|contrast * x + brightness|), 0, 255)` per sample.
pub fn adjust_brightness_contrast(
    image: &Image,
    brightness: f64,
    contrast: f64,
) -> OpsResult<Image> {
    debug!(brightness, contrast, "Adjusting brightness/contrast");
    remap(
        image,
        &Mapping::BrightnessContrast {
            brightness,
            contrast,
        },
    )
}

/// Power-law remap `255 * (x / 255) ^ gamma`.
pub fn gamma_correct(image: &Image, gamma: f64) -> OpsResult<Image> {
    remap(image, &Mapping::gamma(gamma)?)
}
