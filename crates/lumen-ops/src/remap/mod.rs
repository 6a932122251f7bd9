//! Intensity remapper - point-wise remapping of 8-bit images.
//!
//! A [`Mapping`] assigns an output level to every input level. The remapper
//! resolves it once per call into a 256-entry [`TransferTable`] and looks up
//! every sample of every channel independently; channels are never mixed.
//!
//! # Mappings
//!
//! | Mapping | Rule |
//! |---------|------|
//! | [`Mapping::PiecewiseLinear`] | interpolate between control points, flat beyond the ends |
//! | [`Mapping::Logarithmic`] | `c * ln(1 + x)`, `c = 255 / ln(1 + max)` |
//! | [`Mapping::Negative`] | `255 - x` |
//! | [`Mapping::Gamma`] | `255 * (x / 255) ^ gamma` |
//! | [`Mapping::Threshold`] | `x > level ? 255 : 0` |
//! | [`Mapping::BrightnessContrast`] | absolute value of `contrast * x + brightness` |
//!
//! All results are rounded to the nearest level and clamped to `[0, 255]`.
//!
//! # Algorithm (piecewise-linear)
//!
//! For a sample `x` and control points sorted by input level:
//!
//! 1. below the first input level: output the first output level
//! 2. at or above the last input level: output the last output level
//! 3. otherwise, with `(x_i, y_i)` the last point where `x_i <= x`:
//!    `y = y_i + (x - x_i) * (y_{i+1} - y_i) / (x_{i+1} - x_i)`
//!
//! Equal input levels form a vertical jump; a sample on the jump takes the
//! later point's output.
//!
//! # Example
//!
//! ```rust
//! use lumen_core::Image;
//! use lumen_ops::remap::{remap, Mapping};
//!
//! let img = Image::filled(8, 8, &[100, 100, 100]).unwrap();
//! let out = remap(&img, &Mapping::Logarithmic).unwrap();
//! assert!(out.data().iter().all(|&v| v == 255));
//! ```

mod apply;
mod curve;
mod mapping;

pub use apply::{apply_table, PARALLEL_CHUNK};
pub use curve::{ControlPoint, Curve};
pub use mapping::{Mapping, TransferTable, LEVELS};

use crate::{OpsError, OpsResult};
use lumen_core::{Image, MAX_SAMPLE};
use tracing::{debug, trace};

/// Remaps every sample of `image` through `mapping`.
///
/// Returns a new image with the same dimensions and channel count; the
/// input is left untouched.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`] if the mapping's numeric parameters are
/// invalid. No sample is processed in that case.
pub fn remap(image: &Image, mapping: &Mapping) -> OpsResult<Image> {
    let (width, height) = image.dimensions();
    trace!(width, height, channels = image.channels(), mode = mapping.name(), "remap");

    let table = resolve(image.data(), mapping)?;
    debug!(width, height, mode = mapping.name(), "Remapping intensities");

    let out = apply_table(image.data(), &table);
    Ok(image.with_samples(out)?)
}

/// Remaps a bare sample buffer.
///
/// Same contract as [`remap`] for callers that keep samples in their own
/// container. The layout is irrelevant since every sample is mapped
/// independently.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`] for an empty buffer or invalid mapping parameters.
pub fn remap_samples(samples: &[u8], mapping: &Mapping) -> OpsResult<Vec<u8>> {
    if samples.is_empty() {
        return Err(OpsError::InvalidParameter("sample buffer is empty".into()));
    }
    trace!(samples = samples.len(), mode = mapping.name(), "remap_samples");

    let table = resolve(samples, mapping)?;
    Ok(apply_table(samples, &table))
}

/// Validates the mapping and builds its table for these samples.
fn resolve(samples: &[u8], mapping: &Mapping) -> OpsResult<TransferTable> {
    mapping.validate()?;
    let max_sample = if mapping.needs_statistics() {
        samples.iter().copied().max().unwrap_or(0)
    } else {
        MAX_SAMPLE
    };
    Ok(mapping.transfer_table(max_sample))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_ramp() -> Image {
        // 16x16 RGB image covering every level once per channel, shuffled per channel
        let data = (0..256u32)
            .flat_map(|i| [i as u8, (255 - i) as u8, (i * 7 % 256) as u8])
            .collect();
        Image::new(16, 16, 3, data).unwrap()
    }

    #[test]
    fn test_preserves_shape() {
        let img = rgb_ramp();
        let out = remap(&img, &Mapping::Negative).unwrap();
        assert_eq!(out.dimensions(), img.dimensions());
        assert_eq!(out.channels(), img.channels());
    }

    #[test]
    fn test_channels_independent() {
        let img = rgb_ramp();
        let curve = Curve::from_levels(&[0, 70, 150, 255], &[0, 50, 200, 255]).unwrap();
        let out = remap(&img, &Mapping::PiecewiseLinear(curve.clone())).unwrap();
        for (src, dst) in img.data().iter().zip(out.data()) {
            assert_eq!(*dst, curve.evaluate(*src));
        }
    }

    #[test]
    fn test_log_uses_image_max() {
        let img = Image::new(3, 1, 1, vec![0, 10, 50]).unwrap();
        let out = remap(&img, &Mapping::Logarithmic).unwrap();
        assert_eq!(out.data()[0], 0);
        assert_eq!(out.data()[2], 255);
        // 255 * ln(11) / ln(51) = 155.5
        assert_eq!(out.data()[1], 156);
    }

    #[test]
    fn test_invalid_mapping_rejected() {
        let img = rgb_ramp();
        let err = remap(&img, &Mapping::Gamma { gamma: -2.0 }).unwrap_err();
        assert!(matches!(err, OpsError::InvalidParameter(_)));
    }

    #[test]
    fn test_remap_samples() {
        let out = remap_samples(&[0, 128, 255], &Mapping::Negative).unwrap();
        assert_eq!(out, vec![255, 127, 0]);
        assert!(remap_samples(&[], &Mapping::Negative).is_err());
    }
}
