//! Mapping strategies and their 256-entry transfer tables.

use super::curve::Curve;
use crate::{OpsError, OpsResult};

/// Number of distinct 8-bit levels.
pub const LEVELS: usize = 256;

/// Point-wise intensity mapping, applied identically to every channel.
///
/// The variant set is closed; [`remap`](super::remap) dispatches on it once
/// per call to build a [`TransferTable`].
#[derive(Debug, Clone, PartialEq)]
pub enum Mapping {
    /// Piecewise-linear interpolation through a control curve.
    PiecewiseLinear(Curve),
    /// `c * ln(1 + x)` with `c = 255 / ln(1 + max)` from the image's own maximum.
    Logarithmic,
    /// `255 - x`.
    Negative,
    /// Power law `255 * (x / 255) ^ gamma`.
    Gamma {
        /// Exponent, finite and > 0.
        gamma: f64,
    },
    /// Binary threshold: `255` above `level`, `0` otherwise.
    Threshold {
        /// Highest level that maps to black.
        level: u8,
    },
    /// Saturating `|contrast * x + brightness|`.
    BrightnessContrast {
        /// Additive offset in levels.
        brightness: f64,
        /// Multiplicative gain.
        contrast: f64,
    },
}

impl Mapping {
    /// Piecewise-linear mapping from parallel level lists.
    ///
    /// See [`Curve::from_levels`].
    pub fn piecewise(r_vals: &[i64], s_vals: &[i64]) -> OpsResult<Self> {
        Curve::from_levels(r_vals, s_vals).map(Self::PiecewiseLinear)
    }

    /// Gamma mapping, validated.
    pub fn gamma(gamma: f64) -> OpsResult<Self> {
        let mapping = Self::Gamma { gamma };
        mapping.validate()?;
        Ok(mapping)
    }

    /// Short name used in logs and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PiecewiseLinear(_) => "piecewise",
            Self::Logarithmic => "log",
            Self::Negative => "negative",
            Self::Gamma { .. } => "gamma",
            Self::Threshold { .. } => "threshold",
            Self::BrightnessContrast { .. } => "brightness_contrast",
        }
    }

    /// Returns true if the table depends on image statistics.
    ///
    /// Only the log transform does: its scale comes from the image maximum.
    #[inline]
    pub fn needs_statistics(&self) -> bool {
        matches!(self, Self::Logarithmic)
    }

    /// Checks the numeric parameters of the mapping.
    ///
    /// Curves are validated when they are built, so `PiecewiseLinear` always
    /// passes.
    pub fn validate(&self) -> OpsResult<()> {
        match *self {
            Self::Gamma { gamma } if !gamma.is_finite() || gamma <= 0.0 => Err(
                OpsError::InvalidParameter(format!("gamma must be finite and > 0, got {gamma}")),
            ),
            Self::BrightnessContrast {
                brightness,
                contrast,
            } if !brightness.is_finite() || !contrast.is_finite() => {
                Err(OpsError::InvalidParameter(format!(
                    "brightness/contrast must be finite, got {brightness}/{contrast}"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Resolves the mapping to a lookup table.
    ///
    /// `max_sample` is the largest sample of the image being remapped; it is
    /// only read by [`Mapping::Logarithmic`].
    pub fn transfer_table(&self, max_sample: u8) -> TransferTable {
        match self {
            Self::PiecewiseLinear(curve) => TransferTable::from_fn(|x| curve.evaluate(x)),
            Self::Logarithmic => {
                let c = log_scale(max_sample);
                TransferTable::from_fn(|x| to_level(c * f64::from(x).ln_1p()))
            }
            Self::Negative => TransferTable::from_fn(|x| u8::MAX - x),
            Self::Gamma { gamma } => {
                TransferTable::from_fn(|x| to_level(255.0 * (f64::from(x) / 255.0).powf(*gamma)))
            }
            Self::Threshold { level } => {
                TransferTable::from_fn(|x| if x > *level { u8::MAX } else { 0 })
            }
            Self::BrightnessContrast {
                brightness,
                contrast,
            } => TransferTable::from_fn(|x| {
                // saturating cast rounds half to even
                let v = (contrast * f64::from(x) + brightness).abs();
                v.round_ties_even().clamp(0.0, 255.0) as u8
            }),
        }
    }
}

/// `255 / ln(1 + max)`, or 0 for an all-black image.
fn log_scale(max_sample: u8) -> f64 {
    if max_sample == 0 {
        0.0
    } else {
        255.0 / f64::from(max_sample).ln_1p()
    }
}

#[inline]
fn to_level(v: f64) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}

/// A mapping resolved for one call: output level for every input level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferTable([u8; LEVELS]);

impl TransferTable {
    /// Build a table by evaluating `f` at every level.
    pub fn from_fn(mut f: impl FnMut(u8) -> u8) -> Self {
        let mut table = [0u8; LEVELS];
        for (x, entry) in (0..=u8::MAX).zip(table.iter_mut()) {
            *entry = f(x);
        }
        Self(table)
    }

    /// The identity table.
    pub fn identity() -> Self {
        Self::from_fn(|x| x)
    }

    /// Output level for input level `x`.
    #[inline(always)]
    pub fn get(&self, x: u8) -> u8 {
        self.0[x as usize]
    }

    /// All 256 entries, indexed by input level.
    #[inline]
    pub fn as_array(&self) -> &[u8; LEVELS] {
        &self.0
    }

    /// Returns true if every level maps to itself.
    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(x, &y)| x == y as usize)
    }
}
