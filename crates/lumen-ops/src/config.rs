//! Mapping configuration.
//!
//! [`RemapConfig`] is the flat parameter set the surrounding application
//! hands over together with a decoded image: a `mode` plus the options that
//! mode reads. It deserializes from YAML (or any serde format) and turns into
//! a validated [`Mapping`] with [`RemapConfig::to_mapping`].
//!
//! ```yaml
//! mode: piecewise
//! r_vals: [0, 70, 150, 255]
//! s_vals: [0, 50, 200, 255]
//! ```
//!
//! Options a mode does not read are ignored. Missing options take the
//! defaults below.
//!
//! | Option | Mode | Default |
//! |--------|------|---------|
//! | `r_vals` | piecewise | `[0, 70, 150, 255]` |
//! | `s_vals` | piecewise | `[0, 50, 200, 255]` |
//! | `gamma` | gamma | `1.0` |
//! | `thresh_value` | threshold | `127` |
//! | `brightness` | brightness_contrast | `0.0` |
//! | `contrast` | brightness_contrast | `1.0` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::remap::{Curve, Mapping};
use crate::{OpsError, OpsResult};

/// Mapping kind selected by a [`RemapConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Piecewise-linear control curve.
    #[default]
    Piecewise,
    /// Logarithmic remap scaled by the image maximum.
    #[serde(alias = "log_transform")]
    Log,
    /// Inversion.
    Negative,
    /// Power-law remap.
    Gamma,
    /// Binary threshold.
    Threshold,
    /// Brightness/contrast adjustment.
    #[serde(alias = "color_adjust")]
    BrightnessContrast,
}

impl Mode {
    /// All modes, in menu order.
    pub const ALL: [Mode; 6] = [
        Mode::Piecewise,
        Mode::Log,
        Mode::Negative,
        Mode::Gamma,
        Mode::Threshold,
        Mode::BrightnessContrast,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Piecewise => "piecewise",
            Mode::Log => "log",
            Mode::Negative => "negative",
            Mode::Gamma => "gamma",
            Mode::Threshold => "threshold",
            Mode::BrightnessContrast => "brightness_contrast",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = OpsError;

    /// Parses a mode name, case-insensitively. `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "piecewise" => Ok(Mode::Piecewise),
            "log" | "log_transform" => Ok(Mode::Log),
            "negative" => Ok(Mode::Negative),
            "gamma" => Ok(Mode::Gamma),
            "threshold" => Ok(Mode::Threshold),
            "brightness_contrast" | "color_adjust" => Ok(Mode::BrightnessContrast),
            other => Err(OpsError::InvalidParameter(format!("unknown mode '{other}'"))),
        }
    }
}

/// Flat mapping configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemapConfig {
    /// Mapping kind.
    pub mode: Mode,
    /// Piecewise input levels.
    pub r_vals: Vec<i64>,
    /// Piecewise output levels, paired with `r_vals` by position.
    pub s_vals: Vec<i64>,
    /// Gamma exponent.
    pub gamma: f64,
    /// Threshold level; samples above it become white.
    pub thresh_value: i64,
    /// Brightness offset in levels.
    pub brightness: f64,
    /// Contrast gain.
    pub contrast: f64,
}

impl Default for RemapConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Piecewise,
            r_vals: vec![0, 70, 150, 255],
            s_vals: vec![0, 50, 200, 255],
            gamma: 1.0,
            thresh_value: 127,
            brightness: 0.0,
            contrast: 1.0,
        }
    }
}

impl RemapConfig {
    /// Default configuration for `mode`.
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Parses a configuration from YAML.
    ///
    /// ```rust
    /// use lumen_ops::config::{Mode, RemapConfig};
    ///
    /// let cfg = RemapConfig::from_yaml_str("mode: log_transform").unwrap();
    /// assert_eq!(cfg.mode, Mode::Log);
    /// ```
    pub fn from_yaml_str(yaml: &str) -> OpsResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        debug!(mode = %config.mode, "Parsed remap config");
        Ok(config)
    }

    /// Serializes the configuration to YAML.
    pub fn to_yaml_string(&self) -> OpsResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Builds the validated mapping this configuration describes.
    ///
    /// # Errors
    ///
    /// - [`OpsError::InvalidCurve`] for unusable `r_vals`/`s_vals`
    /// - [`OpsError::InvalidParameter`] for an out-of-range threshold or
    ///   non-finite/non-positive numeric options
    pub fn to_mapping(&self) -> OpsResult<Mapping> {
        let mapping = match self.mode {
            Mode::Piecewise => {
                Mapping::PiecewiseLinear(Curve::from_levels(&self.r_vals, &self.s_vals)?)
            }
            Mode::Log => Mapping::Logarithmic,
            Mode::Negative => Mapping::Negative,
            Mode::Gamma => Mapping::Gamma { gamma: self.gamma },
            Mode::Threshold => {
                let level = u8::try_from(self.thresh_value).map_err(|_| {
                    OpsError::InvalidParameter(format!(
                        "thresh_value {} is outside [0, 255]",
                        self.thresh_value
                    ))
                })?;
                Mapping::Threshold { level }
            }
            Mode::BrightnessContrast => Mapping::BrightnessContrast {
                brightness: self.brightness,
                contrast: self.contrast,
            },
        };
        mapping.validate()?;
        Ok(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_curve() {
        let mapping = RemapConfig::default().to_mapping().unwrap();
        let Mapping::PiecewiseLinear(curve) = mapping else {
            panic!("expected piecewise mapping");
        };
        assert_eq!(curve.evaluate(110), 125);
    }

    #[test]
    fn test_parse_piecewise() {
        let yaml = "mode: piecewise\nr_vals: [50, 200]\ns_vals: [80, 180]\n";
        let cfg = RemapConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.r_vals, vec![50, 200]);
        let table = cfg.to_mapping().unwrap().transfer_table(255);
        assert_eq!(table.get(10), 80);
        assert_eq!(table.get(250), 180);
    }

    #[test]
    fn test_mismatched_levels() {
        let yaml = "r_vals: [0, 128, 255]\ns_vals: [0, 255]\n";
        let err = RemapConfig::from_yaml_str(yaml).unwrap().to_mapping().unwrap_err();
        assert!(matches!(err, OpsError::InvalidCurve(_)));
    }

    #[test]
    fn test_out_of_range_level_not_wrapped() {
        let yaml = "r_vals: [0, 256]\ns_vals: [0, 255]\n";
        let err = RemapConfig::from_yaml_str(yaml).unwrap().to_mapping().unwrap_err();
        assert!(matches!(err, OpsError::InvalidCurve(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = RemapConfig::from_yaml_str("mode: log\nkernel_size: 5\n").unwrap_err();
        assert!(matches!(err, OpsError::Yaml(_)));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(RemapConfig::from_yaml_str("mode: watershed").is_err());
        assert!("watershed".parse::<Mode>().is_err());
    }

    #[test]
    fn test_threshold_range() {
        let mut cfg = RemapConfig::with_mode(Mode::Threshold);
        assert_eq!(cfg.to_mapping().unwrap(), Mapping::Threshold { level: 127 });
        cfg.thresh_value = 300;
        assert!(matches!(cfg.to_mapping(), Err(OpsError::InvalidParameter(_))));
    }

    #[test]
    fn test_gamma_validated() {
        let mut cfg = RemapConfig::with_mode(Mode::Gamma);
        cfg.gamma = 0.0;
        assert!(cfg.to_mapping().is_err());
    }

    #[test]
    fn test_mode_names() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
        assert_eq!("Log-Transform".parse::<Mode>().unwrap(), Mode::Log);
        assert_eq!("color_adjust".parse::<Mode>().unwrap(), Mode::BrightnessContrast);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let cfg = RemapConfig {
            mode: Mode::BrightnessContrast,
            brightness: 20.0,
            contrast: 1.5,
            ..RemapConfig::default()
        };
        let yaml = cfg.to_yaml_string().unwrap();
        assert_eq!(RemapConfig::from_yaml_str(&yaml).unwrap(), cfg);
    }
}
