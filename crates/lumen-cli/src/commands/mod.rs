//! CLI command implementations

pub mod eval;
pub mod table;

use crate::MappingArgs;
use anyhow::{Context, Result};
use lumen_ops::{Mapping, Mode, RemapConfig};
use std::path::Path;
use tracing::debug;

/// Load a mapping config from a YAML file
pub fn load_config(path: &Path) -> Result<RemapConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    RemapConfig::from_yaml_str(&text)
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}

/// Build the config described by the command-line flags
pub fn config_from_args(args: &MappingArgs) -> Result<RemapConfig> {
    if let Some(path) = &args.config {
        return load_config(path);
    }

    let mode: Mode = args.mode.parse()?;
    let mut config = RemapConfig::with_mode(mode);
    if let Some(r) = &args.r_vals {
        config.r_vals = r.clone();
    }
    if let Some(s) = &args.s_vals {
        config.s_vals = s.clone();
    }
    if let Some(gamma) = args.gamma {
        config.gamma = gamma;
    }
    if let Some(level) = args.threshold {
        config.thresh_value = level;
    }
    if let Some(brightness) = args.brightness {
        config.brightness = brightness;
    }
    if let Some(contrast) = args.contrast {
        config.contrast = contrast;
    }
    Ok(config)
}

/// Resolve the flags to a validated mapping
pub fn mapping_from_args(args: &MappingArgs) -> Result<Mapping> {
    let config = config_from_args(args)?;
    debug!(mode = %config.mode, "Building mapping");
    config
        .to_mapping()
        .with_context(|| format!("Invalid {} mapping", config.mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(mode: &str) -> MappingArgs {
        MappingArgs {
            config: None,
            mode: mode.to_string(),
            r_vals: None,
            s_vals: None,
            gamma: None,
            threshold: None,
            brightness: None,
            contrast: None,
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let mut a = args("piecewise");
        a.r_vals = Some(vec![50, 200]);
        a.s_vals = Some(vec![80, 180]);
        let table = mapping_from_args(&a).unwrap().transfer_table(255);
        assert_eq!(table.get(10), 80);
        assert_eq!(table.get(250), 180);
    }

    #[test]
    fn test_unknown_mode() {
        assert!(mapping_from_args(&args("canny")).is_err());
    }

    #[test]
    fn test_invalid_curve_reported() {
        let mut a = args("piecewise");
        a.r_vals = Some(vec![0, 300]);
        a.s_vals = Some(vec![0, 255]);
        let err = mapping_from_args(&a).unwrap_err();
        assert!(format!("{err:#}").contains("invalid curve"));
    }

    #[test]
    fn test_config_file_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode: negative").unwrap();
        let mut a = args("log");
        a.config = Some(file.path().to_path_buf());
        assert_eq!(mapping_from_args(&a).unwrap(), Mapping::Negative);
    }

    #[test]
    fn test_missing_config_file() {
        let mut a = args("log");
        a.config = Some("/nonexistent/lumen.yaml".into());
        let err = mapping_from_args(&a).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
