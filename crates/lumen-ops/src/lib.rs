//! # lumen-ops
//!
//! Intensity remapping and point operations for 8-bit images.
//!
//! # Modules
//!
//! - [`remap`] - The intensity remapper: piecewise-linear curves, log transform, negative
//! - [`config`] - Serializable mapping configuration (`mode`, `r_vals`, `s_vals`, ...)
//! - [`adjust`] - Grayscale conversion, binary threshold, brightness/contrast
//!
//! Every operation is a pure function: it borrows its input image, validates
//! its parameters before touching any sample and returns a newly allocated
//! image of the documented shape.
//!
//! # Example
//!
//! ```rust
//! use lumen_core::Image;
//! use lumen_ops::remap::{remap, Curve, Mapping};
//!
//! let img = Image::new(3, 1, 1, vec![70, 110, 255]).unwrap();
//! let curve = Curve::from_levels(&[0, 70, 150, 255], &[0, 50, 200, 255]).unwrap();
//! let out = remap(&img, &Mapping::PiecewiseLinear(curve)).unwrap();
//! assert_eq!(out.data(), &[50, 125, 255]);
//! ```
//!
//! # Configuration
//!
//! ```rust
//! use lumen_core::Image;
//! use lumen_ops::config::RemapConfig;
//! use lumen_ops::remap::remap;
//!
//! let config = RemapConfig::from_yaml_str("mode: negative").unwrap();
//! let img = Image::new(2, 1, 1, vec![0, 200]).unwrap();
//! let out = remap(&img, &config.to_mapping().unwrap()).unwrap();
//! assert_eq!(out.data(), &[255, 55]);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - Split table lookups across threads with rayon (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod adjust;
pub mod config;
pub mod remap;

pub use error::{OpsError, OpsResult};
pub use config::{Mode, RemapConfig};
pub use remap::{remap, remap_samples, ControlPoint, Curve, Mapping, TransferTable};
