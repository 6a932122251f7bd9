//! # lumen-core
//!
//! Core types for 8-bit intensity remapping.
//!
//! This crate provides the foundational types used throughout the lumen workspace:
//!
//! - [`Image`] - Owned 8-bit image buffer (grayscale or RGB)
//! - [`Rect`] - Rectangular region used for cropping
//! - [`Error`] / [`Result`] - Buffer construction and region errors
//!
//! ## Crate Structure
//!
//! ```text
//! lumen-core (this crate)
//!    ^
//!    |
//!    +-- lumen-ops (remapper, point operations)
//!    +-- lumen-cli (transfer table inspection)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lumen_core::{Image, Rect};
//!
//! let img = Image::filled(4, 4, &[10, 20, 30]).unwrap();
//! let corner = img.crop(Rect::new(0, 0, 2, 2)).unwrap();
//! assert_eq!(corner.dimensions(), (2, 2));
//! assert_eq!(corner.channels(), 3);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod rect;

pub use error::*;
pub use image::*;
pub use rect::*;

/// Prelude module for convenient imports.
///
/// ```
/// use lumen_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::{Image, MAX_SAMPLE, SUPPORTED_BIT_DEPTH};
    pub use crate::rect::Rect;
}
