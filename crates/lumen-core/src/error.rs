//! Error types for lumen-core operations.
//!
//! The [`Error`] enum covers every way constructing or slicing an
//! [`Image`](crate::image::Image) can fail:
//! - Buffer shape checks (dimensions, data length)
//! - Channel layout (only grayscale and RGB are accepted)
//! - Sample bit depth (only 8-bit samples are accepted)
//! - Region bounds for cropping
//!
//! # Usage
//!
//! ```rust
//! use lumen_core::{Error, Result};
//!
//! fn check_depth(bits: u8) -> Result<()> {
//!     if bits != 8 {
//!         return Err(Error::UnsupportedBitDepth { bits });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_depth(16).is_err());
//! ```
//!
//! # Used By
//!
//! - [`crate::image::Image`] - Buffer construction and cropping
//! - `lumen-ops` - Wrapped as `OpsError::Core`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or slicing image buffers.
///
/// # Categories
///
/// - **Shape errors**: [`InvalidDimensions`](Error::InvalidDimensions)
/// - **Format errors**: [`UnsupportedChannels`](Error::UnsupportedChannels),
///   [`UnsupportedBitDepth`](Error::UnsupportedBitDepth)
/// - **Region errors**: [`InvalidRegion`](Error::InvalidRegion)
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid image dimensions.
    ///
    /// Returned when width or height is zero, when the buffer size would
    /// overflow, or when the data length does not match `width * height * channels`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Channel count other than 1 (grayscale) or 3 (RGB).
    #[error("unsupported channel count: {channels} (expected 1 or 3)")]
    UnsupportedChannels {
        /// Channel count that was requested
        channels: usize,
    },

    /// Sample bit depth other than 8.
    ///
    /// The remapping domain is exactly `[0, 255]`; wider samples are rejected
    /// outright instead of being truncated.
    #[error("unsupported bit depth: {bits} (only 8-bit samples are supported)")]
    UnsupportedBitDepth {
        /// Declared bits per sample
        bits: u8,
    },

    /// Region is empty or extends beyond image bounds.
    #[error("region ({rx}, {ry}, {rw}x{rh}) exceeds image bounds {width}x{height}")]
    InvalidRegion {
        /// Region X origin
        rx: u32,
        /// Region Y origin
        ry: u32,
        /// Region width
        rw: u32,
        /// Region height
        rh: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidRegion`] error.
    #[inline]
    pub fn invalid_region(rx: u32, ry: u32, rw: u32, rh: u32, width: u32, height: u32) -> Self {
        Self::InvalidRegion {
            rx,
            ry,
            rw,
            rh,
            width,
            height,
        }
    }

    /// Returns `true` if this error is about the sample format
    /// (channel layout or bit depth) rather than the buffer shape.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedChannels { .. } | Self::UnsupportedBitDepth { .. }
        )
    }
}
