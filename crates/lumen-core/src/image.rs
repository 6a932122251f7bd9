//! 8-bit image buffer.
//!
//! [`Image`] is the only pixel container in lumen. It holds interleaved,
//! row-major `u8` samples for grayscale (1 channel) or RGB (3 channels)
//! images:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  ← Row 0
//!         [R G B R G B R G B ...]  ← Row 1
//!         ...
//! ```
//!
//! Buffers are always tightly packed (stride == `width * channels`).
//! Operations never mutate an input image; they build a new one through
//! [`Image::with_samples`], which keeps the shape and swaps the data.
//!
//! # Usage
//!
//! ```rust
//! use lumen_core::Image;
//!
//! let img = Image::new(2, 1, 3, vec![255, 0, 0, 0, 0, 255]).unwrap();
//! assert_eq!(img.pixel(1, 0), &[0, 0, 255]);
//! assert_eq!(img.max_sample(), 255);
//! ```

use crate::error::{Error, Result};
use crate::rect::Rect;

/// Largest value a sample can hold.
pub const MAX_SAMPLE: u8 = u8::MAX;

/// The only bit depth accepted by [`Image::from_raw_with_depth`].
pub const SUPPORTED_BIT_DEPTH: u8 = 8;

/// Owned 8-bit image buffer with 1 or 3 interleaved channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    channels: usize,
    data: Vec<u8>,
}

impl Image {
    /// Creates an image from existing sample data.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if width or height is zero, or the data
    ///   length is not `width * height * channels`
    /// - [`Error::UnsupportedChannels`] if `channels` is not 1 or 3
    pub fn new(width: u32, height: u32, channels: usize, data: Vec<u8>) -> Result<Self> {
        let expected = checked_len(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Creates an image from a decoder's raw output, checking its bit depth.
    ///
    /// Decoders report the bits per sample they produced; anything other
    /// than 8 is rejected with [`Error::UnsupportedBitDepth`] before the
    /// shape is examined.
    ///
    /// ```rust
    /// use lumen_core::{Error, Image};
    ///
    /// let err = Image::from_raw_with_depth(1, 1, 1, 16, vec![0, 0]).unwrap_err();
    /// assert!(matches!(err, Error::UnsupportedBitDepth { bits: 16 }));
    /// ```
    pub fn from_raw_with_depth(
        width: u32,
        height: u32,
        channels: usize,
        bits: u8,
        data: Vec<u8>,
    ) -> Result<Self> {
        if bits != SUPPORTED_BIT_DEPTH {
            return Err(Error::UnsupportedBitDepth { bits });
        }
        Self::new(width, height, channels, data)
    }

    /// Creates an image where every pixel equals `pixel`.
    ///
    /// The channel count is taken from `pixel.len()`.
    pub fn filled(width: u32, height: u32, pixel: &[u8]) -> Result<Self> {
        let channels = pixel.len();
        let len = checked_len(width, height, channels)?;
        let data = pixel.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Builds a new image with this image's shape and the given samples.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if `data` has a different length.
    pub fn with_samples(&self, data: Vec<u8>) -> Result<Self> {
        Self::new(self.width, self.height, self.channels, data)
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the number of channels per pixel (1 or 3).
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns `true` for single-channel images.
    #[inline]
    pub fn is_grayscale(&self) -> bool {
        self.channels == 1
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the number of samples in one row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * self.channels
    }

    /// Returns a rectangle covering the entire image.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Returns the raw interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the image and returns its samples.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.row_len();
        &self.data[start..start + self.row_len()]
    }

    /// Returns the samples of pixel (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let offset = (y as usize * self.width as usize + x as usize) * self.channels;
        &self.data[offset..offset + self.channels]
    }

    /// Returns the samples of pixel (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Returns the largest sample over all channels.
    pub fn max_sample(&self) -> u8 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Copies a rectangular region into a new image.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRegion`] if `region` is empty or not fully inside the image.
    ///
    /// ```rust
    /// use lumen_core::{Image, Rect};
    ///
    /// let img = Image::new(3, 2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// let right = img.crop(Rect::new(1, 0, 2, 2)).unwrap();
    /// assert_eq!(right.data(), &[2, 3, 5, 6]);
    /// ```
    pub fn crop(&self, region: Rect) -> Result<Self> {
        if region.is_empty() || !self.bounds().contains_rect(&region) {
            return Err(Error::invalid_region(
                region.x,
                region.y,
                region.width,
                region.height,
                self.width,
                self.height,
            ));
        }

        let span = region.width as usize * self.channels;
        let x0 = region.x as usize * self.channels;
        let mut data = Vec::with_capacity(span * region.height as usize);
        for y in region.y..region.bottom() {
            data.extend_from_slice(&self.row(y)[x0..x0 + span]);
        }

        Ok(Self {
            width: region.width,
            height: region.height,
            channels: self.channels,
            data,
        })
    }
}

/// Validates shape and returns the sample count `width * height * channels`.
fn checked_len(width: u32, height: u32, channels: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(width, height, "image must not be empty"));
    }
    if channels != 1 && channels != 3 {
        return Err(Error::UnsupportedChannels { channels });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "buffer size overflows"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Image {
        let data = (0..width * height).map(|i| (i % 256) as u8).collect();
        Image::new(width, height, 1, data).unwrap()
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = Image::new(2, 2, 3, vec![0; 11]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(Image::new(0, 4, 1, vec![]).is_err());
        assert!(Image::new(4, 0, 1, vec![]).is_err());
    }

    #[test]
    fn test_new_rejects_rgba() {
        let err = Image::new(1, 1, 4, vec![0; 4]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedChannels { channels: 4 }));
    }

    #[test]
    fn test_bit_depth_checked_first() {
        let err = Image::from_raw_with_depth(0, 0, 7, 10, vec![]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedBitDepth { bits: 10 }));
        assert!(Image::from_raw_with_depth(1, 1, 1, 8, vec![42]).is_ok());
    }

    #[test]
    fn test_filled() {
        let img = Image::filled(3, 2, &[1, 2, 3]).unwrap();
        assert_eq!(img.channels(), 3);
        assert_eq!(img.data().len(), 18);
        assert_eq!(img.pixel(2, 1), &[1, 2, 3]);
    }

    #[test]
    fn test_rows_and_pixels() {
        let img = gradient(4, 3);
        assert_eq!(img.row(1), &[4, 5, 6, 7]);
        assert_eq!(img.pixel(3, 2), &[11]);
        assert_eq!(img.get_pixel(4, 0), None);
        assert_eq!(img.get_pixel(0, 3), None);
    }

    #[test]
    fn test_max_sample() {
        let img = Image::new(2, 1, 3, vec![3, 9, 1, 7, 0, 2]).unwrap();
        assert_eq!(img.max_sample(), 9);
        let black = Image::filled(5, 5, &[0]).unwrap();
        assert_eq!(black.max_sample(), 0);
    }

    #[test]
    fn test_with_samples_keeps_shape() {
        let img = gradient(3, 3);
        let out = img.with_samples(vec![7; 9]).unwrap();
        assert_eq!(out.dimensions(), img.dimensions());
        assert_eq!(out.channels(), 1);
        assert!(img.with_samples(vec![7; 8]).is_err());
    }

    #[test]
    fn test_crop_rgb() {
        let data: Vec<u8> = (0..2 * 2 * 3).collect();
        let img = Image::new(2, 2, 3, data).unwrap();
        let bottom_right = img.crop(Rect::new(1, 1, 1, 1)).unwrap();
        assert_eq!(bottom_right.data(), &[9, 10, 11]);
    }

    #[test]
    fn test_crop_full_is_copy() {
        let img = gradient(5, 4);
        assert_eq!(img.crop(img.bounds()).unwrap(), img);
    }

    #[test]
    fn test_crop_out_of_bounds() {
        let img = gradient(5, 4);
        assert!(img.crop(Rect::new(3, 0, 3, 1)).is_err());
        assert!(img.crop(Rect::new(0, 0, 0, 1)).is_err());
        let err = img.crop(Rect::new(0, 4, 1, 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidRegion { .. }));
    }
}
