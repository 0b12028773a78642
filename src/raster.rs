//! Flat RGBA pixel buffer shared by the effects engine and the IO adapters.
//!
//! A `Raster` is the same row-major `Vec<u8>` layout a canvas exposes: four
//! bytes per pixel, R G B A, row after row. Two rasters matter to a host:
//! the *original* captured once per image load and never mutated, and the
//! *output* a render allocates fresh each time.

use image::RgbaImage;

/// Quantize an effect-math channel value to 8-bit storage.
///
/// This is the only place channel values are clamped: the effect math runs
/// unclamped in `f32`, so overflow saturates (and non-finite values collapse
/// to 0 through the cast) at the moment of the 8-bit store.
pub(crate) fn quantize(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// A width × height grid of RGBA pixels backed by a flat byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Creates a fully transparent (all-zero) raster.
    ///
    /// A zero-sized raster is a valid value; every operation on it is a
    /// no-op.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * 4],
        }
    }

    /// Wraps a raw RGBA byte buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize * 4,
            "Buffer length must be width * height * 4"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Copies pixel data out of an `image` crate RGBA buffer.
    pub fn from_rgba_image(img: &RgbaImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            data: img.as_raw().clone(),
        }
    }

    /// Converts into an `image` crate RGBA buffer (for encoding, display
    /// upload, etc.). Returns `None` for a zero-sized raster.
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        RgbaImage::from_raw(self.width, self.height, self.data.clone())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The underlying RGBA byte buffer, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the raster, returning the byte buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// RGBA of the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Red channel of the pixel at (x, y).
    pub fn red(&self, x: u32, y: u32) -> u8 {
        self.data[self.index(x, y)]
    }

    /// Stores an effect-math pixel value, applying the quantization policy
    /// per channel.
    pub fn put_pixel(&mut self, x: u32, y: u32, r: f32, g: f32, b: f32, a: f32) {
        let i = self.index(x, y);
        self.data[i] = quantize(r);
        self.data[i + 1] = quantize(g);
        self.data[i + 2] = quantize(b);
        self.data[i + 3] = quantize(a);
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "Pixel out of bounds");
        (y as usize * self.width as usize + x as usize) * 4
    }
}
