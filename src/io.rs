//! Boundary adapters between encoded images and `Raster` buffers.
//!
//! The engine itself never touches files or formats: acquisition decodes
//! whatever the `image` crate recognizes into an RGBA raster, and export
//! encodes a raster back to PNG (the tool's download path). Both sides go
//! through the `image` crate.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::ImageError;
use image::codecs::png::PngEncoder;

use crate::raster::Raster;

/// Error type for raster acquisition and export.
#[derive(Debug)]
pub enum LensError {
    Image(ImageError),
    Io(std::io::Error),
    InvalidRaster(String),
}

impl std::fmt::Display for LensError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LensError::Image(e) => write!(f, "Image error: {}", e),
            LensError::Io(e) => write!(f, "I/O error: {}", e),
            LensError::InvalidRaster(e) => write!(f, "Invalid raster: {}", e),
        }
    }
}

impl std::error::Error for LensError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LensError::Image(e) => Some(e),
            LensError::Io(e) => Some(e),
            LensError::InvalidRaster(_) => None,
        }
    }
}

impl From<ImageError> for LensError {
    fn from(e: ImageError) -> Self {
        LensError::Image(e)
    }
}

impl From<std::io::Error> for LensError {
    fn from(e: std::io::Error) -> Self {
        LensError::Io(e)
    }
}

/// Decodes an image file into an RGBA raster.
pub fn load_raster<P: AsRef<Path>>(path: P) -> Result<Raster, LensError> {
    let img = image::open(path)?;
    Ok(Raster::from_rgba_image(&img.to_rgba8()))
}

/// Decodes an in-memory image (an upload buffer) into an RGBA raster.
pub fn load_raster_from_bytes(bytes: &[u8]) -> Result<Raster, LensError> {
    let img = image::load_from_memory(bytes)?;
    Ok(Raster::from_rgba_image(&img.to_rgba8()))
}

/// Encodes a raster as PNG into an in-memory buffer.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, LensError> {
    let mut buf = Vec::new();
    write_png(raster, &mut buf)?;
    Ok(buf)
}

/// Encodes and writes a raster as a PNG file.
pub fn save_png<P: AsRef<Path>>(raster: &Raster, path: P) -> Result<(), LensError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_png(raster, &mut writer)
}

fn write_png<W: std::io::Write>(raster: &Raster, writer: W) -> Result<(), LensError> {
    if raster.is_empty() {
        return Err(LensError::InvalidRaster(
            "cannot encode a zero-sized raster".to_string(),
        ));
    }
    let encoder = PngEncoder::new(writer);
    #[allow(deprecated)]
    encoder.encode(
        raster.as_raw(),
        raster.width(),
        raster.height(),
        image::ColorType::Rgba8,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_round_trip_preserves_pixels() {
        let mut raster = Raster::new(3, 2);
        raster.put_pixel(0, 0, 10.0, 20.0, 30.0, 255.0);
        raster.put_pixel(2, 1, 200.0, 150.0, 100.0, 255.0);
        let bytes = encode_png(&raster).expect("encode");
        let decoded = load_raster_from_bytes(&bytes).expect("decode");
        assert_eq!(decoded, raster);
    }

    #[test]
    fn empty_raster_cannot_be_encoded() {
        let err = encode_png(&Raster::new(0, 0)).unwrap_err();
        assert!(matches!(err, LensError::InvalidRaster(_)));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = load_raster_from_bytes(&[0x00, 0x01, 0x02, 0x03]).unwrap_err();
        assert!(matches!(err, LensError::Image(_)));
    }

    #[test]
    fn missing_file_reports_an_error() {
        assert!(load_raster("/nonexistent/surely-missing.png").is_err());
    }
}
