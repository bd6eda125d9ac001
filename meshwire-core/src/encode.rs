/// Image encoders that persist a finished frame buffer
use std::path::Path;

use image::{ExtendedColorType, ImageError, ImageFormat};

use crate::error::EncodeError;
use crate::raster::CHANNELS;

/// Error codes reported by [`PngEncoder`]
pub mod codes {
    pub const PARAMETER: i32 = 1;
    pub const LIMITS: i32 = 2;
    pub const UNSUPPORTED: i32 = 3;
    pub const ENCODING: i32 = 4;
    pub const DECODING: i32 = 5;
    pub const IO: i32 = 6;
}

/// Writes raw RGBA8 pixels to an image file
pub trait ImageEncoder {
    fn encode(&self, path: &Path, pixels: &[u8], width: u32, height: u32)
        -> Result<(), EncodeError>;
}

/// PNG output through the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl ImageEncoder for PngEncoder {
    fn encode(
        &self,
        path: &Path,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<(), EncodeError> {
        let expected = width as usize * height as usize * CHANNELS;
        if pixels.len() != expected {
            return Err(EncodeError::new(
                codes::PARAMETER,
                format!(
                    "pixel buffer holds {} bytes but {}x{} RGBA needs {}",
                    pixels.len(),
                    width,
                    height,
                    expected
                ),
            ));
        }

        image::save_buffer_with_format(
            path,
            pixels,
            width,
            height,
            ExtendedColorType::Rgba8,
            ImageFormat::Png,
        )?;
        Ok(())
    }
}

impl From<ImageError> for EncodeError {
    fn from(err: ImageError) -> Self {
        let code = match &err {
            ImageError::Parameter(_) => codes::PARAMETER,
            ImageError::Limits(_) => codes::LIMITS,
            ImageError::Unsupported(_) => codes::UNSUPPORTED,
            ImageError::Encoding(_) => codes::ENCODING,
            ImageError::Decoding(_) => codes::DECODING,
            ImageError::IoError(_) => codes::IO,
        };
        EncodeError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{FrameBuffer, WHITE};
    use std::{fs, io};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("meshwire-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_png_round_trip() {
        let mut fb = FrameBuffer::new(5, 3);
        fb.draw_line(0, 1, 4, 1, WHITE);
        let path = temp_path("round_trip.png");

        PngEncoder
            .encode(&path, fb.pixels(), fb.width(), fb.height())
            .unwrap();
        let decoded = image::open(&path).unwrap().to_rgba8();
        fs::remove_file(&path).ok();

        assert_eq!(decoded.dimensions(), (5, 3));
        assert_eq!(decoded.as_raw().as_slice(), fb.pixels());
    }

    #[test]
    fn test_buffer_size_mismatch() {
        let err = PngEncoder
            .encode(&temp_path("never_written.png"), &[0; 12], 2, 2)
            .unwrap_err();
        assert_eq!(err.code(), codes::PARAMETER);
        assert!(err.message().contains("12 bytes"));
    }

    #[test]
    fn test_unwritable_path() {
        let fb = FrameBuffer::new(2, 2);
        let path = Path::new("/nonexistent/meshwire/output.png");
        let err = PngEncoder
            .encode(path, fb.pixels(), 2, 2)
            .unwrap_err();
        assert_eq!(err.code(), codes::IO);
        assert!(!err.message().is_empty());
    }

    #[test]
    fn test_error_code_mapping() {
        let io = ImageError::IoError(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(EncodeError::from(io).code(), codes::IO);
    }
}
