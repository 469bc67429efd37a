use std::fmt;
use std::path::{Path, PathBuf};

use stb_image::image::LoadResult;

#[derive(Debug)]
pub enum AssetError {
    /// The file is missing or is not a regular file
    NotFound(PathBuf),
    /// The decoder rejected the file contents
    Decode { path: PathBuf, reason: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssetError::NotFound(path) => write!(f, "sprite file {path:?} does not exist"),
            AssetError::Decode { path, reason } => {
                write!(f, "decoding sprite {path:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for AssetError {}

/// A decoded sprite image. Pixels are RGBA, row-major, top-left origin.
pub struct Sprite {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

impl Sprite {
    /// Loads and decodes an image file, forcing the result to four channels.
    /// A missing file is reported as `NotFound` before the decoder runs.
    pub fn load(path: &Path) -> Result<Sprite, AssetError> {
        if !path.is_file() {
            return Err(AssetError::NotFound(path.to_path_buf()));
        }

        let img = match stb_image::image::load_with_depth(path, 4, false) {
            LoadResult::ImageU8(img) => img,
            LoadResult::ImageF32(_) => {
                return Err(AssetError::Decode {
                    path: path.to_path_buf(),
                    reason: "HDR images are not supported".to_string(),
                })
            }
            LoadResult::Error(e) => {
                return Err(AssetError::Decode {
                    path: path.to_path_buf(),
                    reason: e,
                })
            }
        };

        Ok(Sprite {
            width: img.width,
            height: img.height,
            rgba: img.data,
        })
    }

    pub fn from_rgba(width: usize, height: usize, rgba: Vec<u8>) -> Sprite {
        assert_eq!(
            rgba.len(),
            4 * width * height,
            "pixel data does not match {width}x{height}"
        );
        Sprite {
            width,
            height,
            rgba,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmp::Bmp;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{name}-{}", std::process::id()))
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let path = temp_path("sprite-no-such-file.bmp");
        match Sprite::load(&path) {
            Err(AssetError::NotFound(reported)) => assert_eq!(reported, path),
            Err(other) => panic!("expected NotFound, got {other}"),
            Ok(_) => panic!("expected NotFound, got a sprite"),
        }
    }

    #[test]
    fn garbage_file_is_a_decode_error() {
        let path = temp_path("sprite-garbage.bmp");
        std::fs::write(&path, b"this is not an image").unwrap();
        let result = Sprite::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(AssetError::Decode { .. })));
    }

    #[test]
    fn loads_pixels_from_a_written_bmp() {
        let pixels = [
            255, 0, 0, 0, 255, 0, 0, 0, 255, //
            10, 20, 30, 40, 50, 60, 70, 80, 90,
        ];
        let path = temp_path("sprite-roundtrip.bmp");
        Bmp::from_rgb(3, 2, &pixels).to_file(&path).unwrap();

        let sprite = Sprite::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(sprite.width(), 3);
        assert_eq!(sprite.height(), 2);
        assert_eq!(sprite.rgba().len(), 4 * 3 * 2);
        // Opaque alpha is synthesized for 24-bit input
        assert_eq!(&sprite.rgba()[0..4], &[255, 0, 0, 255]);
        assert_eq!(&sprite.rgba()[4 * 4..4 * 5], &[40, 50, 60, 255]);
    }

    #[test]
    #[should_panic(expected = "pixel data does not match")]
    fn from_rgba_rejects_mismatched_sizes() {
        Sprite::from_rgba(2, 2, vec![0; 7]);
    }

    #[test]
    fn errors_name_the_offending_file() {
        let path = temp_path("sprite-named.bmp");
        let message = Sprite::load(&path).map(|_| ()).unwrap_err().to_string();
        assert!(message.contains("sprite-named.bmp"));
        assert!(message.contains("does not exist"));
    }
}
