use anyhow::{Context, Result};
use std::fmt;

/// Glyph name shown wherever an image could not be loaded.
pub const PLACEHOLDER_GLYPH: &str = "photo";

/// A fetched image, or the placeholder when fetching or decoding failed.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Image {
    Loaded {
        bytes: Vec<u8>,
        format: ::image::ImageFormat,
        width: u32,
        height: u32,
    },
    #[default]
    Placeholder,
}

impl Image {
    pub fn placeholder() -> Self {
        Image::Placeholder
    }

    /// Decodes the bytes to make sure they really are an image.
    pub fn decode(bytes: Vec<u8>) -> Result<Self> {
        let format = ::image::guess_format(&bytes).context("unrecognized image format")?;
        let decoded = ::image::load_from_memory_with_format(&bytes, format).context("image failed to decode")?;
        Ok(Image::Loaded { width: decoded.width(), height: decoded.height(), format, bytes })
    }

    /// Like `decode`, substituting the placeholder on failure.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match Self::decode(bytes) {
            Ok(img) => img,
            Err(e) => {
                tracing::debug!(error = %format!("{e:#}"), "bytes are not a usable image");
                Image::Placeholder
            }
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Image::Placeholder)
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Image::Loaded { bytes, .. } => Some(bytes),
            Image::Placeholder => None,
        }
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            Image::Loaded { width, height, .. } => Some((*width, *height)),
            Image::Placeholder => None,
        }
    }

    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Image::Loaded { format, .. } => format.extensions_str().first().copied(),
            Image::Placeholder => None,
        }
    }
}

// Keep raw bytes out of debug output.
impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Image::Loaded { bytes, format, width, height } => f
                .debug_struct("Loaded")
                .field("format", format)
                .field("width", width)
                .field("height", height)
                .field("len", &bytes.len())
                .finish(),
            Image::Placeholder => f.write_str("Placeholder"),
        }
    }
}

/// One-word label used by the text views, e.g. `[png 70x70]` or `[photo]`.
impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Image::Loaded { width, height, .. } => {
                write!(f, "[{} {}x{}]", self.extension().unwrap_or("img"), width, height)
            }
            Image::Placeholder => write!(f, "[{}]", PLACEHOLDER_GLYPH),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ::image::{ImageBuffer, ImageFormat, Rgb};
    use std::io::Cursor;

    fn encoded(w: u32, h: u32, format: ImageFormat) -> Vec<u8> {
        let buf: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_pixel(w, h, Rgb([200, 120, 40]));
        let mut out = Cursor::new(Vec::new());
        buf.write_to(&mut out, format).unwrap();
        out.into_inner()
    }

    pub(crate) fn tiny_png(w: u32, h: u32) -> Vec<u8> {
        encoded(w, h, ImageFormat::Png)
    }

    #[test]
    fn valid_png_loads_with_dimensions() {
        let img = Image::from_bytes(tiny_png(3, 2));
        assert!(!img.is_placeholder());
        assert_eq!(img.dimensions(), Some((3, 2)));
        assert_eq!(img.extension(), Some("png"));
        assert_eq!(img.to_string(), "[png 3x2]");
    }

    #[test]
    fn bmp_and_tiff_load() {
        let bmp = Image::from_bytes(encoded(2, 5, ImageFormat::Bmp));
        assert_eq!(bmp.dimensions(), Some((2, 5)));
        assert_eq!(bmp.extension(), Some("bmp"));

        let tiff = Image::from_bytes(encoded(6, 1, ImageFormat::Tiff));
        assert_eq!(tiff.dimensions(), Some((6, 1)));
        assert!(!tiff.is_placeholder());
    }

    #[test]
    fn garbage_becomes_placeholder() {
        let img = Image::from_bytes(b"<html>not found</html>".to_vec());
        assert!(img.is_placeholder());
        assert_eq!(img.to_string(), "[photo]");
        assert!(img.bytes().is_none());
    }

    #[test]
    fn truncated_png_is_rejected() {
        let mut bytes = tiny_png(4, 4);
        bytes.truncate(20);
        assert!(Image::decode(bytes).is_err());
    }

    #[test]
    fn empty_body_is_placeholder() {
        assert_eq!(Image::from_bytes(Vec::new()), Image::Placeholder);
    }
}
