/// Errors that can occur while rendering or scanning QR symbols.
#[derive(Debug, thiserror::Error)]
pub enum SymbolError {
    /// The content could not be encoded as a QR symbol (e.g. too long for
    /// the configured error-correction level).
    #[error("failed to encode QR symbol ({len} bytes): {source}")]
    Encode {
        len: usize,
        source: qrcode::types::QrError,
    },

    /// The rendered symbol could not be written as PNG.
    #[error("failed to write symbol image: {0}")]
    Render(#[source] image::ImageError),

    /// The input bytes are not a recognized raster image.
    #[error("failed to decode raster image: {0}")]
    Image(#[source] image::ImageError),
}

pub type Result<T> = std::result::Result<T, SymbolError>;

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;

    use super::*;

    #[test]
    fn test_image_errors_keep_their_source() {
        let render = SymbolError::Render(image::ImageError::IoError(io::Error::other("disk full")));
        let source = render.source().expect("render error should chain its cause");
        assert!(source.to_string().contains("disk full"));

        let raster = SymbolError::Image(image::ImageError::IoError(io::Error::other("bad header")));
        assert!(raster.source().is_some());
    }
}
