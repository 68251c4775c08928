use crate::error::Result;

/// Renders a payload string into an encoded raster image.
pub trait SymbolEncoder {
    /// Encode `content` as one symbol and return the image bytes (PNG).
    fn encode(&self, content: &str) -> Result<Vec<u8>>;
}

/// Extracts payload strings from an encoded raster image.
pub trait SymbolScanner {
    /// Scan `image` and return every payload found.
    ///
    /// Zero payloads is not an error: the image may not contain a symbol.
    /// A single image may also carry several symbols.
    fn scan(&self, image: &[u8]) -> Result<Vec<String>>;
}

impl<T: SymbolEncoder + ?Sized> SymbolEncoder for &T {
    fn encode(&self, content: &str) -> Result<Vec<u8>> {
        (**self).encode(content)
    }
}

impl<T: SymbolScanner + ?Sized> SymbolScanner for &T {
    fn scan(&self, image: &[u8]) -> Result<Vec<String>> {
        (**self).scan(image)
    }
}
