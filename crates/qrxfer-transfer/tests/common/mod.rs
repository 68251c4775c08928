#![allow(dead_code)]

use std::path::Path;

use qrxfer_symbol::{Result as SymbolResult, SymbolEncoder, SymbolError, SymbolScanner};

/// Stores payload strings as plain text instead of rendering QR symbols.
///
/// An "image" holds one payload per line, so a single file can carry
/// several symbols. Non-UTF-8 content is rejected like an unknown raster.
pub struct PlainCodec;

impl SymbolEncoder for PlainCodec {
    fn encode(&self, content: &str) -> SymbolResult<Vec<u8>> {
        Ok(content.as_bytes().to_vec())
    }
}

impl SymbolScanner for PlainCodec {
    fn scan(&self, image: &[u8]) -> SymbolResult<Vec<String>> {
        let text = std::str::from_utf8(image).map_err(|err| {
            SymbolError::Image(image::ImageError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                err,
            )))
        })?;
        Ok(text.lines().map(str::to_string).collect())
    }
}

pub fn sample_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 31 + 7) % 256) as u8).collect()
}

pub fn write_input(dir: &Path, payload: &[u8]) -> std::path::PathBuf {
    let input = dir.join("input.bin");
    std::fs::write(&input, payload).expect("input should be writable");
    input
}
