use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::QrCode;
use tracing::{debug, warn};

use crate::config::SymbolConfig;
use crate::error::{Result, SymbolError};
use crate::symbol::{SymbolEncoder, SymbolScanner};

/// QR codec backed by `qrcode` for rendering and `rqrr` for detection.
#[derive(Debug, Clone, Default)]
pub struct QrSymbolCodec {
    config: SymbolConfig,
}

impl QrSymbolCodec {
    /// Create a codec with default configuration.
    pub fn new() -> Self {
        Self::with_config(SymbolConfig::default())
    }

    /// Create a codec with explicit configuration.
    pub fn with_config(config: SymbolConfig) -> Self {
        Self { config }
    }

    /// Current symbol configuration.
    pub fn config(&self) -> &SymbolConfig {
        &self.config
    }
}

impl SymbolEncoder for QrSymbolCodec {
    fn encode(&self, content: &str) -> Result<Vec<u8>> {
        let code = QrCode::with_error_correction_level(
            content.as_bytes(),
            self.config.error_correction.as_ec_level(),
        )
        .map_err(|source| SymbolError::Encode {
            len: content.len(),
            source,
        })?;

        let size = self.config.min_pixel_size;
        let rendered = code
            .render::<Luma<u8>>()
            .quiet_zone(self.config.quiet_zone)
            .min_dimensions(size, size)
            .build();

        let mut png = Vec::new();
        rendered
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(SymbolError::Render)?;

        debug!(
            version = ?code.version(),
            width = rendered.width(),
            bytes = png.len(),
            "rendered QR symbol"
        );
        Ok(png)
    }
}

impl SymbolScanner for QrSymbolCodec {
    fn scan(&self, image: &[u8]) -> Result<Vec<String>> {
        let gray = image::load_from_memory(image)
            .map_err(SymbolError::Image)?
            .to_luma8();

        let (width, height) = gray.dimensions();
        let mut prepared =
            rqrr::PreparedImage::prepare_from_greyscale(width as usize, height as usize, |x, y| {
                gray.get_pixel(x as u32, y as u32).0[0]
            });

        let grids = prepared.detect_grids();
        let mut payloads = Vec::with_capacity(grids.len());
        for grid in grids {
            match grid.decode() {
                Ok((_meta, content)) => payloads.push(content),
                Err(err) => warn!(error = %err, "skipping undecodable QR grid"),
            }
        }

        debug!(found = payloads.len(), "scanned raster image");
        Ok(payloads)
    }
}
