/// Default minimum width and height of a rendered symbol, in pixels.
pub const DEFAULT_MIN_PIXEL_SIZE: u32 = 256;

/// QR error-correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    /// Recovers ~7% of codewords.
    Low,
    /// Recovers ~15% of codewords.
    #[default]
    Medium,
    /// Recovers ~25% of codewords.
    Quartile,
    /// Recovers ~30% of codewords.
    High,
}

impl ErrorCorrection {
    pub(crate) fn as_ec_level(self) -> qrcode::EcLevel {
        match self {
            ErrorCorrection::Low => qrcode::EcLevel::L,
            ErrorCorrection::Medium => qrcode::EcLevel::M,
            ErrorCorrection::Quartile => qrcode::EcLevel::Q,
            ErrorCorrection::High => qrcode::EcLevel::H,
        }
    }
}

/// Controls how symbols are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolConfig {
    /// Error-correction level. Default: medium.
    pub error_correction: ErrorCorrection,
    /// Minimum image width and height in pixels. Default: 256.
    pub min_pixel_size: u32,
    /// Surround the symbol with the standard quiet zone. Default: true.
    pub quiet_zone: bool,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::default(),
            min_pixel_size: DEFAULT_MIN_PIXEL_SIZE,
            quiet_zone: true,
        }
    }
}
