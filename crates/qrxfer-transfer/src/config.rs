use qrxfer_chunk::ChunkConfig;

/// File name prefix for rendered symbols.
pub const DEFAULT_FILE_PREFIX: &str = "qr_";

/// Default maximum size of a single image file considered during a scan: 16 MiB.
pub const DEFAULT_MAX_IMAGE_SIZE: u64 = 16 * 1024 * 1024;

/// Controls how a file is turned into symbols.
///
/// Rendering settings belong to the encoder passed to
/// [`encode_file`](crate::encode_file), e.g. `QrSymbolCodec::with_config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeConfig {
    /// Chunk splitting parameters.
    pub chunk: ChunkConfig,
    /// Prefix for symbol file names (`{prefix}{index:05}.png`). Default: `qr_`.
    pub file_prefix: String,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            chunk: ChunkConfig::default(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

/// Controls which directory entries are scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// File extension (without the dot) of images to scan. Matched
    /// case-sensitively. Default: `png`.
    pub extension: String,
    /// Files larger than this are skipped. Default: 16 MiB.
    pub max_image_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: "png".to_string(),
            max_image_size: DEFAULT_MAX_IMAGE_SIZE,
        }
    }
}
