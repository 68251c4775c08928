use std::path::PathBuf;

/// Errors that abort an encode or decode run.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// The input file could not be read.
    #[error("failed to read input {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A chunk could not be rendered as a symbol.
    #[error("failed to generate symbol for chunk {index}: {source}")]
    Symbol {
        index: usize,
        source: qrxfer_symbol::SymbolError,
    },

    /// A rendered symbol could not be written.
    #[error("failed to write symbol {path}: {source}")]
    WriteSymbol {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input directory could not be listed.
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reassembly or Base64 decoding failed.
    #[error("reassembly failed: {0}")]
    Chunk(#[from] qrxfer_chunk::ChunkError),

    /// The reconstructed payload could not be written.
    #[error("failed to write output {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TransferError>;
