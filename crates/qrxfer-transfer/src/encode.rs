use std::fs;
use std::path::{Path, PathBuf};

use qrxfer_chunk::{encode_payload, split_into_chunks};
use qrxfer_symbol::SymbolEncoder;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::EncodeConfig;
use crate::error::{Result, TransferError};

/// Result of a successful encode run.
#[derive(Debug, Clone, Serialize)]
pub struct EncodeSummary {
    /// Directory the symbols were written to.
    pub output_dir: PathBuf,
    /// Number of chunks, one symbol each.
    pub total: usize,
    /// Size of the input file in bytes.
    pub bytes: usize,
    /// Length of the Base64 text that was split.
    pub encoded_len: usize,
    /// Written symbol files, in index order.
    pub files: Vec<PathBuf>,
}

/// File name of the symbol holding chunk `index`.
pub fn symbol_file_name(prefix: &str, index: usize) -> String {
    format!("{prefix}{index:05}.png")
}

/// Read `input`, split it into tagged chunks and write one symbol per chunk
/// into `output_dir`, creating the directory if needed.
///
/// The first failure aborts the run; symbols already written stay on disk.
pub fn encode_file<E>(
    input: &Path,
    output_dir: &Path,
    encoder: &E,
    config: &EncodeConfig,
) -> Result<EncodeSummary>
where
    E: SymbolEncoder + ?Sized,
{
    let payload = fs::read(input).map_err(|source| TransferError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let text = encode_payload(&payload);
    let chunks = split_into_chunks(&text, config.chunk.chunk_size);
    let total = chunks.len();

    fs::create_dir_all(output_dir).map_err(|source| TransferError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::with_capacity(total);
    for chunk in &chunks {
        let image = encoder
            .encode(&chunk.to_payload())
            .map_err(|source| TransferError::Symbol {
                index: chunk.index,
                source,
            })?;

        let path = output_dir.join(symbol_file_name(&config.file_prefix, chunk.index));
        fs::write(&path, &image).map_err(|source| TransferError::WriteSymbol {
            path: path.clone(),
            source,
        })?;

        debug!(
            index = chunk.index,
            total,
            path = %path.display(),
            size = image.len(),
            "wrote symbol"
        );
        files.push(path);
    }

    info!(
        input = %input.display(),
        output_dir = %output_dir.display(),
        total,
        "encoded file into symbols"
    );

    Ok(EncodeSummary {
        output_dir: output_dir.to_path_buf(),
        total,
        bytes: payload.len(),
        encoded_len: text.len(),
        files,
    })
}
