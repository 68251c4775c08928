use std::fs;
use std::path::{Path, PathBuf};

use qrxfer_chunk::{ChunkSet, MISSING_REPORT_LIMIT};
use qrxfer_symbol::SymbolScanner;
use serde::Serialize;
use tracing::info;

use crate::config::ScanConfig;
use crate::error::{Result, TransferError};
use crate::scan::{scan_directory, ScanEvent};

/// A file or payload left out of reassembly, with a readable reason.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkippedUnit {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything gathered from one pass over a directory.
#[derive(Debug)]
pub struct Collected {
    /// Chunks keyed by index.
    pub chunks: ChunkSet,
    /// Units that were skipped.
    pub skipped: Vec<SkippedUnit>,
    /// Image files scanned.
    pub files: usize,
}

/// Result of a successful decode run.
#[derive(Debug, Clone, Serialize)]
pub struct DecodeSummary {
    /// File the payload was written to.
    pub output: PathBuf,
    /// Total chunk count used for reassembly.
    pub total: usize,
    /// Image files scanned.
    pub files: usize,
    /// Units skipped during the scan.
    pub skipped: usize,
    /// Size of the reconstructed payload in bytes.
    pub bytes: usize,
}

/// Reassembly status of a directory, without writing anything.
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub directory: PathBuf,
    pub files: usize,
    /// First declared total, if any chunk was found.
    pub total: Option<usize>,
    /// Distinct indexes received inside `[0, total)`.
    pub received: usize,
    /// Number of indexes inside `[0, total)` not received.
    pub missing_count: usize,
    /// The lowest missing indexes, at most [`MISSING_REPORT_LIMIT`].
    pub missing: Vec<usize>,
    /// Indexes at or beyond the total; ignored by reassembly.
    pub out_of_range: Vec<usize>,
    pub inconsistent_totals: usize,
    /// Duplicate indexes whose data differed.
    pub replaced: usize,
    pub skipped: Vec<SkippedUnit>,
    pub complete: bool,
}

/// Scan `dir` and fold every chunk found into a [`ChunkSet`].
pub fn collect_chunks<S: SymbolScanner>(
    dir: &Path,
    scanner: S,
    config: ScanConfig,
) -> Result<Collected> {
    let scan = scan_directory(dir, scanner, config)?;
    let files = scan.file_count();

    let mut chunks = ChunkSet::new();
    let mut skipped = Vec::new();
    for event in scan {
        match event {
            ScanEvent::Chunk { chunk, .. } => {
                chunks.insert(chunk);
            }
            ScanEvent::Skipped { path, reason } => skipped.push(SkippedUnit {
                path,
                reason: reason.to_string(),
            }),
        }
    }

    Ok(Collected {
        chunks,
        skipped,
        files,
    })
}

/// Scan `input_dir`, reassemble the payload and write it to `output`.
///
/// The payload is fully reconstructed in memory before `output` is touched,
/// so a reassembly failure leaves no partial file behind.
pub fn decode_directory<S: SymbolScanner>(
    input_dir: &Path,
    output: &Path,
    scanner: S,
    config: ScanConfig,
) -> Result<DecodeSummary> {
    let Collected {
        chunks,
        skipped,
        files,
    } = collect_chunks(input_dir, scanner, config)?;

    let total = chunks.observed_total().unwrap_or(0);
    let payload = chunks.into_payload()?;

    fs::write(output, &payload).map_err(|source| TransferError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        output = %output.display(),
        total,
        files,
        skipped = skipped.len(),
        bytes = payload.len(),
        "restored file from symbols"
    );

    Ok(DecodeSummary {
        output: output.to_path_buf(),
        total,
        files,
        skipped: skipped.len(),
        bytes: payload.len(),
    })
}

/// Scan `dir` and report which chunks are present, missing or suspicious.
pub fn inspect_directory<S: SymbolScanner>(
    dir: &Path,
    scanner: S,
    config: ScanConfig,
) -> Result<Inspection> {
    let Collected {
        chunks,
        skipped,
        files,
    } = collect_chunks(dir, scanner, config)?;

    Ok(Inspection {
        directory: dir.to_path_buf(),
        files,
        total: chunks.observed_total(),
        received: chunks.received(),
        missing_count: chunks.missing_count(),
        missing: chunks.missing(MISSING_REPORT_LIMIT),
        out_of_range: chunks.out_of_range(),
        inconsistent_totals: chunks.inconsistent_totals(),
        replaced: chunks.replaced(),
        skipped,
        complete: chunks.is_complete(),
    })
}
