//! File-level pipelines for carrying a file across a directory of QR images.
//!
//! This is the "just works" layer: [`encode_file`] turns a file into a
//! directory of numbered PNG symbols, [`decode_directory`] scans such a
//! directory in any order and writes the original bytes back out.
//!
//! Scanning is best-effort. Foreign images, unreadable files and malformed
//! payloads are reported as [`ScanEvent::Skipped`] and never abort a decode
//! on their own.

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod scan;

pub use config::{EncodeConfig, ScanConfig, DEFAULT_FILE_PREFIX, DEFAULT_MAX_IMAGE_SIZE};
pub use decode::{
    collect_chunks, decode_directory, inspect_directory, Collected, DecodeSummary, Inspection,
    SkippedUnit,
};
pub use encode::{encode_file, symbol_file_name, EncodeSummary};
pub use error::{Result, TransferError};
pub use scan::{scan_directory, DirectoryScan, ScanEvent, SkipReason};
