//! Best-effort scanning of a directory of symbol images.

use std::collections::VecDeque;
use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use qrxfer_chunk::{parse_payload, ChunkError, TaggedChunk};
use qrxfer_symbol::{SymbolError, SymbolScanner};
use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::error::{Result, TransferError};

const PAYLOAD_PREVIEW_CHARS: usize = 32;

/// One unit produced while scanning a directory.
#[derive(Debug)]
pub enum ScanEvent {
    /// A well-formed tagged chunk.
    Chunk { path: PathBuf, chunk: TaggedChunk },
    /// A file or payload that was skipped.
    Skipped { path: PathBuf, reason: SkipReason },
}

/// Why a file or payload was skipped. Never fatal on its own.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    /// The file could not be read.
    #[error("unreadable file: {0}")]
    Unreadable(std::io::Error),

    /// The file exceeds the configured size limit.
    #[error("file too large ({size} bytes, max {max})")]
    TooLarge { size: u64, max: u64 },

    /// The file is not a decodable raster image.
    #[error("{0}")]
    Raster(SymbolError),

    /// The image contains no readable QR symbol.
    #[error("no QR symbol found")]
    NoSymbol,

    /// A symbol payload is not a tagged chunk.
    #[error("malformed payload {payload:?}: {error}")]
    Malformed { payload: String, error: ChunkError },
}

/// Iterator over the chunks found in a directory.
///
/// Files are visited in file name order, one at a time. Each file yields
/// one event per payload it contains, or a single `Skipped` event.
pub struct DirectoryScan<S> {
    scanner: S,
    config: ScanConfig,
    paths: std::vec::IntoIter<PathBuf>,
    file_count: usize,
    pending: VecDeque<ScanEvent>,
}

/// List `dir` and prepare a scan over its image files.
///
/// Only listing the directory can fail. Entries without the configured
/// extension and subdirectories are left out silently.
pub fn scan_directory<S: SymbolScanner>(
    dir: &Path,
    scanner: S,
    config: ScanConfig,
) -> Result<DirectoryScan<S>> {
    let read_dir_error = |source| TransferError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let path = entry.path();
        if !has_extension(&path, &config.extension) {
            continue;
        }
        if entry.file_type().is_ok_and(|ft| ft.is_dir()) {
            continue;
        }
        paths.push(path);
    }
    paths.sort();

    debug!(dir = %dir.display(), files = paths.len(), "listed symbol images");

    Ok(DirectoryScan {
        scanner,
        config,
        file_count: paths.len(),
        paths: paths.into_iter(),
        pending: VecDeque::new(),
    })
}

impl<S: SymbolScanner> DirectoryScan<S> {
    /// Number of image files selected for scanning.
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    fn scan_file(&mut self, path: PathBuf) {
        let image = match read_limited(&path, self.config.max_image_size) {
            Ok(image) => image,
            Err(reason) => return self.skip(path, reason),
        };

        let payloads = match self.scanner.scan(&image) {
            Ok(payloads) => payloads,
            Err(err) => return self.skip(path, SkipReason::Raster(err)),
        };

        if payloads.is_empty() {
            return self.skip(path, SkipReason::NoSymbol);
        }

        for payload in payloads {
            match parse_payload(&payload) {
                Ok(chunk) => {
                    debug!(
                        path = %path.display(),
                        index = chunk.index,
                        total = chunk.total,
                        "scanned chunk"
                    );
                    self.pending.push_back(ScanEvent::Chunk {
                        path: path.clone(),
                        chunk,
                    });
                }
                Err(error) => self.skip(
                    path.clone(),
                    SkipReason::Malformed {
                        payload: preview(&payload),
                        error,
                    },
                ),
            }
        }
    }

    fn skip(&mut self, path: PathBuf, reason: SkipReason) {
        warn!(path = %path.display(), %reason, "skipping");
        self.pending.push_back(ScanEvent::Skipped { path, reason });
    }
}

impl<S: SymbolScanner> Iterator for DirectoryScan<S> {
    type Item = ScanEvent;

    fn next(&mut self) -> Option<ScanEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            let path = self.paths.next()?;
            self.scan_file(path);
        }
    }
}

/// True when the file name ends in `.{extension}`, case-sensitively.
///
/// A bare `.png` counts, unlike [`Path::extension`] which treats it as a stem.
fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .and_then(|name| name.strip_suffix(extension))
        .is_some_and(|stem| stem.ends_with('.'))
}

fn read_limited(path: &Path, max: u64) -> std::result::Result<Vec<u8>, SkipReason> {
    let file = File::open(path).map_err(SkipReason::Unreadable)?;
    let size = file.metadata().map_err(SkipReason::Unreadable)?.len();
    if size > max {
        return Err(SkipReason::TooLarge { size, max });
    }

    // The file may grow between the metadata call and the read.
    let mut image = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
    file.take(max.saturating_add(1))
        .read_to_end(&mut image)
        .map_err(SkipReason::Unreadable)?;
    let read = image.len() as u64;
    if read > max {
        return Err(SkipReason::TooLarge { size: read, max });
    }
    Ok(image)
}

fn preview(payload: &str) -> String {
    let mut chars = payload.chars();
    let head: String = chars.by_ref().take(PAYLOAD_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use qrxfer_symbol::Result as SymbolResult;

    use super::*;

    /// Treats file contents as newline-separated payloads.
    struct LinesScanner;

    impl SymbolScanner for LinesScanner {
        fn scan(&self, image: &[u8]) -> SymbolResult<Vec<String>> {
            Ok(String::from_utf8_lossy(image)
                .lines()
                .map(str::to_string)
                .collect())
        }
    }

    fn events(dir: &Path, config: ScanConfig) -> Vec<ScanEvent> {
        scan_directory(dir, LinesScanner, config)
            .expect("directory should list")
            .collect()
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = scan_directory(&dir.path().join("absent"), LinesScanner, ScanConfig::default());
        assert!(matches!(result, Err(TransferError::ReadDir { .. })));
    }

    #[test]
    fn test_only_png_files_are_scanned() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), "0/1:QQ==").unwrap();
        fs::write(dir.path().join("notes.txt"), "0/1:Qg==").unwrap();
        fs::write(dir.path().join("upper.PNG"), "0/1:Qw==").unwrap();
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let scan = scan_directory(dir.path(), LinesScanner, ScanConfig::default()).unwrap();
        assert_eq!(scan.file_count(), 1);
        let events: Vec<ScanEvent> = scan.collect();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            ScanEvent::Chunk { chunk, .. } if chunk.data == "QQ=="
        ));
    }

    #[test]
    fn test_extension_match_follows_file_name_suffix() {
        let png = |name: &str| has_extension(Path::new(name), "png");
        assert!(png("qr_00000.png"));
        assert!(png("archive.tar.png"));
        assert!(png(".png"));
        assert!(png("dir/.png"));
        assert!(!png("png"));
        assert!(!png("image.PNG"));
        assert!(!png("image.apng"));
        assert!(!png("image.png.bak"));
    }

    #[test]
    fn test_bare_dot_png_is_scanned() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".png"), "0/1:QQ==").unwrap();

        let scan = scan_directory(dir.path(), LinesScanner, ScanConfig::default()).unwrap();
        assert_eq!(scan.file_count(), 1);
        let events: Vec<ScanEvent> = scan.collect();
        assert!(matches!(
            events.as_slice(),
            [ScanEvent::Chunk { chunk, .. }] if chunk.data == "QQ=="
        ));
    }

    #[test]
    fn test_files_visited_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.png"), "1/2:Qg==").unwrap();
        fs::write(dir.path().join("a.png"), "0/2:QQ==").unwrap();

        let indexes: Vec<usize> = events(dir.path(), ScanConfig::default())
            .into_iter()
            .filter_map(|event| match event {
                ScanEvent::Chunk { chunk, .. } => Some(chunk.index),
                ScanEvent::Skipped { .. } => None,
            })
            .collect();
        assert_eq!(indexes, vec![0, 1]);
    }

    #[test]
    fn test_multiple_payloads_per_image() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sheet.png"), "0/3:AA\n2/3:CC\n1/3:BB").unwrap();

        let events = events(dir.path(), ScanConfig::default());
        assert_eq!(events.len(), 3);
        assert!(events
            .iter()
            .all(|e| matches!(e, ScanEvent::Chunk { chunk, .. } if chunk.total == 3)));
    }

    #[test]
    fn test_malformed_payload_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), "not-a-chunk\n0/1:QQ==").unwrap();

        let events = events(dir.path(), ScanConfig::default());
        assert_eq!(events.len(), 2);
        match &events[0] {
            ScanEvent::Skipped {
                reason: SkipReason::Malformed { payload, error },
                ..
            } => {
                assert_eq!(payload, "not-a-chunk");
                assert_eq!(*error, ChunkError::MissingDataSeparator);
            }
            other => panic!("expected malformed skip, got {other:?}"),
        }
        assert!(matches!(events[1], ScanEvent::Chunk { .. }));
    }

    #[test]
    fn test_empty_image_is_no_symbol() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blank.png"), "").unwrap();

        let events = events(dir.path(), ScanConfig::default());
        assert!(matches!(
            events.as_slice(),
            [ScanEvent::Skipped {
                reason: SkipReason::NoSymbol,
                ..
            }]
        ));
    }

    #[test]
    fn test_oversized_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("big.png"), "0/1:QUFBQUFBQUFB").unwrap();

        let config = ScanConfig {
            max_image_size: 8,
            ..ScanConfig::default()
        };
        let events = events(dir.path(), config);
        assert!(matches!(
            events.as_slice(),
            [ScanEvent::Skipped {
                reason: SkipReason::TooLarge { max: 8, .. },
                ..
            }]
        ));
    }

    #[test]
    fn test_custom_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), "0/1:QQ==").unwrap();
        fs::write(dir.path().join("b.png"), "0/1:Qg==").unwrap();

        let config = ScanConfig {
            extension: "jpg".to_string(),
            ..ScanConfig::default()
        };
        let events = events(dir.path(), config);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            ScanEvent::Chunk { chunk, .. } if chunk.data == "QQ=="
        ));
    }

    #[test]
    fn test_preview_truncates_long_payloads() {
        let long = "x".repeat(100);
        let shown = preview(&long);
        assert_eq!(shown.len(), PAYLOAD_PREVIEW_CHARS + 3);
        assert!(shown.ends_with("..."));
        assert_eq!(preview("short"), "short");
    }
}
