use std::fmt;
use std::str::FromStr;

use crate::error::{ChunkError, Result};

/// Separates `index` from `total` inside the metadata.
pub const TOTAL_SEPARATOR: char = '/';

/// Separates the metadata from the chunk data.
pub const DATA_SEPARATOR: char = ':';

/// One wire unit: a chunk of encoded text tagged with its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedChunk {
    /// Zero-based position of this chunk.
    pub index: usize,
    /// Number of chunks the payload was split into.
    pub total: usize,
    /// The chunk text, carried verbatim.
    pub data: String,
}

impl TaggedChunk {
    /// Create a new tagged chunk.
    pub fn new(index: usize, total: usize, data: impl Into<String>) -> Self {
        Self {
            index,
            total,
            data: data.into(),
        }
    }

    /// Serialize into the payload string embedded in a QR symbol.
    ///
    /// Wire format:
    /// ```text
    /// ┌─────────┬───┬─────────┬───┬──────────────────────┐
    /// │ index   │ / │ total   │ : │ data (verbatim)      │
    /// │ decimal │   │ decimal │   │                      │
    /// └─────────┴───┴─────────┴───┴──────────────────────┘
    /// ```
    pub fn to_payload(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TaggedChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{TOTAL_SEPARATOR}{}{DATA_SEPARATOR}{}",
            self.index, self.total, self.data
        )
    }
}

impl FromStr for TaggedChunk {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self> {
        parse_payload(s)
    }
}

/// Parse a QR payload string into a tagged chunk.
///
/// Splits once on the first `:` and then once on the first `/` of the
/// metadata. Everything after the first `:` is chunk data, including any
/// further separators.
pub fn parse_payload(payload: &str) -> Result<TaggedChunk> {
    let (meta, data) = payload
        .split_once(DATA_SEPARATOR)
        .ok_or(ChunkError::MissingDataSeparator)?;

    let (index, total) = meta
        .split_once(TOTAL_SEPARATOR)
        .ok_or_else(|| ChunkError::MissingTotalSeparator(meta.to_string()))?;

    let index = parse_decimal(index).ok_or_else(|| ChunkError::InvalidIndex(index.to_string()))?;
    let total = parse_decimal(total).ok_or_else(|| ChunkError::InvalidTotal(total.to_string()))?;

    Ok(TaggedChunk {
        index,
        total,
        data: data.to_string(),
    })
}

fn parse_decimal(field: &str) -> Option<usize> {
    // `usize::from_str` also takes a leading '+', which the format never emits.
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
