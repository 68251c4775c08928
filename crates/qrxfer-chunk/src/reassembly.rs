//! Index-keyed reassembly of tagged chunks.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::codec::TaggedChunk;
use crate::error::{ChunkError, Result};
use crate::text::decode_payload;

/// Default cap on how many missing indexes a report lists.
pub const MISSING_REPORT_LIMIT: usize = 64;

/// What happened to the slot a chunk was stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// First chunk seen for this index.
    New,
    /// Same index with identical data; nothing changed.
    Duplicate,
    /// Same index with different data; the newer data replaced the old.
    Replaced,
}

/// Chunks collected during one decode, keyed by index.
///
/// Arrival order is irrelevant: the text is assembled by walking indexes
/// `0..total` in ascending order. The first observed `total` wins; later
/// chunks that disagree are counted and logged but still stored.
#[derive(Debug, Default, Clone)]
pub struct ChunkSet {
    chunks: BTreeMap<usize, String>,
    observed_total: Option<usize>,
    inconsistent_totals: usize,
    replaced: usize,
}

impl ChunkSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a chunk at its index, last write wins.
    pub fn insert(&mut self, chunk: TaggedChunk) -> InsertOutcome {
        let TaggedChunk { index, total, data } = chunk;

        match self.observed_total {
            None => self.observed_total = Some(total),
            Some(expected) if expected != total => {
                self.inconsistent_totals += 1;
                warn!(index, expected, declared = total, "inconsistent total chunk count");
            }
            Some(_) => {}
        }

        match self.chunks.insert(index, data) {
            None => {
                debug!(index, total, "stored chunk");
                InsertOutcome::New
            }
            Some(previous) if previous == self.chunks[&index] => InsertOutcome::Duplicate,
            Some(_) => {
                self.replaced += 1;
                warn!(index, "duplicate chunk with different data, keeping latest");
                InsertOutcome::Replaced
            }
        }
    }

    /// The first total chunk count seen, if any chunk arrived.
    pub fn observed_total(&self) -> Option<usize> {
        self.observed_total
    }

    /// Distinct indexes stored inside `[0, total)`.
    pub fn received(&self) -> usize {
        match self.usable_total() {
            Some(total) => self.chunks.range(..total).count(),
            None => 0,
        }
    }

    /// Number of indexes inside `[0, total)` not yet received.
    pub fn missing_count(&self) -> usize {
        self.usable_total()
            .map_or(0, |total| total - self.received())
    }

    /// Up to `limit` indexes inside `[0, total)` not yet received, ascending.
    ///
    /// Walks the stored indexes rather than the declared range, so the cost
    /// is bounded by the chunks held and `limit`, never by `total`.
    /// Empty when no usable total was observed.
    pub fn missing(&self, limit: usize) -> Vec<usize> {
        let Some(total) = self.usable_total() else {
            return Vec::new();
        };

        let mut gaps = Vec::new();
        let mut next = 0;
        for &index in self.chunks.range(..total).map(|(index, _)| index) {
            gaps.extend((next..index).take(limit - gaps.len()));
            if gaps.len() == limit {
                return gaps;
            }
            next = index + 1;
        }
        gaps.extend((next..total).take(limit - gaps.len()));
        gaps
    }

    /// Stored indexes at or beyond the observed total; never assembled.
    pub fn out_of_range(&self) -> Vec<usize> {
        match self.observed_total {
            Some(total) => self.chunks.range(total..).map(|(index, _)| *index).collect(),
            None => Vec::new(),
        }
    }

    /// True when every index in `[0, total)` is present.
    pub fn is_complete(&self) -> bool {
        self.usable_total()
            .is_some_and(|total| self.received() == total)
    }

    /// Chunks whose declared total disagreed with the first observation.
    pub fn inconsistent_totals(&self) -> usize {
        self.inconsistent_totals
    }

    /// Inserts that overwrote different data at an existing index.
    pub fn replaced(&self) -> usize {
        self.replaced
    }

    /// Concatenate chunk data in ascending index order.
    ///
    /// Fails with [`ChunkError::MissingTotal`] when no chunk arrived or the
    /// observed total is zero, and with [`ChunkError::MissingChunk`] naming the
    /// lowest absent index.
    pub fn assemble(&self) -> Result<String> {
        let total = self.usable_total().ok_or(ChunkError::MissingTotal)?;

        let mut text = String::with_capacity(self.chunks.values().map(String::len).sum());
        for index in 0..total {
            let data = self
                .chunks
                .get(&index)
                .ok_or(ChunkError::MissingChunk(index))?;
            text.push_str(data);
        }
        Ok(text)
    }

    /// Assemble the text and decode it back into payload bytes.
    pub fn into_payload(self) -> Result<Vec<u8>> {
        let text = self.assemble()?;
        decode_payload(&text)
    }

    fn usable_total(&self) -> Option<usize> {
        self.observed_total.filter(|total| *total > 0)
    }
}

impl Extend<TaggedChunk> for ChunkSet {
    fn extend<I: IntoIterator<Item = TaggedChunk>>(&mut self, iter: I) {
        for chunk in iter {
            self.insert(chunk);
        }
    }
}

impl FromIterator<TaggedChunk> for ChunkSet {
    fn from_iter<I: IntoIterator<Item = TaggedChunk>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
