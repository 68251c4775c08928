use std::num::NonZeroUsize;

use crate::codec::TaggedChunk;

/// Default maximum characters of encoded text per chunk.
///
/// Kept well below the byte capacity of a medium error-correction QR symbol
/// so the tagged payload always fits.
pub const DEFAULT_CHUNK_SIZE: usize = 1200;

const DEFAULT_CHUNK_SIZE_NZ: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CHUNK_SIZE) {
    Some(size) => size,
    None => panic!("default chunk size must be non-zero"),
};

/// Configuration for chunk splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    /// Maximum characters of encoded text per chunk. Default: 1200.
    pub chunk_size: NonZeroUsize,
}

impl ChunkConfig {
    /// Config with an explicit chunk size.
    pub fn with_chunk_size(chunk_size: NonZeroUsize) -> Self {
        Self { chunk_size }
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE_NZ,
        }
    }
}

/// Split encoded text into tagged chunks of at most `chunk_size` characters.
///
/// Full-size chunks are taken while more than `chunk_size` characters remain;
/// the last chunk holds the remainder. Empty text yields a single empty chunk,
/// so the result is never empty and `total` is identical on every element.
pub fn split_into_chunks(text: &str, chunk_size: NonZeroUsize) -> Vec<TaggedChunk> {
    let size = chunk_size.get();
    let mut pieces = Vec::with_capacity(text.len().div_ceil(size).max(1));
    let mut rest = text;

    // `nth(size)` is the first character past a full chunk; it only exists
    // while more than `size` characters remain.
    while let Some((split_at, _)) = rest.char_indices().nth(size) {
        let (head, tail) = rest.split_at(split_at);
        pieces.push(head);
        rest = tail;
    }
    pieces.push(rest);

    let total = pieces.len();
    pieces
        .into_iter()
        .enumerate()
        .map(|(index, data)| TaggedChunk::new(index, total, data))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_empty_text_yields_single_empty_chunk() {
        let chunks = split_into_chunks("", size(1200));
        assert_eq!(chunks, vec![TaggedChunk::new(0, 1, "")]);
    }

    #[test]
    fn test_short_text_is_one_chunk() {
        let chunks = split_into_chunks("abc", size(4));
        assert_eq!(chunks, vec![TaggedChunk::new(0, 1, "abc")]);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_empty_chunk() {
        let chunks = split_into_chunks("abcdefgh", size(4));
        assert_eq!(
            chunks,
            vec![TaggedChunk::new(0, 2, "abcd"), TaggedChunk::new(1, 2, "efgh")]
        );
    }

    #[test]
    fn test_remainder_goes_to_last_chunk() {
        let chunks = split_into_chunks("abcdefghij", size(4));
        let data: Vec<&str> = chunks.iter().map(|c| c.data.as_str()).collect();
        assert_eq!(data, ["abcd", "efgh", "ij"]);
        assert!(chunks.iter().all(|c| c.total == 3));
        assert!(chunks.iter().enumerate().all(|(i, c)| c.index == i));
    }

    #[test]
    fn test_three_thousand_byte_scenario() {
        let text = "A".repeat(4000);
        let chunks = split_into_chunks(&text, ChunkConfig::default().chunk_size);
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[3].data.len(), 400);
        for (i, chunk) in chunks.iter().enumerate() {
            assert!(chunk.to_payload().starts_with(&format!("{i}/4:")));
        }
    }

    #[test]
    fn test_splits_on_char_boundaries() {
        let chunks = split_into_chunks("ééééé", size(2));
        let data: Vec<&str> = chunks.iter().map(|c| c.data.as_str()).collect();
        assert_eq!(data, ["éé", "éé", "é"]);
    }

    #[test]
    fn test_count_is_ceiling_of_length() {
        for len in [0usize, 1, 6, 7, 8, 14, 15, 100] {
            let text = "x".repeat(len);
            assert_eq!(
                split_into_chunks(&text, size(7)).len(),
                len.div_ceil(7).max(1),
                "len {len}"
            );
        }
    }

    #[test]
    fn test_default_chunk_size() {
        assert_eq!(ChunkConfig::default().chunk_size.get(), DEFAULT_CHUNK_SIZE);
    }
}
