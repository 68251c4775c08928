//! Tagged chunk protocol for carrying a file across a sequence of QR codes.
//!
//! A payload is rendered as standard Base64 text, split into bounded chunks,
//! and every chunk is tagged with its position and the total chunk count:
//!
//! ```text
//! {index}/{total}:{base64 chunk}
//! ```
//!
//! Because each unit is self-describing, the decoder can collect them in any
//! order, tolerate duplicates and foreign payloads, and stitch the text back
//! together by index. Pure string processing, no I/O.

pub mod codec;
pub mod error;
pub mod reassembly;
pub mod splitter;
pub mod text;

pub use codec::{parse_payload, TaggedChunk, DATA_SEPARATOR, TOTAL_SEPARATOR};
pub use error::{ChunkError, Result};
pub use reassembly::{ChunkSet, InsertOutcome, MISSING_REPORT_LIMIT};
pub use splitter::{split_into_chunks, ChunkConfig, DEFAULT_CHUNK_SIZE};
pub use text::{decode_payload, encode_payload};
