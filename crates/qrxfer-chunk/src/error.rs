/// Errors that can occur while parsing or reassembling tagged chunks.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChunkError {
    /// The payload has no `:` between metadata and chunk data.
    #[error("missing ':' between chunk metadata and data")]
    MissingDataSeparator,

    /// The metadata has no `/` between index and total.
    #[error("missing '/' in chunk metadata {0:?}")]
    MissingTotalSeparator(String),

    /// The index field is not a non-negative decimal integer.
    #[error("chunk index is not a number: {0:?}")]
    InvalidIndex(String),

    /// The total field is not a non-negative decimal integer.
    #[error("chunk total is not a number: {0:?}")]
    InvalidTotal(String),

    /// No chunk ever declared a usable total chunk count.
    #[error("no chunk declared a total chunk count")]
    MissingTotal,

    /// A chunk index inside `[0, total)` was never received.
    #[error("chunk {0} is missing")]
    MissingChunk(usize),

    /// The reassembled text is not valid standard Base64.
    #[error("malformed base64 payload: {0}")]
    MalformedEncoding(#[from] base64::DecodeError),
}

pub type Result<T> = std::result::Result<T, ChunkError>;
