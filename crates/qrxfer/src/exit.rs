use std::fmt;
use std::io;

use qrxfer_transfer::TransferError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
/// Input was read but cannot be turned into the expected output.
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

fn io_code(err: &io::Error) -> i32 {
    match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound | io::ErrorKind::AlreadyExists | io::ErrorKind::NotADirectory => {
            FAILURE
        }
        _ => INTERNAL,
    }
}

pub fn transfer_error(context: &str, err: TransferError) -> CliError {
    let code = match &err {
        TransferError::ReadInput { source, .. }
        | TransferError::CreateDir { source, .. }
        | TransferError::WriteSymbol { source, .. }
        | TransferError::ReadDir { source, .. }
        | TransferError::WriteOutput { source, .. } => io_code(source),
        TransferError::Symbol { .. } | TransferError::Chunk(_) => DATA_INVALID,
    };
    CliError::new(code, format!("{context}: {err}"))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use qrxfer_chunk::ChunkError;

    use super::*;

    #[test]
    fn missing_chunk_is_data_invalid() {
        let err = transfer_error(
            "decode failed",
            TransferError::Chunk(ChunkError::MissingChunk(3)),
        );
        assert_eq!(err.code, DATA_INVALID);
        assert_eq!(err.to_string(), "decode failed: reassembly failed: chunk 3 is missing");
    }

    #[test]
    fn io_errors_keep_path_and_kind() {
        let err = transfer_error(
            "encode failed",
            TransferError::ReadInput {
                path: PathBuf::from("/nope/input.bin"),
                source: io::Error::from(io::ErrorKind::NotFound),
            },
        );
        assert_eq!(err.code, FAILURE);
        assert!(err.message.contains("/nope/input.bin"));

        let err = transfer_error(
            "decode failed",
            TransferError::WriteOutput {
                path: PathBuf::from("/root/out.bin"),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            },
        );
        assert_eq!(err.code, PERMISSION_DENIED);
    }
}
