//! Carry any file across a directory of QR code images.
//!
//! The file is Base64 encoded, split into chunks tagged `index/total:`, and
//! every chunk is rendered as its own QR code. Decoding scans the images in
//! any order, skips anything it cannot read, and stitches the chunks back
//! together by index.
//!
//! # Crate Structure
//!
//! - [`chunk`] — Tagged chunk wire format, splitter and reassembler
//! - [`symbol`] — QR symbol rendering and scanning adapters
//! - [`transfer`] — File and directory level encode/decode pipelines

/// Re-export chunk protocol types.
pub mod chunk {
    pub use qrxfer_chunk::*;
}

/// Re-export symbol adapter types.
pub mod symbol {
    pub use qrxfer_symbol::*;
}

/// Re-export transfer pipeline types.
pub mod transfer {
    pub use qrxfer_transfer::*;
}
