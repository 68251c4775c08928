//! QR symbol adapters.
//!
//! Thin boundary between the chunk protocol and the QR/raster libraries:
//! - [`SymbolEncoder`] renders one payload string into PNG bytes
//! - [`SymbolScanner`] finds every QR payload string in raster bytes
//!
//! [`QrSymbolCodec`] implements both on top of `qrcode`, `rqrr` and `image`.
//! Everything above this crate only sees strings and bytes.

pub mod config;
pub mod error;
pub mod qr;
pub mod symbol;

pub use config::{ErrorCorrection, SymbolConfig, DEFAULT_MIN_PIXEL_SIZE};
pub use error::{Result, SymbolError};
pub use qr::QrSymbolCodec;
pub use symbol::{SymbolEncoder, SymbolScanner};
