use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a file into a directory of QR code images.
    Encode(EncodeArgs),
    /// Restore a file from a directory of QR code images.
    Decode(DecodeArgs),
    /// Report which chunks a directory of QR code images holds.
    Inspect(InspectArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Inspect(args) => inspect::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// File to encode.
    pub input_file: PathBuf,
    /// Directory to write `qr_NNNNN.png` images into (created if absent).
    pub output_dir: PathBuf,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Directory holding the `.png` images.
    pub input_dir: PathBuf,
    /// File to write the restored content to.
    pub output_file: PathBuf,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Directory holding the `.png` images.
    pub input_dir: PathBuf,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
