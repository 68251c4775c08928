use qrxfer_symbol::QrSymbolCodec;
use qrxfer_transfer::{decode_directory, ScanConfig};

use crate::cmd::DecodeArgs;
use crate::exit::{transfer_error, CliResult, SUCCESS};
use crate::output::{print_decode, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let summary = decode_directory(
        &args.input_dir,
        &args.output_file,
        QrSymbolCodec::new(),
        ScanConfig::default(),
    )
    .map_err(|err| transfer_error("decode failed", err))?;

    print_decode(&summary, format);
    Ok(SUCCESS)
}
