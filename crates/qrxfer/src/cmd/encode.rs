use qrxfer_symbol::QrSymbolCodec;
use qrxfer_transfer::{encode_file, EncodeConfig};

use crate::cmd::EncodeArgs;
use crate::exit::{transfer_error, CliResult, SUCCESS};
use crate::output::{print_encode, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let codec = QrSymbolCodec::new();
    let summary = encode_file(
        &args.input_file,
        &args.output_dir,
        &codec,
        &EncodeConfig::default(),
    )
    .map_err(|err| transfer_error("encode failed", err))?;

    print_encode(&summary, format);
    Ok(SUCCESS)
}
