use qrxfer_symbol::QrSymbolCodec;
use qrxfer_transfer::{inspect_directory, ScanConfig};

use crate::cmd::InspectArgs;
use crate::exit::{transfer_error, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_inspection, OutputFormat};

pub fn run(args: InspectArgs, format: OutputFormat) -> CliResult<i32> {
    let report = inspect_directory(&args.input_dir, QrSymbolCodec::new(), ScanConfig::default())
        .map_err(|err| transfer_error("inspect failed", err))?;

    print_inspection(&report, format);

    if report.complete {
        Ok(SUCCESS)
    } else {
        Ok(DATA_INVALID)
    }
}
