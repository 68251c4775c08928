mod cmd;
mod exit;
mod logging;
mod output;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "qrxfer",
    version,
    about = "Carry files across QR code images"
)]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => std::process::exit(parse_error_code(&err)),
    };
    init_logging(cli.log_format, cli.log_level);

    let Some(command) = cli.command else {
        print_usage();
        std::process::exit(exit::SUCCESS);
    };

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    match cmd::run(command, format) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

/// Report a parse failure and pick the exit code.
///
/// An unknown subcommand only prints usage; a known subcommand with bad
/// arguments is a usage error.
fn parse_error_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            exit::SUCCESS
        }
        ErrorKind::InvalidSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            print_usage();
            exit::SUCCESS
        }
        _ => {
            let _ = err.print();
            exit::USAGE
        }
    }
}

fn print_usage() {
    let _ = Cli::command().print_help();
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_encode_subcommand() {
        let cli = Cli::try_parse_from(["qrxfer", "encode", "input.bin", "out/"])
            .expect("encode args should parse");

        match cli.command {
            Some(Command::Encode(args)) => {
                assert_eq!(args.input_file.to_str(), Some("input.bin"));
                assert_eq!(args.output_dir.to_str(), Some("out/"));
            }
            other => panic!("expected encode, got {other:?}"),
        }
    }

    #[test]
    fn parses_decode_with_global_flags() {
        let cli = Cli::try_parse_from([
            "qrxfer",
            "decode",
            "codes/",
            "restored.bin",
            "--format",
            "json",
            "--log-level",
            "warn",
        ])
        .expect("decode args should parse");

        assert!(matches!(cli.command, Some(Command::Decode(_))));
        assert!(matches!(cli.format, Some(OutputFormat::Json)));
    }

    #[test]
    fn missing_subcommand_is_not_an_error() {
        let cli = Cli::try_parse_from(["qrxfer"]).expect("bare invocation should parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn unknown_subcommand_prints_usage_only() {
        let err = Cli::try_parse_from(["qrxfer", "upload", "a", "b"])
            .expect_err("unknown subcommand should fail");
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        assert_eq!(parse_error_code(&err), exit::SUCCESS);
    }

    #[test]
    fn wrong_argument_count_is_usage_error() {
        let err = Cli::try_parse_from(["qrxfer", "encode", "only-one"])
            .expect_err("missing positional should fail");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(parse_error_code(&err), exit::USAGE);

        let err = Cli::try_parse_from(["qrxfer", "decode", "a", "b", "c"])
            .expect_err("extra positional should fail");
        assert_eq!(parse_error_code(&err), exit::USAGE);
    }
}
