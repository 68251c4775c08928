use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use qrxfer_transfer::{DecodeSummary, EncodeSummary, Inspection};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

pub fn print_encode(summary: &EncodeSummary, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(summary),
        OutputFormat::Table => {
            let mut table = key_value_table();
            table
                .add_row(vec!["OUTPUT DIR".to_string(), summary.output_dir.display().to_string()])
                .add_row(vec!["CHUNKS".to_string(), summary.total.to_string()])
                .add_row(vec!["BYTES".to_string(), summary.bytes.to_string()])
                .add_row(vec!["BASE64 LENGTH".to_string(), summary.encoded_len.to_string()]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "encoded {} bytes into {} QR codes in {}",
                summary.bytes,
                summary.total,
                summary.output_dir.display()
            );
        }
        OutputFormat::Raw => println!("{}", summary.total),
    }
}

pub fn print_decode(summary: &DecodeSummary, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(summary),
        OutputFormat::Table => {
            let mut table = key_value_table();
            table
                .add_row(vec!["OUTPUT".to_string(), summary.output.display().to_string()])
                .add_row(vec!["CHUNKS".to_string(), summary.total.to_string()])
                .add_row(vec!["FILES SCANNED".to_string(), summary.files.to_string()])
                .add_row(vec!["SKIPPED".to_string(), summary.skipped.to_string()])
                .add_row(vec!["BYTES".to_string(), summary.bytes.to_string()]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "restored {} bytes from {} chunks into {}",
                summary.bytes,
                summary.total,
                summary.output.display()
            );
        }
        OutputFormat::Raw => println!("{}", summary.output.display()),
    }
}

pub fn print_inspection(report: &Inspection, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => {
            let mut table = key_value_table();
            table
                .add_row(vec!["DIRECTORY".to_string(), report.directory.display().to_string()])
                .add_row(vec!["FILES SCANNED".to_string(), report.files.to_string()])
                .add_row(vec!["TOTAL".to_string(), total_text(report.total)])
                .add_row(vec!["RECEIVED".to_string(), report.received.to_string()])
                .add_row(vec![
                    "MISSING".to_string(),
                    missing_text(&report.missing, report.missing_count),
                ])
                .add_row(vec!["OUT OF RANGE".to_string(), index_list(&report.out_of_range)])
                .add_row(vec![
                    "INCONSISTENT TOTALS".to_string(),
                    report.inconsistent_totals.to_string(),
                ])
                .add_row(vec!["REPLACED".to_string(), report.replaced.to_string()])
                .add_row(vec!["COMPLETE".to_string(), report.complete.to_string()]);
            println!("{table}");

            if !report.skipped.is_empty() {
                let mut skipped = Table::new();
                skipped
                    .load_preset(UTF8_FULL)
                    .set_content_arrangement(ContentArrangement::Dynamic)
                    .set_header(vec!["SKIPPED", "REASON"]);
                for unit in &report.skipped {
                    skipped.add_row(vec![unit.path.display().to_string(), unit.reason.clone()]);
                }
                println!("{skipped}");
            }
        }
        OutputFormat::Pretty => {
            println!(
                "{}: {}/{} chunks, missing [{}], {} skipped",
                report.directory.display(),
                report.received,
                total_text(report.total),
                missing_text(&report.missing, report.missing_count),
                report.skipped.len()
            );
            for unit in &report.skipped {
                println!("  skipped {}: {}", unit.path.display(), unit.reason);
            }
        }
        OutputFormat::Raw => {
            println!("{}", if report.complete { "complete" } else { "incomplete" });
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn key_value_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["FIELD", "VALUE"]);
    table
}

fn total_text(total: Option<usize>) -> String {
    total.map_or_else(|| "-".to_string(), |total| total.to_string())
}

fn index_list(indexes: &[usize]) -> String {
    indexes
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Listed indexes, with a note for any that were left out of the list.
fn missing_text(listed: &[usize], count: usize) -> String {
    let list = index_list(listed);
    match count.saturating_sub(listed.len()) {
        0 => list,
        more => format!("{list} (+{more} more)"),
    }
}
