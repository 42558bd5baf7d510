use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use ipv6_prefix_finder::models::DEFAULT_BATCH_SIZE;
use ipv6_prefix_finder::parser::DEFAULT_SAMPLE_LINES;
use ipv6_prefix_finder::report::ReportWriter;
use ipv6_prefix_finder::scan::DEFAULT_TARGET_FILENAME;
use ipv6_prefix_finder::{scan_rows, PrefixFinderError, ReportRow, ScanConfig};

/// ipv6-prefix-finder searches a scan result tree for IPv6 address lists, infers the network
/// prefix shared by the leading addresses of each list and writes a CSV report.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Opts {
    /// Root directory to search
    #[clap(short, long, default_value = ".")]
    directory: PathBuf,

    /// File name of the address lists to look for
    #[clap(short, long, default_value = DEFAULT_TARGET_FILENAME)]
    filename: String,

    /// Output CSV file path; `.gz` and `.bz2` extensions are compressed
    #[clap(short, long, default_value = "ipv6_files.csv")]
    output: PathBuf,

    /// Number of leading lines of each file used for prefix inference
    #[clap(short, long, default_value_t = DEFAULT_SAMPLE_LINES)]
    sample: usize,

    /// Batch size recorded in each report row
    #[clap(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch: u32,

    /// Print rows as JSON objects to stdout instead of writing the CSV file
    #[clap(long)]
    json: bool,

    /// Pretty-print JSON output
    #[clap(long)]
    pretty: bool,
}

fn main() {
    let opts: Opts = Opts::parse();

    env_logger::init();

    let config = ScanConfig {
        root: opts.directory.clone(),
        target_filename: opts.filename.clone(),
        sample_lines: opts.sample,
        batch_size: opts.batch,
    };

    eprintln!(
        "searching '{}' in '{}'...",
        config.target_filename,
        config.root.display()
    );
    let (rows, summary) = match scan_rows(&config) {
        Ok(r) => r,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    if rows.is_empty() {
        eprintln!("no matching files found");
        return;
    }

    if opts.json {
        let mut stdout = std::io::stdout();
        for row in &rows {
            let output_str = match opts.pretty {
                true => serde_json::to_string_pretty(row),
                false => serde_json::to_string(row),
            };
            let output_str = match output_str {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = writeln!(stdout, "{}", &output_str) {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    eprintln!("{}", e);
                }
                std::process::exit(1);
            }
        }
    } else {
        eprintln!(
            "found {} files, writing prefixes to {}...",
            rows.len(),
            opts.output.display()
        );
        if let Err(e) = write_report(&opts.output, &rows) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    eprintln!("{}", summary);
}

fn write_report(path: &Path, rows: &[ReportRow]) -> Result<(), PrefixFinderError> {
    let mut writer = ReportWriter::create(path)?;
    for row in rows {
        writer.write_row(row)?;
    }
    // dropping the inner writer writes the gz/bz2 trailer
    drop(writer.finish()?);
    Ok(())
}
