use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use ttlflat_core::{ConversionStats, ConvertError, ConvertOptions, FileSystemProvider};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Flatten a Turtle document into path-annotated lines.
#[derive(Parser)]
#[command(
    name = "ttlflat",
    version,
    about = "Flatten a Turtle (TTL) document into path-annotated lines"
)]
struct Cli {
    /// Path to the .ttl input file
    file: PathBuf,

    /// Where to write the converted text (default: <FILE>.converted.txt)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Subject prefix that is never walked as a root (repeatable; replaces the defaults v:, s:, ref:)
    #[arg(long = "exclude-prefix", value_name = "PREFIX")]
    exclude_prefix: Vec<String>,

    /// Print per-column unique counts and bit widths after converting
    #[arg(long)]
    stats: bool,

    /// Output format (text or json)
    #[arg(long, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and go to stdout
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    init_tracing(cli.quiet);

    let options = if cli.exclude_prefix.is_empty() {
        ConvertOptions::default()
    } else {
        ConvertOptions::with_excluded_prefixes(cli.exclude_prefix.iter().cloned())
    };
    let out = cli
        .out
        .clone()
        .unwrap_or_else(|| ttlflat_core::output_path_for(&cli.file));

    cmd_convert(&cli.file, &out, &options, cli.stats, cli.output, cli.quiet);
}

fn init_tracing(quiet: bool) {
    let default_filter = if quiet {
        "warn"
    } else {
        "ttlflat=info,ttlflat_core=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_convert(
    file: &Path,
    out: &Path,
    options: &ConvertOptions,
    show_stats: bool,
    output: OutputFormat,
    quiet: bool,
) {
    tracing::debug!(
        input = %file.display(),
        output = %out.display(),
        excluded = ?options.excluded_root_prefixes,
        "starting conversion"
    );
    let started = Instant::now();
    let stats = match ttlflat_core::convert_file(file, out, &FileSystemProvider, options) {
        Ok(stats) => stats,
        Err(e) => {
            report_convert_error(&e, output);
            process::exit(1);
        }
    };
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match output {
        OutputFormat::Json => {
            let mut json = serde_json::json!({
                "input": file.display().to_string(),
                "output": out.display().to_string(),
                "lines": stats.lines,
                "elapsed_ms": elapsed_ms,
            });
            if show_stats {
                json["stats"] = serde_json::to_value(&stats).unwrap_or_default();
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
        OutputFormat::Text => {
            if !quiet {
                println!("Conversion completed in {} milliseconds.", elapsed_ms);
                println!("Converted file saved as: {}", out.display());
            }
            if show_stats {
                print_stats(&stats);
            }
        }
    }
}

fn print_stats(stats: &ConversionStats) {
    println!();
    println!("Data analysis:");
    println!(
        "  sections: {}  roots: {}  lines: {}",
        stats.sections, stats.roots, stats.lines
    );
    println!("  {:<10} {:>8} {:>6}", "column", "unique", "bits");
    for col in &stats.columns {
        println!(
            "  {:<10} {:>8} {:>6}",
            col.column, col.unique, col.bits_required
        );
    }
}

/// Errors are always reported, `--quiet` only silences progress output.
fn report_convert_error(err: &ConvertError, output: OutputFormat) {
    match output {
        OutputFormat::Text => eprintln!("Error: {}", err),
        OutputFormat::Json => {
            let json = serde_json::json!({ "error": err.to_json_value() });
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
    }
}
