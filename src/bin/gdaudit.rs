use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use gdaudit_core::{report, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gdaudit", version)]
#[command(about = "Static heuristics audit for Godot projects")]
struct Cli {
    /// Project root to scan
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Write the rendered report to a file as well as stdout
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print scan statistics to stderr
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let audit = scan::run(&cli.root);

    if cli.verbose {
        let stats = &audit.stats;
        eprintln!(
            "{} {} script files, {} scene files in {}ms",
            "scanned".cyan(),
            stats.script_files,
            stats.scene_files,
            stats.duration_ms
        );
        if stats.walk_errors > 0 {
            eprintln!(
                "{} {} unreadable entries skipped during walk",
                "warn:".yellow(),
                stats.walk_errors
            );
        }
    }

    let rendered = match cli.format {
        Format::Text => report::format_text(&cli.root, &audit.findings),
        Format::Json => report::format_json(&audit.findings)?,
    };

    print!("{rendered}");

    if let Some(path) = &cli.report {
        report::write_report(path, &rendered)?;
        if cli.verbose {
            eprintln!("{} report written to {}", "ok:".green(), path.display());
        }
    }

    Ok(())
}
