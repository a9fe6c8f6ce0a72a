//! layout-wrap CLI - wrap layout preview cards with shared containers

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use layout_wrap::{
    read_document, run_file_with_progress, JsonFormat, ProgressEvent, Transformer, WrapOptions,
    WrapOutcome, WrapReport, DEFAULT_DOCUMENT,
};

#[derive(Parser)]
#[command(name = "layout-wrap")]
#[command(version)]
#[command(about = "Wrap layout cards with shared header, content and footer containers", long_about = None)]
struct Cli {
    /// HTML document to rewrite in place
    #[arg(value_name = "FILE", default_value = DEFAULT_DOCUMENT)]
    input: PathBuf,

    /// Write the result here instead of back to FILE
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Report what would change without writing
    #[arg(long)]
    dry_run: bool,

    /// Find block ends by matching nested div tags
    #[arg(long)]
    balanced: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,

    /// Output compact JSON
    #[arg(long, requires = "json")]
    compact: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = if cli.dry_run {
        cmd_dry_run(&cli)
    } else {
        cmd_wrap(&cli)
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(cli: &Cli) -> WrapOptions {
    let options = WrapOptions::new();
    if cli.balanced {
        options.balanced()
    } else {
        options
    }
}

fn print_progress(event: ProgressEvent<'_>) {
    match event {
        ProgressEvent::Started { id, .. } => println!("Wrapping {}...", id),
        ProgressEvent::Finished { id, outcome } => log::debug!("{} -> {}", id, outcome),
    }
}

fn cmd_wrap(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let output: &Path = cli.output.as_deref().unwrap_or(&cli.input);

    let report = run_file_with_progress(&cli.input, output, build_options(cli), print_progress)?;

    println!("{}", "Done! All layouts wrapped.".green().bold());
    if output != cli.input.as_path() {
        println!("{} {}", "Saved to".green(), output.display());
    }

    print_report(cli, &report)
}

fn cmd_dry_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let document = read_document(&cli.input)?;
    let (_, report) =
        Transformer::new(build_options(cli)).transform_with_progress(&document, print_progress);

    println!(
        "{} {} of {} layouts would be wrapped",
        "Dry run:".yellow(),
        report.wrapped_count(),
        report.layouts.len()
    );

    print_report(cli, &report)
}

fn print_report(cli: &Cli, report: &WrapReport) -> Result<(), Box<dyn std::error::Error>> {
    if cli.json {
        let format = if cli.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        println!("{}", report.to_json(format)?);
        return Ok(());
    }

    for layout in &report.layouts {
        let status = match layout.outcome {
            WrapOutcome::Wrapped => layout.outcome.to_string().green(),
            WrapOutcome::AlreadyWrapped => layout.outcome.to_string().dimmed(),
            WrapOutcome::NotFound => layout.outcome.to_string().yellow(),
        };
        log::info!("{}: {}", layout.id, status);
    }

    Ok(())
}
