mod run;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pagetext",
    version,
    about = "Extract text from a PDF, falling back across pdf-extract, lopdf and pdftotext"
)]
struct Cli {
    /// Path to PDF
    pdf: PathBuf,

    /// Output text file path (default: <pdf>.txt)
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Optional JSON output path with per-page text
    #[arg(long = "json", value_name = "FILE")]
    json: Option<PathBuf>,

    /// Insert [Page N] separators in the text output
    #[arg(long)]
    page_separators: bool,

    /// pdftotext executable used as the last fallback
    #[arg(
        long,
        env = "PDFTOTEXT",
        value_name = "PATH",
        default_value = "pdftotext"
    )]
    pdftotext: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = run::Options {
        pdf: cli.pdf,
        output: cli.output,
        json: cli.json,
        page_separators: cli.page_separators,
        pdftotext: cli.pdftotext,
    };

    if let Err(e) = run::run(options) {
        eprintln!("[ERROR] {e}");
        std::process::exit(1);
    }
}
