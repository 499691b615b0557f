//! CLI entry point for syswrap.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use syswrap::write::AvoidWrite;

/// syswrap — generate system header wrappers.
#[derive(Parser, Debug)]
#[command(name = "syswrap", version, about)]
struct Cli {
    /// Path to the syswrap.toml configuration file. Ignored when headers are
    /// given on the command line.
    #[arg(short, long, default_value = "syswrap.toml")]
    config: PathBuf,

    /// Output directory (overrides config; required with HEADERS).
    #[arg(short, long)]
    outdir: Option<PathBuf>,

    /// Report what would change without writing anything.
    #[arg(long)]
    dry_run: bool,

    /// System header names to wrap (e.g. `stdio.h`, `media/AudioSystem.h`).
    #[arg(requires = "outdir")]
    headers: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("syswrap=info")),
        )
        .init();

    let cli = Cli::parse();
    let writer = AvoidWrite::new(cli.dry_run);

    match cli.outdir.as_deref() {
        Some(outdir) if !cli.headers.is_empty() => {
            syswrap::config::validate_headers(&cli.headers)?;
            syswrap::gen_wrappers_with(&writer, outdir, &cli.headers)?;
        }
        outdir => {
            syswrap::run_with(&writer, &cli.config, outdir)?;
        }
    }
    Ok(())
}
