//! sphinxstrap: Bootstrap-compatible markup for Sphinx HTML output.
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use sphinxstrap::{config, input, page, report};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sphinxstrap")]
#[command(about = "Bootstrap-compatible markup for Sphinx HTML output", long_about = None)]
struct Args {
    /// HTML files or build directories to patch
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Report changes without writing files
    #[arg(long)]
    dry_run: bool,

    /// Replace docutils literals with <code>
    #[arg(long)]
    inline_code: bool,

    /// Unwrap the navbar source link
    #[arg(long)]
    source_link: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sphinxstrap=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    cfg.inline_code |= args.inline_code;
    cfg.source_link |= args.source_link;

    let documents = input::find_documents(args.paths, &cfg.file_extensions)?;

    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let mut run = report::RunReport {
        dry_run: args.dry_run,
        pages: Vec::with_capacity(documents.len()),
    };
    for doc in &documents {
        let page_report = page::patch_file(doc, &cfg, args.dry_run)
            .with_context(|| format!("failed to patch {}", doc.display()))?;
        run.pages.push(page_report);
    }

    let skipped = run.skipped_count();
    if skipped > 0 {
        tracing::warn!(skipped, "Some patches were skipped");
    }

    let json = run.to_json()?;
    println!("{json}");

    Ok(())
}
