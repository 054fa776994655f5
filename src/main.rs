mod analyze;
mod cli;
mod config;
mod error;
mod extract;
mod lexicon;
mod report;
mod scan;
mod types;

use crate::analyze::Analyzer;
use crate::error::LexiscoreError;
use crate::lexicon::{Dictionary, LexiconTagger};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn run(cli: cli::Cli) -> Result<i32, LexiscoreError> {
    let root = cli.root.as_path();
    let cfg = config::load_config(root)?;

    // Resources load before any file is touched; failures here abort the run.
    let dictionary = Dictionary::load(&root.join(&cfg.resources.dictionary))?;
    if dictionary.is_empty() {
        tracing::warn!("dictionary is empty, every name will score 0");
    }
    let tagger = match &cfg.resources.model {
        Some(path) => LexiconTagger::load(&root.join(path))?,
        None => LexiconTagger::builtin()?,
    };

    let discovery = scan::discover(&root.join(&cfg.input.dir), &cfg.language)?;
    tracing::info!(count = discovery.sources.len(), "source files discovered");

    let analyzer = Analyzer {
        dictionary: &dictionary,
        sentences: &tagger,
        language: &cfg.language,
    };
    let mut batch = analyzer.analyze_batch(&discovery.sources);
    batch.skipped.extend(discovery.skipped);

    let output = root.join(&cfg.output.path);
    report::write_report(&output, &batch.files, cfg.output.format)?;
    if !cli.quiet {
        println!("wrote {} rows to {}", batch.files.len(), output.display());
    }

    if batch.skipped.is_empty() {
        return Ok(exit_code::SUCCESS);
    }
    for skipped in &batch.skipped {
        eprintln!("warning: skipped {}: {}", skipped.path, skipped.reason);
    }
    Ok(exit_code::WARNINGS)
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.log_directive());

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
