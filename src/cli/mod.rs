// src/cli/mod.rs
//! Argument parsing and the run handler for the `surfrank` binary.

use crate::corpus::crawl;
use crate::rank::{iterate_pagerank, sample_pagerank, DAMPING, SAMPLES};
use crate::reporting::{console, json, RankReport};
use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "surfrank",
    version,
    about = "PageRank estimation for a directory of interlinked HTML pages"
)]
pub struct Cli {
    /// Directory of .html pages to rank
    #[arg(value_name = "CORPUS_DIR")]
    pub corpus: PathBuf,

    /// Probability of following a link instead of teleporting
    #[arg(long, default_value_t = DAMPING, value_parser = parse_damping)]
    pub damping: f64,

    /// Random-walk length for the sampling estimator
    #[arg(long, short = 'n', default_value_t = SAMPLES)]
    pub samples: usize,

    /// Seed the sampling walk for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit the report as JSON instead of the console table
    #[arg(long)]
    pub json: bool,

    /// Print corpus diagnostics before ranking
    #[arg(long, short)]
    pub verbose: bool,
}

fn parse_damping(s: &str) -> std::result::Result<f64, String> {
    let d: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if d > 0.0 && d <= 1.0 {
        Ok(d)
    } else {
        Err(format!("damping must be in (0, 1], got {d}"))
    }
}

/// Crawls the corpus directory, runs both estimators, prints the report.
///
/// # Errors
/// Returns error on crawl failure, an empty corpus, or invalid sample count.
pub fn run(cli: &Cli) -> Result<()> {
    let corpus = crawl::crawl(&cli.corpus)
        .with_context(|| format!("failed to crawl {}", cli.corpus.display()))?;

    // Preconditions for both estimators, checked before any loop starts.
    if corpus.is_empty() {
        bail!("no .html pages found in {}", cli.corpus.display());
    }
    if cli.samples == 0 {
        bail!("--samples must be at least 1");
    }

    if cli.verbose {
        println!(
            "🔎 Crawled {} pages, {} links ({} sinks)",
            corpus.len(),
            corpus.link_count(),
            corpus.sinks().len()
        );
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let sampling = sample_pagerank(&corpus, cli.damping, cli.samples, &mut rng)?;
    let iteration = iterate_pagerank(&corpus, cli.damping)?;

    let report = RankReport::new(cli.damping, cli.samples, &sampling, &iteration);
    if cli.json {
        json::print_report(&report)?;
    } else {
        console::print_report(&report);
    }
    Ok(())
}
