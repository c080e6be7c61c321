// src/rank/sample.rs
//! Random-surfer Monte Carlo estimation of PageRank.

use super::{transition, Distribution};
use crate::corpus::Corpus;
use crate::error::{RankError, Result};
use rand::distributions::{Distribution as _, WeightedIndex};
use rand::Rng;

/// Estimates PageRank by simulating a random walk of length `n` and
/// normalizing visit counts.
///
/// The start page is chosen uniformly at random; every subsequent step draws
/// from the full transition distribution of the current page. The caller owns
/// the RNG, so a fixed seed gives a reproducible walk while the CLI seeds
/// from system entropy per run.
///
/// The output covers every page in the corpus (count 0 if never visited) and
/// sums to exactly `n/n` across all counters.
///
/// # Errors
/// Returns [`RankError::EmptyCorpus`] for a zero-page corpus and
/// [`RankError::ZeroSamples`] for `n == 0`.
#[allow(clippy::cast_precision_loss)]
pub fn sample_pagerank<R: Rng>(
    corpus: &Corpus,
    damping: f64,
    n: usize,
    rng: &mut R,
) -> Result<Distribution> {
    if corpus.is_empty() {
        return Err(RankError::EmptyCorpus);
    }
    if n == 0 {
        return Err(RankError::ZeroSamples);
    }

    let pages = corpus.pages();

    // One categorical sampler per page, built once; the walk itself is then
    // O(n log N).
    let steppers: Vec<WeightedIndex<f64>> = pages
        .iter()
        .map(|page| {
            let dist = transition(corpus, page, damping)?;
            let weights: Vec<f64> = pages.iter().map(|p| dist[p]).collect();
            Ok(WeightedIndex::new(weights)?)
        })
        .collect::<Result<_>>()?;

    let mut counts = vec![0u64; pages.len()];
    let mut current = rng.gen_range(0..pages.len());
    for _ in 0..n {
        current = steppers[current].sample(rng);
        counts[current] += 1;
    }

    Ok(pages
        .iter()
        .zip(counts)
        .map(|(page, count)| (page.clone(), count as f64 / n as f64))
        .collect())
}
