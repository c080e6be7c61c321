// src/rank/iterate.rs
//! Fixed-point PageRank estimation over the reverse link index.

use super::Distribution;
use crate::corpus::Corpus;
use crate::error::{RankError, Result};
use std::collections::HashMap;

/// Per-page rank movement below which a sweep counts as converged.
const TOLERANCE: f64 = 0.001;

/// Cap on relaxation sweeps. With damping < 1 the iteration contracts and
/// converges orders of magnitude sooner; hitting the cap is an error.
const MAX_SWEEPS: usize = 10_000;

enum Sweep {
    Sweeping,
    Converged,
}

/// Estimates PageRank by relaxing the fixed-point equation until no page's
/// rank moves by more than 0.001 in a full sweep. Deterministic.
///
/// Each sweep computes, from the previous snapshot only (synchronous update):
///
/// `new(p) = (1-d)/N + d * (Σ_{q∈incoming(p)} rank(q)/outdeg(q) + sink_mass/N)`
///
/// where `sink_mass` is the summed rank of all zero-outdegree pages. A sink
/// page is treated as linking to every page, matching the transition model's
/// uniform redistribution, so the fixed point is the stationary distribution
/// of the same Markov chain and total mass is conserved.
///
/// # Errors
/// Returns [`RankError::EmptyCorpus`] for a zero-page corpus and
/// [`RankError::NoConvergence`] if the sweep cap is exhausted.
#[allow(clippy::cast_precision_loss)]
pub fn iterate_pagerank(corpus: &Corpus, damping: f64) -> Result<Distribution> {
    if corpus.is_empty() {
        return Err(RankError::EmptyCorpus);
    }

    let n = corpus.len() as f64;
    let incoming = corpus.reverse_index();
    let sinks = corpus.sinks();

    let mut ranks: Distribution = corpus
        .pages()
        .iter()
        .map(|p| (p.clone(), 1.0 / n))
        .collect();
    let mut state = Sweep::Sweeping;

    for _ in 0..MAX_SWEEPS {
        let sink_mass: f64 = sinks.iter().map(|p| ranks[*p]).sum();
        let base = (1.0 - damping) / n + damping * sink_mass / n;

        let mut next: Distribution = HashMap::with_capacity(ranks.len());
        let mut max_delta = 0.0_f64;

        for page in corpus.pages() {
            // Incoming sets only ever contain pages with outdegree >= 1;
            // sinks are covered by the sink_mass term instead.
            let inbound: f64 = incoming[page]
                .iter()
                .map(|q| ranks[q] / corpus.out_degree(q) as f64)
                .sum();
            let rank = base + damping * inbound;
            max_delta = max_delta.max((rank - ranks[page]).abs());
            next.insert(page.clone(), rank);
        }

        ranks = next;
        if max_delta <= TOLERANCE {
            state = Sweep::Converged;
            break;
        }
    }

    match state {
        Sweep::Converged => Ok(ranks),
        Sweep::Sweeping => Err(RankError::NoConvergence { sweeps: MAX_SWEEPS }),
    }
}
