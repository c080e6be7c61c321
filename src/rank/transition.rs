// src/rank/transition.rs
//! One random-surfer step: the categorical distribution over next pages.

use super::Distribution;
use crate::corpus::Corpus;
use crate::error::{RankError, Result};

/// Returns the probability distribution over which page a random surfer on
/// `page` visits next.
///
/// A sink page behaves as if it linked to every page: the whole corpus gets
/// equal probability `1/N`, so no rank mass leaks out of the system.
/// Otherwise every page gets the teleport term `(1 - damping)/N`, and each
/// page that `page` links to gets an extra `damping/L` on top.
///
/// Deterministic; the randomness lives in the sampling walk that consumes it.
///
/// # Errors
/// Returns [`RankError::UnknownPage`] if `page` is not in the corpus.
#[allow(clippy::cast_precision_loss)]
pub fn transition(corpus: &Corpus, page: &str, damping: f64) -> Result<Distribution> {
    let Some(links) = corpus.links(page) else {
        return Err(RankError::UnknownPage(page.to_string()));
    };

    let n = corpus.len() as f64;

    if links.is_empty() {
        return Ok(corpus.pages().iter().map(|p| (p.clone(), 1.0 / n)).collect());
    }

    let teleport = (1.0 - damping) / n;
    let follow = damping / links.len() as f64;

    Ok(corpus
        .pages()
        .iter()
        .map(|p| {
            let extra = if links.contains(p) { follow } else { 0.0 };
            (p.clone(), teleport + extra)
        })
        .collect())
}
