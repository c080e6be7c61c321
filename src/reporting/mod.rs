// src/reporting/mod.rs
//! Report assembly and rendering for both estimators.

pub mod console;
pub mod json;

use crate::rank::Distribution;
use serde::Serialize;

/// The combined output of one run: both estimates over the same page set.
#[derive(Debug, Serialize)]
pub struct RankReport {
    pub damping: f64,
    pub samples: usize,
    pub sampling: Vec<PageScore>,
    pub iteration: Vec<PageScore>,
}

#[derive(Debug, Serialize)]
pub struct PageScore {
    pub page: String,
    pub score: f64,
}

impl RankReport {
    #[must_use]
    pub fn new(
        damping: f64,
        samples: usize,
        sampling: &Distribution,
        iteration: &Distribution,
    ) -> Self {
        Self {
            damping,
            samples,
            sampling: sorted_scores(sampling),
            iteration: sorted_scores(iteration),
        }
    }

    /// Largest per-page gap between the two estimates. Shrinks roughly as
    /// 1/sqrt(samples).
    #[must_use]
    pub fn max_gap(&self) -> f64 {
        self.sampling
            .iter()
            .zip(&self.iteration)
            .map(|(s, i)| (s.score - i.score).abs())
            .fold(0.0, f64::max)
    }
}

fn sorted_scores(dist: &Distribution) -> Vec<PageScore> {
    let mut scores: Vec<PageScore> = dist
        .iter()
        .map(|(page, score)| PageScore {
            page: page.clone(),
            score: *score,
        })
        .collect();
    scores.sort_by(|a, b| a.page.cmp(&b.page));
    scores
}
