// src/rank/mod.rs
//! PageRank estimation: transition model, sampling walk, fixed-point solver.

pub mod iterate;
pub mod sample;
pub mod transition;

pub use iterate::iterate_pagerank;
pub use sample::sample_pagerank;
pub use transition::transition;

use std::collections::HashMap;

/// Probability distribution over the full page set; values sum to 1.0.
pub type Distribution = HashMap<String, f64>;

/// Probability the surfer follows a link instead of teleporting.
pub const DAMPING: f64 = 0.85;

/// Default walk length for the sampling estimator.
pub const SAMPLES: usize = 10_000;
