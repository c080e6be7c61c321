pub mod cli;
pub mod corpus;
pub mod error;
pub mod rank;
pub mod reporting;

pub use corpus::Corpus;
pub use rank::{iterate_pagerank, sample_pagerank, transition, Distribution};
