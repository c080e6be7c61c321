// tests/unit_iterate.rs
//! Tests for the fixed-point PageRank estimator.

use std::collections::{HashMap, HashSet};
use surfrank_core::error::RankError;
use surfrank_core::{iterate_pagerank, Corpus};

fn raw(entries: &[(&str, &[&str])]) -> HashMap<String, HashSet<String>> {
    entries
        .iter()
        .map(|(page, links)| {
            (
                (*page).to_string(),
                links.iter().map(|l| (*l).to_string()).collect(),
            )
        })
        .collect()
}

#[test]
fn test_sums_to_one() {
    let corpus = Corpus::from_raw(raw(&[
        ("a.html", &["b.html", "c.html"]),
        ("b.html", &["a.html"]),
        ("c.html", &[]),
    ]));

    let ranks = iterate_pagerank(&corpus, 0.85).unwrap();
    let total: f64 = ranks.values().sum();
    assert!((total - 1.0).abs() < 1e-6, "sum={total}");
    assert_eq!(ranks.len(), corpus.len(), "Every page gets a rank");
}

#[test]
fn test_deterministic_across_calls() {
    let corpus = Corpus::from_raw(raw(&[
        ("a.html", &["b.html", "c.html"]),
        ("b.html", &["a.html"]),
        ("c.html", &["a.html", "b.html"]),
    ]));

    let first = iterate_pagerank(&corpus, 0.85).unwrap();
    let second = iterate_pagerank(&corpus, 0.85).unwrap();
    for page in corpus.pages() {
        assert!(
            (first[page] - second[page]).abs() < f64::EPSILON,
            "Ranks should be identical: {page} {} vs {}",
            first[page],
            second[page]
        );
    }
}

#[test]
fn test_single_page_corpus() {
    let corpus = Corpus::from_raw(raw(&[("only.html", &[])]));
    let ranks = iterate_pagerank(&corpus, 0.85).unwrap();
    assert!((ranks["only.html"] - 1.0).abs() < 1e-6);
}

#[test]
fn test_symmetric_pair_splits_evenly() {
    let corpus = Corpus::from_raw(raw(&[("a.html", &["b.html"]), ("b.html", &["a.html"])]));
    let ranks = iterate_pagerank(&corpus, 0.85).unwrap();
    assert!((ranks["a.html"] - 0.5).abs() < 0.01, "a={}", ranks["a.html"]);
    assert!((ranks["b.html"] - 0.5).abs() < 0.01, "b={}", ranks["b.html"]);
}

#[test]
fn test_sink_mass_is_redistributed() {
    // a -> b, b is a sink. With the sink treated as linking everywhere the
    // closed-form fixed point is a = 0.5/1.425, b = 1 - a.
    let corpus = Corpus::from_raw(raw(&[("a.html", &["b.html"]), ("b.html", &[])]));
    let ranks = iterate_pagerank(&corpus, 0.85).unwrap();

    assert!(
        (ranks["a.html"] - 0.350_877).abs() < 0.01,
        "a={}",
        ranks["a.html"]
    );
    assert!(
        (ranks["b.html"] - 0.649_123).abs() < 0.01,
        "b={}",
        ranks["b.html"]
    );

    let total: f64 = ranks.values().sum();
    assert!((total - 1.0).abs() < 1e-6, "Sink must not leak mass: {total}");
}

#[test]
fn test_empty_corpus_is_rejected() {
    let corpus = Corpus::from_raw(HashMap::new());
    let err = iterate_pagerank(&corpus, 0.85).unwrap_err();
    assert!(matches!(err, RankError::EmptyCorpus), "got {err:?}");
}
