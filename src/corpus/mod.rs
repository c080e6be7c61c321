// src/corpus/mod.rs
//! The canonical link graph: pages and their within-corpus outgoing links.

pub mod crawl;

pub use crawl::crawl;

use std::collections::{HashMap, HashSet};

/// An immutable directed link graph over a set of HTML pages.
///
/// Invariants, established at construction and never broken afterwards:
/// - every link target is itself a page in the corpus,
/// - no page links to itself,
/// - a page may have an empty link set (a "sink").
///
/// Pages are kept in sorted order so that iteration (and therefore the
/// sampling walk under a fixed seed) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pages: Vec<String>,
    links: HashMap<String, HashSet<String>>,
}

impl Corpus {
    /// Canonicalizes a raw page -> link-target mapping: drops self-links and
    /// links pointing outside the corpus key set.
    #[must_use]
    pub fn from_raw(raw: HashMap<String, HashSet<String>>) -> Self {
        let mut pages: Vec<String> = raw.keys().cloned().collect();
        pages.sort();

        let keys: HashSet<String> = raw.keys().cloned().collect();
        let links = raw
            .into_iter()
            .map(|(page, targets)| {
                let kept: HashSet<String> = targets
                    .into_iter()
                    .filter(|t| *t != page && keys.contains(t))
                    .collect();
                (page, kept)
            })
            .collect();

        Self { pages, links }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[must_use]
    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// All page identifiers, sorted.
    #[must_use]
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Outgoing links of `page`, or `None` if the page is not in the corpus.
    #[must_use]
    pub fn links(&self, page: &str) -> Option<&HashSet<String>> {
        self.links.get(page)
    }

    #[must_use]
    pub fn out_degree(&self, page: &str) -> usize {
        self.links.get(page).map_or(0, HashSet::len)
    }

    /// Total number of (canonical) links in the corpus.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.values().map(HashSet::len).sum()
    }

    /// Pages with no outgoing links.
    #[must_use]
    pub fn sinks(&self) -> Vec<&String> {
        self.pages
            .iter()
            .filter(|p| self.out_degree(p) == 0)
            .collect()
    }

    /// Derives the incoming-links index: page -> set of pages linking to it.
    ///
    /// Covers the full page set; a page nothing links to maps to an empty set.
    #[must_use]
    pub fn reverse_index(&self) -> HashMap<String, HashSet<String>> {
        let mut incoming: HashMap<String, HashSet<String>> = self
            .pages
            .iter()
            .map(|p| (p.clone(), HashSet::new()))
            .collect();

        for (source, targets) in &self.links {
            for target in targets {
                if let Some(set) = incoming.get_mut(target) {
                    set.insert(source.clone());
                }
            }
        }

        incoming
    }
}
