// src/corpus/crawl.rs
//! HTML link extraction: scans a directory of pages and builds the corpus.

use crate::corpus::Corpus;
use crate::error::{RankError, Result};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::WalkDir;

static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Parses a directory of HTML pages into a canonical [`Corpus`].
///
/// Only `.html` files at the top level of `dir` count as pages; each page's
/// identifier is its filename. Raw link sets go through corpus
/// canonicalization, so self-links and links to unknown pages are dropped.
///
/// # Errors
/// Returns an error if the directory walk or a file read fails.
pub fn crawl(dir: &Path) -> Result<Corpus> {
    let mut raw: HashMap<String, HashSet<String>> = HashMap::new();

    let walker = WalkDir::new(dir).max_depth(1).follow_links(false);
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(page) = page_name(entry.path()) else {
            continue;
        };
        let contents = fs::read_to_string(entry.path()).map_err(|source| RankError::Io {
            source,
            path: entry.path().to_path_buf(),
        })?;
        raw.insert(page, extract_hrefs(&contents));
    }

    Ok(Corpus::from_raw(raw))
}

fn page_name(path: &Path) -> Option<String> {
    if path.extension()? != "html" {
        return None;
    }
    Some(path.file_name()?.to_string_lossy().into_owned())
}

/// Extracts every `href` target from anchor tags in `contents`.
#[must_use]
pub fn extract_hrefs(contents: &str) -> HashSet<String> {
    HREF_RE
        .captures_iter(contents)
        .map(|cap| cap[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hrefs() {
        let html = r#"<html><body>
            <a href="a.html">A</a>
            <a class="nav" href="b.html">B</a>
            <p>no link here</p>
        </body></html>"#;
        let hrefs = extract_hrefs(html);
        assert_eq!(hrefs.len(), 2);
        assert!(hrefs.contains("a.html"));
        assert!(hrefs.contains("b.html"));
    }

    #[test]
    fn test_extract_hrefs_ignores_bare_anchor() {
        let hrefs = extract_hrefs("<a name=\"top\">no href</a>");
        assert!(hrefs.is_empty());
    }
}
