//! Candidate sources surfaced by the search step.
//!
//! A candidate's identity is its normalized URI. Candidates live for one
//! request only; nothing here persists.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use url::Url;

/// A source surfaced by the search step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Title reported by the search tool ("Source" when it reported none)
    pub title: String,

    /// Normalized URI
    pub uri: String,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
        }
    }
}

/// Query parameters that carry tracking state rather than identity.
const TRACKING_PARAMS: &[&str] = &["utm_source", "utm_medium", "utm_campaign", "utm_term", "utm_content", "gclid", "fbclid"];

/// Normalize a URI for identity comparison.
///
/// Lowercases the host, drops the fragment and tracking parameters, and
/// strips a lone trailing slash. Unparseable input is returned trimmed, so
/// dedup still works on whatever string the provider sent.
pub fn normalize_uri(raw: &str) -> String {
    let trimmed = raw.trim();
    let Ok(mut url) = Url::parse(trimmed) else {
        return trimmed.to_string();
    };

    url.set_fragment(None);

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| !TRACKING_PARAMS.contains(&k.as_ref()))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if kept.is_empty() {
        url.set_query(None);
    } else {
        let query = kept
            .iter()
            .map(|(k, v)| {
                if v.is_empty() {
                    k.clone()
                } else {
                    format!("{}={}", k, v)
                }
            })
            .collect::<Vec<_>>()
            .join("&");
        url.set_query(Some(&query));
    }

    let mut out = url.to_string();
    if out.ends_with('/') && url.path() == "/" && url.query().is_none() {
        out.pop();
    }
    out
}

/// An ordered, deduplicated list of candidates that passed the trust policy.
///
/// Index positions into this list are the *only* reference targets the
/// extraction step accepts, so order must be stable (first occurrence wins)
/// and URIs unique for index references to be reproducible within a request.
#[derive(Debug, Clone, Default)]
pub struct TrustedCandidates {
    entries: IndexMap<String, Candidate>,
}

impl TrustedCandidates {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate. A candidate with an already-present URI is ignored.
    pub fn push(&mut self, candidate: Candidate) {
        self.entries
            .entry(candidate.uri.clone())
            .or_insert(candidate);
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Candidate at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.entries.get_index(index).map(|(_, c)| c)
    }

    /// Whether a URI is present.
    pub fn contains_uri(&self, uri: &str) -> bool {
        self.entries.contains_key(uri)
    }

    /// Iterate candidates in stable order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.values()
    }
}

impl FromIterator<Candidate> for TrustedCandidates {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        let mut list = Self::new();
        for candidate in iter {
            list.push(candidate);
        }
        list
    }
}
