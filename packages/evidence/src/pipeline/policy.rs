//! Domain trust and accessibility policy.
//!
//! Pure, stateless classification of candidate URIs. Each evidence category
//! carries its own curated allow list; the academic category additionally
//! requires an accessibility check so abstract-only and paywalled pages
//! never become reference targets. No verdict here ever touches the
//! network.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::candidate::{Candidate, TrustedCandidates};

/// The kind of evidence a request asks for.
///
/// Selects both the trust policy and the search instruction template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvidenceCategory {
    /// Legal instruments: treaties, conventions, constitutions, case law
    LegalFramework,

    /// Current-situation reports from monitoring organizations
    FieldStatus,

    /// Academic research connecting two rights
    Nexus,
}

/// International bodies, regional courts and commissions, and national
/// legislative portals.
const LEGAL_DOMAINS: &[&str] = &[
    "un.org",
    "treaties.un.org",
    "ohchr.org",
    "icj-cij.org",
    "ilo.org",
    "refworld.org",
    "echr.coe.int",
    "coe.int",
    "oas.org",
    "corteidh.or.cr",
    "achpr.org",
    "african-court.org",
    "europa.eu",
    "eur-lex.europa.eu",
    "congress.gov",
    "loc.gov",
    "legislation.gov.uk",
    "parliament.uk",
    "legifrance.gouv.fr",
    "gesetze-im-internet.de",
];

/// Government-style host suffixes accepted for legal sources.
const LEGAL_SUFFIXES: &[&str] = &[
    ".gov",
    ".gov.uk",
    ".gov.au",
    ".gov.in",
    ".gov.za",
    ".gov.br",
    ".gc.ca",
    ".go.jp",
    ".go.kr",
    ".gouv.fr",
    ".gob.mx",
    ".gob.es",
    ".govt.nz",
    ".mil",
    ".int",
];

/// Named human-rights monitoring organizations plus the UN human-rights
/// office.
const FIELD_STATUS_DOMAINS: &[&str] = &[
    "amnesty.org",
    "hrw.org",
    "ohchr.org",
    "fidh.org",
    "omct.org",
    "frontlinedefenders.org",
    "civicus.org",
    "freedomhouse.org",
    "cpj.org",
    "rsf.org",
    "article19.org",
    "icrc.org",
    "reliefweb.int",
    "un.org",
];

/// Open-access indexes, preprint servers, and government research domains.
const ACADEMIC_DOMAINS: &[&str] = &[
    "doaj.org",
    "core.ac.uk",
    "semanticscholar.org",
    "openalex.org",
    "arxiv.org",
    "ssrn.com",
    "osf.io",
    "scielo.org",
    "redalyc.org",
    "ncbi.nlm.nih.gov",
    "pubmed.ncbi.nlm.nih.gov",
    "eric.ed.gov",
];

/// University and research host suffixes.
const ACADEMIC_SUFFIXES: &[&str] = &[".edu", ".edu.au", ".ac.uk", ".ac.jp", ".ac.za", ".ac.in", ".gov"];

/// Open-access indicators. At least one must appear in an academic URI for
/// it to count as accessible.
const ACCESS_ALLOW: &[&str] = &[
    ".edu",
    ".ac.",
    ".pdf",
    "arxiv.org",
    "doaj.org",
    "core.ac.uk",
    "ssrn.com",
    "osf.io",
    "scielo",
    "redalyc",
    "semanticscholar.org",
    "openalex.org",
    "pmc.ncbi.nlm.nih.gov",
    "ncbi.nlm.nih.gov",
    "eric.ed.gov",
    "repository",
    "openaccess",
    "open-access",
    "preprint",
    "fulltext",
    "handle.net",
];

/// Named paywalled publishers. Any match disqualifies regardless of the
/// allow list.
const ACCESS_BLOCK: &[&str] = &[
    "sciencedirect.com",
    "link.springer.com",
    "springer.com",
    "tandfonline.com",
    "onlinelibrary.wiley.com",
    "wiley.com",
    "jstor.org",
    "sagepub.com",
    "academic.oup.com",
    "cambridge.org",
    "degruyter.com",
    "brill.com",
    "heinonline.org",
    "muse.jhu.edu",
];

static ABSTRACT_ONLY: OnceLock<Regex> = OnceLock::new();

/// URL shapes that resolve to an abstract or citation landing page rather
/// than the work itself.
fn abstract_only_pattern() -> &'static Regex {
    ABSTRACT_ONLY.get_or_init(|| {
        Regex::new(r"/(abstract|citation|citedby)([/?#]|$)|[?&]casa_token=")
            .expect("abstract-page pattern compiles")
    })
}

/// Host of a URI, lowercased. Falls back to the whole lowercased string for
/// unparseable input so substring matching still gets a chance.
fn host_of(uri: &str) -> String {
    url::Url::parse(uri)
        .ok()
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
        .unwrap_or_else(|| uri.trim().to_ascii_lowercase())
}

/// Whether `host` is `domain` itself or a subdomain of it.
fn host_matches(host: &str, domain: &str) -> bool {
    host == domain || host.ends_with(&format!(".{}", domain))
}

fn matches_any(host: &str, domains: &[&str], suffixes: &[&str]) -> bool {
    domains.iter().any(|d| host_matches(host, d)) || suffixes.iter().any(|s| host.ends_with(s))
}

/// Whether a URI's domain is trusted for the given evidence category.
///
/// Deterministic and side-effect-free: same `(uri, category)` always yields
/// the same verdict.
pub fn is_trusted(uri: &str, category: EvidenceCategory) -> bool {
    let host = host_of(uri);
    match category {
        EvidenceCategory::LegalFramework => matches_any(&host, LEGAL_DOMAINS, LEGAL_SUFFIXES),
        EvidenceCategory::FieldStatus => matches_any(&host, FIELD_STATUS_DOMAINS, &[]),
        EvidenceCategory::Nexus => matches_any(&host, ACADEMIC_DOMAINS, ACADEMIC_SUFFIXES),
    }
}

/// Whether an academic URI looks openly readable.
///
/// An open-access indicator must match and no paywall indicator may match.
/// Only the academic category enforces this; official and monitoring-org
/// sources are assumed openly accessible once trusted.
pub fn is_accessible(uri: &str) -> bool {
    let lower = uri.to_ascii_lowercase();
    let allowed = ACCESS_ALLOW.iter().any(|p| lower.contains(p));
    let blocked =
        ACCESS_BLOCK.iter().any(|p| lower.contains(p)) || abstract_only_pattern().is_match(&lower);
    allowed && !blocked
}

/// Whether a candidate may become a reference target for this category.
pub fn admits(uri: &str, category: EvidenceCategory) -> bool {
    is_trusted(uri, category)
        && (category != EvidenceCategory::Nexus || is_accessible(uri))
}

/// Filter candidates down to the trusted list offered to the extraction
/// step, preserving order, capped at `max`.
pub fn filter_candidates(
    candidates: Vec<Candidate>,
    category: EvidenceCategory,
    max: usize,
) -> TrustedCandidates {
    candidates
        .into_iter()
        .filter(|c| admits(&c.uri, category))
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_legal_trusts_un_bodies_and_governments() {
        let cat = EvidenceCategory::LegalFramework;
        assert!(is_trusted("https://www.ohchr.org/en/instruments", cat));
        assert!(is_trusted("https://treaties.un.org/pages/x", cat));
        assert!(is_trusted("https://www.echr.coe.int/judgments", cat));
        assert!(is_trusted("https://www.justice.gov/crt", cat));
        assert!(is_trusted("https://www.diputados.gob.mx/leyes", cat));
        assert!(!is_trusted("https://example-blog.com/law", cat));
        assert!(!is_trusted("https://medium.com/@lawyer/post", cat));
    }

    #[test]
    fn test_legal_rejects_lookalike_host() {
        // Suffix must be a domain boundary, not an arbitrary substring
        assert!(!is_trusted(
            "https://fakeun.org.evil.com/x",
            EvidenceCategory::LegalFramework
        ));
    }

    #[test]
    fn test_field_status_is_org_list_only() {
        let cat = EvidenceCategory::FieldStatus;
        assert!(is_trusted("https://www.amnesty.org/en/latest/", cat));
        assert!(is_trusted("https://www.hrw.org/world-report/2025", cat));
        assert!(is_trusted("https://www.ohchr.org/en/countries", cat));
        // Government portals are legal sources, not monitoring orgs
        assert!(!is_trusted("https://www.justice.gov/crt", cat));
        assert!(!is_trusted("https://example.org/report", cat));
    }

    #[test]
    fn test_academic_trust() {
        let cat = EvidenceCategory::Nexus;
        assert!(is_trusted("https://arxiv.org/abs/2401.0001", cat));
        assert!(is_trusted("https://dspace.mit.edu/handle/1", cat));
        assert!(is_trusted("https://papers.ssrn.com/sol3/papers.cfm?id=3", cat));
        assert!(!is_trusted("https://www.sciencedirect.com/science/article/pii/S1", cat));
    }

    #[test]
    fn test_accessibility_requires_open_indicator() {
        assert!(is_accessible("https://arxiv.org/pdf/2401.0001"));
        assert!(is_accessible("https://dspace.mit.edu/bitstream/thesis.pdf"));
        assert!(!is_accessible("https://randomjournal.com/article/55"));
    }

    #[test]
    fn test_accessibility_blocks_paywalled_publishers() {
        // Springer hosts plenty of .pdf paths; the block list still wins
        assert!(!is_accessible("https://link.springer.com/content/pdf/1.pdf"));
        assert!(!is_accessible("https://www.jstor.org/stable/pdf/2.pdf"));
    }

    #[test]
    fn test_accessibility_blocks_abstract_pages() {
        // Trusted academic host, but an abstract-only landing page
        let uri = "https://dspace.mit.edu/abstract/123";
        assert!(is_trusted(uri, EvidenceCategory::Nexus));
        assert!(!is_accessible(uri));
        assert!(!admits(uri, EvidenceCategory::Nexus));
    }

    #[test]
    fn test_arxiv_abs_path_is_not_an_abstract_page() {
        // "/abs/" is arXiv's canonical open page, distinct from "/abstract"
        assert!(is_accessible("https://arxiv.org/abs/2401.0001"));
    }

    #[test]
    fn test_accessibility_skipped_outside_academic() {
        // hrw.org matches no open-access indicator, yet is admitted
        let uri = "https://www.hrw.org/world-report/2025";
        assert!(!is_accessible(uri));
        assert!(admits(uri, EvidenceCategory::FieldStatus));
    }

    #[test]
    fn test_filter_preserves_order_and_cap() {
        let candidates = vec![
            Candidate::new("Blog", "https://example-blog.com/y"),
            Candidate::new("OHCHR", "https://www.ohchr.org/x"),
            Candidate::new("Treaty", "https://treaties.un.org/y"),
            Candidate::new("Court", "https://www.echr.coe.int/z"),
        ];

        let trusted = filter_candidates(candidates, EvidenceCategory::LegalFramework, 2);
        assert_eq!(trusted.len(), 2);
        assert_eq!(trusted.get(0).unwrap().uri, "https://www.ohchr.org/x");
        assert_eq!(trusted.get(1).unwrap().uri, "https://treaties.un.org/y");
    }

    proptest! {
        #[test]
        fn prop_verdicts_are_deterministic(uri in "[a-zA-Z0-9:/._?&=-]{0,60}") {
            for category in [
                EvidenceCategory::LegalFramework,
                EvidenceCategory::FieldStatus,
                EvidenceCategory::Nexus,
            ] {
                prop_assert_eq!(is_trusted(&uri, category), is_trusted(&uri, category));
                prop_assert_eq!(is_accessible(&uri), is_accessible(&uri));
            }
        }

        #[test]
        fn prop_unrelated_hosts_never_trusted(host in "[a-z0-9]{5,20}") {
            // A bare alphanumeric .com host matches no allow list
            let uri = format!("https://{}.com/page", host);
            for category in [
                EvidenceCategory::LegalFramework,
                EvidenceCategory::FieldStatus,
                EvidenceCategory::Nexus,
            ] {
                prop_assert!(!is_trusted(&uri, category));
            }
        }

        #[test]
        fn prop_filter_output_is_unique_and_admitted(
            hosts in proptest::collection::vec("[a-z]{3,8}", 0..10)
        ) {
            let candidates: Vec<Candidate> = hosts
                .iter()
                .enumerate()
                .map(|(i, h)| {
                    // Mix trusted and untrusted hosts
                    if i % 2 == 0 {
                        Candidate::new("t", format!("https://{}.ohchr.org/{}", h, i))
                    } else {
                        Candidate::new("u", format!("https://{}.com/{}", h, i))
                    }
                })
                .collect();

            let trusted = filter_candidates(candidates, EvidenceCategory::LegalFramework, 100);
            let uris: Vec<&str> = trusted.iter().map(|c| c.uri.as_str()).collect();
            let unique: std::collections::HashSet<&&str> = uris.iter().collect();
            prop_assert_eq!(unique.len(), uris.len());
            for uri in uris {
                prop_assert!(admits(uri, EvidenceCategory::LegalFramework));
            }
        }
    }
}
