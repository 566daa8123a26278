//! Search instructions and extraction prompts.
//!
//! Query composition only produces text. Each evidence category gets its own
//! instruction biased toward the domains its trust policy admits, so the
//! search step surfaces candidates the filter will actually keep.

use crate::types::right::{Scope, ScopeLevel};

/// Regions the legal composer knows regional treaty systems for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Europe,
    Africa,
    Americas,
    Asia,
}

fn region_of(detail: &str) -> Option<Region> {
    let lower = detail.to_ascii_lowercase();
    if lower.contains("europe") {
        Some(Region::Europe)
    } else if lower.contains("africa") {
        Some(Region::Africa)
    } else if lower.contains("america") || lower.contains("caribbean") {
        Some(Region::Americas)
    } else if lower.contains("asia") || lower.contains("pacific") {
        Some(Region::Asia)
    } else {
        None
    }
}

/// Instruction for the legal-framework search.
pub fn compose_legal(right: &str, scope: &Scope) -> String {
    match scope.level {
        ScopeLevel::International => format!(
            "Find the primary international legal instruments that protect {right}: \
             United Nations treaties, conventions, covenants, and declarations, with \
             their adoption years and the articles most relevant to this right. \
             Prefer official sources such as the UN treaty collection and the OHCHR \
             instrument pages."
        ),
        ScopeLevel::Regional => match scope.detail().map(region_of) {
            Some(Some(Region::Europe)) => format!(
                "Find the European legal framework protecting {right}: the European \
                 Convention on Human Rights, relevant Council of Europe treaties, and \
                 leading European Court of Human Rights case law. Prefer the Council of \
                 Europe and ECtHR official sites."
            ),
            Some(Some(Region::Africa)) => format!(
                "Find the African legal framework protecting {right}: the African \
                 Charter on Human and Peoples' Rights, related protocols, and decisions \
                 of the African Commission and the African Court on Human and Peoples' \
                 Rights. Prefer the official Commission and Court sites."
            ),
            Some(Some(Region::Americas)) => format!(
                "Find the Inter-American legal framework protecting {right}: the \
                 American Convention on Human Rights, related instruments, and \
                 jurisprudence of the Inter-American Court and Commission. Prefer the \
                 OAS and Inter-American Court official sites."
            ),
            Some(Some(Region::Asia)) => format!(
                "Find the Asian regional framework protecting {right}: the ASEAN Human \
                 Rights Declaration and any sub-regional human-rights mechanisms, with \
                 the provisions most relevant to this right. Prefer official \
                 intergovernmental sources."
            ),
            _ => format!(
                "Find the regional legal frameworks protecting {right} across the major \
                 regional human-rights systems (European, Inter-American, African, and \
                 Asian), naming each system's core treaty and its most relevant \
                 provisions. Prefer official treaty-body and court sources."
            ),
        },
        ScopeLevel::National => match scope.detail() {
            Some(country) => format!(
                "Find how the law of {country} protects {right}: the relevant \
                 constitutional provisions, principal statutes, and leading domestic \
                 case law. Prefer official government, legislative, and court sources \
                 of {country}."
            ),
            None => format!(
                "Find comparative national examples of how constitutions and domestic \
                 statutes protect {right}, drawing from several countries across \
                 different legal traditions. Prefer official government and legislative \
                 sources."
            ),
        },
    }
}

/// Organizations the field-status instruction restricts itself to. Mirrors
/// the trust policy's monitoring-org allow list.
const MONITORING_ORGS: &str = "Amnesty International, Human Rights Watch, FIDH, OMCT, \
     Front Line Defenders, CIVICUS, Freedom House, and the UN Office of the High \
     Commissioner for Human Rights";

/// Instruction for the current-situation search.
pub fn compose_field_status(right: &str, scope: &Scope, report_year: i32) -> String {
    let coverage = match scope.detail() {
        Some(place) => format!("covering {place}"),
        None => "at the world level".to_string(),
    };
    format!(
        "Find the most recent reports ({}-{}) on the current situation of {right} \
         {coverage}. Restrict yourself to reports published by {MONITORING_ORGS}. \
         Summarize their explicit findings and any statistics they give, naming the \
         report each finding comes from.",
        report_year - 1,
        report_year,
    )
}

/// Instruction for the two-rights research search.
pub fn compose_nexus(right_a: &str, right_b: &str, scope: &Scope) -> String {
    let coverage = match scope.detail() {
        Some(place) => format!(" with attention to {place}"),
        None => String::new(),
    };
    format!(
        "Find peer-reviewed or open-access academic research that explicitly discusses \
         the connection between {right_a} and {right_b} together{coverage}. Prefer open \
         repositories, open-access journals, preprint servers, and university \
         repositories. Exclude results on paywalled publisher sites (ScienceDirect, \
         Springer, Wiley, Taylor & Francis, JSTOR) and abstract-only or citation-only \
         pages; only include work whose full text is openly readable."
    )
}

/// Prompt for the index-bound citation extraction call.
///
/// The candidate list is rendered one per line as `[i] title — uri`; the
/// model may reference sources only by those indices.
pub const CITATION_PROMPT: &str = r#"You are given a research answer and a numbered list of allowed sources.

Question: {query}

Answer:
{answer}

Allowed sources (reference them by index only):
{sources}

Rules:
1. Reference sources ONLY by their index into the list above.
2. NEVER invent, alter, or complete a URL. You have no URL field to fill in.
3. For each index you reference, give a short quotation or finding (at most 3 sentences) from the answer that the source supports.
4. Give an improved title for the source, and its publication year, or "N/A" if the year cannot be determined.
5. If you are not sure a source supports the answer, omit it. Omission is always better than fabrication.

Output JSON: {"sources": [{"urlIndex": 0, "title": "...", "year": "...", "reference": "..."}]}"#;

/// Render the candidate listing for the citation prompt.
pub fn render_candidate_listing<'a>(
    candidates: impl Iterator<Item = &'a crate::types::candidate::Candidate>,
) -> String {
    candidates
        .enumerate()
        .map(|(i, c)| format!("[{}] {} — {}", i, c.title, c.uri))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the citation extraction prompt.
pub fn format_citation_prompt(query: &str, answer: &str, sources_listing: &str) -> String {
    CITATION_PROMPT
        .replace("{query}", query)
        .replace("{answer}", answer)
        .replace("{sources}", sources_listing)
}

/// Prompt for matching a free-text term against the rights catalog.
pub const SEMANTIC_MATCH_PROMPT: &str = r#"Select which entries of the catalog below are relevant to the search term.

Term: {term}

Catalog:
{catalog}

Output JSON: {"matches": ["id", ...]} using only ids that appear in the catalog. Output an empty list if nothing is relevant."#;

/// Format the semantic match prompt from the catalog entries.
pub fn format_semantic_match_prompt(term: &str, rights: &[crate::types::right::Right]) -> String {
    let catalog = rights
        .iter()
        .map(|r| format!("- {}: {} — {}", r.id, r.name, r.summary))
        .collect::<Vec<_>>()
        .join("\n");

    SEMANTIC_MATCH_PROMPT
        .replace("{term}", term)
        .replace("{catalog}", &catalog)
}
