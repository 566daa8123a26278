//! The Retriever - main entry point for evidence requests.
//!
//! Sequences each request: compose the search instruction, run the
//! search-augmented generation, extract and filter grounding candidates,
//! then (only when at least one trusted candidate survived) run the
//! constrained extraction and validate the drafts. At most two sequential
//! model calls per request, no retries, no cross-request state.
//!
//! Failures stop here. An upstream or parse failure becomes a single
//! degraded citation pointing at a manual portal for the category; the
//! caller never sees an error.

use tracing::{debug, error, info, warn, Instrument};
use uuid::Uuid;

use crate::error::{Result, RetrievalError};
use crate::pipeline::extract::{coerce_id_list, extract_citations, match_schema};
use crate::pipeline::grounding::extract_candidates;
use crate::pipeline::policy::{filter_candidates, EvidenceCategory};
use crate::pipeline::prompts::{
    compose_field_status, compose_legal, compose_nexus, format_semantic_match_prompt,
};
use crate::pipeline::validate::validate;
use crate::traits::model::GenerativeModel;
use crate::types::citation::{Citation, DialogueResult};
use crate::types::config::RetrievalConfig;
use crate::types::right::{Right, Scope};

/// Manual portals offered when automatic retrieval fails.
fn fallback_portal(category: EvidenceCategory) -> &'static str {
    match category {
        EvidenceCategory::LegalFramework => "https://www.ohchr.org/en/instruments-listing",
        EvidenceCategory::FieldStatus => "https://www.ohchr.org/en/countries",
        EvidenceCategory::Nexus => "https://doaj.org",
    }
}

/// The main entry point - runs evidence requests against an injected model.
///
/// # Example
///
/// ```rust,ignore
/// use evidence::{Retriever, Scope};
/// use evidence::ai::Gemini;
///
/// let retriever = Retriever::new(Gemini::from_env()?);
/// let result = retriever
///     .legal_framework("freedom of expression", &Scope::regional("Europe"))
///     .await;
/// for citation in &result.sources {
///     println!("{} — {}", citation.title, citation.uri);
/// }
/// ```
pub struct Retriever<M: GenerativeModel> {
    model: M,
    config: RetrievalConfig,
}

impl<M: GenerativeModel> Retriever<M> {
    /// Create a new retriever with default configuration.
    pub fn new(model: M) -> Self {
        Self {
            model,
            config: RetrievalConfig::default(),
        }
    }

    /// Create with custom configuration.
    pub fn with_config(model: M, config: RetrievalConfig) -> Self {
        Self { model, config }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Get a mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut RetrievalConfig {
        &mut self.config
    }

    /// Legal instruments protecting one right, per scope.
    pub async fn legal_framework(&self, right: &str, scope: &Scope) -> DialogueResult {
        let instruction = compose_legal(right, scope);
        self.dispatch(EvidenceCategory::LegalFramework, instruction)
            .await
    }

    /// Current-situation reports on one right from monitoring organizations.
    pub async fn field_status(&self, right: &str, scope: &Scope) -> DialogueResult {
        let instruction =
            compose_field_status(right, scope, self.config.effective_report_year());
        self.dispatch(EvidenceCategory::FieldStatus, instruction)
            .await
    }

    /// Open-access research connecting two rights.
    pub async fn nexus(&self, right_a: &str, right_b: &str, scope: &Scope) -> DialogueResult {
        let instruction = compose_nexus(right_a, right_b, scope);
        self.dispatch(EvidenceCategory::Nexus, instruction).await
    }

    /// Which catalog rights are relevant to a free-text term.
    ///
    /// One schema-constrained call; no grounding, no trust policy. Failure
    /// yields an empty list rather than an error.
    pub async fn semantic_matches(&self, term: &str, rights: &[Right]) -> Vec<String> {
        if rights.is_empty() {
            return Vec::new();
        }

        let prompt = format_semantic_match_prompt(term, rights);
        match self.model.generate_structured(&prompt, match_schema()).await {
            Ok(value) => coerce_id_list(&value),
            Err(err) => {
                error!(error = %err, "semantic match failed");
                Vec::new()
            }
        }
    }

    /// Run one evidence request inside its own tracing span, converting any
    /// failure into the degraded result.
    async fn dispatch(&self, category: EvidenceCategory, instruction: String) -> DialogueResult {
        let span = tracing::info_span!(
            "retrieval",
            request = %Uuid::new_v4(),
            category = ?category
        );
        async {
            match self.run(category, &instruction).await {
                Ok(citations) => DialogueResult::from_citations(citations),
                Err(err) => self.degraded(category, &err),
            }
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        category: EvidenceCategory,
        instruction: &str,
    ) -> Result<Vec<Citation>> {
        debug!("issuing search-augmented generation");
        let answer = self.model.generate_grounded(instruction).await?;

        let candidates = extract_candidates(&answer.chunks);
        let trusted = filter_candidates(candidates, category, self.config.max_candidates);
        if trusted.is_empty() {
            info!("no trusted sources surfaced; returning empty result");
            return Ok(Vec::new());
        }

        debug!(trusted = trusted.len(), "running constrained extraction");
        let batch = extract_citations(&self.model, instruction, &answer.text, &trusted).await?;

        let validated = validate(batch, &trusted);
        if validated.rejected > 0 {
            warn!(rejected = validated.rejected, "dropped invalid citation drafts");
        }
        Ok(validated.citations)
    }

    fn degraded(&self, category: EvidenceCategory, err: &RetrievalError) -> DialogueResult {
        error!(error = %err, "retrieval failed, returning manual fallback");
        DialogueResult::from_citations(vec![Citation {
            title: "Evidence retrieval unavailable".to_string(),
            uri: fallback_portal(category).to_string(),
            date: "N/A".to_string(),
            reference: format!(
                "Automatic retrieval failed ({err}). Consult the linked portal directly."
            ),
        }])
    }
}
