//! Pipeline configuration.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Configuration for the retrieval pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Cap on trusted candidates offered to the extraction step.
    ///
    /// Grounding occasionally surfaces dozens of URLs; only the first
    /// `max_candidates` that pass policy are listed in the second prompt.
    /// Default: 20.
    pub max_candidates: usize,

    /// Year anchoring "most recent reports" instructions.
    ///
    /// If None, the current UTC year is used. Pin it for deterministic
    /// prompt composition.
    pub report_year: Option<i32>,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_candidates: 20,
            report_year: None,
        }
    }
}

impl RetrievalConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the candidate cap.
    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = max;
        self
    }

    /// Pin the report year.
    pub fn with_report_year(mut self, year: i32) -> Self {
        self.report_year = Some(year);
        self
    }

    /// The year current-status instructions should anchor on.
    pub fn effective_report_year(&self) -> i32 {
        self.report_year.unwrap_or_else(|| Utc::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_year_wins() {
        let config = RetrievalConfig::new().with_report_year(2024);
        assert_eq!(config.effective_report_year(), 2024);
    }

    #[test]
    fn test_default_year_is_current() {
        let config = RetrievalConfig::default();
        assert_eq!(config.effective_report_year(), Utc::now().year());
    }
}
