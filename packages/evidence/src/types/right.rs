//! Catalog entry and request-scope types.
//!
//! The catalog of rights itself (the static list the user browses) belongs
//! to the consuming application and is loaded once at startup there. The
//! pipeline only needs the entry shape, for semantic matching, and the
//! scope that narrows a query.

use serde::{Deserialize, Serialize};

/// Category of a catalog right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RightCategory {
    Civil,
    Political,
    Economic,
    Social,
    Cultural,
}

/// An immutable catalog entry describing one right.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Right {
    /// Stable short identifier
    pub id: String,

    /// Display name, e.g. "Freedom of expression"
    pub name: String,

    /// One-paragraph summary shown in the catalog
    pub summary: String,

    /// Broad category of the right
    pub category: RightCategory,
}

impl Right {
    /// Create a new catalog entry.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        summary: impl Into<String>,
        category: RightCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            summary: summary.into(),
            category,
        }
    }
}

/// Geographic level a request is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScopeLevel {
    International,
    Regional,
    National,
}

/// Scope of a request: a level plus an optional free-text narrowing.
///
/// `detail` names a region for `Regional` scopes ("Europe", "Africa") or a
/// country for `National` ones. When absent, query composition falls back to
/// a comparative, multi-jurisdiction instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    pub level: ScopeLevel,

    #[serde(default)]
    pub detail: Option<String>,
}

impl Scope {
    /// International scope.
    pub fn international() -> Self {
        Self {
            level: ScopeLevel::International,
            detail: None,
        }
    }

    /// Regional scope narrowed to a named region.
    pub fn regional(region: impl Into<String>) -> Self {
        Self {
            level: ScopeLevel::Regional,
            detail: Some(region.into()),
        }
    }

    /// Regional scope with no named region.
    pub fn regional_any() -> Self {
        Self {
            level: ScopeLevel::Regional,
            detail: None,
        }
    }

    /// National scope narrowed to a named country.
    pub fn national(country: impl Into<String>) -> Self {
        Self {
            level: ScopeLevel::National,
            detail: Some(country.into()),
        }
    }

    /// National scope with no named country.
    pub fn national_any() -> Self {
        Self {
            level: ScopeLevel::National,
            detail: None,
        }
    }

    /// The narrowing detail, trimmed, if it is non-empty.
    pub fn detail(&self) -> Option<&str> {
        self.detail
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detail_is_none() {
        let scope = Scope {
            level: ScopeLevel::National,
            detail: Some("   ".to_string()),
        };
        assert_eq!(scope.detail(), None);
    }

    #[test]
    fn test_detail_is_trimmed() {
        let scope = Scope::national(" Kenya ");
        assert_eq!(scope.detail(), Some("Kenya"));
    }
}
