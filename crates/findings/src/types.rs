//! Core data model for scanner findings.
//!
//! Three finding shapes flow through the pipeline, one per scanner output
//! category:
//!
//! - [`RuleFinding`]: one rule evaluation from the compliance scanner.
//! - [`DetailFinding`]: one system-state observation from the hardening
//!   auditor, with an optional nested [`DetailDescription`].
//! - [`SuggestionFinding`]: one remediation hint from the hardening auditor.
//!
//! All types are serde-serializable and cheap to clone; optional fields stay
//! `None` when the scanner omitted them rather than being filled with
//! placeholder text.

use serde::{Deserialize, Serialize};

/// One rule evaluation exported by the compliance scanner.
///
/// Every field is required in the scanner's JSON export, though any of them
/// may be the empty string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleFinding {
    /// Short human-readable rule title.
    pub title: String,
    /// Severity classification assigned by the scanner.
    pub severity: String,
    /// Longer description of what the rule checks.
    pub description: String,
    /// Why the rule matters.
    pub rationale: String,
    /// Scan outcome for this rule (e.g. "pass", "fail").
    pub result: String,
}

/// Nested description block attached to some detail findings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailDescription {
    /// Configuration field the observation refers to.
    #[serde(default)]
    pub field: Option<String>,
    /// Short textual info.
    #[serde(default)]
    pub desc: Option<String>,
    /// Observed value.
    #[serde(default)]
    pub value: Option<String>,
    /// Preferred/expected value.
    #[serde(default)]
    pub prefval: Option<String>,
}

/// One system-state observation from the hardening auditor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailFinding {
    /// Scanner-assigned identifier, when present.
    #[serde(default)]
    pub id: Option<String>,
    /// Service the observation is about.
    #[serde(default)]
    pub service: Option<String>,
    /// Nested description block, when present.
    #[serde(default)]
    pub description: Option<DetailDescription>,
}

/// One remediation suggestion from the hardening auditor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionFinding {
    /// Scanner-assigned identifier.
    pub id: String,
    /// Severity, when the auditor assigns one.
    #[serde(default)]
    pub severity: Option<String>,
    /// Free-text description of the suggestion.
    #[serde(default)]
    pub description: Option<String>,
}

/// Which candidate pool a non-rule finding belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    /// A [`DetailFinding`].
    Detail,
    /// A [`SuggestionFinding`].
    Suggestion,
}

impl std::fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidateKind::Detail => write!(f, "detail"),
            CandidateKind::Suggestion => write!(f, "suggestion"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_finding_requires_all_fields() {
        let json = r#"{"title": "t", "severity": "high", "description": "d"}"#;
        let parsed: Result<RuleFinding, _> = serde_json::from_str(json);
        assert!(parsed.is_err(), "missing rationale/result must be rejected");
    }

    #[test]
    fn rule_finding_accepts_empty_strings() {
        let json = r#"{
            "title": "", "severity": "", "description": "",
            "rationale": "", "result": ""
        }"#;
        let parsed: RuleFinding = serde_json::from_str(json).expect("empty fields are valid");
        assert!(parsed.title.is_empty());
    }

    #[test]
    fn detail_finding_defaults_absent_fields() {
        let parsed: DetailFinding = serde_json::from_str("{}").expect("all fields optional");
        assert_eq!(parsed, DetailFinding::default());
    }

    #[test]
    fn detail_finding_parses_nested_description() {
        let json = r#"{
            "id": "BOOT-5122",
            "service": "grub",
            "description": {"field": "password", "desc": "no boot password", "value": "none"}
        }"#;
        let parsed: DetailFinding = serde_json::from_str(json).expect("valid detail");
        let desc = parsed.description.expect("nested description present");
        assert_eq!(desc.field.as_deref(), Some("password"));
        assert_eq!(desc.prefval, None);
    }

    #[test]
    fn suggestion_finding_requires_id() {
        let parsed: Result<SuggestionFinding, _> = serde_json::from_str(r#"{"severity": "low"}"#);
        assert!(parsed.is_err(), "id is the one required suggestion field");
    }

    #[test]
    fn candidate_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CandidateKind::Detail).unwrap(),
            "\"detail\""
        );
        assert_eq!(CandidateKind::Suggestion.to_string(), "suggestion");
    }
}
