//! Hardening-auditor (Lynis) report ingestion.
//!
//! The auditor's JSON export carries two top-level arrays, `"details[]"` and
//! `"suggestion[]"` (the bracket suffix is part of the key). Both are
//! optional; an export with neither parses to two empty lists.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::FindingsError;
use crate::types::{DetailFinding, SuggestionFinding};

#[derive(Deserialize)]
struct LynisReport {
    #[serde(rename = "details[]", default)]
    details: Vec<DetailFinding>,
    #[serde(rename = "suggestion[]", default)]
    suggestions: Vec<SuggestionFinding>,
}

/// Parse a Lynis JSON report into its detail and suggestion findings,
/// preserving array order.
pub fn parse_lynis_report(
    json: &str,
) -> Result<(Vec<DetailFinding>, Vec<SuggestionFinding>), FindingsError> {
    let report: LynisReport = serde_json::from_str(json)?;
    info!(
        details = report.details.len(),
        suggestions = report.suggestions.len(),
        "parsed hardening auditor report"
    );
    Ok((report.details, report.suggestions))
}

/// Read and parse a Lynis JSON report from disk.
pub fn load_lynis_report<P: AsRef<Path>>(
    path: P,
) -> Result<(Vec<DetailFinding>, Vec<SuggestionFinding>), FindingsError> {
    info!(path = %path.as_ref().display(), "loading hardening auditor report");
    let json = std::fs::read_to_string(path)?;
    parse_lynis_report(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "details[]": [
            {
                "id": "NETW-3200",
                "service": "telnet",
                "description": {"desc": "unused service running", "value": "enabled"}
            },
            {"id": "BOOT-5122", "service": "grub"}
        ],
        "suggestion[]": [
            {"id": "SSH-7408", "severity": "medium", "description": "harden sshd config"}
        ]
    }"#;

    #[test]
    fn parses_both_sections_in_order() {
        let (details, suggestions) = parse_lynis_report(SAMPLE).expect("valid report");
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].id.as_deref(), Some("NETW-3200"));
        assert_eq!(details[1].service.as_deref(), Some("grub"));
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].id, "SSH-7408");
    }

    #[test]
    fn missing_sections_parse_to_empty_lists() {
        let (details, suggestions) = parse_lynis_report("{}").expect("empty report is valid");
        assert!(details.is_empty());
        assert!(suggestions.is_empty());
    }

    #[test]
    fn suggestion_without_id_is_rejected() {
        let json = r#"{"suggestion[]": [{"severity": "low"}]}"#;
        assert!(matches!(
            parse_lynis_report(json),
            Err(FindingsError::Parse(_))
        ));
    }
}
