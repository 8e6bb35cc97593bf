//! Compliance-scanner (OpenSCAP) report ingestion.
//!
//! The scanner exports a JSON document whose top-level `"rules"` object maps
//! rule ids to rule records. Parsing preserves the object's own ordering so
//! downstream rule processing order matches the report.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::FindingsError;
use crate::types::RuleFinding;

#[derive(Deserialize)]
struct OpenScapReport {
    #[serde(default)]
    rules: serde_json::Map<String, serde_json::Value>,
}

/// Parse an OpenSCAP JSON report into its rule findings, in report order.
///
/// A rule record missing a required field is an error; the whole report is
/// rejected rather than silently dropping rules.
pub fn parse_openscap_report(json: &str) -> Result<Vec<RuleFinding>, FindingsError> {
    let report: OpenScapReport = serde_json::from_str(json)?;
    info!(rules = report.rules.len(), "parsing compliance scanner rules");

    let mut parsed = Vec::with_capacity(report.rules.len());
    for (rule_id, value) in report.rules {
        let rule: RuleFinding = serde_json::from_value(value)?;
        debug!(%rule_id, title = %rule.title, "parsed rule");
        parsed.push(rule);
    }
    Ok(parsed)
}

/// Read and parse an OpenSCAP JSON report from disk.
pub fn load_openscap_report<P: AsRef<Path>>(path: P) -> Result<Vec<RuleFinding>, FindingsError> {
    info!(path = %path.as_ref().display(), "loading compliance scanner report");
    let json = std::fs::read_to_string(path)?;
    parse_openscap_report(&json)
}
