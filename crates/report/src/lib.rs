//! # Audit Report (`audit-report`)
//!
//! Renders a stored report and its reconciliation rows into a single HTML
//! document: a metadata header followed by one section per row.
//!
//! Rendering rules:
//!
//! - Rule rows print the rule's title and description.
//! - Detail rows headline the service name (falling back to a generic
//!   label), with the configuration field in parentheses when present.
//! - Suggestion rows are headlined by their scanner id.
//! - A scanner-assigned auditor id is never rendered twice, even when
//!   referenced by multiple rows. The matcher guarantees no candidate joins
//!   more than one pair, which is what makes this deduplication safe.

pub mod sanitize;

use std::collections::HashSet;

use store::{ItemKind, ReconRow, StoredReport};
use tracing::warn;

pub use crate::sanitize::sanitize_text;
use crate::sanitize::escape_html;

/// Render the combined audit report as an HTML document.
pub fn render_html(report: &StoredReport, rows: &[ReconRow]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Audit Report</title>\n</head>\n<body>\n");
    html.push_str("<h1>Audit Report</h1>\n");
    html.push_str("<table>\n");
    html.push_str(&format!(
        "<tr><th>Report Date:</th><td>{}</td></tr>\n",
        escape_html(&report.created_at.to_rfc3339())
    ));
    html.push_str(&format!(
        "<tr><th>Total Findings:</th><td>{}</td></tr>\n",
        rows.len()
    ));
    html.push_str("</table>\n<hr>\n");

    let mut printed_auditor_ids: HashSet<String> = HashSet::new();

    for row in rows {
        let section = match row.subject.kind {
            ItemKind::Rule => rule_section(report, row.subject.index),
            ItemKind::Detail => detail_section(report, row.subject.index, &mut printed_auditor_ids),
            ItemKind::Suggestion => {
                suggestion_section(report, row.subject.index, &mut printed_auditor_ids)
            }
        };
        if let Some((title, description)) = section {
            html.push_str(&format!("<h2>{}</h2>\n", escape_html(&title)));
            html.push_str(&format!(
                "<p>{}</p>\n",
                escape_html(&sanitize_text(&description)).replace('\n', "<br>")
            ));
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn rule_section(report: &StoredReport, index: usize) -> Option<(String, String)> {
    let Some(rule) = report.rules.get(index) else {
        warn!(index, "rule row references a missing finding");
        return None;
    };
    Some((rule.title.clone(), rule.description.clone()))
}

fn detail_section(
    report: &StoredReport,
    index: usize,
    printed: &mut HashSet<String>,
) -> Option<(String, String)> {
    let Some(detail) = report.details.get(index) else {
        warn!(index, "detail row references a missing finding");
        return None;
    };
    if let Some(id) = detail.id.as_deref().filter(|id| !id.is_empty()) {
        if !printed.insert(id.to_string()) {
            return None;
        }
    }

    let mut title = detail
        .service
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Auditor Record".to_string());
    let field = detail
        .description
        .as_ref()
        .and_then(|d| d.field.as_deref())
        .filter(|f| !f.is_empty());
    if let Some(field) = field {
        title.push_str(&format!(" ({field})"));
    }
    let description = detail
        .description
        .as_ref()
        .and_then(|d| d.desc.clone())
        .unwrap_or_default();
    Some((title, description))
}

fn suggestion_section(
    report: &StoredReport,
    index: usize,
    printed: &mut HashSet<String>,
) -> Option<(String, String)> {
    let Some(suggestion) = report.suggestions.get(index) else {
        warn!(index, "suggestion row references a missing finding");
        return None;
    };
    if !suggestion.id.is_empty() && !printed.insert(suggestion.id.clone()) {
        return None;
    }

    let title = if suggestion.id.is_empty() {
        "Suggestion".to_string()
    } else {
        format!("Suggestion {}", suggestion.id)
    };
    let description = suggestion.description.clone().unwrap_or_default();
    Some((title, description))
}
