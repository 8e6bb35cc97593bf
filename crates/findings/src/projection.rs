//! Matchable-text projection.
//!
//! Each finding kind projects to a single string capturing its matchable
//! semantic content; that string is what gets handed to the embedding
//! provider. Projection never fails and never substitutes placeholder text
//! for absent fields — an all-empty finding projects to the empty string,
//! which is a valid provider input.

use crate::types::{DetailFinding, RuleFinding, SuggestionFinding};

impl RuleFinding {
    /// Title, description, and rationale joined by single spaces.
    ///
    /// The join is unconditional: empty fields still contribute their
    /// separator, keeping the projection byte-stable for a given finding.
    pub fn matchable_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.rationale)
    }
}

impl DetailFinding {
    /// Service followed by the nested description's desc, value, field, and
    /// prefval, in that fixed order; only non-empty pieces are included.
    pub fn matchable_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(service) = non_empty(self.service.as_deref()) {
            parts.push(service);
        }
        if let Some(desc) = &self.description {
            for piece in [&desc.desc, &desc.value, &desc.field, &desc.prefval] {
                if let Some(text) = non_empty(piece.as_deref()) {
                    parts.push(text);
                }
            }
        }
        parts.join(" ")
    }
}

impl SuggestionFinding {
    /// Id (possibly empty), then severity and description when non-empty,
    /// joined by single spaces.
    pub fn matchable_text(&self) -> String {
        let mut parts: Vec<&str> = vec![self.id.as_str()];
        if let Some(severity) = non_empty(self.severity.as_deref()) {
            parts.push(severity);
        }
        if let Some(description) = non_empty(self.description.as_deref()) {
            parts.push(description);
        }
        parts.join(" ")
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}
