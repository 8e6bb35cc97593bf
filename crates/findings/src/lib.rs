//! # Audit Findings (`audit-findings`)
//!
//! Data model and ingestion for the two scanner report formats the
//! reconciliation pipeline consumes:
//!
//! - The **compliance scanner** (OpenSCAP) exports rule evaluations under a
//!   top-level `"rules"` object → [`RuleFinding`].
//! - The **hardening auditor** (Lynis) exports `"details[]"` observations
//!   and `"suggestion[]"` remediation hints → [`DetailFinding`] /
//!   [`SuggestionFinding`].
//!
//! Ingestion validates shape up front so downstream stages can assume
//! well-formed findings. Each finding kind also knows how to project itself
//! to a single matchable-text string (`matchable_text()`), which is the
//! canonical input handed to the embedding provider.

pub mod error;
pub mod lynis;
pub mod openscap;
pub mod projection;
pub mod types;

pub use crate::error::FindingsError;
pub use crate::lynis::{load_lynis_report, parse_lynis_report};
pub use crate::openscap::{load_openscap_report, parse_openscap_report};
pub use crate::types::{
    CandidateKind, DetailDescription, DetailFinding, RuleFinding, SuggestionFinding,
};
