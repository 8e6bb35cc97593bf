//! # Audit Matcher (`audit-matcher`)
//!
//! ## Purpose
//!
//! `audit-matcher` is the reconciliation core: given the findings from both
//! scanners, it pairs each compliance rule with the semantically closest
//! auditor finding above a similarity threshold and partitions everything
//! left over into unpaired sets, so a combined report can present one entry
//! per real-world issue.
//!
//! ## Core Types
//!
//! - [`Reconciler`]: the engine trait.
//! - [`GreedyReconciler`]: production implementation of the documented
//!   greedy policy, built around an injected [`embedding::Embedder`].
//! - [`MatcherConfig`]: the similarity threshold (default 0.5, strict `>`).
//! - [`Partition`]: verified pairs plus the three unpaired index lists — a
//!   disjoint cover of every input.
//!
//! ## The contract, precisely
//!
//! Ordering is observable behavior here, not an implementation detail:
//!
//! 1. Every finding is embedded once, up front. A provider failure aborts
//!    the run before any pairing decision — no partial partition exists.
//! 2. Rules are processed in caller order against two shrinking pools
//!    (details, then suggestions, both in input order).
//! 3. The best candidate is the first one attaining the maximum score
//!    (strict-greater updates from 0.0), so ties keep the earliest-scanned
//!    candidate and details beat suggestions at equal score.
//! 4. A verified pair permanently evicts its candidate; eviction is
//!    irreversible within a run.
//!
//! The result is greedy and order-sensitive, NOT a maximum-weight matching.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use embedding::HashEmbedder;
//! use findings::{DetailFinding, RuleFinding};
//! use matcher::{GreedyReconciler, Reconciler};
//!
//! let reconciler = GreedyReconciler::with_defaults(Arc::new(HashEmbedder::default()));
//! let rules = vec![RuleFinding {
//!     title: "Disable telnet".into(),
//!     severity: "high".into(),
//!     description: "telnet transmits credentials in cleartext".into(),
//!     rationale: "cleartext protocols leak credentials".into(),
//!     result: "fail".into(),
//! }];
//! let details = vec![DetailFinding {
//!     id: Some("NETW-3200".into()),
//!     service: Some("telnet".into()),
//!     description: None,
//! }];
//!
//! let partition = reconciler.reconcile(&rules, &details, &[]).unwrap();
//! assert_eq!(partition.rule_count(), 1);
//! ```

pub mod engine;
mod pool;
pub mod types;

pub use crate::engine::{GreedyReconciler, Reconciler};
pub use crate::types::{CandidateRef, MatchError, MatcherConfig, Partition, VerifiedPair};
