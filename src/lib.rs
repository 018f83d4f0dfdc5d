//! Scoring and analysis engine for a web-delivered sales aptitude assessment.
//!
//! The crate owns the deterministic scoring rubric, the qualitative analysis and
//! feedback derivation, and the reference-based similarity scorer for free-text
//! answers. Routing, sessions, and persistence belong to the hosting service;
//! every function here is a pure computation over caller-supplied inputs.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
