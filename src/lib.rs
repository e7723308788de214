//! Talent Hunt - candidate matching and recruiting assistant
//!
//! This library ranks applicants for a role, answers aggregate recruiting
//! questions over a static dataset, and routes free-text questions to those
//! queries.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{IntentRouter, Matcher};
pub use models::{JobTitle, Lookup, RankedCandidate, Reply, ScoringWeights};
pub use services::DataStore;
