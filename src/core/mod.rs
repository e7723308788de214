// Core algorithm exports
pub mod filters;
pub mod intent;
pub mod matcher;
pub mod scoring;

pub use filters::{is_immediate_joiner, is_ranking_eligible, matches_job_title};
pub use intent::{detect_job_title, Intent, IntentRouter};
pub use matcher::{Matcher, DEFAULT_MIN_EXPERIENCE};
pub use scoring::{calculate_match_score, calculate_skill_score};
