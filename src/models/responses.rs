use serde::{Deserialize, Serialize};
use crate::models::domain::{ImmediateJoiner, InterviewRecord, Lookup, RankedCandidate};

/// Answer produced for a query or action
///
/// Table variants carry rows; every other variant is a single message the
/// caller renders as text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Reply {
    TopCandidates(Vec<RankedCandidate>),
    ImmediateJoiners(Vec<ImmediateJoiner>),
    InterviewSchedule(Vec<InterviewRecord>),
    NotFound(String),
    Text(String),
    Prompt(String),
    Help(String),
}

impl Reply {
    /// Message for the single-message variants, `None` for tables
    pub fn message(&self) -> Option<&str> {
        match self {
            Reply::NotFound(msg) | Reply::Text(msg) | Reply::Prompt(msg) | Reply::Help(msg) => {
                Some(msg)
            }
            Reply::TopCandidates(_) | Reply::ImmediateJoiners(_) | Reply::InterviewSchedule(_) => {
                None
            }
        }
    }

    pub fn is_table(&self) -> bool {
        self.message().is_none()
    }
}

impl From<Lookup<RankedCandidate>> for Reply {
    fn from(lookup: Lookup<RankedCandidate>) -> Self {
        match lookup {
            Lookup::Found(rows) => Reply::TopCandidates(rows),
            Lookup::NotFound(msg) => Reply::NotFound(msg.to_string()),
        }
    }
}

impl From<Lookup<ImmediateJoiner>> for Reply {
    fn from(lookup: Lookup<ImmediateJoiner>) -> Self {
        match lookup {
            Lookup::Found(rows) => Reply::ImmediateJoiners(rows),
            Lookup::NotFound(msg) => Reply::NotFound(msg.to_string()),
        }
    }
}

impl From<Lookup<InterviewRecord>> for Reply {
    fn from(lookup: Lookup<InterviewRecord>) -> Self {
        match lookup {
            Lookup::Found(rows) => Reply::InterviewSchedule(rows),
            Lookup::NotFound(msg) => Reply::NotFound(msg.to_string()),
        }
    }
}

/// Response for the applicant count endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantCountResponse {
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub candidates: usize,
    pub interviews: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_serializes_with_kind_tag() {
        let reply = Reply::from(Lookup::<ImmediateJoiner>::NotFound("No immediate joiners found."));
        let json = serde_json::to_value(&reply).unwrap();

        assert_eq!(json["kind"], "not_found");
        assert_eq!(json["data"], "No immediate joiners found.");
        assert!(!reply.is_table());
    }

    #[test]
    fn table_reply_has_no_message() {
        let reply = Reply::TopCandidates(vec![RankedCandidate {
            name: "Asha".to_string(),
            job_title: "data analyst".to_string(),
            experience_years: 5.0,
            match_score: 59.0,
        }]);

        assert!(reply.is_table());
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["kind"], "top_candidates");
        assert_eq!(json["data"][0]["matchScore"], 59.0);
    }
}
