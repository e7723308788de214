use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Action, JobTitle};

/// Query string for the top candidates endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TopCandidatesQuery {
    #[validate(length(min = 1))]
    #[serde(alias = "job_title", rename = "jobTitle")]
    pub job_title: String,
    #[validate(range(min = 0.0))]
    #[serde(alias = "min_experience", rename = "minExperience", default)]
    pub min_experience: Option<f64>,
}

/// Query string carrying a required job title
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JobTitleQuery {
    #[validate(length(min = 1))]
    #[serde(alias = "job_title", rename = "jobTitle")]
    pub job_title: String,
}

/// Query string for the interview schedule endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewQuery {
    #[serde(alias = "job_title", rename = "jobTitle", default)]
    pub job_title: Option<String>,
}

/// Action selector submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: Action,
    #[serde(alias = "job_title", rename = "jobTitle")]
    pub job_title: JobTitle,
}

/// Free-text question for the assistant
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AskRequest {
    #[validate(length(min = 1))]
    pub query: String,
}
