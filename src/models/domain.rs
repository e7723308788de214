use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Job titles the recruiting team hires for
///
/// Deserializes from keys, selector labels or snake_case names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum JobTitle {
    DataAnalyst,
    DevopsEngineer,
    SoftwareEngineer,
    PythonProjectManager,
}

impl JobTitle {
    /// All known titles, in the order free-text detection scans them
    pub const ALL: [JobTitle; 4] = [
        JobTitle::DataAnalyst,
        JobTitle::DevopsEngineer,
        JobTitle::SoftwareEngineer,
        JobTitle::PythonProjectManager,
    ];

    /// Normalized lowercase key used to match dataset rows
    pub fn key(self) -> &'static str {
        match self {
            JobTitle::DataAnalyst => "data analyst",
            JobTitle::DevopsEngineer => "devops engineer",
            JobTitle::SoftwareEngineer => "software engineer",
            JobTitle::PythonProjectManager => "python project manager",
        }
    }

    /// Spelling shown in the job title selector
    pub fn label(self) -> &'static str {
        match self {
            JobTitle::DataAnalyst => "Data Analyst",
            JobTitle::DevopsEngineer => "DevOps Engineer",
            JobTitle::SoftwareEngineer => "Software Engineer",
            JobTitle::PythonProjectManager => "Python Project Manager",
        }
    }

    /// Key with every word capitalized ("devops engineer" -> "Devops Engineer")
    pub fn title_case(self) -> String {
        self.key()
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Skills a candidate needs for this role, lowercase
    pub fn required_skills(self) -> &'static [&'static str] {
        match self {
            JobTitle::DataAnalyst => &["python", "sql", "data visualization", "communication"],
            JobTitle::DevopsEngineer => &["cloud computing", "node.js", "linux", "docker"],
            JobTitle::SoftwareEngineer => &["machine learning", "cloud computing", "ai"],
            JobTitle::PythonProjectManager => {
                &["python", "project management", "communication", "leadership"]
            }
        }
    }
}

impl fmt::Display for JobTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JobTitle {
    type Err = UnknownJobTitle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_title(s);
        JobTitle::ALL
            .into_iter()
            .find(|title| title.key() == normalized || title.key().replace(' ', "_") == normalized)
            .ok_or_else(|| UnknownJobTitle(s.to_string()))
    }
}

impl TryFrom<String> for JobTitle {
    type Error = UnknownJobTitle;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown job title: {0}")]
pub struct UnknownJobTitle(pub String);

/// Lowercase and trim a job title so it can be compared against dataset keys
pub fn normalize_title(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Structured request coming from the action selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ShowTopCandidates,
    TotalApplicants,
    ImmediateJoiners,
    InterviewSchedule,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::ShowTopCandidates => "Show Top Candidates",
            Action::TotalApplicants => "Total Applicants",
            Action::ImmediateJoiners => "Immediate Joiners",
            Action::InterviewSchedule => "Interview Schedule",
        }
    }
}

/// Candidate availability to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Immediate,
    Other(String),
}

impl Availability {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        if normalized == "immediate" {
            Availability::Immediate
        } else {
            Availability::Other(normalized)
        }
    }

    pub fn is_immediate(&self) -> bool {
        matches!(self, Availability::Immediate)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Availability::Immediate => "immediate",
            Availability::Other(label) => label,
        }
    }
}

impl Serialize for Availability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Applicant loaded from the candidates table
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub name: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    pub skills: BTreeSet<String>,
    #[serde(rename = "experienceYears")]
    pub experience_years: f64,
    pub availability: Availability,
    #[serde(rename = "culturalFit")]
    pub cultural_fit: f64,
}

/// Interview schedule row
///
/// Columns are kept in header order with their original names; only the
/// job title cell is lowercased, every other value passes through as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewRecord {
    pub job_title: String,
    pub columns: Vec<(String, String)>,
}

impl InterviewRecord {
    /// Record with a leading "Job Title" column followed by `details`
    pub fn new(job_title: &str, details: Vec<(String, String)>) -> Self {
        let job_title = normalize_title(job_title);
        let mut columns = Vec::with_capacity(details.len() + 1);
        columns.push(("Job Title".to_string(), job_title.clone()));
        columns.extend(details);
        Self { job_title, columns }
    }

    pub fn detail(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

impl Serialize for InterviewRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in &self.columns {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Scored top-candidate row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub name: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    #[serde(rename = "experienceYears")]
    pub experience_years: f64,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
}

/// Immediate joiner row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImmediateJoiner {
    pub name: String,
    #[serde(rename = "experienceYears")]
    pub experience_years: f64,
    pub availability: String,
}

/// Either rows or a human-readable "nothing found" sentinel
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(Vec<T>),
    NotFound(&'static str),
}

impl<T> Lookup<T> {
    pub(crate) fn from_rows(rows: Vec<T>, empty_message: &'static str) -> Self {
        if rows.is_empty() {
            Lookup::NotFound(empty_message)
        } else {
            Lookup::Found(rows)
        }
    }

    pub fn rows(&self) -> Option<&[T]> {
        match self {
            Lookup::Found(rows) => Some(rows),
            Lookup::NotFound(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Lookup::NotFound(_))
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub cultural_fit: f64,
    /// Years of experience at which the experience component saturates
    pub experience_cap_years: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.5,
            experience: 0.2,
            cultural_fit: 0.3,
            experience_cap_years: 10.0,
        }
    }
}
