use crate::models::{normalize_title, Availability, Candidate, InterviewRecord};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

const JOB_TITLE_COLUMN: &str = "Job Title";

/// Errors that can occur while loading the recruiting dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Record {record}: malformed skills literal {value:?}")]
    MalformedSkills { record: usize, value: String },

    #[error("Record {record}: {reason}")]
    InvalidValue { record: usize, reason: String },

    #[error("Interview schedule is missing the '{0}' column")]
    MissingColumn(&'static str),
}

/// Immutable in-memory copy of the candidates and interview tables
///
/// Built once at startup and shared read-only by the matcher and the
/// assistant.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    candidates: Vec<Candidate>,
    interviews: Vec<InterviewRecord>,
}

impl DataStore {
    pub fn new(candidates: Vec<Candidate>, interviews: Vec<InterviewRecord>) -> Self {
        Self {
            candidates,
            interviews,
        }
    }

    /// Load both tables from CSV files on disk
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        candidates_path: P,
        interviews_path: Q,
    ) -> Result<Self, DatasetError> {
        let candidates = read_candidates(open(candidates_path.as_ref())?)?;
        let interviews = read_interviews(open(interviews_path.as_ref())?)?;

        tracing::info!(
            "Loaded {} candidates from {} and {} interview records from {}",
            candidates.len(),
            candidates_path.as_ref().display(),
            interviews.len(),
            interviews_path.as_ref().display()
        );

        Ok(Self::new(candidates, interviews))
    }

    /// Load both tables from arbitrary readers
    pub fn from_readers<C: Read, I: Read>(candidates: C, interviews: I) -> Result<Self, DatasetError> {
        Ok(Self::new(read_candidates(candidates)?, read_interviews(interviews)?))
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn interviews(&self) -> &[InterviewRecord] {
        &self.interviews
    }
}

fn open(path: &Path) -> Result<File, DatasetError> {
    File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Deserialize)]
struct CandidateRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Job Title Applied")]
    job_title: String,
    #[serde(rename = "Skills")]
    skills: String,
    #[serde(rename = "Availability")]
    availability: String,
    #[serde(rename = "Experience (Years)")]
    experience_years: f64,
    #[serde(rename = "Cultural Fit Score")]
    cultural_fit: f64,
}

/// Parse the candidates table
///
/// Job titles and availability are lowercased; skills keep their spelling.
pub fn read_candidates<R: Read>(reader: R) -> Result<Vec<Candidate>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut candidates = Vec::new();

    for (index, row) in csv_reader.deserialize::<CandidateRow>().enumerate() {
        let row = row?;
        let record = index + 1;

        let skills = parse_skill_list(&row.skills).ok_or_else(|| DatasetError::MalformedSkills {
            record,
            value: row.skills.clone(),
        })?;

        if !row.experience_years.is_finite() || row.experience_years < 0.0 {
            return Err(DatasetError::InvalidValue {
                record,
                reason: format!("experience must be a non-negative number, got {}", row.experience_years),
            });
        }

        if !(0.0..=10.0).contains(&row.cultural_fit) {
            return Err(DatasetError::InvalidValue {
                record,
                reason: format!("cultural fit score must be within 0-10, got {}", row.cultural_fit),
            });
        }

        candidates.push(Candidate {
            name: row.name,
            job_title: normalize_title(&row.job_title),
            skills,
            experience_years: row.experience_years,
            availability: Availability::parse(&row.availability),
            cultural_fit: row.cultural_fit,
        });
    }

    tracing::debug!("Parsed {} candidate rows", candidates.len());
    Ok(candidates)
}

/// Parse the interview schedule table
///
/// Only the job title column is interpreted (lowercased); every column keeps
/// its header name and position.
pub fn read_interviews<R: Read>(reader: R) -> Result<Vec<InterviewRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let title_index = headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(JOB_TITLE_COLUMN))
        .ok_or(DatasetError::MissingColumn(JOB_TITLE_COLUMN))?;

    let mut interviews = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let job_title = normalize_title(record.get(title_index).unwrap_or_default());
        let columns = headers
            .iter()
            .zip(record.iter())
            .enumerate()
            .map(|(index, (column, value))| {
                let value = if index == title_index { job_title.clone() } else { value.to_string() };
                (column.to_string(), value)
            })
            .collect();

        interviews.push(InterviewRecord { job_title, columns });
    }

    tracing::debug!("Parsed {} interview rows", interviews.len());
    Ok(interviews)
}

/// Parse a collection literal such as `['Python', "SQL"]` into a set of skills
///
/// Accepts list, set and tuple brackets with single- or double-quoted items.
/// Returns `None` when the literal is malformed.
pub fn parse_skill_list(raw: &str) -> Option<BTreeSet<String>> {
    let trimmed = raw.trim();
    if trimmed == "set()" {
        return Some(BTreeSet::new());
    }

    let inner = [('[', ']'), ('{', '}'), ('(', ')')]
        .iter()
        .find_map(|(open, close)| trimmed.strip_prefix(*open)?.strip_suffix(*close))?;

    let mut skills = BTreeSet::new();
    let mut chars = inner.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let quote = match chars.next() {
            None => break,
            Some(q @ ('\'' | '"')) => q,
            Some(_) => return None,
        };

        let mut item = String::new();
        loop {
            match chars.next()? {
                '\\' => item.push(chars.next()?),
                c if c == quote => break,
                c => item.push(c),
            }
        }
        skills.insert(item);

        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        match chars.next() {
            None => break,
            Some(',') => continue,
            Some(_) => return None,
        }
    }

    Some(skills)
}
