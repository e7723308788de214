use crate::core::{
    filters::{is_immediate_joiner, is_ranking_eligible, matches_job_title},
    scoring::calculate_match_score,
};
use crate::models::{
    normalize_title, ImmediateJoiner, InterviewRecord, JobTitle, Lookup, RankedCandidate,
    ScoringWeights,
};
use crate::services::DataStore;
use std::sync::Arc;

pub const NO_MATCHING_CANDIDATES: &str = "No matching candidates found.";
pub const NO_IMMEDIATE_JOINERS: &str = "No immediate joiners found.";
pub const NO_INTERVIEW_SCHEDULES: &str = "No interview schedules found.";

/// Minimum years of experience for top-candidate ranking unless configured otherwise
pub const DEFAULT_MIN_EXPERIENCE: f64 = 3.0;

/// Candidate matcher - answers every recruiting query over the loaded dataset
///
/// All queries are read-only scans; job titles are compared after
/// lowercasing.
///
/// # Ranking Stages
/// 1. Title, availability and experience filtering
/// 2. Scoring against the role's required skills
/// 3. Stable sort by score, descending
#[derive(Debug, Clone)]
pub struct Matcher {
    store: Arc<DataStore>,
    weights: ScoringWeights,
    min_experience: f64,
}

impl Matcher {
    pub fn new(store: Arc<DataStore>, weights: ScoringWeights) -> Self {
        Self {
            store,
            weights,
            min_experience: DEFAULT_MIN_EXPERIENCE,
        }
    }

    pub fn with_default_weights(store: Arc<DataStore>) -> Self {
        Self::new(store, ScoringWeights::default())
    }

    /// Override the experience threshold used by [`Matcher::top_candidates`]
    pub fn with_min_experience(mut self, min_experience: f64) -> Self {
        self.min_experience = min_experience;
        self
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn min_experience(&self) -> f64 {
        self.min_experience
    }

    /// Rank immediate joiners for a role using the default experience threshold
    pub fn top_candidates(&self, job_title: &str) -> Lookup<RankedCandidate> {
        self.top_candidates_with(job_title, self.min_experience)
    }

    /// Rank immediate joiners for a role with at least `min_experience` years
    ///
    /// Unknown titles have no required skills, so every candidate's skill
    /// component is zero.
    pub fn top_candidates_with(&self, job_title: &str, min_experience: f64) -> Lookup<RankedCandidate> {
        let job_title = normalize_title(job_title);
        let required_skills = job_title
            .parse::<JobTitle>()
            .map(JobTitle::required_skills)
            .unwrap_or(&[]);

        let mut ranked: Vec<RankedCandidate> = self
            .store
            .candidates()
            .iter()
            .filter(|candidate| is_ranking_eligible(candidate, &job_title, min_experience))
            .map(|candidate| RankedCandidate {
                name: candidate.name.clone(),
                job_title: candidate.job_title.clone(),
                experience_years: candidate.experience_years,
                match_score: calculate_match_score(candidate, required_skills, &self.weights),
            })
            .collect();

        // Stable sort keeps dataset order for equal scores
        ranked.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(
            "Ranked {} candidates for '{}' (min experience {})",
            ranked.len(),
            job_title,
            min_experience
        );

        Lookup::from_rows(ranked, NO_MATCHING_CANDIDATES)
    }

    /// Count every applicant for a role, regardless of availability or experience
    pub fn total_applicants(&self, job_title: &str) -> usize {
        let job_title = normalize_title(job_title);
        self.store
            .candidates()
            .iter()
            .filter(|candidate| matches_job_title(candidate, &job_title))
            .count()
    }

    /// List applicants for a role who can start immediately
    pub fn immediate_joiners(&self, job_title: &str) -> Lookup<ImmediateJoiner> {
        let job_title = normalize_title(job_title);
        let joiners = self
            .store
            .candidates()
            .iter()
            .filter(|candidate| is_immediate_joiner(candidate, &job_title))
            .map(|candidate| ImmediateJoiner {
                name: candidate.name.clone(),
                experience_years: candidate.experience_years,
                availability: candidate.availability.as_str().to_string(),
            })
            .collect();

        Lookup::from_rows(joiners, NO_IMMEDIATE_JOINERS)
    }

    /// Interview records for a role, or all records when no title is given
    ///
    /// An empty or blank title counts as no title.
    pub fn interview_schedule(&self, job_title: Option<&str>) -> Lookup<InterviewRecord> {
        let job_title = job_title.map(str::trim).filter(|title| !title.is_empty());
        let records = match job_title {
            Some(title) => {
                let title = normalize_title(title);
                self.store
                    .interviews()
                    .iter()
                    .filter(|record| record.job_title == title)
                    .cloned()
                    .collect()
            }
            None => self.store.interviews().to_vec(),
        };

        Lookup::from_rows(records, NO_INTERVIEW_SCHEDULES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, Candidate};
    use std::collections::BTreeSet;

    fn create_candidate(
        name: &str,
        job_title: &str,
        skills: &[&str],
        experience_years: f64,
        availability: &str,
        cultural_fit: f64,
    ) -> Candidate {
        Candidate {
            name: name.to_string(),
            job_title: job_title.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
            experience_years,
            availability: Availability::parse(availability),
            cultural_fit,
        }
    }

    fn create_interview(job_title: &str, date: &str) -> InterviewRecord {
        InterviewRecord::new(job_title, vec![("Date".to_string(), date.to_string())])
    }

    fn create_matcher() -> Matcher {
        let candidates = vec![
            create_candidate("Asha", "data analyst", &["python", "sql"], 5.0, "immediate", 8.0),
            create_candidate("Ravi", "data analyst", &["python"], 2.0, "immediate", 9.0),
            create_candidate("Mei", "data analyst", &["python", "sql", "communication"], 7.0, "immediate", 6.0),
            create_candidate("Omar", "data analyst", &["sql"], 9.0, "1 month", 9.0),
            create_candidate("Lena", "devops engineer", &["linux", "docker"], 4.0, "immediate", 7.0),
        ];
        let interviews = vec![
            create_interview("data analyst", "2025-07-01"),
            create_interview("devops engineer", "2025-07-02"),
        ];

        Matcher::with_default_weights(Arc::new(DataStore::new(candidates, interviews)))
    }

    #[test]
    fn test_top_candidates_filters_and_sorts() {
        let matcher = create_matcher();

        let result = matcher.top_candidates("Data Analyst");
        let rows = result.rows().expect("rows returned");

        // Ravi lacks experience, Omar is not immediately available
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Mei");
        assert_eq!(rows[1].name, "Asha");
        assert!(rows[0].match_score >= rows[1].match_score);
        assert!((rows[1].match_score - 59.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_candidates_respects_min_experience() {
        let matcher = create_matcher();

        let result = matcher.top_candidates_with("data analyst", 0.0);
        assert_eq!(result.rows().map(<[_]>::len), Some(3));

        let strict = matcher.top_candidates_with("data analyst", 20.0);
        assert_eq!(strict, Lookup::NotFound(NO_MATCHING_CANDIDATES));
    }

    #[test]
    fn test_top_candidates_ties_keep_dataset_order() {
        let candidates = vec![
            create_candidate("First", "software engineer", &["ai"], 4.0, "immediate", 7.0),
            create_candidate("Second", "software engineer", &["ai"], 4.0, "immediate", 7.0),
        ];
        let matcher = Matcher::with_default_weights(Arc::new(DataStore::new(candidates, vec![])));

        let result = matcher.top_candidates("software engineer");
        let names: Vec<_> = result.rows().unwrap().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_unknown_title_scores_without_skills() {
        let candidates = vec![create_candidate("Zed", "astronaut", &["python"], 10.0, "immediate", 10.0)];
        let matcher = Matcher::with_default_weights(Arc::new(DataStore::new(candidates, vec![])));

        let result = matcher.top_candidates("Astronaut");
        let rows = result.rows().unwrap();
        assert_eq!(rows[0].match_score, 50.0);
    }

    #[test]
    fn test_total_applicants_ignores_availability() {
        let matcher = create_matcher();

        assert_eq!(matcher.total_applicants("DATA ANALYST"), 4);
        assert_eq!(matcher.total_applicants("devops engineer"), 1);
        assert_eq!(matcher.total_applicants("python project manager"), 0);
    }

    #[test]
    fn test_immediate_joiners() {
        let matcher = create_matcher();

        let result = matcher.immediate_joiners("Data Analyst");
        let names: Vec<_> = result.rows().unwrap().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Asha", "Ravi", "Mei"]);

        let none = matcher.immediate_joiners("Software Engineer");
        assert_eq!(none, Lookup::NotFound(NO_IMMEDIATE_JOINERS));
    }

    #[test]
    fn test_interview_schedule() {
        let matcher = create_matcher();

        assert_eq!(matcher.interview_schedule(None).rows().map(<[_]>::len), Some(2));
        assert_eq!(
            matcher.interview_schedule(Some("DevOps Engineer")).rows().map(<[_]>::len),
            Some(1)
        );
        assert_eq!(
            matcher.interview_schedule(Some("software engineer")),
            Lookup::NotFound(NO_INTERVIEW_SCHEDULES)
        );
    }

    #[test]
    fn test_interview_schedule_blank_title_lists_everything() {
        let matcher = create_matcher();

        assert_eq!(matcher.interview_schedule(Some("")), matcher.interview_schedule(None));
        assert_eq!(matcher.interview_schedule(Some("   ")).rows().map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_queries_are_idempotent() {
        let matcher = create_matcher();

        assert_eq!(matcher.top_candidates("data analyst"), matcher.top_candidates("data analyst"));
        assert_eq!(matcher.immediate_joiners("data analyst"), matcher.immediate_joiners("data analyst"));
    }
}
