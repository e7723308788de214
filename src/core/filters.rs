use crate::models::Candidate;

/// Check if a candidate applied for the given normalized job title
#[inline]
pub fn matches_job_title(candidate: &Candidate, job_title: &str) -> bool {
    candidate.job_title == job_title
}

/// Check if a candidate can join immediately for the given job title
#[inline]
pub fn is_immediate_joiner(candidate: &Candidate, job_title: &str) -> bool {
    matches_job_title(candidate, job_title) && candidate.availability.is_immediate()
}

/// Check if a candidate is eligible for top-candidate ranking
///
/// Requires a matching title, immediate availability and at least
/// `min_experience` years.
#[inline]
pub fn is_ranking_eligible(candidate: &Candidate, job_title: &str, min_experience: f64) -> bool {
    is_immediate_joiner(candidate, job_title) && candidate.experience_years >= min_experience
}
