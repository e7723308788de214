use crate::models::{Candidate, ScoringWeights};

/// Calculate a match score (0-100) for a candidate against a role's required skills
///
/// Scoring formula:
/// score = (
///     skill_score * 0.5 +          # share of required skills the candidate has
///     experience_score * 0.2 +     # years / 10, capped at 1
///     fit_score * 0.3              # cultural fit / 10
/// ) * 100, rounded to 2 decimals
pub fn calculate_match_score(
    candidate: &Candidate,
    required_skills: &[&str],
    weights: &ScoringWeights,
) -> f64 {
    let skill_score = calculate_skill_score(candidate, required_skills);
    let experience_score =
        calculate_experience_score(candidate.experience_years, weights.experience_cap_years);
    let fit_score = calculate_fit_score(candidate.cultural_fit);

    let total_score = (skill_score * weights.skills
        + experience_score * weights.experience
        + fit_score * weights.cultural_fit)
        * 100.0;

    round_to_cents(total_score.clamp(0.0, 100.0))
}

/// Calculate skill score (0-1)
/// Share of required skills the candidate lists, case-insensitive.
/// A role with no known requirements scores 0.
#[inline]
pub fn calculate_skill_score(candidate: &Candidate, required_skills: &[&str]) -> f64 {
    if required_skills.is_empty() {
        return 0.0;
    }

    let matched = required_skills
        .iter()
        .filter(|required| {
            candidate
                .skills
                .iter()
                .any(|skill| skill.to_lowercase() == **required)
        })
        .count();

    matched as f64 / required_skills.len() as f64
}

/// Calculate experience score (0-1)
#[inline]
fn calculate_experience_score(experience_years: f64, cap_years: f64) -> f64 {
    if cap_years <= 0.0 {
        return 1.0;
    }

    (experience_years / cap_years).min(1.0)
}

/// Calculate cultural fit score (0-1)
#[inline]
fn calculate_fit_score(cultural_fit: f64) -> f64 {
    cultural_fit / 10.0
}

#[inline]
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
