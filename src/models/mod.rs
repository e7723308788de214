// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    normalize_title, Action, Availability, Candidate, ImmediateJoiner, InterviewRecord, JobTitle,
    Lookup, RankedCandidate, ScoringWeights, UnknownJobTitle,
};
pub use requests::{ActionRequest, AskRequest, InterviewQuery, JobTitleQuery, TopCandidatesQuery};
pub use responses::{ApplicantCountResponse, ErrorResponse, HealthResponse, Reply};
