use crate::core::Matcher;
use crate::models::{Action, JobTitle, Reply};

pub const TOP_CANDIDATES_PROMPT: &str =
    "Please mention the job title to view top candidates (e.g., 'top candidates for Data Analyst').";
pub const TOTAL_APPLICANTS_PROMPT: &str =
    "Please specify the job title (e.g., 'how many applied for DevOps Engineer').";
pub const IMMEDIATE_JOINERS_PROMPT: &str =
    "Please mention the job title to view immediate joiners (e.g., 'immediate joiners for Software Engineer').";

pub const HELP_MESSAGE: &str = "You can ask things like:\n\
- Show top candidates for DevOps Engineer\n\
- Who is available immediately for Data Analyst?\n\
- How many people applied for Python Project Manager?\n\
- Show interview schedule for Software Engineer";

pub const FALLBACK_MESSAGE: &str =
    "I'm here to help! Try asking about top candidates, total applicants, immediate joiners, or interview schedules.";

/// Purpose of a free-text question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    TopCandidates,
    TotalApplicants,
    ImmediateJoiners,
    InterviewSchedule,
    Help,
    Unknown,
}

impl Intent {
    /// Intents with keywords, in the order they are checked
    const PRIORITY: [Intent; 5] = [
        Intent::TopCandidates,
        Intent::TotalApplicants,
        Intent::ImmediateJoiners,
        Intent::InterviewSchedule,
        Intent::Help,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Intent::TopCandidates => &["top", "best", "fit"],
            Intent::TotalApplicants => &["how many", "total", "applied", "applicants"],
            Intent::ImmediateJoiners => &["immediate", "join now", "available"],
            Intent::InterviewSchedule => &["interview", "schedule"],
            Intent::Help => &["help", "what can you do", "options"],
            Intent::Unknown => &[],
        }
    }

    /// Classify a lowercased query; the first intent with a keyword substring wins
    pub fn classify(query: &str) -> Intent {
        Intent::PRIORITY
            .into_iter()
            .find(|intent| intent.keywords().iter().any(|keyword| query.contains(keyword)))
            .unwrap_or(Intent::Unknown)
    }
}

/// Find the job title mentioned in a lowercased query
///
/// When several titles appear the longest one wins; equal lengths fall back
/// to [`JobTitle::ALL`] order.
pub fn detect_job_title(query: &str) -> Option<JobTitle> {
    JobTitle::ALL
        .into_iter()
        .filter(|title| query.contains(title.key()))
        .fold(None, |best: Option<JobTitle>, title| match best {
            Some(current) if current.key().len() >= title.key().len() => Some(current),
            _ => Some(title),
        })
}

/// Keyword-based assistant that routes questions to the matcher
#[derive(Debug, Clone)]
pub struct IntentRouter {
    matcher: Matcher,
}

impl IntentRouter {
    pub fn new(matcher: Matcher) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Answer a free-text question
    pub fn route(&self, query: &str) -> Reply {
        let query = query.to_lowercase();
        let job_title = detect_job_title(&query);
        let intent = Intent::classify(&query);

        tracing::debug!("Routing query: intent={:?}, job_title={:?}", intent, job_title);

        match (intent, job_title) {
            (Intent::TopCandidates, Some(title)) => self.matcher.top_candidates(title.key()).into(),
            (Intent::TopCandidates, None) => Reply::Prompt(TOP_CANDIDATES_PROMPT.to_string()),
            (Intent::TotalApplicants, Some(title)) => {
                let count = self.matcher.total_applicants(title.key());
                Reply::Text(applicant_count_sentence(&title.title_case(), count))
            }
            (Intent::TotalApplicants, None) => Reply::Prompt(TOTAL_APPLICANTS_PROMPT.to_string()),
            (Intent::ImmediateJoiners, Some(title)) => {
                self.matcher.immediate_joiners(title.key()).into()
            }
            (Intent::ImmediateJoiners, None) => Reply::Prompt(IMMEDIATE_JOINERS_PROMPT.to_string()),
            (Intent::InterviewSchedule, title) => self
                .matcher
                .interview_schedule(title.map(JobTitle::key))
                .into(),
            (Intent::Help, _) => Reply::Help(HELP_MESSAGE.to_string()),
            (Intent::Unknown, _) => Reply::Text(FALLBACK_MESSAGE.to_string()),
        }
    }

    /// Run an action picked from the selector for a known job title
    pub fn perform(&self, action: Action, job_title: JobTitle) -> Reply {
        tracing::debug!("Performing action '{}' for '{}'", action.label(), job_title);

        match action {
            Action::ShowTopCandidates => self.matcher.top_candidates(job_title.key()).into(),
            Action::TotalApplicants => {
                let count = self.matcher.total_applicants(job_title.key());
                Reply::Text(applicant_count_sentence(job_title.label(), count))
            }
            Action::ImmediateJoiners => self.matcher.immediate_joiners(job_title.key()).into(),
            Action::InterviewSchedule => {
                self.matcher.interview_schedule(Some(job_title.key())).into()
            }
        }
    }
}

fn applicant_count_sentence(title: &str, count: usize) -> String {
    format!("Total candidates applied for '{}': {}", title, count)
}
