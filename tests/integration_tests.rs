// Integration tests for Talent Hunt

use std::sync::Arc;
use talent_hunt::core::intent::{FALLBACK_MESSAGE, HELP_MESSAGE, TOP_CANDIDATES_PROMPT};
use talent_hunt::core::{IntentRouter, Matcher};
use talent_hunt::models::{Action, JobTitle, Lookup, Reply};
use talent_hunt::services::DataStore;

const CANDIDATES: &str = "\
Name,Job Title Applied,Skills,Availability,Experience (Years),Cultural Fit Score
Asha,Data Analyst,\"['Python', 'SQL']\",Immediate,5,8
Kofi,Data Analyst,\"['Python', 'SQL', 'Data Visualization']\",Immediate,8,7
Lin,Data Analyst,\"['Excel']\",Not Immediate,6,9
Marco,DevOps Engineer,\"['Linux', 'Docker']\",Immediate,6,7
Hana,DevOps Engineer,\"['Node.js']\",2 Weeks,2,8
Lucas,DevOps Engineer,\"['Docker', 'Cloud Computing']\",Immediate,1,6
";

const INTERVIEWS: &str = "\
Candidate,Job Title,Interview Date,Interviewer
Asha,Data Analyst,2025-07-01,Meera
Marco,DevOps Engineer,2025-07-02,Arjun
";

fn create_store() -> Arc<DataStore> {
    Arc::new(DataStore::from_readers(CANDIDATES.as_bytes(), INTERVIEWS.as_bytes()).unwrap())
}

fn create_router() -> IntentRouter {
    IntentRouter::new(Matcher::with_default_weights(create_store()))
}

#[test]
fn test_integration_end_to_end_ranking() {
    let matcher = Matcher::with_default_weights(create_store());

    let result = matcher.top_candidates("data analyst");
    let rows = result.rows().expect("Expected ranked candidates");

    assert_eq!(rows.len(), 2, "Lin is not an immediate joiner");
    for i in 1..rows.len() {
        assert!(rows[i - 1].match_score >= rows[i].match_score, "Rows not sorted by score");
    }
    for row in rows {
        assert!(row.match_score >= 0.0 && row.match_score <= 100.0);
        assert_eq!(row.job_title, "data analyst");
    }
}

#[test]
fn test_immediate_joiners_match_definition() {
    let store = create_store();
    let matcher = Matcher::with_default_weights(store.clone());

    for title in JobTitle::ALL {
        let joiners = matcher.immediate_joiners(title.key());
        let names: Vec<&str> = joiners
            .rows()
            .map(|rows| rows.iter().map(|r| r.name.as_str()).collect())
            .unwrap_or_default();

        for candidate in store.candidates() {
            let expected = candidate.job_title == title.key() && candidate.availability.is_immediate();
            assert_eq!(names.contains(&candidate.name.as_str()), expected, "{}", candidate.name);
        }
    }
}

#[test]
fn test_total_applicants_is_superset_of_ranking_pool() {
    let matcher = Matcher::with_default_weights(create_store());

    for title in JobTitle::ALL {
        let total = matcher.total_applicants(title.key());
        let ranked = matcher
            .top_candidates_with(title.key(), 0.0)
            .rows()
            .map(<[_]>::len)
            .unwrap_or(0);
        assert!(total >= ranked);
    }
    assert_eq!(matcher.total_applicants("DevOps Engineer"), 3);
}

#[test]
fn test_assistant_counts_devops_applicants() {
    let router = create_router();

    let reply = router.route("how many applied for DevOps Engineer");
    assert_eq!(
        reply,
        Reply::Text("Total candidates applied for 'Devops Engineer': 3".to_string())
    );
}

#[test]
fn test_assistant_fallback_and_help() {
    let router = create_router();

    assert_eq!(router.route("hello"), Reply::Text(FALLBACK_MESSAGE.to_string()));
    assert_eq!(router.route("what can you do?"), Reply::Help(HELP_MESSAGE.to_string()));
    assert_eq!(router.route("top candidates"), Reply::Prompt(TOP_CANDIDATES_PROMPT.to_string()));
}

#[test]
fn test_assistant_routes_tables() {
    let router = create_router();

    match router.route("Show top candidates for Data Analyst") {
        Reply::TopCandidates(rows) => assert_eq!(rows[0].name, "Kofi"),
        other => panic!("Expected top candidates, got {:?}", other),
    }

    match router.route("interview schedule for devops engineer") {
        Reply::InterviewSchedule(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].detail("Candidate"), Some("Marco"));
        }
        other => panic!("Expected schedule, got {:?}", other),
    }
}

#[test]
fn test_no_results_sentinels() {
    let router = create_router();
    let matcher = router.matcher();

    assert_eq!(
        matcher.immediate_joiners("Python Project Manager"),
        Lookup::NotFound("No immediate joiners found.")
    );
    assert_eq!(
        router.perform(Action::ShowTopCandidates, JobTitle::SoftwareEngineer),
        Reply::NotFound("No matching candidates found.".to_string())
    );
    assert_eq!(
        router.perform(Action::InterviewSchedule, JobTitle::PythonProjectManager),
        Reply::NotFound("No interview schedules found.".to_string())
    );
}

#[test]
fn test_sample_dataset_loads() {
    let store = DataStore::load("data/candidates.csv", "data/interview_schedule.csv")
        .expect("Sample dataset should load");

    assert!(!store.candidates().is_empty());
    assert!(!store.interviews().is_empty());

    let router = IntentRouter::new(Matcher::with_default_weights(Arc::new(store)));
    assert!(router.route("best data analyst").is_table());
}
