use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    ActionRequest, ApplicantCountResponse, AskRequest, ErrorResponse, HealthResponse,
    InterviewQuery, JobTitleQuery, Reply, TopCandidatesQuery,
};
use crate::core::IntentRouter;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub router: IntentRouter,
}

/// Configure all recruiting routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/candidates/top", web::get().to(top_candidates))
        .route("/candidates/count", web::get().to(total_applicants))
        .route("/candidates/immediate", web::get().to(immediate_joiners))
        .route("/interviews", web::get().to(interview_schedule))
        .route("/actions", web::post().to(perform_action))
        .route("/assistant/ask", web::post().to(ask_assistant));
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store = state.router.matcher().store();

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        candidates: store.candidates().len(),
        interviews: store.interviews().len(),
    })
}

/// Top candidates endpoint
///
/// GET /api/v1/candidates/top?jobTitle=Data%20Analyst&minExperience=3
async fn top_candidates(
    state: web::Data<AppState>,
    query: web::Query<TopCandidatesQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    let matcher = state.router.matcher();
    let min_experience = query.min_experience.unwrap_or_else(|| matcher.min_experience());

    tracing::info!(
        "Ranking candidates for '{}' (min experience {})",
        query.job_title,
        min_experience
    );

    let reply = Reply::from(matcher.top_candidates_with(&query.job_title, min_experience));
    HttpResponse::Ok().json(reply)
}

/// Total applicants endpoint
///
/// GET /api/v1/candidates/count?jobTitle=DevOps%20Engineer
async fn total_applicants(
    state: web::Data<AppState>,
    query: web::Query<JobTitleQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    let total = state.router.matcher().total_applicants(&query.job_title);

    HttpResponse::Ok().json(ApplicantCountResponse {
        job_title: query.job_title.clone(),
        total,
    })
}

/// Immediate joiners endpoint
///
/// GET /api/v1/candidates/immediate?jobTitle=Software%20Engineer
async fn immediate_joiners(
    state: web::Data<AppState>,
    query: web::Query<JobTitleQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    let reply = Reply::from(state.router.matcher().immediate_joiners(&query.job_title));
    HttpResponse::Ok().json(reply)
}

/// Interview schedule endpoint; without a job title every record is returned
///
/// GET /api/v1/interviews?jobTitle=Data%20Analyst
async fn interview_schedule(
    state: web::Data<AppState>,
    query: web::Query<InterviewQuery>,
) -> impl Responder {
    let reply = Reply::from(state.router.matcher().interview_schedule(query.job_title.as_deref()));
    HttpResponse::Ok().json(reply)
}

/// Action selector endpoint
///
/// POST /api/v1/actions
///
/// Request body:
/// ```json
/// {
///   "action": "show_top_candidates|total_applicants|immediate_joiners|interview_schedule",
///   "jobTitle": "data_analyst|devops_engineer|software_engineer|python_project_manager"
/// }
/// ```
async fn perform_action(
    state: web::Data<AppState>,
    req: web::Json<ActionRequest>,
) -> impl Responder {
    tracing::info!("Action '{}' for '{}'", req.action.label(), req.job_title);

    HttpResponse::Ok().json(state.router.perform(req.action, req.job_title))
}

/// Free-text assistant endpoint
///
/// POST /api/v1/assistant/ask
///
/// Request body:
/// ```json
/// { "query": "show top candidates for data analyst" }
/// ```
async fn ask_assistant(
    state: web::Data<AppState>,
    req: web::Json<AskRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let reply = state.router.route(&req.query);
    tracing::info!("Assistant answered {:?} with a table={} reply", req.query, reply.is_table());

    HttpResponse::Ok().json(reply)
}
