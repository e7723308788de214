// Route exports
pub mod candidates;
pub mod errors;

pub use errors::{handle_json_payload_error, handle_query_payload_error, JsonError};

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(candidates::configure),
    );
}
