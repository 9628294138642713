pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::catalog::handlers as catalog_handlers;
use crate::feed::handlers as feed_handlers;
use crate::ledger::handlers as ledger_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Student side: discovery feed and the swipe ledger
        .route("/api/jobs", get(feed_handlers::handle_feed))
        .route("/api/jobs/swipe", post(ledger_handlers::handle_swipe))
        .route("/api/jobs/:id", get(feed_handlers::handle_job_detail))
        // Recruiter side: postings and dashboard stats
        .route(
            "/api/recruiter/jobs",
            post(catalog_handlers::handle_create_job).get(catalog_handlers::handle_company_jobs),
        )
        .route(
            "/api/recruiter/jobs/:id/status",
            patch(catalog_handlers::handle_update_status),
        )
        .route(
            "/api/recruiter/jobs/:id/active",
            patch(catalog_handlers::handle_set_active),
        )
        .with_state(state)
}
