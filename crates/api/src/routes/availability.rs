use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/availability/month",
            get(handlers::availability::get_month_availability),
        )
        .route(
            "/api/availability/batch",
            post(handlers::availability::set_availability_batch),
        )
}
