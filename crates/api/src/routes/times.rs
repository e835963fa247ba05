use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/submit-time", post(handlers::times::submit_time))
        .route("/api/get-times/:room_code", get(handlers::times::get_times))
        .route(
            "/api/get-common-times/:room_code",
            get(handlers::times::get_common_times),
        )
}
