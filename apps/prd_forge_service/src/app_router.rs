use axum::{routing::get, Router};

use crate::{
    health::health_controller,
    prd::prd_controller::{self, prd_router},
};

pub fn application_router() -> Router {
    Router::new()
        .route("/", get(prd_controller::show_form).post(prd_controller::submit_form))
        .route("/v1/health", get(health_controller::health))
        .nest("/v1/prd", prd_router())
}
