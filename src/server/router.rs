use axum::Router;
use axum::routing::get;

use crate::features::chamber::{handle_get_deputy, handle_list_deputies};
use crate::features::status::{handle_healthcheck, handle_root};
use crate::features::stubs::stub_router;
use crate::server::AppState;

pub const API_PREFIX: &str = "/api/v1";

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/deputies", get(handle_list_deputies))
        .route("/deputies/:id", get(handle_get_deputy))
        .merge(stub_router());

    Router::new()
        .route("/", get(handle_root))
        .route("/api/health", get(handle_healthcheck))
        .nest(API_PREFIX, api)
        .with_state(state)
}
