use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};

use crate::core::error::AppError;
use crate::core::params::parse_int;
use crate::features::chamber::dto::{DeputiesQuery, UpstreamResponse};
use crate::features::chamber::helpers::retain_present;
use crate::server::AppState;

pub async fn handle_list_deputies(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<UpstreamResponse, AppError> {
    let Query(pairs) = query?;
    let query = DeputiesQuery::from_pairs(&pairs)?;
    let filters = retain_present(query.into_filter_set());
    state.chamber.fetch_deputies(filters).await
}

pub async fn handle_get_deputy(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<UpstreamResponse, AppError> {
    let Path(id) = id?;
    let id = parse_int("id", &id)?;
    state.chamber.fetch_deputy(id).await
}
