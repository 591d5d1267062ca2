use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{error::AppError, state::AppState};

use super::dto::{FoodCandidate, SearchParams};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/food-search", get(search_foods))
}

/// GET /food-search?query=...
#[instrument(skip(state, params))]
pub async fn search_foods(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<FoodCandidate>>, AppError> {
    let Query(params) = params.map_err(|e| {
        warn!(error = %e, "undecodable food search query");
        AppError::InvalidRequest("Query parameter is required".into())
    })?;
    let Some(query) = params.query.filter(|q| !q.is_empty()) else {
        warn!("food search without query");
        return Err(AppError::InvalidRequest("Query parameter is required".into()));
    };

    match state.foods.search(&query).await {
        Ok(foods) => {
            info!(%query, count = foods.len(), "food search");
            Ok(Json(foods))
        }
        Err(e) => {
            error!(error = ?e, %query, "food search failed");
            Err(AppError::LookupFailure("Failed to search foods".into()))
        }
    }
}
