use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{error::AppError, state::AppState};

use super::dto::{DailyTotals, MealEntry, NewMeal};
use super::services::aggregate;

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals))
        .route("/meals/summary", get(meals_summary))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/meals", post(create_meal))
}

// --- handlers ---

#[instrument(skip(state))]
pub async fn list_meals(State(state): State<AppState>) -> Result<Json<Vec<MealEntry>>, AppError> {
    let meals = state.meals.list_all().await.map_err(|e| {
        error!(error = ?e, "list meals failed");
        AppError::PersistenceFailure("Error fetching meals".into())
    })?;
    Ok(Json(meals))
}

/// POST /meals { name, calories, protein, carbs, fats }
#[instrument(skip(state, payload))]
pub async fn create_meal(
    State(state): State<AppState>,
    payload: Result<Json<NewMeal>, JsonRejection>,
) -> Result<Json<MealEntry>, AppError> {
    let Json(body) = payload.map_err(|e| {
        warn!(error = %e, "invalid meal body");
        AppError::InvalidRequest("Invalid meal body".into())
    })?;

    let meal = state.meals.append(body).await.map_err(|e| {
        error!(error = ?e, "create meal failed");
        AppError::PersistenceFailure("Error creating meal".into())
    })?;

    info!(meal_id = %meal.id, name = %meal.name, "meal logged");
    Ok(Json(meal))
}

#[instrument(skip(state))]
pub async fn meals_summary(State(state): State<AppState>) -> Result<Json<DailyTotals>, AppError> {
    let meals = state.meals.list_all().await.map_err(|e| {
        error!(error = ?e, "list meals for summary failed");
        AppError::PersistenceFailure("Error fetching meals".into())
    })?;
    Ok(Json(aggregate(&meals)))
}
