pub mod dto;
pub mod handlers;
pub mod repo;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use dto::{DailyTotals, MealEntry, NewMeal};
pub use repo::{MealStore, MemoryMealStore, PgMealStore};
pub use services::aggregate;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::read_routes())
        .merge(handlers::write_routes())
}
