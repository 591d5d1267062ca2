pub mod catalog;
pub mod client;
pub mod dto;
pub mod handlers;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use client::{FoodLookup, UsdaClient};
pub use dto::{FoodCandidate, FoodId};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::read_routes())
}
