pub mod app;
pub mod config;
pub mod error;
pub mod foods;
pub mod meals;
pub mod nutrition;
pub mod planner;
pub mod state;
