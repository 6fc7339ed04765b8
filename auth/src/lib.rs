pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod repos;
pub mod services;
pub mod state;

pub use app::{build_router, build_state};
pub use state::AppState;
