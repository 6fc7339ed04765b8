pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routing;
pub mod service_client;
pub mod state;

pub use app::{build_router, build_state};
pub use state::GatewayState;
