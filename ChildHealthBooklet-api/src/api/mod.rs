pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use axum::Router;

use crate::config::AppConfig;

/// Create the application router with state built from `config`
pub fn create_application(config: &AppConfig) -> Router {
    routes::create_app(state::AppState::from_config(config), config)
}
