//! HTTP query surface
//!
//! | Method | Path                        | Success                  |
//! |--------|-----------------------------|--------------------------|
//! | GET    | `/{kit}/components`         | JSON array of metadata   |
//! | GET    | `/{kit}/components/{name}`  | JSON component record    |

pub mod handlers;
pub mod state;

pub use handlers::ApiError;
pub use state::AppState;

use axum::{Router, routing::get};
use kitreg_core::ProviderRegistry;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the router over an already constructed provider registry
pub fn router(registry: ProviderRegistry) -> Router {
    Router::new()
        .route("/{kit}/components", get(handlers::list_components))
        .route("/{kit}/components/{name}", get(handlers::get_component))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(registry))
}
