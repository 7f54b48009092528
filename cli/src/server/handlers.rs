use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use kitreg_core::{ComponentData, ComponentMeta, RegistryError};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use super::state::AppState;

pub const KIT_NOT_FOUND: &str = "Kit not found";
pub const COMPONENT_NOT_FOUND: &str = "Component not found";

/// API error response
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn err(status: StatusCode, msg: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (status, Json(ApiError::new(msg)))
}

fn internal(e: &RegistryError) -> (StatusCode, Json<ApiError>) {
    error!("Unexpected registry error: {}", e);
    err(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

/// List the components of a kit
///
/// A kit whose source is currently unreachable answers with an empty list;
/// its population is retried on the next request.
pub async fn list_components(
    State(state): State<AppState>,
    Path(kit): Path<String>,
) -> ApiResult<Vec<ComponentMeta>> {
    match state.registry.list_components(&kit).await {
        Ok(list) => Ok(Json(list)),
        Err(RegistryError::KitNotFound(_)) => Err(err(StatusCode::NOT_FOUND, KIT_NOT_FOUND)),
        Err(e) if e.is_transient() => {
            warn!(kit = %kit, "Serving empty component list: {}", e);
            Ok(Json(Vec::new()))
        }
        Err(e) => Err(internal(&e)),
    }
}

/// Get one component of a kit
pub async fn get_component(
    State(state): State<AppState>,
    Path((kit, name)): Path<(String, String)>,
) -> ApiResult<ComponentData> {
    match state.registry.get_component(&kit, &name).await {
        Ok(component) => Ok(Json(component)),
        Err(RegistryError::KitNotFound(_)) => Err(err(StatusCode::NOT_FOUND, KIT_NOT_FOUND)),
        Err(RegistryError::ComponentNotFound { .. }) => {
            Err(err(StatusCode::NOT_FOUND, COMPONENT_NOT_FOUND))
        }
        Err(e) if e.is_transient() => {
            warn!(kit = %kit, component = %name, "Component unavailable: {}", e);
            Err(err(StatusCode::NOT_FOUND, COMPONENT_NOT_FOUND))
        }
        Err(e) => Err(internal(&e)),
    }
}
