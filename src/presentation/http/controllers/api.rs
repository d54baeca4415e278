// src/presentation/http/controllers/api.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct EndpointsResponse {
    pub endpoints: Value,
}

/// Serves the static endpoint description verbatim. The file is read on each
/// request so edits show up without a restart.
pub async fn list_endpoints(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<EndpointsResponse>> {
    load_endpoints(&state)
        .await
        .into_http()
        .map(|endpoints| Json(EndpointsResponse { endpoints }))
}

async fn load_endpoints(state: &HttpState) -> Result<Value, ApplicationError> {
    let raw = tokio::fs::read_to_string(&state.endpoints_path)
        .await
        .map_err(|err| {
            ApplicationError::infrastructure(format!(
                "reading {}: {err}",
                state.endpoints_path.display()
            ))
        })?;
    serde_json::from_str(&raw).map_err(|err| {
        ApplicationError::infrastructure(format!(
            "parsing {}: {err}",
            state.endpoints_path.display()
        ))
    })
}
