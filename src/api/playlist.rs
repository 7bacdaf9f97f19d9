use std::sync::Arc;

use axum::{
    Extension,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::{errors::ProxyError, server::AppState, spotify, warning};

#[derive(Debug, Deserialize)]
pub struct PlaylistQuery {
    pub market: Option<String>,
}

pub async fn playlist(
    Path(id): Path<String>,
    Query(query): Query<PlaylistQuery>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    match spotify::playlist::fetch_playlist(&state, &id, query.market.as_deref()).await {
        Ok(projected) => (StatusCode::OK, Json(projected)).into_response(),
        Err(ProxyError::Resource { status, body }) => {
            warning!("Upstream returned {} for playlist {}", status, id);
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(json!({ "error": body }))).into_response()
        }
        Err(err) => {
            warning!("Request for playlist {} failed: {}", id, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}
