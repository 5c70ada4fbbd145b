use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn refresh_token(
    State(state): State<AppState>,
    Json(body): Json<RefreshTokenRequestBody>,
) -> Result<ApiSuccess<RefreshTokenResponseData>, ApiError> {
    state
        .auth_service
        .check_refresh_token(&body.refresh)
        .await
        .map_err(ApiError::from)
        .map(|access| ApiSuccess::new(StatusCode::OK, RefreshTokenResponseData { access }))
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RefreshTokenRequestBody {
    refresh: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshTokenResponseData {
    pub access: String,
}
