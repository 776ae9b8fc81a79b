//! Profile management handlers

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use permission_types::{PermissionCheck, Profile};
use serde::Deserialize;

/// List all profiles
pub async fn list_profiles(State(state): State<AppState>) -> Json<Vec<Profile>> {
    Json(state.storage.list().await)
}

/// Get a specific profile
pub async fn get_profile(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Profile>> {
    let profile = state.storage.get(&name).await?;
    Ok(Json(profile))
}

/// Create a new profile
///
/// Responds `201 Created` with a `Location` header and the created profile.
pub async fn create_profile(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> ApiResult<impl IntoResponse> {
    if profile.profile_name.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Profile name cannot be empty".to_string(),
        ));
    }

    let location = format!("/api/profiles/{}", urlencoding::encode(&profile.profile_name));
    let location = HeaderValue::from_str(&location)
        .map_err(|e| ApiError::Internal(format!("Invalid location header: {}", e)))?;

    state.storage.create(profile.clone()).await?;

    tracing::info!(profile = %profile.profile_name, "Created profile");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(profile),
    ))
}

/// Replace the parameters of an existing profile
pub async fn update_profile(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(profile): Json<Profile>,
) -> ApiResult<StatusCode> {
    state.storage.update(&name, profile).await?;

    tracing::info!(profile = %name, "Updated profile");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a profile
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<StatusCode> {
    state.storage.delete(&name).await?;

    tracing::info!(profile = %name, "Deleted profile");

    Ok(StatusCode::NO_CONTENT)
}

/// Permission check query
#[derive(Debug, Deserialize)]
pub struct ValidateQuery {
    #[serde(default)]
    pub action: Option<String>,
}

/// Check whether a profile holds a permission
pub async fn validate_permission(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<ValidateQuery>,
) -> ApiResult<Json<PermissionCheck>> {
    let action = query.action.unwrap_or_default();
    let check = state.storage.check_permission(&name, &action).await?;

    tracing::debug!(profile = %name, action = %action, granted = check.success, "Checked permission");

    Ok(Json(check))
}
