use axum::{extract::State, Json};
use serde::Deserialize;

use crate::error::Result;
use crate::models::UserSummary;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
}

/// Create a new user
///
/// Trims the username and assigns the next id from the store's counter.
/// Returns 400 if the username is missing or blank.
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<UserSummary>> {
    let mut store = state.store.lock().expect("user store lock poisoned");
    let summary = store.create_user(payload.username.as_deref())?;

    tracing::info!("Created user {} ({})", summary.id, summary.username);

    Ok(Json(summary))
}

/// List all users
///
/// Returns every registered user as a `{username, _id}` projection, in
/// creation order. No filtering, no pagination.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserSummary>> {
    let store = state.store.lock().expect("user store lock poisoned");

    Json(store.list_users())
}
