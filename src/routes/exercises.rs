use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ERR_DESCRIPTION_REQUIRED, ERR_DURATION_POSITIVE, ERR_DURATION_REQUIRED, ERR_INVALID_DATE,
};
use crate::error::{AppError, Result};
use crate::models::Exercise;
use crate::routes::validation::{parse_date_input, NumberOrString};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddExerciseRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<NumberOrString>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
    #[serde(rename = "_id")]
    pub id: String,
}

/// Add an exercise to a user's log
///
/// Validation order matters: description and duration are checked before the
/// user lookup, the date only after it. A malformed payload therefore reports
/// 400 even for an unknown user, while a bad date on an unknown user reports
/// 404 first.
pub async fn add_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<AddExerciseRequest>,
) -> Result<Json<AddExerciseResponse>> {
    // 1. Description must be present and non-blank
    let description = payload
        .description
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_string();
    if description.is_empty() {
        return Err(AppError::Validation(ERR_DESCRIPTION_REQUIRED.to_string()));
    }

    // 2. Duration must be supplied and parse to a positive integer
    let duration = match &payload.duration {
        Some(value) if !value.is_blank() => match value.as_leading_int() {
            Some(n) if n > 0 => n,
            _ => return Err(AppError::Validation(ERR_DURATION_POSITIVE.to_string())),
        },
        _ => return Err(AppError::Validation(ERR_DURATION_REQUIRED.to_string())),
    };

    let mut store = state.store.lock().expect("user store lock poisoned");

    // 3. The user must exist
    let user = store.find_user_mut(&user_id)?;

    // 4. A supplied date must parse; an omitted or empty one defaults to now
    let date = match payload.date.as_deref() {
        Some(raw) if !raw.is_empty() => parse_date_input(raw)
            .ok_or_else(|| AppError::Validation(ERR_INVALID_DATE.to_string()))?,
        _ => Utc::now(),
    };

    // 5. Append to the user's log and project the result
    let exercise = Exercise {
        description,
        duration,
        date,
    };
    user.exercises.push(exercise.clone());

    tracing::info!(
        "Logged exercise for user {}: {} ({} min)",
        user.id,
        exercise.description,
        exercise.duration
    );

    let date = exercise.display_date();

    Ok(Json(AddExerciseResponse {
        username: user.username.clone(),
        description: exercise.description,
        duration: exercise.duration,
        date,
        id: user.id.clone(),
    }))
}
