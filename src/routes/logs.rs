use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Exercise, LogEntry};
use crate::routes::validation::{parse_date_input, parse_leading_int};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub username: String,
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: String,
    pub log: Vec<LogEntry>,
}

/// Retrieve a user's exercise log, optionally windowed by date and truncated
///
/// `from` and `to` are inclusive bounds. Filter values that fail to parse are
/// silently ignored rather than rejected; the filters are best-effort. The
/// limit truncates in insertion order, after the date filters.
pub async fn get_log(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<LogQuery>,
) -> Result<Json<LogResponse>> {
    let store = state.store.lock().expect("user store lock poisoned");
    let user = store.find_user(&user_id)?;

    let mut exercises: Vec<&Exercise> = user.exercises.iter().collect();

    if let Some(from) = params.from.as_deref().and_then(parse_date_input) {
        exercises.retain(|ex| ex.date >= from);
    }

    if let Some(to) = params.to.as_deref().and_then(parse_date_input) {
        exercises.retain(|ex| ex.date <= to);
    }

    if let Some(limit) = params.limit.as_deref().and_then(parse_leading_int) {
        if limit >= 0 {
            exercises.truncate(limit as usize);
        }
    }

    let log: Vec<LogEntry> = exercises.iter().map(|ex| ex.log_entry()).collect();

    Ok(Json(LogResponse {
        username: user.username.clone(),
        count: log.len(),
        id: user.id.clone(),
        log,
    }))
}
