use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
///
/// Reports process liveness, the number of registered users, and the crate
/// version. Used by load balancers and monitoring systems.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let user_count = state
        .store
        .lock()
        .expect("user store lock poisoned")
        .user_count();

    Json(json!({
        "status": "healthy",
        "users": user_count,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
