use axum::{Json, extract::State};

use crate::api::AppContext;

pub async fn health(State(app): State<AppContext>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "employees": app.state.employees.len()
    }))
}
