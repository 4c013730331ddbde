use axum::Json;
use serde_json::{Value, json};

use crate::core::error::AppError;

pub const WELCOME_MESSAGE: &str = "Bem-vindo à API de Dados Públicos!";

pub async fn handle_root() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

pub async fn handle_healthcheck() -> Result<Json<Value>, AppError> {
    Ok(Json(json!({ "status": "ok" })))
}
