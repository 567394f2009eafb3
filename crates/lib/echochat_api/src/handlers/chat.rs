//! Echo endpoint.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use echochat_core::echo;
use echochat_core::models::ChatResponse;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// `POST /api/chat` — echoes `message` back inside the reply template.
///
/// Unreadable bodies (bad JSON, wrong content type, over the size limit)
/// get the same 400 as a missing `message`.
pub async fn chat_handler(
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(body) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    let response = echo::handle(&body)?;
    Ok(Json(response))
}
