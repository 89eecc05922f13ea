use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use mindwell_support::companion::{ChatMessage, Companion, Exchange, quick_prompts};
use mindwell_support::language::Language;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LanguageQuery {
    pub language: Option<Language>,
}

#[derive(Serialize)]
pub struct GreetingResponse {
    greeting: ChatMessage,
    quick_prompts: Vec<&'static str>,
}

#[derive(Deserialize)]
pub struct ReplyRequest {
    pub message: String,
    pub language: Option<Language>,
}

/// Opening message and suggested prompts for a new conversation.
pub async fn greeting(
    State(state): State<AppState>,
    query: Result<Query<LanguageQuery>, QueryRejection>,
) -> Result<Json<GreetingResponse>, ApiError> {
    let Query(query) = query?;
    let language = query.language.unwrap_or(state.default_language);
    let companion = Companion::new(language);

    Ok(Json(GreetingResponse {
        greeting: companion.greeting(),
        quick_prompts: quick_prompts(language).to_vec(),
    }))
}

pub async fn reply(
    State(state): State<AppState>,
    payload: Result<Json<ReplyRequest>, JsonRejection>,
) -> Result<Json<Exchange>, ApiError> {
    let Json(req) = payload?;
    let companion = Companion::new(req.language.unwrap_or(state.default_language));
    let exchange = companion.respond(&req.message)?;
    Ok(Json(exchange))
}
