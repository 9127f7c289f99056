use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use mergington::data::{Activities, MessageResponse};
use mergington::serde::Deserialize;

use super::error::ApiError;
use crate::services::ActivityService;

/// Query string carried by signup and unregister.
#[derive(Debug, Deserialize)]
#[serde(crate = "mergington::serde")]
pub struct EmailQuery {
    pub email: String,
}

/// Handler to list every activity with its roster
pub async fn list(State(state): State<Arc<crate::AppState>>) -> Result<Json<Activities>, ApiError> {
    Ok(Json(state.activities.list().await?))
}

/// Handler to sign a student up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(EmailQuery { email }) = query?;
    let message = state.activities.signup(&activity_name, &email).await?;
    Ok(Json(MessageResponse { message }))
}

/// Handler to withdraw a student from an activity
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(EmailQuery { email }) = query?;
    let message = state.activities.unregister(&activity_name, &email).await?;
    Ok(Json(MessageResponse { message }))
}
