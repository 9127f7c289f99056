use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use mergington::data::ErrorDetail;
use mergington::errors::RosterError;
use mergington::log;

/// Errors returned by the HTTP handlers, rendered as `{"detail": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Roster(RosterError::ActivityNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Roster(RosterError::AlreadySignedUp { .. })
            | ApiError::Roster(RosterError::NotRegistered { .. }) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        log::debug!(%status, error = %self, "request rejected");
        (
            status,
            Json(ErrorDetail {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_errors_map_to_statuses() {
        let not_found: ApiError = RosterError::ActivityNotFound("Knitting".to_string()).into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let duplicate: ApiError = RosterError::AlreadySignedUp {
            activity: "Art Club".to_string(),
            email: "a@mergington.edu".to_string(),
        }
        .into();
        assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);

        let absent: ApiError = RosterError::NotRegistered {
            activity: "Art Club".to_string(),
            email: "a@mergington.edu".to_string(),
        }
        .into();
        assert_eq!(absent.status(), StatusCode::BAD_REQUEST);
        assert!(absent.to_string().contains("not signed up"));
    }
}
