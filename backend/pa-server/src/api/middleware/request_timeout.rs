use crate::{ApiError, AppState};

use std::panic::Location;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;

/// Abandon the inner handler once `request_timeout` elapses and answer 504
pub async fn request_timeout(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let limit = state.request_timeout;

    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => ApiError::Timeout {
            message: format!(
                "Request did not complete within {}",
                humantime::format_duration(limit)
            ),
            location: ErrorLocation::from(Location::caller()),
        }
        .into_response(),
    }
}
