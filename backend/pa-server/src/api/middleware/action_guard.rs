//! Existence check for routes addressing a single action

use crate::api::actions::actions::ACTION_NOT_FOUND;
use crate::{ApiError, ApiResult, AppState, RecordId};

use pa_db::ActionRepository;

use std::panic::Location;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use error_location::ErrorLocation;

/// Look up the action named by `{id}` and stash it in the request
/// extensions for the handler; 404 without running the handler otherwise.
///
/// Mount with `route_layer` so path parameters are already matched.
pub async fn require_action(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let repo = ActionRepository::new(state.pool.clone());
    let action = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: ACTION_NOT_FOUND.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    request.extensions_mut().insert(action);

    Ok(next.run(request).await)
}
