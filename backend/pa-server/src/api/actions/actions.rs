//! Action REST API handlers

use crate::{
    ActionDto, ApiError, ApiJson, ApiResult, AppState, CreateActionRequest, RecordId,
    ValidatedAction,
};

use pa_core::Action;
use pa_db::ActionRepository;

use std::panic::Location;

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
};
use error_location::ErrorLocation;
use log::info;

pub(crate) const ACTION_NOT_FOUND: &str = "Action with the specified ID does not exist";
const ACTION_DOES_NOT_EXIST: &str = "The action with this ID does not exist";
const MISSING_ACTION_FIELDS: &str = "Notes and description required";

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/actions
///
/// List all actions
pub async fn list_actions(State(state): State<AppState>) -> ApiResult<Json<Vec<ActionDto>>> {
    let repo = ActionRepository::new(state.pool.clone());
    let actions = repo.find_all().await?;

    Ok(Json(actions.into_iter().map(ActionDto::from).collect()))
}

/// GET /api/actions/{id}
///
/// Get a single action by ID
pub async fn get_action(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> ApiResult<Json<ActionDto>> {
    let repo = ActionRepository::new(state.pool.clone());
    let action = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: ACTION_NOT_FOUND.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(action.into()))
}

/// POST /api/actions
///
/// Create a new action. A `project_id` with no matching project fails the
/// insert and is reported as 400.
pub async fn create_action(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateActionRequest>,
) -> ApiResult<(StatusCode, Json<ActionDto>)> {
    let fields = req
        .into_fields()
        .map_err(|e| ApiError::missing_fields(e, MISSING_ACTION_FIELDS))?;

    let repo = ActionRepository::new(state.pool.clone());
    let action = repo
        .create(&fields)
        .await
        .map_err(ApiError::rejected_insert)?;

    info!(
        "Created action {} for project {}",
        action.id, action.project_id
    );

    Ok((StatusCode::CREATED, Json(action.into())))
}

/// PUT /api/actions/{id}
///
/// Replace an action's fields. Mounted behind `require_action`, which
/// supplies the existing record.
pub async fn update_action(
    State(state): State<AppState>,
    Extension(existing): Extension<Action>,
    ValidatedAction(fields): ValidatedAction,
) -> ApiResult<Json<ActionDto>> {
    let repo = ActionRepository::new(state.pool.clone());
    let action = repo
        .update(existing.id, &fields)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: ACTION_NOT_FOUND.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if !existing.belongs_to(action.project_id) {
        info!(
            "Moved action {} from project {} to {}",
            action.id, existing.project_id, action.project_id
        );
    }
    info!("Updated action {}", action.id);

    Ok(Json(action.into()))
}

/// DELETE /api/actions/{id}
///
/// Delete an action. Responds 200 with an empty body.
pub async fn delete_action(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> ApiResult<StatusCode> {
    let repo = ActionRepository::new(state.pool.clone());
    let removed = repo
        .delete(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: ACTION_DOES_NOT_EXIST.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!(
        "Deleted action {} from project {}",
        removed.id, removed.project_id
    );

    Ok(StatusCode::OK)
}
