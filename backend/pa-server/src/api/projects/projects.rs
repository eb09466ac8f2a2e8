//! Project REST API handlers

use crate::{
    ActionDto, ApiError, ApiJson, ApiResult, AppState, CreateProjectRequest, ProjectDto,
    RecordId, UpdateProjectRequest,
};

use pa_db::ProjectRepository;

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;
use log::info;

const PROJECT_NOT_FOUND: &str = "The project with this ID was not found";
const PROJECT_DOES_NOT_EXIST: &str = "The project with this ID does not exist";
const MISSING_PROJECT_FIELDS: &str = "Project name and description required";

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/projects
///
/// List all projects
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectDto>>> {
    let repo = ProjectRepository::new(state.pool.clone());
    let projects = repo.find_all().await?;

    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}

/// GET /api/projects/{id}
///
/// Get a single project by ID
pub async fn get_project(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> ApiResult<Json<ProjectDto>> {
    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: PROJECT_NOT_FOUND.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(project.into()))
}

/// POST /api/projects
///
/// Create a new project. Responds 201 with the stored record.
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    let fields = req
        .into_fields()
        .map_err(|e| ApiError::missing_fields(e, MISSING_PROJECT_FIELDS))?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo
        .create(&fields)
        .await
        .map_err(ApiError::rejected_insert)?;

    info!("Created project {} ({})", project.id, project.name);

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// PUT /api/projects/{id}
///
/// Replace a project's fields. The body is checked before the lookup.
pub async fn update_project(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ApiJson(req): ApiJson<UpdateProjectRequest>,
) -> ApiResult<Json<ProjectDto>> {
    let fields = req
        .into_fields()
        .map_err(|e| ApiError::missing_fields(e, MISSING_PROJECT_FIELDS))?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo
        .update(id, &fields)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: PROJECT_DOES_NOT_EXIST.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!(
        "Updated project {} (completed: {})",
        project.id,
        project.is_completed()
    );

    Ok(Json(project.into()))
}

/// DELETE /api/projects/{id}
///
/// Delete a project and, through the foreign key, its actions.
/// Responds 200 with an empty body.
pub async fn delete_project(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> ApiResult<StatusCode> {
    let repo = ProjectRepository::new(state.pool.clone());
    let removed = repo
        .delete(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: PROJECT_DOES_NOT_EXIST.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!("Deleted project {} ({})", removed.id, removed.name);

    Ok(StatusCode::OK)
}

/// GET /api/projects/{id}/actions
///
/// List a project's actions. The project lookup finishes before the
/// action query starts.
pub async fn list_project_actions(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> ApiResult<Json<Vec<ActionDto>>> {
    let repo = ProjectRepository::new(state.pool.clone());

    if repo.find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound {
            message: PROJECT_DOES_NOT_EXIST.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let actions = repo.find_actions(id).await?;

    Ok(Json(actions.into_iter().map(ActionDto::from).collect()))
}
