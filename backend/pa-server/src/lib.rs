pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    actions::{
        action_dto::ActionDto,
        actions::{create_action, delete_action, get_action, list_actions, update_action},
        create_action_request::CreateActionRequest,
        update_action_request::UpdateActionRequest,
    },
    error::ApiError,
    error::ApiErrorBody,
    error::Result as ApiResult,
    extractors::{api_json::ApiJson, record_id::RecordId, validated_action::ValidatedAction},
    middleware::{
        action_guard::require_action,
        request_context::RequestContext,
        request_logger::{REQUEST_ID_HEADER, request_logger},
        request_timeout::request_timeout,
    },
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::ProjectDto,
        projects::{
            create_project, delete_project, get_project, list_project_actions, list_projects,
            update_project,
        },
        update_project_request::UpdateProjectRequest,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::{App, build_router};
