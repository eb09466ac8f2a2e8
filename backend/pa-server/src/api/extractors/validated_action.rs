//! Field check for action updates

use crate::{ApiError, ApiJson, UpdateActionRequest};

use pa_core::ActionFields;

use std::future::Future;

use axum::extract::{FromRequest, Request};

const MISSING_ACTION_UPDATE_FIELDS: &str =
    "Project id, description, notes and completed required";

/// Action update body with every field present.
///
/// Runs after `require_action`, so a missing action is reported before a
/// bad body.
#[derive(Debug)]
pub struct ValidatedAction(pub ActionFields);

impl<S> FromRequest<S> for ValidatedAction
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let ApiJson(body) = ApiJson::<UpdateActionRequest>::from_request(req, state).await?;

            let fields = body
                .into_fields()
                .map_err(|e| ApiError::missing_fields(e, MISSING_ACTION_UPDATE_FIELDS))?;

            Ok(ValidatedAction(fields))
        }
    }
}
