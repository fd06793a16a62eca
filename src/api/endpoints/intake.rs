//! History intake endpoint.
//!
//! Stateless: the client sends back the sets it has accumulated so far
//! together with the new free-text submission.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, IntakeMergeRequest};
use crate::intake::{merge_results, IntakeMerge};

/// `POST /api/intake/merge`: extract a submission and merge it into the running sets.
pub async fn merge(
    State(ctx): State<ApiContext>,
    payload: Result<Json<IntakeMergeRequest>, JsonRejection>,
) -> Result<Json<IntakeMerge>, ApiError> {
    let req = ctx.accept(payload)?;
    let text = ctx.checked_text(req.text.as_deref())?;
    let accumulated = req.accumulated.unwrap_or_default();
    let incoming = ctx.extractor.extract(text);
    Ok(Json(merge_results(&accumulated, &incoming)))
}
