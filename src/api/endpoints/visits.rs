//! Visit review endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, VisitReviewRequest};
use crate::visit::{review_visit_reason_with, VisitReview};

/// `POST /api/visits/review`: conditions, medications and allergies in a visit-reason note.
pub async fn review(
    State(ctx): State<ApiContext>,
    payload: Result<Json<VisitReviewRequest>, JsonRejection>,
) -> Result<Json<VisitReview>, ApiError> {
    let req = ctx.accept(payload)?;
    let note = ctx.checked_text(req.note.as_deref())?;
    Ok(Json(review_visit_reason_with(&ctx.extractor, note)))
}
