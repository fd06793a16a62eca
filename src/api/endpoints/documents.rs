//! Document insights endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, DocumentInsightsRequest};
use crate::insights::{summarize_document_with, DocumentInsights};

/// `POST /api/documents/insights`: counts and badges for a document summary.
pub async fn insights(
    State(ctx): State<ApiContext>,
    payload: Result<Json<DocumentInsightsRequest>, JsonRejection>,
) -> Result<Json<DocumentInsights>, ApiError> {
    let req = ctx.accept(payload)?;
    let summary = ctx.checked_text(req.summary.as_deref())?;
    Ok(Json(summarize_document_with(&ctx.extractor, summary)))
}
