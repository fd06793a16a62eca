//! Raw extraction endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, ExtractRequest};
use crate::pipeline::extraction::ExtractionResult;

/// `POST /api/extract`: categorized terms for arbitrary free text.
pub async fn extract(
    State(ctx): State<ApiContext>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<ExtractionResult>, ApiError> {
    let req = ctx.accept(payload)?;
    let text = ctx.checked_text(req.text.as_deref())?;
    Ok(Json(ctx.extractor.extract(text)))
}
