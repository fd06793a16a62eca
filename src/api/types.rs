//! Shared state and request/response types for the API layer.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::config::ServiceConfig;
use crate::pipeline::extraction::{ExtractionResult, MedicalTermExtractor};

// ═══════════════════════════════════════════════════════════
// API context: shared state for the router
// ═══════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<ServiceConfig>,
    pub extractor: MedicalTermExtractor,
}

impl ApiContext {
    pub fn new(config: Arc<ServiceConfig>) -> Self {
        let extractor = MedicalTermExtractor::new(config.extractor);
        Self { config, extractor }
    }

    /// Resolve an optional text field: `None` becomes `""`, oversized text is rejected.
    pub fn checked_text<'a>(&self, text: Option<&'a str>) -> Result<&'a str, ApiError> {
        let text = text.unwrap_or_default();
        let max = self.config.max_text_chars;
        if text.chars().count() > max {
            return Err(ApiError::TextTooLong { max });
        }
        Ok(text)
    }

    /// Unwrap a JSON body. A body cut off by the size limit reports the
    /// text limit rather than a generic parse failure.
    pub fn accept<T>(&self, payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
        match payload {
            Ok(Json(req)) => Ok(req),
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Err(ApiError::TextTooLong {
                    max: self.config.max_text_chars,
                })
            }
            Err(rejection) => Err(rejection.into()),
        }
    }

    /// Request body ceiling: room for one maximal text field (4 bytes per
    /// char worst case) plus JSON framing and an accumulated intake set.
    pub fn body_limit(&self) -> usize {
        self.config
            .max_text_chars
            .saturating_mul(4)
            .saturating_add(64 * 1024)
    }
}

// ═══════════════════════════════════════════════════════════
// Requests
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Default, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IntakeMergeRequest {
    #[serde(default)]
    pub accumulated: Option<ExtractionResult>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DocumentInsightsRequest {
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VisitReviewRequest {
    #[serde(default)]
    pub note: Option<String>,
}

// ═══════════════════════════════════════════════════════════
// Responses
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub context_gating: &'static str,
}
