//! Visit review: surfaces conditions, medications and allergies from a
//! visit-reason note for the clinician.

use serde::{Deserialize, Serialize};

use crate::pipeline::extraction::{ExtractionResult, MedicalTermExtractor};

/// What the provider-facing visit detail shows. Past treatments are not part
/// of the review surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitReview {
    pub conditions: Vec<String>,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
    /// Set when the note mentions any allergen.
    pub allergy_alert: bool,
}

impl VisitReview {
    pub fn requires_attention(&self) -> bool {
        !(self.conditions.is_empty() && self.medications.is_empty() && self.allergies.is_empty())
    }
}

impl From<ExtractionResult> for VisitReview {
    fn from(result: ExtractionResult) -> Self {
        let allergy_alert = !result.allergies.is_empty();
        Self {
            conditions: result.conditions.into_iter().collect(),
            medications: result.medications.into_iter().collect(),
            allergies: result.allergies.into_iter().collect(),
            allergy_alert,
        }
    }
}

pub fn review_visit_reason(note: &str) -> VisitReview {
    review_visit_reason_with(&MedicalTermExtractor::default(), note)
}

pub fn review_visit_reason_with(extractor: &MedicalTermExtractor, note: &str) -> VisitReview {
    let review = VisitReview::from(extractor.extract(note));
    if review.allergy_alert {
        tracing::info!(
            allergies = review.allergies.len(),
            "Visit note mentions allergies"
        );
    }
    review
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_note_needs_no_attention() {
        let review = review_visit_reason("");
        assert!(!review.requires_attention());
        assert!(!review.allergy_alert);
    }

    #[test]
    fn surfaces_sorted_findings() {
        let review = review_visit_reason(
            "Follow-up for hypertension and diabetes. On metformin and lisinopril. \
             Allergic to penicillin.",
        );
        assert_eq!(review.conditions, vec!["diabetes", "hypertension"]);
        assert_eq!(review.medications, vec!["lisinopril", "metformin"]);
        assert_eq!(review.allergies, vec!["penicillin"]);
        assert!(review.allergy_alert);
        assert!(review.requires_attention());
    }

    #[test]
    fn past_treatments_not_surfaced() {
        let review = review_visit_reason("Post-op check after tonsillectomy");
        assert!(!review.requires_attention());
    }
}
