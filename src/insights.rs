//! Document insights: category counts and badges for a stored document summary.

use serde::Serialize;

use crate::pipeline::extraction::{
    CategoryCounts, ExtractionResult, MedicalTermExtractor, TermCategory,
};

/// One badge per non-empty category, e.g. "Medications (3)".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightBadge {
    pub category: TermCategory,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentInsights {
    pub result: ExtractionResult,
    pub counts: CategoryCounts,
    pub badges: Vec<InsightBadge>,
}

impl DocumentInsights {
    pub fn has_findings(&self) -> bool {
        self.counts.total > 0
    }

    pub fn badge(&self, category: TermCategory) -> Option<&InsightBadge> {
        self.badges.iter().find(|b| b.category == category)
    }
}

/// Build insights from an already-extracted result.
pub fn insights_from(result: ExtractionResult) -> DocumentInsights {
    let counts = result.counts();
    let badges = TermCategory::ALL
        .into_iter()
        .filter(|c| counts.get(*c) > 0)
        .map(|category| InsightBadge {
            category,
            label: category.label(),
            count: counts.get(category),
        })
        .collect();

    DocumentInsights {
        result,
        counts,
        badges,
    }
}

/// Run extraction over a document summary with default options.
pub fn summarize_document(summary: &str) -> DocumentInsights {
    summarize_document_with(&MedicalTermExtractor::default(), summary)
}

pub fn summarize_document_with(
    extractor: &MedicalTermExtractor,
    summary: &str,
) -> DocumentInsights {
    insights_from(extractor.extract(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_has_no_badges() {
        let insights = summarize_document("");
        assert!(!insights.has_findings());
        assert!(insights.badges.is_empty());
        assert_eq!(insights.counts, CategoryCounts::default());
    }

    #[test]
    fn badges_follow_category_order() {
        let insights = summarize_document(
            "Discharge summary: underwent appendectomy. Prescribed amoxicillin and \
             acetaminophen. History of asthma.",
        );
        let order: Vec<TermCategory> = insights.badges.iter().map(|b| b.category).collect();
        assert_eq!(
            order,
            vec![
                TermCategory::Condition,
                TermCategory::Medication,
                TermCategory::PastTreatment
            ]
        );
        assert_eq!(insights.badge(TermCategory::Medication).unwrap().count, 2);
        assert_eq!(insights.badge(TermCategory::Medication).unwrap().label, "Medications");
        assert!(insights.badge(TermCategory::Allergy).is_none());
    }

    #[test]
    fn counts_match_result() {
        let insights = summarize_document("Known sulfa allergy. Patient takes insulin.");
        assert_eq!(insights.counts, insights.result.counts());
        assert_eq!(insights.counts.total, 2);
        assert!(insights.has_findings());
    }
}
