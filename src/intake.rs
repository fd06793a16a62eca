//! Patient history intake: running term sets across several submissions.
//!
//! The intake flow lets a patient describe their history in as many free-text
//! boxes as they like. Each submission is extracted independently and merged
//! into de-duplicated running sets. Persisting the sets is the caller's job.

use serde::{Deserialize, Serialize};

use crate::pipeline::extraction::dictionaries::is_known_term;
use crate::pipeline::extraction::{ExtractionResult, MedicalTermExtractor, TermCategory};

// ═══════════════════════════════════════════
// Stateless merge: for callers that own their state
// ═══════════════════════════════════════════

/// Outcome of merging one submission into accumulated intake terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeMerge {
    /// Running sets after the merge.
    pub accumulated: ExtractionResult,
    /// Terms this submission contributed that were not seen before.
    pub added: ExtractionResult,
}

/// Merge `incoming` into a copy of `accumulated`.
///
/// Both sides come from outside the extractor, so they are passed through
/// [`known_terms`] first.
pub fn merge_results(accumulated: &ExtractionResult, incoming: &ExtractionResult) -> IntakeMerge {
    let mut merged = known_terms(accumulated);
    let added = merged.merge(&known_terms(incoming));
    IntakeMerge {
        accumulated: merged,
        added,
    }
}

/// Trimmed, lowercased copy of `result` holding only dictionary terms of
/// the matching category.
pub fn known_terms(result: &ExtractionResult) -> ExtractionResult {
    let mut known = ExtractionResult::new();
    for category in TermCategory::ALL {
        for term in result.terms(category) {
            let term = term.trim().to_lowercase();
            if is_known_term(category, &term) {
                known.insert(category, &term);
            }
        }
    }
    known
}

// ═══════════════════════════════════════════
// Stateful accumulator
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Default)]
pub struct HistoryIntake {
    extractor: MedicalTermExtractor,
    accumulated: ExtractionResult,
    submissions: usize,
}

impl HistoryIntake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extractor(extractor: MedicalTermExtractor) -> Self {
        Self {
            extractor,
            ..Self::default()
        }
    }

    /// Extract `text` and fold it into the running sets.
    /// Returns only the terms newly discovered by this submission.
    pub fn submit(&mut self, text: &str) -> ExtractionResult {
        let incoming = self.extractor.extract(text);
        self.merge(incoming)
    }

    /// Fold an already-extracted result into the running sets.
    pub fn merge(&mut self, incoming: ExtractionResult) -> ExtractionResult {
        self.submissions += 1;
        let added = self.accumulated.merge(&incoming);
        tracing::debug!(
            submission = self.submissions,
            added = added.total(),
            total = self.accumulated.total(),
            "Intake submission merged"
        );
        added
    }

    /// Drop a term the patient dismissed. Returns `true` if it was present.
    pub fn remove(&mut self, category: TermCategory, term: &str) -> bool {
        self.accumulated
            .terms_mut(category)
            .remove(&term.trim().to_lowercase())
    }

    pub fn accumulated(&self) -> &ExtractionResult {
        &self.accumulated
    }

    pub fn submissions(&self) -> usize {
        self.submissions
    }

    pub fn into_result(self) -> ExtractionResult {
        self.accumulated
    }
}
