use serde::{Deserialize, Serialize};

use super::dictionaries::{
    contains_any, terms_for, ALLERGY_CUES, CONTEXT_INDICATORS, MEDICATION_CUES, TREATMENT_CUES,
};
use super::sentences::split_sentences;
use super::types::{ExtractionResult, TermCategory};

/// How medication and treatment matching reacts to category cue words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextGating {
    /// Medication and treatment terms match as plain substrings whether or not
    /// a cue word is present.
    #[default]
    Permissive,
    /// Medication and treatment terms only match in sentences that carry a
    /// cue word for their category, the same way allergies are gated.
    Strict,
}

impl ContextGating {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextGating::Permissive => "permissive",
            ContextGating::Strict => "strict",
        }
    }
}

impl std::str::FromStr for ContextGating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(ContextGating::Permissive),
            "strict" => Ok(ContextGating::Strict),
            other => Err(format!("unknown context gating mode '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorOptions {
    pub gating: ContextGating,
}

/// Rule-based keyword spotter for conditions, allergies, medications and
/// past treatments in free text.
///
/// Holds no mutable state: one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedicalTermExtractor {
    options: ExtractorOptions,
}

impl MedicalTermExtractor {
    pub fn new(options: ExtractorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ExtractorOptions {
        self.options
    }

    /// Extract categorized terms from `text`. Total over all strings.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let lower = text.to_lowercase();
        let sentences = split_sentences(&lower);
        let mut result = ExtractionResult::new();

        for sentence in &sentences {
            self.match_conditions(sentence, &mut result);
            self.match_allergies(sentence, &mut result);
            self.match_gated(
                sentence,
                TermCategory::Medication,
                MEDICATION_CUES,
                &mut result,
            );
            self.match_gated(
                sentence,
                TermCategory::PastTreatment,
                TREATMENT_CUES,
                &mut result,
            );
        }

        let counts = result.counts();
        tracing::debug!(
            sentences = sentences.len(),
            conditions = counts.conditions,
            allergies = counts.allergies,
            medications = counts.medications,
            past_treatments = counts.past_treatments,
            gating = self.options.gating.as_str(),
            "Medical terms extracted"
        );

        result
    }

    /// Missing input is treated as empty text.
    pub fn extract_optional(&self, text: Option<&str>) -> ExtractionResult {
        self.extract(text.unwrap_or_default())
    }

    fn match_conditions(&self, sentence: &str, result: &mut ExtractionResult) {
        let has_indicator = contains_any(sentence, CONTEXT_INDICATORS);
        for &term in terms_for(TermCategory::Condition) {
            let first_word = term.split_whitespace().next().unwrap_or(term);
            if sentence.contains(term) || (has_indicator && sentence.contains(first_word)) {
                result.insert(TermCategory::Condition, term);
            }
        }
    }

    fn match_allergies(&self, sentence: &str, result: &mut ExtractionResult) {
        let has_cue = contains_any(sentence, ALLERGY_CUES);
        for &term in terms_for(TermCategory::Allergy) {
            let matched = if has_cue {
                sentence.contains(term)
            } else {
                sentence.contains(&format!("allergic to {term}"))
                    || sentence.contains(&format!("{term} allergy"))
            };
            if matched {
                result.insert(TermCategory::Allergy, term);
            }
        }
    }

    fn match_gated(
        &self,
        sentence: &str,
        category: TermCategory,
        cues: &[&str],
        result: &mut ExtractionResult,
    ) {
        if self.options.gating == ContextGating::Strict && !contains_any(sentence, cues) {
            return;
        }
        for &term in terms_for(category) {
            if sentence.contains(term) {
                result.insert(category, term);
            }
        }
    }
}

/// Extract with default (permissive) options.
pub fn extract(text: &str) -> ExtractionResult {
    MedicalTermExtractor::default().extract(text)
}

/// Extract with default options, treating `None` as empty text.
pub fn extract_optional(text: Option<&str>) -> ExtractionResult {
    MedicalTermExtractor::default().extract_optional(text)
}
