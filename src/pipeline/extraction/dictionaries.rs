//! Term dictionaries for medical-information extraction.
//!
//! All term lists are lowercase, sorted (binary search) and pairwise
//! disjoint, so a term can only ever be reported under one category.

use super::types::TermCategory;

/// Medical conditions.
pub const CONDITION_TERMS: &[&str] = &[
    "adhd", "alzheimer", "anemia", "anxiety", "arthritis", "asthma",
    "atrial fibrillation", "bipolar disorder", "bronchitis", "cancer",
    "celiac disease", "copd", "coronary artery disease", "crohn", "dementia",
    "depression", "diabetes", "eczema", "epilepsy", "fibromyalgia", "gerd",
    "glaucoma", "gout", "heart disease", "heart failure", "hepatitis",
    "high blood pressure", "high cholesterol", "hypertension", "influenza",
    "irritable bowel syndrome", "kidney disease", "lupus", "migraine",
    "multiple sclerosis", "obesity", "osteoporosis", "parkinson", "pneumonia",
    "psoriasis", "schizophrenia", "sleep apnea", "stroke", "tuberculosis",
    "ulcerative colitis",
];

/// Allergens.
pub const ALLERGY_TERMS: &[&str] = &[
    "bee sting", "dairy", "dust mite", "egg", "gluten", "lactose", "latex",
    "milk", "mold", "nickel", "peanut", "penicillin", "pet dander", "pollen",
    "sesame", "shellfish", "soy", "sulfa", "tree nut", "wheat",
];

/// Medications, generic and brand names.
pub const MEDICATION_TERMS: &[&str] = &[
    "acetaminophen", "advil", "albuterol", "amlodipine", "amoxicillin",
    "apixaban", "aspirin", "atorvastatin", "azithromycin", "escitalopram",
    "fluoxetine", "gabapentin", "hydrochlorothiazide", "ibuprofen", "insulin",
    "levothyroxine", "lipitor", "lisinopril", "losartan", "metformin",
    "metoprolol", "montelukast", "omeprazole", "prednisone", "prozac",
    "sertraline", "simvastatin", "synthroid", "tylenol", "ventolin",
    "warfarin", "zoloft",
];

/// Procedures and past treatments.
pub const TREATMENT_TERMS: &[&str] = &[
    "angioplasty", "appendectomy", "blood transfusion", "bypass surgery",
    "c-section", "cataract surgery", "chemotherapy", "cholecystectomy",
    "colonoscopy", "dialysis", "gallbladder removal", "hip replacement",
    "hysterectomy", "knee replacement", "mastectomy", "pacemaker",
    "physical therapy", "radiation therapy", "spinal fusion",
    "stent placement", "tonsillectomy",
];

/// Phrases signalling that a sentence is a medical self-report.
/// Their presence widens condition matching to a term's first word.
pub const CONTEXT_INDICATORS: &[&str] = &[
    "diagnosed with",
    "suffering from",
    "suffer from",
    "taking medication for",
    "history of",
    "treated for",
    "living with",
    "struggling with",
];

/// Substrings that open up plain allergen matching for a sentence.
pub const ALLERGY_CUES: &[&str] = &["allerg", "sensitive", "react", "intolerance"];

/// Words that suggest a sentence talks about medication use.
pub const MEDICATION_CUES: &[&str] = &[
    "take", "taking", "medication", "medicine", "prescribed", "dose", "drug", "pill",
];

/// Words that suggest a sentence talks about a past procedure.
pub const TREATMENT_CUES: &[&str] = &[
    "had", "underwent", "procedure", "operation", "removed", "surgery", "treatment",
];

/// Dictionary backing a category.
pub fn terms_for(category: TermCategory) -> &'static [&'static str] {
    match category {
        TermCategory::Condition => CONDITION_TERMS,
        TermCategory::Allergy => ALLERGY_TERMS,
        TermCategory::Medication => MEDICATION_TERMS,
        TermCategory::PastTreatment => TREATMENT_TERMS,
    }
}

/// Exact, case-insensitive dictionary membership.
pub fn is_known_term(category: TermCategory, term: &str) -> bool {
    let lower = term.trim().to_lowercase();
    terms_for(category).binary_search(&lower.as_str()).is_ok()
}

/// True if `sentence` contains any of `cues` as a substring.
pub(crate) fn contains_any(sentence: &str, cues: &[&str]) -> bool {
    cues.iter().any(|cue| sentence.contains(cue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn dictionaries_sorted_and_unique() {
        for category in TermCategory::ALL {
            for window in terms_for(category).windows(2) {
                assert!(
                    window[0] < window[1],
                    "{} terms not sorted: {:?} >= {:?}",
                    category.as_str(),
                    window[0],
                    window[1]
                );
            }
        }
    }

    #[test]
    fn dictionaries_are_lowercase() {
        for category in TermCategory::ALL {
            for term in terms_for(category) {
                assert_eq!(*term, term.to_lowercase(), "not lowercase: {term}");
                assert_eq!(*term, term.trim(), "padded term: {term:?}");
            }
        }
    }

    #[test]
    fn dictionaries_are_disjoint() {
        let mut seen = HashSet::new();
        for category in TermCategory::ALL {
            for term in terms_for(category) {
                assert!(seen.insert(*term), "term in more than one dictionary: {term}");
            }
        }
    }

    #[test]
    fn sample_terms_present() {
        assert!(is_known_term(TermCategory::Condition, "diabetes"));
        assert!(is_known_term(TermCategory::Condition, "Migraine"));
        assert!(is_known_term(TermCategory::Allergy, "peanut"));
        assert!(is_known_term(TermCategory::Allergy, "penicillin"));
        assert!(is_known_term(TermCategory::Medication, "levothyroxine"));
        assert!(!is_known_term(TermCategory::Condition, "hypothyroidism"));
        assert!(!is_known_term(TermCategory::Medication, "peanut"));
    }

    #[test]
    fn contains_any_matches_substrings() {
        assert!(contains_any("i have a nut allergy", ALLERGY_CUES));
        assert!(contains_any("the tablets were prescribed", MEDICATION_CUES));
        assert!(!contains_any("nothing relevant here", TREATMENT_CUES));
    }
}
