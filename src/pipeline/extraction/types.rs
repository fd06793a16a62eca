use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownCategory;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(UnknownCategory(s.to_string())),
                }
            }
        }
    };
}

str_enum!(TermCategory {
    Condition => "condition",
    Allergy => "allergy",
    Medication => "medication",
    PastTreatment => "past_treatment",
});

impl TermCategory {
    /// Every category, in display order.
    pub const ALL: [TermCategory; 4] = [
        TermCategory::Condition,
        TermCategory::Allergy,
        TermCategory::Medication,
        TermCategory::PastTreatment,
    ];

    /// Human label used for badges and section headings.
    pub fn label(&self) -> &'static str {
        match self {
            TermCategory::Condition => "Conditions",
            TermCategory::Allergy => "Allergies",
            TermCategory::Medication => "Medications",
            TermCategory::PastTreatment => "Past treatments",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown term category: {0}")]
pub struct UnknownCategory(pub String);

/// Categorized terms found in one piece of free text.
///
/// Every set only ever holds lowercase entries of the dictionary for that
/// category. `BTreeSet` keeps output sorted so repeated calls serialize
/// identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    #[serde(default)]
    pub conditions: BTreeSet<String>,
    #[serde(default)]
    pub allergies: BTreeSet<String>,
    #[serde(default)]
    pub medications: BTreeSet<String>,
    #[serde(default)]
    pub past_treatments: BTreeSet<String>,
}

impl ExtractionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terms(&self, category: TermCategory) -> &BTreeSet<String> {
        match category {
            TermCategory::Condition => &self.conditions,
            TermCategory::Allergy => &self.allergies,
            TermCategory::Medication => &self.medications,
            TermCategory::PastTreatment => &self.past_treatments,
        }
    }

    pub fn terms_mut(&mut self, category: TermCategory) -> &mut BTreeSet<String> {
        match category {
            TermCategory::Condition => &mut self.conditions,
            TermCategory::Allergy => &mut self.allergies,
            TermCategory::Medication => &mut self.medications,
            TermCategory::PastTreatment => &mut self.past_treatments,
        }
    }

    /// Insert a term under `category`. Returns `true` if it was not present.
    pub fn insert(&mut self, category: TermCategory, term: &str) -> bool {
        self.terms_mut(category).insert(term.to_string())
    }

    pub fn contains(&self, category: TermCategory, term: &str) -> bool {
        self.terms(category).contains(term)
    }

    pub fn is_empty(&self) -> bool {
        TermCategory::ALL.iter().all(|c| self.terms(*c).is_empty())
    }

    pub fn total(&self) -> usize {
        TermCategory::ALL.iter().map(|c| self.terms(*c).len()).sum()
    }

    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            conditions: self.conditions.len(),
            allergies: self.allergies.len(),
            medications: self.medications.len(),
            past_treatments: self.past_treatments.len(),
            total: self.total(),
        }
    }

    /// Union `other` into `self`, returning the terms that were not already present.
    pub fn merge(&mut self, other: &ExtractionResult) -> ExtractionResult {
        let mut added = ExtractionResult::new();
        for category in TermCategory::ALL {
            for term in other.terms(category) {
                if self.insert(category, term) {
                    added.insert(category, term);
                }
            }
        }
        added
    }
}

/// Per-category counts of an [`ExtractionResult`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCounts {
    pub conditions: usize,
    pub allergies: usize,
    pub medications: usize,
    pub past_treatments: usize,
    pub total: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: TermCategory) -> usize {
        match category {
            TermCategory::Condition => self.conditions,
            TermCategory::Allergy => self.allergies,
            TermCategory::Medication => self.medications,
            TermCategory::PastTreatment => self.past_treatments,
        }
    }
}
