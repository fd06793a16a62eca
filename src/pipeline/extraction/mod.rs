//! Medical-information extraction.
//!
//! Rule-based keyword spotting over free text: conditions, allergies,
//! medications and past treatments. Best effort only. Negations such as
//! "no history of diabetes" still match.

pub mod dictionaries;
pub mod extractor;
pub mod sentences;
pub mod types;

pub use extractor::{
    extract, extract_optional, ContextGating, ExtractorOptions, MedicalTermExtractor,
};
pub use types::*;
