//! Locale-aware name ordering.
//!
//! Names compare on three levels: base letters first (accents and case
//! ignored), then accents, then case with lowercase before uppercase.
//! "Äpfel" folds to "apfel" and so sorts before "apple".

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Precomputed sort key for a product name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    base: String,
    accented: String,
    case: Vec<bool>,
}

impl CollationKey {
    pub fn new(name: &str) -> Self {
        let decomposed: String = name.nfd().collect();
        let accented = decomposed.to_lowercase();
        let base = decomposed
            .chars()
            .filter(|c| !is_combining_mark(*c))
            .collect::<String>()
            .to_lowercase();
        let case = decomposed
            .chars()
            .filter(|c| !is_combining_mark(*c))
            .map(char::is_uppercase)
            .collect();

        Self {
            base,
            accented,
            case,
        }
    }
}

/// Compare two names for ascending display order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}
