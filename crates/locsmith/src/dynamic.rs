//! Dynamic-value classifier.
//!
//! Flags identifier-like strings (ids, classes, attribute values) that look
//! machine generated. Misclassification only lowers a locator's rating; it
//! is never an error.

use regex::Regex;
use std::sync::OnceLock;

use crate::config::Heuristics;

/// Prefixes emitted by scoped-style and directive-based frameworks
pub const FRAMEWORK_PREFIXES: [&str; 4] = ["data-v-", "css-", "ng-", "sc-"];

const UUID_PATTERN: &str =
    "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}";

/// Which rule flagged a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicRule {
    /// Starts with a framework-generated prefix
    FrameworkPrefix,
    /// Contains a UUID
    Uuid,
    /// Contains a long hex run
    HexRun,
    /// Ends in a long digit run
    TrailingDigits,
    /// Starts with a digit
    LeadingDigit,
    /// Letters followed by several digits (`field1234`, `j_id1234`)
    LetterDigits,
    /// Long dense alphanumeric class token (class callers only)
    DenseClassToken,
}

/// Compiled rule set for one heuristics configuration
#[derive(Debug, Clone)]
pub struct DynamicClassifier {
    patterns: Vec<(DynamicRule, Regex)>,
    dense_class_min_len: usize,
}

impl Default for DynamicClassifier {
    fn default() -> Self {
        Self::new(&Heuristics::default())
    }
}

impl DynamicClassifier {
    /// Compile the rule set for the given thresholds
    #[must_use]
    pub fn new(heuristics: &Heuristics) -> Self {
        let sources = [
            (DynamicRule::Uuid, UUID_PATTERN.to_string()),
            (
                DynamicRule::HexRun,
                format!("[0-9a-fA-F]{{{},}}", heuristics.hex_run_min_len),
            ),
            (
                DynamicRule::TrailingDigits,
                format!("[-_]?[0-9]{{{},}}$", heuristics.trailing_digits_min_len),
            ),
            (DynamicRule::LeadingDigit, "^[0-9]".to_string()),
            (
                DynamicRule::LetterDigits,
                format!("[a-zA-Z]+[-_]?[0-9]{{{},}}", heuristics.letter_digits_min_len),
            ),
        ];
        let patterns = sources
            .into_iter()
            .filter_map(|(rule, source)| match Regex::new(&source) {
                Ok(re) => Some((rule, re)),
                Err(err) => {
                    tracing::warn!(?rule, %err, "dynamic-value rule disabled");
                    None
                }
            })
            .collect();
        Self {
            patterns,
            dense_class_min_len: heuristics.dynamic_class_min_len,
        }
    }

    /// First rule that flags the value, if any
    #[must_use]
    pub fn classify(&self, value: &str) -> Option<DynamicRule> {
        if value.is_empty() {
            return None;
        }
        if FRAMEWORK_PREFIXES.iter().any(|p| value.starts_with(p)) {
            return Some(DynamicRule::FrameworkPrefix);
        }
        self.patterns
            .iter()
            .find(|(_, re)| re.is_match(value))
            .map(|(rule, _)| *rule)
    }

    /// Whether an id/attribute value looks generated
    #[must_use]
    pub fn is_dynamic(&self, value: &str) -> bool {
        self.classify(value).is_some()
    }

    /// Class-token variant of [`classify`](Self::classify)
    #[must_use]
    pub fn classify_class(&self, value: &str) -> Option<DynamicRule> {
        self.classify(value)
            .or_else(|| self.is_dense_token(value).then_some(DynamicRule::DenseClassToken))
    }

    /// Class-token variant: also flags long dense alphanumeric tokens
    #[must_use]
    pub fn is_dynamic_class(&self, value: &str) -> bool {
        self.classify_class(value).is_some()
    }

    fn is_dense_token(&self, value: &str) -> bool {
        value.len() >= self.dense_class_min_len
            && value.chars().all(|c| c.is_ascii_alphanumeric())
            && value.chars().any(|c| c.is_ascii_digit())
            && value.chars().any(|c| c.is_ascii_alphabetic())
    }
}

fn default_classifier() -> &'static DynamicClassifier {
    static CLASSIFIER: OnceLock<DynamicClassifier> = OnceLock::new();
    CLASSIFIER.get_or_init(DynamicClassifier::default)
}

/// Classify with the default thresholds
#[must_use]
pub fn is_dynamic(value: &str) -> bool {
    default_classifier().is_dynamic(value)
}

/// Classify a class token with the default thresholds
#[must_use]
pub fn is_dynamic_class(value: &str) -> bool {
    default_classifier().is_dynamic_class(value)
}
