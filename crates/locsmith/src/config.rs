//! Engine configuration
//!
//! [`EngineConfig`] is the configuration record a caller hands to the
//! engine. It can only be built for a `(tool, language)` pair that belongs to
//! the tool profile, so the engine never sees an invalid pair.
//!
//! [`Heuristics`] holds the empirically tuned thresholds. They are not a
//! protocol, but changing any of them changes output, so the defaults are
//! pinned by regression tests.

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;
use crate::result::{LocatorError, LocatorResult};
use crate::tool::{ProgrammingLanguage, Tool};

/// Tunable thresholds used by the classifier, namer and strategy generators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Heuristics {
    /// Link text must be shorter than this to become a `linkText` locator
    pub link_text_max_len: usize,
    /// Non-important attributes need values shorter than this
    pub attribute_value_max_len: usize,
    /// Normalized-space text XPath requires text shorter than this
    pub normalized_text_max_len: usize,
    /// `contains` XPath requires text longer than this
    pub contains_text_min_len: usize,
    /// `contains` XPath requires text shorter than this
    pub contains_text_max_len: usize,
    /// Number of leading characters used in `contains` XPath
    pub contains_prefix_len: usize,
    /// Own text used as an accessible name must be shorter than this
    pub role_name_max_len: usize,
    /// Characters of text kept in element names
    pub element_name_text_len: usize,
    /// Class tokens at least this long with no separators look generated
    pub dynamic_class_min_len: usize,
    /// Length of a hex run that marks a value as generated
    pub hex_run_min_len: usize,
    /// Length of a trailing digit run that marks a value as generated
    pub trailing_digits_min_len: usize,
    /// Digits after a letter run that mark a value as generated
    pub letter_digits_min_len: usize,
    /// Attributes always worth a locator regardless of value length
    pub important_attributes: Vec<String>,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            link_text_max_len: 50,
            attribute_value_max_len: 40,
            normalized_text_max_len: 200,
            contains_text_min_len: 2,
            contains_text_max_len: 100,
            contains_prefix_len: 25,
            role_name_max_len: 30,
            element_name_text_len: 20,
            dynamic_class_min_len: 15,
            hex_run_min_len: 10,
            trailing_digits_min_len: 5,
            letter_digits_min_len: 4,
            important_attributes: [
                "placeholder",
                "name",
                "type",
                "data-testid",
                "data-cy",
                "role",
                "title",
                "alt",
                "for",
                "href",
                "src",
                "value",
                "aria-label",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
        }
    }
}

impl Heuristics {
    /// Parse heuristics from YAML; missing keys keep their defaults
    pub fn from_yaml_str(yaml: &str) -> LocatorResult<Self> {
        let heuristics: Self = serde_yaml_ng::from_str(yaml)?;
        heuristics.validate()?;
        Ok(heuristics)
    }

    /// Reject thresholds that would disable or invert a strategy by accident
    pub fn validate(&self) -> LocatorResult<()> {
        let positive = [
            ("link_text_max_len", self.link_text_max_len),
            ("attribute_value_max_len", self.attribute_value_max_len),
            ("normalized_text_max_len", self.normalized_text_max_len),
            ("contains_prefix_len", self.contains_prefix_len),
            ("role_name_max_len", self.role_name_max_len),
            ("element_name_text_len", self.element_name_text_len),
            ("dynamic_class_min_len", self.dynamic_class_min_len),
            ("hex_run_min_len", self.hex_run_min_len),
            ("trailing_digits_min_len", self.trailing_digits_min_len),
            ("letter_digits_min_len", self.letter_digits_min_len),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, value)| *value == 0) {
            return Err(LocatorError::invalid_heuristics(format!(
                "{name} must be greater than zero"
            )));
        }
        if self.contains_text_min_len + 1 >= self.contains_text_max_len {
            return Err(LocatorError::invalid_heuristics(format!(
                "contains range ({}, {}) is empty",
                self.contains_text_min_len, self.contains_text_max_len
            )));
        }
        Ok(())
    }

    /// Whether an attribute is on the important allow-list
    #[must_use]
    pub fn is_important_attribute(&self, name: &str) -> bool {
        self.important_attributes.iter().any(|a| a == name)
    }
}

/// Validated configuration for one engine invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineConfig {
    tool: Tool,
    language: ProgrammingLanguage,
    deep_scan: bool,
    locale: Locale,
    heuristics: Heuristics,
}

impl EngineConfig {
    /// Create a configuration, rejecting pairs outside the tool profile
    pub fn new(tool: Tool, language: ProgrammingLanguage) -> LocatorResult<Self> {
        if !tool.supports_language(language) {
            return Err(LocatorError::unsupported_language(tool, language));
        }
        Ok(Self {
            tool,
            language,
            deep_scan: false,
            locale: Locale::default(),
            heuristics: Heuristics::default(),
        })
    }

    /// Configuration for a tool using its default language
    #[must_use]
    pub fn for_tool(tool: Tool) -> Self {
        Self {
            tool,
            language: tool.default_language(),
            deep_scan: false,
            locale: Locale::default(),
            heuristics: Heuristics::default(),
        }
    }

    /// Enable or disable deep scan
    #[must_use]
    pub const fn with_deep_scan(mut self, deep_scan: bool) -> Self {
        self.deep_scan = deep_scan;
        self
    }

    /// Set the UI locale used for descriptions
    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Replace the heuristic thresholds
    #[must_use]
    pub fn with_heuristics(mut self, heuristics: Heuristics) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Target tool
    #[must_use]
    pub const fn tool(&self) -> Tool {
        self.tool
    }

    /// Target language
    #[must_use]
    pub const fn language(&self) -> ProgrammingLanguage {
        self.language
    }

    /// Whether deep scan is enabled
    #[must_use]
    pub const fn deep_scan(&self) -> bool {
        self.deep_scan
    }

    /// UI locale
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Heuristic thresholds
    #[must_use]
    pub const fn heuristics(&self) -> &Heuristics {
        &self.heuristics
    }
}
