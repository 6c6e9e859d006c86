//! Result and error types for locsmith.
//!
//! The engine itself never fails: missing ids, labels or classes only
//! suppress strategies. Errors exist at the configuration boundary, where a
//! caller turns strings and files into a validated [`EngineConfig`].
//!
//! [`EngineConfig`]: crate::EngineConfig

use thiserror::Error;

use crate::tool::{ProgrammingLanguage, Tool};

/// Result type for locsmith operations
pub type LocatorResult<T> = Result<T, LocatorError>;

/// Errors that can occur while configuring the engine
#[derive(Debug, Error)]
pub enum LocatorError {
    /// The language is not in the tool's profile
    #[error("{tool} does not support {language} (supported: {supported})")]
    UnsupportedLanguage {
        /// Requested tool
        tool: Tool,
        /// Requested language
        language: ProgrammingLanguage,
        /// Comma-separated list of languages the tool supports
        supported: String,
    },

    /// Tool name could not be parsed
    #[error("Unknown tool: {name}")]
    UnknownTool {
        /// The rejected name
        name: String,
    },

    /// Language name could not be parsed
    #[error("Unknown programming language: {name}")]
    UnknownLanguage {
        /// The rejected name
        name: String,
    },

    /// UI locale could not be parsed
    #[error("Unknown locale: {name}")]
    UnknownLocale {
        /// The rejected name
        name: String,
    },

    /// Heuristic thresholds are inconsistent
    #[error("Invalid heuristics: {message}")]
    InvalidHeuristics {
        /// What is wrong
        message: String,
    },

    /// YAML error while loading heuristics
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl LocatorError {
    /// Create an unsupported-language error for a tool
    #[must_use]
    pub fn unsupported_language(tool: Tool, language: ProgrammingLanguage) -> Self {
        let supported = tool
            .languages()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnsupportedLanguage {
            tool,
            language,
            supported,
        }
    }

    /// Create an invalid heuristics error
    #[must_use]
    pub fn invalid_heuristics(message: impl Into<String>) -> Self {
        Self::InvalidHeuristics {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_lists_profile() {
        let err = LocatorError::unsupported_language(Tool::Cypress, ProgrammingLanguage::Java);
        let msg = err.to_string();
        assert!(msg.contains("cypress does not support java"));
        assert!(msg.contains("javascript, typescript"));
    }

    #[test]
    fn test_invalid_heuristics_message() {
        let err = LocatorError::invalid_heuristics("contains range is empty");
        assert_eq!(
            err.to_string(),
            "Invalid heuristics: contains range is empty"
        );
    }

    #[test]
    fn test_unknown_tool_message() {
        let err = LocatorError::UnknownTool {
            name: "watir".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown tool: watir");
    }
}
