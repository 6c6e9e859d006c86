//! Locator model: the unit the engine produces, ranks and renders.
//!
//! A [`Locator`] is a `(method, value)` pair plus the metadata needed to
//! rank it and paste it into a test: rendered code, base priority, stability
//! and a localized rationale. Values are never mutated once built; the
//! duplicate resolver derives new locators with the `with_*` methods.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// How a locator finds its element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocatorMethod {
    /// Element id
    #[serde(rename = "id")]
    Id,
    /// `name` attribute
    #[serde(rename = "name")]
    Name,
    /// Anchor text
    #[serde(rename = "linkText")]
    LinkText,
    /// CSS selector
    #[serde(rename = "css")]
    Css,
    /// XPath expression
    #[serde(rename = "xpath")]
    XPath,
    /// Accessible role (and name)
    #[serde(rename = "role")]
    Role,
    /// Associated label text
    #[serde(rename = "label")]
    Label,
    /// Placeholder text
    #[serde(rename = "placeholder")]
    Placeholder,
    /// Visible text
    #[serde(rename = "text")]
    Text,
}

impl LocatorMethod {
    /// Identifier used in output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::LinkText => "linkText",
            Self::Css => "css",
            Self::XPath => "xpath",
            Self::Role => "role",
            Self::Label => "label",
            Self::Placeholder => "placeholder",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for LocatorMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence that a locator survives markup changes
///
/// Ordered `High < Medium < Low` so that ascending sorts put the most stable
/// locator first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stability {
    /// Expected to survive most markup changes
    High,
    /// Depends on presentational details
    Medium,
    /// Likely to break
    Low,
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        })
    }
}

/// Intrinsic strategy rank, lowest first
///
/// Tool-specific reordering lives in [`crate::ranking`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Role-based query
    RoleBased = 0,
    /// Stable id
    RobustId = 1,
    /// `name` attribute
    Name = 2,
    /// `<label for>` association
    Label = 3,
    /// Link text
    LinkText = 4,
    /// Visible-text query
    TextRole = 5,
    /// `tag#id` CSS or test-id attribute CSS
    CssId = 6,
    /// Class CSS
    CssClass = 7,
    /// Attribute CSS
    CssAttr = 8,
    /// Text XPath
    #[serde(rename = "xpath_text")]
    XPathText = 9,
    /// Label-anchored XPath
    #[serde(rename = "xpath_label")]
    XPathLabel = 10,
    /// Ancestor-anchored XPath
    #[serde(rename = "xpath_context")]
    XPathContext = 11,
    /// Multi-predicate or attribute XPath
    #[serde(rename = "xpath_complex")]
    XPathComplex = 12,
    /// Generated-looking id
    DynamicId = 13,
}

impl Priority {
    /// Base ordinal on the total order
    #[must_use]
    pub const fn ordinal(self) -> i32 {
        self as i32
    }
}

/// A candidate way to find one element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locator {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    element_name: Option<String>,
    tag_name: String,
    method: LocatorMethod,
    value: String,
    code_snippet: String,
    priority: Priority,
    description: String,
    stability: Stability,
}

impl Locator {
    /// Create a locator; the rendered code defaults to the raw value
    #[must_use]
    pub fn new(method: LocatorMethod, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            id: String::new(),
            element_name: None,
            tag_name: String::new(),
            method,
            code_snippet: value.clone(),
            value,
            priority: Priority::XPathComplex,
            description: String::new(),
            stability: Stability::Medium,
        }
    }

    /// Set the identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the human-readable element name
    #[must_use]
    pub fn with_element_name(mut self, name: impl Into<String>) -> Self {
        self.element_name = Some(name.into());
        self
    }

    /// Set the tag of the located element
    #[must_use]
    pub fn with_tag_name(mut self, tag: impl Into<String>) -> Self {
        self.tag_name = tag.into();
        self
    }

    /// Replace the method
    #[must_use]
    pub const fn with_method(mut self, method: LocatorMethod) -> Self {
        self.method = method;
        self
    }

    /// Replace the displayed value
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the rendered code
    #[must_use]
    pub fn with_code_snippet(mut self, code: impl Into<String>) -> Self {
        self.code_snippet = code.into();
        self
    }

    /// Set the base priority
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the rationale
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the stability rating
    #[must_use]
    pub const fn with_stability(mut self, stability: Stability) -> Self {
        self.stability = stability;
        self
    }

    /// Identifier, deterministic for a given input
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable element name
    #[must_use]
    pub fn element_name(&self) -> Option<&str> {
        self.element_name.as_deref()
    }

    /// Tag of the located element
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Locating method
    #[must_use]
    pub const fn method(&self) -> LocatorMethod {
        self.method
    }

    /// Raw selector in the tool's notation
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Ready-to-paste code
    #[must_use]
    pub fn code_snippet(&self) -> &str {
        &self.code_snippet
    }

    /// Base priority
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Localized rationale
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Stability rating
    #[must_use]
    pub const fn stability(&self) -> Stability {
        self.stability
    }
}

/// Deterministic locator identifier: `<strategy>-<12 hex digits>`
///
/// The digest covers method, value, tag and the element's position in the
/// walk, so equal strategies on different elements get different ids while
/// repeated runs over the same input reproduce them.
#[must_use]
pub fn derive_id(
    strategy: &str,
    method: LocatorMethod,
    value: &str,
    tag_name: &str,
    ordinal: usize,
) -> String {
    let mut hasher = Sha256::new();
    for part in [method.as_str(), value, tag_name, &ordinal.to_string()] {
        hasher.update(part.as_bytes());
        hasher.update([0u8]);
    }
    let digest = hasher.finalize();
    let hex: String = digest[..6].iter().map(|b| format!("{b:02x}")).collect();
    format!("{strategy}-{hex}")
}

/// Grouping key for deep-scan output
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "name")]
pub enum GroupKey {
    /// The outermost parsed element
    Root,
    /// Any other element, keyed by its element name
    Element(String),
}

/// Locators that originate from elements sharing one element name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatorGroup {
    key: GroupKey,
    element_name: String,
    locators: Vec<Locator>,
}

impl LocatorGroup {
    /// Create a group
    #[must_use]
    pub fn new(key: GroupKey, element_name: impl Into<String>, locators: Vec<Locator>) -> Self {
        Self {
            key,
            element_name: element_name.into(),
            locators,
        }
    }

    /// Grouping key
    #[must_use]
    pub const fn key(&self) -> &GroupKey {
        &self.key
    }

    /// Whether this is the root element's group
    #[must_use]
    pub const fn is_root(&self) -> bool {
        matches!(self.key, GroupKey::Root)
    }

    /// Element name shared by the group
    #[must_use]
    pub fn element_name(&self) -> &str {
        &self.element_name
    }

    /// Locators in rank order
    #[must_use]
    pub fn locators(&self) -> &[Locator] {
        &self.locators
    }

    /// Best-ranked locator
    #[must_use]
    pub fn best(&self) -> Option<&Locator> {
        self.locators.first()
    }

    pub(crate) fn push(&mut self, locator: Locator) {
        self.locators.push(locator);
    }

    pub(crate) fn into_locators(self) -> Vec<Locator> {
        self.locators
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod model_tests {
        use super::*;

        #[test]
        fn test_new_defaults_code_to_value() {
            let loc = Locator::new(LocatorMethod::Css, "button.btn");
            assert_eq!(loc.code_snippet(), "button.btn");
            assert_eq!(loc.element_name(), None);
        }

        #[test]
        fn test_with_value_leaves_original_untouched() {
            let original = Locator::new(LocatorMethod::XPath, "//a")
                .with_stability(Stability::High)
                .with_priority(Priority::XPathText);
            let rewritten = original.clone().with_value("(//a)[2]");
            assert_eq!(original.value(), "//a");
            assert_eq!(rewritten.value(), "(//a)[2]");
            assert_eq!(rewritten.priority(), Priority::XPathText);
        }

        #[test]
        fn test_stability_order() {
            assert!(Stability::High < Stability::Medium);
            assert!(Stability::Medium < Stability::Low);
        }

        #[test]
        fn test_priority_ordinals() {
            assert_eq!(Priority::RoleBased.ordinal(), 0);
            assert_eq!(Priority::CssId.ordinal(), 6);
            assert_eq!(Priority::DynamicId.ordinal(), 13);
            assert!(Priority::XPathLabel < Priority::XPathContext);
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn test_locator_json_shape() {
            let loc = Locator::new(LocatorMethod::LinkText, "Continue")
                .with_id("link-text-0123456789ab")
                .with_tag_name("a")
                .with_stability(Stability::Medium)
                .with_priority(Priority::LinkText);
            let json = serde_json::to_value(&loc).unwrap();
            assert_eq!(json["method"], "linkText");
            assert_eq!(json["tagName"], "a");
            assert_eq!(json["codeSnippet"], "Continue");
            assert_eq!(json["priority"], "link_text");
            assert_eq!(json["stability"], "Medium");
            assert!(json.get("elementName").is_none());
        }

        #[test]
        fn test_group_key_json() {
            let json = serde_json::to_value(GroupKey::Element("Button \"Save\"".into())).unwrap();
            assert_eq!(json["kind"], "element");
            assert_eq!(serde_json::to_value(GroupKey::Root).unwrap()["kind"], "root");
        }
    }

    mod id_tests {
        use super::*;

        #[test]
        fn test_derive_id_is_deterministic() {
            let a = derive_id("id", LocatorMethod::Id, "#x", "button", 0);
            let b = derive_id("id", LocatorMethod::Id, "#x", "button", 0);
            assert_eq!(a, b);
            assert!(a.starts_with("id-"));
            assert_eq!(a.len(), "id-".len() + 12);
        }

        #[test]
        fn test_derive_id_depends_on_ordinal() {
            let a = derive_id("css", LocatorMethod::Css, "button.btn", "button", 1);
            let b = derive_id("css", LocatorMethod::Css, "button.btn", "button", 2);
            assert_ne!(a, b);
        }
    }
}
