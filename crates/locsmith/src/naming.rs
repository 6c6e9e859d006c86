//! Element namer: short human-readable labels such as `Button "Login"`.
//!
//! Names group deep-scan output and seed page-object variable names. They
//! are never used to locate anything.

use crate::config::Heuristics;
use crate::dom::ElementNode;
use crate::dynamic::DynamicClassifier;

/// Derive `"<Prefix> <Suffix>"` for a node
#[must_use]
pub fn name_of<N: ElementNode>(
    node: &N,
    classifier: &DynamicClassifier,
    heuristics: &Heuristics,
) -> String {
    let prefix = prefix_of(node);
    match suffix_of(node, classifier, heuristics) {
        Some(suffix) => format!("{prefix} {suffix}"),
        None => prefix,
    }
}

fn prefix_of<N: ElementNode>(node: &N) -> String {
    let tag = node.tag_name();
    let mut prefix = tag.to_uppercase();
    if tag == "input" {
        if let Some(kind) = node.attribute("type").filter(|t| !t.is_empty()) {
            prefix = format!("{} Input", kind.to_uppercase());
        }
    }
    if tag == "button" || node.attribute("role").as_deref() == Some("button") {
        prefix = "Button".to_string();
    }
    // Tag-specific names take precedence over the role
    let by_tag = match tag.as_str() {
        "a" => "Link",
        "span" | "div" => "Element",
        "label" => "Label",
        "p" => "Text",
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => "Heading",
        "img" => "Image",
        "svg" => "Icon",
        _ => return prefix,
    };
    by_tag.to_string()
}

fn suffix_of<N: ElementNode>(
    node: &N,
    classifier: &DynamicClassifier,
    heuristics: &Heuristics,
) -> Option<String> {
    let non_empty = |name: &str| node.attribute(name).filter(|v| !v.is_empty());

    if let Some(placeholder) = non_empty("placeholder") {
        return Some(format!("\"{placeholder}\""));
    }
    let text: String = node
        .text_content()
        .trim()
        .chars()
        .take(heuristics.element_name_text_len)
        .collect();
    if !text.is_empty() {
        return Some(format!("\"{text}\""));
    }
    if let Some(aria) = non_empty("aria-label") {
        return Some(format!("\"{aria}\""));
    }
    if let Some(name) = non_empty("name") {
        return Some(format!("(name={name})"));
    }
    node.id()
        .filter(|id| !classifier.is_dynamic(id))
        .map(|id| format!("(#{id})"))
}
