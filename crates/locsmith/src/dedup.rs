//! Duplicate resolution.
//!
//! Locators whose values collide across the analyzed elements would match
//! more than one element. Each colliding occurrence gets a 1-based index and
//! is rewritten into a positional form. For role-aware tools every occurrence
//! receives a zero-based `nth` qualifier; for the others the first occurrence
//! is left as is (it already resolves to the first match in document order)
//! and later ones are rewritten.

use std::collections::HashMap;

use crate::config::EngineConfig;
use crate::formatter::{nth_suffix, render};
use crate::i18n::Messages;
use crate::locator::{Locator, LocatorMethod, Stability};

/// Rewrite colliding locators; input order and length are preserved
#[must_use]
pub fn resolve_duplicates(locators: Vec<Locator>, config: &EngineConfig) -> Vec<Locator> {
    let mut totals: HashMap<String, usize> = HashMap::new();
    for locator in &locators {
        *totals.entry(locator.value().to_string()).or_default() += 1;
    }
    if totals.values().all(|&count| count <= 1) {
        return locators;
    }

    let messages = config.locale().messages();
    let mut seen: HashMap<String, usize> = HashMap::new();
    locators
        .into_iter()
        .map(|locator| {
            let total = totals.get(locator.value()).copied().unwrap_or_default();
            if total <= 1 {
                return locator;
            }
            let index = {
                let slot = seen.entry(locator.value().to_string()).or_default();
                *slot += 1;
                *slot
            };
            index_locator(locator, index, config, messages)
        })
        .collect()
}

fn index_locator(
    locator: Locator,
    index: usize,
    config: &EngineConfig,
    messages: &Messages,
) -> Locator {
    let tool = config.tool();
    let language = config.language();
    let description = format!("{} {}", locator.description(), messages.duplicate(index));

    if tool.is_role_aware() {
        if !locator.code_snippet().ends_with(')') {
            return locator.with_description(description);
        }
        let nth = index - 1;
        let code = format!("{}{}", locator.code_snippet(), nth_suffix(language, nth));
        let value = format!("{} >> nth={nth}", locator.value());
        tracing::debug!(value = %value, "indexed duplicate with nth qualifier");
        return locator
            .with_value(value)
            .with_code_snippet(code)
            .with_description(description);
    }

    if index == 1 {
        return locator.with_description(description);
    }

    let value = locator.value().to_string();
    match locator.method() {
        LocatorMethod::XPath => {
            let indexed = format!("({value})[{index}]");
            tracing::debug!(from = %value, to = %indexed, "indexed duplicate xpath");
            let code = render(LocatorMethod::XPath, &indexed, tool, language, None);
            locator
                .with_value(indexed)
                .with_code_snippet(code)
                .with_description(description)
        }
        LocatorMethod::Css => match css_to_xpath(&value) {
            Some(xpath) => {
                let indexed = format!("({xpath})[{index}]");
                tracing::debug!(from = %value, to = %indexed, "converted duplicate css to xpath");
                let code = render(LocatorMethod::XPath, &indexed, tool, language, None);
                locator
                    .with_method(LocatorMethod::XPath)
                    .with_value(indexed)
                    .with_code_snippet(code)
                    .with_description(format!("{description} {}", messages.converted_to_xpath))
            }
            None => {
                let positional = format!("{value}:nth-of-type({index})");
                tracing::warn!(selector = %value, "duplicate css fell back to :nth-of-type");
                let code = render(LocatorMethod::Css, &positional, tool, language, None);
                locator
                    .with_value(positional)
                    .with_code_snippet(code)
                    .with_stability(Stability::Low)
                    .with_description(format!("{description} {}", messages.nth_of_type_warning))
            }
        },
        _ => {
            let marked = format!("{value} [Index: {index}]");
            locator
                .with_value(marked)
                .with_description(format!("{description} {}", messages.manual_indexing))
        }
    }
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// `[attr='value']` → `(attr, value)`
fn parse_attribute(s: &str) -> Option<(&str, &str)> {
    let inner = s.strip_prefix('[')?.strip_suffix("']")?;
    let (attr, value) = inner.split_once("='")?;
    // CSS escapes have no XPath counterpart
    (is_ident(attr) && !value.contains('\\')).then_some((attr, value))
}

fn class_predicate(class: &str) -> String {
    format!("contains(concat(' ', normalize-space(@class), ' '), ' {class} ')")
}

/// Structural CSS→XPath conversion for simple selectors
///
/// Handles `#id`, `tag#id`, `.class`, `tag.class`, `[attr='v']` and
/// `tag[attr='v']`; anything else yields `None`.
#[must_use]
pub fn css_to_xpath(selector: &str) -> Option<String> {
    if let Some(id) = selector.strip_prefix('#') {
        return is_ident(id).then(|| format!("//*[@id='{id}']"));
    }
    if let Some(class) = selector.strip_prefix('.') {
        return is_ident(class).then(|| format!("//*[{}]", class_predicate(class)));
    }
    if let Some((attr, value)) = parse_attribute(selector) {
        return Some(format!("//*[@{attr}='{value}']"));
    }

    let split = selector.find(['#', '.', '['])?;
    let (tag, rest) = selector.split_at(split);
    if !is_word(tag) {
        return None;
    }
    if let Some(id) = rest.strip_prefix('#') {
        return is_ident(id).then(|| format!("//{tag}[@id='{id}']"));
    }
    if let Some(class) = rest.strip_prefix('.') {
        return is_ident(class).then(|| format!("//{tag}[{}]", class_predicate(class)));
    }
    parse_attribute(rest).map(|(attr, value)| format!("//{tag}[@{attr}='{value}']"))
}
