//! Tree walker and grouper.
//!
//! Root-only mode analyzes the container's first element. Deep scan adds
//! every other element of the container that looks interactive or is a
//! short content leaf, in document order.

use crate::dom::ElementNode;
use crate::locator::{GroupKey, Locator, LocatorGroup};

/// Tags that are interactive on their own
pub const INTERACTIVE_TAGS: [&str; 5] = ["input", "button", "select", "textarea", "a"];

/// Explicit roles that make an element interactive
pub const CLICKABLE_ROLES: [&str; 7] = [
    "button", "checkbox", "link", "menuitem", "tab", "switch", "option",
];

/// Tags whose text leaves are worth a locator
pub const CONTENT_TAGS: [&str; 17] = [
    "span", "div", "p", "h1", "h2", "h3", "h4", "h5", "h6", "li", "td", "th", "strong", "b", "em",
    "i", "small",
];

/// Whether an attribute name looks like an event binding
#[must_use]
pub fn is_event_attribute(name: &str) -> bool {
    name.starts_with("on")
        || name == "ng-click"
        || name == "@click"
        || name == "v-on:click"
        || name.starts_with("hx-")
}

/// Deep-scan filter for non-root elements
#[must_use]
pub fn is_scan_candidate<N: ElementNode>(node: &N) -> bool {
    let tag = node.tag_name();
    let tag = tag.as_str();
    let has_event = node
        .attributes()
        .iter()
        .any(|(name, _)| is_event_attribute(name));

    if INTERACTIVE_TAGS.contains(&tag) || has_event || tag == "label" {
        return true;
    }
    if node
        .attribute("role")
        .is_some_and(|role| CLICKABLE_ROLES.contains(&role.as_str()))
    {
        return true;
    }
    if tag == "svg" {
        let in_control = node
            .parent()
            .is_some_and(|p| matches!(p.tag_name().as_str(), "button" | "a"));
        if in_control {
            return true;
        }
    }
    CONTENT_TAGS.contains(&tag) && node.is_leaf() && !node.text_content().trim().is_empty()
}

/// Elements to analyze, root first
#[must_use]
pub fn select_nodes<N: ElementNode>(container: &N, deep_scan: bool) -> Vec<N> {
    let Some(root) = container.children().into_iter().next() else {
        return Vec::new();
    };
    if !deep_scan {
        return vec![root];
    }
    let mut nodes = vec![root.clone()];
    for node in container.descendants() {
        if node.same_node(&root) {
            continue;
        }
        if is_scan_candidate(&node) {
            nodes.push(node);
        } else {
            tracing::trace!(tag = %node.tag_name(), "skipped by deep-scan filter");
        }
    }
    nodes
}

/// Merge per-node results into groups keyed by element name
///
/// The root gets its own group. Other elements sharing a name merge into
/// one group, ordered by first appearance. Nodes without locators add
/// nothing.
#[must_use]
pub fn group_locators(entries: Vec<(bool, String, Vec<Locator>)>) -> Vec<LocatorGroup> {
    let mut groups: Vec<LocatorGroup> = Vec::new();
    for (is_root, name, locators) in entries {
        if locators.is_empty() {
            continue;
        }
        let key = if is_root {
            GroupKey::Root
        } else {
            GroupKey::Element(name.clone())
        };
        match groups.iter_mut().find(|g| *g.key() == key) {
            Some(group) => locators.into_iter().for_each(|l| group.push(l)),
            None => groups.push(LocatorGroup::new(key, name, locators)),
        }
    }
    groups
}

/// Keep groups and locators matching a free-text query
///
/// A group whose element name matches keeps all its locators; other groups
/// keep the locators whose value, code or id match. Matching ignores case.
/// Groups left empty are dropped.
#[must_use]
pub fn filter_groups(groups: &[LocatorGroup], query: &str) -> Vec<LocatorGroup> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return groups.to_vec();
    }
    let hit = |s: &str| s.to_lowercase().contains(&needle);

    groups
        .iter()
        .filter_map(|group| {
            if hit(group.element_name()) {
                return Some(group.clone());
            }
            let kept: Vec<Locator> = group
                .locators()
                .iter()
                .filter(|l| hit(l.value()) || hit(l.code_snippet()) || hit(l.id()))
                .cloned()
                .collect();
            (!kept.is_empty())
                .then(|| LocatorGroup::new(group.key().clone(), group.element_name(), kept))
        })
        .collect()
}
