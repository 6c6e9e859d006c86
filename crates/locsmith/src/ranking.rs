//! Priority & stability ranking.
//!
//! Base priority is intrinsic to a strategy; [`tool_weight`] reinterprets it
//! for one tool. Sorting compares weights, then stability, then value length.

use std::cmp::Ordering;

use crate::locator::{Locator, LocatorMethod, Priority};
use crate::tool::Tool;

/// Weight that pulls a locator to the front
pub const PREFERRED_WEIGHT: i32 = -10;

/// Weight for role-aware text queries
pub const TEXT_WEIGHT: i32 = -5;

/// Penalty for raw XPath under role-aware tools
pub const XPATH_PENALTY: i32 = 5;

/// Generated-looking ids always rank after everything else
pub const DYNAMIC_WEIGHT: i32 = 100;

/// Effective sort weight of a locator for a tool (lower ranks first)
#[must_use]
pub fn tool_weight(locator: &Locator, tool: Tool) -> i32 {
    let priority = locator.priority();
    if priority == Priority::DynamicId {
        return DYNAMIC_WEIGHT;
    }
    let base = priority.ordinal();

    if tool.is_role_aware() {
        let weight = match priority {
            Priority::RoleBased => PREFERRED_WEIGHT,
            Priority::TextRole => TEXT_WEIGHT,
            _ => base,
        };
        if locator.method() == LocatorMethod::XPath {
            weight + XPATH_PENALTY
        } else {
            weight
        }
    } else if tool.prefers_test_ids() {
        let value = locator.value();
        if value.contains("data-cy") || value.contains("data-test") {
            PREFERRED_WEIGHT
        } else {
            base
        }
    } else if priority == Priority::RobustId {
        PREFERRED_WEIGHT
    } else {
        base
    }
}

/// Total order used for ranking under one tool
#[must_use]
pub fn compare(a: &Locator, b: &Locator, tool: Tool) -> Ordering {
    tool_weight(a, tool)
        .cmp(&tool_weight(b, tool))
        .then_with(|| a.stability().cmp(&b.stability()))
        .then_with(|| a.value().chars().count().cmp(&b.value().chars().count()))
}

/// Stable in-place sort, best first
pub fn sort_locators(locators: &mut [Locator], tool: Tool) {
    locators.sort_by(|a, b| compare(a, b, tool));
}
