//! Semantic queries for role-aware tools: role and accessible name,
//! placeholder, and exact visible text.

use super::StrategyContext;
use crate::dom::ElementNode;
use crate::formatter::RoleHint;
use crate::locator::{Locator, LocatorMethod, Priority, Stability};

/// Roles a role locator may carry
pub const VALID_ROLES: [&str; 11] = [
    "button", "checkbox", "heading", "img", "link", "radio", "textbox", "combobox", "option",
    "menuitem", "tab",
];

/// Roles emitted even when no accessible name is found
const NAMELESS_ROLES: [&str; 2] = ["textbox", "checkbox"];

/// Tags covered by role or link-text queries, or without visible text
const NO_TEXT_QUERY_TAGS: [&str; 9] = [
    "a", "button", "input", "textarea", "select", "option", "script", "style", "svg",
];

/// Infer an ARIA-like role from tag, `type`, `role` and click handlers
///
/// Returns `None` unless the result is one of [`VALID_ROLES`].
#[must_use]
pub fn infer_role<N: ElementNode>(node: &N) -> Option<String> {
    let tag = node.tag_name();
    let kind = node.attribute("type").filter(|t| !t.is_empty());
    let mut role = node
        .attribute("role")
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| tag.clone());

    let is_input = tag == "input";
    if tag == "button" || (is_input && matches!(kind.as_deref(), Some("submit" | "button"))) {
        role = "button".to_string();
    }
    if tag == "a" && node.has_attribute("href") {
        role = "link".to_string();
    }
    if is_input && matches!(kind.as_deref(), None | Some("text")) {
        role = "textbox".to_string();
    }
    let onclick = node.attribute("onclick").is_some_and(|v| !v.is_empty());
    if onclick || node.has_attribute("ng-click") || node.has_attribute("@click") {
        role = "button".to_string();
    }

    VALID_ROLES.contains(&role.as_str()).then_some(role)
}

pub(super) fn generate<N: ElementNode>(ctx: &StrategyContext<'_, N>, out: &mut Vec<Locator>) {
    let messages = ctx.messages();
    let placeholder = ctx.node.attribute("placeholder").filter(|p| !p.is_empty());
    let mut has_role = false;

    if let Some(role) = infer_role(ctx.node) {
        let name = accessible_name(ctx, placeholder.as_deref());
        if name.is_some() || NAMELESS_ROLES.contains(&role.as_str()) {
            let value = match &name {
                Some(name) => format!("Role: {role}, Name: \"{name}\""),
                None => format!("Role: {role}"),
            };
            let hint = RoleHint::new(&role, name.as_deref());
            out.push(
                ctx.locator("role", LocatorMethod::Role, value.clone(), &value, Some(&hint))
                    .with_priority(Priority::RoleBased)
                    .with_stability(Stability::High)
                    .with_description(messages.role),
            );
            has_role = true;
        }
    }

    if let Some(placeholder) = placeholder {
        out.push(
            ctx.plain("placeholder", LocatorMethod::Placeholder, placeholder)
                .with_priority(Priority::RoleBased)
                .with_stability(Stability::High)
                .with_description(messages.placeholder),
        );
    }

    let exact_leaf = ctx.is_leaf && ctx.raw_text.trim() == ctx.raw_text && !ctx.trimmed_text.is_empty();
    if !has_role
        && exact_leaf
        && ctx.text_len() < ctx.heuristics().role_name_max_len
        && !NO_TEXT_QUERY_TAGS.contains(&ctx.tag.as_str())
    {
        out.push(
            ctx.plain("text", LocatorMethod::Text, ctx.trimmed_text.clone())
                .with_priority(Priority::TextRole)
                .with_stability(Stability::Medium)
                .with_description(messages.text),
        );
    }
}

/// Own short text, then placeholder, `alt`, `aria-label`
fn accessible_name<N: ElementNode>(ctx: &StrategyContext<'_, N>, placeholder: Option<&str>) -> Option<String> {
    let text = &ctx.trimmed_text;
    if !text.is_empty() && ctx.text_len() < ctx.heuristics().role_name_max_len && ctx.is_leaf {
        return Some(text.clone());
    }
    placeholder
        .map(str::to_string)
        .or_else(|| ctx.node.attribute("alt").filter(|v| !v.is_empty()))
        .or_else(|| ctx.node.attribute("aria-label").filter(|v| !v.is_empty()))
}
