//! Locsmith: locator strategy engine for UI test automation
//!
//! Given an element tree, locsmith produces ranked candidate locators for
//! each element worth targeting, resolves values that would match more than
//! one element, and renders every locator as a ready-to-paste snippet for
//! Selenium, Playwright, Cypress, Appium, Katalon or Robot Framework.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ ElementNode  │──►│ Tree walker  │──►│ Strategy     │──►│ Ranker       │
//! │ (any parser) │   │ + namer      │   │ generators   │   │ (per tool)   │
//! └──────────────┘   └──────────────┘   └──────┬───────┘   └──────┬───────┘
//!                                              │ formatter        │
//!                                              ▼                  ▼
//!                                       ┌──────────────┐   ┌──────────────┐
//!                                       │ Duplicate    │──►│ Analysis /   │
//!                                       │ resolver     │   │ POM emitter  │
//!                                       └──────────────┘   └──────────────┘
//! ```
//!
//! The engine never parses markup and performs no I/O. Parsers plug in
//! through the [`dom::ElementNode`] trait.
//!
//! # Example
//!
//! ```
//! use locsmith::prelude::*;
//!
//! let doc = Document::fragment(vec![
//!     ElementSpec::new("button").id("submit-btn").text("Login"),
//! ]);
//! let config = EngineConfig::new(Tool::Selenium, ProgrammingLanguage::Java).unwrap();
//! let Analysis::Root(locators) = analyze(&doc.container(), &config) else {
//!     unreachable!()
//! };
//! assert_eq!(locators[0].value(), "#submit-btn");
//! assert_eq!(locators[0].code_snippet(), "driver.findElement(By.id(\"submit-btn\"));");
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod config;
mod dedup;
pub mod dom;
mod dynamic;
mod engine;
pub mod formatter;
mod i18n;
mod locator;
mod naming;
pub mod page_object;
mod ranking;
mod result;
/// Per-strategy locator generators
pub mod strategy;
mod tool;
mod walker;

pub use config::{EngineConfig, Heuristics};
pub use dedup::{css_to_xpath, resolve_duplicates};
pub use dynamic::{is_dynamic, is_dynamic_class, DynamicClassifier, DynamicRule};
pub use engine::{analyze, Analysis, LocatorEngine};
pub use i18n::{Locale, Messages};
pub use locator::{derive_id, GroupKey, Locator, LocatorGroup, LocatorMethod, Priority, Stability};
pub use naming::name_of;
pub use ranking::{compare, sort_locators, tool_weight};
pub use result::{LocatorError, LocatorResult};
pub use tool::{ProgrammingLanguage, Tool};
pub use walker::{filter_groups, group_locators, is_scan_candidate, select_nodes};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::dom::{Document, ElementNode, ElementSpec, NodeRef};
    pub use super::formatter::{render, RoleHint};
    pub use super::page_object::{emit as emit_page_object, PageObjectBuilder};
    pub use super::{
        analyze, filter_groups, Analysis, EngineConfig, Heuristics, Locale, Locator,
        LocatorEngine, LocatorError, LocatorGroup, LocatorMethod, LocatorResult, Priority,
        ProgrammingLanguage, Stability, Tool,
    };
}
