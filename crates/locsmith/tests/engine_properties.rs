//! End-to-end behavior of the analysis pipeline through the public API.

#![allow(clippy::unwrap_used)]

use locsmith::prelude::*;
use proptest::prelude::*;

fn root_locators(roots: Vec<ElementSpec>, config: &EngineConfig) -> Vec<Locator> {
    let doc = Document::fragment(roots);
    match analyze(&doc.container(), config) {
        Analysis::Root(locators) => locators,
        Analysis::Groups(_) => panic!("root-only config produced groups"),
    }
}

fn find<'l>(locators: &'l [Locator], method: LocatorMethod, value: &str) -> Option<&'l Locator> {
    locators
        .iter()
        .find(|l| l.method() == method && l.value() == value)
}

fn tuples(analysis: &Analysis) -> Vec<(LocatorMethod, String, Priority, Stability)> {
    analysis
        .locators()
        .map(|l| (l.method(), l.value().to_string(), l.priority(), l.stability()))
        .collect()
}

mod generation_tests {
    use super::*;

    #[test]
    fn test_button_with_stable_id() {
        let locators = root_locators(
            vec![ElementSpec::new("button").id("submit-btn").text("Login")],
            &EngineConfig::for_tool(Tool::Selenium),
        );
        let id = find(&locators, LocatorMethod::Id, "#submit-btn").unwrap();
        assert_eq!(id.stability(), Stability::High);
        let css = find(&locators, LocatorMethod::Css, "button#submit-btn").unwrap();
        assert_eq!(css.stability(), Stability::High);
    }

    #[test]
    fn test_generated_id_is_low_and_last_for_every_tool() {
        for tool in Tool::ALL {
            let locators = root_locators(
                vec![ElementSpec::new("input")
                    .id("field1234")
                    .attr("name", "amount")
                    .attr("placeholder", "Amount")],
                &EngineConfig::for_tool(tool),
            );
            let last = locators.last().unwrap();
            assert_eq!(last.value(), "#field1234", "{tool}");
            assert_eq!(last.stability(), Stability::Low, "{tool}");
            assert!(locators.len() > 1, "{tool}");
        }
    }

    #[test]
    fn test_anchor_link_text() {
        let locators = root_locators(
            vec![ElementSpec::new("a").attr("href", "/x").text(" Continue ")],
            &EngineConfig::for_tool(Tool::Selenium),
        );
        let link = find(&locators, LocatorMethod::LinkText, "Continue").unwrap();
        assert_eq!(link.stability(), Stability::Medium);
    }

    #[test]
    fn test_every_locator_names_its_element() {
        let locators = root_locators(
            vec![ElementSpec::new("input")
                .attr("type", "email")
                .attr("name", "mail")
                .class("field")],
            &EngineConfig::for_tool(Tool::Cypress),
        );
        assert!(!locators.is_empty());
        for locator in &locators {
            assert_eq!(locator.element_name(), Some("EMAIL Input (name=mail)"));
            assert_eq!(locator.tag_name(), "input");
            assert!(Tool::Cypress.supports(locator.method()));
        }
    }
}

mod duplicate_tests {
    use super::*;

    fn toolbar() -> Document {
        Document::fragment(vec![ElementSpec::new("div")
            .child(ElementSpec::new("button").class("btn").text("Save"))
            .child(ElementSpec::new("button").class("btn").text("Save"))])
    }

    #[test]
    fn test_second_css_occurrence_is_rewritten() {
        let doc = toolbar();
        let config = EngineConfig::for_tool(Tool::Selenium).with_deep_scan(true);
        let analysis = analyze(&doc.container(), &config);
        let css: Vec<&Locator> = analysis
            .locators()
            .filter(|l| l.description().contains("Duplicate"))
            .filter(|l| l.method() == LocatorMethod::Css || l.value().contains("' btn '"))
            .collect();
        assert_eq!(css.len(), 2);
        assert_eq!(css[0].value(), "button.btn");
        assert_eq!(
            css[1].value(),
            "(//button[contains(concat(' ', normalize-space(@class), ' '), ' btn ')])[2]"
        );
        assert_eq!(css[1].method(), LocatorMethod::XPath);
    }

    #[test]
    fn test_playwright_qualifies_every_occurrence() {
        let doc = toolbar();
        let config = EngineConfig::for_tool(Tool::Playwright).with_deep_scan(true);
        let analysis = analyze(&doc.container(), &config);
        let values: Vec<&str> = analysis
            .locators()
            .filter(|l| l.method() == LocatorMethod::Role)
            .map(Locator::code_snippet)
            .collect();
        assert_eq!(
            values,
            vec![
                "page.getByRole('button', { name: 'Save' }).nth(0)",
                "page.getByRole('button', { name: 'Save' }).nth(1)",
            ]
        );
    }

    #[test]
    fn test_rendered_values_unique_after_resolution() {
        let doc = toolbar();
        for tool in [Tool::Selenium, Tool::Playwright, Tool::Katalon] {
            let config = EngineConfig::for_tool(tool).with_deep_scan(true);
            let analysis = analyze(&doc.container(), &config);
            let mut values: Vec<&str> = analysis.locators().map(Locator::value).collect();
            let total = values.len();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values.len(), total, "{tool}");
        }
    }
}

mod rendering_tests {
    use super::*;

    #[test]
    fn test_fixed_webdriver_templates() {
        assert_eq!(
            render(LocatorMethod::Id, "submit-btn", Tool::Selenium, ProgrammingLanguage::Java, None),
            "driver.findElement(By.id(\"submit-btn\"));"
        );
        assert_eq!(
            render(LocatorMethod::Id, "submit-btn", Tool::Selenium, ProgrammingLanguage::Python, None),
            "driver.find_element(By.ID, \"submit-btn\")"
        );
    }

    #[test]
    fn test_config_rejects_pairs_outside_profile() {
        let err = EngineConfig::new(Tool::Cypress, ProgrammingLanguage::Java).unwrap_err();
        assert!(matches!(err, LocatorError::UnsupportedLanguage { .. }));
        assert!(err.to_string().contains("javascript"));
        assert!(EngineConfig::new(Tool::Katalon, ProgrammingLanguage::Groovy).is_ok());
    }

    #[test]
    fn test_text_with_both_quote_kinds_renders_closed_literals() {
        let text = "He said \"it's\"";
        let locators = root_locators(
            vec![ElementSpec::new("span").attr("title", text).text(text)],
            &EngineConfig::for_tool(Tool::Selenium),
        );
        assert!(!locators.is_empty());
        for locator in &locators {
            assert!(!locator.value().contains("\"He said \"it's\"\""), "{}", locator.value());
            assert!(!locator.value().contains("'He said \"it's\"'"), "{}", locator.value());
        }
        assert!(locators
            .iter()
            .any(|l| l.value() == "//span[text()=concat('He said \"it', \"'\", 's\"')]"));
    }

    #[test]
    fn test_katalon_link_text_depends_on_nesting() {
        let config = EngineConfig::new(Tool::Katalon, ProgrammingLanguage::Groovy).unwrap();
        let leaf = root_locators(
            vec![ElementSpec::new("a").attr("href", "/x").text("Continue")],
            &config,
        );
        let nested = root_locators(
            vec![ElementSpec::new("a")
                .attr("href", "/x")
                .child(ElementSpec::new("span").text("Continue"))],
            &config,
        );
        let leaf = find(&leaf, LocatorMethod::LinkText, "Continue").unwrap();
        let nested = find(&nested, LocatorMethod::LinkText, "Continue").unwrap();
        assert_ne!(leaf.code_snippet(), nested.code_snippet());
        assert!(leaf.code_snippet().contains("//a[text()='Continue']"));
        assert!(nested.code_snippet().contains("//a[normalize-space()='Continue']"));
    }

    #[test]
    fn test_utility_class_selectors_are_escaped() {
        let locators = root_locators(
            vec![ElementSpec::new("button").class("hover:bg-blue-500")],
            &EngineConfig::for_tool(Tool::Selenium),
        );
        assert!(find(&locators, LocatorMethod::Css, "button.hover\\:bg-blue-500").is_some());
        assert!(locators
            .iter()
            .filter(|l| l.method() == LocatorMethod::Css)
            .all(|l| !l.value().contains("button.hover:")));
    }
}

mod determinism_tests {
    use super::*;

    fn page() -> Document {
        Document::fragment(vec![ElementSpec::new("form")
            .id("checkout")
            .child(ElementSpec::new("label").attr("for", "card").text("Card number"))
            .child(ElementSpec::new("input").id("card").attr("type", "text"))
            .child(ElementSpec::new("a").attr("href", "/terms").text("Terms"))
            .child(ElementSpec::new("span").class("hint").text("Required"))])
    }

    #[test]
    fn test_identical_calls_identical_output() {
        let doc = page();
        for tool in Tool::ALL {
            for &language in tool.languages() {
                let config = EngineConfig::new(tool, language).unwrap().with_deep_scan(true);
                let first = analyze(&doc.container(), &config);
                let second = analyze(&doc.container(), &config);
                assert_eq!(tuples(&first), tuples(&second));
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_locale_changes_only_descriptions() {
        let doc = page();
        let en = EngineConfig::for_tool(Tool::Selenium).with_deep_scan(true);
        let vi = en.clone().with_locale(Locale::Vi);
        let en = analyze(&doc.container(), &en);
        let vi = analyze(&doc.container(), &vi);
        assert_eq!(tuples(&en), tuples(&vi));
        assert_ne!(
            en.locators().map(Locator::description).collect::<Vec<_>>(),
            vi.locators().map(Locator::description).collect::<Vec<_>>()
        );
    }

    proptest! {
        #[test]
        fn prop_analysis_is_deterministic(
            id in "[a-z]{1,8}[0-9]{0,6}",
            class in "[a-z]{1,6}( [a-z]{1,6}){0,2}",
            text in "[A-Za-z ]{0,24}",
        ) {
            let doc = Document::fragment(vec![ElementSpec::new("button")
                .id(id)
                .class(class)
                .text(text)]);
            let config = EngineConfig::for_tool(Tool::Selenium);
            let a = analyze(&doc.container(), &config);
            let b = analyze(&doc.container(), &config);
            prop_assert_eq!(a, b);
        }
    }
}
