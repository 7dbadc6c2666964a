//! Component category detection from node names.

use figura_core::model::ComponentCategory;

/// Ordered keyword rules; the first rule with a matching keyword wins.
const CATEGORY_RULES: &[(ComponentCategory, &[&str])] = &[
    (ComponentCategory::Button, &["button"]),
    (ComponentCategory::Input, &["input", "text field"]),
    (ComponentCategory::Card, &["card"]),
    (ComponentCategory::Dropdown, &["dropdown", "select"]),
    (ComponentCategory::Modal, &["modal", "dialog"]),
    (ComponentCategory::Toggle, &["toggle", "switch"]),
    (ComponentCategory::Checkbox, &["checkbox"]),
    (ComponentCategory::Radio, &["radio"]),
];

/// Classify a component by case-insensitive substring matching on its name.
///
/// Every name classifies; names matching no rule are `Generic`.
pub fn classify(name: &str) -> ComponentCategory {
    let name = name.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(ComponentCategory::Generic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_keyword_categories() {
        let cases = [
            ("Primary Button", ComponentCategory::Button),
            ("Search Input", ComponentCategory::Input),
            ("Email Text Field", ComponentCategory::Input),
            ("Product Card", ComponentCategory::Card),
            ("Country Select", ComponentCategory::Dropdown),
            ("Dropdown/Open", ComponentCategory::Dropdown),
            ("Confirm Dialog", ComponentCategory::Modal),
            ("Dark Mode Switch", ComponentCategory::Toggle),
            ("Checkbox", ComponentCategory::Checkbox),
            ("Radio Group", ComponentCategory::Radio),
            ("Avatar", ComponentCategory::Generic),
            ("", ComponentCategory::Generic),
        ];
        for (name, expected) in cases {
            assert_eq!(classify(name), expected, "name: {name}");
        }
    }

    #[test]
    fn test_rule_precedence() {
        assert_eq!(classify("Input Button"), ComponentCategory::Button);
        assert_eq!(classify("Card with select"), ComponentCategory::Card);
        assert_eq!(classify("Toggle checkbox"), ComponentCategory::Toggle);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("BUTTON"), ComponentCategory::Button);
        assert_eq!(classify("TeXt FiElD"), ComponentCategory::Input);
    }

    proptest! {
        #[test]
        fn prop_classify_is_deterministic(name in ".*") {
            prop_assert_eq!(classify(&name), classify(&name));
        }

        #[test]
        fn prop_button_always_wins(prefix in "[a-z ]{0,12}", suffix in "[a-z ]{0,12}") {
            let name = format!("{}button{}", prefix, suffix);
            prop_assert_eq!(classify(&name), ComponentCategory::Button);
        }
    }
}
