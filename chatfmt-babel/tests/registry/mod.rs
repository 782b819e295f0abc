//! Format registry tests

use chatfmt_babel::{Format, FormatError, FormatRegistry, ReformatRules};

struct Shout;

impl Format for Shout {
    fn name(&self) -> &str {
        "shout"
    }

    fn render(&self, source: &str) -> String {
        source.to_uppercase()
    }
}

#[test]
fn test_builtin_formats() {
    let registry = FormatRegistry::default();
    assert_eq!(registry.list_formats(), vec!["answer", "latex", "markdown"]);
    for name in registry.list_formats() {
        let format = registry.get(&name).unwrap();
        assert_eq!(format.name(), name);
        assert!(!format.description().is_empty());
    }
}

#[test]
fn test_unknown_format() {
    let registry = FormatRegistry::default();
    let err = registry.render("x", "pdf").unwrap_err();
    assert_eq!(err, FormatError::FormatNotFound("pdf".to_string()));
    assert_eq!(err.to_string(), "Format 'pdf' not found");
}

#[test]
fn test_formats_differ_on_markdown() {
    let registry = FormatRegistry::with_rules(ReformatRules {
        heading_rule: "~~".to_string(),
        ..ReformatRules::default()
    });
    let source = "## Sum\n$\\sum_{i=1}^{n} i$";

    assert_eq!(
        registry.render(source, "latex").unwrap(),
        "## Sum\nΣ_(i=1)^n i"
    );
    assert_eq!(
        registry.render(source, "markdown").unwrap(),
        "~~\n*Sum*\n~~\n\nΣ_(i=1)^n i"
    );
}

#[test]
fn test_custom_format_can_be_registered() {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(Shout);
    assert!(registry.has("shout"));
    assert_eq!(registry.render("hi", "shout").unwrap(), "HI");
}
