use chatfmt_babel::formats::markdown::{reformat, reformat_with_rules, ReformatRules};
use insta::assert_snapshot;

fn short_rule() -> ReformatRules {
    ReformatRules {
        heading_rule: "====".to_string(),
        ..ReformatRules::default()
    }
}

#[test]
fn test_heading_with_math() {
    assert_snapshot!(reformat("## Result\nThe area is $\\pi r^{2}$."), @r"
    ━━━━━━━━━━━━━━━━━━━━
    *Result*
    ━━━━━━━━━━━━━━━━━━━━

    The area is pi r^2.
    ");
}

#[test]
fn test_heading_levels_one_to_three_use_rules() {
    for heading in ["# Title", "## Title", "### Title"] {
        assert_eq!(
            reformat_with_rules(heading, &short_rule()),
            "====\n*Title*\n===="
        );
    }
}

#[test]
fn test_deep_headings_use_marker() {
    assert_eq!(reformat("#### Step 1\nDo it"), "🔹 *Step 1*\n\nDo it");
    assert_eq!(reformat("###### Detail"), "🔹 *Detail*");
}

#[test]
fn test_bold_heading_is_not_rewrapped() {
    assert_eq!(
        reformat_with_rules("### **Bold** title", &short_rule()),
        "====\n*Bold* title\n===="
    );
}

#[test]
fn test_heading_math_is_rewritten() {
    assert_eq!(
        reformat_with_rules("## Area $\\pi r^{2}$", &short_rule()),
        "====\n*Area pi r^2*\n===="
    );
}

#[test]
fn test_consecutive_headings_are_separated() {
    assert_eq!(
        reformat_with_rules("# One\n## Two", &short_rule()),
        "====\n*One*\n====\n\n====\n*Two*\n===="
    );
}

#[test]
fn test_hash_without_space_is_plain_text() {
    assert_eq!(reformat("#hashtag"), "#hashtag");
    assert_eq!(reformat("####### too deep"), "####### too deep");
}
