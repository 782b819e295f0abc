use chatfmt_babel::formats::markdown::reformat;

#[test]
fn test_ordered_list_then_text() {
    assert_eq!(
        reformat("1. one\n2. two\nAfter"),
        "1. one\n  2. two\n\nAfter"
    );
}

#[test]
fn test_bullets_after_intro() {
    assert_eq!(reformat("Intro\n- a\n- b"), "Intro\n\n  • a\n  • b");
    assert_eq!(reformat("Intro\n* a\n+ b"), "Intro\n\n  • a\n  • b");
}

#[test]
fn test_mixed_list_stays_together() {
    assert_eq!(
        reformat("Steps:\n1. first\n2. second\n- note\nEnd"),
        "Steps:\n\n  1. first\n  2. second\n  • note\n\nEnd"
    );
}

#[test]
fn test_list_continuation_is_not_separated() {
    assert_eq!(reformat("- item\n-5 degrees"), "• item\n-5 degrees");
}

#[test]
fn test_list_item_math() {
    assert_eq!(
        reformat("Roots:\n- $x = \\frac{1}{2}$\n- $x \\geq 0$"),
        "Roots:\n\n  • x = (1)/(2)\n  • x ≥ 0"
    );
}

#[test]
fn test_indented_items_are_normalized() {
    assert_eq!(reformat("Intro\n   - a\n  3.  c"), "Intro\n\n  • a\n  3. c");
}
