use chatfmt_babel::{format_answer, format_answer_with_rules, ReformatRules, Transport};

fn rules() -> ReformatRules {
    ReformatRules {
        heading_rule: "---".to_string(),
        ..ReformatRules::default()
    }
}

#[test]
fn test_worked_answer() {
    let answer = "# Quadratic equations\n\nSolve $x^2 - 5x + 6 = 0$.\n\n### Steps\n1. Factor: $(x-2)(x-3) = 0$\n2. So $x = 2$ or $x = 3$\n\n**Answer:** $x \\in S$";
    assert_eq!(
        format_answer_with_rules(answer, &rules()),
        "---\n*Quadratic equations*\n---\n\nSolve x^2 - 5x + 6 = 0.\n\n---\n*Steps*\n---\n\n 1. Factor: (x-2)(x-3) = 0\n 2. So x = 2 or x = 3\n\n*Answer:* x ∈ S"
    );
}

#[test]
fn test_bullet_lines_get_spacing() {
    // Bullets are indented by the reformatter, so only a bullet at line start is spaced.
    assert_eq!(format_answer("Result\n• first"), "Result\n\n• first");
    assert_eq!(format_answer("Intro\n- a\n- b"), "Intro\n\n • a\n • b");
}

#[test]
fn test_stray_bold_markers_are_removed() {
    assert_eq!(format_answer("unbalanced ** marker"), "unbalanced marker");
}

#[test]
fn test_space_runs_collapse() {
    assert_eq!(format_answer("wide    gap"), "wide gap");
}

#[test]
fn test_long_answer_splits_for_twilio() {
    let paragraph = "The derivative of $x^{2}$ is $2x$.\n";
    let answer = paragraph.repeat(60);
    let formatted = format_answer(&answer);
    let parts = Transport::Twilio.split(&formatted);

    assert!(parts.len() > 1);
    assert!(parts
        .iter()
        .all(|part| part.chars().count() <= Transport::Twilio.max_len().get()));
    assert_eq!(parts.concat(), formatted);
    assert!(!formatted.contains('$'));
}
