use chatfmt_babel::formats::latex::{rewrite, rewrite_document};
use insta::assert_snapshot;

#[test]
fn test_quadratic_formula_keeps_nested_fraction() {
    assert_snapshot!(
        rewrite("x = \\frac{-b \\pm \\sqrt{b^2 - 4ac}}{2a}"),
        @"x = \\frac{-b ± √(b^2 - 4ac)}{2a}"
    );
}

#[test]
fn test_derivative_notation() {
    assert_snapshot!(
        rewrite("\\frac{d}{dx} \\sin x = \\cos x"),
        @"(d)/(dx) sin x = cos x"
    );
}

#[test]
fn test_set_builder() {
    assert_snapshot!(
        rewrite("A \\cup B \\subseteq C, \\forall x \\in A"),
        @"A ∪ B ⊆ C, ∀ x ∈ A"
    );
}

#[test]
fn test_inverse_trig_in_sentence() {
    assert_snapshot!(
        rewrite_document("The angle is $\\theta = \\tan^{-1}(3/4)$ radians."),
        @"The angle is theta = tan^-1(3/4) radians."
    );
}

#[test]
fn test_mixed_document() {
    let doc = "Given $f(x) = x^{3}$, we get\n\\[\nf'(x) = 3x^{2}\n\\]\nso $f'(2) = 12$.";
    assert_snapshot!(rewrite_document(doc), @r"
    Given f(x) = x^3, we get
    f'(x) = 3x^2
    so f'(2) = 12.
    ");
}

#[test]
fn test_aligned_environment() {
    let doc = "\\begin{aligned}\na &= 1 \\\\\nb &= 2\n\\end{aligned}";
    let out = rewrite(doc);
    assert!(!out.contains("\\begin"));
    assert!(!out.contains("\\end"));
    assert!(out.contains("a &= 1"));
    assert!(out.contains("b &= 2"));
}

#[test]
fn test_nested_fraction_is_a_known_limitation() {
    // One brace level only: the inner command is rewritten, the outer fraction is not.
    let out = rewrite("\\frac{\\sqrt{2}}{2}");
    assert!(out.contains("√(2)"));
}

#[test]
fn test_plain_prose_is_untouched() {
    let prose = "Nothing to see here, just words.";
    assert_eq!(rewrite_document(prose), prose);
}
