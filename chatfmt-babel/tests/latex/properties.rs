use chatfmt_babel::formats::latex::rewrite;
use proptest::prelude::*;

const TOKENS: &[&str] = &[
    "\\alpha",
    "\\in",
    "\\sin",
    "\\int_0^1",
    "\\frac{a}{b}",
    "\\sqrt{x}",
    "x^{2}",
    "y_{n+1}",
    "\\leq",
    "\\infty",
    "\\to",
    "\\rightarrow",
    "\\notin",
    "\\cdot",
    "abc",
    "1",
];

fn expression() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(TOKENS), 0..12).prop_map(|tokens| tokens.join(" "))
}

proptest! {
    #[test]
    fn rewrite_is_idempotent(input in expression()) {
        let once = rewrite(&input);
        prop_assert_eq!(rewrite(&once), once);
    }

    #[test]
    fn known_commands_leave_no_backslash(input in expression()) {
        prop_assert!(!rewrite(&input).contains('\\'));
    }

    #[test]
    fn output_is_trimmed(input in "[ a-z\\n]{0,40}") {
        let out = rewrite(&input);
        prop_assert_eq!(out.trim(), out.as_str());
    }
}
