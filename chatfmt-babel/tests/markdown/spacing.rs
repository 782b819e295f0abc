use chatfmt_babel::formats::markdown::reformat;

#[test]
fn test_blank_runs_collapse() {
    assert_eq!(reformat("a\n\n\n\nb"), "a\n\nb");
}

#[test]
fn test_leading_and_trailing_blanks_are_trimmed() {
    assert_eq!(reformat("\n\n  text  \n\n"), "text");
}

#[test]
fn test_inline_code_becomes_brackets() {
    assert_eq!(reformat("Use `x^2` here"), "Use [x^2] here");
}

#[test]
fn test_bold_and_underscore_emphasis() {
    assert_eq!(reformat("This is **key** and __also__ key"), "This is *key* and *also* key");
}

#[test]
fn test_adjacent_paragraph_lines_are_kept_together() {
    assert_eq!(reformat("line one\nline two"), "line one\nline two");
}
