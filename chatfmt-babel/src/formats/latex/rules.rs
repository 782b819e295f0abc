//! The ordered rewrite rule set
//!
//! Rules are grouped by [`Category`] and applied in [`CATEGORY_ORDER`], each category fully
//! completing before the next begins. Later categories contain constructs that are textual
//! prefixes of earlier ones (`\in` vs `\int`, `\sin`), and the positional constructs must see
//! the symbol phases already applied, so reordering corrupts output.
//!
//! The ordering is necessary, not proven sufficient: add a regression case in the tests
//! below before inserting a new symbol.

use super::matcher::{CommandMatcher, Matcher, PatternMatcher, Replacement};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// One phase of the rewrite pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// `\[ \]`, `\( \)`, `$$`, `$`
    Delimiters,
    Functions,
    /// Named inverse functions (`\arcsin`)
    InverseTrig,
    Calculus,
    Greek,
    Operators,
    /// Sets and logic; `\in` is last
    SetLogic,
    Fraction,
    Superscript,
    Subscript,
    Limit,
    Spacing,
    BracketSizing,
    Arrows,
    Symbols,
    SquareRoot,
    /// Unifies `fn^{-1}`, `fn^(-1)`, `fn⁻¹` and "fn inverse" to `fn^-1`
    InverseTrigForms,
    Whitespace,
    /// Drops parentheses around a single-character script argument
    Cleanup,
}

/// Application order of the rewrite categories
pub const CATEGORY_ORDER: [Category; 19] = [
    Category::Delimiters,
    Category::Functions,
    Category::InverseTrig,
    Category::Calculus,
    Category::Greek,
    Category::Operators,
    Category::SetLogic,
    Category::Fraction,
    Category::Superscript,
    Category::Subscript,
    Category::Limit,
    Category::Spacing,
    Category::BracketSizing,
    Category::Arrows,
    Category::Symbols,
    Category::SquareRoot,
    Category::InverseTrigForms,
    Category::Whitespace,
    Category::Cleanup,
];

/// A matcher paired with the text it produces
pub struct RewriteRule {
    pub category: Category,
    /// The command or pattern this rule matches, for diagnostics
    pub source: String,
    pub matcher: Box<dyn Matcher>,
    pub replacement: Replacement,
}

impl RewriteRule {
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.matcher.replace_all(text, &self.replacement)
    }
}

/// The full rule set, grouped in [`CATEGORY_ORDER`]
pub static RULESET: Lazy<Vec<RewriteRule>> = Lazy::new(build_ruleset);

const FUNCTIONS: &[(&str, &str)] = &[
    ("sin", "sin"),
    ("cos", "cos"),
    ("tan", "tan"),
    ("cot", "cot"),
    ("sec", "sec"),
    ("csc", "csc"),
    ("sinh", "sinh"),
    ("cosh", "cosh"),
    ("tanh", "tanh"),
    ("log", "log"),
    ("ln", "ln"),
    ("exp", "exp"),
    ("max", "max"),
    ("min", "min"),
    ("det", "det"),
    ("gcd", "gcd"),
];

const INVERSE_TRIG: &[(&str, &str)] = &[
    ("arcsin", "sin^-1"),
    ("arccos", "cos^-1"),
    ("arctan", "tan^-1"),
];

const CALCULUS: &[(&str, &str)] = &[
    ("iint", "∬"),
    ("oint", "∮"),
    ("int", "∫"),
    ("sum", "Σ"),
    ("prod", "Π"),
    ("partial", "∂"),
    ("nabla", "∇"),
];

const GREEK: &[(&str, &str)] = &[
    ("alpha", "alpha"),
    ("beta", "beta"),
    ("gamma", "gamma"),
    ("delta", "delta"),
    ("epsilon", "epsilon"),
    ("varepsilon", "epsilon"),
    ("zeta", "zeta"),
    ("eta", "eta"),
    ("theta", "theta"),
    ("vartheta", "theta"),
    ("iota", "iota"),
    ("kappa", "kappa"),
    ("lambda", "lambda"),
    ("mu", "mu"),
    ("nu", "nu"),
    ("xi", "xi"),
    ("pi", "pi"),
    ("rho", "rho"),
    ("sigma", "sigma"),
    ("tau", "tau"),
    ("upsilon", "upsilon"),
    ("phi", "phi"),
    ("varphi", "phi"),
    ("chi", "chi"),
    ("psi", "psi"),
    ("omega", "omega"),
    ("Gamma", "Gamma"),
    ("Delta", "Delta"),
    ("Theta", "Theta"),
    ("Lambda", "Lambda"),
    ("Xi", "Xi"),
    ("Pi", "Pi"),
    ("Sigma", "Sigma"),
    ("Phi", "Phi"),
    ("Psi", "Psi"),
    ("Omega", "Omega"),
];

const OPERATORS: &[(&str, &str)] = &[
    ("times", "×"),
    ("cdot", "·"),
    ("div", "÷"),
    ("pm", "±"),
    ("mp", "∓"),
    ("leq", "≤"),
    ("le", "≤"),
    ("geq", "≥"),
    ("ge", "≥"),
    ("neq", "≠"),
    ("ne", "≠"),
    ("approx", "≈"),
    ("equiv", "≡"),
    ("sim", "∼"),
    ("propto", "∝"),
];

const SET_LOGIC: &[(&str, &str)] = &[
    ("notin", "∉"),
    ("subseteq", "⊆"),
    ("supseteq", "⊇"),
    ("subset", "⊂"),
    ("supset", "⊃"),
    ("cup", "∪"),
    ("cap", "∩"),
    ("setminus", "∖"),
    ("emptyset", "∅"),
    ("varnothing", "∅"),
    ("forall", "∀"),
    ("exists", "∃"),
    ("neg", "¬"),
    ("land", "∧"),
    ("lor", "∨"),
    ("in", "∈"),
];

const SPACING: &[(&str, &str)] = &[
    (",", " "),
    (";", " "),
    (":", " "),
    (" ", " "),
    ("!", ""),
    ("quad", " "),
    ("qquad", " "),
];

const ARROWS: &[(&str, &str)] = &[
    ("longrightarrow", "->"),
    ("Longrightarrow", "=>"),
    ("rightarrow", "->"),
    ("leftarrow", "<-"),
    ("Rightarrow", "=>"),
    ("Leftarrow", "<="),
    ("leftrightarrow", "<->"),
    ("Leftrightarrow", "<=>"),
    ("implies", "=>"),
    ("iff", "<=>"),
    ("mapsto", "|->"),
    ("gets", "<-"),
];

const SYMBOLS: &[(&str, &str)] = &[
    ("infty", "∞"),
    ("partial", "∂"),
    ("nabla", "∇"),
    ("circ", "∘"),
    ("degree", "°"),
    ("ldots", "…"),
    ("dots", "…"),
    ("cdots", "⋯"),
    ("langle", "⟨"),
    ("rangle", "⟩"),
    ("%", "%"),
];

fn command(category: Category, name: &str, text: &'static str) -> RewriteRule {
    RewriteRule {
        category,
        source: format!("\\{name}"),
        matcher: Box::new(CommandMatcher::new(name)),
        replacement: Replacement::Text(text),
    }
}

fn commands(category: Category, table: &[(&str, &'static str)]) -> Vec<RewriteRule> {
    table
        .iter()
        .map(|&(name, text)| command(category, name, text))
        .collect()
}

fn pattern(category: Category, regex: &str, replacement: Replacement) -> RewriteRule {
    RewriteRule {
        category,
        source: regex.to_string(),
        matcher: Box::new(PatternMatcher::new(Regex::new(regex).unwrap())),
        replacement,
    }
}

/// First non-empty argument group.
fn first_arg<'a>(args: &[&'a str]) -> &'a str {
    args.iter().copied().find(|arg| !arg.is_empty()).unwrap_or("")
}

fn is_single_alnum(arg: &str) -> bool {
    let mut chars = arg.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphanumeric())
}

fn script(marker: char, args: &[&str]) -> String {
    let arg = first_arg(args);
    if is_single_alnum(arg) {
        format!("{marker}{arg}")
    } else {
        format!("{marker}({arg})")
    }
}

fn nth_root(args: &[&str]) -> String {
    match args[0].trim() {
        "2" => format!("√({})", args[1]),
        "3" => format!("∛({})", args[1]),
        "4" => format!("∜({})", args[1]),
        n => format!("{n}√({})", args[1]),
    }
}

fn build_ruleset() -> Vec<RewriteRule> {
    use Category::*;

    let mut rules = vec![
        command(Delimiters, "[", ""),
        command(Delimiters, "]", ""),
        command(Delimiters, "(", ""),
        command(Delimiters, ")", ""),
        pattern(Delimiters, r"\$", Replacement::Text("")),
    ];

    rules.extend(commands(Functions, FUNCTIONS));
    rules.extend(commands(InverseTrig, INVERSE_TRIG));
    rules.extend(commands(Calculus, CALCULUS));
    rules.extend(commands(Greek, GREEK));
    rules.extend(commands(Operators, OPERATORS));
    rules.extend(commands(SetLogic, SET_LOGIC));

    rules.extend([
        pattern(
            Fraction,
            r"\\[dt]?frac\{([^}]+)\}\{([^}]+)\}",
            Replacement::With(|a| format!("({})/({})", a[0], a[1])),
        ),
        pattern(
            Fraction,
            r"\\[dt]?frac\s*([A-Za-z0-9])([A-Za-z0-9])",
            Replacement::With(|a| format!("({})/({})", a[0], a[1])),
        ),
        pattern(
            Superscript,
            r"\^(?:\{([^}]+)\}|([A-Za-z0-9]))",
            Replacement::With(|a| script('^', a)),
        ),
        pattern(
            Subscript,
            r"_(?:\{([^}]+)\}|([A-Za-z0-9]))",
            Replacement::With(|a| script('_', a)),
        ),
        // The subscript phase has already turned `\lim_{x \to 0}` into `\lim_(x \to 0)`.
        pattern(
            Limit,
            r"\\lim_(?:\{([^}]+)\}|\(([^)]+)\))",
            Replacement::With(|a| format!("lim({})", first_arg(a))),
        ),
        command(Limit, "lim", "lim"),
        command(Limit, "to", "->"),
        command(Spacing, "\\", "\n"),
        pattern(
            Spacing,
            r"\\(?:begin|end)\{[A-Za-z*]+\}",
            Replacement::Text(""),
        ),
    ]);
    rules.extend(commands(Spacing, SPACING));
    rules.extend([
        pattern(
            Spacing,
            r"\\(?:text|textbf|textit|mathrm|mathbf|mathit|mathbb|mathcal|operatorname)\{([^}]+)\}",
            Replacement::With(|a| a[0].to_string()),
        ),
        pattern(
            BracketSizing,
            r"\\(?:left|right|[Bb]igg?[lr]?)\s*\\?([()\[\]{}|.])",
            Replacement::With(|a| if a[0] == "." { String::new() } else { a[0].to_string() }),
        ),
        command(BracketSizing, "left", ""),
        command(BracketSizing, "right", ""),
    ]);
    rules.extend(commands(Arrows, ARROWS));

    rules.push(pattern(
        Symbols,
        r"\^(?:\\circ|\(\\circ\))",
        Replacement::Text("°"),
    ));
    rules.extend(commands(Symbols, SYMBOLS));

    let root = Replacement::With(|a| format!("√({})", a[0]));
    rules.extend([
        pattern(
            SquareRoot,
            r"\\sqrt\[([^\]]+)\]\{([^}]+)\}",
            Replacement::With(nth_root),
        ),
        pattern(SquareRoot, r"\\sqrt\{([^}]+)\}", root),
        pattern(SquareRoot, r"\\sqrt\s*([A-Za-z0-9]+)", root),
        pattern(SquareRoot, r"\\?\bsqrt\(([^)]+)\)", root),
        pattern(SquareRoot, r"\\?\bsqrt\s+([A-Za-z0-9]+)", root),
        pattern(
            InverseTrigForms,
            r"\b(sin|cos|tan)\s*(?:\^\{\s*[-−]\s*1\s*\}|\^\(\s*[-−]\s*1\s*\)|\^[-−]1|⁻¹)",
            Replacement::With(|a| format!("{}^-1", a[0])),
        ),
        pattern(
            InverseTrigForms,
            r"(?i)\b(sin|cos|tan)\s+inverse\b",
            Replacement::With(|a| format!("{}^-1", a[0])),
        ),
        pattern(Whitespace, r"[^\S\n]+", Replacement::Text(" ")),
        pattern(Whitespace, r"(?m)^ +| +$", Replacement::Text("")),
        pattern(Whitespace, r"\n{3,}", Replacement::Text("\n\n")),
        pattern(
            Cleanup,
            r"([\^_])\(([A-Za-z0-9])\)",
            Replacement::With(|a| format!("{}{}", a[0], a[1])),
        ),
    ]);

    rules
}
