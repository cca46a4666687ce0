//! Title to filename conversion for simple-icons glyphs.
//!
//! simple-icons names each glyph file after a slug computed from the brand
//! title. The conversion is a fixed sequence of rewrite rules; each rule
//! consumes the output of the previous one, so the order of [`RULES`] is part
//! of the algorithm. Running them in any other order (or as one batched
//! substitution) diverges on titles such as `".net."` that trigger several
//! rules at once.

/// Extension of the glyph files in the icon directory.
pub const SVG_EXTENSION: &str = "svg";

/// Where in the string a [`Rule`] may match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every occurrence.
    All,
    /// Only an occurrence at position 0.
    Leading,
    /// Only an occurrence at the very end.
    Trailing,
}

/// A single rewrite step: any of `chars` is replaced by `replacement`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub chars: &'static [char],
    pub replacement: &'static str,
    pub scope: Scope,
}

impl Rule {
    const fn new(chars: &'static [char], replacement: &'static str, scope: Scope) -> Self {
        Self {
            chars,
            replacement,
            scope,
        }
    }

    /// Applies this rule to `input`, returning the rewritten string.
    pub fn apply(&self, input: &str) -> String {
        match self.scope {
            Scope::All => input.replace(self.chars, self.replacement),
            Scope::Leading => match input.strip_prefix(self.chars) {
                Some(rest) => format!("{}{}", self.replacement, rest),
                None => input.to_owned(),
            },
            Scope::Trailing => match input.strip_suffix(self.chars) {
                Some(rest) => format!("{}{}", rest, self.replacement),
                None => input.to_owned(),
            },
        }
    }
}

/// The ordered rewrite table applied after lower-casing.
///
/// The last rule also drops the ASCII apostrophe so that `"It's"` and
/// `"It’s"` resolve to the same file.
pub const RULES: [Rule; 8] = [
    Rule::new(&['+'], "plus", Scope::All),
    Rule::new(&['.'], "dot-", Scope::Leading),
    Rule::new(&['.'], "-dot", Scope::Trailing),
    Rule::new(&['.'], "-dot-", Scope::All),
    Rule::new(&['&'], "and-", Scope::Leading),
    Rule::new(&['&'], "-and", Scope::Trailing),
    Rule::new(&['&'], "-and-", Scope::All),
    Rule::new(&[' ', '!', '\u{2019}', '\''], "", Scope::All),
];

/// Computes the slug of a title, without file extension.
pub fn slug_stem(title: &str) -> String {
    RULES
        .iter()
        .fold(title.to_lowercase(), |acc, rule| rule.apply(&acc))
}

/// Computes the glyph filename for a title, e.g. `"A & B"` → `"a-and-b.svg"`.
///
/// Never fails. Whether a file by that name exists is the caller's concern.
pub fn slug(title: &str) -> String {
    format!("{}.{}", slug_stem(title), SVG_EXTENSION)
}
