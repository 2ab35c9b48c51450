//! Convert text between letter cases and identifier styles.

use std::fmt;

use convert_case::{Case, Casing};

/// The supported conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextCase {
    /// Every letter uppercase, everything else untouched.
    Upper,
    /// Every letter lowercase, everything else untouched.
    Lower,
    /// The first letter of each whitespace separated word uppercase and the
    /// rest of the word lowercase.
    Title,
    /// The first character uppercase and the rest lowercase.
    Sentence,
    /// `camelCase`
    Camel,
    /// `PascalCase`
    Pascal,
    /// `kebab-case`
    Kebab,
    /// `snake_case`
    Snake,
}

impl TextCase {
    /// Every conversion, in display order.
    pub const ALL: [TextCase; 8] = [
        TextCase::Upper,
        TextCase::Lower,
        TextCase::Title,
        TextCase::Sentence,
        TextCase::Camel,
        TextCase::Pascal,
        TextCase::Kebab,
        TextCase::Snake,
    ];

    /// The name of the conversion, written in its own style.
    pub fn name(&self) -> &'static str {
        match self {
            TextCase::Upper => "UPPERCASE",
            TextCase::Lower => "lowercase",
            TextCase::Title => "Title Case",
            TextCase::Sentence => "Sentence case",
            TextCase::Camel => "camelCase",
            TextCase::Pascal => "PascalCase",
            TextCase::Kebab => "kebab-case",
            TextCase::Snake => "snake_case",
        }
    }

    /// Convert `text`. The identifier styles split words on whitespace,
    /// `-`, `_` and lower to upper case changes.
    pub fn convert(&self, text: &str) -> String {
        match self {
            TextCase::Upper => text.to_uppercase(),
            TextCase::Lower => text.to_lowercase(),
            TextCase::Title => title(text),
            TextCase::Sentence => sentence(text),
            TextCase::Camel => text.to_case(Case::Camel),
            TextCase::Pascal => text.to_case(Case::Pascal),
            TextCase::Kebab => text.to_case(Case::Kebab),
            TextCase::Snake => text.to_case(Case::Snake),
        }
    }
}

impl fmt::Display for TextCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn title(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_whitespace() {
            in_word = false;
            out.push(c);
        } else if in_word {
            out.extend(c.to_lowercase());
        } else if c.is_alphanumeric() || c == '_' {
            in_word = true;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn sentence(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// Free function form of [`TextCase::convert`].
pub fn to_case(text: &str, case: TextCase) -> String {
    case.convert(text)
}
