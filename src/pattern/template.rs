//! Replacement templates with `$` references to the match.
//!
//! | text      | inserts                                   |
//! |-----------|-------------------------------------------|
//! | `$$`      | a literal `$`                             |
//! | `$&`      | the whole match                           |
//! | `` $` ``  | the subject before the match              |
//! | `$'`      | the subject after the match               |
//! | `$n`      | capture group `n` (1-99)                  |
//! | `$<name>` | the named capture group                   |
//!
//! A two digit reference is only used when that group exists, otherwise the
//! second digit is literal text. Numbered references to groups the pattern
//! does not have are kept as literal text. `$<name>` for a missing name
//! inserts nothing when the pattern has named groups and is literal text when
//! it has none. Groups that did not take part in the match insert nothing.

use crate::pattern::{engine::Program, MatchRecord};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Whole,
    Before,
    After,
    Group(usize),
}

/// A replacement template parsed against a compiled pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    /// Parse `template`, resolving group references against `program`.
    pub fn parse(template: &str, program: &dyn Program) -> Self {
        let group_count = program.group_count();
        let mut pieces = vec![];
        let mut literal = String::new();

        let mut rest = template;
        while let Some(dollar) = rest.find('$') {
            literal.push_str(&rest[..dollar]);
            let after = &rest[dollar + 1..];

            let (piece, consumed) = match after.as_bytes() {
                [b'$', ..] => (Some(Piece::Literal("$".to_string())), 1),
                [b'&', ..] => (Some(Piece::Whole), 1),
                [b'`', ..] => (Some(Piece::Before), 1),
                [b'\'', ..] => (Some(Piece::After), 1),
                [b'<', ..] => match after.find('>') {
                    Some(close) => match program.group_number(&after[1..close]) {
                        Some(number) => (Some(Piece::Group(number)), close + 1),
                        None if program.has_named_groups() => {
                            (Some(Piece::Literal(String::new())), close + 1)
                        }
                        None => (None, 0),
                    },
                    None => (None, 0),
                },
                [first @ b'0'..=b'9', rest_digits @ ..] => {
                    let one = (first - b'0') as usize;
                    let two = match rest_digits.first() {
                        Some(second @ b'0'..=b'9') => Some(one * 10 + (second - b'0') as usize),
                        _ => None,
                    };

                    let exists = |number: usize| (1..=group_count).contains(&number);
                    match two {
                        Some(two) if exists(two) => (Some(Piece::Group(two)), 2),
                        _ if exists(one) => (Some(Piece::Group(one)), 1),
                        _ => (None, 0),
                    }
                }
                _ => (None, 0),
            };

            match piece {
                Some(Piece::Literal(text)) => literal.push_str(&text),
                Some(piece) => {
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(piece);
                }
                None => literal.push('$'),
            }

            rest = &after[consumed..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Self { pieces }
    }

    /// Append the expansion of this template for `record` to `out`.
    pub fn expand(&self, record: &MatchRecord, subject: &str, out: &mut String) {
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Whole => out.push_str(&record.text),
                Piece::Before => out.push_str(&subject[..record.start]),
                Piece::After => out.push_str(&subject[record.end()..]),
                Piece::Group(number) => {
                    if let Some(Some(group)) = record.groups.get(number - 1) {
                        out.push_str(group);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{engine::Engine, Flags, RegexEngine};

    fn expand(pattern: &str, template: &str, record: MatchRecord, subject: &str) -> String {
        let program = RegexEngine::default()
            .compile(pattern, Flags::empty())
            .unwrap();
        let mut out = String::new();
        Template::parse(template, &program).expand(&record, subject, &mut out);
        out
    }

    fn record(text: &str, start: usize, groups: &[Option<&str>]) -> MatchRecord {
        MatchRecord {
            text: text.to_string(),
            start,
            groups: groups.iter().map(|g| g.map(str::to_string)).collect(),
        }
    }

    #[test]
    fn numbered_groups() {
        let r = record("a@b", 0, &[Some("a"), Some("b")]);
        assert_eq!(expand(r"(\w+)@(\w+)", "$2-$1", r, "a@b"), "b-a");
    }

    #[test]
    fn special_references() {
        let r = record("b", 2, &[]);
        assert_eq!(expand("b", "[$&|$`|$'|$$]", r, "a b c"), "[b|a | c|$]");
    }

    #[test]
    fn unmatched_group_is_empty() {
        let r = record("b", 0, &[None, Some("b")]);
        assert_eq!(expand("(a)|(b)", "<$1><$2>", r, "b"), "<><b>");
    }

    #[test]
    fn two_digit_references_fall_back_to_one_digit() {
        let r = record("x", 0, &[Some("x")]);
        assert_eq!(expand("(x)", "$10", r, "x"), "x0");
    }

    #[test]
    fn unknown_references_stay_literal() {
        let r = record("x", 0, &[Some("x")]);
        assert_eq!(expand("(x)", "$0 $2 $ $<name> $<", r, "x"), "$0 $2 $ $<name> $<");
    }

    #[test]
    fn named_groups() {
        let r = record("me@host", 0, &[Some("me"), Some("host")]);
        assert_eq!(
            expand(r"(?P<user>\w+)@(?P<host>\w+)", "$<host>:$<user>", r, "me@host"),
            "host:me"
        );
    }

    #[test]
    fn missing_named_group() {
        let r = record("x", 0, &[Some("x")]);
        assert_eq!(expand("(?P<a>x)", "[$<b>]", r.clone(), "x"), "[]");
        assert_eq!(expand("(?P<a>x)", "[$<a>$<b]", r.clone(), "x"), "[x$<b]");
        assert_eq!(expand("(x)", "[$<b>]", r, "x"), "[$<b>]");
    }

    #[test]
    fn multibyte_literals() {
        let r = record("x", 0, &[Some("x")]);
        assert_eq!(expand("(x)", "é$1ü€", r, "x"), "éxü€");
    }
}
