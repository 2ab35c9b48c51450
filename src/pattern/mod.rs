//! A harness around a regular expression engine: compile a pattern with a set
//! of flags, enumerate its matches with capture groups, substitute templates
//! and highlight matched spans.
//!
//! ```rust
//! use toolbench::pattern::{self, Flags};
//! let matcher = pattern::compile("a+", Flags::GLOBAL).unwrap();
//! let matches = matcher.find_all("aaa bb aaaa");
//! assert_eq!(matches.len(), 2);
//! assert_eq!((matches[1].text.as_str(), matches[1].start), ("aaaa", 7));
//! ```
//!
//! Offsets are byte offsets into the subject.

use std::ops::ControlFlow;

use crate::error::CompileError;

pub mod engine;
pub mod flags;
pub mod presets;
pub mod session;
pub mod template;

pub use engine::{Engine, FancyEngine, FancyProgram, Program, RegexEngine, RegexProgram};
pub use flags::{Flags, ParseFlagsError};
pub use presets::{Preset, PRESETS};
pub use session::{Session, SessionOptions, State};
pub use template::Template;

/// Marker inserted before each highlighted match by default.
pub const DEFAULT_OPEN_MARKER: &str = "<mark>";
/// Marker inserted after each highlighted match by default.
pub const DEFAULT_CLOSE_MARKER: &str = "</mark>";

/// A single match of a pattern in a subject.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRecord {
    /// The matched text.
    pub text: String,
    /// Byte offset of the match in the subject.
    pub start: usize,
    /// The capture groups in order, `None` for groups that did not take part
    /// in the match.
    pub groups: Vec<Option<String>>,
}

impl MatchRecord {
    /// Byte offset just past the end of the match.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// A compiled pattern together with the flags it was compiled with.
#[derive(Clone, Debug)]
pub struct Matcher<P = RegexProgram> {
    program: P,
    pattern: String,
    flags: Flags,
}

/// Compile `pattern` with the default engine.
pub fn compile(pattern: &str, flags: Flags) -> Result<Matcher, CompileError> {
    Matcher::compile_with(&RegexEngine::default(), pattern, flags)
}

impl<P: Program> Matcher<P> {
    /// Compile `pattern` with the given engine.
    pub fn compile_with<E>(engine: &E, pattern: &str, flags: Flags) -> Result<Self, CompileError>
    where
        E: Engine<Program = P>,
    {
        let program = engine.compile(pattern, flags).inspect_err(|err| {
            tracing::debug!(pattern, flags = %flags, error = %err.message, "pattern failed to compile");
        })?;

        Ok(Self {
            program,
            pattern: pattern.to_string(),
            flags,
        })
    }

    /// The source of the pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The flags the pattern was compiled with.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// The compiled program.
    pub fn program(&self) -> &P {
        &self.program
    }

    fn scan(&self, subject: &str, mut visit: impl FnMut(MatchRecord)) {
        let global = self.flags.contains(Flags::GLOBAL);
        self.program.scan(subject, &mut |record| {
            visit(record);
            if global {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        });
    }

    /// Every non-overlapping match when the pattern is global, otherwise at
    /// most the first one. Each call scans the subject from the start.
    pub fn find_all(&self, subject: &str) -> Vec<MatchRecord> {
        let mut matches = vec![];
        self.scan(subject, |record| matches.push(record));
        tracing::trace!(pattern = %self.pattern, count = matches.len(), "scanned subject");
        matches
    }

    /// Replace every match (global) or the first match with `template`.
    /// See [`Template`] for the reference syntax.
    pub fn replace(&self, subject: &str, template: &str) -> String {
        let template = Template::parse(template, &self.program);

        let mut out = String::with_capacity(subject.len());
        let mut last = 0;
        self.scan(subject, |record| {
            out.push_str(&subject[last..record.start]);
            template.expand(&record, subject, &mut out);
            last = record.end();
        });
        out.push_str(&subject[last..]);
        out
    }

    /// Wrap each match in `<mark>` and `</mark>`.
    pub fn highlight(&self, subject: &str) -> String {
        self.highlight_with(subject, DEFAULT_OPEN_MARKER, DEFAULT_CLOSE_MARKER)
    }

    /// Wrap each match in the given markers, leaving the rest of the subject
    /// untouched. Empty matches are not marked.
    pub fn highlight_with(&self, subject: &str, open: &str, close: &str) -> String {
        let mut out = String::with_capacity(subject.len());
        let mut last = 0;
        self.scan(subject, |record| {
            if record.text.is_empty() {
                return;
            }
            out.push_str(&subject[last..record.start]);
            out.push_str(open);
            out.push_str(&record.text);
            out.push_str(close);
            last = record.end();
        });
        out.push_str(&subject[last..]);
        out
    }
}

/// Free function form of [`Matcher::find_all`].
pub fn find_all<P: Program>(matcher: &Matcher<P>, subject: &str) -> Vec<MatchRecord> {
    matcher.find_all(subject)
}

/// Free function form of [`Matcher::replace`].
pub fn replace<P: Program>(matcher: &Matcher<P>, subject: &str, template: &str) -> String {
    matcher.replace(subject, template)
}

/// Free function form of [`Matcher::highlight`].
pub fn highlight<P: Program>(matcher: &Matcher<P>, subject: &str) -> String {
    matcher.highlight(subject)
}
