//! A pattern, its flags and a subject, kept in sync as any of them change.

use crate::error::CompileError;
use crate::pattern::{
    Engine, Flags, MatchRecord, Matcher, RegexEngine, DEFAULT_CLOSE_MARKER, DEFAULT_OPEN_MARKER,
};

/// Options for a [`Session`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionOptions {
    /// Inserted before each match by [`Session::highlight`].
    pub open_marker: String,
    /// Inserted after each match by [`Session::highlight`].
    pub close_marker: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            open_marker: DEFAULT_OPEN_MARKER.to_string(),
            close_marker: DEFAULT_CLOSE_MARKER.to_string(),
        }
    }
}

/// The result of the last compilation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// The pattern compiled; `matches` reflects the current subject.
    Valid {
        /// Matches of the pattern in the subject.
        matches: Vec<MatchRecord>,
    },
    /// The pattern failed to compile.
    Invalid {
        /// The diagnostic from the engine.
        error: CompileError,
    },
}

/// An editable pattern/flags/subject triple. Every edit recomputes the state
/// before returning, so the matches never belong to an earlier pattern.
///
/// An empty pattern is valid and has no matches.
pub struct Session<E: Engine = RegexEngine> {
    engine: E,
    options: SessionOptions,
    pattern: String,
    flags: Flags,
    subject: String,
    matcher: Option<Matcher<E::Program>>,
    state: State,
}

impl Session {
    /// Create a session using the default engine.
    pub fn new(pattern: impl Into<String>, flags: Flags, subject: impl Into<String>) -> Self {
        Self::with_engine(RegexEngine::default(), SessionOptions::default(), pattern, flags, subject)
    }
}

impl<E: Engine> Session<E> {
    /// Create a session with a custom engine and options.
    pub fn with_engine(
        engine: E,
        options: SessionOptions,
        pattern: impl Into<String>,
        flags: Flags,
        subject: impl Into<String>,
    ) -> Self {
        let mut session = Self {
            engine,
            options,
            pattern: pattern.into(),
            flags,
            subject: subject.into(),
            matcher: None,
            state: State::Valid { matches: vec![] },
        };
        session.recompile();
        session
    }

    fn recompile(&mut self) {
        self.matcher = None;

        if self.pattern.is_empty() {
            self.state = State::Valid { matches: vec![] };
            return;
        }

        match Matcher::compile_with(&self.engine, &self.pattern, self.flags) {
            Ok(matcher) => {
                self.matcher = Some(matcher);
                self.rescan();
            }
            Err(error) => {
                tracing::debug!(pattern = %self.pattern, flags = %self.flags, "session is invalid");
                self.state = State::Invalid { error };
            }
        }
    }

    fn rescan(&mut self) {
        if let Some(matcher) = &self.matcher {
            let matches = matcher.find_all(&self.subject);
            tracing::debug!(pattern = %self.pattern, count = matches.len(), "session matched");
            self.state = State::Valid { matches };
        }
    }

    /// Replace the pattern and recompile.
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
        self.recompile();
    }

    /// Replace the flags and recompile.
    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
        self.recompile();
    }

    /// Flip a single flag and recompile.
    pub fn toggle_flag(&mut self, flag: Flags) {
        self.flags.toggle(flag);
        self.recompile();
    }

    /// Replace the subject and rescan. Never changes whether the session is
    /// valid.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
        self.rescan();
    }

    /// The current pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The current flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// The current subject.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The current options.
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// The current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Whether the pattern compiled.
    pub fn is_valid(&self) -> bool {
        matches!(self.state, State::Valid { .. })
    }

    /// Matches in the subject, empty when the pattern is invalid.
    pub fn matches(&self) -> &[MatchRecord] {
        match &self.state {
            State::Valid { matches } => matches,
            State::Invalid { .. } => &[],
        }
    }

    /// The compile error, if the pattern is invalid.
    pub fn error(&self) -> Option<&CompileError> {
        match &self.state {
            State::Valid { .. } => None,
            State::Invalid { error } => Some(error),
        }
    }

    /// The subject with matches substituted by `template`, or `None` when
    /// the pattern is invalid. An empty pattern leaves the subject as is.
    pub fn replace(&self, template: &str) -> Option<String> {
        if !self.is_valid() {
            return None;
        }
        Some(match &self.matcher {
            Some(matcher) => matcher.replace(&self.subject, template),
            None => self.subject.clone(),
        })
    }

    /// The subject with matches wrapped in the session markers, or `None`
    /// when the pattern is invalid.
    pub fn highlight(&self) -> Option<String> {
        if !self.is_valid() {
            return None;
        }
        Some(match &self.matcher {
            Some(matcher) => matcher.highlight_with(
                &self.subject,
                &self.options.open_marker,
                &self.options.close_marker,
            ),
            None => self.subject.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::FancyEngine;

    #[test]
    fn invalid_pattern_has_no_matches() {
        let session = Session::new("(", Flags::GLOBAL, "((( text");
        assert!(!session.is_valid());
        assert!(session.matches().is_empty());
        assert_eq!(session.error().map(|e| e.pattern.as_str()), Some("("));
        assert_eq!(session.replace("x"), None);
        assert_eq!(session.highlight(), None);
    }

    #[test]
    fn pattern_edits_move_between_states() {
        let mut session = Session::new("a+", Flags::GLOBAL, "aaa bb aaaa");
        assert_eq!(session.matches().len(), 2);

        session.set_pattern("a+(");
        assert!(matches!(session.state(), State::Invalid { .. }));
        assert!(session.matches().is_empty());

        session.set_pattern("b+");
        assert!(session.is_valid());
        assert_eq!(session.matches().len(), 1);
        assert_eq!(session.matches()[0].start, 4);
    }

    #[test]
    fn subject_edits_keep_invalid_state() {
        let mut session = Session::new("[", Flags::empty(), "");
        session.set_subject("[[[");
        assert!(!session.is_valid());
        assert!(session.matches().is_empty());
    }

    #[test]
    fn subject_edits_rescan() {
        let mut session = Session::new(r"\d+", Flags::GLOBAL, "1 22");
        assert_eq!(session.matches().len(), 2);
        session.set_subject("1 22 333");
        assert_eq!(session.matches().len(), 3);
    }

    #[test]
    fn toggling_global() {
        let mut session = Session::new("cat", Flags::empty(), "cat cat cat");
        assert_eq!(session.matches().len(), 1);
        session.toggle_flag(Flags::GLOBAL);
        assert_eq!(session.matches().len(), 3);
        session.set_flags(Flags::IGNORE_CASE);
        assert_eq!(session.flags(), Flags::IGNORE_CASE);
        assert_eq!(session.matches().len(), 1);
    }

    #[test]
    fn empty_pattern() {
        let session = Session::new("", Flags::GLOBAL, "abc");
        assert!(session.is_valid());
        assert!(session.matches().is_empty());
        assert_eq!(session.replace("-").as_deref(), Some("abc"));
        assert_eq!(session.highlight().as_deref(), Some("abc"));
    }

    #[test]
    fn replace_and_highlight() {
        let session = Session::with_engine(
            RegexEngine::default(),
            SessionOptions {
                open_marker: "**".to_string(),
                close_marker: "**".to_string(),
            },
            r"(\w+)@(\w+)",
            Flags::GLOBAL,
            "a@b c@d",
        );
        assert_eq!(session.replace("$2-$1").as_deref(), Some("b-a d-c"));
        assert_eq!(session.highlight().as_deref(), Some("**a@b** **c@d**"));
    }

    #[test]
    fn backtracking_engine() {
        let mut session = Session::with_engine(
            FancyEngine::default(),
            SessionOptions::default(),
            r"(\w)\1",
            Flags::GLOBAL,
            "book keeper",
        );
        assert_eq!(session.matches().len(), 2);
        assert_eq!(session.highlight().as_deref(), Some("b<mark>oo</mark>k k<mark>ee</mark>per"));

        session.set_pattern(r"\w+(?= keeper)");
        assert_eq!(session.replace("[$&]").as_deref(), Some("[book] keeper"));

        session.set_pattern("(?=");
        assert!(!session.is_valid());
    }
}
