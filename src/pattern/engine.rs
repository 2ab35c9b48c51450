//! The seam between the harness and the regular expression engine.

use std::ops::ControlFlow;

use regex::{Regex, RegexBuilder};

use crate::error::CompileError;
use crate::pattern::{Flags, MatchRecord};

/// Compiles patterns into [`Program`]s.
pub trait Engine {
    /// The compiled form of a pattern.
    type Program: Program;

    /// Compile `pattern` with `flags`. The [`Flags::GLOBAL`] flag is handled
    /// by the harness and can be ignored by engines.
    fn compile(&self, pattern: &str, flags: Flags) -> Result<Self::Program, CompileError>;
}

/// A compiled pattern.
pub trait Program {
    /// Visit every non-overlapping match in `subject` from left to right,
    /// stopping early when `visit` breaks.
    fn scan(&self, subject: &str, visit: &mut dyn FnMut(MatchRecord) -> ControlFlow<()>);

    /// The number of capture groups, not counting the whole match.
    fn group_count(&self) -> usize;

    /// The 1-based number of the capture group with the given name.
    fn group_number(&self, name: &str) -> Option<usize>;

    /// Whether any capture group has a name.
    fn has_named_groups(&self) -> bool;
}

/// [`Engine`] backed by the `regex` crate.
///
/// The syntax has no look-around or back-references, which also means every
/// pattern runs in linear time. Use [`FancyEngine`] for those.
#[derive(Clone, Debug)]
pub struct RegexEngine {
    /// Upper bound in bytes on the size of a compiled program.
    pub size_limit: usize,
}

impl Default for RegexEngine {
    fn default() -> Self {
        Self {
            size_limit: 10 * (1 << 20),
        }
    }
}

impl Engine for RegexEngine {
    type Program = RegexProgram;

    fn compile(&self, pattern: &str, flags: Flags) -> Result<RegexProgram, CompileError> {
        RegexBuilder::new(pattern)
            .case_insensitive(flags.contains(Flags::IGNORE_CASE))
            .multi_line(flags.contains(Flags::MULTILINE))
            .dot_matches_new_line(flags.contains(Flags::DOT_ALL))
            .size_limit(self.size_limit)
            .build()
            .map(|regex| RegexProgram { regex })
            .map_err(|err| CompileError {
                pattern: pattern.to_string(),
                message: err.to_string(),
            })
    }
}

/// A pattern compiled by [`RegexEngine`].
#[derive(Clone, Debug)]
pub struct RegexProgram {
    regex: Regex,
}

impl Program for RegexProgram {
    fn scan(&self, subject: &str, visit: &mut dyn FnMut(MatchRecord) -> ControlFlow<()>) {
        for captures in self.regex.captures_iter(subject) {
            let Some(whole) = captures.get(0) else {
                continue;
            };

            let record = MatchRecord {
                text: whole.as_str().to_string(),
                start: whole.start(),
                groups: captures
                    .iter()
                    .skip(1)
                    .map(|group| group.map(|g| g.as_str().to_string()))
                    .collect(),
            };

            if visit(record).is_break() {
                break;
            }
        }
    }

    fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    fn group_number(&self, name: &str) -> Option<usize> {
        self.regex
            .capture_names()
            .position(|group| group == Some(name))
    }

    fn has_named_groups(&self) -> bool {
        self.regex.capture_names().any(|group| group.is_some())
    }
}

/// [`Engine`] backed by the `fancy-regex` crate.
///
/// Adds look-around and back-references on top of the `regex` syntax by
/// backtracking, so a pathological pattern can stop early once
/// `backtrack_limit` is exhausted. A scan that hits the limit ends without
/// the remaining matches.
#[derive(Clone, Debug)]
pub struct FancyEngine {
    /// Upper bound on backtracking steps for a single match attempt.
    pub backtrack_limit: usize,
}

impl Default for FancyEngine {
    fn default() -> Self {
        Self {
            backtrack_limit: 1_000_000,
        }
    }
}

impl Engine for FancyEngine {
    type Program = FancyProgram;

    fn compile(&self, pattern: &str, flags: Flags) -> Result<FancyProgram, CompileError> {
        let mut inline = String::new();
        if flags.contains(Flags::IGNORE_CASE) {
            inline.push('i');
        }
        if flags.contains(Flags::MULTILINE) {
            inline.push('m');
        }
        if flags.contains(Flags::DOT_ALL) {
            inline.push('s');
        }
        let source = if inline.is_empty() {
            pattern.to_string()
        } else {
            format!("(?{inline}){pattern}")
        };

        fancy_regex::RegexBuilder::new(&source)
            .backtrack_limit(self.backtrack_limit)
            .build()
            .map(|regex| FancyProgram { regex })
            .map_err(|err| CompileError {
                pattern: pattern.to_string(),
                message: err.to_string(),
            })
    }
}

/// A pattern compiled by [`FancyEngine`].
#[derive(Clone, Debug)]
pub struct FancyProgram {
    regex: fancy_regex::Regex,
}

impl Program for FancyProgram {
    fn scan(&self, subject: &str, visit: &mut dyn FnMut(MatchRecord) -> ControlFlow<()>) {
        for captures in self.regex.captures_iter(subject) {
            let captures = match captures {
                Ok(captures) => captures,
                Err(err) => {
                    tracing::debug!(error = %err, "scan stopped early");
                    break;
                }
            };
            let Some(whole) = captures.get(0) else {
                continue;
            };

            let record = MatchRecord {
                text: whole.as_str().to_string(),
                start: whole.start(),
                groups: (1..captures.len())
                    .map(|i| captures.get(i).map(|g| g.as_str().to_string()))
                    .collect(),
            };

            if visit(record).is_break() {
                break;
            }
        }
    }

    fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    fn group_number(&self, name: &str) -> Option<usize> {
        self.regex
            .capture_names()
            .position(|group| group == Some(name))
    }

    fn has_named_groups(&self) -> bool {
        self.regex.capture_names().any(|group| group.is_some())
    }
}
