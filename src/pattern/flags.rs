//! Flags controlling how a pattern is compiled and matched.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use thiserror::Error;

bitflags! {
    /// Options for a pattern, written with the usual single letter names
    /// (`g`, `i`, `m`, `s`).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Flags : u8 {
        /// Find every non-overlapping match instead of only the first.
        const GLOBAL = 1 << 0;
        /// Match letters regardless of case.
        const IGNORE_CASE = 1 << 1;
        /// `^` and `$` match at line boundaries.
        const MULTILINE = 1 << 2;
        /// `.` also matches line terminators.
        const DOT_ALL = 1 << 3;
    }
}

const LETTERS: [(char, Flags); 4] = [
    ('g', Flags::GLOBAL),
    ('i', Flags::IGNORE_CASE),
    ('m', Flags::MULTILINE),
    ('s', Flags::DOT_ALL),
];

/// Error returned for an unknown or repeated flag letter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid pattern flag {0:?}")]
pub struct ParseFlagsError(pub char);

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, flag) in LETTERS {
            if self.contains(flag) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Flags {
    type Err = ParseFlagsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::empty();
        for c in s.chars() {
            let flag = LETTERS
                .iter()
                .find(|(letter, _)| *letter == c)
                .map(|(_, flag)| *flag)
                .ok_or(ParseFlagsError(c))?;
            if flags.contains(flag) {
                return Err(ParseFlagsError(c));
            }
            flags |= flag;
        }
        Ok(flags)
    }
}
