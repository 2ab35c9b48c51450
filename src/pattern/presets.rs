//! Commonly used patterns.

/// A named pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    /// Display name.
    pub name: &'static str,
    /// Pattern source.
    pub pattern: &'static str,
    /// The pattern uses look-around or back-references and only compiles
    /// with [`FancyEngine`](crate::pattern::FancyEngine).
    pub backtracking: bool,
}

macro_rules! presets {
    (@backtracking) => { false };
    (@backtracking backtracking) => { true };
    ($($name:literal => $pattern:literal $(($flag:ident))?,)*) => {
        /// The built in presets.
        pub const PRESETS: &[Preset] = &[
            $(Preset {
                name: $name,
                pattern: $pattern,
                backtracking: presets!(@backtracking $($flag)?),
            },)*
        ];
    };
}

presets! {
    "Email" => r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
    "Phone (US)" => r"\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})",
    "URL" => r"https?://[\w\-]+(\.[\w\-]+)+([\w\-.,@?^=%&:/~+#]*[\w\-@?^=%&/~+#])?",
    "IP Address" => r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b",
    "Date (MM/DD/YYYY)" => r"(0[1-9]|1[012])/(0[1-9]|[12][0-9]|3[01])/(19|20)\d\d",
    "Credit Card" => r"\b(?:\d{4}[-\s]?){3}\d{4}\b",
    "Hex Color" => r"#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})",
    "Username" => r"^[a-zA-Z0-9_]{3,16}$",
    "HTML Tags" => r"<[^>]*>",
    "Password (Strong)" => r"^(?=.*[a-z])(?=.*[A-Z])(?=.*\d)(?=.*[@$!%*?&])[A-Za-z\d@$!%*?&]{8,}$" (backtracking),
}

/// Look up a preset by name, ignoring ASCII case.
pub fn preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{compile, FancyEngine, Flags, Matcher};

    fn texts(name: &str, subject: &str) -> Vec<String> {
        let preset = preset(name).unwrap();
        let flags = Flags::GLOBAL | Flags::MULTILINE;
        let matches = if preset.backtracking {
            Matcher::compile_with(&FancyEngine::default(), preset.pattern, flags)
                .unwrap()
                .find_all(subject)
        } else {
            compile(preset.pattern, flags).unwrap().find_all(subject)
        };
        matches.into_iter().map(|m| m.text).collect()
    }

    #[test]
    fn all_compile() {
        for preset in PRESETS {
            let fancy = Matcher::compile_with(&FancyEngine::default(), preset.pattern, Flags::GLOBAL);
            assert!(fancy.is_ok(), "{} does not compile", preset.name);
            assert_eq!(
                compile(preset.pattern, Flags::GLOBAL).is_ok(),
                !preset.backtracking,
                "{}",
                preset.name
            );
        }
    }

    #[test]
    fn strong_password() {
        assert_eq!(
            texts("Password (Strong)", "weakpass\nStr0ng!pass\nNoDigits!!"),
            vec!["Str0ng!pass"]
        );
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(preset("email").map(|p| p.name), Some("Email"));
        assert!(preset("nope").is_none());
    }

    #[test]
    fn samples() {
        assert_eq!(
            texts("Email", "mail a.b@example.com or x@y"),
            vec!["a.b@example.com"]
        );
        assert_eq!(
            texts("Phone (US)", "call (555) 123-4567 now"),
            vec!["(555) 123-4567"]
        );
        assert_eq!(
            texts("URL", "see https://example.com/a?b=1 ok"),
            vec!["https://example.com/a?b=1"]
        );
        assert_eq!(
            texts("IP Address", "from 192.168.0.1 to 10.0.0.255"),
            vec!["192.168.0.1", "10.0.0.255"]
        );
        assert_eq!(texts("Date (MM/DD/YYYY)", "on 12/31/1999"), vec!["12/31/1999"]);
        assert_eq!(
            texts("Credit Card", "card 1234-5678-9012-3456"),
            vec!["1234-5678-9012-3456"]
        );
        assert_eq!(texts("Hex Color", "#FFF and #3b82f6"), vec!["#FFF", "#3b82f6"]);
        assert_eq!(texts("Username", "ab\nuser_01\nx"), vec!["user_01"]);
        assert_eq!(texts("HTML Tags", "<p>hi</p>"), vec!["<p>", "</p>"]);
    }
}
