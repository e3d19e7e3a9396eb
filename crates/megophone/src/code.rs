//! Phoneme emission and the finished code pair.

use alloc::string::String;
use core::fmt;

/// What a rule appends to the two codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emission {
    /// Append nothing.
    #[default]
    None,
    /// Append the same fragment to the primary and secondary code.
    Both(&'static str),
    /// Append the first fragment to the primary code and the second to the
    /// secondary code.
    Split(&'static str, &'static str),
}

impl Emission {
    /// The `(primary, secondary)` fragments, or `None` for a silent emission.
    #[must_use]
    pub fn fragments(self) -> Option<(&'static str, &'static str)> {
        match self {
            Emission::None => None,
            Emission::Both(both) => Some((both, both)),
            Emission::Split(primary, secondary) => Some((primary, secondary)),
        }
    }
}

/// The two growing codes of one scan. Append-only.
#[derive(Debug, Default)]
pub(crate) struct CodeBuf {
    primary: String,
    secondary: String,
    events: usize,
}

impl CodeBuf {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The only place the codes are written.
    pub(crate) fn emit(&mut self, emission: Emission) {
        if let Some((primary, secondary)) = emission.fragments() {
            self.primary.push_str(primary);
            self.secondary.push_str(secondary);
            self.events += 1;
        }
    }

    /// Number of non-silent emissions so far. Both codes received exactly
    /// this many fragments.
    pub(crate) fn events(&self) -> usize {
        self.events
    }

    pub(crate) fn finish(self) -> PhoneticCode {
        PhoneticCode {
            primary: self.primary,
            secondary: self.secondary,
        }
    }
}

/// The primary and secondary codes produced for one word.
///
/// The secondary code captures an alternative pronunciation; for most words
/// it equals the primary code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PhoneticCode {
    primary: String,
    secondary: String,
}

impl PhoneticCode {
    /// Builds a code pair from its parts.
    #[must_use]
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// The primary code.
    #[must_use]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// The secondary code.
    #[must_use]
    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    /// Whether both codes are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// Whether the primary and secondary codes differ.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.primary != self.secondary
    }

    /// Whether `self` and `other` share a non-empty code, in either slot.
    #[must_use]
    pub fn shares_code_with(&self, other: &PhoneticCode) -> bool {
        [self.primary(), self.secondary()]
            .into_iter()
            .filter(|code| !code.is_empty())
            .any(|code| code == other.primary() || code == other.secondary())
    }

    /// Consumes the pair, returning `(primary, secondary)`.
    #[must_use]
    pub fn into_pair(self) -> (String, String) {
        (self.primary, self.secondary)
    }

    /// Cuts both codes down to at most `max` characters.
    pub(crate) fn truncate(&mut self, max: usize) {
        truncate_chars(&mut self.primary, max);
        truncate_chars(&mut self.secondary, max);
    }
}

fn truncate_chars(code: &mut String, max: usize) {
    if let Some((idx, _)) = code.char_indices().nth(max) {
        code.truncate(idx);
    }
}

impl From<PhoneticCode> for (String, String) {
    fn from(code: PhoneticCode) -> Self {
        code.into_pair()
    }
}

impl fmt::Display for PhoneticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.primary, self.secondary)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn silent_emission_touches_nothing() {
        let mut buf = CodeBuf::new();
        buf.emit(Emission::None);
        assert_eq!(buf.events(), 0);
        assert!(buf.finish().is_empty());
    }

    #[test]
    fn both_appends_identically() {
        let mut buf = CodeBuf::new();
        buf.emit(Emission::Both("k"));
        buf.emit(Emission::Both("s"));
        assert_eq!(buf.events(), 2);
        assert_eq!(buf.finish(), PhoneticCode::new("ks", "ks"));
    }

    #[test]
    fn split_appends_separately() {
        let mut buf = CodeBuf::new();
        buf.emit(Emission::Split("x", "k"));
        buf.emit(Emission::Both("p"));
        let code = buf.finish();
        assert_eq!(code.primary(), "xp");
        assert_eq!(code.secondary(), "kp");
        assert!(code.is_ambiguous());
    }

    #[test]
    fn truncation_counts_chars() {
        let mut code = PhoneticCode::new("kxsp", "k");
        code.truncate(2);
        assert_eq!(code, PhoneticCode::new("kx", "k"));
    }

    #[test]
    fn sharing_ignores_empty_codes() {
        let empty = PhoneticCode::default();
        assert!(!empty.shares_code_with(&empty));

        let church = PhoneticCode::new("xx", "xk");
        assert!(church.shares_code_with(&PhoneticCode::new("xk", "xk")));
        assert!(!church.shares_code_with(&PhoneticCode::new("k", "k")));
    }

    #[test]
    fn display_and_serde() {
        let code = PhoneticCode::new("s", "x");
        assert_eq!(code.to_string(), "s/x");

        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, r#"{"primary":"s","secondary":"x"}"#);
        let back: PhoneticCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }
}
