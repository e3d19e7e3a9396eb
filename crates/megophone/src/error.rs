use thiserror::Error;

/// Errors raised while configuring an encoder.
///
/// Encoding itself cannot fail; only building an encoder from invalid
/// options or conflicting rules can.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A rule is already bound to this character.
    #[error("a rule is already registered for '{0}'")]
    DuplicateRule(char),
    /// `max_code_length` was set to zero, which would discard every code.
    #[error("max_code_length must be at least 1")]
    ZeroMaxCodeLength,
}
