use crate::{
    code::PhoneticCode,
    error::ConfigError,
    options::EncoderOptions,
    rules::RuleSet,
    scanner::ScanState,
    text::PaddedText,
    trace::debug,
};

/// A reusable phonetic encoder.
///
/// Holds the rule table and options; each call to [`encode`](Self::encode)
/// runs an independent scan, so an encoder can be shared freely across
/// threads.
///
/// # Examples
///
/// ```rust
/// use megophone::DoubleMetaphone;
///
/// let encoder = DoubleMetaphone::new();
/// let code = encoder.encode("church");
/// assert_eq!(code.primary(), "xx");
/// assert_eq!(code.secondary(), "xk");
///
/// assert!(encoder.is_match("bach", "bacher"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DoubleMetaphone {
    rules: RuleSet,
    options: EncoderOptions,
}

impl DoubleMetaphone {
    /// An encoder with the built-in rules and unbounded codes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An encoder with the built-in rules and the given options.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` fail [`EncoderOptions::validate`].
    pub fn with_options(options: EncoderOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self {
            rules: RuleSet::default(),
            options,
        })
    }

    /// Replaces the rule table.
    #[must_use]
    pub fn with_rules(self, rules: RuleSet) -> Self {
        Self { rules, ..self }
    }

    /// The rule table in use.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The options in use.
    #[must_use]
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Encodes `word`.
    #[must_use]
    pub fn encode(&self, word: &str) -> PhoneticCode {
        self.encode_text(PaddedText::new(word))
    }

    /// Encodes a word given as bytes. Invalid UTF-8 sequences are replaced
    /// by U+FFFD, which no built-in rule handles.
    #[must_use]
    pub fn encode_bytes(&self, word: &[u8]) -> PhoneticCode {
        self.encode_text(PaddedText::from_bytes(word))
    }

    /// Whether `a` and `b` share a non-empty primary or secondary code.
    #[must_use]
    pub fn is_match(&self, a: &str, b: &str) -> bool {
        self.encode(a).shares_code_with(&self.encode(b))
    }

    fn encode_text(&self, text: PaddedText) -> PhoneticCode {
        let mut state = ScanState::new(text);
        state.run(&self.rules);
        let mut code = state.finish();
        if let Some(max) = self.options.max_code_length {
            code.truncate(max);
        }
        debug!(%code, "encoded");
        code
    }
}
