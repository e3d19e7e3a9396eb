use crate::error::ConfigError;

/// Configuration options for [`DoubleMetaphone`](crate::DoubleMetaphone).
///
/// # Examples
///
/// ```rust
/// use megophone::{DoubleMetaphone, EncoderOptions};
///
/// let encoder = DoubleMetaphone::with_options(EncoderOptions {
///     max_code_length: Some(1),
/// })
/// .unwrap();
/// assert_eq!(encoder.encode("bach").primary(), "p");
/// ```
///
/// # Default
///
/// Codes are unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncoderOptions {
    /// Maximum number of characters kept in each code.
    ///
    /// When set, the primary and secondary codes are each truncated to this
    /// many characters once the scan has finished. Traditional phonetic keys
    /// use 4; this encoder keeps everything unless asked otherwise.
    ///
    /// # Default
    ///
    /// `None`
    pub max_code_length: Option<usize>,
}

impl EncoderOptions {
    /// Checks that the options describe a usable encoder.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMaxCodeLength`] when `max_code_length` is
    /// `Some(0)`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.max_code_length {
            Some(0) => Err(ConfigError::ZeroMaxCodeLength),
            _ => Ok(()),
        }
    }
}
