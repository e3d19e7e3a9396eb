//! Per-letter decision tables.
//!
//! A [`Rule`] is a pure function from the scan context to a [`Decision`].
//! The scan loop looks the current character up in a [`RuleSet`], applies the
//! decision's emission, then its extra skip, then advances one position.
//! Characters without a rule are silent.

mod c;
mod letters;

use alloc::collections::BTreeMap;

use crate::{code::Emission, context::WordContext, error::ConfigError, lookahead::Lookahead};

/// Signature of a letter rule.
///
/// Rules must not depend on anything but their arguments: the same context
/// must always yield the same decision.
pub type Rule = fn(&Lookahead<'_>, &WordContext) -> Decision;

/// The outcome of one rule: what to emit and how many extra characters the
/// rule consumed beyond the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decision {
    /// Fragments appended to the codes.
    pub emission: Emission,
    /// Characters skipped on top of the one-step advance of the scan loop.
    pub skip: usize,
}

impl Decision {
    /// Emit nothing, consume nothing extra.
    #[must_use]
    pub const fn silent() -> Self {
        Self {
            emission: Emission::None,
            skip: 0,
        }
    }

    /// Emit `fragment` to both codes.
    #[must_use]
    pub const fn both(fragment: &'static str) -> Self {
        Self {
            emission: Emission::Both(fragment),
            skip: 0,
        }
    }

    /// Emit `primary` and `secondary` to their respective codes.
    #[must_use]
    pub const fn split(primary: &'static str, secondary: &'static str) -> Self {
        Self {
            emission: Emission::Split(primary, secondary),
            skip: 0,
        }
    }

    /// Additionally consume `skip` characters.
    #[must_use]
    pub const fn skipping(self, skip: usize) -> Self {
        Self { skip, ..self }
    }
}

/// A mapping from characters to their [`Rule`].
///
/// ```rust
/// use megophone::{Decision, DoubleMetaphone, Lookahead, RuleSet, WordContext};
///
/// fn d(_: &Lookahead<'_>, _: &WordContext) -> Decision {
///     Decision::both("t")
/// }
///
/// let mut rules = RuleSet::default();
/// rules.try_insert('d', d).unwrap();
/// let encoder = DoubleMetaphone::new().with_rules(rules);
/// assert_eq!(encoder.encode("bad").primary(), "pt");
/// ```
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: BTreeMap<char, Rule>,
}

impl RuleSet {
    /// A rule set with no rules: every character is silent.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Binds `rule` to `ch`, returning the rule it replaced.
    pub fn insert(&mut self, ch: char, rule: Rule) -> Option<Rule> {
        self.rules.insert(ch, rule)
    }

    /// Binds `rule` to `ch` unless `ch` already has a rule.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateRule`] if `ch` is already bound; the
    /// existing rule is kept.
    pub fn try_insert(&mut self, ch: char, rule: Rule) -> Result<(), ConfigError> {
        if self.rules.contains_key(&ch) {
            return Err(ConfigError::DuplicateRule(ch));
        }
        self.rules.insert(ch, rule);
        Ok(())
    }

    /// Unbinds `ch`, making it silent.
    pub fn remove(&mut self, ch: char) -> Option<Rule> {
        self.rules.remove(&ch)
    }

    /// The rule bound to `ch`.
    #[must_use]
    pub fn get(&self, ch: char) -> Option<Rule> {
        self.rules.get(&ch).copied()
    }

    /// Whether `ch` has a rule.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.rules.contains_key(&ch)
    }

    /// Number of characters with a rule.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no character has a rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    /// The built-in table: vowels, `b`, `ç` and `c`.
    fn default() -> Self {
        let mut rules = Self::empty();
        for vowel in ['a', 'e', 'i', 'o', 'u', 'y'] {
            rules.insert(vowel, letters::vowel);
        }
        rules.insert('b', letters::b);
        rules.insert('ç', letters::c_cedilla);
        rules.insert('c', c::c);
        rules
    }
}
