//! Naming strategies and the candidate name builder
//!
//! A strategy derives one candidate name for an item at one escalation level.
//! Strategies are pure: the same item always yields the same candidate, and
//! an item a strategy does not apply to yields `None` and is carried to the
//! next round untouched.

use crate::error::{NamingError, NamingResult};

/// One escalation level of a naming scheme
pub trait NamingStrategy<I: ?Sized> {
    /// Short label used in logs
    fn label(&self) -> &'static str;

    /// Candidate name for `item`, or `None` if this level does not apply
    fn candidate(&self, item: &I) -> Option<String>;
}

/// Build the level-0 test method name: `prefix` + capitalized `seed`.
///
/// # Examples
/// ```
/// use testgen_naming::strategy::test_method_base;
///
/// assert_eq!(test_method_base("test", "add"), "testAdd");
/// assert_eq!(test_method_base("test", "getURL"), "testGetURL");
/// ```
pub fn test_method_base(prefix: &str, seed: &str) -> String {
    let mut name = String::with_capacity(prefix.len() + seed.len());
    name.push_str(prefix);
    name.push_str(&capitalize(seed));
    name
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether `s` is a legal Java identifier (keywords are not checked)
pub fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
        _ => false,
    }
}

pub(crate) fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

pub(crate) fn is_identifier_part(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

/// Check that the seed at `ordinal` can be turned into a method name
pub fn validate_seed(seed: &str, ordinal: usize) -> NamingResult<()> {
    if seed.is_empty() {
        return Err(NamingError::invalid_seed(ordinal, "seed is empty"));
    }
    if !is_java_identifier(seed) {
        return Err(NamingError::invalid_seed(
            ordinal,
            format!("'{}' is not a valid identifier", seed),
        ));
    }
    Ok(())
}
