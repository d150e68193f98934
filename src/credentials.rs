//! Credential table: which profiles are gated by a PIN, and the PIN check.
//!
//! The table is read-only once built. A profile name that is not a key in the
//! table never requires a PIN.

use std::collections::HashMap;

/// Message shown inline when a submitted PIN does not match.
pub const PIN_MISMATCH_MESSAGE: &str = "Incorrect PIN. Please try again.";

/// Profiles and PINs the application ships with, in selector order.
pub const BUILTIN_PROFILES: [(&str, &str); 5] = [
    ("MKA", "1234"),
    ("B", "5678"),
    ("C", "9101"),
    ("D", "1121"),
    ("E", "3141"),
];

/// Result of checking an entered PIN against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinCheck {
    /// The profile has a PIN and the entered text matches it exactly.
    Match,
    /// The profile has a PIN and the entered text differs.
    Mismatch,
    /// The profile has no entry in the table.
    NotRequired,
}

/// Mapping from profile name to the PIN that unlocks it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialTable {
    pins: HashMap<String, String>,
}

impl CredentialTable {
    /// Create an empty table (no profile requires a PIN).
    pub fn new() -> Self {
        Self::default()
    }

    /// The table the application ships with when no configuration exists.
    pub fn builtin() -> Self {
        BUILTIN_PROFILES.into_iter().collect()
    }

    /// Add or replace the PIN for a profile.
    pub fn with_pin(mut self, profile: impl Into<String>, pin: impl Into<String>) -> Self {
        self.pins.insert(profile.into(), pin.into());
        self
    }

    /// Whether selecting `profile` must go through PIN entry.
    pub fn requires_pin(&self, profile: &str) -> bool {
        self.pins.contains_key(profile)
    }

    /// Compare `entered` with the PIN stored for `profile`.
    ///
    /// Comparison is byte-for-byte: no trimming, no case folding, no
    /// numeric normalisation ("01234" does not match "1234").
    pub fn check(&self, profile: &str, entered: &str) -> PinCheck {
        match self.pins.get(profile) {
            Some(pin) if pin.as_bytes() == entered.as_bytes() => PinCheck::Match,
            Some(_) => PinCheck::Mismatch,
            None => PinCheck::NotRequired,
        }
    }

    /// Names of all gated profiles, sorted.
    pub fn profiles(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.pins.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for CredentialTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pins: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
