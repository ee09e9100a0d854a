//! Ordered placeholder substitution for BuildSpec text.
//!
//! Responsibilities:
//! - Hold an ordered token -> replacement mapping.
//! - Apply every pair to a working text sequentially, pair N's output
//!   feeding pair N+1.
//!
//! Does NOT handle:
//! - Reading or writing files (see loader.rs).
//!
//! Invariants:
//! - Tokens are unique; inserting an existing token updates its value in
//!   place without changing its position.
//! - No token may appear as a substring of an earlier replacement value,
//!   otherwise sequential application corrupts the output. Debug-asserted
//!   on insert; unreachable with the two fixed deployment tokens.

/// An ordered mapping from placeholder token to replacement value.
///
/// Text containing none of the tokens passes through `apply` untouched, so
/// running substitution over its own output is a no-op.
#[derive(Clone, Debug, Default)]
pub struct PlaceholderMap {
    entries: Vec<(String, String)>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token -> replacement pair, updating the value in place if the
    /// token is already present.
    pub fn insert(&mut self, token: impl Into<String>, replacement: impl Into<String>) {
        let token = token.into();
        let replacement = replacement.into();
        debug_assert!(!token.is_empty(), "placeholder token must be non-empty");
        debug_assert!(
            !self
                .entries
                .iter()
                .any(|(_, earlier)| earlier.contains(&token)),
            "token {token:?} is a substring of an earlier replacement value"
        );
        if let Some(entry) = self.entries.iter_mut().find(|(t, _)| *t == token) {
            entry.1 = replacement;
        } else {
            self.entries.push((token, replacement));
        }
    }

    /// Replace every literal occurrence of each token with its value,
    /// applying the pairs in insertion order.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (token, replacement) in &self.entries {
            result = result.replace(token, replacement);
        }
        result
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over (token, replacement) pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, r)| (t.as_str(), r.as_str()))
    }
}
