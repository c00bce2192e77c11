//! Round configuration options.

/// Configuration options for a round engine.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hitstay::RoundOptions;
///
/// let options = RoundOptions::default().with_allow_hit_after_bust(false);
/// assert!(!options.allow_hit_after_bust);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOptions {
    /// Whether the player may keep hitting once their hand is bust.
    ///
    /// The turn still only ends on `stay`, and the bust is reported
    /// when the round resolves.
    pub allow_hit_after_bust: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            allow_hit_after_bust: true,
        }
    }
}

impl RoundOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether hitting a bust hand is allowed.
    #[must_use]
    pub const fn with_allow_hit_after_bust(mut self, allow: bool) -> Self {
        self.allow_hit_after_bust = allow;
        self
    }
}
