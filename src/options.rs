//! Game configuration options.

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use eights::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(7)
///     .with_opponent_delay_ms(250)
///     .with_recycle_discard(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt to each side at the start of a game.
    pub hand_size: usize,
    /// Delay before a scheduled opponent move fires, in milliseconds.
    pub opponent_delay_ms: u64,
    /// Delay before the skip from a four or an ace resolves, in milliseconds.
    pub skip_delay_ms: u64,
    /// Whether every card of a multi-card play must share the first card's
    /// rank. When off, only the first card is checked.
    pub strict_batches: bool,
    /// Whether an exhausted deck is refilled from the discard pile.
    pub recycle_discard: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 8,
            opponent_delay_ms: 1000,
            skip_delay_ms: 500,
            strict_batches: false,
            recycle_discard: false,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each side.
    ///
    /// # Example
    ///
    /// ```
    /// use eights::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the opponent move delay.
    ///
    /// # Example
    ///
    /// ```
    /// use eights::GameOptions;
    ///
    /// let options = GameOptions::default().with_opponent_delay_ms(0);
    /// assert_eq!(options.opponent_delay_ms, 0);
    /// ```
    #[must_use]
    pub const fn with_opponent_delay_ms(mut self, delay: u64) -> Self {
        self.opponent_delay_ms = delay;
        self
    }

    /// Sets the skip resolution delay.
    ///
    /// # Example
    ///
    /// ```
    /// use eights::GameOptions;
    ///
    /// let options = GameOptions::default().with_skip_delay_ms(200);
    /// assert_eq!(options.skip_delay_ms, 200);
    /// ```
    #[must_use]
    pub const fn with_skip_delay_ms(mut self, delay: u64) -> Self {
        self.skip_delay_ms = delay;
        self
    }

    /// Sets whether multi-card plays must share one rank.
    ///
    /// # Example
    ///
    /// ```
    /// use eights::GameOptions;
    ///
    /// let options = GameOptions::default().with_strict_batches(true);
    /// assert!(options.strict_batches);
    /// ```
    #[must_use]
    pub const fn with_strict_batches(mut self, strict: bool) -> Self {
        self.strict_batches = strict;
        self
    }

    /// Sets whether the discard pile is reshuffled into an empty deck.
    ///
    /// # Example
    ///
    /// ```
    /// use eights::GameOptions;
    ///
    /// let options = GameOptions::default().with_recycle_discard(true);
    /// assert!(options.recycle_discard);
    /// ```
    #[must_use]
    pub const fn with_recycle_discard(mut self, recycle: bool) -> Self {
        self.recycle_discard = recycle;
        self
    }
}
