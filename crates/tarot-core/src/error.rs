/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while preparing or performing a draw.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The deck is too small for the spread plus its bottom card.
    #[error("deck has {deck} cards but the spread needs {required}")]
    InsufficientDeckSize {
        /// Number of cards in the selected deck.
        deck: usize,
        /// Cards required: one per position plus the bottom card.
        required: usize,
    },

    /// The deck selection key is not one of the known sub-decks.
    #[error("unknown deck: \"{0}\"")]
    UnknownDeck(String),

    /// The spread key is not in the spread catalog.
    #[error("unknown spread: \"{0}\"")]
    UnknownSpread(String),

    /// A share link could not be built or parsed.
    #[error("invalid share link: {0}")]
    InvalidLink(String),
}
