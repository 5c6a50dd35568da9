//! Error types.

use std::io;

use thiserror::Error;

/// An error that ends a game session.
///
/// None of these are recoverable: a missing actor is a setup bug, and a
/// terminal that can't be read from or drawn to leaves nothing to play on.
#[derive(Debug, Error)]
pub enum Error {
  /// A group that the game requires exactly one actor in was empty.
  #[error("missing required actor in group `{0}`")]
  MissingActor(String),

  /// The terminal failed to open, draw, or produce input.
  #[error("terminal error: {0}")]
  Io(#[from] io::Error),
}

/// A `Result` specialized to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
