//! Greed: a tiny terminal arcade game.
//!
//! The player steers a robot (`#`) around the board while gems (`*`) and
//! rocks (`o`) fall from the top. Touching a gem is worth a point; touching a
//! rock costs one. The game loop lives in [`director`]; everything else is
//! the board, the pieces on it, and the terminal they are drawn on.

pub mod actor;
pub mod cast;
pub mod config;
pub mod director;
pub mod error;
pub mod geo;
pub mod gfx;
pub mod input;
pub mod timing;

pub use error::Error;
pub use error::Result;
