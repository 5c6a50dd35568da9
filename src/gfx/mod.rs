//! Graphics and rendering library.

use crate::actor::Actor;
use crate::error::Result;

pub mod canvas;
pub mod curses;
pub mod texel;

pub use canvas::Canvas;
pub use curses::Curses;

/// An output surface that actors are drawn onto.
///
/// Drawing is double-buffered: a frame is built with
/// [`clear_buffer()`](Video::clear_buffer) and
/// [`draw_actors()`](Video::draw_actors), and only becomes visible on
/// [`flush_buffer()`](Video::flush_buffer).
pub trait Video {
  /// Opens the surface. Calling this on an open surface does nothing.
  fn open_window(&mut self) -> Result<()>;

  /// Closes the surface. Calling this on a closed surface does nothing.
  fn close_window(&mut self) -> Result<()>;

  /// Returns whether the surface is open and has not been asked to close.
  fn is_window_open(&self) -> bool;

  /// Returns the width of the surface, in simulation units.
  fn width(&self) -> i64;

  /// Returns the height of the surface, in simulation units.
  fn height(&self) -> i64;

  /// Starts a new, blank frame.
  fn clear_buffer(&mut self) -> Result<()>;

  /// Draws `actors` onto the current frame, in order.
  fn draw_actors(&mut self, actors: &[&Actor]) -> Result<()>;

  /// Presents the current frame.
  fn flush_buffer(&mut self) -> Result<()>;
}
