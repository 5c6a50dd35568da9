//! Actors: everything on the board that can be drawn.
//!
//! There is a single [`Actor`] type. Artifacts are actors that additionally
//! carry a [`Scoring`] state; see the [`artifact`] module.

use crate::geo::Point;
use crate::gfx::texel::colors;
use crate::gfx::texel::Rgb;

pub mod artifact;

pub use artifact::Scoring;

/// The font size actors are created with.
pub const DEFAULT_FONT_SIZE: u16 = 15;

/// A drawable, positioned object in the game.
///
/// Positions and velocities are in simulation units, i.e., grid cells scaled
/// by the cell size.
#[derive(Clone, PartialEq, Debug)]
pub struct Actor {
  position: Point,
  velocity: Point,
  text: String,
  color: Rgb,
  font_size: u16,
  scoring: Option<Scoring>,
}

impl Actor {
  /// Creates a new, stationary, white actor at the origin displaying `text`.
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      position: Point::zero(),
      velocity: Point::zero(),
      text: text.into(),
      color: colors::WHITE,
      font_size: DEFAULT_FONT_SIZE,
      scoring: None,
    }
  }

  /// Creates a new artifact displaying `glyph`.
  ///
  /// The artifact starts out unassigned: its color and score value are chosen
  /// the first time the game updates it.
  pub fn artifact(glyph: char) -> Self {
    Self {
      scoring: Some(Scoring::new()),
      ..Self::new(glyph.to_string())
    }
  }

  /// Returns this actor, moved to `position`.
  pub fn with_position(mut self, position: Point) -> Self {
    self.position = position;
    self
  }

  /// Returns this actor, recolored to `color`.
  pub fn with_color(mut self, color: Rgb) -> Self {
    self.color = color;
    self
  }

  /// Returns this actor, with its font size set to `font_size`.
  pub fn with_font_size(mut self, font_size: u16) -> Self {
    self.font_size = font_size;
    self
  }

  /// Returns this actor's position.
  pub fn position(&self) -> Point {
    self.position
  }

  /// Moves this actor to `position`.
  pub fn set_position(&mut self, position: Point) {
    self.position = position;
  }

  /// Returns this actor's velocity.
  pub fn velocity(&self) -> Point {
    self.velocity
  }

  /// Sets the amount this actor moves by on each call to
  /// [`Actor::move_next()`].
  pub fn set_velocity(&mut self, velocity: Point) {
    self.velocity = velocity;
  }

  /// Returns the text this actor is drawn as.
  pub fn text(&self) -> &str {
    &self.text
  }

  /// Replaces the text this actor is drawn as.
  pub fn set_text(&mut self, text: impl Into<String>) {
    self.text = text.into();
  }

  /// Returns this actor's color.
  pub fn color(&self) -> Rgb {
    self.color
  }

  /// Recolors this actor.
  pub fn set_color(&mut self, color: Rgb) {
    self.color = color;
  }

  /// Returns this actor's font size.
  pub fn font_size(&self) -> u16 {
    self.font_size
  }

  /// Sets this actor's font size.
  pub fn set_font_size(&mut self, font_size: u16) {
    self.font_size = font_size;
  }

  /// Returns this actor's scoring state, if it is an artifact.
  pub fn scoring(&self) -> Option<&Scoring> {
    self.scoring.as_ref()
  }

  /// Returns a mutable reference to this actor's scoring state, if it is an
  /// artifact.
  pub fn scoring_mut(&mut self) -> Option<&mut Scoring> {
    self.scoring.as_mut()
  }

  /// Moves this actor by its velocity, wrapping around the edges of the
  /// `max_x` by `max_y` board.
  ///
  /// Afterwards, the position always lies in `[0, max_x) x [0, max_y)`.
  pub fn move_next(&mut self, max_x: i64, max_y: i64) {
    self.position = (self.position + self.velocity).wrap(max_x, max_y);
  }
}
