//! The cast: every actor in a game, grouped by role.

use rand::Rng;

use crate::actor::Actor;
use crate::config::Settings;
use crate::error::Error;
use crate::error::Result;
use crate::geo::Point;
use crate::gfx::texel::colors;

/// Group holding the score banner.
pub const BANNERS: &str = "banners";
/// Group holding the player's robot.
pub const ROBOTS: &str = "robots";
/// Group holding falling artifacts.
pub const ARTIFACTS: &str = "artifacts";

/// A registry of actors, grouped by name.
///
/// Groups, and actors within a group, are kept in insertion order, which is
/// also the order they are drawn in.
#[derive(Clone, Debug, Default)]
pub struct Cast {
  groups: Vec<(String, Vec<Actor>)>,
}

impl Cast {
  /// Creates a new, empty `Cast`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds the cast for a new game: a score banner, a robot at the bottom
  /// center of the board, and `settings.artifacts` unassigned artifacts
  /// scattered below the top row.
  pub fn new_game<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Self {
    let mut cast = Cast::new();
    let cell = settings.cell_size;

    let banner = Actor::new("Score: 0")
      .with_position(Point::new(1, 0).scale(cell))
      .with_font_size(settings.font_size + 5);
    cast.add_actor(BANNERS, banner);

    let robot = Actor::new("#")
      .with_position(
        Point::new(settings.cols / 2, settings.rows - 1).scale(cell),
      )
      .with_color(colors::WHITE)
      .with_font_size(settings.font_size);
    cast.add_actor(ROBOTS, robot);

    for _ in 0..settings.artifacts {
      let glyph = if rng.gen_bool(0.5) {
        settings.reward_glyph
      } else {
        settings.penalty_glyph
      };
      let x = rng.gen_range(1..settings.cols.max(2));
      let y = rng.gen_range(1..settings.rows.max(2));
      let artifact = Actor::artifact(glyph)
        .with_position(Point::new(x, y).scale(cell))
        .with_font_size(settings.font_size);
      cast.add_actor(ARTIFACTS, artifact);
    }

    cast
  }

  /// Adds `actor` to the end of `group`, creating the group if needed.
  pub fn add_actor(&mut self, group: &str, actor: Actor) {
    match self.groups.iter_mut().find(|(name, _)| name == group) {
      Some((_, actors)) => actors.push(actor),
      None => self.groups.push((group.to_string(), vec![actor])),
    }
  }

  /// Returns the actors in `group`.
  ///
  /// Unknown groups are empty.
  pub fn get_actors(&self, group: &str) -> &[Actor] {
    self
      .groups
      .iter()
      .find(|(name, _)| name == group)
      .map(|(_, actors)| actors.as_slice())
      .unwrap_or(&[])
  }

  /// Returns the actors in `group`, mutably.
  pub fn get_actors_mut(&mut self, group: &str) -> &mut [Actor] {
    match self.groups.iter_mut().find(|(name, _)| name == group) {
      Some((_, actors)) => actors.as_mut_slice(),
      None => &mut [],
    }
  }

  /// Returns the first actor in `group`.
  ///
  /// Fails with [`Error::MissingActor`] if the group is empty.
  pub fn get_first_actor(&self, group: &str) -> Result<&Actor> {
    self
      .get_actors(group)
      .first()
      .ok_or_else(|| Error::MissingActor(group.to_string()))
  }

  /// Returns the first actor in `group`, mutably.
  ///
  /// Fails with [`Error::MissingActor`] if the group is empty.
  pub fn get_first_actor_mut(&mut self, group: &str) -> Result<&mut Actor> {
    self
      .get_actors_mut(group)
      .first_mut()
      .ok_or_else(|| Error::MissingActor(group.to_string()))
  }

  /// Returns an iterator over every actor, group by group.
  pub fn get_all_actors(&self) -> impl Iterator<Item = &Actor> + '_ {
    self.groups.iter().flat_map(|(_, actors)| actors.iter())
  }
}
