//! The game loop.
//!
//! A [`Director`] runs the game one frame ("tick") at a time. Each tick has
//! three phases:
//! 1. Input: the latest direction from the keyboard becomes the robot's
//!    velocity.
//! 2. Update: the robot moves, then every artifact is activated if needed,
//!    checked for a collision with the robot, and dropped a cell if its
//!    cadence allows.
//! 3. Output: the whole cast is drawn and presented.
//!
//! The loop runs until the window reports itself closed. Any error ends the
//! game.

use std::time::Duration;

use rand::Rng;

use crate::actor::artifact;
use crate::actor::Actor;
use crate::cast;
use crate::cast::Cast;
use crate::config::Settings;
use crate::error::Result;
use crate::geo::Point;
use crate::gfx::texel::Rgb;
use crate::gfx::Video;
use crate::input::Input;
use crate::timing::Clock;

/// Controls the sequence of play.
pub struct Director<K, V, C, R> {
  keyboard: K,
  video: V,
  clock: C,
  rng: R,
  score: i64,
}

impl<K, V, C, R> Director<K, V, C, R>
where
  K: Input,
  V: Video,
  C: Clock,
  R: Rng,
{
  /// Creates a new `Director` with a score of zero.
  pub fn new(keyboard: K, video: V, clock: C, rng: R) -> Self {
    Self {
      keyboard,
      video,
      clock,
      rng,
      score: 0,
    }
  }

  /// Returns the current score.
  pub fn score(&self) -> i64 {
    self.score
  }

  /// Returns the video service.
  pub fn video(&self) -> &V {
    &self.video
  }

  /// Returns the video service, mutably.
  pub fn video_mut(&mut self) -> &mut V {
    &mut self.video
  }

  /// Opens the window and plays `cast` until the window is closed.
  ///
  /// `color` builds the colors given to artifacts when they are activated.
  pub fn start_game<F>(
    &mut self,
    cast: &mut Cast,
    settings: &Settings,
    color: F,
  ) -> Result<()>
  where
    F: Fn(u8, u8, u8) -> Rgb,
  {
    tracing::info!(
      cols = settings.cols,
      rows = settings.rows,
      difficulty = settings.difficulty.level(),
      "game started"
    );

    self.video.open_window()?;
    while self.video.is_window_open() {
      if let Err(e) = self.tick(cast, settings, &color) {
        // The tick's error takes precedence over one from closing.
        let _ = self.video.close_window();
        return Err(e);
      }
    }
    self.video.close_window()?;

    tracing::info!(score = self.score, "game over");
    Ok(())
  }

  /// Runs a single frame: input, update, and output.
  pub fn tick<F>(
    &mut self,
    cast: &mut Cast,
    settings: &Settings,
    color: F,
  ) -> Result<()>
  where
    F: Fn(u8, u8, u8) -> Rgb,
  {
    self.get_inputs(cast, settings)?;
    self.do_updates(cast, settings, color)?;
    self.do_outputs(cast)
  }

  /// Makes the latest keyboard direction the robot's velocity.
  fn get_inputs(&mut self, cast: &mut Cast, settings: &Settings) -> Result<()> {
    let direction = self.keyboard.get_direction()?;
    let robot = cast.get_first_actor_mut(cast::ROBOTS)?;
    robot.set_velocity(direction.scale(settings.cell_size));
    Ok(())
  }

  /// Moves the robot and the artifacts, and resolves collisions.
  fn do_updates<F>(
    &mut self,
    cast: &mut Cast,
    settings: &Settings,
    color: F,
  ) -> Result<()>
  where
    F: Fn(u8, u8, u8) -> Rgb,
  {
    let max_x = self.video.width();
    let max_y = self.video.height();
    let now = self.clock.now();

    // Both are required even though the banner is only written below.
    cast.get_first_actor(cast::BANNERS)?;
    let robot = cast.get_first_actor_mut(cast::ROBOTS)?;
    robot.move_next(max_x, max_y);
    let robot_pos = robot.position();

    let mut rules = Rules {
      settings,
      rng: &mut self.rng,
      color: &color,
      robot: robot_pos,
      now,
      max_x,
      max_y,
    };
    for artifact in cast.get_actors_mut(cast::ARTIFACTS) {
      self.score += rules.apply(artifact);
    }

    let banner = cast.get_first_actor_mut(cast::BANNERS)?;
    banner.set_text(format!("Score: {}", self.score));
    Ok(())
  }

  /// Draws every actor.
  fn do_outputs(&mut self, cast: &Cast) -> Result<()> {
    self.video.clear_buffer()?;
    let actors = cast.get_all_actors().collect::<Vec<_>>();
    self.video.draw_actors(&actors)?;
    self.video.flush_buffer()
  }
}

/// Everything an artifact needs to know about the current tick.
struct Rules<'a, R: ?Sized, F> {
  settings: &'a Settings,
  rng: &'a mut R,
  color: &'a F,
  robot: Point,
  now: Duration,
  max_x: i64,
  max_y: i64,
}

impl<R, F> Rules<'_, R, F>
where
  R: Rng + ?Sized,
  F: Fn(u8, u8, u8) -> Rgb,
{
  /// Advances `actor` by one tick, returning the change in score.
  ///
  /// Actors without scoring state are left alone.
  fn apply(&mut self, actor: &mut Actor) -> i64 {
    let settings = self.settings;
    let reward = actor.text().chars().eq(Some(settings.reward_glyph));

    let (message, activated) = match actor.scoring_mut() {
      Some(scoring) => {
        let activated = !scoring.is_assigned();
        scoring.activate(reward);
        (scoring.message(), activated)
      }
      None => return 0,
    };
    if activated {
      let c = artifact::random_color(self.rng, self.color);
      actor.set_color(c);
    }

    let mut delta = 0;
    if actor.position() == self.robot {
      delta += message;
      tracing::debug!(glyph = actor.text(), message, "artifact collected");
      self.respawn(actor);
    }

    let delay = settings.difficulty.time_delay();
    let due = actor
      .scoring()
      .map_or(false, |scoring| scoring.is_due(self.now, delay));
    if due {
      actor.set_velocity(Point::new(0, settings.cell_size));
      actor.move_next(self.max_x, self.max_y);
      if let Some(scoring) = actor.scoring_mut() {
        scoring.record_move(self.now);
      }
      if actor.position().y() == 0 {
        self.respawn(actor);
      }
    }

    delta
  }

  /// Moves `actor` to a random cell on the top row.
  fn respawn(&mut self, actor: &mut Actor) {
    let p = artifact::spawn_point(
      self.rng,
      self.settings.cols,
      self.settings.cell_size,
    );
    tracing::trace!(x = p.x(), "artifact respawned");
    actor.set_position(p);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use rand::SeedableRng;
  use rand_pcg::Pcg32;

  use crate::error::Error;
  use crate::gfx::texel::colors;
  use crate::timing::ManualClock;

  struct Still;
  impl Input for Still {
    fn get_direction(&mut self) -> Result<Point> {
      Ok(Point::zero())
    }
  }

  struct Board {
    open: bool,
    frames: usize,
    close_after: usize,
  }

  impl Video for Board {
    fn open_window(&mut self) -> Result<()> {
      self.open = true;
      Ok(())
    }
    fn close_window(&mut self) -> Result<()> {
      self.open = false;
      Ok(())
    }
    fn is_window_open(&self) -> bool {
      self.open && self.frames < self.close_after
    }
    fn width(&self) -> i64 {
      200
    }
    fn height(&self) -> i64 {
      200
    }
    fn clear_buffer(&mut self) -> Result<()> {
      Ok(())
    }
    fn draw_actors(&mut self, _: &[&Actor]) -> Result<()> {
      Ok(())
    }
    fn flush_buffer(&mut self) -> Result<()> {
      self.frames += 1;
      Ok(())
    }
  }

  fn settings() -> Settings {
    Settings {
      cols: 10,
      rows: 10,
      cell_size: 20,
      ..Settings::default()
    }
  }

  fn director(
    close_after: usize,
    clock: &ManualClock,
  ) -> Director<Still, Board, &ManualClock, Pcg32> {
    let board = Board {
      open: false,
      frames: 0,
      close_after,
    };
    Director::new(Still, board, clock, Pcg32::seed_from_u64(1))
  }

  fn cast_with(artifacts: Vec<Actor>) -> Cast {
    let mut cast = Cast::new();
    cast.add_actor(cast::BANNERS, Actor::new(""));
    cast.add_actor(
      cast::ROBOTS,
      Actor::new("#").with_position(Point::new(100, 100)),
    );
    for a in artifacts {
      cast.add_actor(cast::ARTIFACTS, a);
    }
    cast
  }

  #[test]
  fn start_game_runs_until_the_window_closes() {
    let clock = ManualClock::new();
    let mut director = director(3, &clock);
    let mut cast = cast_with(vec![]);
    director
      .start_game(&mut cast, &settings(), Rgb::new)
      .unwrap();
    assert_eq!(director.video().frames, 3);
    assert!(!director.video().open);
    let banner = cast.get_first_actor(cast::BANNERS).unwrap();
    assert_eq!(banner.text(), "Score: 0");
  }

  #[test]
  fn missing_robot_ends_the_game_and_closes_the_window() {
    let clock = ManualClock::new();
    let mut director = director(3, &clock);
    let mut cast = Cast::new();
    cast.add_actor(cast::BANNERS, Actor::new(""));

    let err = director
      .start_game(&mut cast, &settings(), Rgb::new)
      .unwrap_err();
    assert!(matches!(err, Error::MissingActor(ref g) if g == cast::ROBOTS));
    assert!(!director.video().open);
  }

  #[test]
  fn activation_assigns_color_and_sign_once() {
    let clock = ManualClock::new();
    let mut director = director(usize::MAX, &clock);
    let mut cast = cast_with(vec![
      Actor::artifact('*').with_position(Point::new(40, 40)),
      Actor::artifact('o').with_position(Point::new(60, 40)),
    ]);

    director
      .tick(&mut cast, &settings(), |_, _, _| colors::RED)
      .unwrap();
    let artifacts = cast.get_actors(cast::ARTIFACTS);
    assert_eq!(artifacts[0].scoring().unwrap().message(), 1);
    assert_eq!(artifacts[1].scoring().unwrap().message(), -1);
    for a in artifacts {
      assert_eq!(a.scoring().unwrap().display(), 1);
      assert_eq!(a.color(), colors::RED);
    }

    clock.set(Duration::from_millis(1100));
    director
      .tick(&mut cast, &settings(), |_, _, _| colors::BLUE)
      .unwrap();
    for a in cast.get_actors(cast::ARTIFACTS) {
      assert_eq!(a.scoring().unwrap().display(), 2);
      assert_eq!(a.color(), colors::RED);
    }
  }

  #[test]
  fn wrapping_to_the_top_rerolls_the_column() {
    let clock = ManualClock::new();
    clock.set(Duration::from_secs(5));
    let mut director = director(usize::MAX, &clock);
    let mut cast =
      cast_with(vec![Actor::artifact('*').with_position(Point::new(0, 180))]);

    director.tick(&mut cast, &settings(), Rgb::new).unwrap();
    let artifact = &cast.get_actors(cast::ARTIFACTS)[0];
    let p = artifact.position();
    assert_eq!(p.y(), 0);
    assert!((20..200).contains(&p.x()));
    assert_eq!(p.x() % 20, 0);
  }

  #[test]
  fn unknown_glyphs_are_penalties() {
    let clock = ManualClock::new();
    let mut director = director(usize::MAX, &clock);
    let mut cast =
      cast_with(vec![Actor::artifact('@').with_position(Point::new(100, 100))]);

    director.tick(&mut cast, &settings(), Rgb::new).unwrap();
    assert_eq!(director.score(), -1);
    let banner = cast.get_first_actor(cast::BANNERS).unwrap();
    assert_eq!(banner.text(), "Score: -1");
  }
}
