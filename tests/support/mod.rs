//! Fake input and video services for driving a `Director` without a
//! terminal.

#![allow(dead_code)]

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use greed::actor::Actor;
use greed::cast;
use greed::cast::Cast;
use greed::config::Difficulty;
use greed::config::Settings;
use greed::director::Director;
use greed::geo::Point;
use greed::gfx::Video;
use greed::input::Input;
use greed::timing::ManualClock;
use greed::Result;

/// Replays a fixed list of directions, then stands still.
#[derive(Default)]
pub struct Script {
  directions: VecDeque<Point>,
}

impl Script {
  pub fn new(directions: &[Point]) -> Self {
    Self {
      directions: directions.iter().copied().collect(),
    }
  }
}

impl Input for Script {
  fn get_direction(&mut self) -> Result<Point> {
    Ok(self.directions.pop_front().unwrap_or_else(Point::zero))
  }
}

/// A screen that remembers what was drawn on each frame.
pub struct Screen {
  pub open: bool,
  pub opened: usize,
  pub width: i64,
  pub height: i64,
  /// Closes itself after this many frames.
  pub close_after: usize,
  pub frames: Vec<Vec<(Point, String)>>,
  pending: Vec<(Point, String)>,
}

impl Screen {
  pub fn new(settings: &Settings, close_after: usize) -> Self {
    Self {
      open: false,
      opened: 0,
      width: settings.max_x(),
      height: settings.max_y(),
      close_after,
      frames: Vec::new(),
      pending: Vec::new(),
    }
  }
}

impl Video for Screen {
  fn open_window(&mut self) -> Result<()> {
    self.open = true;
    self.opened += 1;
    Ok(())
  }

  fn close_window(&mut self) -> Result<()> {
    self.open = false;
    Ok(())
  }

  fn is_window_open(&self) -> bool {
    self.open && self.frames.len() < self.close_after
  }

  fn width(&self) -> i64 {
    self.width
  }

  fn height(&self) -> i64 {
    self.height
  }

  fn clear_buffer(&mut self) -> Result<()> {
    self.pending.clear();
    Ok(())
  }

  fn draw_actors(&mut self, actors: &[&Actor]) -> Result<()> {
    self
      .pending
      .extend(actors.iter().map(|a| (a.position(), a.text().to_string())));
    Ok(())
  }

  fn flush_buffer(&mut self) -> Result<()> {
    self.frames.push(std::mem::take(&mut self.pending));
    Ok(())
  }
}

pub type TestDirector<'c> = Director<Script, Screen, &'c ManualClock, Pcg32>;

/// A 10 x 10 board with 20-unit cells.
pub fn settings(difficulty: Difficulty) -> Settings {
  Settings {
    cols: 10,
    rows: 10,
    cell_size: 20,
    difficulty,
    ..Settings::default()
  }
}

pub fn director<'c>(
  settings: &Settings,
  clock: &'c ManualClock,
  directions: &[Point],
) -> TestDirector<'c> {
  Director::new(
    Script::new(directions),
    Screen::new(settings, usize::MAX),
    clock,
    Pcg32::seed_from_u64(0xdecaf),
  )
}

/// A cast with a banner, a robot at grid cell `robot`, and the given
/// artifacts, each placed at a grid cell.
pub fn cast(
  settings: &Settings,
  robot: (i64, i64),
  artifacts: &[(char, (i64, i64))],
) -> Cast {
  let cell = settings.cell_size;
  let mut c = Cast::new();
  c.add_actor(cast::BANNERS, Actor::new("Score: 0"));
  c.add_actor(
    cast::ROBOTS,
    Actor::new("#").with_position(Point::from(robot).scale(cell)),
  );
  for &(glyph, at) in artifacts {
    c.add_actor(
      cast::ARTIFACTS,
      Actor::artifact(glyph).with_position(Point::from(at).scale(cell)),
    );
  }
  c
}
