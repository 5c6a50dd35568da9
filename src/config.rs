//! Game settings.

use std::path::PathBuf;
use std::time::Duration;

/// How quickly artifacts fall.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Difficulty {
  /// Level 1: artifacts drop one cell per second.
  Easy,
  /// Level 2: two cells per second.
  Normal,
  /// Level 3: ten cells per second.
  Hard,
}

impl Default for Difficulty {
  fn default() -> Self {
    Difficulty::Easy
  }
}

impl Difficulty {
  /// Converts a numeric level into a `Difficulty`.
  ///
  /// Anything other than 2 or 3 is treated as level 1.
  pub fn from_level(level: i64) -> Self {
    match level {
      2 => Difficulty::Normal,
      3 => Difficulty::Hard,
      _ => Difficulty::Easy,
    }
  }

  /// Returns the numeric level for this `Difficulty`.
  pub fn level(self) -> i64 {
    match self {
      Difficulty::Easy => 1,
      Difficulty::Normal => 2,
      Difficulty::Hard => 3,
    }
  }

  /// Returns the minimum time between two successive moves of an artifact.
  pub fn time_delay(self) -> Duration {
    match self {
      Difficulty::Easy => Duration::from_secs(1),
      Difficulty::Normal => Duration::from_millis(500),
      Difficulty::Hard => Duration::from_millis(100),
    }
  }
}

/// Settings for a single game session.
#[derive(Clone, Debug)]
pub struct Settings {
  /// Board width, in cells.
  pub cols: i64,
  /// Board height, in cells.
  pub rows: i64,
  /// Size of a cell in simulation units.
  pub cell_size: i64,
  /// Font size for ordinary actors.
  pub font_size: u16,
  /// Target frames per second.
  pub frame_rate: u32,
  /// Number of artifacts in play.
  pub artifacts: usize,
  /// How quickly artifacts fall.
  pub difficulty: Difficulty,
  /// Glyph of artifacts that award a point; every other glyph costs one.
  pub reward_glyph: char,
  /// Glyph used for penalty artifacts when populating the board.
  pub penalty_glyph: char,
  /// Seed for the random source; `None` picks one from the OS.
  pub seed: Option<u64>,
  /// Whether to print the measured frame rate on the bottom row.
  pub show_fps: bool,
  /// Where to write logs; `None` disables logging.
  pub log_file: Option<PathBuf>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      cols: 60,
      rows: 20,
      cell_size: 15,
      font_size: 15,
      frame_rate: 12,
      artifacts: 40,
      difficulty: Difficulty::Easy,
      reward_glyph: '*',
      penalty_glyph: 'o',
      seed: None,
      show_fps: false,
      log_file: None,
    }
  }
}

impl Settings {
  /// Width of the board in simulation units.
  pub fn max_x(&self) -> i64 {
    self.cols * self.cell_size
  }

  /// Height of the board in simulation units.
  pub fn max_y(&self) -> i64 {
    self.rows * self.cell_size
  }
}
