//! Artifact scoring state.
//!
//! An artifact goes through two states, tracked by its display counter:
//! - *Unassigned* (`display == 0`): its color and score value have not been
//!   chosen yet. Every artifact starts out here.
//! - *Active* (`display >= 1`): its identity is fixed, and the counter goes up
//!   by one each time the artifact falls a cell.
//!
//! Identity is chosen exactly once; respawning an artifact at the top of the
//! board only moves it.

use std::time::Duration;

use rand::Rng;

use crate::geo::Point;
use crate::gfx::texel::Rgb;

/// Scoring state carried by artifacts.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Scoring {
  message: Option<i64>,
  last_mod: Duration,
  display: u32,
}

impl Scoring {
  /// Creates a new, unassigned `Scoring`.
  ///
  /// The last movement is recorded at the clock's epoch.
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns whether this artifact's identity has been chosen.
  pub fn is_assigned(&self) -> bool {
    self.display > 0
  }

  /// Returns the amount this artifact adds to the score when collected.
  ///
  /// Unassigned artifacts are worth nothing.
  pub fn message(&self) -> i64 {
    self.message.unwrap_or(0)
  }

  /// Returns the clock reading at which this artifact last moved.
  pub fn last_mod(&self) -> Duration {
    self.last_mod
  }

  /// Returns the display counter.
  pub fn display(&self) -> u32 {
    self.display
  }

  /// Fixes this artifact's score value, making it active.
  ///
  /// Does nothing if the artifact is already active.
  pub fn activate(&mut self, reward: bool) {
    if self.is_assigned() {
      return;
    }
    self.message = Some(if reward { 1 } else { -1 });
    self.display = 1;
  }

  /// Returns whether more than `delay` has passed between the last move and
  /// `now`.
  pub fn is_due(&self, now: Duration, delay: Duration) -> bool {
    now
      .checked_sub(self.last_mod)
      .map_or(false, |elapsed| elapsed > delay)
  }

  /// Records that the artifact fell a cell at `now`.
  pub fn record_move(&mut self, now: Duration) {
    self.last_mod = now;
    self.display = self.display.saturating_add(1);
  }
}

/// Picks a uniformly random color using `color` to build it.
pub fn random_color<R, F>(rng: &mut R, color: F) -> Rgb
where
  R: Rng + ?Sized,
  F: Fn(u8, u8, u8) -> Rgb,
{
  color(rng.gen(), rng.gen(), rng.gen())
}

/// Picks a random cell on the top row of a `cols`-wide board, in simulation
/// units.
///
/// The leftmost column is never chosen, unless it is the only one.
pub fn spawn_point<R: Rng + ?Sized>(
  rng: &mut R,
  cols: i64,
  cell_size: i64,
) -> Point {
  let x = if cols > 1 { rng.gen_range(1..cols) } else { 0 };
  Point::new(x, 0).scale(cell_size)
}

#[cfg(test)]
mod tests {
  use super::*;

  use rand::SeedableRng;
  use rand_pcg::Pcg32;

  #[test]
  fn activation_happens_once() {
    let mut scoring = Scoring::new();
    assert!(!scoring.is_assigned());
    assert_eq!(scoring.message(), 0);

    scoring.activate(true);
    assert_eq!(scoring.display(), 1);
    assert_eq!(scoring.message(), 1);

    scoring.record_move(Duration::from_secs(2));
    scoring.activate(false);
    assert_eq!(scoring.display(), 2);
    assert_eq!(scoring.message(), 1);
  }

  #[test]
  fn penalty_is_negative() {
    let mut scoring = Scoring::new();
    scoring.activate(false);
    assert_eq!(scoring.message(), -1);
  }

  #[test]
  fn cadence_is_strict() {
    let mut scoring = Scoring::new();
    let delay = Duration::from_millis(500);
    assert!(!scoring.is_due(Duration::from_millis(500), delay));
    assert!(scoring.is_due(Duration::from_millis(501), delay));

    scoring.record_move(Duration::from_secs(10));
    assert!(!scoring.is_due(Duration::from_secs(9), delay));
    assert!(!scoring.is_due(Duration::from_millis(10_400), delay));
    assert!(scoring.is_due(Duration::from_millis(10_600), delay));
  }

  #[test]
  fn spawn_points_are_on_the_top_row() {
    let mut rng = Pcg32::seed_from_u64(7);
    for _ in 0..200 {
      let p = spawn_point(&mut rng, 10, 20);
      assert_eq!(p.y(), 0);
      assert_eq!(p.x() % 20, 0);
      assert!((20..200).contains(&p.x()));
    }
    assert_eq!(spawn_point(&mut rng, 1, 20), Point::new(0, 0));
  }

  #[test]
  fn random_color_uses_the_factory() {
    let mut rng = Pcg32::seed_from_u64(7);
    let gray = random_color(&mut rng, |_, _, _| Rgb::new(9, 9, 9));
    assert_eq!(gray, Rgb::new(9, 9, 9));
  }
}
