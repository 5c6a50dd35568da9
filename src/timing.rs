//! Timing primitives.

use std::cell::Cell;
use std::thread;
use std::time::Duration;
use std::time::Instant;

/// A source of monotonic time.
///
/// Readings are measured from an arbitrary, fixed epoch (usually the start of
/// the session), so they can be compared and subtracted but carry no
/// wall-clock meaning.
pub trait Clock {
  /// Returns the time elapsed since this clock's epoch.
  fn now(&self) -> Duration;
}

/// A [`Clock`] backed by [`Instant`], whose epoch is its creation time.
pub struct SystemClock {
  epoch: Instant,
}

impl SystemClock {
  /// Creates a new `SystemClock` starting at zero.
  pub fn new() -> Self {
    Self {
      epoch: Instant::now(),
    }
  }
}

impl Default for SystemClock {
  fn default() -> Self {
    Self::new()
  }
}

impl Clock for SystemClock {
  fn now(&self) -> Duration {
    self.epoch.elapsed()
  }
}

/// A [`Clock`] that only moves when told to.
///
/// This is useful for driving the simulation without sleeping.
#[derive(Default, Debug)]
pub struct ManualClock {
  now: Cell<Duration>,
}

impl ManualClock {
  /// Creates a new `ManualClock` reading zero.
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets the current reading.
  pub fn set(&self, now: Duration) {
    self.now.set(now);
  }

  /// Moves the current reading forward by `delta`.
  pub fn advance(&self, delta: Duration) {
    self.now.set(self.now.get() + delta);
  }
}

impl Clock for ManualClock {
  fn now(&self) -> Duration {
    self.now.get()
  }
}

impl<C: Clock + ?Sized> Clock for &C {
  fn now(&self) -> Duration {
    (**self).now()
  }
}

/// A timer for maintaining a stable FPS.
pub struct FrameTimer {
  frame_count: u64,
  last_frame: Instant,

  fps: f64,
  last_measurement: Instant,
  last_measurement_frame: u64,
}

impl FrameTimer {
  /// Creates a new `FrameTimer`.
  pub fn new() -> FrameTimer {
    FrameTimer {
      frame_count: 0,
      last_frame: Instant::now(),
      fps: 0.0,
      last_measurement: Instant::now(),
      last_measurement_frame: 0,
    }
  }

  /// Returns the number of frames timed so far.
  pub fn frame_count(&self) -> u64 {
    self.frame_count
  }

  /// Measures the frames per second at the given measurement interval.
  ///
  /// This function should be called once per frame; once the given interval
  /// has elapsed, the FPS will be computed as the average frame time since the
  /// last measurement. The framerate is cached between measurements.
  pub fn measure_fps(&mut self, measurement_interval: Duration) -> f64 {
    let elapsed = self.last_measurement.elapsed();
    if elapsed < measurement_interval {
      return self.fps;
    }

    let frames = (self.frame_count - self.last_measurement_frame) as f64;
    self.fps = frames / elapsed.as_secs_f64();
    self.last_measurement = Instant::now();
    self.last_measurement_frame = self.frame_count;

    self.fps
  }

  /// Ends a frame, blocking until the minimum frame length for the given FPS
  /// is reached.
  ///
  /// This function should be called once per frame. A `target_fps` of zero
  /// disables pacing.
  pub fn end_frame(&mut self, target_fps: u32) {
    if target_fps > 0 {
      let frame_time = Duration::from_secs(1) / target_fps;
      if let Some(left) = frame_time.checked_sub(self.last_frame.elapsed()) {
        thread::sleep(left);
      }
    }
    self.last_frame = Instant::now();
    self.frame_count += 1;
  }
}

impl Default for FrameTimer {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn manual_clock_only_moves_when_told() {
    let clock = ManualClock::new();
    assert_eq!(clock.now(), Duration::ZERO);
    clock.advance(Duration::from_millis(250));
    clock.advance(Duration::from_millis(250));
    assert_eq!(clock.now(), Duration::from_millis(500));
    clock.set(Duration::from_secs(3));
    assert_eq!((&clock).now(), Duration::from_secs(3));
  }

  #[test]
  fn system_clock_is_monotonic() {
    let clock = SystemClock::new();
    let a = clock.now();
    let b = clock.now();
    assert!(b >= a);
  }

  #[test]
  fn frame_timer_counts_frames() {
    let mut timer = FrameTimer::new();
    timer.end_frame(0);
    timer.end_frame(1000);
    assert_eq!(timer.frame_count(), 2);
  }
}
