//! Geometry and math library.

use std::ops::Mul;

use num::Integer;
use num::Zero;

mod impls;

/// A two-dimensional point.
///
/// We use the following convention for coordinates: x increases to the right
/// direction, and y in the downwards direction.
///
/// `Point<T>` values may be added componentwise, and scaled by a uniform
/// factor.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct Point<T = i64>([T; 2]);

impl<T> Point<T> {
  /// Creates a new `Point` with the given coordinates.
  #[inline]
  pub fn new(x: T, y: T) -> Self {
    Self([x, y])
  }

  /// Creates a new `Point` representing the origin.
  #[inline]
  pub fn zero() -> Self
  where
    T: Zero,
  {
    Zero::zero()
  }

  /// Returns the `x` coordinate.
  #[inline]
  pub fn x(self) -> T
  where
    T: Copy,
  {
    self.0[0]
  }

  /// Returns the `y` coordinate.
  #[inline]
  pub fn y(self) -> T
  where
    T: Copy,
  {
    self.0[1]
  }

  /// Returns a copy of `self` with both coordinates multiplied by `factor`.
  ///
  /// This is how grid coordinates are turned into "pixel" coordinates: a cell
  /// `(x, y)` on the board lives at `(x, y).scale(cell_size)`.
  #[inline]
  pub fn scale(self, factor: T) -> Self
  where
    T: Mul<Output = T> + Copy,
  {
    self * factor
  }

  /// Wraps `self` onto the torus `[0, max_x) x [0, max_y)`.
  ///
  /// Each axis is reduced independently with a floored modulus, so a
  /// coordinate that left one edge re-enters from the opposite one, no matter
  /// how far past the edge it went.
  ///
  /// # Panics
  ///
  /// Panics if either bound is zero.
  #[inline]
  pub fn wrap(self, max_x: T, max_y: T) -> Self
  where
    T: Integer + Copy,
  {
    let [x, y] = self.0;
    Self([
      Integer::mod_floor(&x, &max_x),
      Integer::mod_floor(&y, &max_y),
    ])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn scale_multiplies_both_axes() {
    assert_eq!(Point::new(3, -2).scale(15), Point::new(45, -30));
    assert_eq!(Point::new(7, 9).scale(0), Point::zero());
  }

  #[test]
  fn add_is_componentwise() {
    assert_eq!(Point::new(3, 4) + Point::new(-1, 20), Point::new(2, 24));
  }

  #[test]
  fn equality_is_componentwise() {
    assert_eq!(Point::new(1, 2), Point::new(1, 2));
    assert_ne!(Point::new(1, 2), Point::new(2, 1));
  }

  #[test]
  fn wrap_reenters_from_opposite_edge() {
    assert_eq!(Point::new(10, 4).wrap(10, 10), Point::new(0, 4));
    assert_eq!(Point::new(-1, 4).wrap(10, 10), Point::new(9, 4));
    assert_eq!(Point::new(4, -25).wrap(10, 10), Point::new(4, 5));
    assert_eq!(Point::new(31, 100).wrap(10, 10), Point::new(1, 0));
  }
}
