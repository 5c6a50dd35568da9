//! Operator overloads.

use std::ops::Add;
use std::ops::Mul;

use num::Zero;

use crate::geo::Point;

impl<T> From<(T, T)> for Point<T> {
  #[inline]
  fn from((x, y): (T, T)) -> Self {
    Self::new(x, y)
  }
}

impl<T: Zero> Zero for Point<T> {
  #[inline]
  fn zero() -> Self {
    Self([T::zero(), T::zero()])
  }

  #[inline]
  fn is_zero(&self) -> bool {
    self.0.iter().all(Zero::is_zero)
  }
}

impl<T: Add<U>, U> Add<Point<U>> for Point<T> {
  type Output = Point<T::Output>;
  #[inline]
  fn add(self, other: Point<U>) -> Self::Output {
    let ([x1, y1], [x2, y2]) = (self.0, other.0);
    Point([x1 + x2, y1 + y2])
  }
}

impl<T: Mul<U>, U: Copy> Mul<U> for Point<T> {
  type Output = Point<T::Output>;
  #[inline]
  fn mul(self, factor: U) -> Self::Output {
    let [x, y] = self.0;
    Point([x * factor, y * factor])
  }
}
