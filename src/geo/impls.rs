//! Operator overloads.

use std::ops::Add;
use std::ops::Deref;
use std::ops::Mul;
use std::ops::Sub;

use crate::geo::Point;

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.0
  }
}

impl<T: Add<U>, U> Add<Point<U>> for Point<T> {
  type Output = Point<T::Output>;
  #[inline]
  fn add(self, rhs: Point<U>) -> Self::Output {
    let ([x1, y1], [x2, y2]) = (self.0, rhs.0);
    Point::new(x1 + x2, y1 + y2)
  }
}

impl<T: Sub<U>, U> Sub<Point<U>> for Point<T> {
  type Output = Point<T::Output>;
  #[inline]
  fn sub(self, rhs: Point<U>) -> Self::Output {
    let ([x1, y1], [x2, y2]) = (self.0, rhs.0);
    Point::new(x1 - x2, y1 - y2)
  }
}

/// Scaling by a scalar.
impl<T: Mul<U>, U: Copy> Mul<U> for Point<T> {
  type Output = Point<T::Output>;
  #[inline]
  fn mul(self, k: U) -> Self::Output {
    let [x, y] = self.0;
    Point::new(x * k, y * k)
  }
}
