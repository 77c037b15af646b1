//! Integer geometry on the tile grid.

use std::ops::Range;

use num::FromPrimitive;
use num::Signed;
use num::ToPrimitive;
use num::Zero;

mod impls;

pub mod fov;

/// A compass direction a step can be taken in.
///
/// Screen convention: x grows rightwards and y grows downwards, so `N` is
/// `(0, -1)`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[allow(missing_docs)]
pub enum Dir {
  N,
  S,
  E,
  W,
}

impl Dir {
  /// Returns every direction, in a fixed order.
  pub fn all() -> [Dir; 4] {
    [Dir::N, Dir::S, Dir::E, Dir::W]
  }

  /// Returns the unit vector pointing in this direction.
  pub fn to_point<T: Signed>(self) -> Point<T> {
    match self {
      Dir::N => Point::new(T::zero(), -T::one()),
      Dir::S => Point::new(T::zero(), T::one()),
      Dir::E => Point::new(T::one(), T::zero()),
      Dir::W => Point::new(-T::one(), T::zero()),
    }
  }
}

/// A point, or a vector, on the plane.
///
/// Grid coordinates use the default `i64`; plane and camera positions use
/// `Point<f64>`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct Point<T = i64>([T; 2]);

impl<T> Point<T> {
  /// Makes a point from its coordinates.
  #[inline]
  pub fn new(x: T, y: T) -> Self {
    Self([x, y])
  }

  /// The origin.
  #[inline]
  pub fn zero() -> Self
  where
    T: Zero,
  {
    Self::new(T::zero(), T::zero())
  }

  /// Unpacks this point into `[x, y]`.
  #[inline]
  pub fn coords(self) -> [T; 2] {
    self.0
  }

  /// The horizontal coordinate, growing rightwards.
  #[inline]
  pub fn x(self) -> T
  where
    T: Copy,
  {
    self.0[0]
  }

  /// The vertical coordinate, growing downwards.
  #[inline]
  pub fn y(self) -> T
  where
    T: Copy,
  {
    self.0[1]
  }

  /// The Euclidean length of this vector.
  pub fn norm(self) -> f64
  where
    T: ToPrimitive,
  {
    let [x, y] = self.0;
    let x = x.to_f64().unwrap_or(f64::NAN);
    let y = y.to_f64().unwrap_or(f64::NAN);
    x.hypot(y)
  }
}

impl Point<f64> {
  /// Rounds both coordinates to the nearest integer, with halves rounded up
  /// (towards positive infinity).
  pub fn round_half_up(self) -> Point<i64> {
    let [x, y] = self.0;
    Point::new((x + 0.5).floor() as i64, (y + 0.5).floor() as i64)
  }
}

/// An axis-aligned rectangle, stored as its upper-left corner and the
/// exclusive lower-right corner.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Rect<T = i64>(Point<T>, Point<T>);

impl<T: Signed> Rect<T> {
  /// A `width` by `height` rectangle anchored at the origin.
  #[inline]
  pub fn with_dims(width: T, height: T) -> Self {
    Self(Point::zero(), Point::new(width.abs(), height.abs()))
  }

  /// The upper-left corner, which is part of the rectangle.
  #[inline]
  pub fn upper_left(self) -> Point<T> {
    self.0
  }

  /// The number of columns covered.
  #[inline]
  pub fn width(self) -> T
  where
    T: Copy,
  {
    self.1.x() - self.0.x()
  }

  /// The number of rows covered.
  #[inline]
  pub fn height(self) -> T
  where
    T: Copy,
  {
    self.1.y() - self.0.y()
  }

  /// The number of points covered.
  #[inline]
  pub fn area(self) -> T
  where
    T: Copy,
  {
    self.width() * self.height()
  }

  /// The middle point; integer coordinates round towards the upper left.
  #[inline]
  pub fn center(self) -> Point<T>
  where
    T: Copy + FromPrimitive,
  {
    let two = T::from_u64(2).unwrap_or_else(T::one);
    Point::new(
      self.0.x() + self.width() / two,
      self.0.y() + self.height() / two,
    )
  }

  /// Whether `p` lies inside. The right and bottom edges are exclusive.
  #[inline]
  pub fn contains(self, p: Point<T>) -> bool
  where
    T: Copy + PartialOrd,
  {
    (0..2).all(|i| (self.0[i]..self.1[i]).contains(&p[i]))
  }

  /// Returns whether `p` lies on the outermost ring of points of this `Rect`.
  #[inline]
  pub fn boundary_contains(self, p: Point<T>) -> bool
  where
    T: Copy + PartialOrd,
  {
    let on_edge = p.x() == self.0.x()
      || p.x() == self.1.x() - T::one()
      || p.y() == self.0.y()
      || p.y() == self.1.y() - T::one();

    on_edge && self.contains(p)
  }

  /// Every point inside, row by row.
  pub fn points(self) -> impl Iterator<Item = Point<T>>
  where
    T: Copy,
    Range<T>: Iterator<Item = T>,
  {
    let [x1, y1] = self.0.coords();
    let [x2, y2] = self.1.coords();

    (y1..y2).flat_map(move |y| (x1..x2).map(move |x| Point::new(x, y)))
  }
}

/// Row-major storage of one value per point of a [`Rect`].
// self.1.len() == self.0.area()
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct RectVec<T>(Rect<i64>, Box<[T]>);

impl<T> RectVec<T> {
  /// Fills `rect` by calling `f` on each point, in row-major order.
  pub fn from_fn(rect: Rect<i64>, f: impl FnMut(Point<i64>) -> T) -> Self {
    RectVec(rect, rect.points().map(f).collect())
  }

  /// The rectangle being covered.
  pub fn dims(&self) -> Rect<i64> {
    self.0
  }

  /// All values, in row-major order.
  pub fn data(&self) -> &[T] {
    &self.1
  }

  /// Where `p`'s value sits in [`RectVec::data()`], if `p` is inside.
  pub fn index_of(&self, p: Point<i64>) -> Option<usize> {
    if !self.dims().contains(p) {
      return None;
    }
    let rel = p - self.dims().upper_left();
    Some((rel.x() + rel.y() * self.dims().width()) as usize)
  }

  /// The value at `p`, if `p` is inside.
  pub fn get(&self, p: Point<i64>) -> Option<&T> {
    let index = self.index_of(p)?;
    self.1.get(index)
  }

  /// The value at `p`, mutably.
  pub fn get_mut(&mut self, p: Point<i64>) -> Option<&mut T> {
    let index = self.index_of(p)?;
    self.1.get_mut(index)
  }

  /// Every point paired with its value, row by row.
  pub fn points(&self) -> impl Iterator<Item = (Point<i64>, &T)> + '_ {
    self.dims().points().zip(self.1.iter())
  }
}

impl<T: Clone> RectVec<T> {
  /// Fills `rect` with copies of `val`.
  pub fn new(rect: Rect<i64>, val: T) -> Self {
    RectVec(rect, vec![val; rect.area().max(0) as usize].into_boxed_slice())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rect_center_rounds_down() {
    assert_eq!(Rect::with_dims(25, 25).center(), Point::new(12, 12));
    assert_eq!(Rect::with_dims(4, 6).center(), Point::new(2, 3));
  }

  #[test]
  fn rect_boundary() {
    let r = Rect::with_dims(5, 5);
    assert!(r.boundary_contains(Point::new(0, 2)));
    assert!(r.boundary_contains(Point::new(4, 4)));
    assert!(!r.boundary_contains(Point::new(2, 2)));
    assert!(!r.boundary_contains(Point::new(5, 2)));
  }

  #[test]
  fn rect_vec_indexing_is_row_major() {
    let v = RectVec::from_fn(Rect::with_dims(3, 2), |p| p);
    assert_eq!(v.index_of(Point::new(2, 1)), Some(5));
    assert_eq!(v.get(Point::new(1, 1)), Some(&Point::new(1, 1)));
    assert_eq!(v.get(Point::new(3, 0)), None);
    assert_eq!(v.get(Point::new(-1, 0)), None);
  }

  #[test]
  fn round_half_up_matches_nearest() {
    assert_eq!(Point::new(1.5, -0.5).round_half_up(), Point::new(2, 0));
    assert_eq!(Point::new(2.49, -1.51).round_half_up(), Point::new(2, -2));
  }

  #[test]
  fn dir_steps() {
    for &d in &Dir::all() {
      let p = d.to_point::<i64>();
      assert_eq!(p.x().abs() + p.y().abs(), 1);
    }
    assert_eq!(Dir::N.to_point::<i64>(), Point::new(0, -1));
  }
}
