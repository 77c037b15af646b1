//! Field-of-view algorithms.

use crate::geo::Point;

/// What a raycast visitor wants done with the ray it was just handed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Ray {
  /// Keep stepping outwards.
  Continue,
  /// Stop this ray; the next angle is sampled.
  Halt,
}

/// Returns the sampled ray angles, in degrees, for a given angular step.
///
/// Angles start at 0 and go up to, but not including, 360. They are computed
/// as `k * step` rather than by accumulation, so a fractional step does not
/// drift.
pub fn angles(step: f64) -> impl Iterator<Item = f64> {
  (0u32..)
    .map(move |k| f64::from(k) * step)
    .take_while(|&angle| angle < 360.0)
}

/// Compute the field-of-view from a given point by fixed-step angular
/// raycasting.
///
/// One ray is cast for each angle returned by [`angles()`]. Along a ray, the
/// point at distance `i` (for `i` in `1..radius`) is rounded to the nearest
/// grid point and handed to `visit`, which returns whether the ray goes on.
/// The origin itself is never visited; callers light it separately.
///
/// This is not a precise shadow-casting algorithm: at large radii the gaps
/// between sampled angles leave tiles unvisited, and a point may be visited
/// several times by neighboring rays. `visit` must therefore be idempotent.
///
/// Any error returned by `visit` aborts the whole cast.
pub fn raycast<E>(
  origin: Point<i64>,
  radius: u32,
  step: f64,
  visit: &mut dyn FnMut(Point<i64>) -> Result<Ray, E>,
) -> Result<(), E> {
  let [ox, oy] = origin.coords();
  let origin = Point::new(ox as f64, oy as f64);

  for angle in angles(step) {
    let (sin, cos) = angle.to_radians().sin_cos();
    let dir = Point::new(cos, sin);
    for i in 1..radius {
      let p = (origin + dir * f64::from(i)).round_half_up();
      if visit(p)? == Ray::Halt {
        break;
      }
    }
  }
  Ok(())
}
