use geo::{Coordinate, LineString, Rect};

use rand::Rng;
use rand_distr::{Normal, Standard};

#[inline]
pub fn uniform_point<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Coordinate<f64> {
    let coords: [f64; 2] = rng.sample(Standard);
    let dims = bounds.max() - bounds.min();
    Coordinate {
        x: bounds.min().x + dims.x * coords[0],
        y: bounds.min().y + dims.y * coords[1],
    }
}

/// A random walk of `num_points` vertices starting at a uniform point
/// in `bounds`, with normally distributed steps of deviation `step`.
pub fn random_street<R: Rng>(
    rng: &mut R,
    bounds: Rect<f64>,
    num_points: usize,
    step: f64,
) -> LineString<f64> {
    let normal = Normal::new(0., step).expect("step must be finite and positive");
    let mut curr = uniform_point(rng, bounds);
    let mut coords = Vec::with_capacity(num_points);
    for _ in 0..num_points {
        coords.push(curr);
        curr = curr + Coordinate {
            x: rng.sample(normal),
            y: rng.sample(normal),
        };
    }
    coords.into()
}
