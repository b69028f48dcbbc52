//! Path encoding
//!
//! A candidate solution is an ordered sequence of 3D waypoints. Order is the
//! traversal order of the path, endpoints included.

use std::ops::Index;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::genome::bounds::SamplingBounds;
use crate::genome::point::Point3D;

/// An ordered sequence of waypoints forming one candidate path
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathEncoding {
    points: Vec<Point3D>,
}

impl PathEncoding {
    /// Create a path from explicit waypoints
    pub fn from_points(points: Vec<Point3D>) -> Self {
        Self { points }
    }

    /// Create a path of `len` independently drawn random points
    pub fn random<R: Rng>(len: usize, bounds: &SamplingBounds, rng: &mut R) -> Self {
        let points = (0..len).map(|_| bounds.sample(rng)).collect();
        Self { points }
    }

    /// Number of waypoints
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path has no waypoints
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The waypoints in traversal order
    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    /// Get a waypoint by index
    pub fn get(&self, index: usize) -> Option<&Point3D> {
        self.points.get(index)
    }

    /// Replace the waypoint at `index`, returning the old one
    ///
    /// # Panics
    /// Panics if `index` is out of range
    pub fn replace_point(&mut self, index: usize, point: Point3D) -> Point3D {
        std::mem::replace(&mut self.points[index], point)
    }

    /// Iterate over consecutive waypoint pairs
    pub fn segments(&self) -> impl Iterator<Item = (&Point3D, &Point3D)> {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Total Euclidean length over all segments
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }

    /// Take the waypoints out of this path
    pub fn into_points(self) -> Vec<Point3D> {
        self.points
    }
}

impl Index<usize> for PathEncoding {
    type Output = Point3D;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl FromIterator<Point3D> for PathEncoding {
    fn from_iter<I: IntoIterator<Item = Point3D>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::bounds::Bounds;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_path_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = SamplingBounds::default();
        for len in [2, 3, 10, 25] {
            let path = PathEncoding::random(len, &bounds, &mut rng);
            assert_eq!(path.len(), len);
        }
    }

    #[test]
    fn test_random_path_points_within_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = SamplingBounds::cube(Bounds::new(-2.0, 2.0));
        let path = PathEncoding::random(50, &bounds, &mut rng);
        assert!(path.points().iter().all(|p| bounds.contains(p)));
    }

    #[test]
    fn test_length_sums_segments() {
        let path = PathEncoding::from_points(vec![
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(3.0, 4.0, 0.0),
            Point3D::new(3.0, 4.0, 12.0),
        ]);
        assert_eq!(path.segments().count(), 2);
        assert_relative_eq!(path.length(), 17.0);
    }

    #[test]
    fn test_length_of_single_point_is_zero() {
        let path = PathEncoding::from_points(vec![Point3D::new(1.0, 1.0, 1.0)]);
        assert_eq!(path.length(), 0.0);
    }

    #[test]
    fn test_replace_point() {
        let mut path: PathEncoding = vec![Point3D::origin(), Point3D::new(1.0, 0.0, 0.0)]
            .into_iter()
            .collect();
        let old = path.replace_point(1, Point3D::new(0.0, 2.0, 0.0));
        assert_eq!(old, Point3D::new(1.0, 0.0, 0.0));
        assert_eq!(path[1], Point3D::new(0.0, 2.0, 0.0));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_serializes_as_point_list() {
        let path = PathEncoding::from_points(vec![Point3D::origin()]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"[{"x":0.0,"y":0.0,"z":0.0}]"#);
    }
}
