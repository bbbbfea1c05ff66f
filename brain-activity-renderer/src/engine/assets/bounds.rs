use bevy::prelude::*;

/// Axis-aligned bounds of a point set, folded one sample at a time.
///
/// Starts inverted (min at +inf, max at -inf) so that the first sample
/// defines both corners. An empty box stays inverted and must not be used
/// for centring or registration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// Create new bounds initialised to infinity values
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Self {
        let mut bounds = Self::empty();
        for point in points {
            bounds.include(*point);
        }
        bounds
    }

    /// Update bounds with a new point
    pub fn include(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// True until at least one point has been folded in.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Midpoint of the box, the pivot for both mesh orientation corrections.
    pub fn centre(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent per axis. Zero on a degenerate axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Vec3> {
        vec![
            Vec3::new(1.0, -2.0, 3.5),
            Vec3::new(-4.0, 0.5, 2.0),
            Vec3::new(0.0, 7.0, -1.0),
            Vec3::new(2.5, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_empty_box_is_inverted() {
        let bounds = BoundingBox::empty();
        assert!(bounds.is_empty());
        assert_eq!(bounds.min, Vec3::splat(f32::INFINITY));
        assert_eq!(bounds.max, Vec3::splat(f32::NEG_INFINITY));
    }

    #[test]
    fn test_bounds_enclose_every_point() {
        let points = sample_points();
        let bounds = BoundingBox::from_points(&points);

        assert!(!bounds.is_empty());
        for point in &points {
            assert!(bounds.contains(*point), "{point} outside {bounds:?}");
        }
    }

    #[test]
    fn test_bounds_are_tight_on_every_axis() {
        let points = sample_points();
        let bounds = BoundingBox::from_points(&points);

        for axis in 0..3 {
            assert!(points.iter().any(|p| p[axis] == bounds.min[axis]));
            assert!(points.iter().any(|p| p[axis] == bounds.max[axis]));
        }
        assert_eq!(bounds.min, Vec3::new(-4.0, -2.0, -1.0));
        assert_eq!(bounds.max, Vec3::new(2.5, 7.0, 3.5));
    }

    #[test]
    fn test_single_point_gives_degenerate_box() {
        let bounds = BoundingBox::from_points(&[Vec3::new(1.0, 2.0, 3.0)]);
        assert!(!bounds.is_empty());
        assert_eq!(bounds.size(), Vec3::ZERO);
        assert_eq!(bounds.centre(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_centre_and_size() {
        let bounds = BoundingBox::new(Vec3::ZERO, Vec3::new(10.0, 4.0, 2.0));
        assert_eq!(bounds.centre(), Vec3::new(5.0, 2.0, 1.0));
        assert_eq!(bounds.size(), Vec3::new(10.0, 4.0, 2.0));
    }
}
