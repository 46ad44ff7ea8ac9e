//! Point shape

use crate::foundation::math::{Ray2, Rect, Transform2, Vec2, EPSILON};
use crate::shapes::{Circle, Segment};

/// A single point
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Location of the point
    pub location: Vec2,
    bounds: Rect,
}

impl Point {
    /// Create a point at the given location
    pub fn new(location: Vec2) -> Self {
        let mut shape = Self {
            location,
            bounds: Rect::default(),
        };
        shape.update_bounds();
        shape
    }

    /// Recompute the cached bounds from the current location
    pub fn update_bounds(&mut self) {
        self.bounds = Rect::new(self.location, self.location);
    }

    /// Cached bounds (valid after the last `update_bounds`)
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Geometric center
    pub fn center(&self) -> Vec2 {
        self.location
    }

    /// Point with the location run through `transform`
    pub fn transformed(&self, transform: &Transform2) -> Self {
        Self::new(transform.transform_point(self.location))
    }

    /// The point swept along `translation` becomes a segment
    pub fn swept(&self, translation: Vec2) -> Segment {
        Segment::new(self.location, self.location + translation)
    }

    /// The point grown by `amount` becomes a circle (disk Minkowski sum)
    pub fn expanded(&self, amount: f32) -> Circle {
        Circle::new(self.location, amount)
    }

    /// The point viewed as a zero-radius circle
    ///
    /// Lets point penetration queries reuse the circle kernels.
    pub fn as_circle(&self) -> Circle {
        Circle::new(self.location, 0.0)
    }

    /// Whether this point and `other` coincide (within tolerance)
    pub fn coincident(&self, other: &Point) -> bool {
        (self.location - other.location).norm_squared() <= EPSILON * EPSILON
    }

    /// Point on the ray, if the ray passes through this point
    pub fn ray_intersection(&self, ray: &Ray2) -> Option<Vec2> {
        let to_point = self.location - ray.origin;
        let t = to_point.dot(&ray.direction);
        if t < 0.0 {
            return None;
        }
        let off_axis = to_point - ray.direction * t;
        if off_axis.norm_squared() <= EPSILON * EPSILON {
            Some(self.location)
        } else {
            None
        }
    }
}
