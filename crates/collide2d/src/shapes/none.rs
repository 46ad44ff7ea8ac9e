//! Zero-extent placeholder shape
//!
//! `NoneShape` participates in bounds and center queries like a point but
//! never intersects or penetrates anything; it stands in where an element
//! needs a shape slot without taking part in collision.

use crate::foundation::math::{Rect, Transform2, Vec2};

/// Zero-extent, non-colliding point-like placeholder
#[derive(Debug, Clone, PartialEq)]
pub struct NoneShape {
    /// Location of the placeholder
    pub location: Vec2,
    bounds: Rect,
}

impl NoneShape {
    /// Create a placeholder at the given location
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

    /// Placeholder with the location run through `transform`
    pub fn transformed(&self, transform: &Transform2) -> Self {
        Self::new(transform.transform_point(self.location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_zero_extent() {
        let shape = NoneShape::new(Vec2::new(3.0, -1.0));
        assert_eq!(shape.bounds().min, shape.bounds().max);
        assert_eq!(shape.center(), Vec2::new(3.0, -1.0));
    }
}
