//! Line segment shape

use crate::foundation::math::{
    cross, nearest_point_on_segment, point_on_segment, segments_intersect, Ray2, Rect, Transform2,
    Vec2, EPSILON,
};
use crate::shapes::{Capsule, Circle, Polygon, Shape};

/// A line segment between two endpoints
///
/// May be zero-length, in which case it degenerates to a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Start endpoint
    pub start: Vec2,
    /// End endpoint
    pub end: Vec2,
    bounds: Rect,
}

impl Segment {
    /// Create a segment between two endpoints
    pub fn new(start: Vec2, end: Vec2) -> Self {
        let mut shape = Self {
            start,
            end,
            bounds: Rect::default(),
        };
        shape.update_bounds();
        shape
    }

    /// Recompute the cached bounds from the current endpoints
    pub fn update_bounds(&mut self) {
        self.bounds = Rect::enclosing(&[self.start, self.end]);
    }

    /// Cached bounds (valid after the last `update_bounds`)
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Geometric center (midpoint)
    pub fn center(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    /// Segment with both endpoints run through `transform`
    pub fn transformed(&self, transform: &Transform2) -> Self {
        Self::new(
            transform.transform_point(self.start),
            transform.transform_point(self.end),
        )
    }

    /// The segment grown by `amount` becomes a capsule (disk Minkowski sum)
    pub fn expanded(&self, amount: f32) -> Capsule {
        Capsule::new(self.start, self.end, amount)
    }

    /// The segment swept along `translation`
    ///
    /// Produces the covered quadrilateral with counter-clockwise winding;
    /// the vertex order depends on the sign of the cross product between the
    /// segment direction and the translation. A translation parallel to the
    /// segment covers no area and degrades to the extreme segment along the
    /// shared line.
    pub fn swept(&self, translation: Vec2) -> Shape {
        let direction = self.end - self.start;
        let turn = cross(direction, translation);
        if turn > EPSILON {
            Shape::Polygon(Polygon::new(vec![
                self.start,
                self.end,
                self.end + translation,
                self.start + translation,
            ]))
        } else if turn < -EPSILON {
            Shape::Polygon(Polygon::new(vec![
                self.end,
                self.start,
                self.start + translation,
                self.end + translation,
            ]))
        } else {
            // Parallel sweep: keep the extreme points along the shared line
            if direction.norm_squared() < EPSILON * EPSILON {
                return Shape::Segment(Segment::new(self.start, self.start + translation));
            }
            let candidates = [
                self.start,
                self.end,
                self.start + translation,
                self.end + translation,
            ];
            let mut lo = candidates[0];
            let mut hi = candidates[0];
            let mut lo_t = f32::MAX;
            let mut hi_t = f32::MIN;
            for point in candidates {
                let t = (point - self.start).dot(&direction);
                if t < lo_t {
                    lo_t = t;
                    lo = point;
                }
                if t > hi_t {
                    hi_t = t;
                    hi = point;
                }
            }
            Shape::Segment(Segment::new(lo, hi))
        }
    }

    /// Whether `point` lies on the segment (within tolerance)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point_on_segment(point, self.start, self.end)
    }

    /// Whether this segment intersects `other`
    pub fn intersects_segment(&self, other: &Segment) -> bool {
        segments_intersect(self.start, self.end, other.start, other.end)
    }

    /// Closest point on the segment to `point`
    pub fn nearest_point(&self, point: Vec2) -> Vec2 {
        nearest_point_on_segment(self.start, self.end, point)
    }

    /// Minimum translation to push `circle` off this segment
    ///
    /// Zero when they do not overlap, and zero when the circle center lies
    /// exactly on the segment (ambiguous direction).
    pub fn penetration_circle(&self, circle: &Circle) -> Vec2 {
        let nearest = self.nearest_point(circle.center);
        let offset = circle.center - nearest;
        let distance = offset.norm();
        if distance >= circle.radius || distance < EPSILON {
            return Vec2::zeros();
        }
        offset * ((circle.radius - distance) / distance)
    }

    /// Nearest hit point of the ray against the segment
    pub fn ray_intersection(&self, ray: &Ray2) -> Option<Vec2> {
        ray.intersect_segment(self.start, self.end)
            .map(|t| ray.point_at(t))
    }
}
