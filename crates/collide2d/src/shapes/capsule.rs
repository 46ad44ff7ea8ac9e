//! Capsule shape (a segment spine with a radius)

use crate::foundation::math::{
    nearest_point_on_segment, segment_point_distance, segment_segment_distance, Ray2, Rect,
    Transform2, Vec2, EPSILON,
};
use crate::shapes::{Circle, Segment};

/// A capsule: every point within `radius` of the spine segment
///
/// Degenerates to a circle when `start == end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Capsule {
    /// Spine start endpoint
    pub start: Vec2,
    /// Spine end endpoint
    pub end: Vec2,
    /// Radius around the spine (non-negative)
    pub radius: f32,
    bounds: Rect,
}

impl Capsule {
    /// Create a capsule from a spine segment and radius
    pub fn new(start: Vec2, end: Vec2, radius: f32) -> Self {
        let mut shape = Self {
            start,
            end,
            radius,
            bounds: Rect::default(),
        };
        shape.update_bounds();
        shape
    }

    /// Recompute the cached bounds from the current spine and radius
    pub fn update_bounds(&mut self) {
        self.bounds = Rect::enclosing(&[self.start, self.end]).expanded(self.radius);
    }

    /// Cached bounds (valid after the last `update_bounds`)
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Geometric center (spine midpoint)
    pub fn center(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    /// The spine endpoints as a vertex list
    pub(crate) fn spine(&self) -> [Vec2; 2] {
        [self.start, self.end]
    }

    /// Capsule with the spine transformed and the radius scaled by the
    /// transform's approximate uniform scale factor
    pub fn transformed(&self, transform: &Transform2) -> Self {
        Self::new(
            transform.transform_point(self.start),
            transform.transform_point(self.end),
            self.radius * transform.uniform_scale(),
        )
    }

    /// Capsule grown by `amount` (exact disk Minkowski sum)
    pub fn expanded(&self, amount: f32) -> Self {
        Self::new(self.start, self.end, self.radius + amount)
    }

    /// Whether `point` lies inside or on the capsule
    pub fn contains_point(&self, point: Vec2) -> bool {
        segment_point_distance(self.start, self.end, point) <= self.radius
    }

    /// Whether this capsule intersects `circle`
    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        segment_point_distance(self.start, self.end, circle.center)
            <= self.radius + circle.radius
    }

    /// Whether the capsule comes within its radius of the segment `a`-`b`
    pub fn intersects_segment_points(&self, a: Vec2, b: Vec2) -> bool {
        segment_segment_distance(self.start, self.end, a, b) <= self.radius
    }

    /// Whether this capsule intersects `segment`
    pub fn intersects_segment(&self, segment: &Segment) -> bool {
        self.intersects_segment_points(segment.start, segment.end)
    }

    /// Whether this capsule intersects `other`
    pub fn intersects_capsule(&self, other: &Capsule) -> bool {
        segment_segment_distance(self.start, self.end, other.start, other.end)
            <= self.radius + other.radius
    }

    /// Minimum translation to push `circle` out of this capsule
    ///
    /// Reduces to the circle-circle case against the nearest spine point;
    /// a center on the spine has no meaningful direction and yields zero.
    pub fn penetration_circle(&self, circle: &Circle) -> Vec2 {
        let nearest = nearest_point_on_segment(self.start, self.end, circle.center);
        let offset = circle.center - nearest;
        let distance = offset.norm();
        let combined = self.radius + circle.radius;
        if distance > combined || distance < EPSILON {
            return Vec2::zeros();
        }
        offset * (combined / distance - 1.0)
    }

    /// Closest point on or inside the capsule to `point`
    pub fn nearest_point(&self, point: Vec2) -> Vec2 {
        let on_spine = nearest_point_on_segment(self.start, self.end, point);
        let offset = point - on_spine;
        let distance = offset.norm();
        if distance <= self.radius {
            point
        } else {
            on_spine + offset * (self.radius / distance)
        }
    }

    /// Nearest hit point of the ray against the capsule boundary
    ///
    /// Tests the two hemispherical caps and the two flank segments and keeps
    /// the hit closest to the ray origin.
    pub fn ray_intersection(&self, ray: &Ray2) -> Option<Vec2> {
        let spine = self.end - self.start;
        let spine_length = spine.norm();

        let mut best: Option<Vec2> = None;
        let mut best_distance = f32::MAX;
        let mut consider = |hit: Option<Vec2>| {
            if let Some(point) = hit {
                let distance = (point - ray.origin).norm_squared();
                if distance < best_distance {
                    best_distance = distance;
                    best = Some(point);
                }
            }
        };

        consider(Circle::new(self.start, self.radius).ray_intersection(ray));
        if spine_length >= EPSILON {
            consider(Circle::new(self.end, self.radius).ray_intersection(ray));
            let flank = (spine / spine_length) * self.radius;
            let perp = Vec2::new(-flank.y, flank.x);
            consider(
                ray.intersect_segment(self.start + perp, self.end + perp)
                    .map(|t| ray.point_at(t)),
            );
            consider(
                ray.intersect_segment(self.start - perp, self.end - perp)
                    .map(|t| ray.point_at(t)),
            );
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_point_containment() {
        let capsule = Capsule::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), 0.5);
        // Perpendicular distance 0.3 is inside the 0.5 radius
        assert!(capsule.contains_point(Vec2::new(1.0, 0.3)));
        assert!(!capsule.contains_point(Vec2::new(1.0, 0.6)));
        // The hemispherical caps count too
        assert!(capsule.contains_point(Vec2::new(-0.4, 0.0)));
        assert!(!capsule.contains_point(Vec2::new(-0.6, 0.0)));
    }

    #[test]
    fn test_degenerate_capsule_is_a_circle() {
        let capsule = Capsule::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0), 1.0);
        let circle = Circle::new(Vec2::new(2.5, 1.0), 0.6);
        assert!(capsule.intersects_circle(&circle));
        let push = capsule.penetration_circle(&circle);
        assert_relative_eq!(push.x, 0.1, epsilon = EPS);
        assert_relative_eq!(push.y, 0.0, epsilon = EPS);
    }

    #[test]
    fn test_parallel_capsules() {
        let a = Capsule::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), 0.5);
        let touching = Capsule::new(Vec2::new(0.0, 0.9), Vec2::new(4.0, 0.9), 0.5);
        let apart = Capsule::new(Vec2::new(0.0, 1.1), Vec2::new(4.0, 1.1), 0.5);
        assert!(a.intersects_capsule(&touching));
        assert!(!a.intersects_capsule(&apart));
    }

    #[test]
    fn test_crossing_capsules() {
        let a = Capsule::new(Vec2::new(-2.0, 0.0), Vec2::new(2.0, 0.0), 0.25);
        let b = Capsule::new(Vec2::new(0.0, -2.0), Vec2::new(0.0, 2.0), 0.25);
        assert!(a.intersects_capsule(&b));
    }

    #[test]
    fn test_ray_hits_flank() {
        let capsule = Capsule::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), 1.0);
        let ray = Ray2::new(Vec2::new(2.0, 3.0), Vec2::new(0.0, -1.0));
        let hit = capsule.ray_intersection(&ray).unwrap();
        assert_relative_eq!(hit.x, 2.0, epsilon = EPS);
        assert_relative_eq!(hit.y, 1.0, epsilon = EPS);
    }

    #[test]
    fn test_ray_hits_cap() {
        let capsule = Capsule::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), 1.0);
        let ray = Ray2::new(Vec2::new(-3.0, 0.0), Vec2::new(1.0, 0.0));
        let hit = capsule.ray_intersection(&ray).unwrap();
        assert_relative_eq!(hit.x, -1.0, epsilon = EPS);
        assert_relative_eq!(hit.y, 0.0, epsilon = EPS);
    }

    #[test]
    fn test_nearest_point_projects_onto_boundary() {
        let capsule = Capsule::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), 0.5);
        let nearest = capsule.nearest_point(Vec2::new(1.0, 2.0));
        assert_relative_eq!(nearest.x, 1.0, epsilon = EPS);
        assert_relative_eq!(nearest.y, 0.5, epsilon = EPS);
        // Contained query points come back unchanged
        assert_eq!(capsule.nearest_point(Vec2::new(1.0, 0.2)), Vec2::new(1.0, 0.2));
    }
}
