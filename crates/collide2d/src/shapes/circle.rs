//! Circle shape

use crate::foundation::math::{
    segment_point_distance, Ray2, Rect, Transform2, Vec2, EPSILON,
};
use crate::shapes::Capsule;

/// A circle described by center and radius
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Center of the circle
    pub center: Vec2,
    /// Radius (non-negative)
    pub radius: f32,
    bounds: Rect,
}

impl Circle {
    /// Create a circle with the given center and radius
    pub fn new(center: Vec2, radius: f32) -> Self {
        let mut shape = Self {
            center,
            radius,
            bounds: Rect::default(),
        };
        shape.update_bounds();
        shape
    }

    /// Recompute the cached bounds from the current center and radius
    pub fn update_bounds(&mut self) {
        self.bounds = Rect::from_center_extents(self.center, Vec2::new(self.radius, self.radius));
    }

    /// Cached bounds (valid after the last `update_bounds`)
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Circle with the center transformed and the radius scaled by the
    /// transform's approximate uniform scale factor
    pub fn transformed(&self, transform: &Transform2) -> Self {
        Self::new(
            transform.transform_point(self.center),
            self.radius * transform.uniform_scale(),
        )
    }

    /// Circle grown by `amount` (exact disk Minkowski sum)
    pub fn expanded(&self, amount: f32) -> Self {
        Self::new(self.center, self.radius + amount)
    }

    /// The circle swept along `translation` becomes a capsule
    pub fn swept(&self, translation: Vec2) -> Capsule {
        Capsule::new(self.center, self.center + translation, self.radius)
    }

    /// Whether `point` lies inside or on the circle
    pub fn contains_point(&self, point: Vec2) -> bool {
        (point - self.center).norm_squared() <= self.radius * self.radius
    }

    /// Whether this circle intersects `other`
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        let combined = self.radius + other.radius;
        (other.center - self.center).norm_squared() <= combined * combined
    }

    /// Whether the circle comes within its radius of the segment `a`-`b`
    pub fn intersects_segment_points(&self, a: Vec2, b: Vec2) -> bool {
        segment_point_distance(a, b, self.center) <= self.radius
    }

    /// Minimum translation to push `other` out of this circle
    ///
    /// Directed along the center-to-center vector with magnitude
    /// `(r1 + r2) / distance - 1` times that vector; coincident centers have
    /// no meaningful direction and yield the zero vector.
    pub fn penetration_circle(&self, other: &Circle) -> Vec2 {
        let offset = other.center - self.center;
        let distance = offset.norm();
        let combined = self.radius + other.radius;
        if distance > combined || distance < EPSILON {
            return Vec2::zeros();
        }
        offset * (combined / distance - 1.0)
    }

    /// Closest point on or inside the circle to `point`
    pub fn nearest_point(&self, point: Vec2) -> Vec2 {
        let offset = point - self.center;
        let distance = offset.norm();
        if distance <= self.radius {
            point
        } else {
            self.center + offset * (self.radius / distance)
        }
    }

    /// Nearest hit point of the ray against the circle
    pub fn ray_intersection(&self, ray: &Ray2) -> Option<Vec2> {
        // Quadratic formula for |origin + t * direction - center|^2 = r^2
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(&ray.direction);
        let b = 2.0 * oc.dot(&ray.direction);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let t1 = (-b - sqrt_discriminant) / (2.0 * a);
        let t2 = (-b + sqrt_discriminant) / (2.0 * a);

        // Use the closest non-negative intersection
        let t = if t1 >= 0.0 {
            t1
        } else if t2 >= 0.0 {
            t2
        } else {
            return None;
        };
        Some(ray.point_at(t))
    }
}
