//! Math utilities and types
//!
//! Provides the fundamental 2D math types for the collision kernel.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Tolerance used by the epsilon-tolerant degenerate-case branches
pub const EPSILON: f32 = 1e-6;

/// 2D cross product (z component of the 3D cross of the embedded vectors)
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Closest point to `point` on the segment from `a` to `b`
///
/// Clamps the projection parameter to `[0, 1]`; a zero-length segment
/// degenerates to `a`.
pub fn nearest_point_on_segment(a: Vec2, b: Vec2, point: Vec2) -> Vec2 {
    let edge = b - a;
    let length_squared = edge.norm_squared();
    if length_squared < EPSILON * EPSILON {
        return a;
    }
    let t = ((point - a).dot(&edge) / length_squared).clamp(0.0, 1.0);
    a + edge * t
}

/// Distance from `point` to the segment from `a` to `b`
pub fn segment_point_distance(a: Vec2, b: Vec2, point: Vec2) -> f32 {
    (point - nearest_point_on_segment(a, b, point)).norm()
}

/// Whether `point` lies on the segment from `a` to `b` (within tolerance)
pub fn point_on_segment(point: Vec2, a: Vec2, b: Vec2) -> bool {
    let nearest = nearest_point_on_segment(a, b, point);
    (point - nearest).norm_squared() <= EPSILON * EPSILON
}

/// Whether the two segments `a1`-`a2` and `b1`-`b2` intersect
///
/// Parametric line intersection; a near-zero cross product (parallel or
/// zero-length input) falls back to three point-containment checks.
pub fn segments_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let da = a2 - a1;
    let db = b2 - b1;
    let denom = cross(da, db);
    if denom.abs() < EPSILON {
        // Degenerate: only collinear overlap can intersect
        return point_on_segment(b1, a1, a2)
            || point_on_segment(b2, a1, a2)
            || point_on_segment(a1, b1, b2);
    }
    let w = b1 - a1;
    let t = cross(w, db) / denom;
    let u = cross(w, da) / denom;
    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// Shortest distance between the two segments `a1`-`a2` and `b1`-`b2`
pub fn segment_segment_distance(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> f32 {
    if segments_intersect(a1, a2, b1, b2) {
        return 0.0;
    }
    segment_point_distance(b1, b2, a1)
        .min(segment_point_distance(b1, b2, a2))
        .min(segment_point_distance(a1, a2, b1))
        .min(segment_point_distance(a1, a2, b2))
}

/// Axis-aligned rectangle defined by its minimum and maximum corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum corner
    pub min: Vec2,
    /// Maximum corner
    pub max: Vec2,
}

impl Default for Rect {
    fn default() -> Self {
        Self {
            min: Vec2::zeros(),
            max: Vec2::zeros(),
        }
    }
}

impl Rect {
    /// Create a new rectangle from min and max corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a rectangle centered at a point with given half-extents
    pub fn from_center_extents(center: Vec2, extents: Vec2) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Smallest rectangle enclosing all the given points
    ///
    /// An empty slice yields the zero rectangle.
    pub fn enclosing(points: &[Vec2]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        let mut rect = Self::new(*first, *first);
        for point in &points[1..] {
            rect.min.x = rect.min.x.min(point.x);
            rect.min.y = rect.min.y.min(point.y);
            rect.max.x = rect.max.x.max(point.x);
            rect.max.y = rect.max.y.max(point.y);
        }
        rect
    }

    /// The maximal rectangle (covers the entire representable plane)
    pub fn maximal() -> Self {
        Self {
            min: Vec2::new(f32::MIN, f32::MIN),
            max: Vec2::new(f32::MAX, f32::MAX),
        }
    }

    /// Get the center of the rectangle
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Get the half-size of the rectangle
    pub fn extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Check if this rectangle contains a point
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Check if this rectangle fully contains another rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
    }

    /// Check if this rectangle intersects another rectangle
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Smallest rectangle containing both rectangles
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min: Vec2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vec2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Rectangle grown outward by `amount` on every side
    pub fn expanded(&self, amount: f32) -> Rect {
        let delta = Vec2::new(amount, amount);
        Rect {
            min: self.min - delta,
            max: self.max + delta,
        }
    }

    /// The four corners in counter-clockwise order starting at `min`
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }

    /// Closest point to `point` inside or on the rectangle
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
        )
    }
}

/// Transform representing position, rotation, and scale in 2D
#[derive(Debug, Clone, PartialEq)]
pub struct Transform2 {
    /// Translation
    pub position: Vec2,
    /// Rotation angle in radians (counter-clockwise)
    pub rotation: f32,
    /// Per-axis scale factors
    pub scale: Vec2,
}

impl Default for Transform2 {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl Transform2 {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec2, rotation: f32) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Apply this transform to a point (scale, then rotate, then translate)
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        let scaled = Vec2::new(point.x * self.scale.x, point.y * self.scale.y);
        let (sin, cos) = self.rotation.sin_cos();
        let rotated = Vec2::new(
            scaled.x * cos - scaled.y * sin,
            scaled.x * sin + scaled.y * cos,
        );
        self.position + rotated
    }

    /// Approximate uniform scale factor, used to scale radius fields
    ///
    /// Average of the absolute per-axis scales; exact when the scale is
    /// uniform, an approximation otherwise.
    pub fn uniform_scale(&self) -> f32 {
        (self.scale.x.abs() + self.scale.y.abs()) * 0.5
    }
}

/// A ray for ray casting queries
#[derive(Debug, Clone, Copy)]
pub struct Ray2 {
    /// The origin point of the ray
    pub origin: Vec2,
    /// The direction of the ray (should be normalized)
    pub direction: Vec2,
}

impl Ray2 {
    /// Creates a new ray with the given origin and direction
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the segment `a`-`b`, if hit
    ///
    /// Rays parallel to the segment report no hit.
    pub fn intersect_segment(&self, a: Vec2, b: Vec2) -> Option<f32> {
        let edge = b - a;
        let denom = cross(self.direction, edge);
        if denom.abs() < EPSILON {
            return None;
        }
        let w = a - self.origin;
        let t = cross(w, edge) / denom;
        let u = cross(w, self.direction) / denom;
        if t >= 0.0 && (0.0..=1.0).contains(&u) {
            Some(t)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_rect_containment_and_overlap() {
        let rect = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 1.0));

        assert!(rect.contains_point(Vec2::new(1.0, 0.5)));
        assert!(rect.contains_point(Vec2::new(0.0, 0.0)));
        assert!(!rect.contains_point(Vec2::new(2.1, 0.5)));

        let overlapping = Rect::new(Vec2::new(1.5, 0.5), Vec2::new(3.0, 2.0));
        let disjoint = Rect::new(Vec2::new(3.0, 3.0), Vec2::new(4.0, 4.0));
        assert!(rect.intersects(&overlapping));
        assert!(!rect.intersects(&disjoint));

        let inner = Rect::new(Vec2::new(0.5, 0.25), Vec2::new(1.5, 0.75));
        assert!(rect.contains_rect(&inner));
        assert!(!inner.contains_rect(&rect));
    }

    #[test]
    fn test_rect_union_and_enclosing() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let b = Rect::new(Vec2::new(2.0, -1.0), Vec2::new(3.0, 0.5));
        let union = a.union(&b);
        assert_eq!(union.min, Vec2::new(0.0, -1.0));
        assert_eq!(union.max, Vec2::new(3.0, 1.0));

        let points = [
            Vec2::new(1.0, 2.0),
            Vec2::new(-1.0, 0.5),
            Vec2::new(0.0, 3.0),
        ];
        let enclosing = Rect::enclosing(&points);
        assert_eq!(enclosing.min, Vec2::new(-1.0, 0.5));
        assert_eq!(enclosing.max, Vec2::new(1.0, 3.0));
    }

    #[test]
    fn test_transform_point() {
        let transform = Transform2 {
            position: Vec2::new(1.0, 2.0),
            rotation: std::f32::consts::FRAC_PI_2,
            scale: Vec2::new(2.0, 2.0),
        };
        // (1, 0) scaled to (2, 0), rotated 90 degrees to (0, 2), translated
        let result = transform.transform_point(Vec2::new(1.0, 0.0));
        assert_relative_eq!(result.x, 1.0, epsilon = EPS);
        assert_relative_eq!(result.y, 4.0, epsilon = EPS);
        assert_relative_eq!(transform.uniform_scale(), 2.0, epsilon = EPS);
    }

    #[test]
    fn test_nearest_point_on_segment_clamps() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(2.0, 0.0);

        let mid = nearest_point_on_segment(a, b, Vec2::new(1.0, 1.0));
        assert_relative_eq!(mid.x, 1.0, epsilon = EPS);
        assert_relative_eq!(mid.y, 0.0, epsilon = EPS);

        let clamped = nearest_point_on_segment(a, b, Vec2::new(5.0, 1.0));
        assert_eq!(clamped, b);

        // Zero-length segment degenerates to its start
        assert_eq!(nearest_point_on_segment(a, a, Vec2::new(3.0, 3.0)), a);
    }

    #[test]
    fn test_segments_intersect() {
        let a1 = Vec2::new(0.0, 0.0);
        let a2 = Vec2::new(2.0, 2.0);
        assert!(segments_intersect(
            a1,
            a2,
            Vec2::new(0.0, 2.0),
            Vec2::new(2.0, 0.0)
        ));
        assert!(!segments_intersect(
            a1,
            a2,
            Vec2::new(3.0, 0.0),
            Vec2::new(4.0, 1.0)
        ));
        // Parallel but collinear and overlapping
        assert!(segments_intersect(
            a1,
            a2,
            Vec2::new(1.0, 1.0),
            Vec2::new(3.0, 3.0)
        ));
        // Parallel, offset
        assert!(!segments_intersect(
            a1,
            a2,
            Vec2::new(0.0, 1.0),
            Vec2::new(2.0, 3.0)
        ));
    }

    #[test]
    fn test_ray_segment_intersection() {
        let ray = Ray2::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let t = ray
            .intersect_segment(Vec2::new(2.0, -1.0), Vec2::new(2.0, 1.0))
            .unwrap();
        assert_relative_eq!(t, 2.0, epsilon = EPS);

        // Segment behind the ray origin
        assert!(ray
            .intersect_segment(Vec2::new(-2.0, -1.0), Vec2::new(-2.0, 1.0))
            .is_none());
        // Parallel segment
        assert!(ray
            .intersect_segment(Vec2::new(0.0, 1.0), Vec2::new(5.0, 1.0))
            .is_none());
    }
}
