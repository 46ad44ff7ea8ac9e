//! Convex polygon shape
//!
//! Polygons are assumed convex with counter-clockwise winding; edge
//! half-planes are derived from the vertex list, not stored. Violating the
//! convexity precondition is undefined behavior for the pairwise queries,
//! not a reported error.

use crate::foundation::math::{
    nearest_point_on_segment, segment_segment_distance, segments_intersect, Ray2, Rect,
    Transform2, Vec2, EPSILON,
};
use crate::shapes::{Capsule, Circle, IntersectionType, Segment};

/// A convex polygon with counter-clockwise vertex winding
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Ordered vertex list (at least one vertex, convex, counter-clockwise)
    pub vertices: Vec<Vec2>,
    bounds: Rect,
}

/// Where a circle center sits relative to a convex polygon
enum CircleRegion {
    /// Center outside; carries the nearest boundary feature point
    Outside(Vec2),
    /// Center interior; carries the nearest edge's outward unit normal and
    /// the center's distance to that edge line
    Inside(Vec2, f32),
}

impl Polygon {
    /// Create a polygon from its counter-clockwise vertex list
    pub fn new(vertices: Vec<Vec2>) -> Self {
        let mut shape = Self {
            vertices,
            bounds: Rect::default(),
        };
        shape.update_bounds();
        shape
    }

    /// Recompute the cached bounds from the current vertices
    pub fn update_bounds(&mut self) {
        self.bounds = Rect::enclosing(&self.vertices);
    }

    /// Cached bounds (valid after the last `update_bounds`)
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Geometric centroid (arithmetic mean of the vertices)
    pub fn center(&self) -> Vec2 {
        let mut sum = Vec2::zeros();
        for vertex in &self.vertices {
            sum += vertex;
        }
        sum / self.vertices.len().max(1) as f32
    }

    /// The hull view used by the Minkowski-difference penetration engine
    pub(crate) fn hull(&self) -> Hull<'_> {
        Hull {
            verts: &self.vertices,
            radius: 0.0,
        }
    }

    /// Polygon with every vertex run through `transform`
    pub fn transformed(&self, transform: &Transform2) -> Self {
        let mut result = Self {
            vertices: Vec::with_capacity(self.vertices.len()),
            bounds: Rect::default(),
        };
        self.transform_to(transform, &mut result);
        result
    }

    /// Transform into an existing polygon, reusing its vertex storage
    pub fn transform_to(&self, transform: &Transform2, out: &mut Polygon) {
        out.vertices.clear();
        out.vertices
            .extend(self.vertices.iter().map(|v| transform.transform_point(*v)));
        out.update_bounds();
    }

    /// Polygon grown by `amount`
    ///
    /// Each vertex is offset along the normalized bisector of its two
    /// adjacent edge normals. This does not round corners and is therefore
    /// not an exact disk Minkowski sum; the faceted result is intentional.
    pub fn expanded(&self, amount: f32) -> Self {
        let mut result = Self {
            vertices: Vec::with_capacity(self.vertices.len()),
            bounds: Rect::default(),
        };
        self.expand_to(amount, &mut result);
        result
    }

    /// Grow into an existing polygon, reusing its vertex storage
    pub fn expand_to(&self, amount: f32, out: &mut Polygon) {
        let n = self.vertices.len();
        out.vertices.clear();
        if n < 3 {
            out.vertices.extend_from_slice(&self.vertices);
            out.update_bounds();
            return;
        }
        let outward = |i: usize| -> Vec2 {
            let d = self.vertices[(i + 1) % n] - self.vertices[i];
            let normal = Vec2::new(d.y, -d.x);
            let length = normal.norm();
            if length < EPSILON {
                Vec2::zeros()
            } else {
                normal / length
            }
        };
        for i in 0..n {
            let previous = outward((i + n - 1) % n);
            let next = outward(i);
            let bisector = previous + next;
            let length = bisector.norm();
            let offset = if length < EPSILON { next } else { bisector / length };
            out.vertices.push(self.vertices[i] + offset * amount);
        }
        out.update_bounds();
    }

    /// The polygon swept along `translation`
    ///
    /// Locates the two silhouette vertices (where the edge normal's
    /// agreement with the translation changes sign), translates every vertex
    /// strictly between them on the facing side, and inserts translated
    /// duplicates at the silhouette vertices themselves.
    pub fn swept(&self, translation: Vec2) -> Self {
        let mut result = Self {
            vertices: Vec::with_capacity(self.vertices.len() + 2),
            bounds: Rect::default(),
        };
        self.sweep_to(translation, &mut result);
        result
    }

    /// Sweep into an existing polygon, reusing its vertex storage
    pub fn sweep_to(&self, translation: Vec2, out: &mut Polygon) {
        let n = self.vertices.len();
        out.vertices.clear();
        if n < 3 || translation.norm_squared() < EPSILON * EPSILON {
            out.vertices.extend_from_slice(&self.vertices);
            out.update_bounds();
            return;
        }
        let facing: Vec<bool> = (0..n)
            .map(|i| {
                let d = self.vertices[(i + 1) % n] - self.vertices[i];
                Vec2::new(d.y, -d.x).dot(&translation) > 0.0
            })
            .collect();
        for i in 0..n {
            let vertex = self.vertices[i];
            let incoming = facing[(i + n - 1) % n];
            let outgoing = facing[i];
            match (incoming, outgoing) {
                (false, false) => out.vertices.push(vertex),
                (true, true) => out.vertices.push(vertex + translation),
                // Leading silhouette vertex: original first keeps the winding
                (false, true) => {
                    out.vertices.push(vertex);
                    out.vertices.push(vertex + translation);
                }
                // Trailing silhouette vertex: translated copy first
                (true, false) => {
                    out.vertices.push(vertex + translation);
                    out.vertices.push(vertex);
                }
            }
        }
        out.update_bounds();
    }

    /// Whether `point` is on the interior side of every edge's half-plane
    pub fn contains(&self, point: Vec2) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        for i in 0..n {
            let v0 = self.vertices[i];
            let v1 = self.vertices[(i + 1) % n];
            // Inward normal (y0 - y1, x1 - x0) fixes the winding convention
            let normal = Vec2::new(v0.y - v1.y, v1.x - v0.x);
            if normal.dot(&(point - v0)) < -EPSILON {
                return false;
            }
        }
        true
    }

    /// Classify this polygon against an axis-aligned rectangle
    ///
    /// Per polygon edge as candidate separating axis, counts how many of the
    /// rectangle's corners lie inside the edge's half-plane: zero on any edge
    /// means no intersection, four on every edge means the polygon contains
    /// the rectangle.
    pub fn intersection_type(&self, rect: &Rect) -> IntersectionType {
        if !self.bounds.intersects(rect) {
            return IntersectionType::None;
        }
        let n = self.vertices.len();
        if n < 3 {
            return IntersectionType::None;
        }
        let corners = rect.corners();
        let mut contains_all = true;
        for i in 0..n {
            let v0 = self.vertices[i];
            let v1 = self.vertices[(i + 1) % n];
            let normal = Vec2::new(v0.y - v1.y, v1.x - v0.x);
            let inside = corners
                .iter()
                .filter(|corner| normal.dot(&(*corner - v0)) >= 0.0)
                .count();
            if inside == 0 {
                return IntersectionType::None;
            }
            if inside < 4 {
                contains_all = false;
            }
        }
        if contains_all {
            IntersectionType::Contains
        } else {
            IntersectionType::Intersects
        }
    }

    /// Whether this polygon intersects `other` (separating axis theorem)
    ///
    /// The polygons intersect iff no edge of either polygon is a separating
    /// axis for the other's vertices.
    pub fn intersects_polygon(&self, other: &Polygon) -> bool {
        if self.vertices.len() < 3 || other.vertices.len() < 3 {
            return false;
        }
        !separating_edge_exists(&self.vertices, &other.vertices)
            && !separating_edge_exists(&other.vertices, &self.vertices)
    }

    /// Whether this polygon intersects `circle`
    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        match self.circle_region(circle.center) {
            CircleRegion::Inside(..) => true,
            CircleRegion::Outside(nearest) => {
                (circle.center - nearest).norm_squared() <= circle.radius * circle.radius
            }
        }
    }

    /// Whether the polygon comes within `radius` of the spine `a`-`b`
    pub fn intersects_spine(&self, a: Vec2, b: Vec2, radius: f32) -> bool {
        if self.contains(a) || self.contains(b) {
            return true;
        }
        let n = self.vertices.len();
        for i in 0..n {
            let v0 = self.vertices[i];
            let v1 = self.vertices[(i + 1) % n];
            if segments_intersect(v0, v1, a, b) {
                return true;
            }
            if radius > 0.0 && segment_segment_distance(v0, v1, a, b) <= radius {
                return true;
            }
        }
        false
    }

    /// Whether this polygon intersects `segment`
    pub fn intersects_segment(&self, segment: &Segment) -> bool {
        self.intersects_spine(segment.start, segment.end, 0.0)
    }

    /// Whether this polygon intersects `capsule`
    pub fn intersects_capsule(&self, capsule: &Capsule) -> bool {
        self.intersects_spine(capsule.start, capsule.end, capsule.radius)
    }

    /// Minimum translation to push `circle` out of this polygon
    ///
    /// Walks the edges once: the first edge whose half-plane excludes the
    /// circle's center picks the nearest feature (edge interior or shared
    /// vertex); if the center passes every edge test it is interior and gets
    /// pushed out along the nearest edge's outward normal.
    pub fn penetration_circle(&self, circle: &Circle) -> Vec2 {
        match self.circle_region(circle.center) {
            CircleRegion::Outside(nearest) => {
                let offset = circle.center - nearest;
                let distance = offset.norm();
                if distance >= circle.radius || distance < EPSILON {
                    return Vec2::zeros();
                }
                offset * ((circle.radius - distance) / distance)
            }
            CircleRegion::Inside(outward, depth) => outward * (depth + circle.radius),
        }
    }

    /// Closest boundary or interior point to `point`
    pub fn nearest_point(&self, point: Vec2) -> Vec2 {
        if self.contains(point) {
            return point;
        }
        let n = self.vertices.len();
        let mut best = self.vertices[0];
        let mut best_distance = f32::MAX;
        for i in 0..n {
            let v0 = self.vertices[i];
            let v1 = self.vertices[(i + 1) % n.max(1)];
            let candidate = nearest_point_on_segment(v0, v1, point);
            let distance = (point - candidate).norm_squared();
            if distance < best_distance {
                best_distance = distance;
                best = candidate;
            }
        }
        best
    }

    /// Nearest hit point of the ray against the polygon
    ///
    /// A ray starting inside the polygon short-circuits to its origin;
    /// otherwise only edges facing the ray origin's side are tested.
    pub fn ray_intersection(&self, ray: &Ray2) -> Option<Vec2> {
        let n = self.vertices.len();
        if n < 3 {
            return None;
        }
        if self.contains(ray.origin) {
            return Some(ray.origin);
        }
        let mut best_t = f32::MAX;
        for i in 0..n {
            let v0 = self.vertices[i];
            let v1 = self.vertices[(i + 1) % n];
            let d = v1 - v0;
            let outward = Vec2::new(d.y, -d.x);
            // The ray can only enter through edges it approaches from outside
            if outward.dot(&ray.direction) >= 0.0 {
                continue;
            }
            if let Some(t) = ray.intersect_segment(v0, v1) {
                if t < best_t {
                    best_t = t;
                }
            }
        }
        if best_t < f32::MAX {
            Some(ray.point_at(best_t))
        } else {
            None
        }
    }

    /// Locate the circle center relative to the polygon boundary
    fn circle_region(&self, center: Vec2) -> CircleRegion {
        let n = self.vertices.len();
        if n < 3 {
            return CircleRegion::Outside(self.nearest_point(center));
        }
        let mut min_depth = f32::MAX;
        let mut min_outward = Vec2::zeros();
        for i in 0..n {
            let v0 = self.vertices[i];
            let v1 = self.vertices[(i + 1) % n];
            let inward = Vec2::new(v0.y - v1.y, v1.x - v0.x);
            let length = inward.norm();
            if length < EPSILON {
                continue;
            }
            let unit = inward / length;
            let depth = unit.dot(&(center - v0));
            if depth < 0.0 {
                return CircleRegion::Outside(nearest_point_on_segment(v0, v1, center));
            }
            if depth < min_depth {
                min_depth = depth;
                min_outward = -unit;
            }
        }
        CircleRegion::Inside(min_outward, min_depth)
    }
}

/// Whether some edge of `edges_of` is a separating axis for `other`
fn separating_edge_exists(edges_of: &[Vec2], other: &[Vec2]) -> bool {
    let n = edges_of.len();
    for i in 0..n {
        let v0 = edges_of[i];
        let v1 = edges_of[(i + 1) % n];
        let d = v1 - v0;
        let outward = Vec2::new(d.y, -d.x);
        if outward.norm_squared() < EPSILON * EPSILON {
            continue;
        }
        if other.iter().all(|v| outward.dot(&(v - v0)) > 0.0) {
            return true;
        }
    }
    false
}

/// A convex hull view for the Minkowski-difference penetration engine
///
/// One or two vertices plus a radius describe points, circles, segments,
/// and capsules; three or more describe a polygon.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Hull<'a> {
    /// Convex counter-clockwise vertex list
    pub verts: &'a [Vec2],
    /// Disk radius swept around the vertex hull
    pub radius: f32,
}

/// Directed boundary edges of a hull's vertex list
///
/// A two-vertex hull contributes both orientations so that the Minkowski
/// difference sees its two antiparallel faces.
fn directed_edges(verts: &[Vec2]) -> Vec<(Vec2, Vec2)> {
    match verts.len() {
        0 | 1 => Vec::new(),
        2 => vec![(verts[0], verts[1]), (verts[1], verts[0])],
        n => (0..n)
            .map(|i| (verts[i], verts[(i + 1) % n]))
            .collect(),
    }
}

/// Vertex of `verts` extremal against `direction` (minimum dot product)
fn support_min(verts: &[Vec2], direction: Vec2) -> Vec2 {
    let mut best = verts[0];
    let mut best_dot = best.dot(&direction);
    for v in &verts[1..] {
        let d = v.dot(&direction);
        if d < best_dot {
            best_dot = d;
            best = *v;
        }
    }
    best
}

/// Minimum translation to apply to `b` to separate it from `a`
///
/// Walks every face of the Minkowski difference `a` minus `b`: faces
/// induced by `a`'s edges against `b`'s support vertex, then by `b`'s
/// edges against `a`'s support vertex. The origin is clamped onto each
/// face segment and the globally nearest boundary point wins. The combined
/// radius is applied along the result, so the returned vector is the true
/// minimum translation, not an approximation. Returns zero when the hulls
/// do not overlap or when the overlap direction is ambiguous.
pub(crate) fn minkowski_penetration(a: Hull<'_>, b: Hull<'_>) -> Vec2 {
    let total_radius = a.radius + b.radius;
    let mut inside = true;
    let mut best_distance = f32::MAX;
    let mut best_point = Vec2::zeros();
    let mut any_face = false;

    {
        let mut consider = |f1: Vec2, f2: Vec2, outward: Vec2| {
            let length = outward.norm();
            if length < EPSILON {
                return;
            }
            any_face = true;
            let unit = outward / length;
            if unit.dot(&f1) < 0.0 {
                inside = false;
            }
            let nearest = nearest_point_on_segment(f1, f2, Vec2::zeros());
            let distance = nearest.norm_squared();
            if distance < best_distance {
                best_distance = distance;
                best_point = nearest;
            }
        };

        for (p, q) in directed_edges(a.verts) {
            let d = q - p;
            let outward = Vec2::new(d.y, -d.x);
            if outward.norm_squared() < EPSILON * EPSILON {
                continue;
            }
            let s = support_min(b.verts, outward);
            consider(p - s, q - s, outward);
        }
        for (p, q) in directed_edges(b.verts) {
            let d = q - p;
            let outward = Vec2::new(d.y, -d.x);
            if outward.norm_squared() < EPSILON * EPSILON {
                continue;
            }
            let s = support_min(a.verts, outward);
            consider(s - q, s - p, -outward);
        }
    }

    if !any_face {
        // Both hulls degenerate to points
        return Vec2::zeros();
    }
    let distance = best_distance.sqrt();
    if inside {
        if distance < EPSILON {
            return Vec2::zeros();
        }
        best_point * ((distance + total_radius) / distance)
    } else {
        if distance >= total_radius || distance < EPSILON {
            return Vec2::zeros();
        }
        best_point * ((distance - total_radius) / distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f32 = 1e-4;

    fn square(min: f32, max: f32) -> Polygon {
        Polygon::new(vec![
            Vec2::new(min, min),
            Vec2::new(max, min),
            Vec2::new(max, max),
            Vec2::new(min, max),
        ])
    }

    #[test]
    fn test_contains_half_planes() {
        let unit = square(0.0, 1.0);
        assert!(unit.contains(Vec2::new(0.5, 0.5)));
        assert!(!unit.contains(Vec2::new(2.0, 2.0)));
        // Boundary counts as inside
        assert!(unit.contains(Vec2::new(0.0, 0.5)));
    }

    #[test]
    fn test_sat_overlap_and_mtv() {
        let a = square(0.0, 1.0);
        let mut b = square(0.0, 1.0);
        for v in &mut b.vertices {
            v.x += 0.5;
        }
        b.update_bounds();
        assert!(a.intersects_polygon(&b));

        let push = minkowski_penetration(a.hull(), b.hull());
        assert_relative_eq!(push.x, 0.5, epsilon = EPS);
        assert_relative_eq!(push.y, 0.0, epsilon = EPS);
    }

    #[test]
    fn test_sat_separated() {
        let a = square(0.0, 1.0);
        let b = square(2.0, 3.0);
        assert!(!a.intersects_polygon(&b));
        assert_eq!(minkowski_penetration(a.hull(), b.hull()), Vec2::zeros());
    }

    #[test]
    fn test_minkowski_antisymmetry() {
        let a = square(0.0, 2.0);
        let b = Polygon::new(vec![
            Vec2::new(1.3, 0.7),
            Vec2::new(3.1, 1.1),
            Vec2::new(2.2, 2.9),
        ]);
        let ab = minkowski_penetration(a.hull(), b.hull());
        let ba = minkowski_penetration(b.hull(), a.hull());
        assert_relative_eq!(ab.x, -ba.x, epsilon = EPS);
        assert_relative_eq!(ab.y, -ba.y, epsilon = EPS);
    }

    #[test]
    fn test_capsule_hulls_through_minkowski() {
        // Parallel spines 0.8 apart with combined radius 1.0
        let a_spine = [Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0)];
        let b_spine = [Vec2::new(0.0, 0.8), Vec2::new(4.0, 0.8)];
        let push = minkowski_penetration(
            Hull { verts: &a_spine, radius: 0.5 },
            Hull { verts: &b_spine, radius: 0.5 },
        );
        assert_relative_eq!(push.x, 0.0, epsilon = EPS);
        assert_relative_eq!(push.y, 0.2, epsilon = EPS);
    }

    #[test]
    fn test_circle_penetration_interior() {
        let big = square(0.0, 2.0);
        let circle = Circle::new(Vec2::new(1.5, 1.0), 0.3);
        // Nearest edge is x = 2, half a unit away
        let push = big.penetration_circle(&circle);
        assert_relative_eq!(push.x, 0.8, epsilon = EPS);
        assert_relative_eq!(push.y, 0.0, epsilon = EPS);
    }

    #[test]
    fn test_circle_penetration_from_outside() {
        let big = square(0.0, 2.0);
        let circle = Circle::new(Vec2::new(2.2, 1.0), 0.5);
        assert!(big.intersects_circle(&circle));
        let push = big.penetration_circle(&circle);
        assert_relative_eq!(push.x, 0.3, epsilon = EPS);
        assert_relative_eq!(push.y, 0.0, epsilon = EPS);

        let clear = Circle::new(Vec2::new(3.0, 1.0), 0.5);
        assert!(!big.intersects_circle(&clear));
        assert_eq!(big.penetration_circle(&clear), Vec2::zeros());
    }

    #[test]
    fn test_silhouette_sweep() {
        let unit = square(0.0, 1.0);
        let swept = unit.swept(Vec2::new(1.0, 0.0));
        assert_eq!(
            swept.vertices,
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(2.0, 0.0),
                Vec2::new(2.0, 1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(0.0, 1.0),
            ]
        );
        assert!(swept.contains(Vec2::new(1.5, 0.5)));
        assert!(swept.contains(Vec2::new(0.5, 0.5)));
        assert!(!swept.contains(Vec2::new(2.5, 0.5)));
    }

    #[test]
    fn test_expand_is_faceted() {
        let unit = square(0.0, 1.0);
        let grown = unit.expanded(0.1);
        // Corners move along the diagonal bisector, not by the full amount
        let offset = 0.1 / std::f32::consts::SQRT_2;
        assert_relative_eq!(grown.vertices[0].x, -offset, epsilon = EPS);
        assert_relative_eq!(grown.vertices[0].y, -offset, epsilon = EPS);
        assert!(grown.contains(Vec2::new(-0.05, 0.5)));
    }

    #[test]
    fn test_rect_classification() {
        let big = square(0.0, 4.0);
        let inner = Rect::new(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0));
        let straddling = Rect::new(Vec2::new(3.0, 1.0), Vec2::new(5.0, 2.0));
        let outside = Rect::new(Vec2::new(6.0, 6.0), Vec2::new(7.0, 7.0));
        assert_eq!(big.intersection_type(&inner), IntersectionType::Contains);
        assert_eq!(
            big.intersection_type(&straddling),
            IntersectionType::Intersects
        );
        assert_eq!(big.intersection_type(&outside), IntersectionType::None);

        // Bounds overlap but an edge separates: diamond vs corner rect
        let diamond = Polygon::new(vec![
            Vec2::new(2.0, 0.0),
            Vec2::new(4.0, 2.0),
            Vec2::new(2.0, 4.0),
            Vec2::new(0.0, 2.0),
        ]);
        let corner = Rect::new(Vec2::new(3.5, 3.5), Vec2::new(4.5, 4.5));
        assert_eq!(diamond.intersection_type(&corner), IntersectionType::None);
    }

    #[test]
    fn test_spine_queries() {
        let unit = square(0.0, 1.0);
        // Segment passing straight through without endpoints inside
        assert!(unit.intersects_spine(Vec2::new(-1.0, 0.5), Vec2::new(2.0, 0.5), 0.0));
        // Segment clear of the polygon
        assert!(!unit.intersects_spine(Vec2::new(-1.0, 2.0), Vec2::new(2.0, 2.0), 0.0));
        // Capsule flank reaches the polygon even though the spine misses
        assert!(unit.intersects_spine(Vec2::new(-1.0, 1.3), Vec2::new(2.0, 1.3), 0.4));
    }

    #[test]
    fn test_ray_intersection() {
        let unit = square(0.0, 1.0);
        let ray = Ray2::new(Vec2::new(-1.0, 0.5), Vec2::new(1.0, 0.0));
        let hit = unit.ray_intersection(&ray).unwrap();
        assert_relative_eq!(hit.x, 0.0, epsilon = EPS);
        assert_relative_eq!(hit.y, 0.5, epsilon = EPS);

        // Origin inside short-circuits to the origin itself
        let inside = Ray2::new(Vec2::new(0.5, 0.5), Vec2::new(1.0, 0.0));
        assert_eq!(unit.ray_intersection(&inside), Some(Vec2::new(0.5, 0.5)));

        let miss = Ray2::new(Vec2::new(-1.0, 2.0), Vec2::new(1.0, 0.0));
        assert!(unit.ray_intersection(&miss).is_none());
    }

    #[test]
    fn test_nearest_point() {
        let unit = square(0.0, 1.0);
        assert_eq!(unit.nearest_point(Vec2::new(0.3, 0.4)), Vec2::new(0.3, 0.4));
        let projected = unit.nearest_point(Vec2::new(2.0, 0.5));
        assert_relative_eq!(projected.x, 1.0, epsilon = EPS);
        assert_relative_eq!(projected.y, 0.5, epsilon = EPS);
        let corner = unit.nearest_point(Vec2::new(2.0, 2.0));
        assert_relative_eq!(corner.x, 1.0, epsilon = EPS);
        assert_relative_eq!(corner.y, 1.0, epsilon = EPS);
    }

    #[test]
    fn test_centroid() {
        let unit = square(0.0, 1.0);
        let center = unit.center();
        assert_relative_eq!(center.x, 0.5, epsilon = EPS);
        assert_relative_eq!(center.y, 0.5, epsilon = EPS);
    }
}
