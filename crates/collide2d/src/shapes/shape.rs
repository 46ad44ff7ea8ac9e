//! The `Shape` variant set and its double-dispatch tables
//!
//! Every pairwise query is routed through a single canonical `match` over
//! the variant pair. The mirrored half of each table delegates to the
//! canonical half, negating penetration vectors, so the symmetry contract
//! (`a.intersects(b) == b.intersects(a)`) and the anti-symmetry contract
//! (`a.penetration(b) == -b.penetration(a)`) hold by construction instead
//! of by sixty-four hand-kept overrides.

use crate::foundation::math::{segment_segment_distance, Ray2, Rect, Transform2, Vec2};
use crate::shapes::polygon::{minkowski_penetration, Hull};
use crate::shapes::{Capsule, Circle, Compound, Global, NoneShape, Point, Polygon, Segment};

/// Classification of a shape against an axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntersectionType {
    /// The shape and the rectangle do not touch
    None,
    /// The shape and the rectangle overlap without full containment
    Intersects,
    /// The shape fully contains the rectangle
    Contains,
}

/// A 2D convex collision shape
///
/// A closed, tagged union: the degenerate `None` placeholder, the four
/// simple convex primitives, convex polygons, compounds of child shapes,
/// and the unbounded `Global` sentinel. `None` and `Global` are universal
/// non-colliders.
///
/// Shapes are value-like. Mutating a variant's geometric fields leaves the
/// cached bounds stale until [`Shape::update_bounds`] is called again; the
/// producing operations (`transformed`, `expanded`, `swept` and their
/// `*_into` forms) always return shapes with fresh bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Zero-extent, non-colliding placeholder
    None(NoneShape),
    /// A single point
    Point(Point),
    /// A line segment
    Segment(Segment),
    /// A circle
    Circle(Circle),
    /// A capsule (segment spine with a radius)
    Capsule(Capsule),
    /// A convex polygon with counter-clockwise winding
    Polygon(Polygon),
    /// An ordered union of child shapes
    Compound(Compound),
    /// Universal unbounded sentinel, never collides
    Global(Global),
}

impl From<NoneShape> for Shape {
    fn from(shape: NoneShape) -> Self {
        Self::None(shape)
    }
}
impl From<Point> for Shape {
    fn from(shape: Point) -> Self {
        Self::Point(shape)
    }
}
impl From<Segment> for Shape {
    fn from(shape: Segment) -> Self {
        Self::Segment(shape)
    }
}
impl From<Circle> for Shape {
    fn from(shape: Circle) -> Self {
        Self::Circle(shape)
    }
}
impl From<Capsule> for Shape {
    fn from(shape: Capsule) -> Self {
        Self::Capsule(shape)
    }
}
impl From<Polygon> for Shape {
    fn from(shape: Polygon) -> Self {
        Self::Polygon(shape)
    }
}
impl From<Compound> for Shape {
    fn from(shape: Compound) -> Self {
        Self::Compound(shape)
    }
}
impl From<Global> for Shape {
    fn from(shape: Global) -> Self {
        Self::Global(shape)
    }
}

impl Shape {
    /// Recompute the cached bounds from the current geometry
    ///
    /// Never happens implicitly: after mutating geometric fields directly,
    /// the caller must invoke this before relying on [`Shape::bounds`].
    pub fn update_bounds(&mut self) {
        match self {
            Shape::None(s) => s.update_bounds(),
            Shape::Point(s) => s.update_bounds(),
            Shape::Segment(s) => s.update_bounds(),
            Shape::Circle(s) => s.update_bounds(),
            Shape::Capsule(s) => s.update_bounds(),
            Shape::Polygon(s) => s.update_bounds(),
            Shape::Compound(s) => s.update_bounds(),
            Shape::Global(_) => {}
        }
    }

    /// Cached axis-aligned bounds (valid after the last `update_bounds`)
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::None(s) => s.bounds(),
            Shape::Point(s) => s.bounds(),
            Shape::Segment(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Capsule(s) => s.bounds(),
            Shape::Polygon(s) => s.bounds(),
            Shape::Compound(s) => s.bounds(),
            Shape::Global(s) => s.bounds(),
        }
    }

    /// Geometric center
    pub fn center(&self) -> Vec2 {
        match self {
            Shape::None(s) => s.center(),
            Shape::Point(s) => s.center(),
            Shape::Segment(s) => s.center(),
            Shape::Circle(s) => s.center,
            Shape::Capsule(s) => s.center(),
            Shape::Polygon(s) => s.center(),
            Shape::Compound(s) => s.center(),
            Shape::Global(_) => Vec2::zeros(),
        }
    }

    /// Shape with every defining point run through `transform`
    ///
    /// Radius fields scale by the transform's approximate uniform scale
    /// factor.
    pub fn transformed(&self, transform: &Transform2) -> Shape {
        match self {
            Shape::None(s) => Shape::None(s.transformed(transform)),
            Shape::Point(s) => Shape::Point(s.transformed(transform)),
            Shape::Segment(s) => Shape::Segment(s.transformed(transform)),
            Shape::Circle(s) => Shape::Circle(s.transformed(transform)),
            Shape::Capsule(s) => Shape::Capsule(s.transformed(transform)),
            Shape::Polygon(s) => Shape::Polygon(s.transformed(transform)),
            Shape::Compound(s) => Shape::Compound(s.transformed(transform)),
            Shape::Global(s) => Shape::Global(*s),
        }
    }

    /// Transform into a caller-owned result shape
    ///
    /// When `out` already holds the matching variant its heap storage
    /// (polygon vertices, compound children) is reused in place; a variant
    /// mismatch forces a fresh allocation. The operands are read-only; only
    /// `out` is written.
    pub fn transform_into(&self, transform: &Transform2, out: &mut Shape) {
        match (self, out) {
            (Shape::Polygon(src), Shape::Polygon(dst)) => src.transform_to(transform, dst),
            (Shape::Compound(src), Shape::Compound(dst)) => src.transform_to(transform, dst),
            (src, dst) => *dst = src.transformed(transform),
        }
    }

    /// Shape grown by `amount`
    ///
    /// Radius-bearing variants grow their radius (an exact disk Minkowski
    /// sum); a point grows to a circle and a segment to a capsule, the same
    /// way; polygons offset vertices along edge-normal bisectors (faceted
    /// approximation); the sentinels are returned unchanged.
    pub fn expanded(&self, amount: f32) -> Shape {
        match self {
            Shape::Point(s) => Shape::Circle(s.expanded(amount)),
            Shape::Segment(s) => Shape::Capsule(s.expanded(amount)),
            Shape::Circle(s) => Shape::Circle(s.expanded(amount)),
            Shape::Capsule(s) => Shape::Capsule(s.expanded(amount)),
            Shape::Polygon(s) => Shape::Polygon(s.expanded(amount)),
            Shape::Compound(s) => Shape::Compound(s.expanded(amount)),
            other => other.clone(),
        }
    }

    /// Grow into a caller-owned result shape (see [`Shape::transform_into`])
    pub fn expand_into(&self, amount: f32, out: &mut Shape) {
        match (self, out) {
            (Shape::Polygon(src), Shape::Polygon(dst)) => src.expand_to(amount, dst),
            (src, dst) => *dst = src.expanded(amount),
        }
    }

    /// Shape swept along `translation`
    ///
    /// A point sweeps to a segment, a circle to a capsule, a segment to the
    /// covered quadrilateral, a polygon to its silhouette extrusion, and a
    /// compound to its swept children. Sweeping a capsule is unsupported
    /// and returns an unswept copy.
    pub fn swept(&self, translation: Vec2) -> Shape {
        match self {
            Shape::None(s) => Shape::None(s.clone()),
            Shape::Point(s) => Shape::Segment(s.swept(translation)),
            Shape::Segment(s) => s.swept(translation),
            Shape::Circle(s) => Shape::Capsule(s.swept(translation)),
            Shape::Capsule(s) => Shape::Capsule(s.clone()),
            Shape::Polygon(s) => Shape::Polygon(s.swept(translation)),
            Shape::Compound(s) => Shape::Compound(s.swept(translation)),
            Shape::Global(s) => Shape::Global(*s),
        }
    }

    /// Sweep into a caller-owned result shape (see [`Shape::transform_into`])
    pub fn sweep_into(&self, translation: Vec2, out: &mut Shape) {
        match (self, out) {
            (Shape::Polygon(src), Shape::Polygon(dst)) => src.sweep_to(translation, dst),
            (src, dst) => *dst = src.swept(translation),
        }
    }

    /// Ordered boundary vertices
    ///
    /// Polygons produce their closed vertex loop; segments their two
    /// endpoints; points their location. Circles, capsules, compounds and
    /// the global sentinel fall back to the bounds' perimeter, an accepted
    /// approximation.
    pub fn perimeter_path(&self) -> Vec<Vec2> {
        let mut path = Vec::new();
        self.perimeter_path_into(&mut path);
        path
    }

    /// Collect the perimeter path into a caller-owned buffer
    pub fn perimeter_path_into(&self, out: &mut Vec<Vec2>) {
        out.clear();
        match self {
            Shape::None(s) => out.push(s.location),
            Shape::Point(s) => out.push(s.location),
            Shape::Segment(s) => {
                out.push(s.start);
                out.push(s.end);
            }
            Shape::Polygon(s) => {
                out.extend_from_slice(&s.vertices);
                if let Some(first) = s.vertices.first() {
                    out.push(*first);
                }
            }
            other => {
                let corners = other.bounds().corners();
                out.extend_from_slice(&corners);
                out.push(corners[0]);
            }
        }
    }

    /// Nearest hit point of the ray against the shape, if any
    ///
    /// `None` and `Global` never report hits.
    pub fn ray_intersection(&self, ray: &Ray2) -> Option<Vec2> {
        match self {
            Shape::None(_) | Shape::Global(_) => None,
            Shape::Point(s) => s.ray_intersection(ray),
            Shape::Segment(s) => s.ray_intersection(ray),
            Shape::Circle(s) => s.ray_intersection(ray),
            Shape::Capsule(s) => s.ray_intersection(ray),
            Shape::Polygon(s) => s.ray_intersection(ray),
            Shape::Compound(s) => s.ray_intersection(ray),
        }
    }

    /// Closest boundary or interior point to `point`
    ///
    /// Shapes containing the query point return it unchanged.
    pub fn nearest_point(&self, point: Vec2) -> Vec2 {
        match self {
            Shape::None(s) => s.location,
            Shape::Point(s) => s.location,
            Shape::Segment(s) => s.nearest_point(point),
            Shape::Circle(s) => s.nearest_point(point),
            Shape::Capsule(s) => s.nearest_point(point),
            Shape::Polygon(s) => s.nearest_point(point),
            Shape::Compound(s) => s.nearest_point(point),
            Shape::Global(_) => point,
        }
    }

    /// Classify this shape against an axis-aligned rectangle
    pub fn intersection_type(&self, rect: &Rect) -> IntersectionType {
        match self {
            Shape::None(_) => IntersectionType::None,
            Shape::Point(s) => {
                if rect.contains_point(s.location) {
                    IntersectionType::Intersects
                } else {
                    IntersectionType::None
                }
            }
            Shape::Segment(s) => segment_rect_type(s.start, s.end, &s.bounds(), rect),
            Shape::Circle(s) => {
                if !s.bounds().intersects(rect) {
                    return IntersectionType::None;
                }
                if rect
                    .corners()
                    .iter()
                    .all(|corner| s.contains_point(*corner))
                {
                    IntersectionType::Contains
                } else if s.contains_point(rect.clamp_point(s.center)) {
                    IntersectionType::Intersects
                } else {
                    IntersectionType::None
                }
            }
            Shape::Capsule(s) => capsule_rect_type(s, rect),
            Shape::Polygon(s) => s.intersection_type(rect),
            Shape::Compound(s) => s.intersection_type(rect),
            Shape::Global(_) => IntersectionType::Contains,
        }
    }

    /// Whether this shape intersects `other`
    ///
    /// Symmetric for every variant pair; `None` and `Global` never
    /// intersect anything.
    pub fn intersects(&self, other: &Shape) -> bool {
        match (self, other) {
            (Shape::None(_), _)
            | (_, Shape::None(_))
            | (Shape::Global(_), _)
            | (_, Shape::Global(_)) => false,

            (Shape::Compound(a), _) => a.intersects_shape(other),
            (_, Shape::Compound(b)) => b.intersects_shape(self),

            (Shape::Point(a), Shape::Point(b)) => a.coincident(b),
            (Shape::Point(a), Shape::Segment(b)) | (Shape::Segment(b), Shape::Point(a)) => {
                b.contains_point(a.location)
            }
            (Shape::Point(a), Shape::Circle(b)) | (Shape::Circle(b), Shape::Point(a)) => {
                b.contains_point(a.location)
            }
            (Shape::Point(a), Shape::Capsule(b)) | (Shape::Capsule(b), Shape::Point(a)) => {
                b.contains_point(a.location)
            }
            (Shape::Point(a), Shape::Polygon(b)) | (Shape::Polygon(b), Shape::Point(a)) => {
                b.contains(a.location)
            }

            (Shape::Segment(a), Shape::Segment(b)) => a.intersects_segment(b),
            (Shape::Segment(a), Shape::Circle(b)) | (Shape::Circle(b), Shape::Segment(a)) => {
                b.intersects_segment_points(a.start, a.end)
            }
            (Shape::Segment(a), Shape::Capsule(b)) | (Shape::Capsule(b), Shape::Segment(a)) => {
                b.intersects_segment(a)
            }
            (Shape::Segment(a), Shape::Polygon(b)) | (Shape::Polygon(b), Shape::Segment(a)) => {
                b.intersects_segment(a)
            }

            (Shape::Circle(a), Shape::Circle(b)) => a.intersects_circle(b),
            (Shape::Circle(a), Shape::Capsule(b)) | (Shape::Capsule(b), Shape::Circle(a)) => {
                b.intersects_circle(a)
            }
            (Shape::Circle(a), Shape::Polygon(b)) | (Shape::Polygon(b), Shape::Circle(a)) => {
                b.intersects_circle(a)
            }

            (Shape::Capsule(a), Shape::Capsule(b)) => a.intersects_capsule(b),
            (Shape::Capsule(a), Shape::Polygon(b)) | (Shape::Polygon(b), Shape::Capsule(a)) => {
                b.intersects_capsule(a)
            }

            (Shape::Polygon(a), Shape::Polygon(b)) => a.intersects_polygon(b),
        }
    }

    /// Minimum translation to apply to `other` to separate it from this
    /// shape
    ///
    /// The zero vector when the shapes do not intersect, when the
    /// separation direction is ambiguous (coincident features), for the
    /// zero-measure point/segment pairs, and always for `None`, `Global`,
    /// and compound-vs-compound (unsupported). Reversing the operands
    /// negates the vector.
    pub fn penetration(&self, other: &Shape) -> Vec2 {
        match (self, other) {
            (Shape::None(_), _)
            | (_, Shape::None(_))
            | (Shape::Global(_), _)
            | (_, Shape::Global(_)) => Vec2::zeros(),

            // Compound-vs-compound penetration is deliberately unsupported
            (Shape::Compound(_), Shape::Compound(_)) => Vec2::zeros(),
            (Shape::Compound(a), _) => a.penetration_shape(other),
            (_, Shape::Compound(b)) => -b.penetration_shape(self),

            // Points cannot meaningfully penetrate points or segments
            (Shape::Point(_), Shape::Point(_))
            | (Shape::Point(_), Shape::Segment(_))
            | (Shape::Segment(_), Shape::Point(_)) => Vec2::zeros(),

            // A point is a zero-radius circle for the remaining pairs
            (Shape::Point(a), Shape::Circle(b)) => a.as_circle().penetration_circle(b),
            (Shape::Circle(a), Shape::Point(b)) => a.penetration_circle(&b.as_circle()),
            (Shape::Point(a), Shape::Capsule(b)) => -b.penetration_circle(&a.as_circle()),
            (Shape::Capsule(a), Shape::Point(b)) => a.penetration_circle(&b.as_circle()),
            (Shape::Point(a), Shape::Polygon(b)) => -b.penetration_circle(&a.as_circle()),
            (Shape::Polygon(a), Shape::Point(b)) => a.penetration_circle(&b.as_circle()),

            (Shape::Segment(a), Shape::Segment(b)) => minkowski_penetration(
                Hull { verts: &[a.start, a.end], radius: 0.0 },
                Hull { verts: &[b.start, b.end], radius: 0.0 },
            ),
            (Shape::Segment(a), Shape::Circle(b)) => a.penetration_circle(b),
            (Shape::Circle(a), Shape::Segment(b)) => -b.penetration_circle(a),
            (Shape::Segment(a), Shape::Capsule(b)) => minkowski_penetration(
                Hull { verts: &[a.start, a.end], radius: 0.0 },
                Hull { verts: &b.spine(), radius: b.radius },
            ),
            (Shape::Capsule(a), Shape::Segment(b)) => minkowski_penetration(
                Hull { verts: &a.spine(), radius: a.radius },
                Hull { verts: &[b.start, b.end], radius: 0.0 },
            ),
            (Shape::Segment(a), Shape::Polygon(b)) => minkowski_penetration(
                Hull { verts: &[a.start, a.end], radius: 0.0 },
                b.hull(),
            ),
            (Shape::Polygon(a), Shape::Segment(b)) => minkowski_penetration(
                a.hull(),
                Hull { verts: &[b.start, b.end], radius: 0.0 },
            ),

            (Shape::Circle(a), Shape::Circle(b)) => a.penetration_circle(b),
            (Shape::Circle(a), Shape::Capsule(b)) => -b.penetration_circle(a),
            (Shape::Capsule(a), Shape::Circle(b)) => a.penetration_circle(b),
            (Shape::Circle(a), Shape::Polygon(b)) => -b.penetration_circle(a),
            (Shape::Polygon(a), Shape::Circle(b)) => a.penetration_circle(b),

            (Shape::Capsule(a), Shape::Capsule(b)) => minkowski_penetration(
                Hull { verts: &a.spine(), radius: a.radius },
                Hull { verts: &b.spine(), radius: b.radius },
            ),
            (Shape::Capsule(a), Shape::Polygon(b)) => minkowski_penetration(
                Hull { verts: &a.spine(), radius: a.radius },
                b.hull(),
            ),
            (Shape::Polygon(a), Shape::Capsule(b)) => minkowski_penetration(
                a.hull(),
                Hull { verts: &b.spine(), radius: b.radius },
            ),

            (Shape::Polygon(a), Shape::Polygon(b)) => {
                minkowski_penetration(a.hull(), b.hull())
            }
        }
    }
}

/// Classify a segment against a rectangle (a segment can never contain one)
fn segment_rect_type(
    start: Vec2,
    end: Vec2,
    bounds: &Rect,
    rect: &Rect,
) -> IntersectionType {
    if !bounds.intersects(rect) {
        return IntersectionType::None;
    }
    if rect.contains_point(start) || rect.contains_point(end) {
        return IntersectionType::Intersects;
    }
    let corners = rect.corners();
    for i in 0..4 {
        if crate::foundation::math::segments_intersect(start, end, corners[i], corners[(i + 1) % 4])
        {
            return IntersectionType::Intersects;
        }
    }
    IntersectionType::None
}

/// Classify a capsule against a rectangle
fn capsule_rect_type(capsule: &Capsule, rect: &Rect) -> IntersectionType {
    if !capsule.bounds().intersects(rect) {
        return IntersectionType::None;
    }
    if rect
        .corners()
        .iter()
        .all(|corner| capsule.contains_point(*corner))
    {
        return IntersectionType::Contains;
    }
    if rect.contains_point(capsule.start) || rect.contains_point(capsule.end) {
        return IntersectionType::Intersects;
    }
    let corners = rect.corners();
    for i in 0..4 {
        let distance = segment_segment_distance(
            capsule.start,
            capsule.end,
            corners[i],
            corners[(i + 1) % 4],
        );
        if distance <= capsule.radius {
            return IntersectionType::Intersects;
        }
    }
    IntersectionType::None
}
