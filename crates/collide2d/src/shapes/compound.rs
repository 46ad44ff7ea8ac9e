//! Compound shape: an ordered list of child shapes with union semantics

use crate::foundation::math::{Ray2, Rect, Transform2, Vec2};
use crate::shapes::{IntersectionType, Shape};

/// An ordered list of child shapes combined by union semantics
///
/// Children may overlap; the compound's bounds are the union of the child
/// bounds and the compound intersects whatever any child intersects.
#[derive(Debug, Clone, PartialEq)]
pub struct Compound {
    /// Child shapes (union semantics)
    pub children: Vec<Shape>,
    bounds: Rect,
}

impl Compound {
    /// Create a compound from its child shapes
    pub fn new(children: Vec<Shape>) -> Self {
        let mut shape = Self {
            children,
            bounds: Rect::default(),
        };
        shape.update_bounds();
        shape
    }

    /// Recompute the cached bounds: children first, then their union
    pub fn update_bounds(&mut self) {
        for child in &mut self.children {
            child.update_bounds();
        }
        let mut iter = self.children.iter();
        let Some(first) = iter.next() else {
            self.bounds = Rect::default();
            return;
        };
        let mut bounds = first.bounds();
        for child in iter {
            bounds = bounds.union(&child.bounds());
        }
        self.bounds = bounds;
    }

    /// Cached bounds (valid after the last `update_bounds`)
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Geometric center (center of the union bounds)
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    /// Compound with every child transformed
    pub fn transformed(&self, transform: &Transform2) -> Self {
        let mut result = Self {
            children: Vec::with_capacity(self.children.len()),
            bounds: Rect::default(),
        };
        self.transform_to(transform, &mut result);
        result
    }

    /// Transform into an existing compound, reusing its child storage
    pub fn transform_to(&self, transform: &Transform2, out: &mut Compound) {
        out.children.clear();
        out.children
            .extend(self.children.iter().map(|c| c.transformed(transform)));
        out.update_bounds();
    }

    /// Compound with every child grown by `amount`
    pub fn expanded(&self, amount: f32) -> Self {
        Self::new(self.children.iter().map(|c| c.expanded(amount)).collect())
    }

    /// Compound with every child swept along `translation`
    pub fn swept(&self, translation: Vec2) -> Self {
        Self::new(self.children.iter().map(|c| c.swept(translation)).collect())
    }

    /// Whether any child intersects `other`
    pub fn intersects_shape(&self, other: &Shape) -> bool {
        self.children.iter().any(|child| child.intersects(other))
    }

    /// Minimum translation to push `other` out of this compound
    ///
    /// Approximation, not an exact union MTV: among the children that
    /// individually intersect `other`, the child penetration with the
    /// largest magnitude wins.
    pub fn penetration_shape(&self, other: &Shape) -> Vec2 {
        let mut best = Vec2::zeros();
        let mut best_magnitude = 0.0f32;
        for child in &self.children {
            if !child.intersects(other) {
                continue;
            }
            let push = child.penetration(other);
            let magnitude = push.norm_squared();
            if magnitude > best_magnitude {
                best_magnitude = magnitude;
                best = push;
            }
        }
        best
    }

    /// Classify the union of children against an axis-aligned rectangle
    pub fn intersection_type(&self, rect: &Rect) -> IntersectionType {
        if !self.bounds.intersects(rect) {
            return IntersectionType::None;
        }
        let mut result = IntersectionType::None;
        for child in &self.children {
            match child.intersection_type(rect) {
                IntersectionType::Contains => return IntersectionType::Contains,
                IntersectionType::Intersects => result = IntersectionType::Intersects,
                IntersectionType::None => {}
            }
        }
        result
    }

    /// Closest point among the children to `point`
    pub fn nearest_point(&self, point: Vec2) -> Vec2 {
        let mut best = point;
        let mut best_distance = f32::MAX;
        for child in &self.children {
            let candidate = child.nearest_point(point);
            let distance = (point - candidate).norm_squared();
            if distance < best_distance {
                best_distance = distance;
                best = candidate;
            }
        }
        best
    }

    /// Nearest child hit point of the ray
    pub fn ray_intersection(&self, ray: &Ray2) -> Option<Vec2> {
        let mut best: Option<Vec2> = None;
        let mut best_distance = f32::MAX;
        for child in &self.children {
            if let Some(hit) = child.ray_intersection(ray) {
                let distance = (hit - ray.origin).norm_squared();
                if distance < best_distance {
                    best_distance = distance;
                    best = Some(hit);
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Polygon};
    use approx::assert_relative_eq;

    const EPS: f32 = 1e-4;

    fn barbell() -> Compound {
        Compound::new(vec![
            Shape::Circle(Circle::new(Vec2::new(0.0, 0.0), 1.0)),
            Shape::Circle(Circle::new(Vec2::new(4.0, 0.0), 1.0)),
        ])
    }

    #[test]
    fn test_union_bounds() {
        let compound = barbell();
        assert_eq!(compound.bounds().min, Vec2::new(-1.0, -1.0));
        assert_eq!(compound.bounds().max, Vec2::new(5.0, 1.0));
        assert_eq!(compound.center(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_any_child_intersects() {
        let compound = barbell();
        let near_left = Shape::Circle(Circle::new(Vec2::new(-1.5, 0.0), 1.0));
        let in_the_gap = Shape::Circle(Circle::new(Vec2::new(2.0, 0.0), 0.5));
        assert!(compound.intersects_shape(&near_left));
        assert!(!compound.intersects_shape(&in_the_gap));
    }

    #[test]
    fn test_largest_child_penetration_wins() {
        let compound = barbell();
        // Overlaps the right child much deeper than the left one
        let probe = Shape::Circle(Circle::new(Vec2::new(3.5, 0.0), 0.5));
        let push = compound.penetration_shape(&probe);
        assert!(push.x > 0.0);
        let expected = Circle::new(Vec2::new(4.0, 0.0), 1.0)
            .penetration_circle(&Circle::new(Vec2::new(3.5, 0.0), 0.5));
        assert_relative_eq!(push.x, expected.x, epsilon = EPS);
        assert_relative_eq!(push.y, expected.y, epsilon = EPS);
    }

    #[test]
    fn test_compound_vs_compound_penetration_is_zero() {
        let a = Shape::Compound(barbell());
        let b = Shape::Compound(Compound::new(vec![Shape::Circle(Circle::new(
            Vec2::new(0.5, 0.0),
            1.0,
        ))]));
        assert!(a.intersects(&b));
        assert_eq!(a.penetration(&b), Vec2::zeros());
        assert_eq!(b.penetration(&a), Vec2::zeros());
    }

    #[test]
    fn test_classification_unions_children() {
        let compound = Compound::new(vec![
            Shape::Polygon(Polygon::new(vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(4.0, 0.0),
                Vec2::new(4.0, 4.0),
                Vec2::new(0.0, 4.0),
            ])),
            Shape::Circle(Circle::new(Vec2::new(10.0, 0.0), 1.0)),
        ]);
        let inner = Rect::new(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0));
        let far = Rect::new(Vec2::new(20.0, 20.0), Vec2::new(21.0, 21.0));
        assert_eq!(
            compound.intersection_type(&inner),
            IntersectionType::Contains
        );
        assert_eq!(compound.intersection_type(&far), IntersectionType::None);
    }
}
