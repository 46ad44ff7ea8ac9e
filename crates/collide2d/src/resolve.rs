//! Iterative penetration resolution
//!
//! Pushes a moving shape out of a set of obstacles one minimum-translation
//! vector at a time. Pure with respect to its inputs; the accumulated
//! displacement is returned and the caller applies it.

use crate::foundation::math::{Transform2, Vec2, EPSILON};
use crate::shapes::Shape;

/// Push `mover` out of every intersecting obstacle
///
/// Runs up to `max_passes` sweeps over the obstacle list. Each pass applies
/// every non-zero obstacle-to-mover minimum translation in turn, so a push
/// out of one obstacle can be corrected against the next. Stops early on
/// the first pass that produces no displacement. Returns the total
/// displacement to apply to the original mover; the zero vector when
/// nothing intersected.
pub fn resolve_penetrations(mover: &Shape, obstacles: &[Shape], max_passes: u32) -> Vec2 {
    let mut current = mover.clone();
    let mut scratch = mover.clone();
    let mut total = Vec2::zeros();

    for pass in 0..max_passes {
        let mut moved = false;
        for obstacle in obstacles {
            if !obstacle.bounds().intersects(&current.bounds()) {
                continue;
            }
            let push = obstacle.penetration(&current);
            if push.norm_squared() < EPSILON * EPSILON {
                continue;
            }
            log::trace!(
                "resolve pass {pass}: push ({:.4}, {:.4})",
                push.x,
                push.y
            );
            current.transform_into(&Transform2::from_position(push), &mut scratch);
            std::mem::swap(&mut current, &mut scratch);
            total += push;
            moved = true;
        }
        if !moved {
            break;
        }
    }

    if total != Vec2::zeros() {
        log::debug!(
            "resolved penetrations with displacement ({:.4}, {:.4})",
            total.x,
            total.y
        );
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Polygon};
    use approx::assert_relative_eq;

    const EPS: f32 = 1e-3;

    fn square(min_x: f32, min_y: f32, size: f32) -> Shape {
        Shape::Polygon(Polygon::new(vec![
            Vec2::new(min_x, min_y),
            Vec2::new(min_x + size, min_y),
            Vec2::new(min_x + size, min_y + size),
            Vec2::new(min_x, min_y + size),
        ]))
    }

    #[test]
    fn test_free_mover_is_not_displaced() {
        let mover = Shape::Circle(Circle::new(Vec2::new(10.0, 10.0), 1.0));
        let obstacles = vec![square(0.0, 0.0, 1.0)];
        assert_eq!(resolve_penetrations(&mover, &obstacles, 4), Vec2::zeros());
    }

    #[test]
    fn test_mover_pushed_out_of_square() {
        // Circle center sits just inside the square's right edge; the
        // resolved mover rests tangent with zero residual penetration
        let mover = Shape::Circle(Circle::new(Vec2::new(3.8, 2.0), 0.5));
        let obstacles = vec![square(0.0, 0.0, 4.0)];
        let displacement = resolve_penetrations(&mover, &obstacles, 4);
        assert_relative_eq!(displacement.x, 0.7, epsilon = EPS);
        assert_relative_eq!(displacement.y, 0.0, epsilon = EPS);

        let resolved = Shape::Circle(Circle::new(Vec2::new(3.8, 2.0) + displacement, 0.5));
        let residual = obstacles[0].penetration(&resolved);
        assert_relative_eq!(residual.norm(), 0.0, epsilon = EPS);
    }

    #[test]
    fn test_corner_resolves_against_both_obstacles() {
        // Mover overlaps a floor and a wall at once; resolving against the
        // floor still leaves it inside the wall, handled in the same pass
        let floor = square(0.0, -4.0, 4.0);
        let wall = square(4.0, -4.0, 8.0);
        let start = Vec2::new(3.85, 0.15);
        let mover = Shape::Circle(Circle::new(start, 0.5));
        let obstacles = vec![floor, wall];

        let displacement = resolve_penetrations(&mover, &obstacles, 8);
        assert_relative_eq!(displacement.x, -0.35, epsilon = EPS);
        assert_relative_eq!(displacement.y, 0.35, epsilon = EPS);

        let resolved = Shape::Circle(Circle::new(start + displacement, 0.5));
        for obstacle in &obstacles {
            let residual = obstacle.penetration(&resolved);
            assert_relative_eq!(residual.norm(), 0.0, epsilon = EPS);
        }
    }
}
