//! Obstacle course demo
//!
//! Drives a capsule mover across a small obstacle course, resolving its
//! penetrations against the course every step and logging what it runs
//! into along the way.

use collide2d::prelude::*;

/// One moving capsule stepped across the course each tick
struct Mover {
    shape: Shape,
    position: Vec2,
    velocity: Vec2,
}

impl Mover {
    fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            shape: Shape::Capsule(Capsule::new(
                position + Vec2::new(0.0, 0.3),
                position - Vec2::new(0.0, 0.3),
                0.4,
            )),
            position,
            velocity,
        }
    }

    /// Advance one tick and push back out of anything penetrated
    fn step(&mut self, course: &[Shape], dt: f32) {
        let translation = self.velocity * dt;

        // Conservative tunnel check: sweep a circle enclosing the capsule
        let probe = Shape::Circle(Circle::new(self.position, 0.7));
        let swept = probe.swept(translation);
        let blocked = course.iter().any(|obstacle| swept.intersects(obstacle));
        if blocked {
            log::debug!(
                "step from ({:.2}, {:.2}) contacts the course",
                self.position.x,
                self.position.y
            );
        }

        let mut moved = self.shape.clone();
        self.shape
            .transform_into(&Transform2::from_position(translation), &mut moved);
        let correction = resolve_penetrations(&moved, course, 8);

        let mut settled = moved.clone();
        moved.transform_into(&Transform2::from_position(correction), &mut settled);
        self.shape = settled;
        self.position += translation + correction;

        // Sliding response: drop the velocity component into the contact
        if correction.norm() > 1e-6 {
            let normal = correction.normalize();
            let into = self.velocity.dot(&normal);
            if into < 0.0 {
                self.velocity -= normal * into;
            }
        }
    }
}

fn build_course() -> Vec<Shape> {
    vec![
        // Floor
        Shape::Polygon(Polygon::new(vec![
            Vec2::new(-2.0, -1.0),
            Vec2::new(30.0, -1.0),
            Vec2::new(30.0, 0.0),
            Vec2::new(-2.0, 0.0),
        ])),
        // A ramp-shaped wedge
        Shape::Polygon(Polygon::new(vec![
            Vec2::new(6.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 2.0),
        ])),
        // A boulder
        Shape::Circle(Circle::new(Vec2::new(15.0, 0.8), 0.8)),
        // A low barrier built from two pieces
        Shape::Compound(Compound::new(vec![
            Shape::Capsule(Capsule::new(
                Vec2::new(20.0, 0.0),
                Vec2::new(20.0, 1.2),
                0.3,
            )),
            Shape::Circle(Circle::new(Vec2::new(20.0, 1.5), 0.5)),
        ])),
    ]
}

fn main() {
    env_logger::init();
    log::info!("Starting obstacle course demo...");

    let course = build_course();
    let mut mover = Mover::new(Vec2::new(0.0, 1.0), Vec2::new(4.0, 0.0));

    let probe = Ray2::new(Vec2::new(0.0, 0.5), Vec2::new(1.0, 0.0));
    for (index, obstacle) in course.iter().enumerate() {
        if let Some(hit) = obstacle.ray_intersection(&probe) {
            log::info!(
                "forward probe hits obstacle {index} at ({:.2}, {:.2})",
                hit.x,
                hit.y
            );
        }
    }

    let dt = 1.0 / 60.0;
    for tick in 0..600 {
        mover.step(&course, dt);
        if tick % 60 == 0 {
            log::info!(
                "t={}s position ({:.2}, {:.2}) velocity ({:.2}, {:.2})",
                tick / 60,
                mover.position.x,
                mover.position.y,
                mover.velocity.x,
                mover.velocity.y
            );
        }
        if mover.position.x > 28.0 {
            log::info!("course completed at tick {tick}");
            break;
        }
    }

    log::info!(
        "final position ({:.2}, {:.2})",
        mover.position.x,
        mover.position.y
    );
}
