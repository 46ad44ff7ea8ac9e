//! # Collide2D
//!
//! A 2D convex-shape collision kernel with penetration resolution.
//!
//! ## Features
//!
//! - **Closed shape set**: points, segments, circles, capsules, convex
//!   polygons, compounds, and the `None`/`Global` sentinels
//! - **Pairwise queries**: intersection tests and minimum-translation
//!   penetration vectors for every shape pair
//! - **Shape producers**: transform, expand, and sweep, with
//!   buffer-reusing `*_into` variants
//! - **Spatial queries**: ray casting, nearest point, and rectangle
//!   classification
//! - **Resolution**: iterative multi-obstacle penetration resolution
//!
//! ## Quick Start
//!
//! ```rust
//! use collide2d::prelude::*;
//!
//! let floor = Shape::Polygon(Polygon::new(vec![
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(10.0, 0.0),
//!     Vec2::new(10.0, 1.0),
//!     Vec2::new(0.0, 1.0),
//! ]));
//! let player = Shape::Circle(Circle::new(Vec2::new(5.0, 1.2), 0.5));
//!
//! assert!(floor.intersects(&player));
//! let push = floor.penetration(&player);
//! assert!(push.y > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod shapes;

mod resolve;

pub use resolve::resolve_penetrations;

/// Common imports for kernel users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, ShapeConfig, ShapeSetConfig, TransformConfig},
        foundation::math::{Ray2, Rect, Transform2, Vec2},
        resolve_penetrations,
        shapes::{
            Capsule, Circle, Compound, Global, IntersectionType, NoneShape, Point, Polygon,
            Segment, Shape,
        },
    };
}
