//! Convex collision shapes and their pairwise queries
//!
//! One module per shape variant plus [`shape`] for the closed `Shape`
//! union and its dispatch tables. Construct payloads directly or convert
//! with `From`, then query through [`Shape`].

pub mod capsule;
pub mod circle;
pub mod compound;
pub mod global;
pub mod none;
pub mod point;
pub mod polygon;
pub mod segment;
pub mod shape;

pub use capsule::Capsule;
pub use circle::Circle;
pub use compound::Compound;
pub use global::Global;
pub use none::NoneShape;
pub use point::Point;
pub use polygon::Polygon;
pub use segment::Segment;
pub use shape::{IntersectionType, Shape};
