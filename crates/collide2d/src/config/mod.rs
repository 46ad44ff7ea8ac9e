//! Configuration system
//!
//! Serializable descriptions of shapes, loadable from TOML or RON files.
//! A [`ShapeConfig`] is plain data; [`ShapeConfig::build`] validates it
//! and produces a live [`Shape`] with fresh bounds.

pub use serde::{Deserialize, Serialize};

use crate::foundation::math::{Transform2, Vec2};
use crate::shapes::{
    Capsule, Circle, Compound, Global, NoneShape, Point, Polygon, Segment, Shape,
};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Described shape is geometrically invalid
    #[error("Invalid shape: {0}")]
    InvalidShape(String),
}

/// Serializable transform description
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Translation
    pub position: [f32; 2],
    /// Rotation in radians
    #[serde(default)]
    pub rotation: f32,
    /// Per-axis scale
    #[serde(default = "default_scale")]
    pub scale: [f32; 2],
}

fn default_scale() -> [f32; 2] {
    [1.0, 1.0]
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0],
            rotation: 0.0,
            scale: [1.0, 1.0],
        }
    }
}

impl TransformConfig {
    /// Build the live transform
    pub fn build(&self) -> Transform2 {
        Transform2 {
            position: Vec2::new(self.position[0], self.position[1]),
            rotation: self.rotation,
            scale: Vec2::new(self.scale[0], self.scale[1]),
        }
    }
}

/// Serializable shape description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ShapeConfig {
    /// Non-colliding placeholder at a location
    None {
        /// Location
        x: f32,
        /// Location
        y: f32,
    },
    /// A single point
    Point {
        /// Location
        x: f32,
        /// Location
        y: f32,
    },
    /// A line segment
    Segment {
        /// Start endpoint
        x1: f32,
        /// Start endpoint
        y1: f32,
        /// End endpoint
        x2: f32,
        /// End endpoint
        y2: f32,
    },
    /// A circle
    Circle {
        /// Center
        x: f32,
        /// Center
        y: f32,
        /// Radius (non-negative)
        radius: f32,
    },
    /// A capsule
    Capsule {
        /// Spine start
        x1: f32,
        /// Spine start
        y1: f32,
        /// Spine end
        x2: f32,
        /// Spine end
        y2: f32,
        /// Radius (non-negative)
        radius: f32,
    },
    /// A convex polygon with counter-clockwise winding
    Polygon {
        /// Vertices in counter-clockwise order
        vertices: Vec<[f32; 2]>,
        /// Optional transform applied to the vertices at build time
        #[serde(default)]
        transform: Option<TransformConfig>,
    },
    /// An ordered union of child shapes
    Compound {
        /// Child shape descriptions
        children: Vec<ShapeConfig>,
    },
    /// Universal unbounded sentinel
    Global,
}

impl ShapeConfig {
    /// Validate the description and build the live shape
    pub fn build(&self) -> Result<Shape, ConfigError> {
        match self {
            ShapeConfig::None { x, y } => Ok(Shape::None(NoneShape::new(Vec2::new(*x, *y)))),
            ShapeConfig::Point { x, y } => Ok(Shape::Point(Point::new(Vec2::new(*x, *y)))),
            ShapeConfig::Segment { x1, y1, x2, y2 } => Ok(Shape::Segment(Segment::new(
                Vec2::new(*x1, *y1),
                Vec2::new(*x2, *y2),
            ))),
            ShapeConfig::Circle { x, y, radius } => {
                if *radius < 0.0 {
                    return Err(ConfigError::InvalidShape(format!(
                        "circle radius must be non-negative, got {radius}"
                    )));
                }
                Ok(Shape::Circle(Circle::new(Vec2::new(*x, *y), *radius)))
            }
            ShapeConfig::Capsule {
                x1,
                y1,
                x2,
                y2,
                radius,
            } => {
                if *radius < 0.0 {
                    return Err(ConfigError::InvalidShape(format!(
                        "capsule radius must be non-negative, got {radius}"
                    )));
                }
                Ok(Shape::Capsule(Capsule::new(
                    Vec2::new(*x1, *y1),
                    Vec2::new(*x2, *y2),
                    *radius,
                )))
            }
            ShapeConfig::Polygon {
                vertices,
                transform,
            } => {
                if vertices.len() < 3 {
                    return Err(ConfigError::InvalidShape(format!(
                        "polygon needs at least 3 vertices, got {}",
                        vertices.len()
                    )));
                }
                let mut points: Vec<Vec2> =
                    vertices.iter().map(|v| Vec2::new(v[0], v[1])).collect();
                if let Some(transform) = transform {
                    let built = transform.build();
                    for point in &mut points {
                        *point = built.transform_point(*point);
                    }
                }
                Ok(Shape::Polygon(Polygon::new(points)))
            }
            ShapeConfig::Compound { children } => {
                if children.is_empty() {
                    return Err(ConfigError::InvalidShape(
                        "compound needs at least one child".to_string(),
                    ));
                }
                let built: Result<Vec<Shape>, ConfigError> =
                    children.iter().map(ShapeConfig::build).collect();
                Ok(Shape::Compound(Compound::new(built?)))
            }
            ShapeConfig::Global => Ok(Shape::Global(Global::new())),
        }
    }

    /// Describe an existing shape
    pub fn from_shape(shape: &Shape) -> Self {
        match shape {
            Shape::None(s) => ShapeConfig::None {
                x: s.location.x,
                y: s.location.y,
            },
            Shape::Point(s) => ShapeConfig::Point {
                x: s.location.x,
                y: s.location.y,
            },
            Shape::Segment(s) => ShapeConfig::Segment {
                x1: s.start.x,
                y1: s.start.y,
                x2: s.end.x,
                y2: s.end.y,
            },
            Shape::Circle(s) => ShapeConfig::Circle {
                x: s.center.x,
                y: s.center.y,
                radius: s.radius,
            },
            Shape::Capsule(s) => ShapeConfig::Capsule {
                x1: s.start.x,
                y1: s.start.y,
                x2: s.end.x,
                y2: s.end.y,
                radius: s.radius,
            },
            Shape::Polygon(s) => ShapeConfig::Polygon {
                vertices: s.vertices.iter().map(|v| [v.x, v.y]).collect(),
                transform: None,
            },
            Shape::Compound(s) => ShapeConfig::Compound {
                children: s.children.iter().map(ShapeConfig::from_shape).collect(),
            },
            Shape::Global(_) => ShapeConfig::Global,
        }
    }
}

impl Shape {
    /// Serializable description of this shape
    pub fn to_config(&self) -> ShapeConfig {
        ShapeConfig::from_shape(self)
    }

    /// Validate a description and build the shape it describes
    pub fn from_config(config: &ShapeConfig) -> Result<Shape, ConfigError> {
        config.build()
    }
}

/// A named set of shape descriptions, the on-disk unit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeSetConfig {
    /// Shape descriptions in file order
    pub shapes: Vec<ShapeConfig>,
}

impl Config for ShapeSetConfig {}

impl ShapeSetConfig {
    /// Validate and build every described shape
    pub fn build_all(&self) -> Result<Vec<Shape>, ConfigError> {
        self.shapes.iter().map(ShapeConfig::build).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_build_valid_shapes() {
        let configs = vec![
            ShapeConfig::Point { x: 1.0, y: 2.0 },
            ShapeConfig::Circle {
                x: 0.0,
                y: 0.0,
                radius: 1.5,
            },
            ShapeConfig::Capsule {
                x1: 0.0,
                y1: 0.0,
                x2: 2.0,
                y2: 0.0,
                radius: 0.5,
            },
            ShapeConfig::Global,
        ];
        for config in &configs {
            assert!(config.build().is_ok());
        }
    }

    #[test]
    fn test_negative_radius_rejected() {
        let config = ShapeConfig::Circle {
            x: 0.0,
            y: 0.0,
            radius: -1.0,
        };
        assert!(matches!(
            config.build(),
            Err(ConfigError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_degenerate_polygon_rejected() {
        let config = ShapeConfig::Polygon {
            vertices: vec![[0.0, 0.0], [1.0, 0.0]],
            transform: None,
        };
        assert!(config.build().is_err());

        let empty_compound = ShapeConfig::Compound { children: vec![] };
        assert!(empty_compound.build().is_err());
    }

    #[test]
    fn test_polygon_transform_applied_at_build() {
        let config = ShapeConfig::Polygon {
            vertices: vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
            transform: Some(TransformConfig {
                position: [10.0, 0.0],
                rotation: 0.0,
                scale: [2.0, 2.0],
            }),
        };
        let Shape::Polygon(polygon) = config.build().unwrap() else {
            panic!("expected polygon");
        };
        assert_relative_eq!(polygon.vertices[1].x, 12.0, epsilon = 1e-5);
        assert_relative_eq!(polygon.vertices[2].y, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_ron_round_trip() {
        let set = ShapeSetConfig {
            shapes: vec![
                ShapeConfig::Circle {
                    x: 1.0,
                    y: 2.0,
                    radius: 3.0,
                },
                ShapeConfig::Compound {
                    children: vec![ShapeConfig::Segment {
                        x1: 0.0,
                        y1: 0.0,
                        x2: 1.0,
                        y2: 1.0,
                    }],
                },
            ],
        };
        let text = ron::ser::to_string_pretty(&set, Default::default()).unwrap();
        let parsed: ShapeSetConfig = ron::from_str(&text).unwrap();
        assert_eq!(parsed.shapes.len(), 2);
        assert!(parsed.build_all().is_ok());
    }

    #[test]
    fn test_describe_and_rebuild() {
        let original = Shape::Capsule(crate::shapes::Capsule::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 1.0),
            0.75,
        ));
        let config = ShapeConfig::from_shape(&original);
        let rebuilt = config.build().unwrap();
        assert_eq!(rebuilt, original);
    }
}
