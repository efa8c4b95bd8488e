//! # Planar Shapes
//!
//! Concrete [`Shape`] variants. Constructors validate every dimension, so a
//! value of any of these types always has positive, finite attributes.
//!
//! ## Example
//!
//! ```rust
//! use area_core::shapes::{Circle, Shape, Square};
//!
//! let square = Square::new(4.0)?;
//! assert_eq!(square.area(), 16.0);
//!
//! let circle = Circle::new(2.0)?;
//! assert!((circle.area() - 4.0 * std::f64::consts::PI).abs() < 1e-12);
//! # Ok::<(), area_core::errors::AreaError>(())
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::{require_positive, Shape};
use crate::errors::{AreaError, AreaResult};

/// Square with side `length`.
///
/// ## JSON Example
///
/// ```json
/// { "length": 4.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SquareDims")]
pub struct Square {
    length: f64,
}

#[derive(Deserialize)]
struct SquareDims {
    length: f64,
}

impl TryFrom<SquareDims> for Square {
    type Error = AreaError;

    fn try_from(dims: SquareDims) -> AreaResult<Self> {
        Square::new(dims.length)
    }
}

impl Square {
    /// Create a square, failing if `length` is not positive.
    pub fn new(length: f64) -> AreaResult<Self> {
        Ok(Square {
            length: require_positive("Square", "length", length)?,
        })
    }

    /// Side length
    pub fn length(&self) -> f64 {
        self.length
    }
}

impl Shape for Square {
    fn name(&self) -> &'static str {
        "Square"
    }

    fn area(&self) -> f64 {
        self.length.powi(2)
    }

    fn perimeter(&self) -> f64 {
        4.0 * self.length
    }
}

/// Circle with the given `radius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircleDims")]
pub struct Circle {
    radius: f64,
}

#[derive(Deserialize)]
struct CircleDims {
    radius: f64,
}

impl TryFrom<CircleDims> for Circle {
    type Error = AreaError;

    fn try_from(dims: CircleDims) -> AreaResult<Self> {
        Circle::new(dims.radius)
    }
}

impl Circle {
    /// Create a circle, failing if `radius` is not positive.
    pub fn new(radius: f64) -> AreaResult<Self> {
        Ok(Circle {
            radius: require_positive("Circle", "radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectangleDims")]
pub struct Rectangle {
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
struct RectangleDims {
    width: f64,
    height: f64,
}

impl TryFrom<RectangleDims> for Rectangle {
    type Error = AreaError;

    fn try_from(dims: RectangleDims) -> AreaResult<Self> {
        Rectangle::new(dims.width, dims.height)
    }
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> AreaResult<Self> {
        Ok(Rectangle {
            width: require_positive("Rectangle", "width", width)?,
            height: require_positive("Rectangle", "height", height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

/// Isosceles triangle described by its base and height.
///
/// The perimeter assumes the apex sits above the midpoint of the base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TriangleDims")]
pub struct Triangle {
    base: f64,
    height: f64,
}

#[derive(Deserialize)]
struct TriangleDims {
    base: f64,
    height: f64,
}

impl TryFrom<TriangleDims> for Triangle {
    type Error = AreaError;

    fn try_from(dims: TriangleDims) -> AreaResult<Self> {
        Triangle::new(dims.base, dims.height)
    }
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> AreaResult<Self> {
        Ok(Triangle {
            base: require_positive("Triangle", "base", base)?,
            height: require_positive("Triangle", "height", height)?,
        })
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "Triangle"
    }

    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }

    fn perimeter(&self) -> f64 {
        let leg = (self.height.powi(2) + (self.base / 2.0).powi(2)).sqrt();
        self.base + 2.0 * leg
    }
}

/// Regular polygon (pentagon, hexagon, ...) with `sides` equal edges.
///
/// ## JSON Example
///
/// ```json
/// { "sides": 5, "side_length": 2.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RegularPolygonDims")]
pub struct RegularPolygon {
    sides: u32,
    side_length: f64,
}

#[derive(Deserialize)]
struct RegularPolygonDims {
    sides: u32,
    side_length: f64,
}

impl TryFrom<RegularPolygonDims> for RegularPolygon {
    type Error = AreaError;

    fn try_from(dims: RegularPolygonDims) -> AreaResult<Self> {
        RegularPolygon::new(dims.sides, dims.side_length)
    }
}

impl RegularPolygon {
    /// Minimum number of sides for a closed polygon
    pub const MIN_SIDES: u32 = 3;

    pub fn new(sides: u32, side_length: f64) -> AreaResult<Self> {
        if sides < Self::MIN_SIDES {
            return Err(AreaError::invalid_parameter(
                "RegularPolygon",
                "sides",
                sides.to_string(),
                "A polygon needs at least 3 sides",
            ));
        }
        Ok(RegularPolygon {
            sides,
            side_length: require_positive("RegularPolygon", "side_length", side_length)?,
        })
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }
}

impl Shape for RegularPolygon {
    fn name(&self) -> &'static str {
        "RegularPolygon"
    }

    /// A = n·s² / (4·tan(π/n))
    fn area(&self) -> f64 {
        let n = f64::from(self.sides);
        n * self.side_length.powi(2) / (4.0 * (PI / n).tan())
    }

    fn perimeter(&self) -> f64 {
        f64::from(self.sides) * self.side_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_area() {
        let square = Square::new(4.0).unwrap();
        assert_eq!(square.area(), 16.0);
        assert_eq!(square.perimeter(), 16.0);
    }

    #[test]
    fn test_circle_area() {
        let circle = Circle::new(2.0).unwrap();
        assert!((circle.area() - PI * 4.0).abs() < 1e-12);
        assert!((circle.perimeter() - 4.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_rectangle_and_triangle() {
        let rect = Rectangle::new(3.0, 5.0).unwrap();
        assert_eq!(rect.area(), 15.0);
        assert_eq!(rect.perimeter(), 16.0);

        // 6 wide, 4 tall: legs are 5 (3-4-5 triangle)
        let tri = Triangle::new(6.0, 4.0).unwrap();
        assert_eq!(tri.area(), 12.0);
        assert!((tri.perimeter() - 16.0).abs() < 1e-12);
    }

    #[test]
    fn test_regular_polygon_matches_square() {
        // A 4-sided regular polygon is a square
        let poly = RegularPolygon::new(4, 3.0).unwrap();
        assert!((poly.area() - 9.0).abs() < 1e-9);
        assert_eq!(poly.perimeter(), 12.0);
    }

    #[test]
    fn test_pentagon_area() {
        // Unit pentagon: ~1.7204774
        let pentagon = RegularPolygon::new(5, 1.0).unwrap();
        assert!((pentagon.area() - 1.720_477_4).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(Square::new(0.0).is_err());
        assert!(Circle::new(-2.0).is_err());
        assert!(Rectangle::new(1.0, f64::NAN).is_err());
        assert!(Triangle::new(-1.0, 1.0).is_err());
        assert!(RegularPolygon::new(2, 1.0).is_err());
        assert!(RegularPolygon::new(6, 0.0).is_err());
    }

    #[test]
    fn test_invalid_parameter_error_kind() {
        let err = Rectangle::new(2.0, -1.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SHAPE_PARAMETER");
    }

    #[test]
    fn test_deserialize_rejects_invalid_dimensions() {
        assert!(serde_json::from_str::<Square>(r#"{"length":-4.0}"#).is_err());
        assert!(serde_json::from_str::<Circle>(r#"{"radius":0.0}"#).is_err());
        assert!(serde_json::from_str::<Rectangle>(r#"{"width":2.0,"height":-1.0}"#).is_err());
        assert!(serde_json::from_str::<Triangle>(r#"{"base":0.0,"height":1.0}"#).is_err());
        assert!(serde_json::from_str::<RegularPolygon>(r#"{"sides":2,"side_length":1.0}"#).is_err());

        let err = serde_json::from_str::<Square>(r#"{"length":-4.0}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid Square parameter 'length'"), "{err}");
    }

    #[test]
    fn test_serialization() {
        let square = Square::new(4.0).unwrap();
        let json = serde_json::to_string(&square).unwrap();
        assert_eq!(json, r#"{"length":4.0}"#);

        let poly: RegularPolygon = serde_json::from_str(r#"{"sides":6,"side_length":2.0}"#).unwrap();
        assert_eq!(poly.sides(), 6);
    }
}
