//! # Shapes and Solids
//!
//! Measurable entities. Each variant owns its geometric attributes and
//! computes its own measurements; nothing outside the variant needs to know
//! how a circle's area is derived.
//!
//! - [`Shape`] - planar capability (`area`, `perimeter`)
//! - [`Solid`] - volumetric capability (`volume`)
//!
//! ## Adding a Variant
//!
//! Implement [`Shape`] (or [`Solid`]) for a new type. No existing variant and
//! no aggregator changes:
//!
//! ```rust
//! use area_core::shapes::{Shape, Square};
//! use area_core::calculator::{Aggregator, AreaCalculator};
//!
//! struct Ellipse {
//!     a: f64,
//!     b: f64,
//! }
//!
//! impl Shape for Ellipse {
//!     fn name(&self) -> &'static str {
//!         "Ellipse"
//!     }
//!     fn area(&self) -> f64 {
//!         std::f64::consts::PI * self.a * self.b
//!     }
//!     fn perimeter(&self) -> f64 {
//!         // Ramanujan's approximation
//!         let (a, b) = (self.a, self.b);
//!         std::f64::consts::PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
//!     }
//! }
//!
//! let square = Square::new(2.0).unwrap();
//! let ellipse = Ellipse { a: 1.0, b: 1.0 };
//! let calc = AreaCalculator::default().with_shape(&square).with_shape(&ellipse);
//! assert!((calc.sum().unwrap() - (4.0 + std::f64::consts::PI)).abs() < 1e-9);
//! ```

pub mod planar;
pub mod solids;

pub use planar::{Circle, Rectangle, RegularPolygon, Square, Triangle};
pub use solids::{Cube, Cylinder, Sphere};

use crate::errors::{AreaError, AreaResult};

/// Planar shape capability.
///
/// Implementations must return non-negative values computed only from their
/// own stored attributes.
pub trait Shape {
    /// Short variant name used in errors and reports (e.g. "Square")
    fn name(&self) -> &'static str;

    /// Enclosed area
    fn area(&self) -> f64;

    /// Length of the boundary
    fn perimeter(&self) -> f64;
}

/// Volumetric solid capability.
pub trait Solid {
    /// Short variant name used in errors and reports (e.g. "Sphere")
    fn name(&self) -> &'static str;

    /// Enclosed volume
    fn volume(&self) -> f64;
}

/// Check that a dimension is finite and strictly positive.
pub(crate) fn require_positive(shape: &str, field: &str, value: f64) -> AreaResult<f64> {
    if !value.is_finite() {
        return Err(AreaError::invalid_parameter(
            shape,
            field,
            value.to_string(),
            "Dimension must be a finite number",
        ));
    }
    if value <= 0.0 {
        return Err(AreaError::invalid_parameter(
            shape,
            field,
            value.to_string(),
            "Dimension must be positive",
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("Square", "length", 3.0).unwrap(), 3.0);
        assert!(require_positive("Square", "length", 0.0).is_err());
        assert!(require_positive("Square", "length", -1.0).is_err());
        assert!(require_positive("Square", "length", f64::NAN).is_err());
        assert!(require_positive("Square", "length", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_names_field() {
        let err = require_positive("Circle", "radius", -2.0).unwrap_err();
        match err {
            AreaError::InvalidShapeParameter { shape, field, value, .. } => {
                assert_eq!(shape, "Circle");
                assert_eq!(field, "radius");
                assert_eq!(value, "-2");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
