//! # Elements
//!
//! [`Element`] is the tagged, decodable form of every shape and solid. It is
//! the only place where "does this thing have an area?" is a runtime
//! question: typed code hands `&dyn Shape` to aggregators and the compiler
//! answers it instead.
//!
//! ## JSON Serialization
//!
//! Elements serialize with a `"type"` discriminator:
//!
//! ```json
//! { "type": "Circle", "radius": 2.0 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use area_core::element::decode_elements;
//!
//! let value = serde_json::json!([
//!     { "type": "Square", "length": 4.0 },
//!     { "type": "Sphere", "radius": 1.0 }
//! ]);
//! let elements = decode_elements(&value)?;
//! assert!(elements[0].as_shape().is_some());
//! assert!(elements[1].as_shape().is_none());
//! # Ok::<(), area_core::errors::AreaError>(())
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{AreaError, AreaResult};
use crate::shapes::{
    Circle, Cube, Cylinder, Rectangle, RegularPolygon, Shape, Solid, Sphere, Square, Triangle,
};

/// Any measurable entity, planar or solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Element {
    Square(Square),
    Circle(Circle),
    Rectangle(Rectangle),
    Triangle(Triangle),
    RegularPolygon(RegularPolygon),
    Cube(Cube),
    Sphere(Sphere),
    Cylinder(Cylinder),
}

impl Element {
    /// Variant name as it appears in the `"type"` tag
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Square(_) => "Square",
            Element::Circle(_) => "Circle",
            Element::Rectangle(_) => "Rectangle",
            Element::Triangle(_) => "Triangle",
            Element::RegularPolygon(_) => "RegularPolygon",
            Element::Cube(_) => "Cube",
            Element::Sphere(_) => "Sphere",
            Element::Cylinder(_) => "Cylinder",
        }
    }

    /// Borrow as a planar shape, if this element has one.
    pub fn as_shape(&self) -> Option<&dyn Shape> {
        match self {
            Element::Square(s) => Some(s),
            Element::Circle(c) => Some(c),
            Element::Rectangle(r) => Some(r),
            Element::Triangle(t) => Some(t),
            Element::RegularPolygon(p) => Some(p),
            Element::Cube(_) | Element::Sphere(_) | Element::Cylinder(_) => None,
        }
    }

    /// Borrow as a solid, if this element has one.
    pub fn as_solid(&self) -> Option<&dyn Solid> {
        match self {
            Element::Cube(c) => Some(c),
            Element::Sphere(s) => Some(s),
            Element::Cylinder(c) => Some(c),
            _ => None,
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Element {
                fn from(value: $variant) -> Self {
                    Element::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(Square, Circle, Rectangle, Triangle, RegularPolygon, Cube, Sphere, Cylinder);

/// Decode one untyped value into an element.
///
/// Every variant deserializes through its constructor, so bad dimensions
/// are rejected here too. `index` is the element's position in its
/// enclosing sequence and is reported in [`AreaError::InvalidShapeElement`]
/// when the value is not a valid element.
pub fn decode_element(index: usize, value: &Value) -> AreaResult<Element> {
    Element::deserialize(value).map_err(|e| {
        tracing::debug!(index, error = %e, "rejected undecodable element");
        AreaError::invalid_element(index, format!("Not a valid shape: {e}"))
    })
}

/// Decode a JSON array into validated elements, preserving order.
pub fn decode_elements(value: &Value) -> AreaResult<Vec<Element>> {
    let items = value
        .as_array()
        .ok_or_else(|| AreaError::serialization("Expected a JSON array of elements"))?;

    let elements = items
        .iter()
        .enumerate()
        .map(|(index, item)| decode_element(index, item))
        .collect::<AreaResult<Vec<_>>>()?;

    tracing::trace!(count = elements.len(), "decoded elements");
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tagged_serialization() {
        let element = Element::from(Square::new(4.0).unwrap());
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json, json!({ "type": "Square", "length": 4.0 }));

        let roundtrip: Element = serde_json::from_value(json).unwrap();
        assert_eq!(roundtrip, element);
    }

    #[test]
    fn test_capabilities() {
        let circle = Element::from(Circle::new(1.0).unwrap());
        let cube = Element::from(Cube::new(1.0).unwrap());
        assert!(circle.as_shape().is_some());
        assert!(circle.as_solid().is_none());
        assert!(cube.as_shape().is_none());
        assert_eq!(cube.as_solid().map(|s| s.volume()), Some(1.0));
    }

    #[test]
    fn test_decode_rejects_unknown_type() {
        let value = json!([
            { "type": "Square", "length": 1.0 },
            { "type": "Hexahedron", "edge": 1.0 }
        ]);
        let err = decode_elements(&value).unwrap_err();
        assert!(matches!(err, AreaError::InvalidShapeElement { index: 1, .. }));
    }

    #[test]
    fn test_decode_rejects_non_object() {
        let err = decode_elements(&json!(["square"])).unwrap_err();
        assert!(matches!(err, AreaError::InvalidShapeElement { index: 0, .. }));
    }

    #[test]
    fn test_decode_validates_dimensions() {
        let value = json!([
            { "type": "Square", "length": 2.0 },
            { "type": "Circle", "radius": -1.0 }
        ]);
        match decode_elements(&value).unwrap_err() {
            AreaError::InvalidShapeElement { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("Dimension must be positive"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_tagged_element_rejects_zero_dimension() {
        let result = serde_json::from_str::<Element>(r#"{"type":"Cube","edge":0.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_requires_array() {
        let err = decode_elements(&json!({ "type": "Square", "length": 1.0 })).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
