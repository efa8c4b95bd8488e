//! # Aggregators
//!
//! Summation of a measurable quantity over an ordered collection.
//!
//! Every aggregator implements [`Aggregator`], whose only operation returns a
//! single scalar. Variants differ in *what* they measure, never in the shape
//! of their result, so callers (such as [`crate::output::SumOutputter`]) can
//! hold any of them behind `&dyn Aggregator`.
//!
//! All variants delegate to [`aggregate`], which is parametrised by a
//! measurement function rather than specialised per quantity.
//!
//! ## Example
//!
//! ```rust
//! use area_core::calculator::{Aggregator, AreaCalculator, VolumeCalculator};
//! use area_core::shapes::{Circle, Cube, Square};
//!
//! let square = Square::new(4.0)?;
//! let circle = Circle::new(2.0)?;
//! let areas = AreaCalculator::default().with_shape(&square).with_shape(&circle);
//!
//! let cube = Cube::new(2.0)?;
//! let volumes = VolumeCalculator::default().with_solid(&cube);
//!
//! let calculators: [&dyn Aggregator; 2] = [&areas, &volumes];
//! for calc in calculators {
//!     let total: f64 = calc.sum()?;
//!     assert!(total > 0.0);
//! }
//! # Ok::<(), area_core::errors::AreaError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::element::{decode_elements, Element};
use crate::errors::{AreaError, AreaResult};
use crate::shapes::{Shape, Solid};

/// The quantity an aggregator sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Area,
    Volume,
    Perimeter,
}

impl Quantity {
    /// Plural noun for report wording ("areas", "volumes", ...)
    pub fn plural(self) -> &'static str {
        match self {
            Quantity::Area => "areas",
            Quantity::Volume => "volumes",
            Quantity::Perimeter => "perimeters",
        }
    }

    /// Capability an element needs to be measured for this quantity
    pub fn capability(self) -> &'static str {
        match self {
            Quantity::Area | Quantity::Perimeter => "Shape",
            Quantity::Volume => "Solid",
        }
    }

    /// Measure `element`, or `None` if it lacks [`Quantity::capability`].
    pub fn measure(self, element: &Element) -> Option<f64> {
        match self {
            Quantity::Area => element.as_shape().map(|s| s.area()),
            Quantity::Perimeter => element.as_shape().map(|s| s.perimeter()),
            Quantity::Volume => element.as_solid().map(|s| s.volume()),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Area => "area",
            Quantity::Volume => "volume",
            Quantity::Perimeter => "perimeter",
        };
        f.write_str(name)
    }
}

/// Sum `measure` over `items`, in order.
///
/// An empty sequence sums to `0.0`.
pub fn aggregate<'a, T, I, F>(items: I, measure: F) -> f64
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> f64,
{
    items.into_iter().map(|item| measure(item)).sum()
}

/// Common contract of every aggregator variant.
///
/// `sum` always yields one scalar. It fails with
/// [`AreaError::InvalidShapeElement`] when an element lacks the measured
/// capability, and never returns a partial total.
pub trait Aggregator {
    /// Quantity being summed
    fn quantity(&self) -> Quantity;

    /// Number of elements held
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total of the quantity over all elements
    fn sum(&self) -> AreaResult<f64>;
}

/// Sums the area of borrowed shapes.
#[derive(Clone, Default)]
pub struct AreaCalculator<'a> {
    shapes: Vec<&'a dyn Shape>,
}

impl<'a> AreaCalculator<'a> {
    pub fn new(shapes: Vec<&'a dyn Shape>) -> Self {
        AreaCalculator { shapes }
    }

    /// Builder-style append
    pub fn with_shape(mut self, shape: &'a dyn Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn push(&mut self, shape: &'a dyn Shape) {
        self.shapes.push(shape);
    }
}

impl Aggregator for AreaCalculator<'_> {
    fn quantity(&self) -> Quantity {
        Quantity::Area
    }

    fn len(&self) -> usize {
        self.shapes.len()
    }

    fn sum(&self) -> AreaResult<f64> {
        let total = aggregate(self.shapes.iter().copied(), |shape| shape.area());
        tracing::trace!(count = self.shapes.len(), total, "summed areas");
        Ok(total)
    }
}

/// Sums the volume of borrowed solids.
#[derive(Clone, Default)]
pub struct VolumeCalculator<'a> {
    solids: Vec<&'a dyn Solid>,
}

impl<'a> VolumeCalculator<'a> {
    pub fn new(solids: Vec<&'a dyn Solid>) -> Self {
        VolumeCalculator { solids }
    }

    pub fn with_solid(mut self, solid: &'a dyn Solid) -> Self {
        self.solids.push(solid);
        self
    }

    pub fn push(&mut self, solid: &'a dyn Solid) {
        self.solids.push(solid);
    }
}

impl Aggregator for VolumeCalculator<'_> {
    fn quantity(&self) -> Quantity {
        Quantity::Volume
    }

    fn len(&self) -> usize {
        self.solids.len()
    }

    fn sum(&self) -> AreaResult<f64> {
        let total = aggregate(self.solids.iter().copied(), |solid| solid.volume());
        tracing::trace!(count = self.solids.len(), total, "summed volumes");
        Ok(total)
    }
}

/// Sums the perimeter of borrowed shapes.
#[derive(Clone, Default)]
pub struct PerimeterCalculator<'a> {
    shapes: Vec<&'a dyn Shape>,
}

impl<'a> PerimeterCalculator<'a> {
    pub fn new(shapes: Vec<&'a dyn Shape>) -> Self {
        PerimeterCalculator { shapes }
    }

    pub fn with_shape(mut self, shape: &'a dyn Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn push(&mut self, shape: &'a dyn Shape) {
        self.shapes.push(shape);
    }
}

impl Aggregator for PerimeterCalculator<'_> {
    fn quantity(&self) -> Quantity {
        Quantity::Perimeter
    }

    fn len(&self) -> usize {
        self.shapes.len()
    }

    fn sum(&self) -> AreaResult<f64> {
        Ok(aggregate(self.shapes.iter().copied(), |shape| shape.perimeter()))
    }
}

/// Aggregator over any item type with a caller-supplied measurement.
///
/// ```rust
/// use area_core::calculator::{Aggregator, MeasureCalculator, Quantity};
///
/// let sides = [3.0_f64, 4.0];
/// let calc = MeasureCalculator::new(Quantity::Area, sides.iter().collect(), |s: &f64| s * s);
/// assert_eq!(calc.sum()?, 25.0);
/// # Ok::<(), area_core::errors::AreaError>(())
/// ```
pub struct MeasureCalculator<'a, T: ?Sized> {
    quantity: Quantity,
    items: Vec<&'a T>,
    measure: Box<dyn Fn(&T) -> f64 + 'a>,
}

impl<'a, T: ?Sized> MeasureCalculator<'a, T> {
    pub fn new(quantity: Quantity, items: Vec<&'a T>, measure: impl Fn(&T) -> f64 + 'a) -> Self {
        MeasureCalculator {
            quantity,
            items,
            measure: Box::new(measure),
        }
    }
}

impl<T: ?Sized> Aggregator for MeasureCalculator<'_, T> {
    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn sum(&self) -> AreaResult<f64> {
        Ok(aggregate(self.items.iter().copied(), |item| (self.measure)(item)))
    }
}

/// Aggregator over decoded [`Element`]s.
///
/// Elements are checked for the capability `quantity` requires; a solid in an
/// area sum (or a planar shape in a volume sum) aborts the whole operation.
///
/// ```rust
/// use area_core::calculator::{Aggregator, ElementCalculator, Quantity};
/// use area_core::element::Element;
/// use area_core::shapes::{Cube, Square};
///
/// let elements = [Element::from(Square::new(4.0)?), Element::from(Cube::new(1.0)?)];
///
/// let areas = ElementCalculator::new(Quantity::Area, &elements);
/// assert_eq!(areas.sum().unwrap_err().error_code(), "INVALID_SHAPE_ELEMENT");
///
/// let volumes = ElementCalculator::new(Quantity::Volume, &elements[1..]);
/// assert_eq!(volumes.sum()?, 1.0);
/// # Ok::<(), area_core::errors::AreaError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ElementCalculator<'a> {
    quantity: Quantity,
    elements: &'a [Element],
}

impl<'a> ElementCalculator<'a> {
    pub fn new(quantity: Quantity, elements: &'a [Element]) -> Self {
        ElementCalculator { quantity, elements }
    }

    fn measure(&self, index: usize, element: &Element) -> AreaResult<f64> {
        self.quantity.measure(element).ok_or_else(|| {
            AreaError::invalid_element(
                index,
                format!(
                    "{} does not satisfy the {} capability required for {}",
                    element.kind(),
                    self.quantity.capability(),
                    self.quantity
                ),
            )
        })
    }
}

impl Aggregator for ElementCalculator<'_> {
    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn sum(&self) -> AreaResult<f64> {
        let total = self
            .elements
            .iter()
            .enumerate()
            .map(|(index, element)| self.measure(index, element))
            .sum::<AreaResult<f64>>()?;
        tracing::debug!(quantity = %self.quantity, count = self.elements.len(), total, "summed elements");
        Ok(total)
    }
}

/// Decode an untyped JSON array and sum `quantity` over it.
///
/// ```rust
/// use area_core::calculator::{sum_json, Quantity};
///
/// let shapes = serde_json::json!([
///     { "type": "Square", "length": 4.0 },
///     { "type": "Rectangle", "width": 2.0, "height": 3.0 }
/// ]);
/// assert_eq!(sum_json(&shapes, Quantity::Area)?, 22.0);
/// # Ok::<(), area_core::errors::AreaError>(())
/// ```
pub fn sum_json(value: &Value, quantity: Quantity) -> AreaResult<f64> {
    let elements = decode_elements(value)?;
    ElementCalculator::new(quantity, &elements).sum()
}
