//! # area_core - Shape Measurement Engine
//!
//! `area_core` sums measurable quantities (area, volume, perimeter) over
//! collections of shapes. It is built around two seams:
//!
//! - **Open for extension**: a new shape is a new type implementing
//!   [`shapes::Shape`]; nothing else changes.
//! - **Substitutable aggregators**: every calculator implements
//!   [`calculator::Aggregator`] and returns one scalar from `sum`, so any of
//!   them can feed the same [`output::SumOutputter`].
//!
//! ## Quick Start
//!
//! ```rust
//! use area_core::calculator::{Aggregator, AreaCalculator};
//! use area_core::output::SumOutputter;
//! use area_core::shapes::{Circle, Square};
//!
//! let square = Square::new(4.0)?;
//! let circle = Circle::new(2.0)?;
//!
//! let areas = AreaCalculator::default().with_shape(&square).with_shape(&circle);
//! let total = areas.sum()?;
//! assert!((total - (16.0 + 4.0 * std::f64::consts::PI)).abs() < 1e-9);
//!
//! let json = SumOutputter::new(&areas).json()?;
//! assert!(json.starts_with(r#"{"quantity":"area""#));
//! # Ok::<(), area_core::errors::AreaError>(())
//! ```
//!
//! ## Modules
//!
//! - [`shapes`] - Shape and Solid capabilities with concrete variants
//! - [`calculator`] - Aggregators and the generic `aggregate` routine
//! - [`element`] - Tagged element type for decoding untyped input
//! - [`output`] - Rendering sums as JSON, HTML or text
//! - [`errors`] - Structured error types

pub mod calculator;
pub mod element;
pub mod errors;
pub mod output;
pub mod shapes;

// Re-export commonly used types at crate root for convenience
pub use calculator::{aggregate, sum_json, Aggregator, AreaCalculator, ElementCalculator, Quantity, VolumeCalculator};
pub use element::Element;
pub use errors::{AreaError, AreaResult};
pub use output::{OutputFormat, SumOutputter};
pub use shapes::{Shape, Solid};
