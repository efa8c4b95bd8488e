//! # Output Formatting
//!
//! [`SumOutputter`] renders the scalar result of any [`Aggregator`]. It only
//! ever calls `sum()` and `quantity()`, so it works with every aggregator
//! variant, including ones defined outside this crate.
//!
//! ## Example
//!
//! ```rust
//! use area_core::calculator::AreaCalculator;
//! use area_core::output::SumOutputter;
//! use area_core::shapes::Square;
//!
//! let square = Square::new(4.0)?;
//! let areas = AreaCalculator::default().with_shape(&square);
//! let output = SumOutputter::new(&areas);
//!
//! assert_eq!(output.json()?, r#"{"quantity":"area","sum":16.0}"#);
//! assert_eq!(output.html()?, "<h1>Sum of the areas of provided shapes: 16</h1>");
//! # Ok::<(), area_core::errors::AreaError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::{Aggregator, Quantity};
use crate::errors::{AreaError, AreaResult};

/// Rendering target for a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Html,
    #[default]
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Html => f.write_str("html"),
            OutputFormat::Text => f.write_str("text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AreaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(AreaError::serialization(format!("Unknown output format: {other}"))),
        }
    }
}

/// JSON body produced by [`SumOutputter::json`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SumReport {
    pub quantity: Quantity,
    pub sum: f64,
}

/// Renders an aggregator's sum as JSON, HTML or plain text.
pub struct SumOutputter<'a> {
    calculator: &'a dyn Aggregator,
    precision: Option<usize>,
}

impl<'a> SumOutputter<'a> {
    pub fn new(calculator: &'a dyn Aggregator) -> Self {
        SumOutputter {
            calculator,
            precision: None,
        }
    }

    /// Fix the number of decimals in html and text output.
    ///
    /// JSON output always carries the full-precision number.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    fn format_value(&self, value: f64) -> String {
        match self.precision {
            Some(p) => format!("{value:.p$}"),
            None => value.to_string(),
        }
    }

    /// The calculator's sum, rejected if it overflowed to a non-finite value.
    ///
    /// JSON has no encoding for infinities, so every format refuses them
    /// rather than rendering `null` or `inf`.
    fn finite_sum(&self) -> AreaResult<f64> {
        let sum = self.calculator.sum()?;
        if !sum.is_finite() {
            return Err(AreaError::serialization(format!(
                "Sum of {} is not a finite number: {}",
                self.calculator.quantity().plural(),
                sum
            )));
        }
        Ok(sum)
    }

    /// The structured report, before encoding
    pub fn report(&self) -> AreaResult<SumReport> {
        Ok(SumReport {
            quantity: self.calculator.quantity(),
            sum: self.finite_sum()?,
        })
    }

    /// `{"quantity":"area","sum":16.0}`
    pub fn json(&self) -> AreaResult<String> {
        Ok(serde_json::to_string(&self.report()?)?)
    }

    /// `<h1>Sum of the areas of provided shapes: 16</h1>`
    pub fn html(&self) -> AreaResult<String> {
        let sum = self.finite_sum()?;
        Ok(format!(
            "<h1>Sum of the {} of provided shapes: {}</h1>",
            self.calculator.quantity().plural(),
            self.format_value(sum)
        ))
    }

    /// `Total area: 16`
    pub fn text(&self) -> AreaResult<String> {
        let sum = self.finite_sum()?;
        Ok(format!("Total {}: {}", self.calculator.quantity(), self.format_value(sum)))
    }

    pub fn render(&self, format: OutputFormat) -> AreaResult<String> {
        match format {
            OutputFormat::Json => self.json(),
            OutputFormat::Html => self.html(),
            OutputFormat::Text => self.text(),
        }
    }
}
