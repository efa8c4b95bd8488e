//! # Quadra CLI Application
//!
//! Command-line front end for `area_core`: sums a JSON array of shapes and
//! renders the result as text, JSON or HTML.
//!
//! ```text
//! $ echo '[{"type":"Square","length":4},{"type":"Circle","radius":2}]' | quadra sum -
//! Total area: 28.57
//! ```

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use area_core::calculator::{Aggregator, AreaCalculator, ElementCalculator, Quantity, VolumeCalculator};
use area_core::element::decode_elements;
use area_core::output::{OutputFormat, SumOutputter};
use area_core::shapes::{Circle, Cube, Cylinder, Sphere, Square};
use area_core::AreaError;

/// Sum areas, volumes and perimeters of shapes
#[derive(Parser, Debug)]
#[command(name = "quadra", author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by QUADRA_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sum a quantity over a JSON array of shapes
    Sum {
        /// JSON file holding an array of tagged shapes, or `-` for stdin
        input: PathBuf,

        /// Quantity to sum
        #[arg(short, long, value_enum, default_value_t = QuantityArg::Area)]
        quantity: QuantityArg,

        /// Output format
        #[arg(short, long, value_enum, env = "QUADRA_FORMAT", default_value_t = FormatArg::Text)]
        format: FormatArg,

        /// Decimal places for text and html output
        #[arg(short, long, env = "QUADRA_PRECISION", default_value_t = 2)]
        precision: usize,
    },

    /// Print the square/circle walkthrough in every format
    Demo,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum QuantityArg {
    Area,
    Volume,
    Perimeter,
}

impl From<QuantityArg> for Quantity {
    fn from(arg: QuantityArg) -> Self {
        match arg {
            QuantityArg::Area => Quantity::Area,
            QuantityArg::Volume => Quantity::Volume,
            QuantityArg::Perimeter => Quantity::Perimeter,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FormatArg {
    Json,
    Html,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("QUADRA_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(area_err) = e.downcast_ref::<AreaError>() {
                if let Ok(json) = serde_json::to_string_pretty(area_err) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Sum {
            input,
            quantity,
            format,
            precision,
        } => {
            let contents = read_input(&input)?;
            let rendered = sum_input(&contents, quantity.into(), format.into(), precision)
                .with_context(|| format!("summing {}", input.display()))?;
            println!("{}", rendered);
        }
        Command::Demo => demo()?,
    }
    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut contents = String::new();
        io::stdin().read_to_string(&mut contents).context("reading stdin")?;
        return Ok(contents);
    }
    std::fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))
}

/// Decode `contents` as a JSON array of shapes and render the total of `quantity`.
fn sum_input(contents: &str, quantity: Quantity, format: OutputFormat, precision: usize) -> Result<String, AreaError> {
    let value: Value = serde_json::from_str(contents)?;
    let elements = decode_elements(&value)?;
    let calculator = ElementCalculator::new(quantity, &elements);

    tracing::debug!(%quantity, %format, precision, elements = elements.len(), "rendering sum");

    SumOutputter::new(&calculator).with_precision(precision).render(format)
}

fn demo() -> Result<()> {
    println!("Quadra - Shape Measurement Demo");
    println!("===============================");
    println!();

    let square = Square::new(4.0)?;
    let circle = Circle::new(2.0)?;
    let areas = AreaCalculator::default().with_shape(&square).with_shape(&circle);

    let cube = Cube::new(2.0)?;
    let sphere = Sphere::new(1.0)?;
    let cylinder = Cylinder::new(1.0, 3.0)?;
    let volumes = VolumeCalculator::default()
        .with_solid(&cube)
        .with_solid(&sphere)
        .with_solid(&cylinder);

    let calculators: [(&str, &dyn Aggregator); 2] = [
        ("Square(4) + Circle(2)", &areas),
        ("Cube(2) + Sphere(1) + Cylinder(1, 3)", &volumes),
    ];

    for (title, calculator) in calculators {
        let output = SumOutputter::new(calculator).with_precision(2);
        println!("{} ({} elements)", title, calculator.len());
        println!("  Text: {}", output.text()?);
        println!("  JSON: {}", output.json()?);
        println!("  HTML: {}", output.html()?);
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sum() {
        let cli = Cli::try_parse_from([
            "quadra", "sum", "shapes.json", "--quantity", "volume", "--format", "json", "-p", "3",
        ])
        .unwrap();
        match cli.command {
            Command::Sum {
                input,
                quantity,
                format,
                precision,
            } => {
                assert_eq!(input, PathBuf::from("shapes.json"));
                assert_eq!(quantity, QuantityArg::Volume);
                assert_eq!(format, FormatArg::Json);
                assert_eq!(precision, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_sum_defaults_to_area() {
        let cli = Cli::try_parse_from(["quadra", "sum", "-"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Sum {
                quantity: QuantityArg::Area,
                ..
            }
        ));
    }

    #[test]
    fn test_sum_input() {
        let shapes = r#"[{"type":"Square","length":4.0},{"type":"Rectangle","width":2.0,"height":3.0}]"#;
        let text = sum_input(shapes, Quantity::Area, OutputFormat::Text, 0).unwrap();
        assert_eq!(text, "Total area: 22");

        let json = sum_input(shapes, Quantity::Perimeter, OutputFormat::Json, 2).unwrap();
        assert_eq!(json, r#"{"quantity":"perimeter","sum":26.0}"#);
    }

    #[test]
    fn test_sum_input_rejects_missing_capability() {
        let shapes = r#"[{"type":"Square","length":1.0},{"type":"Sphere","radius":1.0}]"#;
        let err = sum_input(shapes, Quantity::Area, OutputFormat::Text, 2).unwrap_err();
        assert!(matches!(err, AreaError::InvalidShapeElement { index: 1, .. }));
    }

    #[test]
    fn test_sum_input_rejects_bad_json() {
        let err = sum_input("not json", Quantity::Area, OutputFormat::Text, 2).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_demo_runs() {
        demo().unwrap();
    }
}
