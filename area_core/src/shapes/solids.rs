//! # Solids
//!
//! Concrete [`Solid`] variants for the volume aggregator.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::{require_positive, Solid};
use crate::errors::{AreaError, AreaResult};

/// Cube with edge length `edge`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CubeDims")]
pub struct Cube {
    edge: f64,
}

#[derive(Deserialize)]
struct CubeDims {
    edge: f64,
}

impl TryFrom<CubeDims> for Cube {
    type Error = AreaError;

    fn try_from(dims: CubeDims) -> AreaResult<Self> {
        Cube::new(dims.edge)
    }
}

impl Cube {
    pub fn new(edge: f64) -> AreaResult<Self> {
        Ok(Cube {
            edge: require_positive("Cube", "edge", edge)?,
        })
    }

    pub fn edge(&self) -> f64 {
        self.edge
    }
}

impl Solid for Cube {
    fn name(&self) -> &'static str {
        "Cube"
    }

    fn volume(&self) -> f64 {
        self.edge.powi(3)
    }
}

/// Sphere with the given `radius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SphereDims")]
pub struct Sphere {
    radius: f64,
}

#[derive(Deserialize)]
struct SphereDims {
    radius: f64,
}

impl TryFrom<SphereDims> for Sphere {
    type Error = AreaError;

    fn try_from(dims: SphereDims) -> AreaResult<Self> {
        Sphere::new(dims.radius)
    }
}

impl Sphere {
    pub fn new(radius: f64) -> AreaResult<Self> {
        Ok(Sphere {
            radius: require_positive("Sphere", "radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Solid for Sphere {
    fn name(&self) -> &'static str {
        "Sphere"
    }

    /// V = 4/3·π·r³
    fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius.powi(3)
    }
}

/// Right circular cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CylinderDims")]
pub struct Cylinder {
    radius: f64,
    height: f64,
}

#[derive(Deserialize)]
struct CylinderDims {
    radius: f64,
    height: f64,
}

impl TryFrom<CylinderDims> for Cylinder {
    type Error = AreaError;

    fn try_from(dims: CylinderDims) -> AreaResult<Self> {
        Cylinder::new(dims.radius, dims.height)
    }
}

impl Cylinder {
    pub fn new(radius: f64, height: f64) -> AreaResult<Self> {
        Ok(Cylinder {
            radius: require_positive("Cylinder", "radius", radius)?,
            height: require_positive("Cylinder", "height", height)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Solid for Cylinder {
    fn name(&self) -> &'static str {
        "Cylinder"
    }

    fn volume(&self) -> f64 {
        PI * self.radius.powi(2) * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_volume() {
        assert_eq!(Cube::new(3.0).unwrap().volume(), 27.0);
    }

    #[test]
    fn test_sphere_volume() {
        let sphere = Sphere::new(3.0).unwrap();
        assert!((sphere.volume() - 36.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_cylinder_volume() {
        let cyl = Cylinder::new(2.0, 5.0).unwrap();
        assert!((cyl.volume() - 20.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Cube::new(-1.0).is_err());
        assert!(Sphere::new(0.0).is_err());
        assert!(Cylinder::new(1.0, 0.0).is_err());
    }

    #[test]
    fn test_deserialize_goes_through_constructor() {
        let sphere: Sphere = serde_json::from_str(r#"{"radius":2.0}"#).unwrap();
        assert_eq!(sphere.radius(), 2.0);

        assert!(serde_json::from_str::<Cube>(r#"{"edge":-3.0}"#).is_err());
        assert!(serde_json::from_str::<Cylinder>(r#"{"radius":1.0,"height":0.0}"#).is_err());
    }
}
