//! Projection engines used by unit tests

use std::cell::Cell;
use std::f64::consts::FRAC_PI_4;

use crate::error::{Error, Result};
use crate::projection::TangentProjection;
use crate::types::GeoPoint;

const RADIUS: f64 = 6378137.0;

thread_local! {
    static CONSTRUCTIONS: Cell<usize> = Cell::new(0);
}

/// Number of `SphericalMercator` projections built on this thread
pub fn constructions() -> usize {
    CONSTRUCTIONS.with(|count| count.get())
}

/// Spherical Mercator with true scale at the center latitude
#[derive(Debug)]
pub struct SphericalMercator {
    center: GeoPoint,
    scale: f64,
}

impl TangentProjection for SphericalMercator {
    fn tangent_at(center: GeoPoint) -> Result<Self> {
        CONSTRUCTIONS.with(|count| count.set(count.get() + 1));
        Ok(Self {
            center,
            scale: RADIUS * center.latitude.to_radians().cos(),
        })
    }

    fn to_projected(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        if lat.abs() >= 90.0 {
            return Err(Error::Projection(format!("latitude {} has no Mercator image", lat)));
        }
        let x = self.scale * (lon - self.center.longitude).to_radians();
        let y = self.scale * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
        Ok((x, y))
    }

    fn to_geographic(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let lon = (x / self.scale).to_degrees() + self.center.longitude;
        let lat = (2.0 * (y / self.scale).exp().atan() - 2.0 * FRAC_PI_4).to_degrees();
        Ok((lon, lat))
    }
}

/// Engine that refuses every center
#[derive(Debug)]
pub struct RejectingProjection;

impl TangentProjection for RejectingProjection {
    fn tangent_at(center: GeoPoint) -> Result<Self> {
        Err(Error::Projection(format!(
            "unsupported center ({}, {})",
            center.longitude, center.latitude
        )))
    }

    fn to_projected(&self, _lon: f64, _lat: f64) -> Result<(f64, f64)> {
        Err(Error::Projection("unreachable engine".to_string()))
    }

    fn to_geographic(&self, _x: f64, _y: f64) -> Result<(f64, f64)> {
        Err(Error::Projection("unreachable engine".to_string()))
    }
}
