use std::fmt;

use crate::error::{Error, Result};
use crate::projection::engine::TangentProjection;
use crate::types::GeoPoint;
use log::debug;
use proj::Proj;

/// Mercator projection on the WGS84 ellipsoid, backed by PROJ.
///
/// The scale is true along the standard parallel, so a projection built with
/// [`TangentProjection::tangent_at`] is locally conformal and metric around
/// its center.
pub struct MercatorProjection {
    proj: Proj,
    definition: String,
    center: GeoPoint,
}

impl MercatorProjection {
    /// Creates a projection from a PROJ string
    fn from_proj4(proj4_string: &str, center: GeoPoint) -> Result<Self> {
        let proj = Proj::new(proj4_string)
            .map_err(|e| Error::Projection(format!("Failed to create Mercator projection: {}", e)))?;
        debug!("Created projection: {}", proj4_string);

        Ok(Self {
            proj,
            definition: proj4_string.to_string(),
            center,
        })
    }

    /// Returns the PROJ definition string
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Returns the tangent center (central meridian, standard parallel)
    pub fn center(&self) -> GeoPoint {
        self.center
    }
}

impl fmt::Debug for MercatorProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MercatorProjection")
            .field("definition", &self.definition)
            .field("center", &self.center)
            .finish()
    }
}

impl TangentProjection for MercatorProjection {
    fn tangent_at(center: GeoPoint) -> Result<Self> {
        MercatorBuilder::new()
            .latitude_of_origin(center.latitude)
            .central_meridian(center.longitude)
            .false_easting(0.0)
            .false_northing(0.0)
            .build()
    }

    fn to_projected(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        // PROJ works in radians for a bare projection
        self.proj.project((lon.to_radians(), lat.to_radians()), false)
            .map_err(|e| Error::Projection(format!("Projection failed: {}", e)))
    }

    fn to_geographic(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let (lon, lat) = self.proj.project((x, y), true)
            .map_err(|e| Error::Projection(format!("Unprojection failed: {}", e)))?;

        Ok((lon.to_degrees(), lat.to_degrees()))
    }
}

/// Builder for Mercator projection definitions
pub struct MercatorBuilder {
    latitude_of_origin: Option<f64>,
    central_meridian: Option<f64>,
    ellipsoid: String,
    units: String,
    parameters: Vec<(String, String)>,
}

impl MercatorBuilder {
    /// Creates a builder for a WGS84 Mercator in metres
    pub fn new() -> Self {
        Self {
            latitude_of_origin: None,
            central_meridian: None,
            ellipsoid: "WGS84".to_string(),
            units: "m".to_string(),
            parameters: Vec::new(),
        }
    }

    /// Sets the latitude of true scale (standard parallel)
    pub fn latitude_of_origin(mut self, lat: f64) -> Self {
        self.latitude_of_origin = Some(lat);
        self
    }

    /// Sets the central meridian
    pub fn central_meridian(mut self, lon: f64) -> Self {
        self.central_meridian = Some(lon);
        self
    }

    /// Sets the false easting
    pub fn false_easting(self, x: f64) -> Self {
        self.parameter("x_0", &x.to_string())
    }

    /// Sets the false northing
    pub fn false_northing(self, y: f64) -> Self {
        self.parameter("y_0", &y.to_string())
    }

    /// Sets the ellipsoid (e.g., "WGS84")
    pub fn ellipsoid(mut self, ellipsoid: &str) -> Self {
        self.ellipsoid = ellipsoid.to_string();
        self
    }

    /// Sets the linear units (e.g., "m")
    pub fn units(mut self, units: &str) -> Self {
        self.units = units.to_string();
        self
    }

    /// Adds a custom parameter
    pub fn parameter(mut self, key: &str, value: &str) -> Self {
        self.parameters.push((key.to_string(), value.to_string()));
        self
    }

    fn center(&self) -> Result<GeoPoint> {
        match (self.central_meridian, self.latitude_of_origin) {
            (Some(lon), Some(lat)) => Ok(GeoPoint::new(lon, lat)),
            _ => Err(Error::Projection(
                "Latitude of origin and central meridian are required".to_string(),
            )),
        }
    }

    /// Returns the PROJ string this builder would create
    pub fn definition(&self) -> Result<String> {
        let center = self.center()?;

        let mut parts = vec![
            "+proj=merc".to_string(),
            format!("+lat_ts={}", center.latitude),
            format!("+lon_0={}", center.longitude),
        ];

        for (key, value) in &self.parameters {
            parts.push(format!("+{}={}", key, value));
        }

        parts.push(format!("+ellps={}", self.ellipsoid));
        parts.push(format!("+units={}", self.units));

        Ok(parts.join(" "))
    }

    /// Builds the projection
    pub fn build(self) -> Result<MercatorProjection> {
        let center = self.center()?;
        let definition = self.definition()?;

        MercatorProjection::from_proj4(&definition, center)
    }
}

impl Default for MercatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
