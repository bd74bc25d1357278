use crate::error::Result;
use crate::types::GeoPoint;

/// A projected coordinate system tangent at a chosen center.
///
/// Implementations take and return degrees on the geographic side and metres
/// on the projected side. They must be deterministic, and `to_geographic` must
/// undo `to_projected` to floating-point precision for well-conditioned input.
pub trait TangentProjection: Sized {
    /// Builds a projection whose center (standard parallel and central
    /// meridian) is `center`, with zero false easting/northing.
    fn tangent_at(center: GeoPoint) -> Result<Self>;

    /// Geographic `(lon, lat)` to projected `(x, y)`
    fn to_projected(&self, lon: f64, lat: f64) -> Result<(f64, f64)>;

    /// Projected `(x, y)` to geographic `(lon, lat)`
    fn to_geographic(&self, x: f64, y: f64) -> Result<(f64, f64)>;

    /// Geographic to projected transform over this system
    fn forward_transform(&self) -> CoordinateTransform<'_, Self> {
        CoordinateTransform::new(self, Direction::Forward)
    }

    /// Projected to geographic transform over this system
    fn inverse_transform(&self) -> CoordinateTransform<'_, Self> {
        CoordinateTransform::new(self, Direction::Inverse)
    }
}

/// Which way a [`CoordinateTransform`] runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

/// A one-directional transform borrowed from a projected system
#[derive(Debug)]
pub struct CoordinateTransform<'a, P> {
    projection: &'a P,
    direction: Direction,
}

impl<'a, P: TangentProjection> CoordinateTransform<'a, P> {
    pub fn new(projection: &'a P, direction: Direction) -> Self {
        Self { projection, direction }
    }

    /// Transforms one coordinate pair
    pub fn apply(&self, coord: [f64; 2]) -> Result<[f64; 2]> {
        let (a, b) = match self.direction {
            Direction::Forward => self.projection.to_projected(coord[0], coord[1])?,
            Direction::Inverse => self.projection.to_geographic(coord[0], coord[1])?,
        };

        Ok([a, b])
    }

    /// Transforms multiple coordinate pairs, stopping at the first failure
    pub fn apply_many(&self, coords: &[[f64; 2]]) -> Result<Vec<[f64; 2]>> {
        coords.iter()
            .map(|&coord| self.apply(coord))
            .collect()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn projection(&self) -> &'a P {
        self.projection
    }
}
