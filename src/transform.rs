//! Conversions between WGS84 and a local planar frame.
//!
//! The pure functions [`project`] and [`unproject`] work on a [`ReadyOrigin`].
//! The `to_*`/`from_*` functions take a [`ReferenceOrigin`] by mutable
//! reference and establish it on first use, so several calls can share one
//! cached projection. [`LocalFrame`] owns an origin and offers the same
//! operations without repeating it.

use log::trace;

use crate::error::Result;
use crate::origin::{ReadyOrigin, ReferenceOrigin};
use crate::projection::{MercatorProjection, TangentProjection};
use crate::types::{GeoPoint, PlanarPoint};

/// Projects `point` into the planar frame of `origin`
pub fn project<P: TangentProjection>(origin: &ReadyOrigin<P>, point: GeoPoint) -> Result<PlanarPoint> {
    let [raw_x, raw_y] = origin.projection().forward_transform()
        .apply([point.longitude, point.latitude])?;
    let planar = PlanarPoint::new(raw_x, raw_y + origin.vertical_shift());

    trace!("({}, {}) -> ({}, {})", point.longitude, point.latitude, planar.x, planar.y);
    Ok(planar)
}

/// Maps a planar point of the frame of `origin` back to WGS84
pub fn unproject<P: TangentProjection>(origin: &ReadyOrigin<P>, planar: PlanarPoint) -> Result<GeoPoint> {
    let raw = [planar.x, planar.y - origin.vertical_shift()];
    let [lon, lat] = origin.projection().inverse_transform().apply(raw)?;

    trace!("({}, {}) <- ({}, {})", lon, lat, planar.x, planar.y);
    Ok(GeoPoint::new(lon, lat))
}

/// Converts to planar `(x, y)`, establishing `origin` if needed
pub fn to_cartesian<P: TangentProjection>(point: GeoPoint, origin: &mut ReferenceOrigin<P>) -> Result<(f64, f64)> {
    to_cartesian_point(point, origin).map(PlanarPoint::to_tuple)
}

/// Converts to a [`PlanarPoint`], establishing `origin` if needed
pub fn to_cartesian_point<P: TangentProjection>(point: GeoPoint, origin: &mut ReferenceOrigin<P>) -> Result<PlanarPoint> {
    project(origin.ensure_projection()?, point)
}

/// Converts a planar point back to a [`GeoPoint`], establishing `origin` if needed
pub fn from_cartesian<P: TangentProjection>(planar: PlanarPoint, origin: &mut ReferenceOrigin<P>) -> Result<GeoPoint> {
    unproject(origin.ensure_projection()?, planar)
}

/// Converts a planar point back to `(longitude, latitude)`
pub fn from_cartesian_tuple<P: TangentProjection>(planar: PlanarPoint, origin: &mut ReferenceOrigin<P>) -> Result<(f64, f64)> {
    from_cartesian(planar, origin).map(GeoPoint::to_tuple)
}

/// A local planar frame anchored at one reference origin
#[derive(Debug)]
pub struct LocalFrame<P = MercatorProjection> {
    origin: ReferenceOrigin<P>,
}

impl LocalFrame {
    /// Creates a frame that establishes its Mercator projection on first use
    pub fn new(origin: ReferenceOrigin) -> Self {
        Self { origin }
    }

    /// Creates a frame with its Mercator projection established up front
    pub fn established(point: GeoPoint) -> Result<Self> {
        Ok(Self::from_ready(ReadyOrigin::establish(point)?))
    }
}

impl<P: TangentProjection> LocalFrame<P> {
    pub fn with_origin(origin: ReferenceOrigin<P>) -> Self {
        Self { origin }
    }

    pub fn from_ready(ready: ReadyOrigin<P>) -> Self {
        Self { origin: ready.into() }
    }

    pub fn origin(&self) -> &ReferenceOrigin<P> {
        &self.origin
    }

    pub fn into_origin(self) -> ReferenceOrigin<P> {
        self.origin
    }

    pub fn to_cartesian(&mut self, point: GeoPoint) -> Result<(f64, f64)> {
        to_cartesian(point, &mut self.origin)
    }

    pub fn to_cartesian_point(&mut self, point: GeoPoint) -> Result<PlanarPoint> {
        to_cartesian_point(point, &mut self.origin)
    }

    pub fn from_cartesian(&mut self, planar: PlanarPoint) -> Result<GeoPoint> {
        from_cartesian(planar, &mut self.origin)
    }

    pub fn from_cartesian_tuple(&mut self, planar: PlanarPoint) -> Result<(f64, f64)> {
        from_cartesian_tuple(planar, &mut self.origin)
    }

    /// Converts multiple points, stopping at the first failure
    pub fn to_cartesian_many(&mut self, points: &[GeoPoint]) -> Result<Vec<PlanarPoint>> {
        let ready = self.origin.ensure_projection()?;
        points.iter()
            .map(|&point| project(ready, point))
            .collect()
    }

    /// Converts multiple planar points back, stopping at the first failure
    pub fn from_cartesian_many(&mut self, points: &[PlanarPoint]) -> Result<Vec<GeoPoint>> {
        let ready = self.origin.ensure_projection()?;
        points.iter()
            .map(|&planar| unproject(ready, planar))
            .collect()
    }
}
