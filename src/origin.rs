//! Reference origins and their one-time projection state.
//!
//! An origin starts [`ReferenceOrigin::Uninitialized`] and becomes
//! [`ReferenceOrigin::Ready`] on the first transform that uses it. The ready
//! state carries a projection tangent at the origin plus the vertical shift
//! that moves the origin to planar `y = 0`. Both are derived from the same
//! longitude/latitude, which cannot change after construction.

use log::debug;

use crate::error::{Error, Result};
use crate::projection::{MercatorProjection, TangentProjection};
use crate::types::GeoPoint;

/// An origin whose projection has been established
#[derive(Debug)]
pub struct ReadyOrigin<P = MercatorProjection> {
    point: GeoPoint,
    vertical_shift: f64,
    projection: P,
}

impl<P: TangentProjection> ReadyOrigin<P> {
    /// Builds the tangent projection at `point` and derives its vertical shift
    pub fn establish(point: GeoPoint) -> Result<Self> {
        if !point.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "reference origin must have a finite longitude and latitude, got ({}, {})",
                point.longitude, point.latitude
            )));
        }

        let projection = P::tangent_at(point)?;
        let [_, raw_y] = projection.forward_transform()
            .apply([point.longitude, point.latitude])?;
        let vertical_shift = -raw_y;

        debug!(
            "Established projection at ({}, {}) with vertical shift {}",
            point.longitude, point.latitude, vertical_shift
        );

        Ok(Self {
            point,
            vertical_shift,
            projection,
        })
    }

    pub fn point(&self) -> GeoPoint {
        self.point
    }

    /// Additive correction applied to projected y
    pub fn vertical_shift(&self) -> f64 {
        self.vertical_shift
    }

    pub fn projection(&self) -> &P {
        &self.projection
    }
}

/// Establishes a ready origin at `point` without going through the lazy state
pub fn establish_origin<P: TangentProjection>(point: GeoPoint) -> Result<ReadyOrigin<P>> {
    ReadyOrigin::establish(point)
}

/// The geographic point a local planar frame is centered on
#[derive(Debug)]
pub enum ReferenceOrigin<P = MercatorProjection> {
    /// No projection yet; only the caller's point
    Uninitialized(GeoPoint),
    /// Projection and vertical shift cached
    Ready(ReadyOrigin<P>),
}

impl ReferenceOrigin {
    /// Creates a lazily initialised origin using the PROJ Mercator engine
    pub fn new(point: GeoPoint) -> Self {
        ReferenceOrigin::Uninitialized(point)
    }
}

impl<P: TangentProjection> ReferenceOrigin<P> {
    /// Creates a lazily initialised origin for any projection engine
    pub fn uninitialized(point: GeoPoint) -> Self {
        ReferenceOrigin::Uninitialized(point)
    }

    pub fn point(&self) -> GeoPoint {
        match self {
            ReferenceOrigin::Uninitialized(point) => *point,
            ReferenceOrigin::Ready(ready) => ready.point,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ReferenceOrigin::Ready(_))
    }

    /// Vertical shift, once established
    pub fn vertical_shift(&self) -> Option<f64> {
        match self {
            ReferenceOrigin::Uninitialized(_) => None,
            ReferenceOrigin::Ready(ready) => Some(ready.vertical_shift),
        }
    }

    /// Cached projection, once established
    pub fn projection(&self) -> Option<&P> {
        match self {
            ReferenceOrigin::Uninitialized(_) => None,
            ReferenceOrigin::Ready(ready) => Some(&ready.projection),
        }
    }

    /// Establishes the projection on first use and returns the ready state.
    ///
    /// A ready origin is returned as is; the engine is consulted at most once
    /// per origin. On failure the origin stays uninitialised.
    pub fn ensure_projection(&mut self) -> Result<&ReadyOrigin<P>> {
        if let ReferenceOrigin::Uninitialized(point) = *self {
            *self = ReferenceOrigin::Ready(ReadyOrigin::establish(point)?);
        }

        match self {
            ReferenceOrigin::Ready(ready) => Ok(ready),
            ReferenceOrigin::Uninitialized(_) => unreachable!("origin was established above"),
        }
    }
}

impl<P> From<ReadyOrigin<P>> for ReferenceOrigin<P> {
    fn from(ready: ReadyOrigin<P>) -> Self {
        ReferenceOrigin::Ready(ready)
    }
}
