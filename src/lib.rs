//! geoframe - local planar frames for WGS84 coordinates
//!
//! geoframe maps longitude/latitude into metric east/north offsets around a
//! chosen reference origin, and back. The frame is a Mercator projection with
//! its standard parallel and central meridian at the origin, shifted so the
//! origin itself sits at `(0, 0)`.
//!
//! # Examples
//!
//! ## Instance form
//!
//! ```no_run
//! use geoframe::{GeoPoint, LocalFrame, ReferenceOrigin};
//!
//! let origin = ReferenceOrigin::new(GeoPoint::new(121.5750212, 25.0783615));
//! let mut frame = LocalFrame::new(origin);
//!
//! let planar = frame.to_cartesian_point(GeoPoint::new(121.5749139, 25.0806617))?;
//! println!("east {:.3} m, north {:.3} m", planar.x, planar.y);
//!
//! let back = frame.from_cartesian(planar)?;
//! println!("lon {}, lat {}", back.longitude, back.latitude);
//! # Ok::<(), geoframe::Error>(())
//! ```
//!
//! ## Sharing one origin across calls
//!
//! ```no_run
//! use geoframe::{transform, GeoPoint, PlanarPoint, ReferenceOrigin};
//!
//! let mut origin = ReferenceOrigin::new(GeoPoint::new(121.5750212, 25.0783615));
//!
//! // The first call establishes the projection; later calls reuse it.
//! let (x, y) = transform::to_cartesian(GeoPoint::new(121.5749139, 25.0806617), &mut origin)?;
//! let (lon, lat) = transform::from_cartesian_tuple(PlanarPoint::new(x, y), &mut origin)?;
//! # Ok::<(), geoframe::Error>(())
//! ```

pub mod error;
pub mod types;
pub mod projection;
pub mod origin;
pub mod transform;
pub mod config;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use types::{GeoPoint, PlanarPoint};
pub use projection::{CoordinateTransform, Direction, MercatorBuilder, MercatorProjection, TangentProjection};
pub use origin::{establish_origin, ReadyOrigin, ReferenceOrigin};
pub use transform::{project, unproject, LocalFrame};
pub use config::FrameConfig;
