//! Projection engine: the tangent projection contract and its PROJ adapter

pub mod engine;
pub mod mercator;

pub use engine::{CoordinateTransform, Direction, TangentProjection};
pub use mercator::{MercatorBuilder, MercatorProjection};
