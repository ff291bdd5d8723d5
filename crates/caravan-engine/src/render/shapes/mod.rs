//! Shape rasterizers, one per `DrawCmd` variant.

mod common;

pub mod circle;
pub mod ellipse;
pub mod polygon;
pub mod rect;
pub mod text;

pub(crate) use common::world_stroke;
