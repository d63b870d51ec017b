//! Polygon shatter engine.
//!
//! A cut is resolved in three stages over a shared planar intersection
//! graph: [`graph`] interns the subdivided edges of both polygons, [`trace`]
//! walks candidate boundary loops with opposite angular handedness, and
//! [`weave`] picks the loop that actually encloses a face. [`engine`] drives
//! the stages until every edge belongs to an extracted face.

mod engine;
mod graph;
mod trace;
mod weave;

pub use engine::{shatter, shatter_with};
