//! tessella is a 2D polygon-shatter kernel for generative composition.
//!
//! The core operation cuts a closed "glass" polygon along a "shard" polyline
//! or polygon and returns the faces the cut partitions it into, each in
//! counterclockwise order. A [`workspace::Workspace`] layers segment
//! metadata and adjacency tracking on top of the raw cut.
//!
//! ```
//! use tessella::shatter;
//! use tessella::math::Point2;
//!
//! let glass = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ];
//! let shard = vec![Point2::new(-1.0, 2.0), Point2::new(5.0, 2.0)];
//! let faces = shatter(&glass, &shard)?;
//! assert_eq!(faces.len(), 2);
//! # Ok::<(), tessella::ShatterError>(())
//! ```

pub mod error;
pub mod math;
pub mod shatter;
pub mod workspace;

pub use error::{Result, ShatterError, TessellaError, WorkspaceError};
pub use shatter::{shatter, shatter_with};
pub use workspace::{Constraint, Segment, SegmentId, Workspace};
