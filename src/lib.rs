//! Elementary 2D shapes over shared, mutable points.
//!
//! Points live in a [`topology::PointStore`]; lines and shapes refer to them
//! by key. Perimeters and areas are read from the current point positions,
//! while inner angles and validation are fixed when a shape is built.

pub mod error;
pub mod instrument;
pub mod math;
pub mod shape;
pub mod topology;

pub use error::{Result, ShapeError, ShapekitError, StoreError};
pub use shape::{Polygon, Shape, ShapeInput, ShapeKind};
pub use topology::{Line, PointData, PointId, PointStore};
