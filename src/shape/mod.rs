//! Shapes built on shared points.
//!
//! Every concrete shape wraps an [`Outline`] and exposes its geometry through
//! the [`Polygon`] trait. [`Shape`] gathers the closed set of variants and
//! dispatches construction by registry name.

mod factory;
mod kind;
mod outline;
mod quadrilateral;
mod triangle;

pub use factory::Shape;
pub use kind::ShapeKind;
pub use outline::{Outline, ShapeInput};
pub use quadrilateral::{Rectangle, Square};
pub use triangle::{Equilateral, Isosceles, RightTriangle, Scalene, Triangle};

use crate::error::Result;
use crate::topology::{Line, PointId, PointStore};

/// Geometry shared by every shape.
///
/// Lengths are read from the store on every call, so results reflect the
/// current position of shared points. Inner angles are fixed at construction.
pub trait Polygon {
    /// The concrete kind of this shape.
    fn kind(&self) -> ShapeKind;

    /// The vertices, edges and inner angles of the shape.
    fn outline(&self) -> &Outline;

    /// Mutable access to the outline. Changes are stored without re-deriving
    /// anything.
    fn outline_mut(&mut self) -> &mut Outline;

    /// Computes the area.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge references a point missing from `store`.
    fn area(&self, store: &PointStore) -> Result<f64>;

    /// Sum of the edge lengths.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge references a point missing from `store`.
    fn perimeter(&self, store: &PointStore) -> Result<f64> {
        self.outline().perimeter(store)
    }

    fn vertices(&self) -> &[PointId] {
        self.outline().vertices()
    }

    fn edges(&self) -> &[Line] {
        self.outline().edges()
    }

    /// Inner angles in degrees, one per vertex.
    fn inner_angles(&self) -> &[f64] {
        self.outline().inner_angles()
    }

    /// See [`Outline::is_regular`].
    ///
    /// # Errors
    ///
    /// Returns an error if an edge references a point missing from `store`.
    fn is_regular(&self, store: &PointStore) -> Result<bool> {
        self.outline().is_regular(store)
    }
}
