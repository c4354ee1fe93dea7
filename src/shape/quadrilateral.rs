use tracing::debug;

use crate::error::{Result, ShapeError};
use crate::topology::PointStore;

use super::{Outline, Polygon, ShapeInput, ShapeKind};

/// A four-sided shape whose area is the product of two adjacent edges.
///
/// The right angles are assumed, not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    outline: Outline,
}

impl Rectangle {
    /// Inner angles used when none are supplied.
    pub const RIGHT_ANGLES: [f64; 4] = [90.0; 4];

    /// Creates a rectangle from four vertices or four edges.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::CountMismatch` unless there are exactly four
    /// vertices and four edges after derivation.
    pub fn new(input: ShapeInput) -> Result<Self> {
        Self::build(input, ShapeKind::Rectangle)
    }

    fn build(mut input: ShapeInput, kind: ShapeKind) -> Result<Self> {
        if input.inner_angles.is_empty() {
            input.inner_angles = Self::RIGHT_ANGLES.to_vec();
        }
        let outline = Outline::closed(input);
        outline.ensure_sides(kind)?;
        debug!(%kind, "constructed quadrilateral");
        Ok(Self { outline })
    }

    /// Product of the first two edges; `kind` names the shape in a count error.
    fn area_as(&self, kind: ShapeKind, store: &PointStore) -> Result<f64> {
        let [first, second, ..] = self.outline.edges() else {
            return Err(self.outline.count_mismatch(kind).into());
        };
        Ok(first.length(store)? * second.length(store)?)
    }
}

impl Polygon for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn outline(&self) -> &Outline {
        &self.outline
    }

    fn outline_mut(&mut self) -> &mut Outline {
        &mut self.outline
    }

    /// Product of the first two edges.
    fn area(&self, store: &PointStore) -> Result<f64> {
        self.area_as(self.kind(), store)
    }
}

/// A rectangle whose four edges have equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Square(Rectangle);

impl Square {
    /// Creates a square from four vertices or four edges.
    ///
    /// Supplied inner angles are replaced by right angles.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::CountMismatch` on a wrong vertex or edge count,
    /// and `ShapeError::RegularityViolation` if the edges differ in length.
    pub fn new(input: ShapeInput, store: &PointStore) -> Result<Self> {
        let input = input.with_inner_angles(Vec::new());
        let rectangle = Rectangle::build(input, ShapeKind::Square)?;
        if !rectangle.outline.has_equal_edges(store)? {
            return Err(ShapeError::RegularityViolation {
                kind: ShapeKind::Square,
            }
            .into());
        }
        Ok(Self(rectangle))
    }
}

impl Polygon for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn outline(&self) -> &Outline {
        self.0.outline()
    }

    fn outline_mut(&mut self) -> &mut Outline {
        self.0.outline_mut()
    }

    fn area(&self, store: &PointStore) -> Result<f64> {
        self.0.area_as(self.kind(), store)
    }
}
