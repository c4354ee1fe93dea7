use tracing::debug;

use crate::error::Result;
use crate::topology::PointStore;

use super::{
    Equilateral, Isosceles, Outline, Polygon, Rectangle, RightTriangle, Scalene, ShapeInput,
    ShapeKind, Square, Triangle,
};

/// Any supported shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Square(Square),
    Triangle(Triangle),
    Equilateral(Equilateral),
    Isosceles(Isosceles),
    Scalene(Scalene),
    RightTriangle(RightTriangle),
}

impl Shape {
    /// Creates a shape from its registry name (case-insensitive).
    ///
    /// Recognized names: `rectangle`, `square`, `triangle`, `equilateral`,
    /// `isosceles`, `scalene`, `trirectangle`.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::UnknownShapeType` for an unrecognized name, or
    /// the construction error of the selected shape.
    pub fn create(shape_type: &str, input: ShapeInput, store: &PointStore) -> Result<Self> {
        let kind: ShapeKind = shape_type.parse()?;
        Self::from_kind(kind, input, store)
    }

    /// Creates a shape of the given kind.
    ///
    /// # Errors
    ///
    /// Returns the construction error of the selected shape.
    pub fn from_kind(kind: ShapeKind, input: ShapeInput, store: &PointStore) -> Result<Self> {
        let shape = match kind {
            ShapeKind::Rectangle => Self::Rectangle(Rectangle::new(input)?),
            ShapeKind::Square => Self::Square(Square::new(input, store)?),
            ShapeKind::Triangle => Self::Triangle(Triangle::new(input)?),
            ShapeKind::Equilateral => Self::Equilateral(Equilateral::new(input)?),
            ShapeKind::Isosceles => Self::Isosceles(Isosceles::new(input, store)?),
            ShapeKind::Scalene => Self::Scalene(Scalene::new(input, store)?),
            ShapeKind::RightTriangle => Self::RightTriangle(RightTriangle::new(input, store)?),
        };
        debug!(%kind, vertices = shape.vertices().len(), "created shape");
        Ok(shape)
    }

    fn as_polygon(&self) -> &dyn Polygon {
        match self {
            Self::Rectangle(s) => s,
            Self::Square(s) => s,
            Self::Triangle(s) => s,
            Self::Equilateral(s) => s,
            Self::Isosceles(s) => s,
            Self::Scalene(s) => s,
            Self::RightTriangle(s) => s,
        }
    }

    fn as_polygon_mut(&mut self) -> &mut dyn Polygon {
        match self {
            Self::Rectangle(s) => s,
            Self::Square(s) => s,
            Self::Triangle(s) => s,
            Self::Equilateral(s) => s,
            Self::Isosceles(s) => s,
            Self::Scalene(s) => s,
            Self::RightTriangle(s) => s,
        }
    }
}

impl Polygon for Shape {
    fn kind(&self) -> ShapeKind {
        self.as_polygon().kind()
    }

    fn outline(&self) -> &Outline {
        self.as_polygon().outline()
    }

    fn outline_mut(&mut self) -> &mut Outline {
        self.as_polygon_mut().outline_mut()
    }

    fn area(&self, store: &PointStore) -> Result<f64> {
        self.as_polygon().area(store)
    }
}
