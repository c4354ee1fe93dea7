use std::fmt;
use std::str::FromStr;

use crate::error::ShapeError;

/// The closed set of supported shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Square,
    Triangle,
    Equilateral,
    Isosceles,
    Scalene,
    /// Registered under the name `"trirectangle"`.
    RightTriangle,
}

impl ShapeKind {
    /// Every kind, in registry order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Equilateral,
        ShapeKind::Isosceles,
        ShapeKind::Scalene,
        ShapeKind::RightTriangle,
    ];

    /// Registry name accepted by [`Shape::create`](super::Shape::create).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Equilateral => "equilateral",
            ShapeKind::Isosceles => "isosceles",
            ShapeKind::Scalene => "scalene",
            ShapeKind::RightTriangle => "trirectangle",
        }
    }

    /// Number of vertices (and edges) the shape must have.
    #[must_use]
    pub fn side_count(self) -> usize {
        match self {
            ShapeKind::Rectangle | ShapeKind::Square => 4,
            ShapeKind::Triangle
            | ShapeKind::Equilateral
            | ShapeKind::Isosceles
            | ShapeKind::Scalene
            | ShapeKind::RightTriangle => 3,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Parses a registry name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| ShapeError::UnknownShapeType(s.to_owned()))
    }
}
