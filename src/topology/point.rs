use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a point in the point store.
    pub struct PointId;
}

/// A mutable 2D coordinate.
///
/// Points carry no identity beyond their coordinates; sharing happens through
/// [`PointId`] keys into a [`PointStore`](super::PointStore).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointData {
    /// The position of the point.
    pub position: Point2,
}

impl Default for PointData {
    fn default() -> Self {
        Self {
            position: Point2::origin(),
        }
    }
}

impl PointData {
    /// Creates a new point at `(x, y)`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Overwrites both coordinates.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.position = Point2::new(x, y);
    }

    /// Moves the point back to the origin.
    pub fn reset(&mut self) {
        self.position = Point2::origin();
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &PointData) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }
}
