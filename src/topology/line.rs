use crate::error::Result;

use super::{PointId, PointStore};

/// A segment between two points held by reference.
///
/// Both ends may be the same point, giving a zero-length line. The length is
/// never cached, so moving either endpoint in the store is observed on the
/// next call to [`Line::length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    /// Start point of the line.
    pub start: PointId,
    /// End point of the line.
    pub end: PointId,
}

impl Line {
    /// Creates a new line from `start` to `end`.
    #[must_use]
    pub fn new(start: PointId, end: PointId) -> Self {
        Self { start, end }
    }

    /// Euclidean distance between the current endpoint coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is not in `store`.
    pub fn length(&self, store: &PointStore) -> Result<f64> {
        store.distance(self.start, self.end)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn length_3_4_5() {
        let mut store = PointStore::new();
        let a = store.add_point(0.0, 0.0);
        let b = store.add_point(3.0, 4.0);
        assert_abs_diff_eq!(Line::new(a, b).length(&store).unwrap(), 5.0);
    }

    #[test]
    fn degenerate_line_has_zero_length() {
        let mut store = PointStore::new();
        let a = store.add_point(2.0, -1.0);
        assert_abs_diff_eq!(Line::new(a, a).length(&store).unwrap(), 0.0);
    }

    #[test]
    fn shared_endpoint_moves_both_lines() {
        let mut store = PointStore::new();
        let hub = store.add_point(0.0, 0.0);
        let east = store.add_point(3.0, 0.0);
        let west = store.add_point(-3.0, 0.0);
        let first = Line::new(hub, east);
        let second = Line::new(west, hub);
        assert_abs_diff_eq!(first.length(&store).unwrap(), 3.0);
        assert_abs_diff_eq!(second.length(&store).unwrap(), 3.0);

        store.move_point(hub, 0.0, 4.0).unwrap();

        let first_len = first.length(&store).unwrap();
        let second_len = second.length(&store).unwrap();
        assert_abs_diff_eq!(first_len, 5.0);
        assert_abs_diff_eq!(first_len, second_len);
    }

    #[test]
    fn unknown_endpoint_is_an_error() {
        let mut store = PointStore::new();
        let a = store.add_point(0.0, 0.0);
        let mut other = PointStore::new();
        other.add_point(1.0, 1.0);
        let foreign = other.add_point(2.0, 2.0);
        assert!(Line::new(a, foreign).length(&store).is_err());
    }
}
