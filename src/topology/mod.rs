//! Shared points and the lines that reference them.
//!
//! Points are owned by a [`PointStore`] arena. Shapes and lines only hold
//! [`PointId`] keys, so a point used as a vertex by several lines (or several
//! shapes) is a single entity: moving it through the store changes every
//! length computed from it afterwards. The store has no internal locking;
//! mutation requires `&mut PointStore`, and sharing a store across threads
//! needs external synchronization.
//!
//! A [`PointId`] is only meaningful for the store that issued it. Lookups
//! detect ids whose point was removed, but an id from another store is not
//! recognized as foreign: it resolves to whatever point occupies the same
//! slot, if any.

pub mod line;
pub mod point;

pub use line::Line;
pub use point::{PointData, PointId};

use crate::error::{Result, StoreError};
use slotmap::SlotMap;

/// Central arena that owns all points.
#[derive(Debug, Default)]
pub struct PointStore {
    points: SlotMap<PointId, PointData>,
}

impl PointStore {
    /// Creates a new, empty point store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a point and returns its ID.
    pub fn insert(&mut self, data: PointData) -> PointId {
        self.points.insert(data)
    }

    /// Inserts a point at `(x, y)` and returns its ID.
    pub fn add_point(&mut self, x: f64, y: f64) -> PointId {
        self.insert(PointData::new(x, y))
    }

    /// Removes a point. Lines and shapes still holding its id fail their
    /// next lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not in the store.
    pub fn remove_point(&mut self, id: PointId) -> Result<PointData> {
        Ok(self.points.remove(id).ok_or(StoreError::PointNotFound)?)
    }

    /// Returns a reference to the point data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the point was removed, or the id was never
    /// issued for a slot of this store.
    pub fn point(&self, id: PointId) -> Result<&PointData> {
        Ok(self.points.get(id).ok_or(StoreError::PointNotFound)?)
    }

    /// Returns a mutable reference to the point data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not in the store.
    pub fn point_mut(&mut self, id: PointId) -> Result<&mut PointData> {
        Ok(self.points.get_mut(id).ok_or(StoreError::PointNotFound)?)
    }

    /// Moves a point to `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not in the store.
    pub fn move_point(&mut self, id: PointId, x: f64, y: f64) -> Result<()> {
        self.point_mut(id)?.move_to(x, y);
        Ok(())
    }

    /// Moves a point back to the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not in the store.
    pub fn reset_point(&mut self, id: PointId) -> Result<()> {
        self.point_mut(id)?.reset();
        Ok(())
    }

    /// Euclidean distance between two stored points.
    ///
    /// # Errors
    ///
    /// Returns an error if either point is not in the store.
    pub fn distance(&self, a: PointId, b: PointId) -> Result<f64> {
        Ok(self.point(a)?.distance_to(self.point(b)?))
    }

    /// Number of points in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
