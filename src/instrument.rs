//! Call-site timing.
//!
//! Nothing in the shape types times itself; wrap the call you want measured.

use std::time::Instant;

use tracing::debug;

use crate::error::Result;
use crate::shape::Polygon;
use crate::topology::PointStore;

/// Runs `f`, emits a `debug` event with the elapsed wall-clock time in
/// microseconds (`elapsed_us`), and returns `f`'s result unchanged.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = f();
    let elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
    debug!(label, elapsed_us, "computation time");
    result
}

/// [`Polygon::area`] wrapped in [`timed`], labelled with the shape kind.
///
/// # Errors
///
/// Returns an error if an edge references a point missing from `store`.
pub fn timed_area<P: Polygon + ?Sized>(shape: &P, store: &PointStore) -> Result<f64> {
    timed(shape.kind().name(), || shape.area(store))
}
