pub mod triangle_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Tolerance for callers that opt into approximate length comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Tolerance that reduces [`lengths_equal`] to bit-exact equality.
pub const EXACT: f64 = 0.0;

/// Returns whether two lengths are equal within `tolerance`.
///
/// With [`EXACT`] this is plain `==`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn lengths_equal(a: f64, b: f64, tolerance: f64) -> bool {
    if tolerance <= EXACT {
        return a == b;
    }
    (a - b).abs() <= tolerance
}
