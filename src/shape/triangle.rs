use tracing::debug;

use crate::error::{Result, ShapeError};
use crate::math::lengths_equal;
use crate::math::triangle_2d::{
    angle_opposite, heron_area, isosceles_apex_angle, right_triangle_angle,
};
use crate::topology::PointStore;

use super::{Outline, Polygon, ShapeInput, ShapeKind};

/// A three-sided shape. Area comes from Heron's formula.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    outline: Outline,
}

impl Triangle {
    /// Creates a triangle from three vertices or three edges.
    ///
    /// Inner angles and the regularity hint are stored as supplied.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::CountMismatch` unless there are exactly three
    /// vertices and three edges after derivation.
    pub fn new(input: ShapeInput) -> Result<Self> {
        Self::build(input, ShapeKind::Triangle)
    }

    fn build(input: ShapeInput, kind: ShapeKind) -> Result<Self> {
        let outline = Outline::closed(input);
        outline.ensure_sides(kind)?;
        debug!(%kind, "constructed triangle");
        Ok(Self { outline })
    }

    /// Builds the triangle, then replaces its inner angles with those
    /// computed from the side lengths.
    fn with_computed_angles(
        input: ShapeInput,
        kind: ShapeKind,
        store: &PointStore,
        angles: impl FnOnce([f64; 3]) -> Result<[f64; 3]>,
    ) -> Result<Self> {
        let mut triangle = Self::build(input.with_inner_angles(Vec::new()), kind)?;
        let computed = angles(triangle.sides(store)?)?;
        triangle.outline.set_inner_angles(computed.to_vec());
        Ok(triangle)
    }

    /// Side lengths `[a, b, c]` in edge order.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge references a point missing from `store`,
    /// or if the edges were replaced by a list not of length three.
    pub fn sides(&self, store: &PointStore) -> Result<[f64; 3]> {
        let [a, b, c] = self.outline.edges() else {
            return Err(self.outline.count_mismatch(ShapeKind::Triangle).into());
        };
        Ok([a.length(store)?, b.length(store)?, c.length(store)?])
    }
}

impl Polygon for Triangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn outline(&self) -> &Outline {
        &self.outline
    }

    fn outline_mut(&mut self) -> &mut Outline {
        &mut self.outline
    }

    /// Heron's formula. Sides violating the triangle inequality give `NaN`.
    fn area(&self, store: &PointStore) -> Result<f64> {
        let [a, b, c] = self.sides(store)?;
        Ok(heron_area(a, b, c))
    }
}

/// A triangle declared to have three equal sides.
///
/// The declaration is trusted: angles are set to 60 degrees and the
/// regularity hint to `true` without measuring the sides. Use
/// [`Polygon::is_regular`] to check the actual geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Equilateral(Triangle);

impl Equilateral {
    pub const ANGLES: [f64; 3] = [60.0; 3];

    /// # Errors
    ///
    /// Returns `ShapeError::CountMismatch` on a wrong vertex or edge count.
    pub fn new(input: ShapeInput) -> Result<Self> {
        let input = input
            .with_inner_angles(Self::ANGLES.to_vec())
            .with_regular(true);
        Ok(Self(Triangle::build(input, ShapeKind::Equilateral)?))
    }
}

/// A triangle with two equal sides.
///
/// Angles are `[base, base, apex]`, the apex being opposite the odd side.
#[derive(Debug, Clone, PartialEq)]
pub struct Isosceles(Triangle);

impl Isosceles {
    /// # Errors
    ///
    /// Returns `ShapeError::CountMismatch` on a wrong vertex or edge count,
    /// and `ShapeError::UnclassifiableTriangle` if no two sides are equal
    /// within the input tolerance.
    pub fn new(input: ShapeInput, store: &PointStore) -> Result<Self> {
        let tolerance = input.tolerance;
        let triangle =
            Triangle::with_computed_angles(input, ShapeKind::Isosceles, store, |[a, b, c]| {
                let (equal, base) = if lengths_equal(a, b, tolerance) {
                    (a, c)
                } else if lengths_equal(b, c, tolerance) {
                    (b, a)
                } else if lengths_equal(a, c, tolerance) {
                    (a, b)
                } else {
                    return Err(ShapeError::UnclassifiableTriangle { a, b, c }.into());
                };
                let apex = isosceles_apex_angle(equal, base);
                let base_angle = (180.0 - apex) / 2.0;
                Ok([base_angle, base_angle, apex])
            })?;
        Ok(Self(triangle))
    }
}

/// A triangle with angles computed by the law of cosines.
///
/// Angles are `[A, B, C]` opposite sides `[a, b, c]`; `C` is taken as the
/// remainder of 180 degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalene(Triangle);

impl Scalene {
    /// # Errors
    ///
    /// Returns `ShapeError::CountMismatch` on a wrong vertex or edge count.
    pub fn new(input: ShapeInput, store: &PointStore) -> Result<Self> {
        let triangle =
            Triangle::with_computed_angles(input, ShapeKind::Scalene, store, |[a, b, c]| {
                let angle_a = angle_opposite(a, b, c);
                let angle_b = angle_opposite(b, a, c);
                Ok([angle_a, angle_b, 180.0 - angle_a - angle_b])
            })?;
        Ok(Self(triangle))
    }
}

/// A triangle whose longest side is taken as the hypotenuse.
///
/// Angles are `[θ, 90 - θ, 90]` with `θ = asin(shortest / hypotenuse)`.
/// The Pythagorean relation is assumed, not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct RightTriangle(Triangle);

impl RightTriangle {
    /// # Errors
    ///
    /// Returns `ShapeError::CountMismatch` on a wrong vertex or edge count.
    pub fn new(input: ShapeInput, store: &PointStore) -> Result<Self> {
        let triangle =
            Triangle::with_computed_angles(input, ShapeKind::RightTriangle, store, |mut sides| {
                sides.sort_by(f64::total_cmp);
                let angle = right_triangle_angle(sides[0], sides[2]);
                Ok([angle, 90.0 - angle, 90.0])
            })?;
        Ok(Self(triangle))
    }
}

macro_rules! delegate_to_triangle {
    ($($variant:ident),*) => {
        $(
            impl Polygon for $variant {
                fn kind(&self) -> ShapeKind {
                    ShapeKind::$variant
                }

                fn outline(&self) -> &Outline {
                    self.0.outline()
                }

                fn outline_mut(&mut self) -> &mut Outline {
                    self.0.outline_mut()
                }

                fn area(&self, store: &PointStore) -> Result<f64> {
                    self.0.area(store)
                }
            }

            impl $variant {
                /// Side lengths `[a, b, c]` in edge order.
                ///
                /// # Errors
                ///
                /// Returns an error if an edge references a point missing from `store`.
                pub fn sides(&self, store: &PointStore) -> Result<[f64; 3]> {
                    self.0.sides(store)
                }
            }
        )*
    };
}

delegate_to_triangle!(Equilateral, Isosceles, Scalene, RightTriangle);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ShapekitError;
    use crate::math::TOLERANCE;
    use crate::topology::PointId;
    use approx::assert_abs_diff_eq;

    fn tri(store: &mut PointStore, corners: [(f64, f64); 3]) -> Vec<PointId> {
        corners
            .into_iter()
            .map(|(x, y)| store.add_point(x, y))
            .collect()
    }

    /// Sides 3, 4, 5 in edge order.
    fn right_3_4_5(store: &mut PointStore) -> Vec<PointId> {
        tri(store, [(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)])
    }

    #[test]
    fn triangle_perimeter_and_heron_area() {
        let mut store = PointStore::new();
        let v = right_3_4_5(&mut store);
        let t = Triangle::new(ShapeInput::from_vertices(v)).unwrap();
        assert_eq!(t.sides(&store).unwrap(), [3.0, 4.0, 5.0]);
        assert_abs_diff_eq!(t.perimeter(&store).unwrap(), 12.0);
        assert_abs_diff_eq!(t.area(&store).unwrap(), 6.0, epsilon = 1e-6);
        assert!(t.inner_angles().is_empty());
        assert!(!t.is_regular(&store).unwrap());
    }

    #[test]
    fn triangle_round_trip_through_edges() {
        let mut store = PointStore::new();
        let v = right_3_4_5(&mut store);
        let from_vertices = Triangle::new(ShapeInput::from_vertices(v.clone())).unwrap();
        let from_edges =
            Triangle::new(ShapeInput::from_edges(from_vertices.edges().to_vec())).unwrap();
        assert_eq!(from_edges.vertices(), v.as_slice());
    }

    #[test]
    fn triangle_needs_three_vertices() {
        let mut store = PointStore::new();
        let v = tri(&mut store, [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let mut four = v.clone();
        four.push(store.add_point(0.0, 1.0));
        let err = Triangle::new(ShapeInput::from_vertices(four)).unwrap_err();
        assert!(matches!(
            err,
            ShapekitError::Shape(ShapeError::CountMismatch {
                kind: ShapeKind::Triangle,
                vertices: 4,
                ..
            })
        ));
        assert!(Triangle::new(ShapeInput::empty()).is_err());
    }

    #[test]
    fn collinear_points_give_zero_area() {
        let mut store = PointStore::new();
        let v = tri(&mut store, [(0.0, 0.0), (1.0, 0.0), (5.0, 0.0)]);
        let t = Triangle::new(ShapeInput::from_vertices(v)).unwrap();
        assert_abs_diff_eq!(t.area(&store).unwrap(), 0.0);
    }

    #[test]
    fn equilateral_side_5() {
        let mut store = PointStore::new();
        let height = 5.0 * 3.0_f64.sqrt() / 2.0;
        let v = tri(&mut store, [(0.0, 0.0), (5.0, 0.0), (2.5, height)]);
        let t = Equilateral::new(ShapeInput::from_vertices(v).with_tolerance(1e-9)).unwrap();
        assert_eq!(t.inner_angles(), &Equilateral::ANGLES);
        assert!(t.outline().regular_hint());
        assert_abs_diff_eq!(t.area(&store).unwrap(), 10.825, epsilon = 1e-3);
        assert!(t.is_regular(&store).unwrap());
    }

    #[test]
    fn equilateral_trusts_caller() {
        let mut store = PointStore::new();
        let v = right_3_4_5(&mut store);
        let t = Equilateral::new(ShapeInput::from_vertices(v)).unwrap();
        assert_eq!(t.inner_angles(), &Equilateral::ANGLES);
        assert!(t.outline().regular_hint());
        assert!(!t.is_regular(&store).unwrap());
    }

    #[test]
    fn isosceles_5_5_8() {
        let mut store = PointStore::new();
        // Sides 8, 5, 5.
        let v = tri(&mut store, [(0.0, 0.0), (8.0, 0.0), (4.0, 3.0)]);
        let t = Isosceles::new(ShapeInput::from_vertices(v), &store).unwrap();
        let angles = t.inner_angles();
        assert_abs_diff_eq!(angles[0], 36.87, epsilon = 1e-2);
        assert_abs_diff_eq!(angles[1], angles[0]);
        assert_abs_diff_eq!(angles[2], 106.26, epsilon = 1e-2);
        assert_abs_diff_eq!(angles.iter().sum::<f64>(), 180.0, epsilon = 1e-3);
    }

    #[test]
    fn isosceles_with_first_and_third_sides_equal() {
        let mut store = PointStore::new();
        // Sides 5, 8, 5.
        let v = tri(&mut store, [(4.0, 3.0), (0.0, 0.0), (8.0, 0.0)]);
        let t = Isosceles::new(ShapeInput::from_vertices(v), &store).unwrap();
        assert_eq!(t.sides(&store).unwrap(), [5.0, 8.0, 5.0]);
        assert_abs_diff_eq!(t.inner_angles()[2], 106.26, epsilon = 1e-2);
    }

    #[test]
    fn isosceles_rejects_three_different_sides() {
        let mut store = PointStore::new();
        let v = right_3_4_5(&mut store);
        let err = Isosceles::new(ShapeInput::from_vertices(v), &store).unwrap_err();
        assert!(matches!(
            err,
            ShapekitError::Shape(ShapeError::UnclassifiableTriangle { .. })
        ));
    }

    #[test]
    fn isosceles_tolerance_absorbs_rounding() {
        let mut store = PointStore::new();
        let v = tri(&mut store, [(0.0, 0.0), (8.0, 0.0), (4.0 + 1e-13, 3.0)]);
        assert!(Isosceles::new(ShapeInput::from_vertices(v.clone()), &store).is_err());
        let t = Isosceles::new(
            ShapeInput::from_vertices(v).with_tolerance(TOLERANCE),
            &store,
        )
        .unwrap();
        assert_abs_diff_eq!(t.inner_angles()[2], 106.26, epsilon = 1e-2);
    }

    #[test]
    fn scalene_3_4_5() {
        let mut store = PointStore::new();
        let v = right_3_4_5(&mut store);
        let t = Scalene::new(ShapeInput::from_vertices(v), &store).unwrap();
        let angles = t.inner_angles();
        assert_abs_diff_eq!(angles[0], 36.87, epsilon = 1e-2);
        assert_abs_diff_eq!(angles[1], 53.13, epsilon = 1e-2);
        assert_abs_diff_eq!(angles[2], 90.0, epsilon = 1e-6);
        assert_abs_diff_eq!(angles.iter().sum::<f64>(), 180.0, epsilon = 1e-3);
        assert_abs_diff_eq!(t.area(&store).unwrap(), 6.0, epsilon = 1e-6);
    }

    #[test]
    fn scalene_overrides_supplied_angles() {
        let mut store = PointStore::new();
        let v = right_3_4_5(&mut store);
        let t = Scalene::new(
            ShapeInput::from_vertices(v).with_inner_angles(vec![60.0; 3]),
            &store,
        )
        .unwrap();
        assert!((t.inner_angles()[2] - 90.0).abs() < 1e-6);
    }

    #[test]
    fn right_triangle_3_4_5() {
        let mut store = PointStore::new();
        // Sides out of order: 5, 3, 4.
        let v = tri(&mut store, [(3.0, 4.0), (0.0, 0.0), (3.0, 0.0)]);
        let t = RightTriangle::new(ShapeInput::from_vertices(v), &store).unwrap();
        let angles = t.inner_angles();
        assert_abs_diff_eq!(angles[0], 0.6_f64.asin().to_degrees(), epsilon = 1e-12);
        assert_abs_diff_eq!(angles[0], 36.87, epsilon = 1e-2);
        assert_abs_diff_eq!(angles[1], 53.13, epsilon = 1e-2);
        assert_abs_diff_eq!(angles[2], 90.0);
    }

    #[test]
    fn computed_angles_follow_points_at_construction_only() {
        let mut store = PointStore::new();
        let v = right_3_4_5(&mut store);
        let t = Scalene::new(ShapeInput::from_vertices(v.clone()), &store).unwrap();
        let before = t.inner_angles().to_vec();
        store.move_point(v[2], 3.0, 9.0).unwrap();
        assert_eq!(t.inner_angles(), before.as_slice());
        assert!(t.perimeter(&store).unwrap() > 12.0);
    }
}
