/// Area of a triangle with side lengths `a`, `b`, `c` (Heron's formula).
///
/// Lengths violating the triangle inequality produce `NaN`.
#[must_use]
pub fn heron_area(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

/// Angle in degrees opposite the side `opposite`, given the two adjacent
/// sides (law of cosines).
#[must_use]
pub fn angle_opposite(opposite: f64, adjacent_a: f64, adjacent_b: f64) -> f64 {
    let cos = (adjacent_a.powi(2) + adjacent_b.powi(2) - opposite.powi(2))
        / (2.0 * adjacent_a * adjacent_b);
    cos.acos().to_degrees()
}

/// Apex angle in degrees of an isosceles triangle with legs `equal` and `base`.
#[must_use]
pub fn isosceles_apex_angle(equal: f64, base: f64) -> f64 {
    let leg_sq = equal.powi(2);
    ((2.0 * leg_sq - base.powi(2)) / (2.0 * leg_sq))
        .acos()
        .to_degrees()
}

/// Acute angle in degrees opposite `side` in a right triangle with the
/// given hypotenuse.
#[must_use]
pub fn right_triangle_angle(side: f64, hypotenuse: f64) -> f64 {
    (side / hypotenuse).asin().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn heron_3_4_5() {
        assert_abs_diff_eq!(heron_area(3.0, 4.0, 5.0), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn heron_rejects_impossible_sides() {
        assert!(heron_area(1.0, 1.0, 5.0).is_nan());
    }

    #[test]
    fn law_of_cosines_right_angle() {
        assert_abs_diff_eq!(angle_opposite(5.0, 3.0, 4.0), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn apex_of_5_5_8() {
        assert_abs_diff_eq!(isosceles_apex_angle(5.0, 8.0), 106.260_204, epsilon = 1e-5);
    }

    #[test]
    fn arcsine_split() {
        assert_abs_diff_eq!(right_triangle_angle(3.0, 5.0), 36.869_898, epsilon = 1e-5);
    }
}
