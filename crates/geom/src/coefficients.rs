//! Expansion of the cubic bézier basis into a polynomial of `t`.
//!
//! For the coordinates `c0..c3` of one axis,
//!
//! ```text
//! (1 - t)³ * c0 + 3 * (1 - t)² * t * c1 + 3 * t² * (1 - t) * c2 + t³ * c3
//!   = (c3 - 3c2 + 3c1 - c0) t³ + (3c2 - 6c1 + 3c0) t² + (3c1 - 3c0) t + c0
//! ```

use crate::CubicBezierCurve;

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// Selects which coordinate of the control points is expanded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// The coefficients of `a * t³ + b * t² + c * t + d`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl CubicCoefficients {
    /// Expands the given axis of a curve.
    pub fn from_curve(curve: &CubicBezierCurve, axis: Axis) -> Self {
        let [c0, c1, c2, c3] = curve.axis_values(axis);

        CubicCoefficients {
            a: c3 - 3.0 * c2 + 3.0 * c1 - c0,
            b: 3.0 * c2 - 6.0 * c1 + 3.0 * c0,
            c: 3.0 * c1 - 3.0 * c0,
            d: c0,
        }
    }

    /// Coefficients ordered from the highest degree to the lowest.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Evaluates the polynomial at `t`.
    ///
    /// The terms are summed from the highest degree to the lowest.
    pub fn evaluate(&self, t: f64) -> f64 {
        let mut sum = 0.0;
        for (coefficient, power) in self.to_array().iter().zip((0..4).rev()) {
            sum += coefficient * t.powi(power);
        }

        sum
    }

    /// Largest magnitude among the coefficients of degree two or less.
    #[inline]
    pub(crate) fn lower_degree_magnitude(&self) -> f64 {
        self.b.abs().max(self.c.abs()).max(self.d.abs())
    }
}

#[cfg(test)]
fn assert_approx_eq(a: f64, b: f64, epsilon: f64) {
    if (a - b).abs() > epsilon {
        std::println!("{:?} != {:?}", a, b);
    }
    assert!((a - b).abs() <= epsilon);
}

#[test]
fn coefficients_of_the_identity_curve() {
    let curve = CubicBezierCurve::IDENTITY;
    let x = CubicCoefficients::from_curve(&curve, Axis::X);

    assert_approx_eq(x.a, 0.0, 1e-12);
    assert_approx_eq(x.b, 0.0, 1e-12);
    assert_approx_eq(x.c, 1.0, 1e-12);
    assert_eq!(x.d, 0.0);
}

#[test]
fn coefficients_select_the_axis() {
    let curve = CubicBezierCurve::new(
        (1.0, 10.0).into(),
        (2.0, 20.0).into(),
        (3.0, 40.0).into(),
        (5.0, 80.0).into(),
    );

    let x = CubicCoefficients::from_curve(&curve, Axis::X);
    let y = CubicCoefficients::from_curve(&curve, Axis::Y);

    assert_eq!(x, CubicCoefficients { a: 1.0, b: 0.0, c: 3.0, d: 1.0 });
    assert_eq!(y, CubicCoefficients { a: 10.0, b: 30.0, c: 30.0, d: 10.0 });
}

#[test]
fn evaluate_matches_bernstein_form() {
    let curve = CubicBezierCurve::EASE;
    let y = CubicCoefficients::from_curve(&curve, Axis::Y);

    for i in 0..=10 {
        let t = i as f64 / 10.0;
        let one_t = 1.0 - t;
        let expected = one_t * one_t * one_t * curve.c0.y
            + 3.0 * one_t * one_t * t * curve.c1.y
            + 3.0 * one_t * t * t * curve.c2.y
            + t * t * t * curve.c3.y;

        assert_approx_eq(y.evaluate(t), expected, 1e-12);
    }
}
