//! Forward evaluation of a curve at its parameter.

use crate::{Axis, CubicBezierCurve, CubicCoefficients, CurvePoint};

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// Samples the curve at parameter `t`.
///
/// Parameters outside of `]0, 1[` are clamped and produce `(t, t)` with the clamped
/// value instead of the curve's end points: `evaluate_at(curve, 1.5)` is always
/// `(1, 1)`. A `NaN` parameter is not clamped and propagates to the result.
pub fn evaluate_at(curve: &CubicBezierCurve, t: f64) -> CurvePoint {
    if t <= 0.0 || t >= 1.0 {
        return CurvePoint::diagonal(t.max(0.0).min(1.0));
    }

    let x = CubicCoefficients::from_curve(curve, Axis::X);
    let y = CubicCoefficients::from_curve(curve, Axis::Y);

    CurvePoint {
        relative_time: x.evaluate(t),
        relative_value: y.evaluate(t),
    }
}

#[cfg(test)]
use crate::ControlPoint;

#[cfg(test)]
fn assert_approx_eq(a: CurvePoint, b: CurvePoint, epsilon: f64) {
    if (a.relative_time - b.relative_time).abs() > epsilon
        || (a.relative_value - b.relative_value).abs() > epsilon
    {
        std::println!("{:?} != {:?}", a, b);
    }
    assert!((a.relative_time - b.relative_time).abs() <= epsilon);
    assert!((a.relative_value - b.relative_value).abs() <= epsilon);
}

#[test]
fn identity_curve() {
    let curve = CubicBezierCurve::IDENTITY;
    for i in 0..=100 {
        let t = i as f64 / 100.0;
        assert_approx_eq(evaluate_at(&curve, t), CurvePoint::new(t, t), 1e-9);
    }
}

#[test]
fn end_points_are_clamped_values() {
    // The end points of this curve are not (0, 0) and (1, 1).
    let curve = CubicBezierCurve::new(
        ControlPoint::new(2.0, 3.0),
        ControlPoint::new(4.0, -1.0),
        ControlPoint::new(5.0, 7.0),
        ControlPoint::new(6.0, 8.0),
    );

    assert_eq!(evaluate_at(&curve, 0.0), CurvePoint::START);
    assert_eq!(evaluate_at(&curve, 1.0), CurvePoint::END);
    assert_eq!(evaluate_at(&curve, -0.5), CurvePoint::START);
    assert_eq!(evaluate_at(&curve, 1.5), CurvePoint::END);
    assert_eq!(evaluate_at(&curve, f64::NEG_INFINITY), CurvePoint::START);
    assert_eq!(evaluate_at(&curve, f64::INFINITY), CurvePoint::END);
}

#[test]
fn inner_points_follow_the_curve() {
    let curve = CubicBezierCurve::new(
        ControlPoint::new(2.0, 3.0),
        ControlPoint::new(4.0, -1.0),
        ControlPoint::new(5.0, 7.0),
        ControlPoint::new(6.0, 8.0),
    );

    // (1/8) * (c0 + 3 * c1 + 3 * c2 + c3)
    assert_approx_eq(evaluate_at(&curve, 0.5), CurvePoint::new(4.375, 3.625), 1e-12);
}

#[test]
fn nan_propagates() {
    let p = evaluate_at(&CubicBezierCurve::EASE, f64::NAN);
    assert!(p.relative_time.is_nan());
    assert!(p.relative_value.is_nan());
}
