//! Evaluation of a curve at a given x coordinate.
//!
//! Looking for the point of the curve at time `t` amounts to intersecting the curve
//! with the vertical line `x = t`:
//!
//! 1. the curve is translated by `(-t, 0)` so that the line goes through the origin,
//! 2. it is then rotated by a quarter turn around the origin, which puts the line on
//!    the x axis,
//! 3. the intersection is now a zero of the rotated curve's y coordinate, which the
//!    [`solver`](crate::solver) computes in closed form.
//!
//! The parameter of that zero is the parameter of the original curve where its x
//! coordinate is `t`, so the original curve is then evaluated there.

use crate::evaluate::evaluate_at;
use crate::solver::{curve_root, SolverOptions, UnitRoot};
use crate::{CubicBezierCurve, CurvePoint, InversionError, Transform};

/// The transform mapping the vertical line `x = t` onto the x axis.
///
/// Translates by `(-t, 0)` then rotates by 90 degrees: `(x, y) -> (-y, x - t)`.
pub fn time_alignment(t: f64) -> Transform {
    let quarter_turn = Transform::new(0.0, 1.0, -1.0, 0.0, 0.0, 0.0);
    Transform::translation(-t, 0.0).then(&quarter_turn)
}

/// Returns the point of the curve whose x coordinate is `t`.
///
/// This is the operation easing animations need: `t` is the elapsed fraction of
/// the animation's duration and the `relative_value` of the result is its
/// progress.
///
/// Times outside of `]0, 1[` behave like [`evaluate_at`]. When no point of the
/// curve has the requested x coordinate, the start of the curve is returned and
/// when the curve is degenerate the time is used as the parameter. Use
/// [`try_evaluate_inverse_at`] to detect these cases.
pub fn evaluate_inverse_at(curve: &CubicBezierCurve, t: f64) -> CurvePoint {
    if t <= 0.0 || t >= 1.0 {
        return evaluate_at(curve, t);
    }

    let parameter = match aligned_root(curve, t, &SolverOptions::DEFAULT) {
        UnitRoot::Found(root) => root,
        UnitRoot::NotFound => 0.0,
        UnitRoot::Degenerate => t,
    };

    evaluate_at(curve, parameter)
}

/// Returns the point of the curve whose x coordinate is `t`, or the reason why
/// there is none.
pub fn try_evaluate_inverse_at(
    curve: &CubicBezierCurve,
    t: f64,
    options: &SolverOptions,
) -> Result<CurvePoint, InversionError> {
    if t.is_nan() {
        return Err(InversionError::TimeIsNaN);
    }

    if t <= 0.0 || t >= 1.0 {
        return Ok(evaluate_at(curve, t));
    }

    match aligned_root(curve, t, options) {
        UnitRoot::Found(root) => Ok(evaluate_at(curve, root)),
        UnitRoot::NotFound => Err(InversionError::NoRootInDomain { time: t }),
        UnitRoot::Degenerate => Err(InversionError::DegenerateCurve),
    }
}

fn aligned_root(curve: &CubicBezierCurve, t: f64, options: &SolverOptions) -> UnitRoot {
    let aligned = curve.transformed(&time_alignment(t));
    curve_root(&aligned, options)
}

#[cfg(test)]
use crate::ControlPoint;

#[cfg(test)]
fn assert_approx_eq(a: f64, b: f64, epsilon: f64) {
    if (a - b).abs() > epsilon {
        std::println!("{:?} != {:?}", a, b);
    }
    assert!((a - b).abs() <= epsilon);
}

#[test]
fn alignment_transform() {
    use crate::point;

    let transform = time_alignment(0.25);
    assert_eq!(transform.transform_point(point(0.25, 0.0)), point(0.0, 0.0));
    assert_eq!(transform.transform_point(point(1.25, 0.0)), point(0.0, 1.0));
    assert_eq!(transform.transform_point(point(0.25, 1.0)), point(-1.0, 0.0));
}

#[test]
fn css_ease_at_half_time() {
    let p = evaluate_inverse_at(&CubicBezierCurve::EASE, 0.5);
    assert_approx_eq(p.relative_time, 0.5, 1e-9);
    assert_approx_eq(p.relative_value, 0.8024, 0.01);
}

#[test]
fn symmetric_curves_at_half_time() {
    // x1 + x2 = 1 puts the middle of the curve at (0.5, 0.5).
    let curves = [
        CubicBezierCurve::EASE_IN_OUT,
        CubicBezierCurve::LINEAR,
        CubicBezierCurve::easing(ControlPoint::new(0.8, 0.0), ControlPoint::new(0.2, 1.0)),
    ];

    for curve in &curves {
        let p = evaluate_inverse_at(curve, 0.5);
        assert_approx_eq(p.relative_time, 0.5, 1e-9);
        assert_approx_eq(p.relative_value, 0.5, 1e-9);
        assert_eq!(try_evaluate_inverse_at(curve, 0.5, &SolverOptions::DEFAULT), Ok(p));
    }
}

#[test]
fn identity_inverse() {
    let curve = CubicBezierCurve::IDENTITY;
    for i in 1..100 {
        let t = i as f64 / 100.0;
        let p = evaluate_inverse_at(&curve, t);
        assert_approx_eq(p.relative_time, t, 1e-9);
        assert_approx_eq(p.relative_value, t, 1e-9);
    }
}

#[test]
fn round_trip() {
    let curves = [
        CubicBezierCurve::EASE,
        CubicBezierCurve::EASE_IN,
        CubicBezierCurve::EASE_OUT,
        CubicBezierCurve::EASE_IN_OUT,
        CubicBezierCurve::EASE_OUT_EXPO,
        CubicBezierCurve::EASE_OUT_BACK,
        CubicBezierCurve::LINEAR,
    ];

    for curve in &curves {
        for i in 1..20 {
            let t = i as f64 / 20.0;
            let expected = evaluate_at(curve, t);
            let actual = evaluate_inverse_at(curve, expected.relative_time);
            assert_approx_eq(actual.relative_value, expected.relative_value, 1e-6);
        }
    }
}

#[test]
fn out_of_range_times_are_clamped() {
    let curve = CubicBezierCurve::EASE_OUT_BACK;
    assert_eq!(evaluate_inverse_at(&curve, -1.0), CurvePoint::START);
    assert_eq!(evaluate_inverse_at(&curve, 0.0), CurvePoint::START);
    assert_eq!(evaluate_inverse_at(&curve, 1.0), CurvePoint::END);
    assert_eq!(evaluate_inverse_at(&curve, 2.0), CurvePoint::END);
}

#[test]
fn missing_root() {
    // Every x coordinate of this curve is above 0.5.
    let curve = CubicBezierCurve::new(
        ControlPoint::new(0.6, 0.0),
        ControlPoint::new(0.7, 0.3),
        ControlPoint::new(0.8, 0.6),
        ControlPoint::new(0.9, 1.0),
    );

    assert_eq!(evaluate_inverse_at(&curve, 0.5), CurvePoint::START);
    assert_eq!(
        try_evaluate_inverse_at(&curve, 0.5, &SolverOptions::DEFAULT),
        Err(InversionError::NoRootInDomain { time: 0.5 })
    );
}

#[test]
fn degenerate_curve() {
    // All control points share the same x coordinate.
    let curve = CubicBezierCurve::new(
        ControlPoint::new(0.5, 0.0),
        ControlPoint::new(0.5, 0.2),
        ControlPoint::new(0.5, 0.8),
        ControlPoint::new(0.5, 1.0),
    );

    assert_eq!(
        try_evaluate_inverse_at(&curve, 0.5, &SolverOptions::DEFAULT),
        Err(InversionError::DegenerateCurve)
    );

    let p = evaluate_inverse_at(&curve, 0.5);
    assert_eq!(p, evaluate_at(&curve, 0.5));
}

#[test]
fn nan_time() {
    assert_eq!(
        try_evaluate_inverse_at(&CubicBezierCurve::EASE, f64::NAN, &SolverOptions::DEFAULT),
        Err(InversionError::TimeIsNaN)
    );
}
