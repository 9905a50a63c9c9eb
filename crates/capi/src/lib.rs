#![deny(bare_trait_objects)]

//! C bindings for `cadence_geom`.
//!
//! The declarations are mirrored in `include/cadence.h`. Curves and points are
//! passed by value and share the layout of their Rust counterparts.

pub use cadence_geom::{ControlPoint, CubicBezierCurve, CurvePoint};

use cadence_geom::{InversionError, SolverOptions};

/// Outcome of [`cadence_try_evaluate_inverse_at`].
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CadenceStatus {
    Ok = 0,
    /// The curve has no parameter in `[0, 1]` whose x coordinate is the requested time.
    NoRoot = 1,
    /// Every parameter maps to the same x coordinate.
    Degenerate = 2,
    /// The requested time is NaN.
    InvalidTime = 3,
    NullPointer = 4,
}

impl From<InversionError> for CadenceStatus {
    fn from(error: InversionError) -> Self {
        match error {
            InversionError::TimeIsNaN => CadenceStatus::InvalidTime,
            InversionError::NoRootInDomain { .. } => CadenceStatus::NoRoot,
            InversionError::DegenerateCurve => CadenceStatus::Degenerate,
            _ => CadenceStatus::InvalidTime,
        }
    }
}

/// Point of `curve` at parameter `t`.
#[no_mangle]
pub extern "C" fn cadence_evaluate_at(curve: CubicBezierCurve, t: f64) -> CurvePoint {
    curve.evaluate_at(t)
}

/// Point of `curve` whose x coordinate is `t`.
#[no_mangle]
pub extern "C" fn cadence_evaluate_inverse_at(curve: CubicBezierCurve, t: f64) -> CurvePoint {
    curve.evaluate_inverse_at(t)
}

/// Point of `curve` whose x coordinate is `t`, reporting failures instead of
/// falling back to a default point.
///
/// `out` is only written when the status is `Ok`.
///
/// # Safety
///
/// `out` must be null or point to memory valid for writing a `CurvePoint`.
#[no_mangle]
pub unsafe extern "C" fn cadence_try_evaluate_inverse_at(
    curve: CubicBezierCurve,
    t: f64,
    out: *mut CurvePoint,
) -> CadenceStatus {
    if out.is_null() {
        return CadenceStatus::NullPointer;
    }

    match curve.try_evaluate_inverse_at(t, &SolverOptions::DEFAULT) {
        Ok(point) => {
            *out = point;
            CadenceStatus::Ok
        }
        Err(error) => error.into(),
    }
}

#[test]
fn forward_and_inverse() {
    let point = cadence_evaluate_at(CubicBezierCurve::IDENTITY, 0.25);
    assert!((point.relative_time - 0.25).abs() < 1e-9);
    assert!((point.relative_value - 0.25).abs() < 1e-9);

    let point = cadence_evaluate_inverse_at(CubicBezierCurve::EASE, 0.5);
    assert!((point.relative_time - 0.5).abs() < 1e-6);
    assert!((point.relative_value - 0.8024).abs() < 0.01);
}

#[test]
fn status_codes() {
    let mut out = CurvePoint::START;

    let status = unsafe { cadence_try_evaluate_inverse_at(CubicBezierCurve::EASE, 0.5, &mut out) };
    assert_eq!(status, CadenceStatus::Ok);
    assert!((out.relative_value - 0.8024).abs() < 0.01);

    let flat = CubicBezierCurve::new(
        ControlPoint::new(0.5, 0.0),
        ControlPoint::new(0.5, 0.3),
        ControlPoint::new(0.5, 0.6),
        ControlPoint::new(0.5, 1.0),
    );
    let mut out = CurvePoint::START;
    let status = unsafe { cadence_try_evaluate_inverse_at(flat, 0.5, &mut out) };
    assert_eq!(status, CadenceStatus::Degenerate);
    assert_eq!(out, CurvePoint::START);

    let status = unsafe { cadence_try_evaluate_inverse_at(flat, f64::NAN, &mut out) };
    assert_eq!(status, CadenceStatus::InvalidTime);

    let status = unsafe {
        cadence_try_evaluate_inverse_at(CubicBezierCurve::EASE, 0.5, std::ptr::null_mut())
    };
    assert_eq!(status, CadenceStatus::NullPointer);
}
