use crate::Point;

use core::fmt;

/// One of the four points defining a [`CubicBezierCurve`](crate::CubicBezierCurve).
///
/// The layout is C compatible so that curves can be handed over the FFI boundary
/// as-is.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
}

impl ControlPoint {
    pub const ZERO: Self = ControlPoint { x: 0.0, y: 0.0 };
    pub const UNIT: Self = ControlPoint { x: 1.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        ControlPoint { x, y }
    }

    #[inline]
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.x, self.y)
    }
}

impl From<Point<f64>> for ControlPoint {
    fn from(p: Point<f64>) -> Self {
        ControlPoint::new(p.x, p.y)
    }
}

impl From<ControlPoint> for Point<f64> {
    fn from(p: ControlPoint) -> Self {
        p.to_point()
    }
}

impl From<(f64, f64)> for ControlPoint {
    fn from((x, y): (f64, f64)) -> Self {
        ControlPoint::new(x, y)
    }
}

impl fmt::Display for ControlPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ x: {}, y: {} }}", self.x, self.y)
    }
}

/// The result of evaluating a curve.
///
/// `relative_time` is the x coordinate of the curve and `relative_value` its y
/// coordinate at the evaluated parameter. When the curve is used for easing,
/// `relative_value` is the progress of the animation.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CurvePoint {
    pub relative_time: f64,
    pub relative_value: f64,
}

impl CurvePoint {
    pub const START: Self = CurvePoint { relative_time: 0.0, relative_value: 0.0 };
    pub const END: Self = CurvePoint { relative_time: 1.0, relative_value: 1.0 };

    #[inline]
    pub const fn new(relative_time: f64, relative_value: f64) -> Self {
        CurvePoint { relative_time, relative_value }
    }

    /// A point with the same time and value, as produced when the parameter is clamped.
    #[inline]
    pub const fn diagonal(t: f64) -> Self {
        CurvePoint::new(t, t)
    }
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\ttime: {}\n\tvalue: {}", self.relative_time, self.relative_value)
    }
}

#[test]
fn control_point_conversions() {
    let p = ControlPoint::new(0.25, 0.1);
    let euclid_point: Point<f64> = p.into();
    assert_eq!(euclid_point, Point::new(0.25, 0.1));
    assert_eq!(ControlPoint::from(euclid_point), p);
    assert_eq!(ControlPoint::from((1.0, 1.0)), ControlPoint::UNIT);
}

#[test]
fn curve_point_display() {
    use std::string::ToString;

    let p = CurvePoint::new(0.5, 0.75);
    assert_eq!(p.to_string(), "\ttime: 0.5\n\tvalue: 0.75");
    assert_eq!(CurvePoint::diagonal(1.0), CurvePoint::END);
}
