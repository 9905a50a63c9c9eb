use crate::coefficients::Axis;
use crate::traits::Transformation;
use crate::{evaluate, inverse};
use crate::{point, Box2D, ControlPoint, CurvePoint, InversionError, SolverOptions};

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// A cubic bézier curve defined by four control points.
///
/// No constraint is put on the control points, although easing curves
/// conventionally start at `(0, 0)`, end at `(1, 1)` and have non-decreasing x
/// coordinates (see [`is_monotonic_in_x`](Self::is_monotonic_in_x)).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierCurve {
    pub c0: ControlPoint,
    pub c1: ControlPoint,
    pub c2: ControlPoint,
    pub c3: ControlPoint,
}

impl CubicBezierCurve {
    /// The curve whose parameter maps to itself on both axes.
    pub const IDENTITY: Self = CubicBezierCurve::easing(
        ControlPoint::new(1.0 / 3.0, 1.0 / 3.0),
        ControlPoint::new(2.0 / 3.0, 2.0 / 3.0),
    );

    pub const LINEAR: Self = CubicBezierCurve::easing(ControlPoint::ZERO, ControlPoint::UNIT);

    /// The system default timing function, also known as `ease`.
    pub const EASE: Self =
        CubicBezierCurve::easing(ControlPoint::new(0.25, 0.1), ControlPoint::new(0.25, 1.0));

    pub const EASE_IN: Self =
        CubicBezierCurve::easing(ControlPoint::new(0.42, 0.0), ControlPoint::UNIT);

    pub const EASE_OUT: Self =
        CubicBezierCurve::easing(ControlPoint::ZERO, ControlPoint::new(0.58, 1.0));

    pub const EASE_IN_OUT: Self =
        CubicBezierCurve::easing(ControlPoint::new(0.42, 0.0), ControlPoint::new(0.58, 1.0));

    pub const EASE_OUT_EXPO: Self =
        CubicBezierCurve::easing(ControlPoint::new(0.175, 0.885), ControlPoint::new(0.32, 1.275));

    pub const EASE_OUT_BACK: Self =
        CubicBezierCurve::easing(ControlPoint::new(0.23, 1.0), ControlPoint::new(0.47, 1.75));

    /// A version of `EASE_OUT_BACK` with a stronger bounce.
    pub const EASE_OUT_BACK_DRASTIC: Self =
        CubicBezierCurve::easing(ControlPoint::new(0.19, 1.0), ControlPoint::new(0.22, 1.0));

    #[inline]
    pub const fn new(c0: ControlPoint, c1: ControlPoint, c2: ControlPoint, c3: ControlPoint) -> Self {
        CubicBezierCurve { c0, c1, c2, c3 }
    }

    /// An easing curve from `(0, 0)` to `(1, 1)` with the two given inner control points.
    #[inline]
    pub const fn easing(c1: ControlPoint, c2: ControlPoint) -> Self {
        CubicBezierCurve::new(ControlPoint::ZERO, c1, c2, ControlPoint::UNIT)
    }

    #[inline]
    pub fn from_points(points: [ControlPoint; 4]) -> Self {
        let [c0, c1, c2, c3] = points;
        CubicBezierCurve { c0, c1, c2, c3 }
    }

    #[inline]
    pub fn control_points(&self) -> [ControlPoint; 4] {
        [self.c0, self.c1, self.c2, self.c3]
    }

    /// The coordinates of the four control points along one axis.
    #[inline]
    pub fn axis_values(&self, axis: Axis) -> [f64; 4] {
        match axis {
            Axis::X => [self.c0.x, self.c1.x, self.c2.x, self.c3.x],
            Axis::Y => [self.c0.y, self.c1.y, self.c2.y, self.c3.y],
        }
    }

    /// Applies the transform to every control point.
    pub fn transformed<T: Transformation>(&self, transform: &T) -> Self {
        CubicBezierCurve {
            c0: transform.transform_point(self.c0.to_point()).into(),
            c1: transform.transform_point(self.c1.to_point()).into(),
            c2: transform.transform_point(self.c2.to_point()).into(),
            c3: transform.transform_point(self.c3.to_point()).into(),
        }
    }

    /// Returns the smallest rectangle containing the control points, which also
    /// contains the curve.
    pub fn bounding_box(&self) -> Box2D<f64> {
        let [x0, x1, x2, x3] = self.axis_values(Axis::X);
        let [y0, y1, y2, y3] = self.axis_values(Axis::Y);

        Box2D {
            min: point(x0.min(x1).min(x2).min(x3), y0.min(y1).min(y2).min(y3)),
            max: point(x0.max(x1).max(x2).max(x3), y0.max(y1).max(y2).max(y3)),
        }
    }

    /// Whether the x coordinates of the control points never decrease.
    ///
    /// This is sufficient for the curve to be a function of its x coordinate, which
    /// is what makes [`evaluate_inverse_at`](Self::evaluate_inverse_at) well defined.
    pub fn is_monotonic_in_x(&self) -> bool {
        let [x0, x1, x2, x3] = self.axis_values(Axis::X);
        x0 <= x1 && x1 <= x2 && x2 <= x3
    }

    /// Samples the curve at parameter `t`.
    ///
    /// See [`evaluate::evaluate_at`].
    #[inline]
    pub fn evaluate_at(&self, t: f64) -> CurvePoint {
        evaluate::evaluate_at(self, t)
    }

    /// Returns the point of the curve whose x coordinate is `t`.
    ///
    /// See [`inverse::evaluate_inverse_at`].
    #[inline]
    pub fn evaluate_inverse_at(&self, t: f64) -> CurvePoint {
        inverse::evaluate_inverse_at(self, t)
    }

    /// Same as `evaluate_inverse_at` but reports the cases where no point of the
    /// curve has the requested x coordinate.
    ///
    /// See [`inverse::try_evaluate_inverse_at`].
    #[inline]
    pub fn try_evaluate_inverse_at(
        &self,
        t: f64,
        options: &SolverOptions,
    ) -> Result<CurvePoint, InversionError> {
        inverse::try_evaluate_inverse_at(self, t, options)
    }
}

impl Default for CubicBezierCurve {
    fn default() -> Self {
        CubicBezierCurve::EASE
    }
}

#[test]
fn bounding_box_of_overshooting_curve() {
    let bb = CubicBezierCurve::EASE_OUT_BACK.bounding_box();
    assert_eq!(
        bb,
        Box2D {
            min: point(0.0, 0.0),
            max: point(1.0, 1.75),
        }
    );
}

#[test]
fn monotonic_in_x() {
    assert!(CubicBezierCurve::EASE.is_monotonic_in_x());
    assert!(CubicBezierCurve::EASE_OUT_EXPO.is_monotonic_in_x());
    assert!(CubicBezierCurve::IDENTITY.is_monotonic_in_x());

    let backwards = CubicBezierCurve::easing(ControlPoint::new(0.8, 0.0), ControlPoint::new(0.2, 1.0));
    assert!(!backwards.is_monotonic_in_x());
}

#[test]
fn transformed_moves_every_point() {
    use crate::Transform;

    let curve = CubicBezierCurve::EASE.transformed(&Transform::translation(-0.5, 0.0));
    assert_eq!(curve.c0, ControlPoint::new(-0.5, 0.0));
    assert_eq!(curve.c1, ControlPoint::new(-0.25, 0.1));
    assert_eq!(curve.c2, ControlPoint::new(-0.25, 1.0));
    assert_eq!(curve.c3, ControlPoint::new(0.5, 1.0));
}
