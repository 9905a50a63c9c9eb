use crate::parser::{parse_timing_curve, ParseError};
use crate::{CubicBezierCurve, CurvePoint, SpringTiming, TimingParameters};

use std::str::FromStr;

/// The timing function of an animation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum TimingCurve {
    /// The platform's default easing, [`CubicBezierCurve::EASE`].
    SystemDefault,
    Cubic(CubicBezierCurve),
    Spring(SpringTiming),
}

impl TimingCurve {
    pub const LINEAR: Self = TimingCurve::Cubic(CubicBezierCurve::LINEAR);
    pub const EASE_IN: Self = TimingCurve::Cubic(CubicBezierCurve::EASE_IN);
    pub const EASE_OUT: Self = TimingCurve::Cubic(CubicBezierCurve::EASE_OUT);
    pub const EASE_IN_OUT: Self = TimingCurve::Cubic(CubicBezierCurve::EASE_IN_OUT);

    /// The easing curve this timing function evaluates, if any.
    pub fn cubic_bezier(&self) -> Option<CubicBezierCurve> {
        match *self {
            TimingCurve::SystemDefault => Some(CubicBezierCurve::EASE),
            TimingCurve::Cubic(curve) => Some(curve),
            TimingCurve::Spring(_) => None,
        }
    }
}

impl Default for TimingCurve {
    fn default() -> Self {
        TimingCurve::SystemDefault
    }
}

impl From<CubicBezierCurve> for TimingCurve {
    fn from(curve: CubicBezierCurve) -> Self {
        TimingCurve::Cubic(curve)
    }
}

impl From<SpringTiming> for TimingCurve {
    fn from(spring: SpringTiming) -> Self {
        TimingCurve::Spring(spring)
    }
}

impl TimingParameters for TimingCurve {
    fn progress(&self, time: f64) -> CurvePoint {
        match self {
            TimingCurve::SystemDefault => CubicBezierCurve::EASE.progress(time),
            TimingCurve::Cubic(curve) => curve.progress(time),
            TimingCurve::Spring(spring) => spring.progress(time),
        }
    }
}

impl FromStr for TimingCurve {
    type Err = ParseError;

    fn from_str(src: &str) -> Result<Self, ParseError> {
        parse_timing_curve(src)
    }
}

#[test]
fn system_default_is_ease() {
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert_eq!(
            TimingCurve::SystemDefault.progress(t),
            TimingCurve::Cubic(CubicBezierCurve::EASE).progress(t)
        );
    }

    assert_eq!(TimingCurve::default().cubic_bezier(), Some(CubicBezierCurve::EASE));
    assert_eq!(TimingCurve::from(SpringTiming::DEFAULT).cubic_bezier(), None);
}

#[test]
fn spring_progress_is_not_clamped() {
    let curve = TimingCurve::Spring(SpringTiming::DEFAULT);
    assert_eq!(curve.progress(2.0).relative_time, 2.0);
}
