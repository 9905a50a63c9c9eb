use crate::{CurvePoint, TimingCurve, TimingParameters};

use std::ops::Range;

/// The timing of one keyframe within a longer animation.
///
/// Start time and duration are fractions of the total duration of the animation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct KeyframeTiming {
    pub curve: TimingCurve,
    pub relative_start_time: f64,
    pub relative_duration: f64,
    /// In seconds.
    pub total_duration: f64,
}

impl KeyframeTiming {
    pub fn new(curve: TimingCurve, relative_start_time: f64, relative_duration: f64) -> Self {
        KeyframeTiming {
            curve,
            relative_start_time,
            relative_duration,
            total_duration: 0.0,
        }
    }

    #[inline]
    pub fn with_total_duration(mut self, total_duration: f64) -> Self {
        self.total_duration = total_duration;
        self
    }

    /// The fraction of the animation covered by this keyframe.
    #[inline]
    pub fn range(&self) -> Range<f64> {
        self.relative_start_time..(self.relative_start_time + self.relative_duration)
    }

    /// Whether the two keyframes are active at the same time.
    pub fn overlaps(&self, other: &KeyframeTiming) -> bool {
        let a = self.range();
        let b = other.range();

        !a.is_empty() && !b.is_empty() && a.start < b.end && b.start < a.end
    }

    /// Duration of the keyframe in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.relative_duration * self.total_duration
    }
}

impl Default for KeyframeTiming {
    fn default() -> Self {
        KeyframeTiming::new(TimingCurve::SystemDefault, 0.0, 1.0)
    }
}

impl TimingParameters for KeyframeTiming {
    fn progress(&self, time: f64) -> CurvePoint {
        self.curve.progress(time)
    }
}

#[test]
fn overlapping_keyframes() {
    let first = KeyframeTiming::new(TimingCurve::LINEAR, 0.0, 0.5);
    let second = KeyframeTiming::new(TimingCurve::EASE_IN, 0.5, 0.5);
    let third = KeyframeTiming::new(TimingCurve::EASE_OUT, 0.25, 0.5);
    let empty = KeyframeTiming::new(TimingCurve::EASE_OUT, 0.3, 0.0);

    assert!(!first.overlaps(&second));
    assert!(first.overlaps(&third));
    assert!(second.overlaps(&third));
    assert!(!empty.overlaps(&third));
}

#[test]
fn keyframe_duration() {
    let keyframe = KeyframeTiming::new(TimingCurve::LINEAR, 0.2, 0.25).with_total_duration(2.0);
    assert_eq!(keyframe.duration(), 0.5);
    assert_eq!(keyframe.range(), 0.2..0.45);
    assert_eq!(KeyframeTiming::default().range(), 0.0..1.0);
}

#[test]
fn keyframe_progress_follows_its_curve() {
    let keyframe = KeyframeTiming::new(TimingCurve::EASE_IN_OUT, 0.0, 1.0);
    assert_eq!(keyframe.progress(0.3), TimingCurve::EASE_IN_OUT.progress(0.3));
}
