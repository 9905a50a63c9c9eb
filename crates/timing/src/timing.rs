use cadence_geom::{CubicBezierCurve, CurvePoint};

/// Frame rate used when sampling a timing function, in frames per second.
pub const DEFAULT_MAX_FPS: f64 = 60.0;

/// A function mapping the elapsed time of an animation to its progress.
pub trait TimingParameters {
    /// Progress of the animation at `time`.
    fn progress(&self, time: f64) -> CurvePoint;

    /// Samples the timing function once per frame of an animation lasting
    /// `duration` seconds, at up to `max_fps` frames per second.
    ///
    /// Samples start at time 0 and are evenly spaced up to (excluding) 1, the last
    /// element is always [`CurvePoint::END`]. A non-positive duration produces
    /// `[START, END]`.
    fn progressions(&self, duration: f64, max_fps: f64) -> Vec<CurvePoint> {
        if !(duration > 0.0) {
            return vec![CurvePoint::START, CurvePoint::END];
        }

        let frames = (max_fps * duration).floor().max(1.0);
        let step = 1.0 / frames;
        let count = frames as usize;

        let mut result = Vec::with_capacity(count + 1);
        for frame in 0..count {
            result.push(self.progress(frame as f64 * step));
        }
        result.push(CurvePoint::END);

        result
    }

    /// The relative time of the first frame at which the animation reaches
    /// `relative_value`, or 1 if it never does.
    fn delay(&self, relative_value: f64, duration: f64, max_fps: f64) -> f64 {
        self.progressions(duration, max_fps)
            .iter()
            .find(|progression| relative_value <= progression.relative_value)
            .map_or(1.0, |progression| progression.relative_time)
    }
}

impl TimingParameters for CubicBezierCurve {
    fn progress(&self, time: f64) -> CurvePoint {
        self.evaluate_inverse_at(time)
    }
}

#[test]
fn progressions_of_a_short_animation() {
    let frames = CubicBezierCurve::IDENTITY.progressions(0.5, 12.0);

    // 6 frames and the end.
    assert_eq!(frames.len(), 7);
    assert_eq!(frames[0], CurvePoint::START);
    assert_eq!(*frames.last().unwrap(), CurvePoint::END);

    for (i, frame) in frames[1..6].iter().enumerate() {
        let t = (i + 1) as f64 / 6.0;
        assert!((frame.relative_time - t).abs() < 1e-9);
        assert!((frame.relative_value - t).abs() < 1e-9);
    }
}

#[test]
fn progressions_without_duration() {
    let frames = CubicBezierCurve::EASE.progressions(0.0, 60.0);
    assert_eq!(frames, vec![CurvePoint::START, CurvePoint::END]);

    let frames = CubicBezierCurve::EASE.progressions(f64::NAN, 60.0);
    assert_eq!(frames, vec![CurvePoint::START, CurvePoint::END]);
}

#[test]
fn progressions_shorter_than_a_frame() {
    let frames = CubicBezierCurve::EASE.progressions(0.001, 60.0);
    assert_eq!(frames, vec![CurvePoint::START, CurvePoint::END]);
}

#[test]
fn delay_until_half_progress() {
    // Linear in time: the first frame past 0.45 is at time 0.5.
    let delay = CubicBezierCurve::IDENTITY.delay(0.45, 1.0, 10.0);
    assert!((delay - 0.5).abs() < 1e-9);

    // The ease curve gets there earlier.
    let delay = CubicBezierCurve::EASE.delay(0.5, 1.0, 10.0);
    assert!((delay - 0.3).abs() < 1e-9);

    // Never reached.
    assert_eq!(CubicBezierCurve::EASE.delay(2.0, 1.0, 10.0), 1.0);
}
