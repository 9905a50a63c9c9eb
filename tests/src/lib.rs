use cadence::geom::{ControlPoint, CubicBezierCurve};

static COORDINATES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];
static OVERSHOOTS: [f64; 5] = [-0.5, 0.0, 0.4, 1.0, 1.75];

/// Easing curves with x coordinates in `[0, 1]`, which makes them monotonic in x.
pub fn generate_easing_curves() -> Vec<CubicBezierCurve> {
    let mut curves = vec![
        CubicBezierCurve::IDENTITY,
        CubicBezierCurve::LINEAR,
        CubicBezierCurve::EASE,
        CubicBezierCurve::EASE_IN,
        CubicBezierCurve::EASE_OUT,
        CubicBezierCurve::EASE_IN_OUT,
        CubicBezierCurve::EASE_OUT_EXPO,
        CubicBezierCurve::EASE_OUT_BACK,
        CubicBezierCurve::EASE_OUT_BACK_DRASTIC,
    ];

    for &x1 in &COORDINATES {
        for &x2 in &COORDINATES {
            for (i, &y1) in OVERSHOOTS.iter().enumerate() {
                let y2 = OVERSHOOTS[(i + 2) % OVERSHOOTS.len()];
                curves.push(CubicBezierCurve::easing(
                    ControlPoint::new(x1, y1),
                    ControlPoint::new(x2, y2),
                ));
            }
        }
    }

    curves
}

/// Evenly spaced times in `[0, 1]`, both ends included.
pub fn sample_times(count: u32) -> impl Iterator<Item = f64> {
    (0..=count).map(move |i| i as f64 / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence::geom::coefficients::CubicCoefficients;
    use cadence::geom::solver::solve_unit_root;
    use cadence::geom::{CurvePoint, InversionError, RootSelection, SolverOptions, UnitRoot};
    use cadence::timing::{SpringTiming, TimingCurve, TimingParameters};

    #[test]
    fn identity_curve() {
        for t in sample_times(100) {
            let point = CubicBezierCurve::IDENTITY.evaluate_at(t);
            assert!((point.relative_time - t).abs() < 1e-9, "{:?} at {}", point, t);
            assert!((point.relative_value - t).abs() < 1e-9, "{:?} at {}", point, t);
        }
    }

    #[test]
    fn endpoints_of_arbitrary_curves() {
        let unusual = CubicBezierCurve::new(
            ControlPoint::new(-3.0, 2.0),
            ControlPoint::new(4.0, -1.0),
            ControlPoint::new(0.5, 9.0),
            ControlPoint::new(7.0, 8.0),
        );

        for curve in generate_easing_curves().iter().chain(Some(&unusual)) {
            assert_eq!(curve.evaluate_at(0.0), CurvePoint::START);
            assert_eq!(curve.evaluate_at(1.0), CurvePoint::END);
            assert_eq!(curve.evaluate_at(-0.5), CurvePoint::START);
            assert_eq!(curve.evaluate_at(1.5), CurvePoint::END);
            assert_eq!(curve.evaluate_inverse_at(-0.5), CurvePoint::START);
            assert_eq!(curve.evaluate_inverse_at(1.5), CurvePoint::END);
        }
    }

    #[test]
    fn inverse_round_trip() {
        for curve in &generate_easing_curves() {
            for t in sample_times(50) {
                let point = curve.evaluate_inverse_at(t);
                if (point.relative_time - t).abs() > 1e-6 {
                    println!("curve {:?}", curve);
                    println!("inverse at {}: {:?}", t, point);
                }
                assert!((point.relative_time - t).abs() <= 1e-6);

                let strict = curve.try_evaluate_inverse_at(t, &SolverOptions::DEFAULT);
                assert_eq!(strict, Ok(point));
            }
        }
    }

    #[test]
    fn css_ease_at_half_time() {
        let point = CubicBezierCurve::EASE.evaluate_inverse_at(0.5);
        assert!((point.relative_value - 0.8024).abs() < 0.01);

        let parsed: TimingCurve = "cubic-bezier(0.25, 0.1, 0.25, 1.0)".parse().unwrap();
        assert_eq!(parsed.progress(0.5), point);
        assert_eq!(TimingCurve::SystemDefault.progress(0.5), point);
    }

    #[test]
    fn roots_stay_in_the_unit_interval() {
        let values = [-2.0, -1.0, -0.5, -0.1, 0.0, 0.1, 0.5, 1.0, 2.0];
        let options = [
            SolverOptions::DEFAULT,
            SolverOptions::imaginary_tolerance(1e-9),
            SolverOptions::DEFAULT.with_selection(RootSelection::First),
        ];

        for &a in &values {
            for &b in &values {
                for &c in &values {
                    for &d in &values {
                        let coefficients = CubicCoefficients { a, b, c, d };
                        for options in &options {
                            if let UnitRoot::Found(root) = solve_unit_root(&coefficients, options) {
                                assert!((0.0..=1.0).contains(&root), "{:?} -> {}", coefficients, root);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn failed_inversions_are_reported() {
        let late = CubicBezierCurve::new(
            ControlPoint::new(0.6, 0.0),
            ControlPoint::new(0.7, 0.3),
            ControlPoint::new(0.8, 0.6),
            ControlPoint::new(0.9, 1.0),
        );
        assert_eq!(
            late.try_evaluate_inverse_at(0.5, &SolverOptions::DEFAULT),
            Err(InversionError::NoRootInDomain { time: 0.5 })
        );
        assert_eq!(late.evaluate_inverse_at(0.5), late.evaluate_at(0.0));

        let vertical = CubicBezierCurve::new(
            ControlPoint::new(0.5, 0.0),
            ControlPoint::new(0.5, 0.3),
            ControlPoint::new(0.5, 0.6),
            ControlPoint::new(0.5, 1.0),
        );
        assert_eq!(
            vertical.try_evaluate_inverse_at(0.5, &SolverOptions::DEFAULT),
            Err(InversionError::DegenerateCurve)
        );
        assert_eq!(vertical.evaluate_inverse_at(0.5), vertical.evaluate_at(0.5));

        assert_eq!(
            CubicBezierCurve::EASE.try_evaluate_inverse_at(f64::NAN, &SolverOptions::DEFAULT),
            Err(InversionError::TimeIsNaN)
        );
    }

    #[test]
    fn c_bindings_match_the_rust_api() {
        use cadence::capi::*;

        for curve in &generate_easing_curves() {
            for t in sample_times(10) {
                assert_eq!(cadence_evaluate_at(*curve, t), curve.evaluate_at(t));
                assert_eq!(cadence_evaluate_inverse_at(*curve, t), curve.evaluate_inverse_at(t));

                let mut out = CurvePoint::START;
                let status = unsafe { cadence_try_evaluate_inverse_at(*curve, t, &mut out) };
                assert_eq!(status, CadenceStatus::Ok);
                assert_eq!(out, curve.evaluate_inverse_at(t));
            }
        }
    }

    #[test]
    fn springs_settle() {
        for src in &["spring(1, 10, 100)", "spring(1, 20, 100)", "spring(2, 40, 50, 3)"] {
            let curve: TimingCurve = src.parse().unwrap();
            let frames = curve.progressions(1.0, 60.0);
            assert_eq!(frames.len(), 61);
            assert_eq!(*frames.last().unwrap(), CurvePoint::END);

            let settled = curve.progress(20.0).relative_value;
            assert!((settled - 1.0).abs() < 1e-3, "{} settles at {}", src, settled);
        }

        let spring = SpringTiming::default();
        assert!(spring.progress(0.0).relative_value.abs() < 1e-12);
    }
}
