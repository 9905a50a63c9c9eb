use crate::{CurvePoint, TimingError, TimingParameters};

/// A damped harmonic oscillator going from 0 to 1.
///
/// The progress at time `t` is the position of a unit mass pulled towards 1 by a
/// spring, starting at 0 with the given initial velocity. Depending on the
/// damping ratio the motion is underdamped (it oscillates around 1), critically
/// damped, or overdamped.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SpringTiming {
    mass: f64,
    damping: f64,
    stiffness: f64,
    velocity: f64,
}

impl SpringTiming {
    pub const DEFAULT: Self = SpringTiming {
        mass: 1.0,
        damping: 10.0,
        stiffness: 100.0,
        velocity: 0.0,
    };

    pub fn new(mass: f64, damping: f64, stiffness: f64, velocity: f64) -> Result<Self, TimingError> {
        if !(mass > 0.0) {
            return Err(TimingError::NonPositiveMass(mass));
        }
        if !(damping > 0.0) {
            return Err(TimingError::NonPositiveDamping(damping));
        }
        if !(stiffness > 0.0) {
            return Err(TimingError::NonPositiveStiffness(stiffness));
        }

        Ok(SpringTiming { mass, damping, stiffness, velocity })
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    #[inline]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}

impl Default for SpringTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TimingParameters for SpringTiming {
    fn progress(&self, time: f64) -> CurvePoint {
        let beta = self.damping / (2.0 * self.mass);
        let omega0 = (self.stiffness / self.mass).sqrt();
        let omega1 = (omega0 * omega0 - beta * beta).max(0.0).sqrt();
        let omega2 = (beta * beta - omega0 * omega0).max(0.0).sqrt();

        // Initial offset from the resting position.
        let x0 = -1.0;
        let envelope = (-beta * time).exp();

        let value = if beta < omega0 {
            let oscillation = x0 * (omega1 * time).cos()
                + ((beta * x0 + self.velocity) / omega1) * (omega1 * time).sin();
            -x0 + envelope * oscillation
        } else if beta == omega0 {
            -x0 + envelope * (x0 + (beta * x0 + self.velocity) * time)
        } else {
            let decay = x0 * (omega2 * time).cosh()
                + ((beta * x0 + self.velocity) / omega2) * (omega2 * time).sinh();
            -x0 + envelope * decay
        };

        CurvePoint::new(time, value)
    }
}

#[test]
fn spring_starts_at_rest_and_settles() {
    let springs = [
        // Underdamped.
        SpringTiming::DEFAULT,
        // Critically damped.
        SpringTiming::new(1.0, 20.0, 100.0, 0.0).unwrap(),
        // Overdamped.
        SpringTiming::new(1.0, 40.0, 100.0, 0.0).unwrap(),
    ];

    for spring in &springs {
        let start = spring.progress(0.0);
        assert!(start.relative_value.abs() < 1e-12);

        let end = spring.progress(10.0);
        assert_eq!(end.relative_time, 10.0);
        assert!((end.relative_value - 1.0).abs() < 1e-3);
    }
}

#[test]
fn underdamped_spring_overshoots() {
    let spring = SpringTiming::DEFAULT;
    let overshoot = (1..100)
        .map(|i| spring.progress(i as f64 / 100.0).relative_value)
        .any(|value| value > 1.0);
    assert!(overshoot);

    let overdamped = SpringTiming::new(1.0, 40.0, 100.0, 0.0).unwrap();
    let overshoot = (1..100)
        .map(|i| overdamped.progress(i as f64 / 100.0).relative_value)
        .any(|value| value > 1.0);
    assert!(!overshoot);
}

#[test]
fn invalid_springs() {
    assert_eq!(SpringTiming::new(0.0, 10.0, 100.0, 0.0), Err(TimingError::NonPositiveMass(0.0)));
    assert_eq!(SpringTiming::new(1.0, -1.0, 100.0, 0.0), Err(TimingError::NonPositiveDamping(-1.0)));
    assert_eq!(SpringTiming::new(1.0, 10.0, 0.0, 0.0), Err(TimingError::NonPositiveStiffness(0.0)));
    assert!(SpringTiming::new(f64::NAN, 10.0, 100.0, 0.0).is_err());
}
