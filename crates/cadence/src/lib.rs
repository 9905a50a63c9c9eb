#![deny(bare_trait_objects)]

//! Cubic bézier easing curves and timing functions for animations.
//!
//! # Crates
//!
//! This meta-crate (`cadence`) reexports the following sub-crates:
//!
//! * **cadence_geom** - Evaluation and inversion of cubic bézier easing curves,
//!   including the cubic equation solver they rely on.
//! * **cadence_timing** - Timing functions built on top of them: springs,
//!   keyframes and a parser for textual timing functions.
//! * **cadence_capi** - C bindings, behind the `capi` feature flag.
//!
//! Each `cadence_<name>` crate is reexported as a `<name>` module in `cadence`.
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! Finding the progress of an animation using the `ease` timing function
//! halfway through its duration:
//!
//! ```
//! use cadence::geom::CubicBezierCurve;
//!
//! let point = CubicBezierCurve::EASE.evaluate_inverse_at(0.5);
//! assert!((point.relative_value - 0.8024).abs() < 0.01);
//! ```
//!
//! Sampling a spring once per frame:
//!
//! ```
//! use cadence::timing::{TimingCurve, TimingParameters};
//!
//! let spring: TimingCurve = "spring(1, 10, 100)".parse().unwrap();
//! let frames = spring.progressions(1.0, 30.0);
//! assert_eq!(frames.len(), 31);
//! ```

pub extern crate cadence_geom;
pub extern crate cadence_timing;

#[cfg(feature = "capi")]
pub extern crate cadence_capi;

pub use cadence_geom as geom;
pub use cadence_timing as timing;

#[cfg(feature = "capi")]
pub use cadence_capi as capi;

pub use cadence_geom::{CubicBezierCurve, CurvePoint};
