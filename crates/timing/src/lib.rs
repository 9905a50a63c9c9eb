#![deny(bare_trait_objects)]

//! Timing functions for animations.
//!
//! This crate is reexported in [cadence](https://docs.rs/cadence/).
//!
//! A timing function maps the elapsed fraction of an animation's duration to
//! its progress. Three kinds are provided:
//!
//! - cubic bézier easing curves ([`CubicBezierCurve`]), evaluated at the point
//!   whose x coordinate is the elapsed time,
//! - damped springs ([`SpringTiming`]),
//! - [`TimingCurve`], which wraps either of them and can be parsed from strings
//!   such as `"ease-in-out"` or `"cubic-bezier(0.25, 0.1, 0.25, 1.0)"`.
//!
//! All of them implement [`TimingParameters`], which also samples a timing
//! function once per frame of an animation.
//!
//! ```
//! use cadence_timing::{TimingCurve, TimingParameters};
//!
//! let curve: TimingCurve = "ease".parse().unwrap();
//! let frames = curve.progressions(0.25, 60.0);
//! assert_eq!(frames.len(), 16);
//! ```

pub use cadence_geom as geom;
pub use cadence_geom::{CubicBezierCurve, CurvePoint};

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod error;
mod keyframe;
pub mod parser;
mod spring;
mod timing;
mod timing_curve;

#[doc(inline)]
pub use crate::error::TimingError;
#[doc(inline)]
pub use crate::keyframe::KeyframeTiming;
#[doc(inline)]
pub use crate::parser::{parse_timing_curve, ParseError};
#[doc(inline)]
pub use crate::spring::SpringTiming;
#[doc(inline)]
pub use crate::timing::{TimingParameters, DEFAULT_MAX_FPS};
#[doc(inline)]
pub use crate::timing_curve::TimingCurve;
