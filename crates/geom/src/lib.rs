#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Cubic bézier easing curves.
//!
//! This crate is reexported in [cadence](https://docs.rs/cadence/).
//!
//! # Overview.
//!
//! An easing curve maps elapsed time to animation progress. It is described by
//! four control points `c0..c3`, conventionally starting at `(0, 0)` and ending
//! at `(1, 1)`:
//!
//! ```text
//! ∀ t ∈ [0..1],  P(t) = (1 - t)³ * c0 + 3 * (1 - t)² * t * c1 + 3 * t² * (1 - t) * c2 + t³ * c3
//! ```
//!
//! Two operations are provided:
//!
//! - [`evaluate_at`](evaluate::evaluate_at) samples the curve at its parameter `t`,
//! - [`evaluate_inverse_at`](inverse::evaluate_inverse_at) finds the point of the
//!   curve whose x coordinate (the time) is `t` and returns it. The y coordinate of
//!   that point is the eased progress.
//!
//! The inversion is computed in closed form: the curve is moved so that the requested
//! time lies on the origin, rotated by a quarter turn, and the resulting cubic
//! polynomial is solved with Cardano's method (see the [`solver`] module).
//!
//! ```
//! use cadence_geom::CubicBezierCurve;
//!
//! let progress = CubicBezierCurve::EASE.evaluate_inverse_at(0.5);
//! assert!((progress.relative_value - 0.8024).abs() < 0.01);
//! ```
//!
//! # Parameters outside of the unit interval
//!
//! Both operations clamp `t` to `[0, 1]` and, when clamping happens, return
//! `(t, t)` rather than the curve's end points. For easing curves, which start at
//! `(0, 0)` and end at `(1, 1)`, the two are the same.

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod coefficients;
pub mod complex;
mod curve;
mod error;
pub mod evaluate;
pub mod inverse;
mod point;
pub mod solver;

#[doc(inline)]
pub use crate::coefficients::{Axis, CubicCoefficients};
#[doc(inline)]
pub use crate::complex::Complex;
#[doc(inline)]
pub use crate::curve::CubicBezierCurve;
#[doc(inline)]
pub use crate::error::InversionError;
#[doc(inline)]
pub use crate::point::{ControlPoint, CurvePoint};
#[doc(inline)]
pub use crate::solver::{RootSelection, SolverOptions, UnitRoot};

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Box2D`
pub use euclid::default::Box2D;

/// Alias for `euclid::default::Transform2D`
pub type Transform = euclid::default::Transform2D<f64>;

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point(x: f64, y: f64) -> Point<f64> {
    Point::new(x, y)
}

pub mod traits {
    use crate::{Point, Transform};

    pub trait Transformation {
        fn transform_point(&self, p: Point<f64>) -> Point<f64>;
    }

    impl Transformation for Transform {
        fn transform_point(&self, p: Point<f64>) -> Point<f64> {
            self.transform_point(p)
        }
    }

    impl<'l, T: Transformation> Transformation for &'l T {
        #[inline]
        fn transform_point(&self, p: Point<f64>) -> Point<f64> {
            (*self).transform_point(p)
        }
    }
}
