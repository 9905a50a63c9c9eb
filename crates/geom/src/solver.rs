//! Closed form resolution of cubic polynomials restricted to `[0, 1]`.
//!
//! The polynomial `a t³ + b t² + c t + d` is divided by `a` and depressed with the
//! substitution `t = y - b / 3a`, which gives `y³ + 3p y + 2q = 0` with
//!
//! ```text
//! p = (3b' - a'²) / 9
//! q = (2a'³ - 9a'b' + 27c') / 54
//! Δ = p³ + q²
//! ```
//!
//! The sign of the discriminant `Δ` tells which form of Cardano's formula applies:
//!
//! - `Δ > 0`: one real root and two complex conjugate ones,
//! - `Δ = 0`: three real roots, two of them equal,
//! - `Δ < 0`: three distinct real roots, computed with the trigonometric form.
//!
//! `p = 0` and `q = 0` are handled separately since the general formulas divide by
//! them or lose the multiplicity of the roots.
//!
//! Each of the three candidates is generated with one of the cube roots of unity.
//! A candidate is accepted if it is real and lies in `[0, 1]`. By default the last
//! accepted candidate is returned (see [`RootSelection`]).

use crate::{Axis, Complex, CubicBezierCurve, CubicCoefficients};

use arrayvec::ArrayVec;
use core::f64::consts::PI;
#[cfg(not(feature = "std"))]
use num_traits::Float;

/// Which root to return when several candidates are accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum RootSelection {
    /// The last accepted candidate in the order they are generated.
    Last,
    /// The first accepted candidate in the order they are generated.
    First,
}

/// Parameters of the root solver.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SolverOptions {
    /// Largest magnitude of the imaginary part of a candidate considered real.
    ///
    /// Candidates produced by the real branches of the solver have an imaginary
    /// part of exactly zero. Raising the tolerance lets complex candidates with a
    /// small imaginary part through, which changes the selected root close to
    /// `Δ = 0`.
    ///
    /// Default value: `SolverOptions::DEFAULT_IMAGINARY_TOLERANCE`.
    pub imaginary_tolerance: f64,

    /// The cubic term is ignored when `|a|` is smaller than this value times the
    /// magnitude of the largest lower degree coefficient. The same rule then applies
    /// to the quadratic and linear terms.
    ///
    /// Default value: `SolverOptions::DEFAULT_LEADING_COEFFICIENT_TOLERANCE`.
    pub leading_coefficient_tolerance: f64,

    /// Default value: `RootSelection::Last`.
    pub selection: RootSelection,
}

impl SolverOptions {
    pub const DEFAULT_IMAGINARY_TOLERANCE: f64 = 0.0;
    pub const DEFAULT_LEADING_COEFFICIENT_TOLERANCE: f64 = 1e-12;
    pub const DEFAULT_SELECTION: RootSelection = RootSelection::Last;

    pub const DEFAULT: Self = SolverOptions {
        imaginary_tolerance: Self::DEFAULT_IMAGINARY_TOLERANCE,
        leading_coefficient_tolerance: Self::DEFAULT_LEADING_COEFFICIENT_TOLERANCE,
        selection: Self::DEFAULT_SELECTION,
    };

    #[inline]
    pub fn imaginary_tolerance(tolerance: f64) -> Self {
        Self::DEFAULT.with_imaginary_tolerance(tolerance)
    }

    #[inline]
    pub fn with_imaginary_tolerance(mut self, tolerance: f64) -> Self {
        self.imaginary_tolerance = tolerance;
        self
    }

    #[inline]
    pub fn with_leading_coefficient_tolerance(mut self, tolerance: f64) -> Self {
        self.leading_coefficient_tolerance = tolerance;
        self
    }

    #[inline]
    pub fn with_selection(mut self, selection: RootSelection) -> Self {
        self.selection = selection;
        self
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Outcome of a search for a root in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum UnitRoot {
    Found(f64),
    /// No real root lies in `[0, 1]`.
    NotFound,
    /// The polynomial is identically zero: every value is a root.
    Degenerate,
}

impl UnitRoot {
    #[inline]
    pub fn root(self) -> Option<f64> {
        match self {
            UnitRoot::Found(t) => Some(t),
            UnitRoot::NotFound | UnitRoot::Degenerate => None,
        }
    }
}

/// Solves the polynomial of the curve's y axis in `[0, 1]`.
pub fn curve_root(curve: &CubicBezierCurve, options: &SolverOptions) -> UnitRoot {
    solve_unit_root(&CubicCoefficients::from_curve(curve, Axis::Y), options)
}

/// Finds a root of `a t³ + b t² + c t + d` in `[0, 1]`.
pub fn solve_unit_root(coefficients: &CubicCoefficients, options: &SolverOptions) -> UnitRoot {
    let tolerance = options.leading_coefficient_tolerance;
    let candidates = if coefficients.a.abs() > tolerance * coefficients.lower_degree_magnitude() {
        cardano_candidates(coefficients)
    } else {
        log::trace!("negligible cubic term in {:?}", coefficients);
        match lower_degree_candidates(coefficients, tolerance) {
            Some(candidates) => candidates,
            None => return UnitRoot::Degenerate,
        }
    };

    let result = select_root(&candidates, options);
    if result == UnitRoot::NotFound {
        log::trace!("no root in [0, 1] among {:?}", candidates);
    }

    result
}

/// The three candidate roots produced by Cardano's formula, in generation order.
///
/// Expects a non-zero cubic coefficient.
pub fn cardano_candidates(coefficients: &CubicCoefficients) -> ArrayVec<Complex, 3> {
    let CubicCoefficients { a, b, c, d } = *coefficients;

    let a1 = b / a;
    let b1 = c / a;
    let c1 = d / a;

    let simple_root = -a1 / 3.0;

    let p = (3.0 * b1 - a1 * a1) / 9.0;
    let q = (2.0 * a1 * a1 * a1 - 9.0 * a1 * b1 + 27.0 * c1) / 54.0;
    let discriminant = p.powi(3) + q.powi(2);

    let mut candidates = ArrayVec::new();
    for i in 0..3u32 {
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };

        let candidate = if 3.0 * p == 0.0 || 2.0 * q == 0.0 {
            if p == 0.0 {
                // y³ = -2q
                Complex::real((-2.0 * q).cbrt()) * Complex::cube_root_of_unity(i)
            } else if i == 0 {
                // y (y² + 3p) = 0
                Complex::real(0.0)
            } else {
                // Not a number when p > 0, rejected as a root.
                Complex::real(sign * (-3.0 * p).sqrt())
            }
        } else if discriminant == 0.0 {
            let power = if i == 0 { 1 } else { 2 };
            let sign = if power % 2 == 0 { 1.0 } else { -1.0 };
            Complex::real(2f64.powi(2 - power) * (q * sign).cbrt())
        } else if discriminant > 0.0 {
            let sqrt_discriminant = discriminant.sqrt();
            let w = Complex::cube_root_of_unity(i);
            let u = Complex::real((sqrt_discriminant - q).cbrt()) * w;
            let v = Complex::real((sqrt_discriminant + q).cbrt()) * w.conj();
            u - v
        } else {
            let r = p.abs().powi(3).sqrt();
            // |q| <= r up to rounding.
            let phi = (-q / r).max(-1.0).min(1.0).acos() + 2.0 * i as f64 * PI;
            Complex::real(2.0 * r.cbrt() * (phi / 3.0).cos())
        };

        candidates.push(candidate + simple_root);
    }

    candidates
}

// Returns None when the polynomial is identically zero.
fn lower_degree_candidates(
    coefficients: &CubicCoefficients,
    tolerance: f64,
) -> Option<ArrayVec<Complex, 3>> {
    let CubicCoefficients { b, c, d, .. } = *coefficients;
    let mut candidates = ArrayVec::new();

    if b.abs() > tolerance * c.abs().max(d.abs()) {
        let discriminant = c * c - 4.0 * b * d;
        if discriminant >= 0.0 {
            let sqrt_discriminant = discriminant.sqrt();
            candidates.push(Complex::real((-c - sqrt_discriminant) / (2.0 * b)));
            candidates.push(Complex::real((-c + sqrt_discriminant) / (2.0 * b)));
        }
    } else if c.abs() > tolerance * d.abs() {
        candidates.push(Complex::real(-d / c));
    } else if d == 0.0 {
        return None;
    }

    Some(candidates)
}

fn select_root(candidates: &[Complex], options: &SolverOptions) -> UnitRoot {
    let mut root = UnitRoot::NotFound;
    for candidate in candidates {
        if candidate.is_real(options.imaginary_tolerance) && is_uniform(candidate.re) {
            root = UnitRoot::Found(candidate.re);
            if options.selection == RootSelection::First {
                break;
            }
        }
    }

    root
}

#[inline]
fn is_uniform(value: f64) -> bool {
    0.0 <= value && value <= 1.0
}

#[cfg(test)]
fn coefficients(a: f64, b: f64, c: f64, d: f64) -> CubicCoefficients {
    CubicCoefficients { a, b, c, d }
}

#[cfg(test)]
fn assert_root(result: UnitRoot, expected: f64, epsilon: f64) {
    match result {
        UnitRoot::Found(t) => {
            if (t - expected).abs() > epsilon {
                std::println!("{:?} != {:?}", t, expected);
            }
            assert!((t - expected).abs() <= epsilon);
        }
        _ => panic!("expected a root at {:?}, got {:?}", expected, result),
    }
}

#[test]
fn one_real_root() {
    // (t - 0.25)(t² + 1)
    let poly = coefficients(1.0, -0.25, 1.0, -0.25);
    assert_root(solve_unit_root(&poly, &SolverOptions::DEFAULT), 0.25, 1e-12);

    let candidates = cardano_candidates(&poly);
    assert!(candidates[0].is_real(0.0));
    assert!(!candidates[1].is_real(1e-6));
    assert!(!candidates[2].is_real(1e-6));
}

#[test]
fn three_distinct_real_roots() {
    // (t - 0.25)(t - 2)(t + 1)
    let poly = coefficients(1.0, -1.25, -1.75, 0.5);
    assert_root(solve_unit_root(&poly, &SolverOptions::DEFAULT), 0.25, 1e-9);

    let mut roots: ArrayVec<f64, 3> = cardano_candidates(&poly).iter().map(|c| c.re).collect();
    roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert!((roots[0] + 1.0).abs() < 1e-9);
    assert!((roots[1] - 0.25).abs() < 1e-9);
    assert!((roots[2] - 2.0).abs() < 1e-9);
}

#[test]
fn double_root() {
    // (t - 1)²(t + 2)
    let poly = coefficients(1.0, 0.0, -3.0, 2.0);
    let candidates = cardano_candidates(&poly);
    assert_eq!(candidates[0], Complex::real(-2.0));
    assert_eq!(candidates[1], Complex::real(1.0));
    assert_eq!(candidates[2], Complex::real(1.0));

    assert_eq!(solve_unit_root(&poly, &SolverOptions::DEFAULT), UnitRoot::Found(1.0));
}

#[test]
fn depressed_cubic_without_linear_term() {
    // t³ - 0.125, p = 0
    let poly = coefficients(1.0, 0.0, 0.0, -0.125);
    assert_root(solve_unit_root(&poly, &SolverOptions::DEFAULT), 0.5, 1e-12);
}

#[test]
fn selection_policy() {
    // t (t - 0.5)(t + 0.5), q = 0: the candidates are 0, -0.5 and 0.5 in this order.
    let poly = coefficients(1.0, 0.0, -0.25, 0.0);

    assert_root(solve_unit_root(&poly, &SolverOptions::DEFAULT), 0.5, 1e-12);

    let first = SolverOptions::DEFAULT.with_selection(RootSelection::First);
    assert_eq!(solve_unit_root(&poly, &first), UnitRoot::Found(0.0));
}

#[test]
fn single_real_root_without_constant_term() {
    // (t - 0.5)((t - 0.5)² + 1), depressed: y (y² + 1) = 0 with p > 0 and q = 0.
    let poly = coefficients(1.0, -1.5, 1.75, -0.625);

    let candidates = cardano_candidates(&poly);
    assert_eq!(candidates[0], Complex::real(0.5));
    assert!(candidates[1].re.is_nan());
    assert!(candidates[2].re.is_nan());

    assert_eq!(solve_unit_root(&poly, &SolverOptions::DEFAULT), UnitRoot::Found(0.5));
    let first = SolverOptions::DEFAULT.with_selection(RootSelection::First);
    assert_eq!(solve_unit_root(&poly, &first), UnitRoot::Found(0.5));
}

#[test]
fn lower_degree_fallback() {
    // t² - 0.25
    assert_root(
        solve_unit_root(&coefficients(0.0, 1.0, 0.0, -0.25), &SolverOptions::DEFAULT),
        0.5,
        1e-12,
    );

    // 2t - 1
    assert_root(
        solve_unit_root(&coefficients(0.0, 0.0, 2.0, -1.0), &SolverOptions::DEFAULT),
        0.5,
        1e-12,
    );

    // A cubic term lost in rounding errors is ignored as well.
    assert_root(
        solve_unit_root(&coefficients(1e-17, 0.0, 2.0, -1.0), &SolverOptions::DEFAULT),
        0.5,
        1e-12,
    );

    // t² + 1
    assert_eq!(
        solve_unit_root(&coefficients(0.0, 1.0, 0.0, 1.0), &SolverOptions::DEFAULT),
        UnitRoot::NotFound
    );
}

#[test]
fn degenerate_polynomials() {
    assert_eq!(
        solve_unit_root(&coefficients(0.0, 0.0, 0.0, 0.0), &SolverOptions::DEFAULT),
        UnitRoot::Degenerate
    );
    assert_eq!(
        solve_unit_root(&coefficients(0.0, 0.0, 0.0, 3.0), &SolverOptions::DEFAULT),
        UnitRoot::NotFound
    );
    assert_eq!(UnitRoot::Degenerate.root(), None);
}

#[test]
fn no_root_in_unit_interval() {
    // (t - 2)(t - 3)(t - 4)
    let poly = coefficients(1.0, -9.0, 26.0, -24.0);
    assert_eq!(solve_unit_root(&poly, &SolverOptions::DEFAULT), UnitRoot::NotFound);
    assert_eq!(UnitRoot::NotFound.root(), None);
}

#[test]
fn root_of_curve() {
    // y(t) = 2t - 1 along the y axis.
    let curve = CubicBezierCurve::new(
        (0.0, -1.0).into(),
        (0.0, -1.0 / 3.0).into(),
        (0.0, 1.0 / 3.0).into(),
        (0.0, 1.0).into(),
    );

    assert_root(curve_root(&curve, &SolverOptions::DEFAULT), 0.5, 1e-9);
}
