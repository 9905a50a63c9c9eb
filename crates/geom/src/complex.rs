//! Just enough complex arithmetic for Cardano's formula.

use core::ops::{Add, Mul, Sub};

#[cfg(not(feature = "std"))]
use num_traits::Float;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ONE: Self = Complex { re: 1.0, im: 0.0 };

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    #[inline]
    pub const fn real(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }

    #[inline]
    pub fn conj(self) -> Self {
        Complex::new(self.re, -self.im)
    }

    /// The `i`-th cube root of unity.
    ///
    /// `ω(0) = 1`, `ω(1) = (-1 - i√3) / 2` and `ω(2) = (-1 + i√3) / 2`.
    pub fn cube_root_of_unity(i: u32) -> Self {
        if i == 0 {
            return Complex::ONE;
        }

        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        Complex::new(-0.5, sign * 3.0f64.sqrt() / 2.0)
    }

    /// Whether the imaginary part is within `tolerance` of zero.
    #[inline]
    pub fn is_real(&self, tolerance: f64) -> bool {
        self.im.abs() <= tolerance
    }
}

impl Add<f64> for Complex {
    type Output = Self;
    #[inline]
    fn add(self, other: f64) -> Self {
        Complex::new(self.re + other, self.im)
    }
}

impl Sub for Complex {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Complex::new(self.re - other.re, self.im - other.im)
    }
}

impl Mul for Complex {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

#[test]
fn roots_of_unity_cube_to_one() {
    for i in 0..3 {
        let w = Complex::cube_root_of_unity(i);
        let cube = w * w * w;
        assert!((cube.re - 1.0).abs() < 1e-12);
        assert!(cube.im.abs() < 1e-12);
    }

    assert_eq!(Complex::cube_root_of_unity(2), Complex::cube_root_of_unity(1).conj());
}

#[test]
fn real_values_stay_real() {
    let a = Complex::real(2.0) * Complex::ONE;
    let b = Complex::real(3.0) * Complex::ONE.conj();

    assert!((a - b).is_real(0.0));
    assert_eq!((a - b).re, -1.0);
    assert!(!Complex::cube_root_of_unity(1).is_real(1e-9));
}
