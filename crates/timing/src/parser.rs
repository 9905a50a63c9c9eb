//! Parsing timing functions from their textual form.
//!
//! # Syntax
//!
//! A timing function is either one of the named curves `linear`, `ease`,
//! `ease-in`, `ease-out`, `ease-in-out`, `ease-out-expo`, `ease-out-back`,
//! `ease-out-back-drastic` and `default`, or a function call:
//!
//! - `cubic-bezier(x1, y1, x2, y2)` with the two inner control points of an
//!   easing curve. Both x coordinates must lie in `[0, 1]`.
//! - `spring(mass, damping, stiffness, velocity)`, where the velocity may be
//!   omitted.
//!
//! Names are case-insensitive and arguments may be separated by commas or
//! whitespace.

use crate::{CubicBezierCurve, SpringTiming, TimingCurve, TimingError};

use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Unknown timing function {src:?}.")]
    UnknownCurve { src: String },
    #[error("Expected number, got {src:?}.")]
    Number { src: String },
    #[error("Function {function} takes {expected} arguments, got {got}.")]
    ArgumentCount {
        function: &'static str,
        expected: &'static str,
        got: usize,
    },
    #[error("The x coordinate of a cubic-bezier control point must be in [0, 1], got {value}.")]
    OutOfRange { value: f64 },
    #[error("Expected closing parenthesis in {src:?}.")]
    MissingParenthesis { src: String },
    #[error(transparent)]
    Spring(#[from] TimingError),
}

/// Parses a timing function.
///
/// ```
/// use cadence_timing::{parse_timing_curve, CubicBezierCurve, TimingCurve};
///
/// assert_eq!(parse_timing_curve("ease-in"), Ok(TimingCurve::EASE_IN));
/// assert_eq!(
///     parse_timing_curve("cubic-bezier(0.25, 0.1, 0.25, 1)"),
///     Ok(TimingCurve::Cubic(CubicBezierCurve::EASE)),
/// );
/// ```
pub fn parse_timing_curve(src: &str) -> Result<TimingCurve, ParseError> {
    let src = src.trim();

    let (name, arguments) = match src.find('(') {
        Some(open) => {
            let body = &src[open + 1..];
            let body = match body.strip_suffix(')') {
                Some(body) => body,
                None => {
                    return Err(ParseError::MissingParenthesis { src: src.to_string() });
                }
            };
            (src[..open].trim(), Some(body))
        }
        None => (src, None),
    };

    let name = name.to_ascii_lowercase();

    match (name.as_str(), arguments) {
        ("default", None) => Ok(TimingCurve::SystemDefault),
        ("linear", None) => Ok(TimingCurve::Cubic(CubicBezierCurve::LINEAR)),
        ("ease", None) => Ok(TimingCurve::Cubic(CubicBezierCurve::EASE)),
        ("ease-in", None) => Ok(TimingCurve::Cubic(CubicBezierCurve::EASE_IN)),
        ("ease-out", None) => Ok(TimingCurve::Cubic(CubicBezierCurve::EASE_OUT)),
        ("ease-in-out", None) => Ok(TimingCurve::Cubic(CubicBezierCurve::EASE_IN_OUT)),
        ("ease-out-expo", None) => Ok(TimingCurve::Cubic(CubicBezierCurve::EASE_OUT_EXPO)),
        ("ease-out-back", None) => Ok(TimingCurve::Cubic(CubicBezierCurve::EASE_OUT_BACK)),
        ("ease-out-back-drastic", None) => {
            Ok(TimingCurve::Cubic(CubicBezierCurve::EASE_OUT_BACK_DRASTIC))
        }
        ("cubic-bezier", Some(arguments)) => parse_cubic_bezier(arguments),
        ("spring", Some(arguments)) => parse_spring(arguments),
        _ => Err(ParseError::UnknownCurve { src: src.to_string() }),
    }
}

fn parse_cubic_bezier(arguments: &str) -> Result<TimingCurve, ParseError> {
    let numbers = parse_numbers(arguments)?;
    if numbers.len() != 4 {
        return Err(ParseError::ArgumentCount {
            function: "cubic-bezier",
            expected: "4",
            got: numbers.len(),
        });
    }

    for &x in &[numbers[0], numbers[2]] {
        if !(0.0..=1.0).contains(&x) {
            return Err(ParseError::OutOfRange { value: x });
        }
    }

    Ok(TimingCurve::Cubic(CubicBezierCurve::easing(
        (numbers[0], numbers[1]).into(),
        (numbers[2], numbers[3]).into(),
    )))
}

fn parse_spring(arguments: &str) -> Result<TimingCurve, ParseError> {
    let numbers = parse_numbers(arguments)?;
    let velocity = match numbers.len() {
        3 => 0.0,
        4 => numbers[3],
        got => {
            return Err(ParseError::ArgumentCount {
                function: "spring",
                expected: "3 or 4",
                got,
            });
        }
    };

    let spring = SpringTiming::new(numbers[0], numbers[1], numbers[2], velocity)?;

    Ok(TimingCurve::Spring(spring))
}

fn parse_numbers(arguments: &str) -> Result<Vec<f64>, ParseError> {
    arguments
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|_| ParseError::Number {
                src: token.to_string(),
            })
        })
        .collect()
}

#[test]
fn named_curves() {
    assert_eq!(parse_timing_curve("linear"), Ok(TimingCurve::LINEAR));
    assert_eq!(parse_timing_curve("  Ease-Out "), Ok(TimingCurve::EASE_OUT));
    assert_eq!(parse_timing_curve("default"), Ok(TimingCurve::SystemDefault));
    assert_eq!(
        parse_timing_curve("ease-out-back-drastic"),
        Ok(TimingCurve::Cubic(CubicBezierCurve::EASE_OUT_BACK_DRASTIC))
    );
    assert_eq!(
        parse_timing_curve("bounce"),
        Err(ParseError::UnknownCurve { src: "bounce".to_string() })
    );
    // Named curves take no arguments.
    assert!(parse_timing_curve("ease()").is_err());
}

#[test]
fn cubic_bezier_function() {
    assert_eq!(
        parse_timing_curve("cubic-bezier(0.42 0 0.58 1)"),
        Ok(TimingCurve::EASE_IN_OUT)
    );
    assert_eq!(
        parse_timing_curve("cubic-bezier(0.5, 0.5, 0.5)"),
        Err(ParseError::ArgumentCount {
            function: "cubic-bezier",
            expected: "4",
            got: 3
        })
    );
    assert_eq!(
        parse_timing_curve("cubic-bezier(0.5, 0.5, 1.5, 0.5)"),
        Err(ParseError::OutOfRange { value: 1.5 })
    );
    assert_eq!(
        parse_timing_curve("cubic-bezier(0.5, x, 1, 0.5)"),
        Err(ParseError::Number { src: "x".to_string() })
    );
    assert_eq!(
        parse_timing_curve("cubic-bezier(0.5, 0, 1, 0.5"),
        Err(ParseError::MissingParenthesis {
            src: "cubic-bezier(0.5, 0, 1, 0.5".to_string()
        })
    );
}

#[test]
fn spring_function() {
    assert_eq!(
        parse_timing_curve("spring(1, 10, 100)"),
        Ok(TimingCurve::Spring(SpringTiming::DEFAULT))
    );

    let spring = SpringTiming::new(2.0, 5.0, 80.0, -1.0).unwrap();
    assert_eq!(
        parse_timing_curve("spring(2, 5, 80, -1)"),
        Ok(TimingCurve::Spring(spring))
    );
    assert_eq!(
        parse_timing_curve("spring(0, 10, 100)"),
        Err(ParseError::Spring(TimingError::NonPositiveMass(0.0)))
    );
}
