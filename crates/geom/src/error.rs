use thiserror::Error;

/// The reasons why a point of a curve could not be found for a given time.
#[non_exhaustive]
#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum InversionError {
    #[error("Time is not a number.")]
    TimeIsNaN,
    #[error("No point of the curve has x = {time}.")]
    NoRootInDomain { time: f64 },
    #[error("The curve is degenerate: every parameter maps to the requested time.")]
    DegenerateCurve,
}
