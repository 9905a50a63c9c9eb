use thiserror::Error;

/// Invalid parameters of a timing function.
#[non_exhaustive]
#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum TimingError {
    #[error("Spring mass must be positive, got {0}.")]
    NonPositiveMass(f64),
    #[error("Spring damping must be positive, got {0}.")]
    NonPositiveDamping(f64),
    #[error("Spring stiffness must be positive, got {0}.")]
    NonPositiveStiffness(f64),
}
