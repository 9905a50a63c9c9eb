use cadence::geom::{CubicBezierCurve, SolverOptions};
use cadence::timing::TimingCurve;
use std::io;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Format {
    Text,
    Json,
}

pub struct EvaluateCmd {
    pub curve: CubicBezierCurve,
    pub times: Vec<f64>,
    pub format: Format,
    pub output: Box<dyn io::Write>,
}

pub struct InverseCmd {
    pub curve: CubicBezierCurve,
    pub times: Vec<f64>,
    pub options: SolverOptions,
    /// Fail instead of falling back to a default point when no root is found.
    pub strict: bool,
    pub format: Format,
    pub output: Box<dyn io::Write>,
}

pub struct SampleCmd {
    pub curve: TimingCurve,
    pub duration: f64,
    pub max_fps: f64,
    pub format: Format,
    pub output: Box<dyn io::Write>,
}
