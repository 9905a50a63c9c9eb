use crate::commands::{EvaluateCmd, InverseCmd};
use crate::output::write_points;
use anyhow::Context;

pub fn evaluate(mut cmd: EvaluateCmd) -> anyhow::Result<()> {
    let points: Vec<_> = cmd.times.iter().map(|&t| cmd.curve.evaluate_at(t)).collect();

    write_points(&mut *cmd.output, &points, cmd.format)
}

pub fn inverse(mut cmd: InverseCmd) -> anyhow::Result<()> {
    let mut points = Vec::with_capacity(cmd.times.len());
    for &t in &cmd.times {
        let point = if cmd.strict {
            cmd.curve
                .try_evaluate_inverse_at(t, &cmd.options)
                .with_context(|| format!("Cannot invert the curve at time {}", t))?
        } else {
            cmd.curve.evaluate_inverse_at(t)
        };

        log::debug!("inverse at {}: {:?}", t, point);
        points.push(point);
    }

    write_points(&mut *cmd.output, &points, cmd.format)
}
