use crate::commands::SampleCmd;
use crate::output::write_points;
use cadence::timing::TimingParameters;

pub fn sample(mut cmd: SampleCmd) -> anyhow::Result<()> {
    let points = cmd.curve.progressions(cmd.duration, cmd.max_fps);
    log::debug!("{} frames for a duration of {}s", points.len(), cmd.duration);

    write_points(&mut *cmd.output, &points, cmd.format)
}
