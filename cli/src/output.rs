use crate::commands::Format;
use cadence::CurvePoint;
use std::io;

pub fn write_points(
    output: &mut dyn io::Write,
    points: &[CurvePoint],
    format: Format,
) -> anyhow::Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *output, points)?;
            writeln!(output)?;
        }
        Format::Text => {
            for (i, point) in points.iter().enumerate() {
                writeln!(output, "[{}]", i)?;
                writeln!(output, "{}", point)?;
            }
        }
    }

    Ok(())
}
