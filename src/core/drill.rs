use crate::core::formatter::{can_use_format, format_time_to_speak};
use crate::domain::model::{ClockTime, DrillRow, FormatMode};
use crate::utils::error::Result;
use std::io::Write;

/// Every minute of `hour`, phrased in all three formats.
pub fn build_drill_rows(hour: u32) -> Vec<DrillRow> {
    (0..60)
        .map(|minute| DrillRow {
            time: ClockTime { hour, minute }.to_string(),
            normal: format_time_to_speak(hour, minute, &FormatMode::Normal),
            past: format_time_to_speak(hour, minute, &FormatMode::Past),
            to: format_time_to_speak(hour, minute, &FormatMode::To),
            past_allowed: can_use_format(&FormatMode::Past, minute),
            to_allowed: can_use_format(&FormatMode::To, minute),
        })
        .collect()
}

/// Writes rows with a header line. Use `b','` for CSV and `b'\t'` for TSV.
pub fn write_drill_table<W: Write>(rows: &[DrillRow], writer: W, delimiter: u8) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    tracing::debug!("wrote {} drill rows", rows.len());
    Ok(())
}
