use crate::Result;
use crate::sprint::SprintTotals;
use core::fmt::Write;

const TITLE: &str = "SPRINT REPORT SUMMARY";

pub fn generate<W: Write>(totals: &SprintTotals, writer: &mut W) -> Result<()> {
    writeln!(writer, "{TITLE}")?;
    writeln!(writer, "{}", "-".repeat(TITLE.len()))?;
    writeln!(writer, "Total Story Points: {}", totals.total)?;
    writeln!(writer, "Completed Points: {}", totals.completed)?;
    writeln!(writer, "Not Completed Points: {}", totals.not_completed)?;
    writeln!(writer, "Velocity: {}", totals.velocity())?;

    Ok(())
}
