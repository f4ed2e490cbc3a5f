const LOG_TARGET: &str = "    sprint";

/// Coerce a raw story points cell into a whole number of points.
///
/// The cell is read as a decimal number and truncated toward zero, so `"3.9"` counts
/// as 3. Anything that is not a finite, non-negative number (a missing or empty cell,
/// text, `NaN`, negative estimates) counts as zero.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Truncation toward zero is the intent; the value is non-negative and the cast saturates"
)]
pub fn coerce_points(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return 0;
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value as u64,
        _ => {
            if !raw.trim().is_empty() {
                log::trace!(target: LOG_TARGET, "Counting story points value {raw:?} as zero");
            }
            0
        }
    }
}
