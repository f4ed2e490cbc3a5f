/// Story point counters for one sprint
///
/// Every recorded row adds its points to `total` and to exactly one of `completed`
/// and `not_completed`, so `total == completed + not_completed` after each row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SprintTotals {
    pub total: u64,
    pub completed: u64,
    pub not_completed: u64,
    pub rows: u64,
}

impl SprintTotals {
    /// Add one row's points to the counters.
    pub const fn record(&mut self, points: u64, completed: bool) {
        self.rows = self.rows.saturating_add(1);
        self.total = self.total.saturating_add(points);

        if completed {
            self.completed = self.completed.saturating_add(points);
        } else {
            self.not_completed = self.not_completed.saturating_add(points);
        }
    }

    /// Story points completed in the sprint.
    #[must_use]
    pub const fn velocity(&self) -> u64 {
        self.completed
    }
}

/// Whether a status counts as completed.
///
/// Only `done` does, ignoring case and surrounding whitespace. Every other status,
/// including a missing or empty one, counts as not completed.
#[must_use]
pub fn is_completed(status: Option<&str>) -> bool {
    status.is_some_and(|status| status.trim().to_lowercase() == "done")
}
