//! Sprint aggregation
//!
//! Once the export is readable as a table, the sprint is summarized in one pass:
//!
//! 1. [`Schema::resolve`] picks the points and status columns from the header,
//!    failing before any row is read if either is missing
//! 2. every row's points are coerced with [`coerce_points`], so malformed cells count as zero
//! 3. [`is_completed`] classifies the row, and [`SprintTotals`] adds its points to the
//!    total and to exactly one of the completed or not-completed counters
//!
//! [`analyze_path`] and [`analyze_reader`] run the whole pipeline, from opening the
//! export through dialect detection to the final totals.

mod analyze;
mod points;
mod schema;
mod totals;

pub use analyze::{aggregate, analyze_path, analyze_reader};
pub use points::coerce_points;
pub use schema::{Schema, SchemaError};
pub use totals::{SprintTotals, is_completed};
