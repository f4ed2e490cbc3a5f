//! Report generation for sprint summaries
//!
//! The console report is a fixed six-line summary: a title, a separator, the
//! total, completed and not-completed story points, and the sprint velocity.
//! Velocity here is the completed points of the one sprint analyzed, not an
//! average over several sprints.

mod console;

pub use console::generate as generate_console;
