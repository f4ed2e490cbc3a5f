//! Reading sprint exports
//!
//! An export goes through three steps before any row is interpreted:
//!
//! - [`SprintSource`] opens the file and steps over a UTF-8 byte-order mark
//! - [`detect`] samples the start of the content to guess the delimiter
//! - [`Table`] parses the content as a header-driven CSV table
//!
//! Every step leaves the stream positioned at the start of the content, so the
//! table always sees the file from its first line.

mod dialect;
mod source;
mod table;

pub use dialect::{Dialect, SAMPLE_SIZE, detect, sniff};
pub use source::SprintSource;
pub use table::Table;
