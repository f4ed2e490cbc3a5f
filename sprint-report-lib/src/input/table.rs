use super::Dialect;
use crate::Result;
use crate::sprint::SchemaError;
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use ohno::IntoAppError;
use std::io::Read;

/// A header-driven table over a sprint export
///
/// The first line names the columns. Rows may be shorter or longer than the header;
/// missing cells simply read as absent. When the dialect pads its delimiters with a
/// space, header names are read without that leading space. Cells keep it, since
/// every cell is trimmed when it is interpreted.
#[derive(Debug)]
pub struct Table<R> {
    reader: Reader<R>,
    headers: StringRecord,
}

impl<R: Read> Table<R> {
    /// Start reading a table from the beginning of `input`.
    ///
    /// `blank_first_line` reports that the first line of the content is empty, in
    /// which case the table has no header even though later lines hold data.
    ///
    /// # Errors
    ///
    /// Fails with [`SchemaError::EmptyHeader`] when there is no header row. A header
    /// row that is not valid UTF-8 or not valid CSV fails with a read error.
    pub fn new(input: R, dialect: Dialect, blank_first_line: bool) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::None)
            .delimiter(dialect.delimiter)
            .quote(dialect.quote)
            .from_reader(input);

        let headers = if blank_first_line {
            StringRecord::new()
        } else {
            let headers = reader.headers().into_app_err("unable to read the header row")?;
            if dialect.skip_initial_space {
                headers.iter().map(str::trim_start).collect()
            } else {
                headers.clone()
            }
        };

        if headers.is_empty() {
            return Err(SchemaError::EmptyHeader.into());
        }

        Ok(Self { reader, headers })
    }

    #[must_use]
    pub const fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Read the next row into `record`, returning `false` once the table is exhausted.
    pub fn read_row(&mut self, record: &mut StringRecord) -> Result<bool> {
        Ok(self.reader.read_record(record)?)
    }
}
