use super::{Schema, SprintTotals, coerce_points, is_completed};
use crate::Result;
use crate::config::Config;
use crate::input::{Dialect, SprintSource, Table, detect};
use camino::Utf8Path;
use csv::StringRecord;
use ohno::IntoAppError;
use std::io::{Read, Seek};

const LOG_TARGET: &str = "    sprint";

/// Summarize the sprint export at `path`.
pub fn analyze_path(path: &Utf8Path, config: &Config) -> Result<SprintTotals> {
    let source = SprintSource::open(path)?;
    analyze_source(source, config)
}

/// Summarize a sprint export held in any seekable stream, starting at its current position.
pub fn analyze_reader<R: Read + Seek>(reader: R, config: &Config) -> Result<SprintTotals> {
    let source = SprintSource::new(reader).into_app_err("unable to read sprint data")?;
    analyze_source(source, config)
}

fn analyze_source<R: Read + Seek>(mut source: SprintSource<R>, config: &Config) -> Result<SprintTotals> {
    let dialect = if config.detect_delimiter {
        detect(source.get_mut(), &config.delimiter_bytes())?
    } else {
        Dialect::EXCEL
    };

    let blank_first_line = source.has_blank_first_line()?;
    let mut table = Table::new(source.into_inner(), dialect, blank_first_line)?;
    let schema = Schema::resolve(table.headers(), &config.points_columns, &config.status_column)?;

    aggregate(&mut table, &schema)
}

/// Sum the story points of every remaining row of `table`, in file order.
pub fn aggregate<R: Read>(table: &mut Table<R>, schema: &Schema) -> Result<SprintTotals> {
    let mut totals = SprintTotals::default();
    let mut record = StringRecord::new();

    while table.read_row(&mut record)? {
        let points = coerce_points(schema.points(&record));
        totals.record(points, is_completed(schema.status(&record)));
    }

    log::info!(
        target: LOG_TARGET,
        "Summed {} row(s) of column '{}': {} total, {} completed, {} not completed",
        totals.rows,
        schema.points_column(),
        totals.total,
        totals.completed,
        totals.not_completed
    );

    Ok(totals)
}
