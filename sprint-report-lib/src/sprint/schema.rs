use csv::StringRecord;

const LOG_TARGET: &str = "    sprint";

/// A problem with the shape of an export, found before any row is summed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("the CSV file has no header row")]
    EmptyHeader,

    #[error("the CSV file is missing a required column: {0}")]
    MissingRequiredColumn(String),
}

/// The columns a sprint export is read through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    points_column: String,
    points_index: usize,
    status_index: usize,
}

impl Schema {
    /// Resolve the points and status columns from a header row.
    ///
    /// The points column is the first of `points_columns` present in the header. Names
    /// match exactly, including case. When a name occurs more than once, its last
    /// occurrence is used.
    pub fn resolve(headers: &StringRecord, points_columns: &[String], status_column: &str) -> Result<Self, SchemaError> {
        if headers.is_empty() {
            return Err(SchemaError::EmptyHeader);
        }

        let Some((points_column, points_index)) = points_columns
            .iter()
            .find_map(|name| column_index(headers, name).map(|index| (name, index)))
        else {
            return Err(SchemaError::MissingRequiredColumn(describe_alternatives(points_columns)));
        };

        let Some(status_index) = column_index(headers, status_column) else {
            return Err(SchemaError::MissingRequiredColumn(format!("'{status_column}'")));
        };

        log::debug!(
            target: LOG_TARGET,
            "Reading story points from column '{points_column}' ({points_index}) and status from column '{status_column}' ({status_index})"
        );

        Ok(Self {
            points_column: points_column.clone(),
            points_index,
            status_index,
        })
    }

    /// Name of the column story points are read from
    #[must_use]
    pub fn points_column(&self) -> &str {
        &self.points_column
    }

    #[must_use]
    pub fn points<'r>(&self, record: &'r StringRecord) -> Option<&'r str> {
        record.get(self.points_index)
    }

    #[must_use]
    pub fn status<'r>(&self, record: &'r StringRecord) -> Option<&'r str> {
        record.get(self.status_index)
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().enumerate().filter(|(_, header)| *header == name).map(|(index, _)| index).last()
}

fn describe_alternatives(names: &[String]) -> String {
    match names {
        [single] => format!("'{single}'"),
        [all_but_last @ .., last] => {
            let quoted = all_but_last.iter().map(|name| format!("'{name}'")).collect::<Vec<_>>().join(", ");
            format!("either {quoted} or '{last}'")
        }
        [] => "a story points column".to_string(),
    }
}
