use crate::Result;
use core::fmt;
use csv::ReaderBuilder;
use std::collections::BTreeMap;
use std::io::{Read, Seek, SeekFrom};

const LOG_TARGET: &str = "   dialect";

/// Number of bytes sampled from the start of an export to guess its dialect
pub const SAMPLE_SIZE: usize = 4096;

/// The structural convention of a delimited file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: u8,
    pub quote: u8,

    /// Whether every delimiter is followed by a space that is not part of the next field
    pub skip_initial_space: bool,
}

impl Dialect {
    /// Comma-delimited with double-quote escaping, the convention spreadsheets export
    pub const EXCEL: Self = Self::with_delimiter(b',');

    #[must_use]
    pub const fn with_delimiter(delimiter: u8) -> Self {
        Self {
            delimiter,
            quote: b'"',
            skip_initial_space: false,
        }
    }

    #[must_use]
    pub const fn with_initial_space(self, skip_initial_space: bool) -> Self {
        Self { skip_initial_space, ..self }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.delimiter {
            b',' => write!(f, "comma")?,
            b';' => write!(f, "semicolon")?,
            b'\t' => write!(f, "tab")?,
            other => write!(f, "{:?}", char::from(other))?,
        }

        if self.skip_initial_space {
            write!(f, " and space")?;
        }

        Ok(())
    }
}

/// Detect the dialect of the stream from a sample at its current position.
///
/// The stream is restored to where it was before sampling. Detection never fails on
/// content: when no candidate explains the sample, [`Dialect::EXCEL`] is returned.
pub fn detect<R: Read + Seek>(stream: &mut R, candidates: &[u8]) -> Result<Dialect> {
    let start = stream.stream_position()?;

    let mut sample = Vec::with_capacity(SAMPLE_SIZE);
    let _ = stream.by_ref().take(SAMPLE_SIZE as u64).read_to_end(&mut sample)?;
    let _ = stream.seek(SeekFrom::Start(start))?;

    if let Some(dialect) = sniff(&sample, candidates) {
        log::debug!(target: LOG_TARGET, "Detected {dialect} delimiter from a {}-byte sample", sample.len());
        Ok(dialect)
    } else {
        log::warn!(target: LOG_TARGET, "Could not detect the delimiter, assuming comma-separated values");
        Ok(Dialect::EXCEL)
    }
}

/// Guess the delimiter of a sample by how uniform a table each candidate produces.
///
/// A candidate qualifies when it splits the first record into at least two fields
/// and that field count is the most common one in the sample. The candidate whose
/// field count is shared by the largest share of records wins; ties go to the
/// candidate listed first.
///
/// When every delimiter on the first line is followed by a space, that space is
/// treated as padding rather than content.
#[must_use]
pub fn sniff(sample: &[u8], candidates: &[u8]) -> Option<Dialect> {
    // a full sample likely ends in the middle of a record
    let complete = sample.len() < SAMPLE_SIZE || sample.ends_with(b"\n");

    let mut best: Option<(u8, f64)> = None;
    for &delimiter in candidates {
        let Some(score) = uniformity(sample, delimiter, complete) else {
            continue;
        };

        log::trace!(target: LOG_TARGET, "Candidate {} scored {score:.3}", Dialect::with_delimiter(delimiter));

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((delimiter, score));
        }
    }

    best.map(|(delimiter, _)| Dialect::with_delimiter(delimiter).with_initial_space(padded_after(sample, delimiter)))
}

fn padded_after(sample: &[u8], delimiter: u8) -> bool {
    let first_line = sample.split(|&b| b == b'\n').next().unwrap_or_default();
    let delimiters = first_line.iter().filter(|&&b| b == delimiter).count();
    let padded = first_line.windows(2).filter(|pair| *pair == [delimiter, b' ']).count();

    delimiters > 0 && delimiters == padded
}

#[expect(clippy::cast_precision_loss, reason = "Record counts in a 4 KiB sample are tiny")]
fn uniformity(sample: &[u8], delimiter: u8, complete: bool) -> Option<f64> {
    let dialect = Dialect::with_delimiter(delimiter);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(dialect.delimiter)
        .quote(dialect.quote)
        .from_reader(sample);

    // an unterminated quote at the sample boundary ends the usable records
    let mut field_counts: Vec<usize> = reader.byte_records().map_while(core::result::Result::ok).map(|r| r.len()).collect();
    if !complete {
        let _ = field_counts.pop();
    }

    let &header_fields = field_counts.first()?;
    if header_fields < 2 {
        return None;
    }

    let mut frequencies: BTreeMap<usize, usize> = BTreeMap::new();
    for &count in &field_counts {
        *frequencies.entry(count).or_default() += 1;
    }

    let matching = frequencies.get(&header_fields).copied().unwrap_or(0);
    if frequencies.values().any(|&frequency| frequency > matching) {
        return None;
    }

    Some(matching as f64 / field_counts.len() as f64)
}
