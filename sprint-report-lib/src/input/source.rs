use camino::Utf8Path;
use ohno::IntoAppError;
use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};

use crate::Result;

const LOG_TARGET: &str = "     input";

/// The UTF-8 encoding of U+FEFF
const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// A seekable sprint export, positioned past any byte-order mark
#[derive(Debug)]
pub struct SprintSource<R> {
    reader: R,
    content_start: u64,
}

impl SprintSource<BufReader<File>> {
    /// Open a sprint export on disk.
    pub fn open(path: &Utf8Path) -> Result<Self> {
        let file = File::open(path).into_app_err_with(|| format!("unable to open sprint data file '{path}'"))?;
        log::info!(target: LOG_TARGET, "Opened sprint data file '{path}'");

        Self::new(BufReader::new(file)).into_app_err_with(|| format!("unable to read sprint data file '{path}'"))
    }
}

impl<R: Read + Seek> SprintSource<R> {
    /// Wrap a stream, skipping a byte-order mark found at its current position.
    pub fn new(mut reader: R) -> io::Result<Self> {
        let start = reader.stream_position()?;

        let mut prefix = Vec::with_capacity(BOM.len());
        let _ = reader.by_ref().take(BOM.len() as u64).read_to_end(&mut prefix)?;

        let has_bom = prefix == BOM;
        let content_start = if has_bom { start + BOM.len() as u64 } else { start };
        let _ = reader.seek(SeekFrom::Start(content_start))?;

        if has_bom {
            log::debug!(target: LOG_TARGET, "Skipped UTF-8 byte-order mark");
        }

        Ok(Self { reader, content_start })
    }

    /// Whether the content is empty or starts with a line terminator.
    ///
    /// The stream is left at the start of the content.
    pub fn has_blank_first_line(&mut self) -> io::Result<bool> {
        let mut first = Vec::with_capacity(1);
        let _ = self.reader.by_ref().take(1).read_to_end(&mut first)?;
        self.rewind()?;

        Ok(matches!(first.first(), None | Some(b'\n' | b'\r')))
    }

    /// Move back to the start of the content.
    pub fn rewind(&mut self) -> io::Result<()> {
        let _ = self.reader.seek(SeekFrom::Start(self.content_start))?;
        Ok(())
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Give up the wrapper, returning the stream at its current position.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_rest(source: SprintSource<Cursor<Vec<u8>>>) -> String {
        let mut text = String::new();
        let _ = source.into_inner().read_to_string(&mut text).unwrap();
        text
    }

    #[test]
    fn test_bom_is_skipped() {
        let source = SprintSource::new(Cursor::new(b"\xEF\xBB\xBFStatus,Story Points\n".to_vec())).unwrap();
        assert_eq!(source.content_start, 3);
        assert_eq!(read_rest(source), "Status,Story Points\n");
    }

    #[test]
    fn test_content_without_bom_is_untouched() {
        let source = SprintSource::new(Cursor::new(b"Status,Story Points\n".to_vec())).unwrap();
        assert_eq!(source.content_start, 0);
        assert_eq!(read_rest(source), "Status,Story Points\n");
    }

    #[test]
    fn test_partial_bom_is_content() {
        let source = SprintSource::new(Cursor::new(b"\xEF\xBB".to_vec())).unwrap();
        assert_eq!(source.content_start, 0);
        assert_eq!(source.into_inner().position(), 0);
    }

    #[test]
    fn test_blank_first_line() {
        let mut empty = SprintSource::new(Cursor::new(Vec::new())).unwrap();
        assert!(empty.has_blank_first_line().unwrap());

        let mut newline = SprintSource::new(Cursor::new(b"\nStatus\n".to_vec())).unwrap();
        assert!(newline.has_blank_first_line().unwrap());

        let mut crlf = SprintSource::new(Cursor::new(b"\r\nStatus\r\n".to_vec())).unwrap();
        assert!(crlf.has_blank_first_line().unwrap());

        let mut bom_only = SprintSource::new(Cursor::new(BOM.to_vec())).unwrap();
        assert!(bom_only.has_blank_first_line().unwrap());
    }

    #[test]
    fn test_header_line_is_not_blank_and_position_is_kept() {
        let mut source = SprintSource::new(Cursor::new(b"\xEF\xBB\xBFStatus\n".to_vec())).unwrap();
        assert!(!source.has_blank_first_line().unwrap());
        assert_eq!(source.get_mut().position(), 3);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_open_missing_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = camino::Utf8PathBuf::try_from(tmp.path().join("sprint_data.csv")).unwrap();
        assert!(SprintSource::open(&path).is_err());
    }
}
