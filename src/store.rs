//! Record store: the ordered, immutable list of people loaded at startup.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::{Result, RosterError};

/// An ordered sequence of raw text lines, one per person.
///
/// A record is identified by its zero-based position. Records are never
/// mutated after load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<String>,
}

impl RecordStore {
    /// Load records from a file, one record per line.
    ///
    /// Empty lines are kept as records.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| RosterError::source_unreadable(path, e))?;
        let store = Self::read_lines(BufReader::new(file))
            .map_err(|e| RosterError::source_unreadable(path, e))?;

        info!("Loaded {} people from {}", store.len(), path.display());
        Ok(store)
    }

    /// Load records from any buffered reader.
    ///
    /// A reader has no path to report, so read failures surface as
    /// [`RosterError::Io`]. [`RecordStore::load`] attaches the path and
    /// reports [`RosterError::SourceUnreadable`] instead.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self::read_lines(reader)?)
    }

    /// Build a store from already materialized lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RecordStore {
            records: lines.into_iter().map(Into::into).collect(),
        }
    }

    fn read_lines<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let records = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Ok(RecordStore { records })
    }

    /// Get the record at `position`.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.records.get(position).map(String::as_str)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in position order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_reader_keeps_order_and_empty_lines() {
        let input = Cursor::new("Ann Lee ann@x.com\n\nBob Ann bob@x.com\n");
        let store = RecordStore::from_reader(input).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0), Some("Ann Lee ann@x.com"));
        assert_eq!(store.get(1), Some(""));
        assert_eq!(store.get(2), Some("Bob Ann bob@x.com"));
        assert_eq!(store.get(3), None);
    }

    #[test]
    fn test_from_reader_strips_crlf() {
        let store = RecordStore::from_reader(Cursor::new("a b\r\nc d\r\n")).unwrap();
        assert_eq!(store.iter().collect::<Vec<_>>(), vec!["a b", "c d"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Dwight Joseph djo@gmail.com").unwrap();
        writeln!(file, "Rene Webb webb@gmail.com").unwrap();

        let store = RecordStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1), Some("Rene Webb webb@gmail.com"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        match RecordStore::load(&path) {
            Err(RosterError::SourceUnreadable { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected SourceUnreadable, got {other:?}"),
        }
    }

    #[test]
    fn test_from_reader_read_failure() {
        // Invalid UTF-8 fails mid-read.
        let input = Cursor::new(vec![b'a', b'\n', 0xff, 0xfe, b'\n']);

        match RecordStore::from_reader(input) {
            Err(RosterError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_invalid_utf8_is_unreadable() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[b'a', b'\n', 0xff, 0xfe, b'\n']).unwrap();

        assert!(matches!(
            RecordStore::load(file.path()),
            Err(RosterError::SourceUnreadable { .. })
        ));
    }

    #[test]
    fn test_empty_source() {
        let store = RecordStore::from_reader(Cursor::new("")).unwrap();
        assert!(store.is_empty());
    }
}
