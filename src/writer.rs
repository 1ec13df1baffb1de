use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, WriterBuilder};

use crate::error::ScrapeError;
use crate::results::EntryRecord;

/// Column headers of the output file
const HEADERS: [&str; 4] = ["URL", "Название страницы", "Заголовок", "Описание"];

/// UTF-8 byte-order mark, written once so spreadsheet tools detect the
/// encoding of Cyrillic fields
const BOM: &[u8] = "\u{feff}".as_bytes();

/// Appends entry batches to a CSV file.
///
/// The BOM and header row are written exactly once, on the first flush;
/// every field is quoted. The file is opened in append mode per batch and
/// never truncated.
pub struct CsvBatchWriter {
    path: PathBuf,
    header_written: bool,
}

impl CsvBatchWriter {
    /// Create a writer for the given output path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            header_written: false,
        }
    }

    /// Path of the output file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a batch of records, returning the number of data rows written.
    ///
    /// An empty batch is a no-op and does not emit the header.
    pub fn write_batch(&mut self, records: &[EntryRecord]) -> Result<usize, ScrapeError> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        if !self.header_written {
            file.write_all(BOM)?;
        }

        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .from_writer(file);

        if !self.header_written {
            writer.write_record(&HEADERS)?;
            self.header_written = true;
        }

        for record in records {
            writer.write_record([
                record.url.as_str(),
                record.link_text.as_str(),
                record.title.as_str(),
                record.description.as_str(),
            ])?;
        }

        writer.flush()?;
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(index: usize) -> EntryRecord {
        EntryRecord {
            url: format!("https://www.astrokot.kiev.ua/slovar/word{index}.htm"),
            link_text: format!("Слово {index}"),
            title: format!("Заголовок {index}"),
            description: format!("Описание {index}"),
        }
    }

    #[test]
    fn test_header_and_bom_written_once_across_batches() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dictionary.csv");
        let mut writer = CsvBatchWriter::new(&path);

        let first: Vec<EntryRecord> = (0..10).map(record).collect();
        let second: Vec<EntryRecord> = (10..13).map(record).collect();
        assert_eq!(writer.write_batch(&first).unwrap(), 10);
        assert_eq!(writer.write_batch(&second).unwrap(), 3);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with('\u{feff}'));
        assert_eq!(contents.matches('\u{feff}').count(), 1);
        assert_eq!(contents.matches("\"URL\"").count(), 1);
        // Header plus 13 data rows
        assert_eq!(contents.lines().count(), 14);
    }

    #[test]
    fn test_all_fields_quoted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dictionary.csv");
        let mut writer = CsvBatchWriter::new(&path);
        writer.write_batch(&[record(1)]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let data_line = contents.lines().nth(1).unwrap();
        assert_eq!(
            data_line,
            "\"https://www.astrokot.kiev.ua/slovar/word1.htm\",\"Слово 1\",\"Заголовок 1\",\"Описание 1\""
        );
    }

    #[test]
    fn test_quotes_escaped_by_doubling() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dictionary.csv");
        let mut writer = CsvBatchWriter::new(&path);

        let mut entry = record(1);
        entry.title = "Так называемый \"зенит\"".to_string();
        writer.write_batch(&[entry]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"Так называемый \"\"зенит\"\"\""));
    }

    #[test]
    fn test_empty_batch_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dictionary.csv");
        let mut writer = CsvBatchWriter::new(&path);

        assert_eq!(writer.write_batch(&[]).unwrap(), 0);
        assert!(!path.exists());

        // The header still goes with the first non-empty batch
        writer.write_batch(&[record(1)]).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("\"URL\"").count(), 1);
    }

    #[test]
    fn test_unwritable_path_fails() {
        let mut writer = CsvBatchWriter::new("/nonexistent-dir/dictionary.csv");
        assert!(writer.write_batch(&[record(1)]).is_err());
    }
}
