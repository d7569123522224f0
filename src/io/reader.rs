//! Streaming journal reader with iterator interface
//!
//! Provides a streaming iterator over journal operations from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Design
//!
//! The JournalReader uses csv::Reader to read and deserialize rows
//! sequentially, converting each with csv_format::convert_csv_record. Rows
//! are processed one at a time, so memory usage stays constant regardless
//! of journal size.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found) are returned from `new()`
//! - Individual row errors are yielded as Err variants in the iterator,
//!   with the journal line number for diagnostics
//!
//! ```no_run
//! use bank_ledger::io::reader::JournalReader;
//! use std::path::Path;
//!
//! let reader = JournalReader::new(Path::new("journal.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(operation) => println!("Applying: {:?}", operation),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::OperationRecord;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming CSV journal reader
///
/// Yields one `Result<OperationRecord, String>` per journal row, in file
/// order. Operations must be applied in that order: a row can reference an
/// account a previous row created.
#[derive(Debug)]
pub struct JournalReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl JournalReader {
    /// Create a new JournalReader from a file path
    ///
    /// Opens the journal and prepares it for streaming iteration. The CSV
    /// reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (trailing columns may be omitted)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the journal CSV file
    ///
    /// # Returns
    ///
    /// * `Ok(JournalReader)` if the file opened successfully
    /// * `Err(String)` if the file could not be opened
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for JournalReader {
    type Item = Result<OperationRecord, String>;

    /// Get the next operation from the journal
    ///
    /// # Returns
    ///
    /// * `Some(Ok(OperationRecord))` - Successfully parsed row
    /// * `Some(Err(String))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();

        match deserializer.next()? {
            Ok(csv_record) => {
                self.line_num += 1;
                // Line numbers in errors account for the header row
                Some(
                    convert_csv_record(csv_record)
                        .map_err(|e| format!("Line {}: {}", self.line_num + 1, e)),
                )
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(format!(
                    "Line {}: CSV parse error: {}",
                    self.line_num + 1,
                    e
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OperationKind;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary journal file for testing
    fn create_temp_journal(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_journal_reader_new_opens_file() {
        let file = create_temp_journal("op,holder,account,to,amount\ncreate,Alice,,,100.00\n");

        let result = JournalReader::new(file.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_journal_reader_new_fails_on_missing_file() {
        let result = JournalReader::new(Path::new("nonexistent.csv"));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to open file"));
    }

    #[test]
    fn test_journal_reader_iterates_operations_in_file_order() {
        let content = "op,holder,account,to,amount\n\
            create,Alice,,,100.00\n\
            create,Bob,,,\n\
            deposit,,2,,25.50\n\
            transfer,,1,2,40.00\n";
        let file = create_temp_journal(content);

        let reader = JournalReader::new(file.path()).unwrap();
        let operations: Vec<_> = reader.filter_map(Result::ok).collect();

        assert_eq!(operations.len(), 4);
        assert_eq!(operations[0].kind, OperationKind::Create);
        assert_eq!(operations[0].holder_name.as_deref(), Some("Alice"));
        assert_eq!(operations[1].kind, OperationKind::Create);
        assert_eq!(operations[1].amount, None);
        assert_eq!(operations[2].kind, OperationKind::Deposit);
        assert_eq!(operations[2].account, Some(2));
        assert_eq!(operations[3].kind, OperationKind::Transfer);
        assert_eq!(operations[3].to, Some(2));
        assert_eq!(operations[3].amount, Some(Decimal::new(4000, 2)));
    }

    #[test]
    fn test_journal_reader_includes_line_numbers_in_errors() {
        let content = "op,holder,account,to,amount\n\
            create,Alice,,,100.00\n\
            deposit,,abc,,10.00\n\
            withdraw,,1,,20.00\n";
        let file = create_temp_journal(content);

        let reader = JournalReader::new(file.path()).unwrap();
        let results: Vec<_> = reader.collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());

        let error = results[1].as_ref().unwrap_err();
        assert!(error.contains("Line 3")); // Line 3 because of header
        assert!(error.contains("Invalid account ID"));
    }

    #[test]
    fn test_journal_reader_continues_after_error() {
        let content = "op,holder,account,to,amount\n\
            create,Alice,,,100.00\n\
            freeze,,1,,\n\
            withdraw,,1,,30.00\n";
        let file = create_temp_journal(content);

        let reader = JournalReader::new(file.path()).unwrap();
        let results: Vec<_> = reader.collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_journal_reader_handles_whitespace() {
        let content = "op,holder,account,to,amount\n  deposit  ,,  7  ,,  12.34  \n";
        let file = create_temp_journal(content);

        let reader = JournalReader::new(file.path()).unwrap();
        let operations: Vec<_> = reader.filter_map(Result::ok).collect();

        assert_eq!(operations.len(), 1);
        assert_eq!(operations[0].account, Some(7));
        assert_eq!(operations[0].amount, Some(Decimal::new(1234, 2)));
    }

    #[test]
    fn test_journal_reader_handles_empty_file_after_header() {
        let file = create_temp_journal("op,holder,account,to,amount\n");

        let reader = JournalReader::new(file.path()).unwrap();
        assert_eq!(reader.count(), 0);
    }
}
