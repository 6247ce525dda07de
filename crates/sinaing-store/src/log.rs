//! # Customer Log
//!
//! Append-only JSON Lines file of customer records.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  append(customer)          open(append|create) ─► write one line        │
//! │                                                                         │
//! │  find_by_customer_id(id)   scan lines top to bottom                     │
//! │                            ├── blank line       → skip                  │
//! │                            ├── not valid JSON   → warn, skip            │
//! │                            └── customer_id == id → return first match   │
//! │                                                                         │
//! │  Missing file = empty log. No locking, no transactions.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::record::CustomerRecord;
use sinaing_core::Customer;

/// Handle on the customer log file. Opening happens per operation.
///
/// ## Usage
/// ```rust,no_run
/// use sinaing_core::Customer;
/// use sinaing_store::CustomerLog;
///
/// let log = CustomerLog::new("customers.jsonl");
/// let customer = Customer::new("Juan Dela Cruz", "12345678901", "a@b.com", "ID001")?;
/// log.append(&customer)?;
/// assert!(log.find_by_customer_id("ID001")?.is_some());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct CustomerLog {
    path: PathBuf,
}

impl CustomerLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CustomerLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record for `customer`. No retry on failure.
    pub fn append(&self, customer: &Customer) -> StoreResult<CustomerRecord> {
        let record = CustomerRecord::new(customer);
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StoreError::Open {
                path: self.path.clone(),
                source,
            })?;

        file.write_all(line.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;

        info!(
            customer_id = %record.customer_id(),
            record_id = %record.record_id,
            path = %self.path.display(),
            "customer record saved"
        );
        Ok(record)
    }

    /// First record whose `customer_id` equals `customer_id` exactly.
    pub fn find_by_customer_id(&self, customer_id: &str) -> StoreResult<Option<CustomerRecord>> {
        debug!(customer_id, path = %self.path.display(), "scanning customer log");
        let Some(reader) = self.open_reader()? else {
            return Ok(None);
        };

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| self.read_error(source))?;
            if let Some(record) = parse_line(&line, line_no + 1) {
                if record.customer_id() == customer_id {
                    return Ok(Some(record));
                }
            }
        }

        Ok(None)
    }

    /// Every readable record, in file order.
    pub fn read_all(&self) -> StoreResult<Vec<CustomerRecord>> {
        let Some(reader) = self.open_reader()? else {
            return Ok(Vec::new());
        };

        let mut records = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| self.read_error(source))?;
            records.extend(parse_line(&line, line_no + 1));
        }
        Ok(records)
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read_all()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    fn open_reader(&self) -> StoreResult<Option<BufReader<File>>> {
        match File::open(&self.path) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "customer log does not exist yet");
                Ok(None)
            }
            Err(source) => Err(StoreError::Open {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn read_error(&self, source: io::Error) -> StoreError {
        StoreError::Read {
            path: self.path.clone(),
            source,
        }
    }
}

fn parse_line(line: &str, line_no: usize) -> Option<CustomerRecord> {
    if line.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(line) {
        Ok(record) => Some(record),
        Err(err) => {
            warn!(line_no, error = %err, "skipping unreadable customer log line");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn customer(id: &str) -> Customer {
        Customer::new("Juan Dela Cruz", "12345678901", "a@b.com", id).unwrap()
    }

    #[test]
    fn test_append_then_find() {
        let dir = tempfile::tempdir().unwrap();
        let log = CustomerLog::new(dir.path().join("customers.jsonl"));

        let saved = log.append(&customer("ID001")).unwrap();
        log.append(&customer("ID002")).unwrap();

        let found = log.find_by_customer_id("ID001").unwrap().unwrap();
        assert_eq!(found.record_id, saved.record_id);
        assert_eq!(found.customer.name, "Juan Dela Cruz");

        assert!(log.find_by_customer_id("ID003").unwrap().is_none());
        assert!(log.find_by_customer_id("ID00").unwrap().is_none());
        assert_eq!(log.len().unwrap(), 2);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = CustomerLog::new(dir.path().join("absent.jsonl"));
        assert!(log.find_by_customer_id("ID001").unwrap().is_none());
        assert!(log.is_empty().unwrap());
    }

    #[test]
    fn test_garbage_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.jsonl");
        fs::write(&path, "Customer Details:\nCustomer ID: ID001\n\n").unwrap();

        let log = CustomerLog::new(&path);
        log.append(&customer("ID001")).unwrap();

        assert_eq!(log.read_all().unwrap().len(), 1);
        assert!(log.find_by_customer_id("ID001").unwrap().is_some());
    }

    #[test]
    fn test_append_is_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.jsonl");
        let log = CustomerLog::new(&path);
        log.append(&customer("A")).unwrap();
        log.append(&customer("B")).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_unopenable_path_reports_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let log = CustomerLog::new(dir.path().join("no-such-dir").join("customers.jsonl"));
        assert!(matches!(
            log.append(&customer("ID001")),
            Err(StoreError::Open { .. })
        ));
    }
}
