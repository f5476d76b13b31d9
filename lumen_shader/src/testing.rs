//! Test helpers shared by unit tests

use std::sync::{Arc, Mutex};

use crate::log::{LogEntry, Logger};

/// Logger that keeps every entry for later inspection
///
/// Unit tests run in parallel, so non-serial tests may log into a capture
/// logger installed by a serial one. Filter with [`from_source`].
pub struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    pub fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Captured entries emitted by `source`
pub fn from_source(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.source == source)
        .cloned()
        .collect()
}
