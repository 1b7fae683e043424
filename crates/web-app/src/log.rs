use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Keeps the most recent log entries, newest first.
pub struct Memory {
    entries: Mutex<VecDeque<Entry>>,
    capacity: usize,
}

impl Memory {
    pub const CAPACITY: usize = 100;

    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(Self::CAPACITY)
    }
}

impl Repository for Memory {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .map_err(|err| Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: Entry) -> Result<(), Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| Error::Unknown(err.to_string()))?;
        entries.push_front(entry);
        entries.truncate(self.capacity);
        Ok(())
    }
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(repository: Arc<Mutex<dyn Repository>>) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Debug))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Ok(log) = LOG.lock() else {
            return;
        };
        if let Some(ref repository) = *log {
            if let Ok(repository) = repository.lock() {
                let _ = repository.write_entry(Entry {
                    time: Local::now().format("%b %d %H:%M:%S").to_string(),
                    level: record.level(),
                    message: record.args().to_string(),
                });
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(message: &str) -> Entry {
        Entry {
            time: String::from("Jan 01 00:00:00"),
            level: Level::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_memory_newest_first() {
        let memory = Memory::default();
        memory.write_entry(entry("a")).unwrap();
        memory.write_entry(entry("b")).unwrap();
        assert_eq!(
            memory.read_entries().unwrap(),
            VecDeque::from([entry("b"), entry("a")])
        );
    }

    #[test]
    fn test_memory_capacity() {
        let memory = Memory::new(2);
        for message in ["a", "b", "c"] {
            memory.write_entry(entry(message)).unwrap();
        }
        assert_eq!(
            memory.read_entries().unwrap(),
            VecDeque::from([entry("c"), entry("b")])
        );
    }

    #[test]
    fn test_entry_level_serialization() {
        let json = serde_json::to_string(&entry("x")).unwrap();
        assert_eq!(
            json,
            r#"{"time":"Jan 01 00:00:00","level":"Info","message":"x"}"#
        );
        assert_eq!(serde_json::from_str::<Entry>(&json).unwrap(), entry("x"));
    }

    #[test]
    fn test_init() {
        let memory = Arc::new(Mutex::new(Memory::default()));
        init(memory.clone()).unwrap();

        log::info!("routine created");
        log::trace!("not recorded");

        let entries = memory.lock().unwrap().read_entries().unwrap();
        assert!(
            entries
                .iter()
                .any(|e| e.level == Level::Info && e.message == "routine created")
        );
        assert!(entries.iter().all(|e| e.message != "not recorded"));
    }
}
