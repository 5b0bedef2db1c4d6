use anyhow::Context;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A KvStore holds small named counters under string keys. All operations are synchronous and
/// assume a single writer.
pub trait KvStore {
    /// get returns the value stored under the inserted key, or 0 if the key is absent.
    fn get(&self, key: &str) -> u32;

    /// set stores the inserted value under the key, replacing any previous value.
    fn set(&mut self, key: &str, value: u32);

    /// remove deletes the key. Removing an absent key has no effect.
    fn remove(&mut self, key: &str);
}

/// MemStore keeps the values in memory only. Clones share the same underlying map such that all
/// handles behave like a single process-wide store.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    values: Rc<RefCell<HashMap<String, u32>>>,
}

impl MemStore {
    pub fn new() -> MemStore {
        MemStore::default()
    }
}

impl KvStore for MemStore {
    fn get(&self, key: &str) -> u32 {
        *self.values.borrow().get(key).unwrap_or(&0)
    }

    fn set(&mut self, key: &str, value: u32) {
        self.values.borrow_mut().insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// FileStore persists the values as a flat JSON object and writes the file through on every
/// mutation. Write failures are reported as a warning and do not interrupt the caller.
#[derive(Debug)]
pub struct FileStore {
    filepath: PathBuf,
    values: HashMap<String, u32>,
}

impl FileStore {
    /// open reads the stored values from the inserted file path. A missing file yields an empty
    /// store; the file is created on the first write.
    pub fn open(filepath: &Path) -> anyhow::Result<FileStore> {
        let values = if filepath.exists() {
            // open file
            let fh = OpenOptions::new()
                .read(true)
                .open(filepath)
                .context(format!(
                    "Failed to open stats file {}!",
                    filepath.display()
                ))?;

            // read and parse file content
            serde_json::from_reader(&fh).context(format!(
                "Failed to parse stats file {}!",
                filepath.display()
            ))?
        } else {
            HashMap::new()
        };

        Ok(FileStore {
            filepath: filepath.to_owned(),
            values,
        })
    }

    fn write_through(&self) {
        // serializing a flat string-to-integer map cannot fail
        let content = serde_json::to_string_pretty(&self.values)
            .expect("Failed to serialize the stats map!");

        if let Err(e) = std::fs::write(&self.filepath, content) {
            println!(
                "WARNING: Failed to write stats file {}: {}",
                self.filepath.display(),
                e
            );
        }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> u32 {
        *self.values.get(key).unwrap_or(&0)
    }

    fn set(&mut self, key: &str, value: u32) {
        self.values.insert(key.to_owned(), value);
        self.write_through();
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.write_through();
        }
    }
}
