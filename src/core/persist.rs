use crate::domain::model::Gradebook;
use crate::domain::ports::Storage;
use crate::utils::error::GradebookError;
use crate::utils::validation::Validate;

/// JSON persistence over a storage backend.
///
/// Both directions degrade gracefully: a missing or unreadable source loads
/// as an empty gradebook, and a failed save is logged rather than raised.
/// Lookup failures stay in the store; nothing here is a hard error.
pub struct JsonStore<S: Storage> {
    storage: S,
}

impl<S: Storage> JsonStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load(&self, path: &str) -> Gradebook {
        let bytes = match self.storage.read_file(path) {
            Ok(bytes) => bytes,
            Err(GradebookError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("{} not found, creating empty structure", path);
                return Gradebook::new();
            }
            Err(e) => {
                tracing::error!("error loading {}: {}", path, e);
                return Gradebook::new();
            }
        };

        let parsed = serde_json::from_slice::<Gradebook>(&bytes)
            .map_err(GradebookError::from)
            .and_then(|gradebook| {
                gradebook.validate()?;
                Ok(gradebook)
            });

        match parsed {
            Ok(gradebook) => {
                tracing::info!("loaded {}", path);
                gradebook
            }
            Err(e) => {
                tracing::error!("error loading {}: {}", path, e);
                Gradebook::new()
            }
        }
    }

    pub fn save(&self, path: &str, gradebook: &Gradebook) {
        let result = serde_json::to_vec_pretty(gradebook)
            .map_err(GradebookError::from)
            .and_then(|bytes| self.storage.write_file(path, &bytes));

        match result {
            Ok(()) => tracing::info!("saved {}", path),
            Err(e) => tracing::error!("error saving {}: {}", path, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::Result;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory storage backend for exercising the adapter without a
    /// filesystem.
    #[derive(Default)]
    struct MemStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl Storage for MemStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::NotFound, "no such file").into()
                })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn missing_source_loads_empty() {
        let store = JsonStore::new(MemStorage::default());
        assert!(store.load("nowhere.json").is_empty());
    }

    #[test]
    fn unparseable_source_loads_empty() {
        let storage = MemStorage::default();
        storage
            .write_file("bad.json", b"{ not json")
            .unwrap();
        let store = JsonStore::new(storage);
        assert!(store.load("bad.json").is_empty());
    }

    #[test]
    fn invalid_roster_loads_empty() {
        let storage = MemStorage::default();
        storage
            .write_file(
                "dup.json",
                br#"{"school 1": {"students": ["Jo Doe", "Jo Doe"], "courses": {}}}"#,
            )
            .unwrap();
        let store = JsonStore::new(storage);
        assert!(store.load("dup.json").is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut gradebook = Gradebook::new();
        gradebook.add_school("school 1");
        gradebook.add_student("school 1", "Jo Doe").unwrap();
        gradebook.add_course("school 1", "math").unwrap();
        gradebook
            .add_grade("school 1", "math", "Jo Doe", "test1", 6)
            .unwrap();

        let store = JsonStore::new(MemStorage::default());
        store.save("data.json", &gradebook);
        assert_eq!(store.load("data.json"), gradebook);
    }
}
