//! JSON file persistence for the dashboard document.
//!
//! The whole document lives in one pretty-printed JSON file and is replaced
//! wholesale on every save. There is no locking and no atomic rename: each
//! caller runs an independent load-mutate-save sequence and the last writer
//! wins. That is the deliberate single-user, single-process contract, not a
//! durability guarantee.

use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{CoreError, Result};
use crate::model::Document;

const DATA_FILE: &str = "data_store.json";

/// Outcome of loading the persisted document.
///
/// Missing or unparsable data is absorbed here rather than surfaced as an
/// error: the caller always gets a usable document and can still tell which
/// branch produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The persisted document parsed cleanly.
    Loaded(Document),
    /// Nothing usable on disk; the seed document was written in its place.
    Seeded(Document),
}

impl LoadOutcome {
    /// The document, whichever branch produced it.
    pub fn into_document(self) -> Document {
        match self {
            LoadOutcome::Loaded(doc) | LoadOutcome::Seeded(doc) => doc,
        }
    }
}

/// Handle to the persisted document file.
#[derive(Debug, Clone)]
pub struct DataStore {
    path: PathBuf,
}

impl DataStore {
    /// Store at the default location, `data_dir()/data_store.json`.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: data_dir()?.join(DATA_FILE),
        })
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted document.
    ///
    /// A missing file or unparsable content yields [`LoadOutcome::Seeded`]:
    /// the seed document is written back immediately so the next load finds
    /// a valid file. Only I/O failures other than file-not-found (e.g.
    /// permissions) surface as `Err`.
    ///
    /// # Errors
    /// Returns an error if reading fails for a reason other than the file
    /// being absent, or if writing the seed document fails.
    pub fn load(&self) -> Result<LoadOutcome> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return self.seed();
            }
            Err(err) => {
                return Err(CoreError::Storage {
                    path: self.path.clone(),
                    message: err.to_string(),
                })
            }
        };

        match serde_json::from_str::<Document>(&content) {
            Ok(doc) => Ok(LoadOutcome::Loaded(doc)),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "persisted document unparsable, replacing with seed data"
                );
                self.seed()
            }
        }
    }

    /// Load, discarding the loaded/seeded distinction.
    ///
    /// # Errors
    /// Same conditions as [`DataStore::load`].
    pub fn load_or_seed(&self) -> Result<Document> {
        Ok(self.load()?.into_document())
    }

    /// Persist `doc`, overwriting prior content.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, doc: &Document) -> Result<()> {
        let content = serde_json::to_string_pretty(doc)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn seed(&self) -> Result<LoadOutcome> {
        let doc = Document::seed();
        self.save(&doc)?;
        Ok(LoadOutcome::Seeded(doc))
    }
}
