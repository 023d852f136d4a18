use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::domain::error::TodoError;
use crate::domain::todo::Document;

/// Whole-document persistence against a single JSON file.
///
/// The file is the source of truth: every read parses the full contents and
/// every write replaces them. There is no partial write, append log or index;
/// the dataset is small enough that rewriting it wholesale is the simplest
/// thing that works.
#[derive(Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the whole document. A missing file is not an error:
    /// an empty document is written out and returned. Invalid JSON is
    /// surfaced as [`TodoError::CorruptStore`] and the file is left alone.
    pub async fn load(&self) -> Result<Document, TodoError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "data file missing, creating an empty one");
                let doc = Document::default();
                self.save(&doc).await?;
                return Ok(doc);
            }
            Err(err) => return Err(TodoError::StoreUnavailable(err)),
        };
        serde_json::from_str(&raw).map_err(TodoError::CorruptStore)
    }

    /// Serializes `doc` and rewrites the file in full. A failed save means
    /// the document was not durably updated; callers must not assume partial
    /// success.
    pub async fn save(&self, doc: &Document) -> Result<(), TodoError> {
        let raw = serde_json::to_string_pretty(doc)
            .map_err(|err| TodoError::StoreUnavailable(err.into()))?;
        fs::write(&self.path, raw)
            .await
            .map_err(TodoError::StoreUnavailable)?;
        tracing::debug!(path = %self.path.display(), "document saved");
        Ok(())
    }
}
