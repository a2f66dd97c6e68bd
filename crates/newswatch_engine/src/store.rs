use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use newswatch_core::Article;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed state file: {0}")]
    Format(#[from] serde_json::Error),
}

/// Serialized mirror of [`Article`]; the core type stays serde-free.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedArticle {
    title: String,
    url: String,
}

/// Holds the single last-known article as a JSON file.
///
/// Absence of the file is a valid state meaning no article has been
/// recorded yet.
pub struct ArticleStore {
    path: PathBuf,
}

impl ArticleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the recorded article. `Ok(None)` when nothing has been
    /// recorded; read and parse failures are explicit errors so the
    /// caller can decide how loudly to complain.
    pub fn load(&self) -> Result<Option<Article>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Io(err)),
        };
        let record: PersistedArticle = serde_json::from_str(&content)?;
        Ok(Some(Article::new(record.title, record.url)))
    }

    /// Replace the recorded article atomically: temp file in the target
    /// directory, fsync, then rename.
    pub fn save(&self, article: &Article) -> Result<(), StoreError> {
        let record = PersistedArticle {
            title: article.title.clone(),
            url: article.url.clone(),
        };
        let content = serde_json::to_string_pretty(&record)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // tempfile::persist cannot replace an open target on every
        // platform; drop the old file first.
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        tmp.persist(&self.path).map_err(|err| StoreError::Io(err.error))?;
        Ok(())
    }
}
