use std::fs;
use std::path::{Path, PathBuf};

use super::wire::SavedBook;
use super::BookStore;
use crate::error::Result;
use crate::model::Book;

/// Stores the whole book as one pretty-printed JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> Result<Option<Book>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let saved: SavedBook = serde_json::from_str(&content)?;
        Ok(Some(saved.into_book()?))
    }

    fn save(&mut self, book: &Book) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            // A bare filename has an empty parent; nothing to create then.
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&SavedBook::from_book(book))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
