use super::BookStore;
use crate::error::Result;
use crate::model::Book;

/// Test double that keeps the saved book in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Option<Book>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: Book) -> Self {
        Self {
            saved: Some(book),
            saves: 0,
        }
    }

    /// How many times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<Option<Book>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, book: &Book) -> Result<()> {
        self.saved = Some(book.clone());
        self.saves += 1;
        Ok(())
    }
}
