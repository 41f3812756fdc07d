//! Persistence of the delivery book.
//!
//! The [`BookStore`] trait keeps the rest of the crate off the filesystem:
//! the shell runs against [`fs::JsonFileStore`], tests against
//! [`memory::InMemoryStore`].

pub mod fs;
pub mod memory;
pub mod wire;

use crate::error::Result;
use crate::model::Book;

pub trait BookStore {
    /// Loads the saved book, or `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Book>>;

    /// Writes the whole book, replacing whatever was saved before.
    fn save(&mut self, book: &Book) -> Result<()>;
}
