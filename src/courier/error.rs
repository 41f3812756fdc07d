use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourierError {
    /// The input line could not be parsed into a command.
    #[error("{0}")]
    Parse(String),

    /// The command was well formed but invalid against the current book.
    #[error("{0}")]
    Command(String),

    #[error("No more undo history")]
    UndoExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, CourierError>;
