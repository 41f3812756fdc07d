//! Command executors.
//!
//! Each submodule implements one shell command as a `run` function that takes
//! the in-memory [`Book`] (plus the undo stack where the command mutates) and
//! returns a [`CmdResult`]. Executors never print and never touch the store;
//! rendering is the shell's job and persistence is the API layer's.
//!
//! Mutating executors clone the book up front and push that snapshot onto
//! the undo stack only after the change succeeds, so a failed command never
//! leaves a stray undo entry.

use crate::model::{Client, Delivery};

pub mod add_client;
pub mod add_delivery;
pub mod clear;
pub mod delete_client;
pub mod delete_delivery;
pub mod edit_client;
pub mod find_client;
pub mod find_delivery;
pub mod help;
pub mod list;
pub mod mark_delivery;
pub mod undo;

pub const INVALID_CLIENT_INDEX: &str = "The client index provided is invalid";
pub const INVALID_DELIVERY_INDEX: &str = "The delivery index provided is invalid";

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A client tagged with its 1-based position in the book.
#[derive(Debug, Clone)]
pub struct DisplayClient {
    pub position: usize,
    pub client: Client,
}

/// A delivery tagged with its 1-based position in the book.
#[derive(Debug, Clone)]
pub struct DisplayDelivery {
    pub position: usize,
    pub delivery: Delivery,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub clients: Vec<DisplayClient>,
    pub deliveries: Vec<DisplayDelivery>,
    pub messages: Vec<CmdMessage>,
    /// True when the book changed and should be written back to the store.
    pub mutated: bool,
    /// True when the shell should stop reading input.
    pub exit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_clients(mut self, clients: Vec<DisplayClient>) -> Self {
        self.clients = clients;
        self
    }

    pub fn with_deliveries(mut self, deliveries: Vec<DisplayDelivery>) -> Self {
        self.deliveries = deliveries;
        self
    }

    pub fn mutated(mut self) -> Self {
        self.mutated = true;
        self
    }

    pub fn exiting(mut self) -> Self {
        self.exit = true;
        self
    }
}

pub(crate) fn command_error(message: impl Into<String>) -> crate::error::CourierError {
    crate::error::CourierError::Command(message.into())
}

/// "1 delivery" / "3 deliveries" style counting for user-facing messages.
pub(crate) fn counted(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", count, plural)
    }
}
