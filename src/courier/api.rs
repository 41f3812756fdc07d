//! # API Facade
//!
//! The single entry point for executing delivery-book commands: one input
//! line in, one [`CmdResult`] out. The shell never talks to the command
//! modules or the store directly.
//!
//! The facade owns the in-memory [`Book`], the undo stack, and the store.
//! It parses the line, dispatches to the command executor, and writes the
//! book back after every mutating command. A failed save is reported as a
//! command error; the in-memory change stands so the user can retry or keep
//! working.
//!
//! `CourierApi<S: BookStore>` is generic over the storage backend:
//! production runs on `JsonFileStore`, tests on `InMemoryStore`.

use log::{debug, warn};

use crate::commands;
use crate::error::{CourierError, Result};
use crate::model::Book;
use crate::parse::{self, Command};
use crate::store::BookStore;
use crate::undo::UndoStack;

pub struct CourierApi<S: BookStore> {
    store: S,
    book: Book,
    undo: UndoStack<Book>,
}

impl<S: BookStore> CourierApi<S> {
    pub fn new(store: S, book: Book, undo_depth: usize) -> Self {
        Self {
            store,
            book,
            undo: UndoStack::new(undo_depth),
        }
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parses and runs one input line.
    pub fn execute(&mut self, input: &str) -> Result<commands::CmdResult> {
        let command = parse::parse_command(input)?;
        let keyword = command.keyword();
        // Keyword only: argument text is the user's personal data.
        debug!("executing {}", keyword);

        let result = match command {
            Command::AddClient { client } => {
                commands::add_client::run(&mut self.book, &mut self.undo, client)?
            }
            Command::AddDelivery {
                client_name,
                when,
                remark,
                cost,
                tag,
            } => commands::add_delivery::run(
                &mut self.book,
                &mut self.undo,
                &client_name,
                when,
                remark,
                cost,
                tag,
            )?,
            Command::EditClient { index, edits } => {
                commands::edit_client::run(&mut self.book, &mut self.undo, index, &edits)?
            }
            Command::DeleteClient { index } => {
                commands::delete_client::run(&mut self.book, &mut self.undo, index)?
            }
            Command::DeleteDelivery { index } => {
                commands::delete_delivery::run(&mut self.book, &mut self.undo, index)?
            }
            Command::MarkDelivered { index } => {
                commands::mark_delivery::run(&mut self.book, &mut self.undo, index, true)?
            }
            Command::UnmarkDelivered { index } => {
                commands::mark_delivery::run(&mut self.book, &mut self.undo, index, false)?
            }
            Command::FindClient { query } => commands::find_client::run(&self.book, &query)?,
            Command::FindDelivery { date } => commands::find_delivery::run(&self.book, &date)?,
            Command::List => commands::list::run(&self.book)?,
            Command::Clear => commands::clear::run(&mut self.book, &mut self.undo)?,
            Command::Undo => commands::undo::run(&mut self.book, &mut self.undo)?,
            Command::Help => commands::help::run()?,
            Command::Exit => {
                let mut result = commands::CmdResult::default().exiting();
                result.add_message(commands::CmdMessage::info("Goodbye!"));
                result
            }
        };

        if result.mutated {
            if let Err(err) = self.store.save(&self.book) {
                warn!("saving after {} failed: {}", keyword, err);
                return Err(CourierError::Command(format!(
                    "Could not save the delivery book: {}",
                    err
                )));
            }
            debug!("book saved after {}", keyword);
        }
        Ok(result)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, DisplayClient, DisplayDelivery, MessageLevel};
