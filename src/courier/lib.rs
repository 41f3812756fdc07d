//! # Courier Architecture
//!
//! Courier is a **UI-agnostic delivery-book library** with an interactive shell
//! as its only client. The shell reads one line at a time, hands it to the API
//! facade, and prints whatever comes back; everything below the facade is plain
//! Rust types and `Result`s.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (main.rs, args.rs)                                   │
//! │  - Reads lines, renders tables and messages, colors output  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses one input line into a Command                     │
//! │  - Dispatches to the matching executor                      │
//! │  - Persists the book after every successful mutation        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the Book and the UndoStack      │
//! │  - Returns structured CmdResult values, never prints        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model/, parse/, undo.rs, store/)                     │
//! │  - Validated field types, Book invariants                   │
//! │  - Prefix tokenizer and per-command parsers                 │
//! │  - Bounded undo stack, BookStore trait + backends           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Policy
//!
//! Every user-facing failure is recoverable. Parse errors, execution errors,
//! undo exhaustion, and storage failures all come back as [`error::CourierError`]
//! values; the shell prints them and prompts again. Nothing below `main.rs`
//! exits the process.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each shell command
//! - [`model`]: Core data types (`Book`, `Client`, `Delivery`, field types)
//! - [`parse`]: Argument tokenizer and command parsers
//! - [`store`]: Storage abstraction and JSON/file/memory backends
//! - [`undo`]: Bounded snapshot stack
//! - [`config`]: Configuration management
//! - [`logging`]: File logging bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod parse;
pub mod store;
pub mod undo;
