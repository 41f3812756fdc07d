//! Parsing of shell input lines into [`Command`] values.
//!
//! The first whitespace-delimited word selects the command; the rest of the
//! line goes to that command's argument parser. Every parser follows the same
//! contract: tokenize with the command's prefixes, reject stray preamble and
//! missing required prefixes with an invalid-format error carrying the usage
//! string, reject repeated single-value prefixes, then validate each value
//! through the field constructors and surface their constraint messages.

pub mod client;
pub mod delivery;
pub mod syntax;
pub mod tokenizer;

use crate::error::{CourierError, Result};
use crate::model::{
    Client, ClientEdits, ClientQuery, Cost, DeliveryDateTime, FieldError, Name, Remark, Tag,
};

use syntax::Prefix;
use tokenizer::TokenizedArgs;

pub const ADD_CLIENT_USAGE: &str = "add-client n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...";
pub const ADD_DELIVERY_USAGE: &str =
    "add-delivery n/CLIENT_NAME d/DATE tm/TIME r/REMARK c/COST [t/TAG]";
pub const FIND_CLIENT_USAGE: &str = "find-client [n/NAME] [p/PHONE] [e/EMAIL]";
pub const FIND_DELIVERY_USAGE: &str = "find-delivery DATE";
pub const EDIT_USAGE: &str = "edit INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...";
pub const DELETE_USAGE: &str = "delete INDEX";
pub const DELETE_DELIVERY_USAGE: &str = "delete-delivery INDEX";
pub const MARK_DELIVERY_USAGE: &str = "mark-delivery INDEX";
pub const UNMARK_DELIVERY_USAGE: &str = "unmark-delivery INDEX";

const UNKNOWN_COMMAND: &str = "Unknown command. Type 'help' to see available commands.";

/// One fully parsed and validated input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddClient {
        client: Client,
    },
    AddDelivery {
        client_name: Name,
        when: DeliveryDateTime,
        remark: Remark,
        cost: Cost,
        tag: Option<Tag>,
    },
    FindClient {
        query: ClientQuery,
    },
    FindDelivery {
        date: String,
    },
    EditClient {
        index: usize,
        edits: ClientEdits,
    },
    DeleteClient {
        index: usize,
    },
    DeleteDelivery {
        index: usize,
    },
    MarkDelivered {
        index: usize,
    },
    UnmarkDelivered {
        index: usize,
    },
    List,
    Clear,
    Undo,
    Help,
    Exit,
}

impl Command {
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::AddClient { .. } => "add-client",
            Command::AddDelivery { .. } => "add-delivery",
            Command::FindClient { .. } => "find-client",
            Command::FindDelivery { .. } => "find-delivery",
            Command::EditClient { .. } => "edit",
            Command::DeleteClient { .. } => "delete",
            Command::DeleteDelivery { .. } => "delete-delivery",
            Command::MarkDelivered { .. } => "mark-delivery",
            Command::UnmarkDelivered { .. } => "unmark-delivery",
            Command::List => "list",
            Command::Clear => "clear",
            Command::Undo => "undo",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}

pub fn parse_command(input: &str) -> Result<Command> {
    let trimmed = input.trim();
    let (keyword, args) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest),
        None => (trimmed, ""),
    };

    match keyword {
        "add-client" => client::parse_add(args),
        "edit" => client::parse_edit(args),
        "delete" => client::parse_delete(args),
        "find-client" => client::parse_find(args),
        "add-delivery" => delivery::parse_add(args),
        "find-delivery" => delivery::parse_find(args),
        "delete-delivery" => delivery::parse_delete(args),
        "mark-delivery" => delivery::parse_mark(args),
        "unmark-delivery" => delivery::parse_unmark(args),
        "list" => Ok(Command::List),
        "clear" => Ok(Command::Clear),
        "undo" => Ok(Command::Undo),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        _ => Err(CourierError::Parse(UNKNOWN_COMMAND.to_string())),
    }
}

/// Usage lines for every command, in help order.
pub fn usage_lines() -> Vec<&'static str> {
    vec![
        ADD_CLIENT_USAGE,
        ADD_DELIVERY_USAGE,
        FIND_CLIENT_USAGE,
        FIND_DELIVERY_USAGE,
        "list",
        EDIT_USAGE,
        DELETE_USAGE,
        DELETE_DELIVERY_USAGE,
        MARK_DELIVERY_USAGE,
        UNMARK_DELIVERY_USAGE,
        "clear",
        "undo",
        "help",
        "exit",
    ]
}

fn invalid_format(usage: &str) -> CourierError {
    CourierError::Parse(format!("Invalid command format.\nUsage: {}", usage))
}

fn field_error(err: FieldError) -> CourierError {
    CourierError::Parse(err.to_string())
}

fn require(tokens: &TokenizedArgs, prefixes: &[Prefix], usage: &str) -> Result<()> {
    for &prefix in prefixes {
        if tokens.count(prefix) == 0 {
            return Err(invalid_format(usage));
        }
    }
    Ok(())
}

fn reject_preamble(tokens: &TokenizedArgs, usage: &str) -> Result<()> {
    if tokens.preamble().is_empty() {
        Ok(())
    } else {
        Err(invalid_format(usage))
    }
}

fn reject_duplicates(tokens: &TokenizedArgs, prefixes: &[Prefix]) -> Result<()> {
    let repeated = tokens.duplicated(prefixes);
    if repeated.is_empty() {
        return Ok(());
    }
    let listed: Vec<String> = repeated.iter().map(Prefix::to_string).collect();
    Err(CourierError::Parse(format!(
        "Repeated prefixes are not allowed: {}",
        listed.join(" ")
    )))
}

/// Parses a 1-based index argument: digits only, no sign, at least 1.
fn parse_index(text: &str, usage: &str) -> Result<usize> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_format(usage));
    }
    match trimmed.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(invalid_format(usage)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_err(input: &str) -> String {
        match parse_command(input) {
            Err(CourierError::Parse(msg)) => msg,
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_keyword() {
        assert!(parse_err("frobnicate x/1").contains("Unknown command"));
        assert!(parse_err("").contains("Unknown command"));
    }

    #[test]
    fn test_keyword_matching_is_exact() {
        assert!(parse_err("LIST").contains("Unknown command"));
        assert!(parse_err("add-clients n/A").contains("Unknown command"));
    }

    #[test]
    fn test_bare_commands_tolerate_trailing_text() {
        assert_eq!(parse_command("list").unwrap(), Command::List);
        assert_eq!(parse_command("list everything").unwrap(), Command::List);
        assert_eq!(parse_command("  undo  ").unwrap(), Command::Undo);
        assert_eq!(parse_command("help me").unwrap(), Command::Help);
        assert_eq!(parse_command("clear").unwrap(), Command::Clear);
        assert_eq!(parse_command("exit").unwrap(), Command::Exit);
    }

    #[test]
    fn test_parse_index_rules() {
        assert_eq!(parse_index("3", "u").unwrap(), 3);
        assert_eq!(parse_index("  12 ", "u").unwrap(), 12);
        assert!(parse_index("0", "u").is_err());
        assert!(parse_index("-1", "u").is_err());
        assert!(parse_index("+1", "u").is_err());
        assert!(parse_index("1 2", "u").is_err());
        assert!(parse_index("abc", "u").is_err());
        assert!(parse_index("", "u").is_err());
    }

    #[test]
    fn test_invalid_format_carries_usage() {
        let err = invalid_format(DELETE_USAGE).to_string();
        assert!(err.starts_with("Invalid command format."));
        assert!(err.contains("Usage: delete INDEX"));
    }
}
