//! Argument parsers for the client commands.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::model::{Address, Client, ClientEdits, ClientQuery, Email, Name, Phone, Tag};

use super::syntax::{Prefix, ADDRESS, EMAIL, NAME, PHONE, TAG};
use super::tokenizer::{tokenize, TokenizedArgs};
use super::{
    field_error, invalid_format, parse_index, reject_duplicates, reject_preamble, require, Command,
    ADD_CLIENT_USAGE, DELETE_USAGE, EDIT_USAGE, FIND_CLIENT_USAGE,
};

const ADD_PREFIXES: [Prefix; 5] = [NAME, PHONE, EMAIL, ADDRESS, TAG];
const FIND_PREFIXES: [Prefix; 3] = [NAME, PHONE, EMAIL];

pub fn parse_add(args: &str) -> Result<Command> {
    let tokens = tokenize(args, &ADD_PREFIXES);
    reject_preamble(&tokens, ADD_CLIENT_USAGE)?;
    require(&tokens, &[NAME, PHONE, EMAIL, ADDRESS], ADD_CLIENT_USAGE)?;
    reject_duplicates(&tokens, &[NAME, PHONE, EMAIL, ADDRESS])?;

    let client = Client {
        name: Name::parse(tokens.value(NAME).unwrap_or_default()).map_err(field_error)?,
        phone: Phone::parse(tokens.value(PHONE).unwrap_or_default()).map_err(field_error)?,
        email: Email::parse(tokens.value(EMAIL).unwrap_or_default()).map_err(field_error)?,
        address: Address::parse(tokens.value(ADDRESS).unwrap_or_default()).map_err(field_error)?,
        tags: parse_tags(&tokens)?,
    };
    Ok(Command::AddClient { client })
}

pub fn parse_edit(args: &str) -> Result<Command> {
    let tokens = tokenize(args, &ADD_PREFIXES);
    let index = parse_index(tokens.preamble(), EDIT_USAGE)?;
    reject_duplicates(&tokens, &[NAME, PHONE, EMAIL, ADDRESS])?;

    let edits = ClientEdits {
        name: match tokens.value(NAME) {
            Some(value) => Some(Name::parse(value).map_err(field_error)?),
            None => None,
        },
        phone: match tokens.value(PHONE) {
            Some(value) => Some(Phone::parse(value).map_err(field_error)?),
            None => None,
        },
        email: match tokens.value(EMAIL) {
            Some(value) => Some(Email::parse(value).map_err(field_error)?),
            None => None,
        },
        address: match tokens.value(ADDRESS) {
            Some(value) => Some(Address::parse(value).map_err(field_error)?),
            None => None,
        },
        tags: parse_tags_for_edit(&tokens)?,
    };
    if edits.is_empty() {
        return Err(invalid_format(EDIT_USAGE));
    }
    Ok(Command::EditClient { index, edits })
}

pub fn parse_delete(args: &str) -> Result<Command> {
    let index = parse_index(args, DELETE_USAGE)?;
    Ok(Command::DeleteClient { index })
}

pub fn parse_find(args: &str) -> Result<Command> {
    let tokens = tokenize(args, &FIND_PREFIXES);
    reject_preamble(&tokens, FIND_CLIENT_USAGE)?;
    reject_duplicates(&tokens, &FIND_PREFIXES)?;

    let query = ClientQuery {
        name: query_term(&tokens, NAME),
        phone: query_term(&tokens, PHONE),
        email: query_term(&tokens, EMAIL),
    };
    if query.is_empty() {
        return Err(invalid_format(FIND_CLIENT_USAGE));
    }
    Ok(Command::FindClient { query })
}

fn parse_tags(tokens: &TokenizedArgs) -> Result<BTreeSet<Tag>> {
    let mut tags = BTreeSet::new();
    for value in tokens.all(TAG) {
        tags.insert(Tag::parse(value).map_err(field_error)?);
    }
    Ok(tags)
}

/// Tag handling for `edit`: absent means leave tags alone, a single empty
/// `t/` clears them, anything else replaces them wholesale.
fn parse_tags_for_edit(tokens: &TokenizedArgs) -> Result<Option<BTreeSet<Tag>>> {
    let values = tokens.all(TAG);
    if values.is_empty() {
        return Ok(None);
    }
    if values.len() == 1 && values[0].trim().is_empty() {
        return Ok(Some(BTreeSet::new()));
    }
    let mut tags = BTreeSet::new();
    for value in values {
        tags.insert(Tag::parse(value).map_err(field_error)?);
    }
    Ok(Some(tags))
}

/// A blank search term is treated as absent rather than matching everything.
fn query_term(tokens: &TokenizedArgs, prefix: Prefix) -> Option<String> {
    match tokens.value(prefix) {
        Some(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CourierError;
    use crate::parse::parse_command;

    fn parse_err(input: &str) -> String {
        match parse_command(input) {
            Err(CourierError::Parse(msg)) => msg,
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_add_client_full() {
        let cmd = parse_command(
            "add-client n/Alex Yeoh p/87438807 e/alexyeoh@example.com a/Blk 30 Geylang Street 29 t/vip t/corporate",
        )
        .unwrap();
        match cmd {
            Command::AddClient { client } => {
                assert_eq!(client.name.as_str(), "Alex Yeoh");
                assert_eq!(client.phone.as_str(), "87438807");
                assert_eq!(client.email.as_str(), "alexyeoh@example.com");
                assert_eq!(client.address.as_str(), "Blk 30 Geylang Street 29");
                let tags: Vec<&str> = client.tags.iter().map(Tag::as_str).collect();
                assert_eq!(tags, vec!["corporate", "vip"]);
            }
            other => panic!("expected AddClient, got {:?}", other),
        }
    }

    #[test]
    fn test_add_client_order_does_not_matter() {
        let cmd =
            parse_command("add-client a/12 Kent Ridge Dr e/b@example.com p/999 n/Bea").unwrap();
        match cmd {
            Command::AddClient { client } => {
                assert_eq!(client.name.as_str(), "Bea");
                assert_eq!(client.address.as_str(), "12 Kent Ridge Dr");
            }
            other => panic!("expected AddClient, got {:?}", other),
        }
    }

    #[test]
    fn test_add_client_missing_field_is_invalid_format() {
        let msg = parse_err("add-client n/Alex p/999 e/a@example.com");
        assert!(msg.contains("Invalid command format."));
        assert!(msg.contains(ADD_CLIENT_USAGE));
    }

    #[test]
    fn test_add_client_preamble_is_invalid_format() {
        let msg = parse_err("add-client oops n/Alex p/999 e/a@example.com a/Somewhere");
        assert!(msg.contains("Invalid command format."));
    }

    #[test]
    fn test_add_client_bad_phone_reports_constraint() {
        let msg = parse_err("add-client n/Alex p/98x e/a@example.com a/Somewhere");
        assert!(msg.contains("Phone numbers should only contain digits"));
    }

    #[test]
    fn test_add_client_duplicate_prefix_rejected() {
        let msg = parse_err("add-client n/Alex n/Bea p/999 e/a@example.com a/Somewhere");
        assert!(msg.contains("Repeated prefixes are not allowed: n/"));
    }

    #[test]
    fn test_edit_single_field() {
        let cmd = parse_command("edit 2 p/91234567").unwrap();
        match cmd {
            Command::EditClient { index, edits } => {
                assert_eq!(index, 2);
                assert_eq!(edits.phone.unwrap().as_str(), "91234567");
                assert!(edits.name.is_none());
                assert!(edits.tags.is_none());
            }
            other => panic!("expected EditClient, got {:?}", other),
        }
    }

    #[test]
    fn test_edit_clear_tags() {
        let cmd = parse_command("edit 1 t/").unwrap();
        match cmd {
            Command::EditClient { edits, .. } => {
                assert_eq!(edits.tags, Some(BTreeSet::new()));
            }
            other => panic!("expected EditClient, got {:?}", other),
        }
    }

    #[test]
    fn test_edit_replaces_tags() {
        let cmd = parse_command("edit 1 t/vip t/fragile").unwrap();
        match cmd {
            Command::EditClient { edits, .. } => {
                let tags = edits.tags.unwrap();
                let tags: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
                assert_eq!(tags, vec!["fragile", "vip"]);
            }
            other => panic!("expected EditClient, got {:?}", other),
        }
    }

    #[test]
    fn test_edit_requires_index_and_a_field() {
        assert!(parse_err("edit p/999").contains("Invalid command format."));
        assert!(parse_err("edit 0 p/999").contains("Invalid command format."));
        assert!(parse_err("edit 2").contains("Invalid command format."));
    }

    #[test]
    fn test_delete_parses_index() {
        assert_eq!(
            parse_command("delete 3").unwrap(),
            Command::DeleteClient { index: 3 }
        );
        assert!(parse_err("delete three").contains(DELETE_USAGE));
    }

    #[test]
    fn test_find_client_terms() {
        let cmd = parse_command("find-client n/alex p/8743").unwrap();
        match cmd {
            Command::FindClient { query } => {
                assert_eq!(query.name.as_deref(), Some("alex"));
                assert_eq!(query.phone.as_deref(), Some("8743"));
                assert!(query.email.is_none());
            }
            other => panic!("expected FindClient, got {:?}", other),
        }
    }

    #[test]
    fn test_find_client_requires_a_term() {
        assert!(parse_err("find-client").contains(FIND_CLIENT_USAGE));
        assert!(parse_err("find-client n/").contains(FIND_CLIENT_USAGE));
        assert!(parse_err("find-client alex").contains("Invalid command format."));
    }
}
