use crate::commands::{command_error, CmdMessage, CmdResult, DisplayClient};
use crate::error::Result;
use crate::model::{Book, Client};
use crate::undo::UndoStack;

pub fn run(book: &mut Book, undo: &mut UndoStack<Book>, client: Client) -> Result<CmdResult> {
    let snapshot = book.clone();
    book.add_client(client.clone())
        .map_err(|conflict| command_error(conflict.to_string()))?;
    undo.checkpoint(snapshot);

    let mut result = CmdResult::default()
        .mutated()
        .with_clients(vec![DisplayClient {
            position: book.clients().len(),
            client: client.clone(),
        }]);
    result.add_message(CmdMessage::success(format!(
        "New client added: {}",
        client.name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::sample_book;
    use crate::model::{Address, Email, Name, Phone};
    use crate::undo::UndoStack;
    use std::collections::BTreeSet;

    fn dana() -> Client {
        Client {
            name: Name::parse("Dana Soh").unwrap(),
            phone: Phone::parse("90001111").unwrap(),
            email: Email::parse("dana@example.com").unwrap(),
            address: Address::parse("5 Dover Rise").unwrap(),
            tags: BTreeSet::new(),
        }
    }

    #[test]
    fn adds_client_and_snapshots() {
        let mut book = sample_book();
        let mut undo = UndoStack::new(3);

        let result = run(&mut book, &mut undo, dana()).unwrap();

        assert!(result.mutated);
        assert_eq!(result.clients.len(), 1);
        assert_eq!(result.clients[0].position, 4);
        assert_eq!(book.clients().len(), 4);
        assert_eq!(undo.len(), 1);
        assert!(result.messages[0].content.contains("New client added"));
    }

    #[test]
    fn duplicate_client_fails_without_snapshot() {
        let mut book = sample_book();
        let mut undo = UndoStack::new(3);
        let existing = book.clients()[0].clone();

        let err = run(&mut book, &mut undo, existing).unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert_eq!(book.clients().len(), 3);
        assert!(undo.is_empty());
    }
}
