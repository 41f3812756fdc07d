use crate::commands::{command_error, counted, CmdMessage, CmdResult, INVALID_CLIENT_INDEX};
use crate::error::Result;
use crate::model::Book;
use crate::undo::UndoStack;

pub fn run(book: &mut Book, undo: &mut UndoStack<Book>, index: usize) -> Result<CmdResult> {
    let snapshot = book.clone();
    let (client, dropped) = book
        .remove_client(index)
        .ok_or_else(|| command_error(INVALID_CLIENT_INDEX))?;
    undo.checkpoint(snapshot);

    let mut result = CmdResult::default().mutated();
    result.add_message(CmdMessage::success(format!(
        "Deleted client: {}",
        client.name
    )));
    if !dropped.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Also removed {} for this client",
            counted(dropped.len(), "delivery", "deliveries")
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::sample_book;
    use crate::undo::UndoStack;

    #[test]
    fn deletes_client_and_cascades() {
        let mut book = sample_book();
        let mut undo = UndoStack::new(3);

        let result = run(&mut book, &mut undo, 1).unwrap();

        assert!(result.mutated);
        assert_eq!(book.clients().len(), 2);
        assert_eq!(book.deliveries().len(), 1);
        assert!(result.messages[0].content.contains("Deleted client: Alex Yeoh"));
        assert!(result.messages[1].content.contains("Also removed 1 delivery"));
        assert_eq!(undo.len(), 1);
    }

    #[test]
    fn delete_without_deliveries_has_no_cascade_note() {
        let mut book = sample_book();
        let mut undo = UndoStack::new(3);

        let result = run(&mut book, &mut undo, 3).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(book.deliveries().len(), 2);
    }

    #[test]
    fn bad_index_fails_without_snapshot() {
        let mut book = sample_book();
        let mut undo = UndoStack::new(3);

        let err = run(&mut book, &mut undo, 4).unwrap_err();

        assert!(err.to_string().contains(INVALID_CLIENT_INDEX));
        assert_eq!(book.clients().len(), 3);
        assert!(undo.is_empty());
    }
}
