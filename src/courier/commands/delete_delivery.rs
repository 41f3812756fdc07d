use crate::commands::{command_error, CmdMessage, CmdResult, INVALID_DELIVERY_INDEX};
use crate::error::Result;
use crate::model::Book;
use crate::undo::UndoStack;

pub fn run(book: &mut Book, undo: &mut UndoStack<Book>, index: usize) -> Result<CmdResult> {
    let snapshot = book.clone();
    let delivery = book
        .remove_delivery(index)
        .ok_or_else(|| command_error(INVALID_DELIVERY_INDEX))?;
    undo.checkpoint(snapshot);

    let mut result = CmdResult::default().mutated();
    result.add_message(CmdMessage::success(format!(
        "Deleted delivery for {}: {}",
        delivery.client.name, delivery.when
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::sample_book;
    use crate::undo::UndoStack;

    #[test]
    fn deletes_by_position() {
        let mut book = sample_book();
        let mut undo = UndoStack::new(3);

        let result = run(&mut book, &mut undo, 2).unwrap();

        assert!(result.mutated);
        assert_eq!(book.deliveries().len(), 1);
        assert_eq!(book.deliveries()[0].id, 1);
        assert!(result.messages[0]
            .content
            .contains("Deleted delivery for Bernice Yu: 20 March 2026 1400hrs"));
        assert_eq!(undo.len(), 1);
    }

    #[test]
    fn deleting_a_delivery_keeps_the_client() {
        let mut book = sample_book();
        let mut undo = UndoStack::new(3);

        run(&mut book, &mut undo, 1).unwrap();

        assert_eq!(book.clients().len(), 3);
    }

    #[test]
    fn bad_index_fails_without_snapshot() {
        let mut book = sample_book();
        let mut undo = UndoStack::new(3);

        let err = run(&mut book, &mut undo, 3).unwrap_err();

        assert!(err.to_string().contains(INVALID_DELIVERY_INDEX));
        assert_eq!(book.deliveries().len(), 2);
        assert!(undo.is_empty());
    }
}
