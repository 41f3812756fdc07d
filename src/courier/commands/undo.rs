use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CourierError, Result};
use crate::model::Book;
use crate::undo::UndoStack;

pub fn run(book: &mut Book, undo: &mut UndoStack<Book>) -> Result<CmdResult> {
    let previous = undo.undo().ok_or(CourierError::UndoExhausted)?;
    *book = previous;

    let mut result = CmdResult::default().mutated();
    result.add_message(CmdMessage::success("Undid the last change"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{clear, delete_client};
    use crate::model::sample::sample_book;
    use crate::undo::UndoStack;

    #[test]
    fn restores_the_previous_book() {
        let mut book = sample_book();
        let mut undo = UndoStack::new(3);

        delete_client::run(&mut book, &mut undo, 1).unwrap();
        assert_eq!(book.clients().len(), 2);

        let result = run(&mut book, &mut undo).unwrap();

        assert!(result.mutated);
        assert_eq!(book.clients().len(), 3);
        assert_eq!(book.deliveries().len(), 2);
        assert!(undo.is_empty());
    }

    #[test]
    fn undo_with_no_history_is_an_error() {
        let mut book = sample_book();
        let mut undo = UndoStack::new(3);

        let err = run(&mut book, &mut undo).unwrap_err();
        assert!(matches!(err, CourierError::UndoExhausted));
        assert_eq!(err.to_string(), "No more undo history");
    }

    #[test]
    fn undo_steps_back_through_successive_changes() {
        let mut book = sample_book();
        let mut undo = UndoStack::new(3);

        delete_client::run(&mut book, &mut undo, 3).unwrap();
        clear::run(&mut book, &mut undo).unwrap();
        assert!(book.clients().is_empty());

        run(&mut book, &mut undo).unwrap();
        assert_eq!(book.clients().len(), 2);

        run(&mut book, &mut undo).unwrap();
        assert_eq!(book.clients().len(), 3);

        assert!(run(&mut book, &mut undo).is_err());
    }
}
