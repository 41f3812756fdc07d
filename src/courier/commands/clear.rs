use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::undo::UndoStack;

pub fn run(book: &mut Book, undo: &mut UndoStack<Book>) -> Result<CmdResult> {
    let snapshot = book.clone();
    book.clear();
    undo.checkpoint(snapshot);

    let mut result = CmdResult::default().mutated();
    result.add_message(CmdMessage::success("Delivery book has been cleared"));
    Ok(result)
}
