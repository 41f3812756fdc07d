use crate::commands::{command_error, CmdMessage, CmdResult, DisplayClient, INVALID_CLIENT_INDEX};
use crate::error::Result;
use crate::model::{Book, ClientEdits};
use crate::undo::UndoStack;

pub fn run(
    book: &mut Book,
    undo: &mut UndoStack<Book>,
    index: usize,
    edits: &ClientEdits,
) -> Result<CmdResult> {
    let existing = book
        .client_at(index)
        .cloned()
        .ok_or_else(|| command_error(INVALID_CLIENT_INDEX))?;
    let updated = edits.apply(&existing);

    let snapshot = book.clone();
    book.set_client_at(index, updated.clone())
        .map_err(|conflict| command_error(conflict.to_string()))?;
    undo.checkpoint(snapshot);

    let mut result = CmdResult::default()
        .mutated()
        .with_clients(vec![DisplayClient {
            position: index,
            client: updated.clone(),
        }]);
    result.add_message(CmdMessage::success(format!(
        "Edited client: {}",
        updated.name
    )));
    Ok(result)
}
