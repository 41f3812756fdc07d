//! Shared executor for `mark-delivery` and `unmark-delivery`.

use crate::commands::{command_error, CmdMessage, CmdResult, DisplayDelivery, INVALID_DELIVERY_INDEX};
use crate::error::Result;
use crate::model::Book;
use crate::undo::UndoStack;

pub fn run(
    book: &mut Book,
    undo: &mut UndoStack<Book>,
    index: usize,
    delivered: bool,
) -> Result<CmdResult> {
    let existing = book
        .delivery_at(index)
        .cloned()
        .ok_or_else(|| command_error(INVALID_DELIVERY_INDEX))?;
    if existing.delivered == delivered {
        let message = if delivered {
            "This delivery is already marked as delivered"
        } else {
            "This delivery is not marked as delivered"
        };
        return Err(command_error(message));
    }

    let snapshot = book.clone();
    book.mark_delivery_at(index, delivered)
        .ok_or_else(|| command_error(INVALID_DELIVERY_INDEX))?;
    undo.checkpoint(snapshot);

    let mut updated = existing;
    updated.delivered = delivered;
    let mut result = CmdResult::default()
        .mutated()
        .with_deliveries(vec![DisplayDelivery {
            position: index,
            delivery: updated.clone(),
        }]);
    result.add_message(CmdMessage::success(format!(
        "Marked delivery as {}: {}, {}",
        if delivered { "delivered" } else { "not delivered" },
        updated.client.name,
        updated.when
    )));
    Ok(result)
}
