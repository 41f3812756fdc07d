use crate::commands::{command_error, CmdMessage, CmdResult, DisplayDelivery};
use crate::error::Result;
use crate::model::{Book, BookConflict, Cost, Delivery, DeliveryDateTime, Name, Remark, Tag};
use crate::undo::UndoStack;

const DELIVERY_IDS_EXHAUSTED: &str = "The delivery book has run out of delivery ids";

pub fn run(
    book: &mut Book,
    undo: &mut UndoStack<Book>,
    client_name: &Name,
    when: DeliveryDateTime,
    remark: Remark,
    cost: Cost,
    tag: Option<Tag>,
) -> Result<CmdResult> {
    let client = book
        .client_named(client_name)
        .cloned()
        .ok_or_else(|| command_error(BookConflict::UnknownClient.to_string()))?;
    let id = book
        .next_delivery_id()
        .ok_or_else(|| command_error(DELIVERY_IDS_EXHAUSTED))?;

    let delivery = Delivery {
        id,
        client,
        when,
        remark,
        cost,
        tag,
        delivered: false,
    };

    let snapshot = book.clone();
    book.add_delivery(delivery.clone())
        .map_err(|conflict| command_error(conflict.to_string()))?;
    undo.checkpoint(snapshot);

    let mut result = CmdResult::default()
        .mutated()
        .with_deliveries(vec![DisplayDelivery {
            position: book.deliveries().len(),
            delivery: delivery.clone(),
        }]);
    result.add_message(CmdMessage::success(format!(
        "New delivery added for {}: {}",
        delivery.client.name, delivery.when
    )));
    Ok(result)
}
