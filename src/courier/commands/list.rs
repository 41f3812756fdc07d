use crate::commands::{counted, CmdMessage, CmdResult, DisplayClient, DisplayDelivery};
use crate::error::Result;
use crate::model::Book;

pub fn run(book: &Book) -> Result<CmdResult> {
    let clients: Vec<DisplayClient> = book
        .clients_matching(|_| true)
        .into_iter()
        .map(|(position, client)| DisplayClient {
            position,
            client: client.clone(),
        })
        .collect();
    let deliveries: Vec<DisplayDelivery> = book
        .deliveries_matching(|_| true)
        .into_iter()
        .map(|(position, delivery)| DisplayDelivery {
            position,
            delivery: delivery.clone(),
        })
        .collect();

    let mut result = CmdResult::default();
    if clients.is_empty() && deliveries.is_empty() {
        result.add_message(CmdMessage::info("The delivery book is empty"));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Listing {} and {}",
            counted(clients.len(), "client", "clients"),
            counted(deliveries.len(), "delivery", "deliveries")
        )));
    }
    Ok(result.with_clients(clients).with_deliveries(deliveries))
}
