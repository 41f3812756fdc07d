use crate::commands::{counted, CmdMessage, CmdResult, DisplayDelivery};
use crate::error::Result;
use crate::model::Book;

/// Matches deliveries whose date was entered exactly as `date`. The match is
/// on the raw text, so `2/12/2026` and `02/12/2026` are different searches
/// even though they name the same day.
pub fn run(book: &Book, date: &str) -> Result<CmdResult> {
    let deliveries: Vec<DisplayDelivery> = book
        .deliveries_matching(|delivery| delivery.when.date_text() == date)
        .into_iter()
        .map(|(position, delivery)| DisplayDelivery {
            position,
            delivery: delivery.clone(),
        })
        .collect();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} found on {}",
        counted(deliveries.len(), "delivery", "deliveries"),
        date
    )));
    Ok(result.with_deliveries(deliveries))
}
