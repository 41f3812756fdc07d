use super::client::Client;
use super::datetime::DeliveryDateTime;
use super::fields::{Cost, Remark};
use super::tag::Tag;

/// A scheduled delivery for one client.
///
/// The client is embedded by value. When the client record is edited the book
/// rewrites the embedded copy, so a delivery always shows the client as they
/// currently stand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Unique within one book; assigned from `Book::next_delivery_id`.
    pub id: u32,
    pub client: Client,
    pub when: DeliveryDateTime,
    pub remark: Remark,
    pub cost: Cost,
    pub tag: Option<Tag>,
    pub delivered: bool,
}

impl Delivery {
    /// Two deliveries occupy the same slot when they are for the same client
    /// at the same date and time. The book rejects the second one.
    pub fn same_slot(&self, other: &Delivery) -> bool {
        self.client.same_identity(&other.client) && self.when == other.when
    }
}
