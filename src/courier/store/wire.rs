//! Serde types for the on-disk JSON document.
//!
//! The document has two top-level arrays, `persons` and `deliveries`.
//! Clients are saved in full; each delivery carries only a `{name, phone,
//! email}` reference that is resolved against the saved clients on load.
//! Every field goes back through its validating constructor, so a hand-edited
//! file that breaks a constraint is rejected rather than smuggled in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{CourierError, Result};
use crate::model::{
    Address, Book, Client, Cost, Delivery, DeliveryDateTime, Email, Name, Phone, Remark, Tag,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedBook {
    pub persons: Vec<SavedClient>,
    pub deliveries: Vec<SavedDelivery>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedClient {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Identity-only client reference embedded in a saved delivery.
#[derive(Debug, Serialize, Deserialize)]
pub struct SavedClientRef {
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedDelivery {
    pub id: u32,
    pub client: SavedClientRef,
    pub date: String,
    pub time: String,
    pub remark: String,
    pub cost: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub delivered: bool,
}

impl SavedBook {
    pub fn from_book(book: &Book) -> Self {
        Self {
            persons: book.clients().iter().map(SavedClient::from_client).collect(),
            deliveries: book
                .deliveries()
                .iter()
                .map(SavedDelivery::from_delivery)
                .collect(),
        }
    }

    /// Rebuilds a [`Book`], re-validating every record and re-checking the
    /// book invariants.
    pub fn into_book(self) -> Result<Book> {
        let mut book = Book::new();

        for saved in self.persons {
            let client = saved.into_client()?;
            book.add_client(client)
                .map_err(|conflict| store_error(format!("Bad client record: {}", conflict)))?;
        }

        for saved in self.deliveries {
            let id = saved.id;
            let delivery = saved.into_delivery(&book)?;
            book.add_delivery(delivery).map_err(|conflict| {
                store_error(format!("Bad delivery record {}: {}", id, conflict))
            })?;
        }

        Ok(book)
    }
}

impl SavedClient {
    fn from_client(client: &Client) -> Self {
        Self {
            name: client.name.as_str().to_string(),
            phone: client.phone.as_str().to_string(),
            email: client.email.as_str().to_string(),
            address: client.address.as_str().to_string(),
            tags: client.tags.iter().map(|t| t.as_str().to_string()).collect(),
        }
    }

    fn into_client(self) -> Result<Client> {
        let mut tags = BTreeSet::new();
        for raw in &self.tags {
            tags.insert(Tag::parse(raw).map_err(|e| bad_client(&self.name, e))?);
        }
        Ok(Client {
            name: Name::parse(&self.name).map_err(|e| bad_client(&self.name, e))?,
            phone: Phone::parse(&self.phone).map_err(|e| bad_client(&self.name, e))?,
            email: Email::parse(&self.email).map_err(|e| bad_client(&self.name, e))?,
            address: Address::parse(&self.address).map_err(|e| bad_client(&self.name, e))?,
            tags,
        })
    }
}

impl SavedDelivery {
    fn from_delivery(delivery: &Delivery) -> Self {
        Self {
            id: delivery.id,
            client: SavedClientRef {
                name: delivery.client.name.as_str().to_string(),
                phone: delivery.client.phone.as_str().to_string(),
                email: delivery.client.email.as_str().to_string(),
            },
            date: delivery.when.date_text().to_string(),
            time: delivery.when.time_text().to_string(),
            remark: delivery.remark.as_str().to_string(),
            cost: delivery.cost.to_string(),
            tag: delivery.tag.as_ref().map(|t| t.as_str().to_string()),
            delivered: delivery.delivered,
        }
    }

    fn into_delivery(self, book: &Book) -> Result<Delivery> {
        let client = book
            .clients()
            .iter()
            .find(|c| {
                c.name.as_str() == self.client.name
                    && c.phone.as_str() == self.client.phone
                    && c.email.as_str() == self.client.email
            })
            .cloned()
            .ok_or_else(|| {
                store_error(format!(
                    "Delivery record {} refers to a client that is not in the file",
                    self.id
                ))
            })?;

        let tag = match &self.tag {
            Some(raw) => Some(Tag::parse(raw).map_err(|e| bad_delivery(self.id, e))?),
            None => None,
        };

        Ok(Delivery {
            id: self.id,
            client,
            when: DeliveryDateTime::parse(&self.date, &self.time)
                .map_err(|e| bad_delivery(self.id, e))?,
            remark: Remark::parse(&self.remark).map_err(|e| bad_delivery(self.id, e))?,
            cost: Cost::parse(&self.cost).map_err(|e| bad_delivery(self.id, e))?,
            tag,
            delivered: self.delivered,
        })
    }
}

fn store_error(message: String) -> CourierError {
    CourierError::Store(message)
}

fn bad_client(name: &str, err: crate::model::FieldError) -> CourierError {
    store_error(format!("Bad client record '{}': {}", name, err))
}

fn bad_delivery(id: u32, err: crate::model::FieldError) -> CourierError {
    store_error(format!("Bad delivery record {}: {}", id, err))
}
