//! Clients and the two helper shapes commands use to talk about them:
//! [`ClientQuery`] for searching and [`ClientEdits`] for partial updates.

use std::collections::BTreeSet;

use super::fields::{Address, Email, Name, Phone};
use super::tag::Tag;

/// A client of the courier business.
///
/// Clients are immutable values; editing one means building a replacement
/// with [`ClientEdits::apply`] and swapping it into the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub tags: BTreeSet<Tag>,
}

impl Client {
    /// Identity is the (name, phone, email) triple. Address and tags can
    /// change without making this a different client.
    pub fn same_identity(&self, other: &Client) -> bool {
        self.name == other.name && self.phone == other.phone && self.email == other.email
    }
}

/// Search criteria for clients. Every supplied field must match
/// (substring, case-insensitive except phone); omitted fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientQuery {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ClientQuery {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }

    pub fn matches(&self, client: &Client) -> bool {
        if let Some(name) = &self.name {
            if !client
                .name
                .as_str()
                .to_lowercase()
                .contains(&name.to_lowercase())
            {
                return false;
            }
        }
        if let Some(phone) = &self.phone {
            if !client.phone.as_str().contains(phone.as_str()) {
                return false;
            }
        }
        if let Some(email) = &self.email {
            if !client
                .email
                .as_str()
                .to_lowercase()
                .contains(&email.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// A partial update: `None` fields keep the current value, `Some` fields
/// replace it. An explicit `Some(empty set)` for tags clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientEdits {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl ClientEdits {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.tags.is_none()
    }

    pub fn apply(&self, base: &Client) -> Client {
        Client {
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| base.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| base.email.clone()),
            address: self.address.clone().unwrap_or_else(|| base.address.clone()),
            tags: self.tags.clone().unwrap_or_else(|| base.tags.clone()),
        }
    }
}
