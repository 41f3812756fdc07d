//! The in-memory delivery book.
//!
//! `Book` owns every client and delivery and is the only place the
//! cross-record invariants are enforced:
//! - no two clients share an identity (name, phone, email)
//! - no two deliveries share a slot (client identity + datetime) or an id
//! - every delivery's client exists in the book
//!
//! Reads go through `clients_matching` / `deliveries_matching`, which hand
//! back 1-based positions in book order. Those positions are what users see
//! in listings and what the index-taking commands accept.

use thiserror::Error;

use super::client::Client;
use super::delivery::Delivery;
use super::fields::Name;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookConflict {
    #[error("This client already exists in the delivery book")]
    DuplicateClient,

    #[error("This delivery already exists in the delivery book")]
    DuplicateDelivery,

    #[error("No client with that name exists in the delivery book")]
    UnknownClient,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Book {
    clients: Vec<Client>,
    deliveries: Vec<Delivery>,
}

impl Book {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    pub fn contains_client(&self, client: &Client) -> bool {
        self.clients.iter().any(|c| c.same_identity(client))
    }

    /// Finds a client by exact name.
    pub fn client_named(&self, name: &Name) -> Option<&Client> {
        self.clients.iter().find(|c| c.name == *name)
    }

    /// The client at a 1-based position, if any.
    pub fn client_at(&self, position: usize) -> Option<&Client> {
        position.checked_sub(1).and_then(|i| self.clients.get(i))
    }

    /// The delivery at a 1-based position, if any.
    pub fn delivery_at(&self, position: usize) -> Option<&Delivery> {
        position.checked_sub(1).and_then(|i| self.deliveries.get(i))
    }

    pub fn add_client(&mut self, client: Client) -> Result<(), BookConflict> {
        if self.contains_client(&client) {
            return Err(BookConflict::DuplicateClient);
        }
        self.clients.push(client);
        Ok(())
    }

    pub fn add_delivery(&mut self, delivery: Delivery) -> Result<(), BookConflict> {
        if !self.contains_client(&delivery.client) {
            return Err(BookConflict::UnknownClient);
        }
        if self
            .deliveries
            .iter()
            .any(|d| d.same_slot(&delivery) || d.id == delivery.id)
        {
            return Err(BookConflict::DuplicateDelivery);
        }
        self.deliveries.push(delivery);
        Ok(())
    }

    /// Removes the client at a 1-based position together with all of that
    /// client's deliveries. Returns the client and the cascaded deliveries.
    pub fn remove_client(&mut self, position: usize) -> Option<(Client, Vec<Delivery>)> {
        let index = position.checked_sub(1)?;
        if index >= self.clients.len() {
            return None;
        }
        let client = self.clients.remove(index);
        let mut dropped = Vec::new();
        self.deliveries.retain(|d| {
            if d.client.same_identity(&client) {
                dropped.push(d.clone());
                false
            } else {
                true
            }
        });
        Some((client, dropped))
    }

    /// Replaces the client at a 1-based position and rewrites the embedded
    /// client value of that client's deliveries.
    pub fn set_client_at(
        &mut self,
        position: usize,
        replacement: Client,
    ) -> Result<(), BookConflict> {
        let index = match position.checked_sub(1) {
            Some(i) if i < self.clients.len() => i,
            _ => return Err(BookConflict::UnknownClient),
        };
        let clash = self
            .clients
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && c.same_identity(&replacement));
        if clash {
            return Err(BookConflict::DuplicateClient);
        }

        let old = std::mem::replace(&mut self.clients[index], replacement.clone());
        for delivery in &mut self.deliveries {
            if delivery.client.same_identity(&old) {
                delivery.client = replacement.clone();
            }
        }
        Ok(())
    }

    /// Removes the delivery at a 1-based position.
    pub fn remove_delivery(&mut self, position: usize) -> Option<Delivery> {
        let index = position.checked_sub(1)?;
        if index >= self.deliveries.len() {
            return None;
        }
        Some(self.deliveries.remove(index))
    }

    /// Sets the delivered flag of the delivery at a 1-based position and
    /// returns its id.
    pub fn mark_delivery_at(&mut self, position: usize, delivered: bool) -> Option<u32> {
        let index = position.checked_sub(1)?;
        let delivery = self.deliveries.get_mut(index)?;
        delivery.delivered = delivered;
        Some(delivery.id)
    }

    pub fn clear(&mut self) {
        self.clients.clear();
        self.deliveries.clear();
    }

    /// The id the next delivery should take, or `None` once the id space is
    /// exhausted.
    pub fn next_delivery_id(&self) -> Option<u32> {
        self.deliveries
            .iter()
            .map(|d| d.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1))
    }

    /// Clients satisfying `predicate`, paired with their 1-based positions.
    pub fn clients_matching<P>(&self, mut predicate: P) -> Vec<(usize, &Client)>
    where
        P: FnMut(&Client) -> bool,
    {
        self.clients
            .iter()
            .enumerate()
            .filter(|(_, c)| predicate(c))
            .map(|(i, c)| (i + 1, c))
            .collect()
    }

    /// Deliveries satisfying `predicate`, paired with their 1-based positions.
    pub fn deliveries_matching<P>(&self, mut predicate: P) -> Vec<(usize, &Delivery)>
    where
        P: FnMut(&Delivery) -> bool,
    {
        self.deliveries
            .iter()
            .enumerate()
            .filter(|(_, d)| predicate(d))
            .map(|(i, d)| (i + 1, d))
            .collect()
    }
}
