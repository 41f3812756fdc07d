//! Starter data for first runs, before anything has been saved.

use std::collections::BTreeSet;

use super::book::Book;
use super::client::Client;
use super::datetime::DeliveryDateTime;
use super::delivery::Delivery;
use super::fields::{Address, Cost, Email, Name, Phone, Remark};
use super::tag::Tag;

/// A small book with a few clients and deliveries, used when no data file
/// exists yet so the first session has something to look at.
pub fn sample_book() -> Book {
    build().expect("sample data is valid")
}

fn build() -> Option<Book> {
    let mut book = Book::new();

    let alex = client(
        "Alex Yeoh",
        "87438807",
        "alexyeoh@example.com",
        "Blk 30 Geylang Street 29, #06-40",
        &["corporate"],
    )?;
    let bernice = client(
        "Bernice Yu",
        "99272758",
        "berniceyu@example.com",
        "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        &["personal"],
    )?;
    let charlotte = client(
        "Charlotte Oliveiro",
        "93210283",
        "charlotte@example.com",
        "Blk 11 Ang Mo Kio Street 74, #11-04",
        &[],
    )?;

    book.add_client(alex.clone()).ok()?;
    book.add_client(bernice.clone()).ok()?;
    book.add_client(charlotte).ok()?;

    book.add_delivery(Delivery {
        id: 1,
        client: alex,
        when: DeliveryDateTime::parse("14/2/2026", "0930").ok()?,
        remark: Remark::parse("Two parcels, call on arrival").ok()?,
        cost: Cost::parse("12.50").ok()?,
        tag: Some(Tag::parse("corporate").ok()?),
        delivered: false,
    })
    .ok()?;
    book.add_delivery(Delivery {
        id: 2,
        client: bernice,
        when: DeliveryDateTime::parse("20/3/2026", "1400").ok()?,
        remark: Remark::parse("Birthday cake, keep upright").ok()?,
        cost: Cost::parse("7.00").ok()?,
        tag: None,
        delivered: false,
    })
    .ok()?;

    Some(book)
}

fn client(name: &str, phone: &str, email: &str, address: &str, tags: &[&str]) -> Option<Client> {
    let mut tag_set = BTreeSet::new();
    for raw in tags {
        tag_set.insert(Tag::parse(raw).ok()?);
    }
    Some(Client {
        name: Name::parse(name).ok()?,
        phone: Phone::parse(phone).ok()?,
        email: Email::parse(email).ok()?,
        address: Address::parse(address).ok()?,
        tags: tag_set,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_book_builds() {
        let book = sample_book();
        assert_eq!(book.clients().len(), 3);
        assert_eq!(book.deliveries().len(), 2);
    }

    #[test]
    fn test_sample_ids_leave_room_for_new_deliveries() {
        let book = sample_book();
        assert_eq!(book.next_delivery_id(), Some(3));
    }
}
