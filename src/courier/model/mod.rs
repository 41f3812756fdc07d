//! Core data types for the delivery book.
//!
//! Every field a user can type is a validated value object with a
//! `parse(&str) -> Result<Self, FieldError>` constructor. Construction is the
//! only way to obtain one, so a `Name` or `Cost` held anywhere in the program
//! is known to be well formed. The [`Book`] aggregate owns the clients and
//! deliveries and enforces the cross-record invariants (no duplicate
//! identities, no delivery without its client).

use thiserror::Error;

pub mod book;
pub mod client;
pub mod datetime;
pub mod delivery;
pub mod fields;
pub mod sample;
pub mod tag;

pub use book::{Book, BookConflict};
pub use client::{Client, ClientEdits, ClientQuery};
pub use datetime::DeliveryDateTime;
pub use delivery::Delivery;
pub use fields::{Address, Cost, Email, Name, Phone, Remark};
pub use tag::{Tag, TagCategory};

/// A field value failed validation. The display string is the constraint
/// message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Names should only contain alphanumeric characters and spaces, and should not be blank")]
    Name,

    #[error("Phone numbers should only contain digits, and should be at least 3 digits long")]
    Phone,

    #[error("Emails should be of the format local-part@domain, e.g. alice@example.com")]
    Email,

    #[error("Addresses can take any value, and should not be blank")]
    Address,

    #[error("Remarks can take any value, and should not be blank")]
    Remark,

    #[error("Costs should be a non-negative amount with at most two decimal places, e.g. 12 or 7.50")]
    Cost,

    #[error("Tag names should be alphanumeric")]
    Tag,

    #[error("Dates should use the d/M/yyyy format and be a real calendar date, e.g. 2/12/2019")]
    Date,

    #[error("Times should use the 24-hour HHmm format, e.g. 1800")]
    Time,
}
