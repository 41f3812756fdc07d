//! The prefix vocabulary of the command language.

use std::fmt;

/// A prefix token such as `n/` that introduces an argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn token(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const NAME: Prefix = Prefix("n/");
pub const PHONE: Prefix = Prefix("p/");
pub const EMAIL: Prefix = Prefix("e/");
pub const ADDRESS: Prefix = Prefix("a/");
pub const DATE: Prefix = Prefix("d/");
pub const TIME: Prefix = Prefix("tm/");
pub const REMARK: Prefix = Prefix("r/");
pub const COST: Prefix = Prefix("c/");
pub const TAG: Prefix = Prefix("t/");
