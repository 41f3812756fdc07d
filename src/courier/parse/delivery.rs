//! Argument parsers for the delivery commands.

use crate::error::Result;
use crate::model::{Cost, DeliveryDateTime, Name, Remark, Tag};

use super::syntax::{Prefix, COST, DATE, NAME, REMARK, TAG, TIME};
use super::tokenizer::tokenize;
use super::{
    field_error, invalid_format, parse_index, reject_duplicates, reject_preamble, require, Command,
    ADD_DELIVERY_USAGE, DELETE_DELIVERY_USAGE, FIND_DELIVERY_USAGE, MARK_DELIVERY_USAGE,
    UNMARK_DELIVERY_USAGE,
};

const ADD_PREFIXES: [Prefix; 6] = [NAME, DATE, TIME, REMARK, COST, TAG];

pub fn parse_add(args: &str) -> Result<Command> {
    let tokens = tokenize(args, &ADD_PREFIXES);
    reject_preamble(&tokens, ADD_DELIVERY_USAGE)?;
    require(&tokens, &[NAME, DATE, TIME, REMARK, COST], ADD_DELIVERY_USAGE)?;
    reject_duplicates(&tokens, &ADD_PREFIXES)?;

    let client_name = Name::parse(tokens.value(NAME).unwrap_or_default()).map_err(field_error)?;
    let when = DeliveryDateTime::parse(
        tokens.value(DATE).unwrap_or_default(),
        tokens.value(TIME).unwrap_or_default(),
    )
    .map_err(field_error)?;
    let remark = Remark::parse(tokens.value(REMARK).unwrap_or_default()).map_err(field_error)?;
    let cost = Cost::parse(tokens.value(COST).unwrap_or_default()).map_err(field_error)?;
    let tag = match tokens.value(TAG) {
        Some(value) => Some(Tag::parse(value).map_err(field_error)?),
        None => None,
    };

    Ok(Command::AddDelivery {
        client_name,
        when,
        remark,
        cost,
        tag,
    })
}

pub fn parse_find(args: &str) -> Result<Command> {
    let date = args.trim();
    if date.is_empty() {
        return Err(invalid_format(FIND_DELIVERY_USAGE));
    }
    DeliveryDateTime::validate_date(date).map_err(field_error)?;
    Ok(Command::FindDelivery {
        date: date.to_string(),
    })
}

pub fn parse_delete(args: &str) -> Result<Command> {
    let index = parse_index(args, DELETE_DELIVERY_USAGE)?;
    Ok(Command::DeleteDelivery { index })
}

pub fn parse_mark(args: &str) -> Result<Command> {
    let index = parse_index(args, MARK_DELIVERY_USAGE)?;
    Ok(Command::MarkDelivered { index })
}

pub fn parse_unmark(args: &str) -> Result<Command> {
    let index = parse_index(args, UNMARK_DELIVERY_USAGE)?;
    Ok(Command::UnmarkDelivered { index })
}
