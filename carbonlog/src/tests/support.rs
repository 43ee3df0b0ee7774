use crate::{resolve_unit, Quantity};
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

pub fn qty(value: &str, unit: &str) -> Quantity {
    Quantity::new(dec(value), resolve_unit(unit).unwrap())
}

pub fn number(value: &str) -> Quantity {
    Quantity::dimensionless(dec(value))
}
