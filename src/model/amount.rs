//! Amount type for monetary values entered by hand.
//!
//! This module provides the `Amount` type which wraps `Decimal` and handles
//! parsing values that may or may not include a dollar sign and commas.

use crate::model::Kind;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// Represents a dollar amount.
///
/// This type wraps `Decimal`, so an amount is always a finite numeric value.
/// Parsing accepts an optional dollar sign and comma thousands separators;
/// equality and ordering compare numeric values only.
///
/// # Examples
///
/// ```
/// # use pocket_ledger::model::Amount;
/// # use std::str::FromStr;
/// let a = Amount::from_str("-$1,234.5").unwrap();
/// let b = Amount::from_str("-1234.50").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "-$1,234.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Creates a new Amount from a Decimal value.
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.0.is_sign_positive()
    }

    /// Returns true if the amount is negative. Negative zero is not negative.
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.0.is_sign_negative()
    }

    /// The classification derived from the sign: `Expense` when negative,
    /// `Income` when zero or positive.
    pub fn kind(&self) -> Kind {
        if self.is_negative() {
            Kind::Expense
        } else {
            Kind::Income
        }
    }

    /// Returns the absolute value of the amount.
    pub fn abs(&self) -> Amount {
        Amount(self.0.abs())
    }

    /// The value rounded to two decimal places, half-up.
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// An error that can occur when parsing a string into an `Amount`.
pub struct AmountError(String);

impl Debug for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl std::error::Error for AmountError {}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(AmountError(String::from("an amount cannot be empty")));
        }

        // Remove a dollar sign if present, which may follow a minus sign
        let without_dollar = if let Some(after_minus) = trimmed.strip_prefix('-') {
            if let Some(after_dollar) = after_minus.strip_prefix('$') {
                format!("-{after_dollar}")
            } else {
                trimmed.to_string()
            }
        } else if let Some(after_dollar) = trimmed.strip_prefix('$') {
            after_dollar.to_string()
        } else {
            trimmed.to_string()
        };

        // Remove commas (thousand separators)
        let without_commas = without_dollar.replace(',', "");

        let value = Decimal::from_str(&without_commas)
            .map_err(|e| AmountError(format!("'{trimmed}' is not a number: {e}")))?;
        Ok(Amount(value))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded();
        let (sign, num) = if rounded.is_sign_negative() && !rounded.is_zero() {
            ("-", rounded.abs())
        } else {
            ("", rounded)
        };

        write!(
            f,
            "{sign}${}",
            format_num::format_num!(",.2", num.to_f64().unwrap_or_default())
        )
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // The ledger file stores amounts as JSON numbers. Going through
        // `serde_json::Number` keeps every digit of the decimal value, where
        // an `f64` would silently round long amounts.
        serde_json::Number::from_string_unchecked(self.0.to_string()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // With `arbitrary_precision`, a JSON number carries its full digit
        // string, so both branches parse through `Amount::from_str` without
        // loss. Strings are accepted so hand-edited values like "$1,000.00"
        // keep working.
        let value = serde_json::Value::deserialize(deserializer)?;
        match &value {
            serde_json::Value::Number(n) => {
                Amount::from_str(&n.to_string()).map_err(de::Error::custom)
            }
            serde_json::Value::String(s) => Amount::from_str(s).map_err(de::Error::custom),
            _ => Err(de::Error::custom(format!(
                "expected a number or a numeric string, found {value}"
            ))),
        }
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::default(), Add::add)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}
