//! Money type for representing prices.
//!
//! Amounts are integer hundredths of the major unit (paise, cents) to avoid
//! floating-point drift when multiplying prices by quantities. On the wire
//! a price is a plain JSON number in major units (`20`, `49.5`), which is
//! how the storefront page has always stored it.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Minor units per major unit.
const MINOR_PER_MAJOR: i64 = 100;

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
    AUD,
    CAD,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::AUD => "A$",
            Currency::CAD => "CA$",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "AUD" => Some(Currency::AUD),
            "CAD" => Some(Currency::CAD),
            _ => None,
        }
    }

    /// Format an amount with this currency's symbol (e.g., "₹40").
    pub fn format(&self, money: Money) -> String {
        format!("{}{}", self.symbol(), money.display_amount())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A non-negative price or total, in hundredths of the major unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    amount_minor: i64,
}

impl Money {
    /// Zero.
    pub const ZERO: Money = Money { amount_minor: 0 };

    /// Create a value from minor units. Negative input clamps to zero.
    pub fn from_minor(amount_minor: i64) -> Self {
        Self {
            amount_minor: amount_minor.max(0),
        }
    }

    /// Create a value from whole major units (e.g., rupees).
    pub fn from_major(amount: i64) -> Self {
        Self::from_minor(amount.saturating_mul(MINOR_PER_MAJOR))
    }

    /// Create a value from a decimal amount in major units.
    ///
    /// Returns `None` for NaN, infinities and negative amounts.
    ///
    /// ```
    /// use storecart_core::money::Money;
    /// let price = Money::from_decimal(49.99).unwrap();
    /// assert_eq!(price.amount_minor(), 4999);
    /// assert!(Money::from_decimal(-1.0).is_none());
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let minor = (amount * MINOR_PER_MAJOR as f64).round();
        if minor > i64::MAX as f64 {
            return None;
        }
        Some(Self::from_minor(minor as i64))
    }

    /// Amount in minor units.
    pub fn amount_minor(&self) -> i64 {
        self.amount_minor
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Convert to a decimal value in major units.
    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / MINOR_PER_MAJOR as f64
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn try_multiply(&self, quantity: u32) -> Option<Money> {
        self.amount_minor
            .checked_mul(i64::from(quantity))
            .map(Money::from_minor)
    }

    /// Add, returning `None` on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(Money::from_minor)
    }

    /// Format the amount without a symbol.
    ///
    /// Whole amounts have no fractional part ("40"); fractional amounts
    /// drop trailing zeros ("49.5", "49.99").
    pub fn display_amount(&self) -> String {
        let major = self.amount_minor / MINOR_PER_MAJOR;
        let minor = self.amount_minor % MINOR_PER_MAJOR;
        if minor == 0 {
            major.to_string()
        } else if minor % 10 == 0 {
            format!("{}.{}", major, minor / 10)
        } else {
            format!("{}.{:02}", major, minor)
        }
    }
}

impl Add for Money {
    type Output = Money;

    /// Saturating addition.
    fn add(self, other: Money) -> Money {
        Money::from_minor(self.amount_minor.saturating_add(other.amount_minor))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    /// Saturating multiplication by a quantity.
    fn mul(self, quantity: u32) -> Money {
        Money::from_minor(self.amount_minor.saturating_mul(i64::from(quantity)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_amount())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.amount_minor % MINOR_PER_MAJOR == 0 {
            serializer.serialize_i64(self.amount_minor / MINOR_PER_MAJOR)
        } else {
            serializer.serialize_f64(self.to_decimal())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative price in major units")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        let major = i64::try_from(v).map_err(|_| E::custom("price out of range"))?;
        Ok(Money::from_major(major))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        if v < 0 {
            return Err(E::custom("price must be non-negative"));
        }
        Ok(Money::from_major(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_decimal(v).ok_or_else(|| E::custom("price must be a non-negative number"))
    }

    // Prices lifted from data attributes arrive as strings
    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        let parsed: f64 = v
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("invalid price: {:?}", v)))?;
        self.visit_f64(parsed)
    }
}
