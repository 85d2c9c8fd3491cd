//! Money type for representing monetary values.
//!
//! Amounts are integer minor units (two decimal places, matching the
//! `DECIMAL(10, 2)` columns product documents are exported from). Parsing
//! works on the decimal text directly, so `"89.99"` is exactly 8999 and
//! never passes through binary floating point.

use crate::error::CatalogError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Fractional digits carried by [`Money`].
pub const MONEY_SCALE: u32 = 2;

/// Direction for dropping fractional digits finer than [`MONEY_SCALE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Toward positive infinity.
    Up,
    /// Toward negative infinity.
    Down,
}

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A fixed-point monetary amount in minor units (e.g., paise or cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from minor units.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a whole number of major units.
    pub fn from_major(units: i64) -> Self {
        Self::new(units.saturating_mul(10_i64.pow(MONEY_SCALE)))
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Parse decimal text such as `"8999"`, `"89.9"` or `"-0.50"`.
    ///
    /// At most two fractional digits are accepted; anything finer would
    /// need rounding, which is left to whoever produced the text.
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        parse_fixed(text, MONEY_SCALE)
            .map(Self::new)
            .ok_or_else(|| CatalogError::InvalidMoney(text.to_string()))
    }

    /// Parse decimal text that may carry an exponent (`"1e3"`) or more
    /// than two fractional digits, rounding the excess in `rounding`'s
    /// direction. `"100.555"` is 100.56 rounded up and 100.55 rounded down.
    pub fn parse_rounded(text: &str, rounding: Rounding) -> Result<Self, CatalogError> {
        parse_scientific(text, MONEY_SCALE, rounding)
            .map(Self::new)
            .ok_or_else(|| CatalogError::InvalidMoney(text.to_string()))
    }

    /// Canonical decimal text, always with two fractional digits.
    pub fn to_decimal_string(&self) -> String {
        format_fixed(self.amount_cents, MONEY_SCALE)
    }

    /// Format with a currency symbol (e.g., "₹8999.00").
    pub fn display(&self, currency: Currency) -> String {
        if self.is_negative() {
            format!(
                "-{}{}",
                currency.symbol(),
                format_fixed(self.amount_cents.saturating_abs(), MONEY_SCALE)
            )
        } else {
            format!("{}{}", currency.symbol(), self.to_decimal_string())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl FromStr for Money {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor(MONEY_SCALE)).map(Money::new)
    }
}

/// Accepts decimal amounts written either as JSON strings or JSON numbers.
pub(crate) struct DecimalVisitor(pub(crate) u32);

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a decimal amount with at most {} fractional digits", self.0)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        parse_fixed(v, self.0).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        v.checked_mul(10_i64.pow(self.0))
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(10_i64.pow(self.0)))
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        // Shortest round-trip text of the float, so 89.99 stays "89.99".
        let text = v.to_string();
        parse_fixed(&text, self.0).ok_or_else(|| E::invalid_value(de::Unexpected::Float(v), &self))
    }
}

/// Parse decimal text into an integer scaled by `10^scale`.
pub(crate) fn parse_fixed(text: &str, scale: u32) -> Option<i64> {
    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (digits, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if fraction.len() > scale as usize {
        return None;
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut value: i64 = 0;
    for b in whole.bytes() {
        value = value.checked_mul(10)?.checked_add(i64::from(b - b'0'))?;
    }
    let mut fraction_value: i64 = 0;
    for b in fraction.bytes() {
        fraction_value = fraction_value * 10 + i64::from(b - b'0');
    }
    let padding = scale - fraction.len() as u32;
    let scaled = value
        .checked_mul(10_i64.pow(scale))?
        .checked_add(fraction_value * 10_i64.pow(padding))?;

    Some(if negative { -scaled } else { scaled })
}

/// Like [`parse_fixed`], but also takes an `e`/`E` exponent and rounds
/// digits past `scale` instead of rejecting them.
fn parse_scientific(text: &str, scale: u32, rounding: Rounding) -> Option<i64> {
    let text = text.trim();
    let (negative, rest) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = match rest.split_once(|c: char| c == 'e' || c == 'E') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().ok()?),
        None => (rest, 0),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Digits left of the point once scaled to minor units.
    let digits: Vec<u8> = whole.bytes().chain(fraction.bytes()).map(|b| b - b'0').collect();
    let kept = i64::try_from(whole.len())
        .ok()?
        .checked_add(exponent)?
        .checked_add(i64::from(scale))?;

    let (head, tail): (&[u8], &[u8]) = if kept <= 0 {
        (&[], &digits)
    } else {
        let split = usize::try_from(kept).ok()?.min(digits.len());
        digits.split_at(split)
    };

    let mut magnitude: i64 = 0;
    for &digit in head {
        magnitude = magnitude.checked_mul(10)?.checked_add(i64::from(digit))?;
    }
    if magnitude != 0 {
        let padding = kept - i64::try_from(head.len()).ok()?;
        for _ in 0..padding {
            magnitude = magnitude.checked_mul(10)?;
        }
    }

    let inexact = tail.iter().any(|&digit| digit != 0);
    let away_from_zero = match rounding {
        Rounding::Up => !negative,
        Rounding::Down => negative,
    };
    if inexact && away_from_zero {
        magnitude = magnitude.checked_add(1)?;
    }

    Some(if negative { -magnitude } else { magnitude })
}

/// Render an integer scaled by `10^scale` as decimal text.
pub(crate) fn format_fixed(value: i64, scale: u32) -> String {
    if scale == 0 {
        return value.to_string();
    }
    let divisor = 10_u64.pow(scale);
    let magnitude = value.unsigned_abs();
    let sign = if value < 0 { "-" } else { "" };
    format!(
        "{}{}.{:0width$}",
        sign,
        magnitude / divisor,
        magnitude % divisor,
        width = scale as usize
    )
}
