//! # Money Module
//!
//! Provides the `Money` type for peso amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu prices and amounts due are whole pesos today, but the            │
//! │  subtotal is a sum over ordered items and receipts echo it back.       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer centavos                                        │
//! │    ₱150.00 = 15000 centavos                                            │
//! │    sums never drift, formatting is exact                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sinaing_core::money::Money;
//!
//! let adobo = Money::from_pesos(450);
//! let halo_halo = Money::from_pesos(150);
//! assert_eq!((adobo + halo_halo).centavos(), 60000);
//! assert_eq!(format!("{}", adobo), "P450.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Currency marker used by `Display`.
pub const PESO_SIGN: &str = "P";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (1/100 peso).
///
/// ## Design Decisions
/// - **i64 (signed)**: differences can go negative
/// - **Single field tuple struct**: zero-cost over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Creates a Money value from whole pesos.
    ///
    /// ## Example
    /// ```rust
    /// use sinaing_core::money::Money;
    ///
    /// assert_eq!(Money::from_pesos(1500).centavos(), 150000);
    /// ```
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos * 100)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns the whole-peso portion.
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99).
    #[inline]
    pub const fn centavos_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `P1500.00`, the way receipts and prompts print it.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            PESO_SIGN,
            self.pesos().abs(),
            self.centavos_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Summing order lines into a subtotal.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pesos() {
        let money = Money::from_pesos(150);
        assert_eq!(money.centavos(), 15000);
        assert_eq!(money.pesos(), 150);
        assert_eq!(money.centavos_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_pesos(1500)), "P1500.00");
        assert_eq!(format!("{}", Money::from_centavos(8050)), "P80.50");
        assert_eq!(format!("{}", Money::from_centavos(-550)), "-P5.50");
        assert_eq!(format!("{}", Money::zero()), "P0.00");
    }

    #[test]
    fn test_add() {
        let a = Money::from_pesos(10);
        let b = Money::from_centavos(550);
        assert_eq!(a + b, Money::from_centavos(1550));
    }

    #[test]
    fn test_sum() {
        let lines = [Money::from_pesos(150), Money::from_pesos(450), Money::from_pesos(80)];
        let subtotal: Money = lines.iter().sum();
        assert_eq!(subtotal, Money::from_pesos(680));

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert_eq!(empty, Money::zero());
    }
}
