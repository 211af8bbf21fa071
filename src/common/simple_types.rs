use std::fmt;
use std::iter::Sum;

use serde::Serialize;

/// Identifier of the purchasing account. Always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct AccountId {
    value: u64,
}

impl AccountId {
    /// Returns `None` for zero and negative ids.
    pub fn new(id: i64) -> Option<Self> {
        u64::try_from(id)
            .ok()
            .filter(|value| *value > 0)
            .map(|value| Self { value })
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Number of seats to reserve for a purchase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SeatCount {
    value: u64,
}

impl SeatCount {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}

/// Whole currency units. Ticket prices are integral so there is no rounding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Price {
    value: u64,
}

impl Price {
    pub const fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Price of `count` items at this unit price.
    pub fn times(self, count: u64) -> Price {
        Price::new(self.value.saturating_mul(count))
    }
}

impl std::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value.saturating_add(rhs.value),
        }
    }
}

impl Sum<Self> for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::new(0), |a, b| a + b)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Total charged to the account for one purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BillingAmount {
    value: Price,
}

impl BillingAmount {
    pub fn value(&self) -> Price {
        self.value
    }

    pub fn sum_prices(prices: impl Iterator<Item = Price>) -> BillingAmount {
        let sum = prices.sum();
        Self { value: sum }
    }
}

impl fmt::Display for BillingAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
