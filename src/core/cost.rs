use std::{
    cmp::Ordering,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};

use thiserror::Error;

/// Cost of a route, a finite non-negative real number.
///
/// Unlike bare `f64`, the cost is totally ordered (it can never be NaN), so it
/// can be used as a key in a priority queue.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    /// Creates a cost if the value is finite and non-negative.
    pub fn new(x: f64) -> Option<Cost> {
        (x.is_finite() && x >= 0.0).then_some(Cost(x + 0.0))
    }

    /// Creates a cost or reports why the value was rejected.
    pub fn try_new(x: f64) -> Result<Cost, InvalidCost> {
        Cost::new(x).ok_or(InvalidCost(x))
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

/// The value is negative, NaN or infinite.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("cost must be finite and non-negative, got {0}")]
pub struct InvalidCost(pub f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Self::Output {
        Cost(self.0 + rhs.0)
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, rhs: Cost) {
        self.0 += rhs.0;
    }
}

impl<'a> Sum<&'a Cost> for Cost {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Cost>,
    {
        Cost(iter.fold(0.0, |a, b| a + b.0))
    }
}

impl Sum<Cost> for Cost {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Cost>,
    {
        Cost(iter.fold(0.0, |a, b| a + b.0))
    }
}

impl TryFrom<f64> for Cost {
    type Error = InvalidCost;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Cost::try_new(value)
    }
}

impl From<Cost> for f64 {
    fn from(cost: Cost) -> Self {
        cost.0
    }
}

impl PartialEq<f64> for Cost {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Error returned when parsing a [`Cost`] from string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseCostError {
    #[error("{0}")]
    Float(#[from] std::num::ParseFloatError),
    #[error("{0}")]
    Invalid(#[from] InvalidCost),
}

impl FromStr for Cost {
    type Err = ParseCostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Cost::try_new(s.parse()?)?)
    }
}
