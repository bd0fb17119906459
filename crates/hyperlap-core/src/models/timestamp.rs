use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A numeric event time, also used as a snapshot bucket key.
///
/// Totally ordered via `f64::total_cmp` so it can key a `BTreeMap`, with
/// `-0.0` and `0.0` comparing equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub f64);

impl Timestamp {
    pub fn value(self) -> f64 {
        self.0
    }

    // Adding +0.0 maps -0.0 to 0.0 and leaves every other value unchanged.
    fn canonical(self) -> f64 {
        self.0 + 0.0
    }
}

impl From<f64> for Timestamp {
    fn from(value: f64) -> Self {
        Self(value + 0.0)
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Timestamp {}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().total_cmp(&other.canonical())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
