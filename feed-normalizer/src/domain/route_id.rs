//! Stable numeric route identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The stable numeric ID the downstream app keys a route by.
///
/// Usually the route's short code read as an integer ("24" is route 24);
/// irregular codes such as "1S" get an ID from the override table instead.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(u64);

impl RouteId {
    pub const fn new(id: u64) -> Self {
        RouteId(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for RouteId {
    fn from(id: u64) -> Self {
        RouteId(id)
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
