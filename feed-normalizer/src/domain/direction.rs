//! Trip direction types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The compass direction a trip is grouped under for display.
///
/// `None` is only ever produced by an explicit rule; an unrecognised
/// headsign is an error, never a silent `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CanonicalDirection {
    North,
    South,
    East,
    West,
    None,
}

impl CanonicalDirection {
    /// Rider-facing name, also used as a fallback headsign.
    pub fn label(&self) -> &'static str {
        match self {
            CanonicalDirection::North => "North",
            CanonicalDirection::South => "South",
            CanonicalDirection::East => "East",
            CanonicalDirection::West => "West",
            CanonicalDirection::None => "",
        }
    }

    /// True for the four compass points.
    pub fn is_compass(&self) -> bool {
        !matches!(self, CanonicalDirection::None)
    }
}

impl fmt::Display for CanonicalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalDirection::None => f.write_str("NONE"),
            other => f.write_str(&other.label().to_ascii_uppercase()),
        }
    }
}

/// Error returned for a GTFS `direction_id` other than 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction_id {0}: must be 0 or 1")]
pub struct InvalidDirectionHint(u8);

/// The feed's own binary direction flag (GTFS `direction_id`).
///
/// Outbound is 0 and inbound is 1. The labels are arbitrary; the feed
/// does not say which way either one points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DirectionHint {
    Outbound,
    Inbound,
}

impl TryFrom<u8> for DirectionHint {
    type Error = InvalidDirectionHint;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DirectionHint::Outbound),
            1 => Ok(DirectionHint::Inbound),
            other => Err(InvalidDirectionHint(other)),
        }
    }
}

impl From<DirectionHint> for u8 {
    fn from(hint: DirectionHint) -> Self {
        match hint {
            DirectionHint::Outbound => 0,
            DirectionHint::Inbound => 1,
        }
    }
}
