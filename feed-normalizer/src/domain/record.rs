//! Input records, as decoded by the feed reader.

use serde::{Deserialize, Serialize};

use super::{DirectionHint, RouteId};

/// A route as it appears in `routes.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Rider-facing route number/letter combination, e.g. "24" or "1S".
    pub short_code: String,
    #[serde(default)]
    pub long_name: Option<String>,
}

impl RouteRecord {
    pub fn new(short_code: impl Into<String>, long_name: Option<String>) -> Self {
        Self {
            short_code: short_code.into(),
            long_name,
        }
    }
}

/// A trip as it appears in `trips.txt`, with its route already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    pub route_id: RouteId,
    pub raw_headsign: String,
    #[serde(default)]
    pub direction_hint: Option<DirectionHint>,
    /// Calendar service this trip runs under; used only for exclusion.
    #[serde(default)]
    pub service_id: Option<String>,
}

impl TripRecord {
    pub fn new(
        route_id: RouteId,
        raw_headsign: impl Into<String>,
        direction_hint: Option<DirectionHint>,
    ) -> Self {
        Self {
            route_id,
            raw_headsign: raw_headsign.into(),
            direction_hint,
            service_id: None,
        }
    }

    pub fn with_service_id(mut self, service_id: impl Into<String>) -> Self {
        self.service_id = Some(service_id.into());
        self
    }
}

/// A stop as it appears in `stops.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopRecord {
    pub raw_name: String,
}

impl StopRecord {
    pub fn new(raw_name: impl Into<String>) -> Self {
        Self {
            raw_name: raw_name.into(),
        }
    }
}
