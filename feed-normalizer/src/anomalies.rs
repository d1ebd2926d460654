//! Known anomalies in the Toronto bus feed.
//!
//! Everything here is an exact-match patch for a specific feed snapshot,
//! kept apart from the general rules so it can be pruned when the feed is
//! fixed upstream.

use crate::direction::{DirectionRule, HeadsignMatch};
use crate::domain::{CanonicalDirection, ColorCode, DirectionHint, RouteId};
use crate::route::{RouteOverrideTable, RouteOverrideTableBuilder};
use crate::text::HeadsignPatch;

/// Agency-wide route colour.
pub const AGENCY_COLOR: ColorCode = ColorCode::from_static("B80000");

/// Blue Night network colour.
pub const NIGHT_COLOR: ColorCode = ColorCode::from_static("00529F");

/// Subway line 1 yellow.
pub const LINE_1_COLOR: ColorCode = ColorCode::from_static("FFC41E");

/// Subway line 2 green.
pub const LINE_2_COLOR: ColorCode = ColorCode::from_static("2B720A");

/// Shuttle and replacement routes whose short codes are not numbers.
pub fn toronto_route_overrides() -> RouteOverrideTable {
    RouteOverrideTableBuilder::new()
        .add("1A", 10_003, LINE_1_COLOR)
        .add("1S", 10_001, LINE_1_COLOR)
        .add("2S", 10_002, LINE_2_COLOR)
        .build()
}

/// Headsigns with no direction word, by route.
pub fn toronto_direction_rules() -> Vec<DirectionRule> {
    vec![
        DirectionRule::new(RouteId::new(86), HeadsignMatch::equals("special"), CanonicalDirection::East)
            .when_hint(DirectionHint::Outbound),
        DirectionRule::new(RouteId::new(86), HeadsignMatch::equals("special"), CanonicalDirection::West)
            .when_hint(DirectionHint::Inbound),
        DirectionRule::new(
            RouteId::new(176),
            HeadsignMatch::ends_with("towards parklawn"),
            CanonicalDirection::East,
        ),
        DirectionRule::new(
            RouteId::new(176),
            HeadsignMatch::ends_with("towards mimico go station"),
            CanonicalDirection::West,
        ),
        // "SOTH - 402 Parkdale ..."
        DirectionRule::new(RouteId::new(402), HeadsignMatch::starts_with("soth - "), CanonicalDirection::South),
        DirectionRule::new(RouteId::new(36), HeadsignMatch::Any, CanonicalDirection::West)
            .when_hint(DirectionHint::Inbound),
    ]
}

/// Headsigns replaced outright. The 52G trip below is flagged eastbound in
/// the feed but runs west.
pub fn toronto_headsign_patches() -> Vec<HeadsignPatch> {
    vec![HeadsignPatch::new(
        "East - 52G Lawrence West towards Westwood Mall",
        "West",
    )]
}
