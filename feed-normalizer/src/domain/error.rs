//! Normalization error types.
//!
//! Each variant means a rule table is incomplete for some input shape,
//! not that the input is acceptably ambiguous. Messages carry the route id
//! and raw text needed to write the missing rule.

use super::RouteId;

/// Fatal, per-record normalization failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// Short code is neither an override key nor a non-negative integer
    #[error("malformed route code {short_code:?}: not an override key or a base-10 integer")]
    MalformedRouteCode { short_code: String },

    /// No directional word and no route rule matched the headsign
    #[error("route {route_id}: no direction rule matches headsign {headsign:?}")]
    UnclassifiedDirection { route_id: RouteId, headsign: String },

    /// Nothing usable was left of the headsign after cleaning
    #[error("unhandled headsign shape {headsign:?}: no destination left after cleaning")]
    UnhandledHeadsignShape { headsign: String },
}
