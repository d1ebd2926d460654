//! Route identity and colour resolution.
//!
//! Both operations read the same field: an override-table hit wins, and
//! otherwise the short code must be a plain base-10 number.

mod tables;

pub use tables::{ColorBandTable, RouteOverride, RouteOverrideTable, RouteOverrideTableBuilder};

use tracing::trace;

use crate::domain::{ColorCode, NormalizeError, RouteId, RouteRecord};

/// Resolves route IDs and colours from short codes.
#[derive(Debug, Clone, Default)]
pub struct RouteResolver {
    overrides: RouteOverrideTable,
    bands: ColorBandTable,
}

impl RouteResolver {
    pub fn new(overrides: RouteOverrideTable, bands: ColorBandTable) -> Self {
        Self { overrides, bands }
    }

    /// The stable numeric ID for a route.
    ///
    /// An override hit returns without trying to parse the code, so
    /// non-numeric override keys such as "1S" resolve.
    pub fn resolve_id(&self, route: &RouteRecord) -> Result<RouteId, NormalizeError> {
        if let Some(entry) = self.overrides.get(&route.short_code) {
            trace!(short_code = %route.short_code, id = %entry.id, "Route ID override");
            return Ok(entry.id);
        }
        parse_short_code(&route.short_code).map(RouteId::new)
    }

    /// The route's display colour, or `None` for the agency default.
    pub fn assign_color(&self, route: &RouteRecord) -> Result<Option<ColorCode>, NormalizeError> {
        if let Some(entry) = self.overrides.get(&route.short_code) {
            return Ok(entry.color);
        }
        let number = parse_short_code(&route.short_code)?;
        Ok(self.bands.color_for(number))
    }
}

/// Read a short code as a non-negative base-10 integer.
///
/// Only ASCII digits are accepted: no sign, no whitespace.
fn parse_short_code(short_code: &str) -> Result<u64, NormalizeError> {
    let malformed = || NormalizeError::MalformedRouteCode {
        short_code: short_code.to_string(),
    };

    if short_code.is_empty() || !short_code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    short_code.parse().map_err(|_| malformed())
}
