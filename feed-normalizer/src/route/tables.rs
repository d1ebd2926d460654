//! Fixed lookup tables for route identity and colour.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::domain::{ColorCode, RouteId};

/// What an irregular short code resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteOverride {
    pub id: RouteId,
    /// `None` leaves the route on the agency colour.
    pub color: Option<ColorCode>,
}

/// Short codes whose ID (and colour) can't be read off the code itself.
///
/// Keys are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct RouteOverrideTable {
    /// Keyed by upper-cased short code.
    entries: HashMap<String, RouteOverride>,
}

impl RouteOverrideTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the override for `short_code`.
    pub fn insert(&mut self, short_code: &str, id: RouteId, color: Option<ColorCode>) {
        self.entries
            .insert(short_code.to_ascii_uppercase(), RouteOverride { id, color });
    }

    /// Look up a short code, ignoring case.
    pub fn get(&self, short_code: &str) -> Option<&RouteOverride> {
        self.entries.get(&short_code.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for creating override tables.
///
/// Provides a fluent API for adding overrides.
#[derive(Debug, Default)]
pub struct RouteOverrideTableBuilder {
    inner: RouteOverrideTable,
}

impl RouteOverrideTableBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override with its own colour.
    pub fn add(mut self, short_code: &str, id: u64, color: ColorCode) -> Self {
        self.inner.insert(short_code, RouteId::new(id), Some(color));
        self
    }

    /// Add an override that keeps the agency colour.
    pub fn add_id_only(mut self, short_code: &str, id: u64) -> Self {
        self.inner.insert(short_code, RouteId::new(id), None);
        self
    }

    pub fn build(self) -> RouteOverrideTable {
        self.inner
    }
}

/// Numeric short-code ranges sharing a display colour.
///
/// Bands are consulted in insertion order; the first containing band wins.
#[derive(Debug, Clone, Default)]
pub struct ColorBandTable {
    bands: Vec<(RangeInclusive<u64>, ColorCode)>,
}

impl ColorBandTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, band: RangeInclusive<u64>, color: ColorCode) {
        self.bands.push((band, color));
    }

    /// Colour of the first band containing `route_number`.
    pub fn color_for(&self, route_number: u64) -> Option<ColorCode> {
        self.bands
            .iter()
            .find(|(band, _)| band.contains(&route_number))
            .map(|(_, color)| *color)
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}
