//! The assembled normalizer.
//!
//! [`Normalizer`] owns every lookup table, built once and read-only
//! afterwards, so it can be shared across worker threads behind an `Arc`.
//! The free functions at the bottom use a lazily built Toronto bus
//! normalizer with the default configuration.

use std::sync::LazyLock;

use crate::anomalies::{toronto_direction_rules, toronto_headsign_patches, toronto_route_overrides};
use crate::config::NormalizerConfig;
use crate::direction::{DirectionClassifier, DirectionRule};
use crate::domain::{
    CanonicalDirection, ColorCode, DirectionHint, NormalizeError, NormalizedText, RouteId,
    RouteRecord, RouteType,
};
use crate::route::{ColorBandTable, RouteOverrideTable, RouteResolver};
use crate::text::{self, HeadsignCleaner, HeadsignPatch};

/// Every table needed to normalize one agency's feed.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    routes: RouteResolver,
    directions: DirectionClassifier,
    headsigns: HeadsignCleaner,
}

impl Normalizer {
    /// Assemble a normalizer. The night band and colour come from `config`.
    pub fn new(
        config: NormalizerConfig,
        overrides: RouteOverrideTable,
        direction_rules: Vec<DirectionRule>,
        headsign_patches: Vec<HeadsignPatch>,
    ) -> Self {
        let mut bands = ColorBandTable::new();
        bands.add(config.night_band.clone(), config.night_color);

        Self {
            config,
            routes: RouteResolver::new(overrides, bands),
            directions: DirectionClassifier::new(direction_rules),
            headsigns: HeadsignCleaner::new(headsign_patches),
        }
    }

    /// The Toronto bus feed, with its known anomalies.
    pub fn toronto_bus(config: NormalizerConfig) -> Self {
        Self::new(
            config,
            toronto_route_overrides(),
            toronto_direction_rules(),
            toronto_headsign_patches(),
        )
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn agency_color(&self) -> ColorCode {
        self.config.agency_color
    }

    pub fn route_type(&self) -> RouteType {
        self.config.route_type
    }

    pub fn resolve_route_id(&self, route: &RouteRecord) -> Result<RouteId, NormalizeError> {
        self.routes.resolve_id(route)
    }

    /// The route's own colour, or `None` to use the agency colour.
    pub fn assign_route_color(&self, route: &RouteRecord) -> Result<Option<ColorCode>, NormalizeError> {
        self.routes.assign_color(route)
    }

    /// Like [`assign_route_color`](Self::assign_route_color), with the agency
    /// colour filled in.
    pub fn route_color_or_agency(&self, route: &RouteRecord) -> Result<ColorCode, NormalizeError> {
        Ok(self
            .assign_route_color(route)?
            .unwrap_or(self.config.agency_color))
    }

    pub fn classify_direction(
        &self,
        route_id: RouteId,
        raw_headsign: &str,
        hint: Option<DirectionHint>,
    ) -> Result<CanonicalDirection, NormalizeError> {
        self.directions.classify(route_id, raw_headsign, hint)
    }

    pub fn clean_headsign(&self, raw_headsign: &str) -> Result<NormalizedText, NormalizeError> {
        self.headsigns.clean(raw_headsign)
    }

    pub fn clean_stop_name(&self, raw_name: &str) -> NormalizedText {
        text::clean_stop_name(raw_name)
    }

    pub fn clean_route_long_name(&self, raw_long_name: Option<&str>) -> NormalizedText {
        text::clean_route_long_name(raw_long_name)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::toronto_bus(NormalizerConfig::default())
    }
}

static DEFAULT: LazyLock<Normalizer> = LazyLock::new(Normalizer::default);

/// Stable numeric ID of a route.
pub fn resolve_route_id(route: &RouteRecord) -> Result<RouteId, NormalizeError> {
    DEFAULT.resolve_route_id(route)
}

/// Display colour of a route, or `None` for the agency colour.
pub fn assign_route_color(route: &RouteRecord) -> Result<Option<ColorCode>, NormalizeError> {
    DEFAULT.assign_route_color(route)
}

pub fn classify_direction(
    route_id: RouteId,
    raw_headsign: &str,
    hint: Option<DirectionHint>,
) -> Result<CanonicalDirection, NormalizeError> {
    DEFAULT.classify_direction(route_id, raw_headsign, hint)
}

pub fn clean_headsign(raw_headsign: &str) -> Result<NormalizedText, NormalizeError> {
    DEFAULT.clean_headsign(raw_headsign)
}

pub fn clean_stop_name(raw_name: &str) -> NormalizedText {
    DEFAULT.clean_stop_name(raw_name)
}

pub fn clean_route_long_name(raw_long_name: Option<&str>) -> NormalizedText {
    DEFAULT.clean_route_long_name(raw_long_name)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Night routes without an override always get the night colour
        #[test]
        fn night_band_coverage(n in 300u64..=399) {
            let normalizer = Normalizer::default();
            let record = RouteRecord::new(n.to_string(), None);
            prop_assert_eq!(
                normalizer.assign_route_color(&record),
                Ok(Some(normalizer.config().night_color))
            );
        }

        /// Routes outside the band with numeric codes use the agency colour
        #[test]
        fn outside_band_is_agency(n in prop_oneof![0u64..300, 400u64..100_000]) {
            let record = RouteRecord::new(n.to_string(), None);
            prop_assert_eq!(assign_route_color(&record), Ok(None));
        }
    }
}
