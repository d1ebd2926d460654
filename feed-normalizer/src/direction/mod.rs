//! Trip direction inference.
//!
//! Most headsigns carry their direction as a compass word at one end
//! ("North - 7 Bathurst towards Steeles", "... Dundas West"). The rest
//! are covered by route-specific rules, checked in order, first match wins.
//! A headsign that matches nothing is an error: a new rule is needed.

mod rules;

pub use rules::{DirectionRule, HeadsignMatch};

use tracing::{debug, trace};

use crate::domain::{CanonicalDirection, DirectionHint, NormalizeError, RouteId};

/// Compass words in the order they are tried, with their "-bound" forms.
const COMPASS_WORDS: [(&str, &str, CanonicalDirection); 4] = [
    ("north", "northbound", CanonicalDirection::North),
    ("south", "southbound", CanonicalDirection::South),
    ("east", "eastbound", CanonicalDirection::East),
    ("west", "westbound", CanonicalDirection::West),
];

/// Infers canonical directions for trips.
#[derive(Debug, Clone, Default)]
pub struct DirectionClassifier {
    rules: Vec<DirectionRule>,
}

impl DirectionClassifier {
    pub fn new(rules: Vec<DirectionRule>) -> Self {
        Self { rules }
    }

    /// Classify one trip.
    ///
    /// A compass word at either end of the headsign wins over the route
    /// rules. A missing hint is read as outbound (GTFS `direction_id` 0).
    pub fn classify(
        &self,
        route_id: RouteId,
        raw_headsign: &str,
        hint: Option<DirectionHint>,
    ) -> Result<CanonicalDirection, NormalizeError> {
        let headsign = raw_headsign.trim().to_lowercase();
        if let Some(direction) = compass_word(&headsign) {
            trace!(route_id = %route_id, %direction, "Direction from headsign word");
            return Ok(direction);
        }

        let hint = hint.unwrap_or(DirectionHint::Outbound);
        if let Some(rule) = self
            .rules
            .iter()
            .find(|rule| rule.matches(route_id, &headsign, hint))
        {
            debug!(route_id = %route_id, direction = %rule.direction(), headsign = raw_headsign, "Direction from route rule");
            return Ok(rule.direction());
        }

        Err(NormalizeError::UnclassifiedDirection {
            route_id,
            headsign: raw_headsign.to_string(),
        })
    }
}

/// The first of north, south, east, west that the headsign starts or ends
/// with. Plain text comparison: "Westwood Mall" is west.
///
/// `headsign` must already be trimmed and lower-cased.
fn compass_word(headsign: &str) -> Option<CanonicalDirection> {
    COMPASS_WORDS
        .iter()
        .find(|(word, bound, _)| {
            headsign.starts_with(word) || headsign.ends_with(word) || headsign.ends_with(bound)
        })
        .map(|(_, _, direction)| *direction)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn compass() -> impl Strategy<Value = (&'static str, CanonicalDirection)> {
        prop::sample::select(vec![
            ("North", CanonicalDirection::North),
            ("south", CanonicalDirection::South),
            ("EAST", CanonicalDirection::East),
            ("Westbound", CanonicalDirection::West),
        ])
    }

    proptest! {
        /// A leading compass word decides, whatever the rules say
        #[test]
        fn leading_word_decides(
            (word, expected) in compass(),
            rest in "( [0-9]{1,8}){0,5}",
            hint in prop::option::of(prop::sample::select(vec![DirectionHint::Outbound, DirectionHint::Inbound])),
        ) {
            let classifier = DirectionClassifier::new(vec![
                DirectionRule::new(RouteId::new(1), HeadsignMatch::Any, CanonicalDirection::None),
            ]);
            let headsign = format!("{word} -{rest}");
            prop_assert_eq!(classifier.classify(RouteId::new(1), &headsign, hint), Ok(expected));
        }
    }
}
