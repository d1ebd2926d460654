//! Route-specific direction rules.

use crate::domain::{CanonicalDirection, DirectionHint, RouteId};

/// How a rule tests the headsign.
///
/// Patterns are stored lower-cased and compared against the trimmed,
/// lower-cased headsign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadsignMatch {
    Any,
    Equals(String),
    StartsWith(String),
    EndsWith(String),
}

impl HeadsignMatch {
    pub fn equals(pattern: &str) -> Self {
        HeadsignMatch::Equals(pattern.to_lowercase())
    }

    pub fn starts_with(pattern: &str) -> Self {
        HeadsignMatch::StartsWith(pattern.to_lowercase())
    }

    pub fn ends_with(pattern: &str) -> Self {
        HeadsignMatch::EndsWith(pattern.to_lowercase())
    }

    /// `headsign` must already be trimmed and lower-cased.
    fn matches(&self, headsign: &str) -> bool {
        match self {
            HeadsignMatch::Any => true,
            HeadsignMatch::Equals(p) => headsign == p,
            HeadsignMatch::StartsWith(p) => headsign.starts_with(p.as_str()),
            HeadsignMatch::EndsWith(p) => headsign.ends_with(p.as_str()),
        }
    }
}

/// One route's known answer for a headsign that carries no direction word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionRule {
    route_id: RouteId,
    headsign: HeadsignMatch,
    /// `None` matches either hint.
    hint: Option<DirectionHint>,
    direction: CanonicalDirection,
}

impl DirectionRule {
    pub fn new(route_id: RouteId, headsign: HeadsignMatch, direction: CanonicalDirection) -> Self {
        Self {
            route_id,
            headsign,
            hint: None,
            direction,
        }
    }

    /// Restrict the rule to one value of the feed's direction flag.
    pub fn when_hint(mut self, hint: DirectionHint) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn route_id(&self) -> RouteId {
        self.route_id
    }

    pub fn direction(&self) -> CanonicalDirection {
        self.direction
    }

    pub(crate) fn matches(&self, route_id: RouteId, headsign: &str, hint: DirectionHint) -> bool {
        self.route_id == route_id
            && self.hint.is_none_or(|h| h == hint)
            && self.headsign.matches(headsign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_lowercased() {
        assert_eq!(
            HeadsignMatch::ends_with("Towards Parklawn"),
            HeadsignMatch::EndsWith("towards parklawn".to_string())
        );
    }

    #[test]
    fn match_kinds() {
        assert!(HeadsignMatch::Any.matches("anything"));
        assert!(HeadsignMatch::equals("special").matches("special"));
        assert!(!HeadsignMatch::equals("special").matches("special service"));
        assert!(HeadsignMatch::starts_with("soth - ").matches("soth - 402 parkdale"));
        assert!(HeadsignMatch::ends_with("towards parklawn").matches("176 mimico towards parklawn"));
        assert!(!HeadsignMatch::ends_with("towards parklawn").matches("towards parklawn loop"));
    }

    #[test]
    fn rule_without_hint_matches_both() {
        let rule = DirectionRule::new(
            RouteId::new(402),
            HeadsignMatch::starts_with("soth - "),
            CanonicalDirection::South,
        );
        assert!(rule.matches(RouteId::new(402), "soth - x", DirectionHint::Outbound));
        assert!(rule.matches(RouteId::new(402), "soth - x", DirectionHint::Inbound));
        assert!(!rule.matches(RouteId::new(401), "soth - x", DirectionHint::Inbound));
    }

    #[test]
    fn rule_with_hint() {
        let rule = DirectionRule::new(RouteId::new(36), HeadsignMatch::Any, CanonicalDirection::West)
            .when_hint(DirectionHint::Inbound);
        assert!(rule.matches(RouteId::new(36), "", DirectionHint::Inbound));
        assert!(!rule.matches(RouteId::new(36), "", DirectionHint::Outbound));
        assert_eq!(rule.route_id(), RouteId::new(36));
        assert_eq!(rule.direction(), CanonicalDirection::West);
    }
}
