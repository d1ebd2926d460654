//! Trip headsign display text.
//!
//! Headsigns in the feed look like
//! `"East - 54a Lawrence East towards Starspray - Extra Fare Required"`.
//! Only the destination is kept: route prefixes, fare notices, short-turn
//! markers and "via" clauses are stripped before the shared passes run.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::domain::{NormalizeError, NormalizedText};

use super::{Pass, TextNormalizer};

/// `"<letters> - <route number><letter?> <words...> towards "`, keeping the
/// route's branch letter.
static ROUTE_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*[a-z]+\s+-\s+\d+([a-z]?)\b(?:\s+\S+)*?\s+towards\s+")
        .expect("valid regex")
});

static EXTRA_FARE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*-?\s*\bextra\s+fare\s+required\s*$").expect("valid regex")
});

static SHORT_TURN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bshort\s+turn\b").expect("valid regex"));

static TOWARDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\btowards\b").expect("valid regex"));

static VIA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bvia\b").expect("valid regex"));

/// Passes run once the destination phrase has been isolated.
///
/// Compass words and "side" are left alone: in a headsign they are part of
/// a place name ("Dundas West Station").
pub const HEADSIGN_PASSES: &[Pass] = &[
    Pass::LowerCase,
    Pass::AtToSlash,
    Pass::AndToAmpersand,
    Pass::FixAbbreviations,
    Pass::UpperCaseGo,
    Pass::RemovePoints,
    Pass::StreetTypes,
    Pass::Numbers,
    Pass::Label,
];

/// A known-bad headsign replaced by a fixed literal.
///
/// Matched by exact, case-insensitive equality on the raw headsign before
/// any other processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadsignPatch {
    raw: String,
    replacement: String,
}

impl HeadsignPatch {
    pub fn new(raw: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            replacement: replacement.into(),
        }
    }

    pub fn matches(&self, raw_headsign: &str) -> bool {
        self.raw.eq_ignore_ascii_case(raw_headsign)
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// Cleans raw headsigns into destination text.
#[derive(Debug, Clone)]
pub struct HeadsignCleaner {
    patches: Vec<HeadsignPatch>,
    passes: TextNormalizer,
}

impl HeadsignCleaner {
    pub fn new(patches: Vec<HeadsignPatch>) -> Self {
        Self {
            patches,
            passes: TextNormalizer::new(HEADSIGN_PASSES.to_vec()),
        }
    }

    /// Clean a raw headsign.
    ///
    /// Fails with [`NormalizeError::UnhandledHeadsignShape`] when nothing
    /// resembling a destination is left.
    pub fn clean(&self, raw: &str) -> Result<NormalizedText, NormalizeError> {
        if let Some(patch) = self.patches.iter().find(|p| p.matches(raw)) {
            trace!(headsign = raw, replacement = patch.replacement(), "Headsign patched");
            return Ok(NormalizedText::from_clean(patch.replacement.clone()));
        }

        let text = ROUTE_PREFIX_RE.replace(raw, "${1} ");
        let text = EXTRA_FARE_RE.replace(&text, "");
        let text = SHORT_TURN_RE.replace_all(&text, " ");
        let destination = destination_phrase(&text);

        let cleaned = self.passes.normalize(destination);
        if !cleaned.as_str().chars().any(char::is_alphanumeric) {
            return Err(NormalizeError::UnhandledHeadsignShape {
                headsign: raw.to_string(),
            });
        }
        Ok(cleaned)
    }
}

impl Default for HeadsignCleaner {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Everything after "towards", cut short at any following "via".
fn destination_phrase(text: &str) -> &str {
    let after_towards = match TOWARDS_RE.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    match VIA_RE.find(after_towards) {
        Some(m) => &after_towards[..m.start()],
        None => after_towards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(raw: &str) -> String {
        HeadsignCleaner::default().clean(raw).unwrap().into_string()
    }

    #[test]
    fn towards_then_via() {
        assert_eq!(clean("downtown via king st towards union station"), "Union Station");
        assert_eq!(clean("towards kipling station via dundas"), "Kipling Station");
        assert_eq!(clean("Finch Station via Yonge"), "Finch Station");
    }

    #[test]
    fn route_prefix_stripped() {
        assert_eq!(clean("East - 54a Lawrence East towards Starspray"), "A Starspray");
        assert_eq!(clean("W - 504 King towards Dundas West Station"), "Dundas West Station");
        assert_eq!(
            clean("North - 7 Bathurst towards Steeles via Promenade Circle"),
            "Steeles"
        );
    }

    #[test]
    fn extra_fare_notice_stripped() {
        assert_eq!(
            clean("South - 142 Downtown/Avenue Rd Express towards Union Station - Extra Fare Required"),
            "Union Station"
        );
        assert_eq!(clean("Downsview Park Extra fare required"), "Downsview Park");
    }

    #[test]
    fn short_turn_stripped() {
        assert_eq!(clean("East - 501 Queen towards Woodbine Short Turn"), "Woodbine");
        assert_eq!(clean("short turn broadview station"), "Broadview Station");
    }

    #[test]
    fn shared_passes_applied() {
        assert_eq!(clean("towards york mills and leslie"), "York Mills & Leslie");
        assert_eq!(clean("towards mimico go station"), "Mimico GO Station");
        assert_eq!(clean("towards eglinton avenue at kennedy road"), "Eglinton Ave / Kennedy Rd");
        assert_eq!(clean("towards st. michael's c.i."), "St Michael's CI");
    }

    #[test]
    fn patch_checked_first() {
        let cleaner = HeadsignCleaner::new(vec![HeadsignPatch::new(
            "East - 52G Lawrence West towards Westwood Mall",
            "West",
        )]);
        assert_eq!(
            cleaner.clean("EAST - 52G LAWRENCE WEST TOWARDS WESTWOOD MALL").unwrap(),
            "West"
        );
        // Anything else goes through the pipeline
        assert_eq!(
            cleaner.clean("East - 52G Lawrence West towards Westwood Mall ").unwrap(),
            "G Westwood Mall"
        );
    }

    #[test]
    fn nothing_left_is_an_error() {
        let cleaner = HeadsignCleaner::default();
        for raw in ["", "short turn", "towards", "via king", "- Extra Fare Required"] {
            let err = cleaner.clean(raw).unwrap_err();
            assert_eq!(
                err,
                NormalizeError::UnhandledHeadsignShape {
                    headsign: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn destination_phrase_slices() {
        assert_eq!(destination_phrase("a via b towards c via d"), " c ");
        assert_eq!(destination_phrase("plain"), "plain");
    }
}
