//! Stop display names.
//!
//! Stop names are cosmetic: anything no rule recognises passes through
//! as-is, so cleaning never fails.

use std::sync::LazyLock;

use crate::domain::NormalizedText;

use super::{Pass, TextNormalizer};

/// Intersection markers, side-of-street qualifiers and compass suffixes
/// all matter for stops, so stops take the full shared pipeline.
pub const STOP_NAME_PASSES: &[Pass] = TextNormalizer::STANDARD;

static STOP_NAMES: LazyLock<TextNormalizer> =
    LazyLock::new(|| TextNormalizer::new(STOP_NAME_PASSES.to_vec()));

/// Clean a raw stop name for display.
///
/// # Examples
///
/// ```
/// use feed_normalizer::text::clean_stop_name;
///
/// assert_eq!(
///     clean_stop_name("LAWRENCE AVE EAST AT MIDLAND AVE NORTH SIDE").as_str(),
///     "Lawrence Ave E / Midland Ave N",
/// );
/// ```
pub fn clean_stop_name(raw: &str) -> NormalizedText {
    STOP_NAMES.normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_with_side_qualifier() {
        assert_eq!(
            clean_stop_name("KING ST WEST AT DUFFERIN ST EAST SIDE"),
            "King St W / Dufferin St E"
        );
    }

    #[test]
    fn school_abbreviations() {
        assert_eq!(clean_stop_name("WEXFORD COLLEGIATE - H.S."), "Wexford Collegiate - HS");
        assert_eq!(clean_stop_name("Agincourt C.I."), "Agincourt CI");
        assert_eq!(clean_stop_name("ST. JOSEPH S.S."), "St Joseph SS");
    }

    #[test]
    fn rail_names() {
        assert_eq!(clean_stop_name("C. N. TOWER"), "CN Tower");
        assert_eq!(clean_stop_name("Old C.N.R. Bridge"), "Old CNR Bridge");
        assert_eq!(clean_stop_name("KIPLING AVE AT MIMICO GO STATION"), "Kipling Ave / Mimico GO Station");
    }

    #[test]
    fn numbers_and_street_types() {
        assert_eq!(clean_stop_name("FIRST AVENUE AT 3RD STREET"), "1st Ave / 3rd St");
    }

    #[test]
    fn unknown_text_passes_through() {
        assert_eq!(clean_stop_name("Zzyzx"), "Zzyzx");
        assert_eq!(clean_stop_name("Humber Loop"), "Humber Loop");
    }

    #[test]
    fn collapses_spacing_and_punctuation() {
        assert_eq!(clean_stop_name("  BLOOR   ST  WEST  . "), "Bloor St W");
    }
}
