//! Street-type abbreviations.
//!
//! Long and irregular spellings map to one canonical short form. A
//! canonical form never appears among the spellings it replaces, so the
//! pass leaves already-clean text alone.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::passes::{WORD_START, replace_each};

/// `(spellings, canonical)` pairs. Spellings are matched case-insensitively
/// as whole words starting where the label pass would capitalize.
const STREET_TYPES: &[(&[&str], &str)] = &[
    (&["avenue", "av"], "Ave"),
    (&["boulevard", "boul"], "Blvd"),
    (&["circle"], "Cir"),
    (&["court"], "Ct"),
    (&["crescent"], "Cres"),
    (&["drive"], "Dr"),
    (&["expressway"], "Expy"),
    (&["gardens"], "Gdns"),
    (&["heights"], "Hts"),
    (&["highway"], "Hwy"),
    (&["lane"], "Ln"),
    (&["parkway"], "Pkwy"),
    (&["place"], "Pl"),
    (&["road"], "Rd"),
    (&["square"], "Sq"),
    (&["street", "str"], "St"),
    (&["terrace"], "Terr"),
    (&["trail"], "Trl"),
];

static STREET_TYPE_RULES: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    STREET_TYPES
        .iter()
        .map(|(spellings, canonical)| {
            let pattern = format!(r"(?i){WORD_START}(?:{})\b", spellings.join("|"));
            (Regex::new(&pattern).expect("valid regex"), format!("${{1}}{canonical}"))
        })
        .collect()
});

/// Replace every known street-type spelling with its canonical form.
pub fn clean(text: &str) -> Cow<'_, str> {
    replace_each(text, &STREET_TYPE_RULES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_forms_shortened() {
        assert_eq!(clean("lawrence avenue"), "lawrence Ave");
        assert_eq!(clean("don mills road"), "don mills Rd");
        assert_eq!(clean("lake shore boulevard"), "lake shore Blvd");
        assert_eq!(clean("king street / spadina avenue"), "king St / spadina Ave");
    }

    #[test]
    fn only_whole_words() {
        assert_eq!(clean("streetsville"), "streetsville");
        assert_eq!(clean("placeholder lane"), "placeholder Ln");
        assert_eq!(clean("broadview"), "broadview");
        assert_eq!(clean("o'lane"), "o'lane");
        assert_eq!(clean("queen,avenue"), "queen,Ave");
    }

    #[test]
    fn canonical_forms_untouched() {
        assert!(matches!(clean("king st / spadina ave"), Cow::Borrowed(_)));
    }

    #[test]
    fn no_canonical_form_is_also_a_spelling() {
        for (_, canonical) in STREET_TYPES {
            let lowered = canonical.to_lowercase();
            for (spellings, _) in STREET_TYPES {
                assert!(!spellings.contains(&lowered.as_str()), "{canonical} is a spelling");
            }
        }
    }
}
