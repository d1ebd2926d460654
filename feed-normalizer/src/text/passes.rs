//! Rewrite passes and the ordered pipeline that runs them.
//!
//! Every pass is a pure `&str -> String` rewrite. Pass order is
//! load-bearing: later passes assume earlier ones already ran (the
//! abbreviation fixes expect lower-cased input with dots still present,
//! the label pass expects everything else to be done).

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::NormalizedText;

use super::street_types;

/// " at " between two street names marks an intersection.
static AT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bat\b").expect("valid regex"));

static AND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\band\b").expect("valid regex"));

/// Side-of-street qualifier, as in "King St East Side".
static SIDE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bside\b").expect("valid regex"));

/// Start of a word as the label pass sees it: the text start (past any
/// punctuation the label pass trims), or any non-word character other than
/// an apostrophe ("Michael's" is one word).
pub(crate) const WORD_START: &str = r"(^[\W_]*|[^\w'’])";

/// Compass words, only where the label pass would also capitalize them.
static COMPASS_RULES: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    [("east", "E"), ("west", "W"), ("north", "N"), ("south", "S")]
        .into_iter()
        .map(|(word, letter)| {
            let re = Regex::new(&format!(r"(?i){WORD_START}{word}\b")).expect("valid regex");
            (re, format!("${{1}}{letter}"))
        })
        .collect()
});

static WORD_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"{WORD_START}(\w)")).expect("valid regex"));

/// Punctuated abbreviations with a fixed canonical spelling.
///
/// Each pattern also accepts the undotted form so a second run leaves the
/// canonical spelling alone. "C.N.R." must be tried before "C.N.".
static ABBREVIATION_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\bh\.?s\b\.?", "HS"),
        (r"(?i)\bs\.?s\b\.?", "SS"),
        (r"(?i)\bc\.?n\.?r\b\.?", "CNR"),
        (r"(?i)\bc(?:\.\s*)?n\b\.?", "CN"),
        (r"(?i)\bc\.?i\b\.?", "CI"),
        (r"(?i)\bii\b", "II"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("valid regex"), replacement))
    .collect()
});

/// The GO regional rail brand.
static GO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bgo\b").expect("valid regex"));

static POINTS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.+").expect("valid regex"));

static ORDINAL_WORD_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        ("first", "1st"),
        ("second", "2nd"),
        ("third", "3rd"),
        ("fourth", "4th"),
        ("fifth", "5th"),
        ("sixth", "6th"),
        ("seventh", "7th"),
        ("eighth", "8th"),
        ("ninth", "9th"),
        ("tenth", "10th"),
    ]
    .into_iter()
    .map(|(word, ordinal)| {
        let re = Regex::new(&format!(r"(?i)\b{word}\b")).expect("valid regex");
        (re, ordinal)
    })
    .collect()
});

static NUMERIC_ORDINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+)(st|nd|rd|th)\b").expect("valid regex"));

/// One rewrite step of a cleaning pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Lower-case everything, giving later passes a uniform baseline.
    LowerCase,
    /// "King St at Bathurst St" becomes "King St / Bathurst St".
    AtToSlash,
    /// "and" becomes "&".
    AndToAmpersand,
    /// Drop a standalone "side" word, keeping the separators around it.
    StripSide,
    /// Standalone "east"/"west"/"north"/"south" become "E"/"W"/"N"/"S".
    AbbreviateCompass,
    /// "H.S." becomes "HS", "C.N.R." becomes "CNR", and so on.
    FixAbbreviations,
    /// A standalone "go" becomes "GO".
    UpperCaseGo,
    /// Remove periods that end a word rather than join two.
    RemovePoints,
    /// Canonical street-type abbreviations ("Avenue" becomes "Ave").
    StreetTypes,
    /// Ordinal words become digits; ordinal suffixes are lower-cased.
    Numbers,
    /// Collapse whitespace, trim punctuation off both ends, capitalize words.
    Label,
}

impl Pass {
    /// Run this pass over `text`.
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Pass::LowerCase => Cow::Owned(text.to_lowercase()),
            Pass::AtToSlash => AT_RE.replace_all(text, "/"),
            Pass::AndToAmpersand => AND_RE.replace_all(text, "&"),
            Pass::StripSide => SIDE_RE.replace_all(text, ""),
            Pass::AbbreviateCompass => replace_each(text, &COMPASS_RULES),
            Pass::FixAbbreviations => replace_each(text, &ABBREVIATION_RULES),
            Pass::UpperCaseGo => GO_RE.replace_all(text, "GO"),
            Pass::RemovePoints => remove_points(text),
            Pass::StreetTypes => street_types::clean(text),
            Pass::Numbers => clean_numbers(text),
            Pass::Label => Cow::Owned(clean_label(text)),
        }
    }
}

/// An ordered list of passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNormalizer {
    passes: Vec<Pass>,
}

impl TextNormalizer {
    /// The shared pipeline applied to any free-text label.
    pub const STANDARD: &'static [Pass] = &[
        Pass::LowerCase,
        Pass::AtToSlash,
        Pass::StripSide,
        Pass::AbbreviateCompass,
        Pass::FixAbbreviations,
        Pass::UpperCaseGo,
        Pass::RemovePoints,
        Pass::StreetTypes,
        Pass::Numbers,
        Pass::Label,
    ];

    pub fn new(passes: Vec<Pass>) -> Self {
        Self { passes }
    }

    pub fn standard() -> Self {
        Self::new(Self::STANDARD.to_vec())
    }

    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    /// Run every pass in order.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        let mut out = text.to_string();
        for pass in &self.passes {
            out = pass.apply(&out).into_owned();
        }
        NormalizedText::from_clean(out)
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::standard()
    }
}

static STANDARD: LazyLock<TextNormalizer> = LazyLock::new(TextNormalizer::standard);

/// Run the shared pipeline over `text`.
///
/// # Examples
///
/// ```
/// use feed_normalizer::text::normalize;
///
/// assert_eq!(normalize("KING ST EAST AT H.S. ENTRANCE").as_str(), "King St E / HS Entrance");
/// ```
pub fn normalize(text: &str) -> NormalizedText {
    STANDARD.normalize(text)
}

/// Apply each `(pattern, replacement)` in turn, allocating only on change.
pub(crate) fn replace_each<'a, R: AsRef<str>>(text: &'a str, rules: &[(Regex, R)]) -> Cow<'a, str> {
    let mut out = Cow::Borrowed(text);
    for (re, replacement) in rules {
        let replaced = match re.replace_all(&out, replacement.as_ref()) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        if let Some(s) = replaced {
            out = Cow::Owned(s);
        }
    }
    out
}

/// Drop every run of periods unless it sits between two alphanumerics
/// ("1.5", "st.clair" are kept; "st.", "e. g" lose theirs).
fn remove_points(text: &str) -> Cow<'_, str> {
    POINTS_RE.replace_all(text, |caps: &Captures| {
        let Some(m) = caps.get(0) else {
            return String::new();
        };
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        match (before, after) {
            (Some(b), Some(a)) if b.is_alphanumeric() && a.is_alphanumeric() => {
                m.as_str().to_string()
            }
            _ => String::new(),
        }
    })
}

fn clean_numbers(text: &str) -> Cow<'_, str> {
    let words = replace_each(text, &ORDINAL_WORD_RULES);
    let replaced = match NUMERIC_ORDINAL_RE.replace_all(&words, |caps: &Captures| {
        format!("{}{}", &caps[1], caps[2].to_ascii_lowercase())
    }) {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    };
    match replaced {
        Some(s) => Cow::Owned(s),
        None => words,
    }
}

/// Final cleanup shared by every label.
fn clean_label(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = collapsed
        .trim_start_matches(|c: char| !c.is_alphanumeric() && c != '(')
        .trim_end_matches(|c: char| !c.is_alphanumeric() && c != ')')
        .trim();

    WORD_START_RE
        .replace_all(trimmed, |caps: &Captures| {
            let mut out = caps[1].to_string();
            out.extend(caps[2].chars().map(capitalize));
            out
        })
        .into_owned()
}

/// Upper-case a letter, unless its upper case is more than one character
/// ("ß" would become "SS").
fn capitalize(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pass: Pass, text: &str) -> String {
        pass.apply(text).into_owned()
    }

    #[test]
    fn at_becomes_slash() {
        assert_eq!(run(Pass::AtToSlash, "king st at bathurst st"), "king st / bathurst st");
        assert_eq!(run(Pass::AtToSlash, "AT the loop"), "/ the loop");
        // Only the whole word
        assert_eq!(run(Pass::AtToSlash, "bathurst station"), "bathurst station");
    }

    #[test]
    fn and_becomes_ampersand() {
        assert_eq!(run(Pass::AndToAmpersand, "york mills and leslie"), "york mills & leslie");
        assert_eq!(run(Pass::AndToAmpersand, "sandown"), "sandown");
    }

    #[test]
    fn side_is_stripped_keeping_separators() {
        assert_eq!(run(Pass::StripSide, "king st east side"), "king st east ");
        assert_eq!(run(Pass::StripSide, "queen - north side - stop"), "queen - north  - stop");
        assert_eq!(run(Pass::StripSide, "eastside loop"), "eastside loop");
    }

    #[test]
    fn compass_words_abbreviated() {
        assert_eq!(run(Pass::AbbreviateCompass, "main st east"), "main st E");
        assert_eq!(run(Pass::AbbreviateCompass, "north york / west mall"), "N york / W mall");
        assert_eq!(run(Pass::AbbreviateCompass, "east west"), "E W");
        // Embedded in a longer word: untouched
        assert_eq!(run(Pass::AbbreviateCompass, "northwood westway"), "northwood westway");
        assert_eq!(run(Pass::AbbreviateCompass, "southbound"), "southbound");
    }

    #[test]
    fn punctuated_abbreviations_fixed() {
        assert_eq!(run(Pass::FixAbbreviations, "Near C.N.R. Tracks"), "Near CNR Tracks");
        assert_eq!(run(Pass::FixAbbreviations, "agincourt c.i."), "agincourt CI");
        assert_eq!(run(Pass::FixAbbreviations, "wexford h.s. loop"), "wexford HS loop");
        assert_eq!(run(Pass::FixAbbreviations, "st joe s.s."), "st joe SS");
        assert_eq!(run(Pass::FixAbbreviations, "c. n. tower"), "CN tower");
        assert_eq!(run(Pass::FixAbbreviations, "pope john paul ii"), "pope john paul II");
        // Roman numeral only as a whole token
        assert_eq!(run(Pass::FixAbbreviations, "hawaii"), "hawaii");
    }

    #[test]
    fn go_uppercased() {
        assert_eq!(run(Pass::UpperCaseGo, "mimico go station"), "mimico GO station");
        assert_eq!(run(Pass::UpperCaseGo, "gordon"), "gordon");
    }

    #[test]
    fn word_ending_points_removed() {
        assert_eq!(run(Pass::RemovePoints, "st. clair ave."), "st clair ave");
        assert_eq!(run(Pass::RemovePoints, "x.. y"), "x y");
        assert_eq!(run(Pass::RemovePoints, "1.5 km"), "1.5 km");
        assert_eq!(run(Pass::RemovePoints, "st.clair"), "st.clair");
    }

    #[test]
    fn numbers_normalized() {
        assert_eq!(run(Pass::Numbers, "first ave"), "1st ave");
        assert_eq!(run(Pass::Numbers, "Tenth Line"), "10th Line");
        assert_eq!(run(Pass::Numbers, "3RD st"), "3rd st");
        assert_eq!(run(Pass::Numbers, "firstbrooke"), "firstbrooke");
    }

    #[test]
    fn label_collapses_trims_and_capitalizes() {
        assert_eq!(run(Pass::Label, "  king   st  / bathurst st "), "King St / Bathurst St");
        assert_eq!(run(Pass::Label, "- union station -"), "Union Station");
        assert_eq!(run(Pass::Label, "york mills & leslie,"), "York Mills & Leslie");
        assert_eq!(run(Pass::Label, "lake shore blvd w-humber loop"), "Lake Shore Blvd W-Humber Loop");
        assert_eq!(run(Pass::Label, "main st (north)"), "Main St (North)");
        // Existing capitals are kept
        assert_eq!(run(Pass::Label, "wexford HS"), "Wexford HS");
        assert_eq!(run(Pass::Label, "st michael's"), "St Michael's");
        assert_eq!(run(Pass::Label, "st.clair,dupont"), "St.Clair,Dupont");
    }

    #[test]
    fn label_keeps_character_count() {
        assert_eq!(run(Pass::Label, "ßtraße"), "ßtraße");
        assert_eq!(run(Pass::Label, "ﬁnch"), "ﬁnch");
        assert_eq!(run(Pass::Label, "élan"), "Élan");
    }

    #[test]
    fn sharp_s_is_stable() {
        let once = normalize("ßtraße");
        assert_eq!(once, "ßtraße");
        assert_eq!(normalize(once.as_str()), once);
    }

    #[test]
    fn compass_after_punctuation_is_stable() {
        let once = normalize("queen,east");
        assert_eq!(once, "Queen,E");
        assert_eq!(normalize(once.as_str()), once);
        // Not after an apostrophe
        assert_eq!(run(Pass::AbbreviateCompass, "o'east"), "o'east");
        assert_eq!(run(Pass::AbbreviateCompass, "'east"), "'E");
        assert_eq!(normalize("_east"), "E");
    }

    #[test]
    fn unchanged_input_is_borrowed() {
        assert!(matches!(Pass::AtToSlash.apply("no match here"), Cow::Borrowed(_)));
        assert!(matches!(Pass::FixAbbreviations.apply("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn standard_pipeline_order() {
        let passes = TextNormalizer::standard();
        assert_eq!(passes.passes().first(), Some(&Pass::LowerCase));
        assert_eq!(passes.passes().last(), Some(&Pass::Label));
    }

    #[test]
    fn normalize_full_label() {
        assert_eq!(
            normalize("KING ST WEST AT BATHURST ST NORTH SIDE"),
            "King St W / Bathurst St N"
        );
        assert_eq!(normalize("Agincourt C.I."), "Agincourt CI");
        assert_eq!(normalize("Mimico Go Station"), "Mimico GO Station");
        assert_eq!(normalize("Lawrence Avenue East"), "Lawrence Ave E");
    }

    #[test]
    fn cnr_fix_leaves_surroundings() {
        let out = normalize("Old C.N.R. Bridge");
        assert!(out.as_str().contains("CNR"));
        assert_eq!(out, "Old CNR Bridge");
    }

    #[test]
    fn empty_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("  -- / ").is_empty());
    }
}
