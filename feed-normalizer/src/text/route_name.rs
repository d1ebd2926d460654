//! Route long names.

use std::sync::LazyLock;

use crate::domain::NormalizedText;

use super::{Pass, TextNormalizer};

/// Route long names only need casing and label cleanup.
pub const ROUTE_LONG_NAME_PASSES: &[Pass] = &[Pass::LowerCase, Pass::Label];

static ROUTE_LONG_NAMES: LazyLock<TextNormalizer> =
    LazyLock::new(|| TextNormalizer::new(ROUTE_LONG_NAME_PASSES.to_vec()));

/// Clean a route long name; an absent name cleans to empty text.
pub fn clean_route_long_name(raw: Option<&str>) -> NormalizedText {
    ROUTE_LONG_NAMES.normalize(raw.unwrap_or_default())
}
