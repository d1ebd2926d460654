//! Text cleaning for rider-facing labels.
//!
//! A cleaner is an ordered list of [`Pass`]es. The shared pipeline
//! ([`TextNormalizer::STANDARD`]) handles casing, intersection markers,
//! compass words, punctuated abbreviations, street types and numbers;
//! stop names, headsigns and route long names each pick the passes that
//! suit them.

mod headsign;
mod passes;
mod route_name;
mod stop_name;
mod street_types;

pub use headsign::{HEADSIGN_PASSES, HeadsignCleaner, HeadsignPatch};
pub use passes::{Pass, TextNormalizer, normalize};
pub use route_name::{ROUTE_LONG_NAME_PASSES, clean_route_long_name};
pub use stop_name::{STOP_NAME_PASSES, clean_stop_name};
