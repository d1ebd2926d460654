//! Transit feed normalizer.
//!
//! Turns a transit agency's decoded schedule records into display-ready
//! values: stable route IDs and colours, a compass direction for every
//! trip, and cleaned headsigns and stop names. Unmatched input is reported
//! as an error, never guessed at.

pub mod anomalies;
pub mod batch;
pub mod config;
pub mod direction;
pub mod domain;
pub mod normalizer;
pub mod route;
pub mod text;

pub use normalizer::{
    Normalizer, assign_route_color, classify_direction, clean_headsign, clean_route_long_name,
    clean_stop_name, resolve_route_id,
};
