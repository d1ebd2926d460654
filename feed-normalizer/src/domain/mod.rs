//! Domain types for the feed normalizer.
//!
//! Records arrive here already decoded by the feed reader. Value types
//! enforce their invariants at construction time, so code that receives
//! them can trust their validity.

mod color;
mod direction;
mod error;
mod record;
mod route_id;
mod route_type;
mod text;

pub use color::{ColorCode, InvalidColorCode};
pub use direction::{CanonicalDirection, DirectionHint, InvalidDirectionHint};
pub use error::NormalizeError;
pub use record::{RouteRecord, StopRecord, TripRecord};
pub use route_id::RouteId;
pub use route_type::RouteType;
pub use text::NormalizedText;
