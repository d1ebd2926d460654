//! Normalizer configuration.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::anomalies::{AGENCY_COLOR, NIGHT_COLOR};
use crate::domain::{ColorCode, RouteType};

/// What the batch driver does when a single record fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// The first failure aborts the whole batch.
    #[default]
    AbortAll,
    /// Failed records are dropped and listed in the output.
    SkipAndReport,
}

/// Error returned when parsing an unknown failure policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown failure policy {0:?}: expected \"abort\" or \"skip\"")]
pub struct InvalidFailurePolicy(String);

impl FromStr for FailurePolicy {
    type Err = InvalidFailurePolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::AbortAll),
            "skip" => Ok(FailurePolicy::SkipAndReport),
            _ => Err(InvalidFailurePolicy(s.to_string())),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::AbortAll => f.write_str("abort"),
            FailurePolicy::SkipAndReport => f.write_str("skip"),
        }
    }
}

/// Configuration for a normalization run.
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Colour used for routes with no override.
    pub agency_color: ColorCode,

    /// Vehicle type of every route in the feed.
    pub route_type: RouteType,

    /// Short codes of the night network (inclusive).
    pub night_band: RangeInclusive<u64>,

    /// Colour of the night network.
    pub night_color: ColorCode,

    pub failure_policy: FailurePolicy,

    /// Number of records handed to one worker.
    pub batch_size: usize,
}

impl NormalizerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        agency_color: ColorCode,
        route_type: RouteType,
        night_band: RangeInclusive<u64>,
        night_color: ColorCode,
        failure_policy: FailurePolicy,
        batch_size: usize,
    ) -> Self {
        Self {
            agency_color,
            route_type,
            night_band,
            night_color,
            failure_policy,
            batch_size,
        }
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Batch size clamped to at least one record.
    pub fn chunk_size(&self) -> usize {
        self.batch_size.max(1)
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            agency_color: AGENCY_COLOR,
            route_type: RouteType::Bus,
            night_band: 300..=399,
            night_color: NIGHT_COLOR,
            failure_policy: FailurePolicy::AbortAll,
            batch_size: 256,
        }
    }
}
