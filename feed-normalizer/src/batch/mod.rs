//! Whole-feed batch driver.
//!
//! Applies the normalizer to every record of a decoded feed. Records are
//! independent, so they are cut into chunks of `batch_size` and each chunk
//! runs on a blocking worker. Output order always matches input order.
//!
//! A failing record either aborts the batch or is dropped and reported,
//! according to the configured [`FailurePolicy`].

mod error;
mod filter;
mod io;

pub use error::{BatchError, FeedIoError, RecordKind};
pub use filter::{NOT_IN_SERVICE, TripFilter};
pub use io::{load_feed, read_feed, write_feed};

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::FailurePolicy;
use crate::domain::{
    CanonicalDirection, ColorCode, NormalizeError, NormalizedText, RouteId, RouteRecord,
    StopRecord, TripRecord,
};
use crate::normalizer::Normalizer;

/// A decoded feed, as handed over by the feed reader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedBatch {
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
    #[serde(default)]
    pub trips: Vec<TripRecord>,
    #[serde(default)]
    pub stops: Vec<StopRecord>,
    /// Service ids active in the selected calendar window. Absent means
    /// every service is active.
    #[serde(default)]
    pub active_service_ids: Option<HashSet<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRoute {
    pub id: RouteId,
    pub short_code: String,
    pub long_name: NormalizedText,
    /// Agency colour when the route has no colour of its own.
    pub color: ColorCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedTrip {
    pub route_id: RouteId,
    pub direction: CanonicalDirection,
    pub headsign: NormalizedText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedStop {
    pub name: NormalizedText,
}

/// A record dropped under [`FailurePolicy::SkipAndReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    pub kind: RecordKind,
    /// Position in the input list.
    pub index: usize,
    pub reason: String,
}

/// The normalized feed, ready for the feed writer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedFeed {
    pub routes: Vec<NormalizedRoute>,
    pub trips: Vec<NormalizedTrip>,
    pub stops: Vec<NormalizedStop>,
    pub skipped: Vec<SkippedRecord>,
}

type Indexed<T> = (usize, Result<T, NormalizeError>);

/// Normalize a whole feed on the blocking thread pool.
pub async fn normalize_feed(
    normalizer: Arc<Normalizer>,
    batch: FeedBatch,
) -> Result<NormalizedFeed, BatchError> {
    let policy = normalizer.config().failure_policy;
    let chunk_size = normalizer.config().chunk_size();
    let (trips, excluded) = exclude_trips(batch.trips, batch.active_service_ids);

    let routes = run_chunked(&normalizer, index(batch.routes), chunk_size, normalize_route).await?;
    let trips = run_chunked(&normalizer, trips, chunk_size, normalize_trip).await?;
    let stops = run_chunked(&normalizer, index(batch.stops), chunk_size, normalize_stop).await?;

    let feed = settle_all(routes, trips, stops, policy)?;
    log_summary(&feed, excluded);
    Ok(feed)
}

/// Normalize a whole feed on the calling thread.
pub fn normalize_feed_blocking(
    normalizer: &Normalizer,
    batch: FeedBatch,
) -> Result<NormalizedFeed, BatchError> {
    let policy = normalizer.config().failure_policy;
    let (trips, excluded) = exclude_trips(batch.trips, batch.active_service_ids);

    let routes = run_inline(normalizer, index(batch.routes), normalize_route);
    let trips = run_inline(normalizer, trips, normalize_trip);
    let stops = run_inline(normalizer, index(batch.stops), normalize_stop);

    let feed = settle_all(routes, trips, stops, policy)?;
    log_summary(&feed, excluded);
    Ok(feed)
}

fn normalize_route(
    normalizer: &Normalizer,
    route: RouteRecord,
) -> Result<NormalizedRoute, NormalizeError> {
    let id = normalizer.resolve_route_id(&route)?;
    let color = normalizer.route_color_or_agency(&route)?;
    let long_name = normalizer.clean_route_long_name(route.long_name.as_deref());
    Ok(NormalizedRoute {
        id,
        short_code: route.short_code,
        long_name,
        color,
    })
}

/// Classify, then clean. A headsign with nothing left falls back to the
/// direction's name when that direction is a compass point.
fn normalize_trip(normalizer: &Normalizer, trip: TripRecord) -> Result<NormalizedTrip, NormalizeError> {
    let direction =
        normalizer.classify_direction(trip.route_id, &trip.raw_headsign, trip.direction_hint)?;
    let headsign = match normalizer.clean_headsign(&trip.raw_headsign) {
        Ok(headsign) => headsign,
        Err(NormalizeError::UnhandledHeadsignShape { .. }) if direction.is_compass() => {
            debug!(route_id = %trip.route_id, headsign = %trip.raw_headsign, %direction, "Headsign falls back to direction");
            NormalizedText::from_clean(direction.label().to_string())
        }
        Err(e) => return Err(e),
    };
    Ok(NormalizedTrip {
        route_id: trip.route_id,
        direction,
        headsign,
    })
}

fn normalize_stop(normalizer: &Normalizer, stop: StopRecord) -> NormalizedStop {
    NormalizedStop {
        name: normalizer.clean_stop_name(&stop.raw_name),
    }
}

fn index<T>(records: Vec<T>) -> Vec<(usize, T)> {
    records.into_iter().enumerate().collect()
}

/// Drop excluded trips, keeping each survivor's original position.
fn exclude_trips(
    trips: Vec<TripRecord>,
    active_service_ids: Option<HashSet<String>>,
) -> (Vec<(usize, TripRecord)>, usize) {
    let filter = TripFilter::new(active_service_ids);
    if filter.excludes_all() && !trips.is_empty() {
        warn!(trips = trips.len(), "Active service set is empty, excluding all trips");
    }

    let total = trips.len();
    let kept: Vec<_> = trips
        .into_iter()
        .enumerate()
        .filter(|(_, trip)| !filter.is_excluded(trip))
        .collect();
    let excluded = total - kept.len();
    (kept, excluded)
}

/// Run `f` over `records` in chunks, one blocking task per chunk.
async fn run_chunked<T, O>(
    normalizer: &Arc<Normalizer>,
    records: Vec<(usize, T)>,
    chunk_size: usize,
    f: fn(&Normalizer, T) -> O,
) -> Result<Vec<(usize, O)>, BatchError>
where
    T: Send + 'static,
    O: Send + 'static,
{
    let total = records.len();
    let mut chunks = Vec::with_capacity(total.div_ceil(chunk_size));
    let mut records = records.into_iter().peekable();
    while records.peek().is_some() {
        chunks.push(records.by_ref().take(chunk_size).collect::<Vec<_>>());
    }

    let tasks: Vec<_> = chunks
        .into_iter()
        .map(|chunk| {
            let normalizer = Arc::clone(normalizer);
            tokio::task::spawn_blocking(move || run_inline(&normalizer, chunk, f))
        })
        .collect();

    let mut out = Vec::with_capacity(total);
    for result in join_all(tasks).await {
        out.extend(result?);
    }
    Ok(out)
}

fn run_inline<T, O>(
    normalizer: &Normalizer,
    records: Vec<(usize, T)>,
    f: fn(&Normalizer, T) -> O,
) -> Vec<(usize, O)> {
    records
        .into_iter()
        .map(|(i, record)| (i, f(normalizer, record)))
        .collect()
}

fn settle_all(
    routes: Vec<Indexed<NormalizedRoute>>,
    trips: Vec<Indexed<NormalizedTrip>>,
    stops: Vec<(usize, NormalizedStop)>,
    policy: FailurePolicy,
) -> Result<NormalizedFeed, BatchError> {
    let mut skipped = Vec::new();
    let routes = settle(RecordKind::Route, routes, policy, &mut skipped)?;
    let trips = settle(RecordKind::Trip, trips, policy, &mut skipped)?;
    let stops = stops.into_iter().map(|(_, stop)| stop).collect();
    Ok(NormalizedFeed {
        routes,
        trips,
        stops,
        skipped,
    })
}

/// Apply the failure policy to one record list. Under `AbortAll` the
/// lowest-indexed failure is returned.
fn settle<O>(
    kind: RecordKind,
    results: Vec<Indexed<O>>,
    policy: FailurePolicy,
    skipped: &mut Vec<SkippedRecord>,
) -> Result<Vec<O>, BatchError> {
    let mut out = Vec::with_capacity(results.len());
    for (index, result) in results {
        match result {
            Ok(record) => out.push(record),
            Err(source) => match policy {
                FailurePolicy::AbortAll => return Err(BatchError::record(kind, index, source)),
                FailurePolicy::SkipAndReport => {
                    warn!(%kind, index, error = %source, "Skipping record");
                    skipped.push(SkippedRecord {
                        kind,
                        index,
                        reason: source.to_string(),
                    });
                }
            },
        }
    }
    Ok(out)
}

fn log_summary(feed: &NormalizedFeed, excluded_trips: usize) {
    info!(
        routes = feed.routes.len(),
        trips = feed.trips.len(),
        stops = feed.stops.len(),
        excluded_trips,
        skipped = feed.skipped.len(),
        "Feed normalized"
    );
}
