use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use feed_normalizer::Normalizer;
use feed_normalizer::batch::{FeedBatch, FeedIoError, load_feed, normalize_feed, read_feed, write_feed};
use feed_normalizer::config::{FailurePolicy, NormalizerConfig};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the feed
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = config_from_env();
    info!(policy = %config.failure_policy, batch_size = config.batch_size, "Starting normalization");

    let batch = match read_input() {
        Ok(batch) => batch,
        Err(e) => {
            error!(error = %e, "Failed to read feed");
            return ExitCode::FAILURE;
        }
    };

    let normalizer = Arc::new(Normalizer::toronto_bus(config));
    let feed = match normalize_feed(normalizer, batch).await {
        Ok(feed) => feed,
        Err(e) => {
            error!(error = %e, "Normalization aborted");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = write_feed(io::stdout().lock(), &feed) {
        error!(error = %e, "Failed to write feed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Defaults, overridden by `FEED_NORMALIZER_POLICY` and
/// `FEED_NORMALIZER_BATCH_SIZE`.
fn config_from_env() -> NormalizerConfig {
    let mut config = NormalizerConfig::default();

    if let Ok(raw) = std::env::var("FEED_NORMALIZER_POLICY") {
        match raw.parse::<FailurePolicy>() {
            Ok(policy) => config.failure_policy = policy,
            Err(e) => warn!(error = %e, "Ignoring FEED_NORMALIZER_POLICY"),
        }
    }

    if let Ok(raw) = std::env::var("FEED_NORMALIZER_BATCH_SIZE") {
        match raw.trim().parse::<usize>() {
            Ok(size) if size > 0 => config.batch_size = size,
            _ => warn!(value = %raw, "Ignoring FEED_NORMALIZER_BATCH_SIZE: expected a positive integer"),
        }
    }

    config
}

/// The file named by `FEED_NORMALIZER_INPUT`, else stdin.
fn read_input() -> Result<FeedBatch, FeedIoError> {
    match std::env::var_os("FEED_NORMALIZER_INPUT") {
        Some(path) => {
            let path = PathBuf::from(path);
            info!(path = %path.display(), "Reading feed");
            load_feed(&path)
        }
        None => read_feed(BufReader::new(io::stdin().lock())),
    }
}
