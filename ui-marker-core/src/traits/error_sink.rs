//! Fetch failure reporting abstract Trait

use crate::types::FetchFailure;

/// Error Sink Trait
///
/// Called once for every fetch that fails and is still current. The field
/// the fetch targeted keeps its previous options.
pub trait ErrorSink: Send + Sync {
    fn report(&self, failure: &FetchFailure);
}

/// Drops failures; the dependent list simply never repopulates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpErrorSink;

impl ErrorSink for NoOpErrorSink {
    fn report(&self, _failure: &FetchFailure) {}
}

/// Writes failures to the log, `warn` for expected ones and `error` otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogErrorSink;

impl ErrorSink for LogErrorSink {
    fn report(&self, failure: &FetchFailure) {
        if failure.error.is_expected() {
            log::warn!("{failure}");
        } else {
            log::error!("{failure}");
        }
    }
}
