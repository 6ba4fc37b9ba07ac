//! Selection services

mod selection_controller;
mod selection_machine;

pub use selection_controller::SelectionController;
pub use selection_machine::{Effect, SelectionEvent, SelectionMachine};

use std::sync::Arc;

use ui_marker_catalog::CatalogProvider;

use crate::traits::{ErrorSink, FormSubmitter, LogErrorSink};

/// Service context - holds all dependencies
///
/// The front end builds this context and injects its own catalog, submitter
/// and failure reporting.
pub struct ServiceContext {
    /// Source of module and function options
    pub catalog: Arc<dyn CatalogProvider>,
    /// Target of a complete search
    pub submitter: Arc<dyn FormSubmitter>,
    /// Where failed fetches are reported
    pub error_sink: Arc<dyn ErrorSink>,
}

impl ServiceContext {
    /// Create service context
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        submitter: Arc<dyn FormSubmitter>,
        error_sink: Arc<dyn ErrorSink>,
    ) -> Self {
        Self {
            catalog,
            submitter,
            error_sink,
        }
    }

    /// Context that reports failures through the `log` facade.
    #[must_use]
    pub fn with_logging(
        catalog: Arc<dyn CatalogProvider>,
        submitter: Arc<dyn FormSubmitter>,
    ) -> Self {
        Self::new(catalog, submitter, Arc::new(LogErrorSink))
    }
}
