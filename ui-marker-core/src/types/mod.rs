//! Core types

mod config;
mod fetch;
mod query;
mod selection;

pub use config::{ControllerConfig, ResponseOrdering};
pub use fetch::{FetchFailure, RequestTicket};
pub use query::SearchQuery;
pub use selection::{FieldKind, SelectField, SelectOption, SelectionState};

// Re-export catalog record types
pub use ui_marker_catalog::CatalogEntry;
