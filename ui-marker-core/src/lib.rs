//! UI Marker Core Library
//!
//! Keeps the Application, Module and Function selections of the search form
//! consistent with each other:
//! - choosing an Application loads that application's modules
//! - choosing a Module loads that module's functions
//! - a search is submitted only when all three are chosen
//!
//! The cascade itself is a pure state machine ([`SelectionMachine`]);
//! [`SelectionController`] drives it against a catalog, a form submitter and
//! an error sink supplied through [`ServiceContext`].

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CatalogError, CoreError, CoreResult};
pub use services::{Effect, SelectionController, SelectionEvent, SelectionMachine, ServiceContext};
pub use traits::{ErrorSink, FormSubmitter, InMemoryFormSubmitter, LogErrorSink, NoOpErrorSink};
pub use types::{
    ControllerConfig, FetchFailure, FieldKind, RequestTicket, ResponseOrdering, SearchQuery,
    SelectField, SelectOption, SelectionState,
};
