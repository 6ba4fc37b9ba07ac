//! Collaborator abstraction trait definition

mod error_sink;
mod form_submitter;

pub use error_sink::{ErrorSink, LogErrorSink, NoOpErrorSink};
pub use form_submitter::{FormSubmitter, InMemoryFormSubmitter};
