//! Fetch bookkeeping shared by the machine and its collaborators

use serde::Serialize;
use ui_marker_catalog::CatalogError;

use crate::types::FieldKind;

/// Identifies one issued fetch.
///
/// `target` is the field the response will repopulate; `seq` counts the
/// fetches issued for that target, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RequestTicket {
    pub target: FieldKind,
    pub seq: u64,
}

/// A fetch that completed with an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchFailure {
    pub ticket: RequestTicket,
    pub error: CatalogError,
}

impl FetchFailure {
    /// Field that was left unchanged by the failure.
    pub fn target(&self) -> FieldKind {
        self.ticket.target
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Loading {} options failed: {}",
            self.ticket.target, self.error
        )
    }
}
