//! Cascading selection state machine
//!
//! Pure part of the controller: every input is an event, every output is a
//! list of effects for the caller to carry out. No I/O happens here, which
//! keeps the whole cascade testable without a runtime.
//!
//! ```text
//!   ApplicationChanged(v) ── v non-empty ──▶ FetchModules
//!   ModuleChanged(v) ─ app & v non-empty ──▶ FetchFunctions
//!   SearchTriggered ── all three selected ─▶ Submit
//!   ModulesArrived(Ok) ──▶ Module := sentinel + records, Function := sentinel
//!   FunctionsArrived(Ok) ─▶ Function := sentinel + records
//!   *Arrived(Err) ───────▶ ReportFailure, state untouched
//! ```

use ui_marker_catalog::{CatalogEntry, CatalogError};

use crate::error::CoreResult;
use crate::types::{
    ControllerConfig, FetchFailure, FieldKind, RequestTicket, ResponseOrdering, SearchQuery,
    SelectionState,
};

/// Input to [`SelectionMachine::handle`].
#[derive(Debug, Clone)]
pub enum SelectionEvent {
    /// The Application field's value changed.
    ApplicationChanged(String),
    /// The Module field's value changed.
    ModuleChanged(String),
    /// The Function field's value changed.
    FunctionChanged(String),
    /// The user asked to search.
    SearchTriggered,
    /// A modules-by-application fetch completed.
    ModulesArrived {
        ticket: RequestTicket,
        outcome: Result<Vec<CatalogEntry>, CatalogError>,
    },
    /// A functions-by-module fetch completed.
    FunctionsArrived {
        ticket: RequestTicket,
        outcome: Result<Vec<CatalogEntry>, CatalogError>,
    },
}

/// Output of [`SelectionMachine::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchModules {
        ticket: RequestTicket,
        application_id: String,
    },
    FetchFunctions {
        ticket: RequestTicket,
        application_id: String,
        module_id: String,
    },
    Submit(SearchQuery),
    ReportFailure(FetchFailure),
}

/// Selection state plus the request counters needed to order responses.
#[derive(Debug, Clone)]
pub struct SelectionMachine {
    state: SelectionState,
    ordering: ResponseOrdering,
    module_seq: u64,
    function_seq: u64,
}

impl SelectionMachine {
    #[must_use]
    pub fn new(state: SelectionState, config: &ControllerConfig) -> Self {
        Self {
            state,
            ordering: config.response_ordering,
            module_seq: 0,
            function_seq: 0,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    /// Sequence number of the newest fetch issued for `target` (0 if none).
    pub fn latest_issued(&self, target: FieldKind) -> u64 {
        match target {
            FieldKind::Module => self.module_seq,
            FieldKind::Function => self.function_seq,
            FieldKind::Application => 0,
        }
    }

    /// Feed one event through the machine.
    ///
    /// Fails only when a change event names a value the field does not offer;
    /// in that case the state is left exactly as it was.
    pub fn handle(&mut self, event: SelectionEvent) -> CoreResult<Vec<Effect>> {
        match event {
            SelectionEvent::ApplicationChanged(value) => self.on_application_change(&value),
            SelectionEvent::ModuleChanged(value) => self.on_module_change(&value),
            SelectionEvent::FunctionChanged(value) => {
                self.state.function.select(&value)?;
                Ok(Vec::new())
            }
            SelectionEvent::SearchTriggered => Ok(self.on_search_triggered()),
            SelectionEvent::ModulesArrived { ticket, outcome } => {
                Ok(self.on_arrival(ticket, outcome, |state, modules| {
                    state.module.repopulate(modules);
                    state.function.reset();
                }))
            }
            SelectionEvent::FunctionsArrived { ticket, outcome } => {
                Ok(self.on_arrival(ticket, outcome, |state, functions| {
                    state.function.repopulate(functions);
                }))
            }
        }
    }

    fn on_application_change(&mut self, value: &str) -> CoreResult<Vec<Effect>> {
        self.state.application.select(value)?;

        // Reverting to the sentinel neither fetches nor resets Module/Function.
        if value.is_empty() {
            log::debug!("Application cleared, keeping module/function options");
            return Ok(Vec::new());
        }

        let ticket = self.issue(FieldKind::Module);
        log::debug!("Fetching modules for application {value} (seq {})", ticket.seq);
        Ok(vec![Effect::FetchModules {
            ticket,
            application_id: value.to_string(),
        }])
    }

    fn on_module_change(&mut self, value: &str) -> CoreResult<Vec<Effect>> {
        self.state.module.select(value)?;

        let application_id = self.state.application.value();
        if application_id.is_empty() || value.is_empty() {
            log::debug!("Module change without application/module, no fetch");
            return Ok(Vec::new());
        }

        let application_id = application_id.to_string();
        let ticket = self.issue(FieldKind::Function);
        log::debug!(
            "Fetching functions for {application_id}/{value} (seq {})",
            ticket.seq
        );
        Ok(vec![Effect::FetchFunctions {
            ticket,
            application_id,
            module_id: value.to_string(),
        }])
    }

    fn on_search_triggered(&self) -> Vec<Effect> {
        match self.state.search_query() {
            Some(query) => vec![Effect::Submit(query)],
            None => {
                log::debug!("Search ignored: application, module and function are required");
                Vec::new()
            }
        }
    }

    fn on_arrival(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Vec<CatalogEntry>, CatalogError>,
        apply: impl FnOnce(&mut SelectionState, Vec<CatalogEntry>),
    ) -> Vec<Effect> {
        if !self.is_current(ticket) {
            log::debug!(
                "Discarding stale {} response (seq {}, latest {})",
                ticket.target,
                ticket.seq,
                self.latest_issued(ticket.target)
            );
            return Vec::new();
        }

        match outcome {
            Ok(entries) => {
                log::debug!(
                    "Applying {} {} option(s) (seq {})",
                    entries.len(),
                    ticket.target,
                    ticket.seq
                );
                apply(&mut self.state, entries);
                Vec::new()
            }
            Err(error) => vec![Effect::ReportFailure(FetchFailure { ticket, error })],
        }
    }

    /// Application options never come from a change-triggered fetch, so only
    /// Module and Function carry counters.
    fn issue(&mut self, target: FieldKind) -> RequestTicket {
        let seq = match target {
            FieldKind::Module => {
                self.module_seq += 1;
                self.module_seq
            }
            FieldKind::Function => {
                self.function_seq += 1;
                self.function_seq
            }
            FieldKind::Application => 0,
        };
        RequestTicket { target, seq }
    }

    fn is_current(&self, ticket: RequestTicket) -> bool {
        match self.ordering {
            ResponseOrdering::LastArrivalWins => true,
            ResponseOrdering::LatestRequestWins => ticket.seq == self.latest_issued(ticket.target),
        }
    }
}
