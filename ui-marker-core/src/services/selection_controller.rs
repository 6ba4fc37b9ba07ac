//! Async driver around [`SelectionMachine`]

use tokio::sync::mpsc;
use ui_marker_catalog::CatalogEntry;

use crate::error::CoreResult;
use crate::services::selection_machine::{Effect, SelectionEvent, SelectionMachine};
use crate::services::ServiceContext;
use crate::types::{ControllerConfig, FieldKind, RequestTicket, SearchQuery, SelectionState};

/// What a fetch task posts back: its ticket and, unless the task died before
/// the lookup returned, the arrival event.
struct Completion {
    ticket: RequestTicket,
    event: Option<SelectionEvent>,
}

/// Owned by a fetch task. Posts the result on [`finish`](Self::finish), or an
/// empty completion when dropped without one (the lookup panicked).
struct PendingFetch {
    ticket: RequestTicket,
    tx: mpsc::UnboundedSender<Completion>,
    finished: bool,
}

impl PendingFetch {
    fn new(ticket: RequestTicket, tx: mpsc::UnboundedSender<Completion>) -> Self {
        Self {
            ticket,
            tx,
            finished: false,
        }
    }

    fn finish(mut self, event: SelectionEvent) {
        self.finished = true;
        // Receiver gone means the controller was dropped.
        let _ = self.tx.send(Completion {
            ticket: self.ticket,
            event: Some(event),
        });
    }
}

impl Drop for PendingFetch {
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.tx.send(Completion {
                ticket: self.ticket,
                event: None,
            });
        }
    }
}

/// Owns the selection state and carries out the machine's effects.
///
/// Fetches run as tokio tasks and report back over a channel; their results
/// are applied only when the owner calls [`next_completion`](Self::next_completion),
/// [`drain_ready`](Self::drain_ready) or [`settle`](Self::settle). Change
/// handlers never wait for a fetch, so the caller stays responsive while
/// requests are in flight. Must be used inside a tokio runtime.
pub struct SelectionController {
    ctx: ServiceContext,
    machine: SelectionMachine,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
    pending: [usize; 3],
}

impl SelectionController {
    /// Controller whose Application field offers `applications`.
    #[must_use]
    pub fn new(
        ctx: ServiceContext,
        applications: Vec<CatalogEntry>,
        config: &ControllerConfig,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            ctx,
            machine: SelectionMachine::new(SelectionState::new(applications), config),
            tx,
            rx,
            pending: [0; 3],
        }
    }

    /// Load the application list from the catalog, then build the controller.
    pub async fn bootstrap(ctx: ServiceContext, config: &ControllerConfig) -> CoreResult<Self> {
        let applications = ctx.catalog.list_applications().await?;
        log::info!(
            "Loaded {} application(s) from {} catalog",
            applications.len(),
            ctx.catalog.id()
        );
        Ok(Self::new(ctx, applications, config))
    }

    pub fn state(&self) -> &SelectionState {
        self.machine.state()
    }

    /// Number of fetches whose results have not been applied yet.
    pub fn in_flight(&self) -> usize {
        self.pending.iter().sum()
    }

    /// Whether a fetch that will repopulate `kind` is outstanding.
    pub fn is_loading(&self, kind: FieldKind) -> bool {
        self.pending[kind.index()] > 0
    }

    /// Application field changed. Starts a modules fetch for a non-empty value.
    pub fn on_application_change(&mut self, value: &str) -> CoreResult<()> {
        self.apply(SelectionEvent::ApplicationChanged(value.to_string()))
            .map(|_| ())
    }

    /// Module field changed. Starts a functions fetch when Application and
    /// Module are both non-empty.
    pub fn on_module_change(&mut self, value: &str) -> CoreResult<()> {
        self.apply(SelectionEvent::ModuleChanged(value.to_string()))
            .map(|_| ())
    }

    pub fn on_function_change(&mut self, value: &str) -> CoreResult<()> {
        self.apply(SelectionEvent::FunctionChanged(value.to_string()))
            .map(|_| ())
    }

    /// Search requested. Returns `true` if the form was submitted, `false`
    /// if a field was still Unselected and the request was ignored.
    pub async fn on_search_triggered(&mut self) -> CoreResult<bool> {
        match self.apply(SelectionEvent::SearchTriggered)? {
            Some(query) => {
                self.ctx.submitter.submit(&query).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Wait for one outstanding fetch and apply its result.
    ///
    /// Returns `false` immediately when nothing is in flight.
    pub async fn next_completion(&mut self) -> bool {
        if self.in_flight() == 0 {
            return false;
        }
        match self.rx.recv().await {
            Some(completion) => {
                self.complete(completion);
                true
            }
            None => false,
        }
    }

    /// Apply every fetch result that is already available without waiting.
    ///
    /// Returns how many results were applied.
    pub fn drain_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.rx.try_recv() {
            self.complete(completion);
            applied += 1;
        }
        applied
    }

    /// Wait until every outstanding fetch has been applied.
    pub async fn settle(&mut self) {
        while self.next_completion().await {}
    }

    fn complete(&mut self, completion: Completion) {
        let Completion { ticket, event } = completion;
        let slot = &mut self.pending[ticket.target.index()];
        *slot = slot.saturating_sub(1);

        let Some(event) = event else {
            log::error!(
                "{} lookup (seq {}) ended without a response, options left unchanged",
                ticket.target,
                ticket.seq
            );
            return;
        };
        if let Err(e) = self.apply(event) {
            log::error!("Failed to apply {} response: {e}", ticket.target);
        }
    }

    /// Run an event through the machine and carry out the resulting effects.
    /// A submit effect is handed back to the caller.
    fn apply(&mut self, event: SelectionEvent) -> CoreResult<Option<SearchQuery>> {
        let effects = self.machine.handle(event)?;
        let mut submit = None;

        for effect in effects {
            match effect {
                Effect::FetchModules {
                    ticket,
                    application_id,
                } => {
                    self.pending[ticket.target.index()] += 1;
                    let catalog = self.ctx.catalog.clone();
                    let pending = PendingFetch::new(ticket, self.tx.clone());
                    tokio::spawn(async move {
                        let outcome = catalog.list_modules(&application_id).await;
                        pending.finish(SelectionEvent::ModulesArrived { ticket, outcome });
                    });
                }
                Effect::FetchFunctions {
                    ticket,
                    application_id,
                    module_id,
                } => {
                    self.pending[ticket.target.index()] += 1;
                    let catalog = self.ctx.catalog.clone();
                    let pending = PendingFetch::new(ticket, self.tx.clone());
                    tokio::spawn(async move {
                        let outcome = catalog.list_functions(&application_id, &module_id).await;
                        pending.finish(SelectionEvent::FunctionsArrived { ticket, outcome });
                    });
                }
                Effect::ReportFailure(failure) => self.ctx.error_sink.report(&failure),
                Effect::Submit(query) => submit = Some(query),
            }
        }

        Ok(submit)
    }
}
