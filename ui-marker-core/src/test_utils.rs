//! Test helpers
//!
//! Mock collaborators for driving the controller without a network.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;
use ui_marker_catalog::{CatalogEntry, CatalogError, CatalogProvider, Result as CatalogResult};

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::traits::{ErrorSink, FormSubmitter};
use crate::types::{FetchFailure, SearchQuery};

// ===== MockCatalog =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCall {
    Modules(String),
    Functions(String, String),
}

/// In-memory catalog that records every lookup.
///
/// With [`hold`](Self::hold) enabled each lookup parks until the test calls
/// [`release`](Self::release) with its call index, which lets a test decide
/// the order in which responses arrive.
#[derive(Default)]
pub struct MockCatalog {
    applications: Vec<CatalogEntry>,
    modules: HashMap<String, Vec<CatalogEntry>>,
    functions: HashMap<(String, String), Vec<CatalogEntry>>,
    module_failures: HashMap<String, CatalogError>,
    module_panics: HashSet<String>,
    calls: Mutex<Vec<CatalogCall>>,
    held: AtomicBool,
    gates: Mutex<Vec<Option<oneshot::Sender<()>>>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// APP1 (M1 → F1, F2; M2 → F3) and APP2 (M7 → F9).
    pub fn sample() -> Self {
        Self::new()
            .with_application("APP1", "Portal")
            .with_application("APP2", "Back Office")
            .with_modules("APP1", &[("M1", "Auth"), ("M2", "Billing")])
            .with_modules("APP2", &[("M7", "Reports")])
            .with_functions("APP1", "M1", &[("F1", "Login"), ("F2", "Logout")])
            .with_functions("APP1", "M2", &[("F3", "Invoice")])
            .with_functions("APP2", "M7", &[("F9", "Export")])
    }

    pub fn with_application(mut self, id: &str, name: &str) -> Self {
        self.applications.push(CatalogEntry::new(id, name));
        self
    }

    pub fn with_modules(mut self, application_id: &str, modules: &[(&str, &str)]) -> Self {
        self.modules
            .insert(application_id.to_string(), entries(modules));
        self
    }

    pub fn with_functions(
        mut self,
        application_id: &str,
        module_id: &str,
        functions: &[(&str, &str)],
    ) -> Self {
        self.functions.insert(
            (application_id.to_string(), module_id.to_string()),
            entries(functions),
        );
        self
    }

    pub fn with_module_failure(mut self, application_id: &str, error: CatalogError) -> Self {
        self.module_failures
            .insert(application_id.to_string(), error);
        self
    }

    /// Make the modules lookup for `application_id` panic mid-request.
    pub fn with_module_panic(mut self, application_id: &str) -> Self {
        self.module_panics.insert(application_id.to_string());
        self
    }

    /// Park every following lookup until released.
    pub fn hold(&self) {
        self.held.store(true, Ordering::SeqCst);
    }

    /// Let the `index`-th held lookup complete.
    pub fn release(&self, index: usize) {
        let gate = self.gates.lock().unwrap()[index]
            .take()
            .expect("lookup already released");
        let _ = gate.send(());
    }

    pub fn calls(&self) -> Vec<CatalogCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Wait until at least `count` lookups have started.
    pub async fn wait_for_calls(&self, count: usize) {
        for _ in 0..1000 {
            let started = if self.held.load(Ordering::SeqCst) {
                self.gates.lock().unwrap().len()
            } else {
                self.calls.lock().unwrap().len()
            };
            if started >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        panic!("expected {count} catalog lookups, saw {:?}", self.calls());
    }

    async fn record(&self, call: CatalogCall) {
        self.calls.lock().unwrap().push(call);
        if self.held.load(Ordering::SeqCst) {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().unwrap().push(Some(tx));
            let _ = rx.await;
        }
    }
}

fn entries(pairs: &[(&str, &str)]) -> Vec<CatalogEntry> {
    pairs
        .iter()
        .map(|(id, name)| CatalogEntry::new(*id, *name))
        .collect()
}

#[async_trait]
impl CatalogProvider for MockCatalog {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_applications(&self) -> CatalogResult<Vec<CatalogEntry>> {
        Ok(self.applications.clone())
    }

    async fn list_modules(&self, application_id: &str) -> CatalogResult<Vec<CatalogEntry>> {
        self.record(CatalogCall::Modules(application_id.to_string()))
            .await;
        if self.module_panics.contains(application_id) {
            panic!("catalog lookup for {application_id} crashed");
        }
        if let Some(error) = self.module_failures.get(application_id) {
            return Err(error.clone());
        }
        Ok(self
            .modules
            .get(application_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_functions(
        &self,
        application_id: &str,
        module_id: &str,
    ) -> CatalogResult<Vec<CatalogEntry>> {
        self.record(CatalogCall::Functions(
            application_id.to_string(),
            module_id.to_string(),
        ))
        .await;
        Ok(self
            .functions
            .get(&(application_id.to_string(), module_id.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}

// ===== RecordingSubmitter =====

#[derive(Default)]
pub struct RecordingSubmitter {
    submitted: Mutex<Vec<SearchQuery>>,
}

impl RecordingSubmitter {
    pub fn submitted(&self) -> Vec<SearchQuery> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl FormSubmitter for RecordingSubmitter {
    async fn submit(&self, query: &SearchQuery) -> CoreResult<()> {
        self.submitted.lock().unwrap().push(query.clone());
        Ok(())
    }
}

// ===== RecordingErrorSink =====

#[derive(Default)]
pub struct RecordingErrorSink {
    reported: Mutex<Vec<FetchFailure>>,
}

impl RecordingErrorSink {
    pub fn reported(&self) -> Vec<FetchFailure> {
        self.reported.lock().unwrap().clone()
    }
}

impl ErrorSink for RecordingErrorSink {
    fn report(&self, failure: &FetchFailure) {
        self.reported.lock().unwrap().push(failure.clone());
    }
}

// ===== Factory =====

pub struct TestHarness {
    pub catalog: Arc<MockCatalog>,
    pub submitter: Arc<RecordingSubmitter>,
    pub error_sink: Arc<RecordingErrorSink>,
}

impl TestHarness {
    pub fn new(catalog: MockCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            submitter: Arc::new(RecordingSubmitter::default()),
            error_sink: Arc::new(RecordingErrorSink::default()),
        }
    }

    pub fn context(&self) -> ServiceContext {
        ServiceContext::new(
            self.catalog.clone(),
            self.submitter.clone(),
            self.error_sink.clone(),
        )
    }
}
