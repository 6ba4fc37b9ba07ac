//! Form submission abstract Trait

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::CoreResult;
use crate::types::SearchQuery;

/// Form Submitter Trait
///
/// Receives the complete search query once the completeness gate passes and
/// hands control to whatever the form's target is (navigation, a page
/// listing request, ...).
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    /// Submit the search form
    ///
    /// # Arguments
    /// * `query` - The three selected identifiers
    async fn submit(&self, query: &SearchQuery) -> CoreResult<()>;
}

/// Keeps the last submitted query in memory
///
/// Useful for front ends that perform the navigation themselves after the
/// controller has decided to submit.
#[derive(Clone, Default)]
pub struct InMemoryFormSubmitter {
    last: Arc<Mutex<Option<SearchQuery>>>,
}

impl InMemoryFormSubmitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the last submitted query, leaving none behind.
    pub async fn take(&self) -> Option<SearchQuery> {
        self.last.lock().await.take()
    }
}

#[async_trait]
impl FormSubmitter for InMemoryFormSubmitter {
    async fn submit(&self, query: &SearchQuery) -> CoreResult<()> {
        log::info!(
            "Submitting search: application={} module={} function={}",
            query.application_id,
            query.module_id,
            query.function_id
        );
        *self.last.lock().await = Some(query.clone());
        Ok(())
    }
}
