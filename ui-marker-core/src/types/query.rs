//! Search form submission payload

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CoreError, CoreResult};
use crate::types::FieldKind;

/// The three identifiers a complete search submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub application_id: String,
    pub module_id: String,
    pub function_id: String,
}

impl SearchQuery {
    /// Form parameters in field order.
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            (FieldKind::Application.param_name(), &self.application_id),
            (FieldKind::Module.param_name(), &self.module_id),
            (FieldKind::Function.param_name(), &self.function_id),
        ]
    }

    /// Navigation target of a GET form submit to `form_action`.
    ///
    /// Any query already present on the action URL is replaced, as a browser
    /// does for GET forms.
    pub fn to_url(&self, form_action: &str) -> CoreResult<Url> {
        let mut url = Url::parse(form_action)
            .map_err(|e| CoreError::ConfigError(format!("invalid form action '{form_action}': {e}")))?;
        url.set_query(None);
        url.query_pairs_mut().extend_pairs(self.pairs());
        Ok(url)
    }
}
