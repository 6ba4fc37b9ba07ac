//! Selection fields and the three-field form state

use std::fmt;

use serde::{Deserialize, Serialize};
use ui_marker_catalog::CatalogEntry;

use crate::error::{CoreError, CoreResult};
use crate::types::SearchQuery;

/// Which of the three linked fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Application,
    Module,
    Function,
}

impl FieldKind {
    /// All fields, parent first.
    pub const ALL: [FieldKind; 3] = [Self::Application, Self::Module, Self::Function];

    /// Label of the placeholder option.
    pub fn sentinel_label(self) -> &'static str {
        match self {
            Self::Application => "-Select Application-",
            Self::Module => "-Select Module-",
            Self::Function => "-Select Function-",
        }
    }

    /// Form parameter the field submits as.
    pub fn param_name(self) -> &'static str {
        match self {
            Self::Application => "application_id",
            Self::Module => "module_id",
            Self::Function => "function_id",
        }
    }

    /// Field whose options depend on this one.
    pub fn child(self) -> Option<Self> {
        match self {
            Self::Application => Some(Self::Module),
            Self::Module => Some(Self::Function),
            Self::Function => None,
        }
    }

    /// Position in [`FieldKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Application => 0,
            Self::Module => 1,
            Self::Function => 2,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Application => "Application",
            Self::Module => "Module",
            Self::Function => "Function",
        };
        f.write_str(name)
    }
}

/// One entry of a field's option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The "no selection" placeholder of `kind`.
    pub fn sentinel(kind: FieldKind) -> Self {
        Self::new("", kind.sentinel_label())
    }

    pub fn is_sentinel(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<CatalogEntry> for SelectOption {
    fn from(entry: CatalogEntry) -> Self {
        Self::new(entry.id, entry.name)
    }
}

/// A single-choice field: the option list plus the current value.
///
/// The current value is always one of the option values; the empty string
/// means Unselected. Clearing the options moves the field back to Unselected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectField {
    kind: FieldKind,
    selected: String,
    options: Vec<SelectOption>,
    revision: u64,
}

impl SelectField {
    /// Unselected field holding only its sentinel.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            selected: String::new(),
            options: vec![SelectOption::sentinel(kind)],
            revision: 0,
        }
    }

    /// Unselected field holding the sentinel followed by `entries`.
    pub fn with_entries(kind: FieldKind, entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut field = Self::new(kind);
        field.options.extend(entries.into_iter().map(SelectOption::from));
        field
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Current value; empty when Unselected.
    pub fn value(&self) -> &str {
        &self.selected
    }

    pub fn is_selected(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Option labels in list order.
    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.label.as_str()).collect()
    }

    /// Option values in list order.
    pub fn values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }

    /// Incremented every time the option list is cleared.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Index of the current value in [`options`](Self::options).
    pub fn selected_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.value == self.selected)
    }

    /// Make `value` the current value.
    ///
    /// Only values present in the option list are accepted.
    pub fn select(&mut self, value: &str) -> CoreResult<()> {
        if !self.options.iter().any(|o| o.value == value) {
            return Err(CoreError::UnknownOption {
                field: self.kind,
                value: value.to_string(),
            });
        }
        self.selected = value.to_string();
        Ok(())
    }

    /// Remove every option, sentinel included.
    pub fn clear(&mut self) {
        self.options.clear();
        self.selected.clear();
        self.revision += 1;
    }

    pub fn append(&mut self, option: SelectOption) {
        self.options.push(option);
    }

    /// Clear, then put the sentinel back.
    pub fn reset(&mut self) {
        self.clear();
        self.append(SelectOption::sentinel(self.kind));
    }

    /// Reset, then append one option per entry in the given order.
    pub fn repopulate(&mut self, entries: impl IntoIterator<Item = CatalogEntry>) {
        self.reset();
        for entry in entries {
            self.append(entry.into());
        }
    }
}

/// Application, Module and Function fields of the search form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub application: SelectField,
    pub module: SelectField,
    pub function: SelectField,
}

impl SelectionState {
    /// Initial state: everything Unselected, only Application has options.
    pub fn new(applications: impl IntoIterator<Item = CatalogEntry>) -> Self {
        Self {
            application: SelectField::with_entries(FieldKind::Application, applications),
            module: SelectField::new(FieldKind::Module),
            function: SelectField::new(FieldKind::Function),
        }
    }

    pub fn field(&self, kind: FieldKind) -> &SelectField {
        match kind {
            FieldKind::Application => &self.application,
            FieldKind::Module => &self.module,
            FieldKind::Function => &self.function,
        }
    }

    /// The submit payload, if all three fields are selected.
    pub fn search_query(&self) -> Option<SearchQuery> {
        if self.application.is_selected() && self.module.is_selected() && self.function.is_selected()
        {
            Some(SearchQuery {
                application_id: self.application.value().to_string(),
                module_id: self.module.value().to_string(),
                function_id: self.function.value().to_string(),
            })
        } else {
            None
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
