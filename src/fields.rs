//! Field Scope - fields, values, and the per-form lookup context.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::engine::{Config, EngineError};
use crate::state::Indicator;

pub type Vid = String;

/// How a field's value is selected by the user.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceKind {
    /// Free text input.
    #[default]
    Plain,
    /// Exclusive single choice (one member may be selected).
    Single,
    /// Multiple choice (any number of members may be selected).
    Multi,
}

/// One member of a choice group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    #[serde(default)]
    pub selected: bool,
}

/// A field's current value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Choices(Vec<Choice>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// The value as one string: the text itself, or the selected choice
    /// values joined in order.
    pub fn joined(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choices(choices) => choices
                .iter()
                .filter(|c| c.selected)
                .map(|c| c.value.as_str())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.joined().is_empty()
    }

    pub fn selected_count(&self) -> usize {
        match self {
            FieldValue::Text(_) => 0,
            FieldValue::Choices(choices) => choices.iter().filter(|c| c.selected).count(),
        }
    }
}

/// One field participating in validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub vid: Vid,
    /// Raw rule-spec string, e.g. `"required len-1-10 hankaku"`.
    #[serde(default)]
    pub rules: String,
    #[serde(default)]
    pub value: FieldValue,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub kind: ChoiceKind,
}

impl Field {
    pub fn new(vid: impl Into<String>, rules: impl Into<String>) -> Self {
        Self {
            vid: vid.into(),
            rules: rules.into(),
            value: FieldValue::default(),
            disabled: false,
            kind: ChoiceKind::Plain,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.value = FieldValue::Text(text.into());
        self
    }

    /// Selection state, for the `checked` rule. Always false for free text.
    pub fn is_checked(&self) -> bool {
        self.value.selected_count() > 0
    }
}

/// Lookup context mapping field identifiers to fields within one form
/// instance. Keeps definition order so whole-form passes and error keys
/// are deterministic.
#[derive(Debug, Clone)]
pub struct FormScope {
    instance_id: Uuid,
    fields: Vec<Field>,
    index: HashMap<Vid, usize>,
}

impl FormScope {
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            fields: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn from_fields(fields: Vec<Field>) -> Self {
        let mut scope = Self::new();
        for field in fields {
            scope.register(field);
        }
        scope
    }

    /// Distinguishes form instances when several scopes coexist in one host.
    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    /// Add a field, replacing any previous field with the same vid.
    pub fn register(&mut self, field: Field) {
        match self.index.get(&field.vid) {
            Some(&i) => self.fields[i] = field,
            None => {
                self.index.insert(field.vid.clone(), self.fields.len());
                self.fields.push(field);
            }
        }
    }

    pub fn get(&self, vid: &str) -> Option<&Field> {
        self.index.get(vid).map(|&i| &self.fields[i])
    }

    pub fn get_mut(&mut self, vid: &str) -> Option<&mut Field> {
        let i = *self.index.get(vid)?;
        Some(&mut self.fields[i])
    }

    /// Fields in definition order.
    pub fn list(&self) -> &[Field] {
        &self.fields
    }

    pub fn set_value(&mut self, vid: &str, value: FieldValue) -> Result<(), EngineError> {
        let field = self
            .get_mut(vid)
            .ok_or_else(|| EngineError::FieldNotFound(vid.to_string()))?;
        field.value = value;
        Ok(())
    }

    pub fn set_text(&mut self, vid: &str, text: impl Into<String>) -> Result<(), EngineError> {
        self.set_value(vid, FieldValue::Text(text.into()))
    }
}

impl Default for FormScope {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete form description: fields, indicator bindings, configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormDefinition {
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub indicators: Vec<Indicator>,
    #[serde(default)]
    pub config: Config,
}

impl FormDefinition {
    pub fn load_from_path(path: &Path) -> Result<Self, EngineError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
