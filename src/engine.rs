//! Validation Engine - single entry point for lifecycle-driven passes.
//!
//! One pass runs to completion (including its deferred-trigger drain)
//! before another may start; the engine owns the error state exclusively
//! and no predicate may trigger a pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::fields::{FieldValue, FormDefinition, FormScope};
use crate::rules::{self, ConditionKind, EvalContext};
use crate::scroll::{self, Animator, FieldGeometry, ScrollRequest, ScrollTargetKind};
use crate::spec::FieldSpec;
use crate::state::ErrorState;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// When a lifecycle event actually triggers validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Mode {
    /// 0: validate on every event.
    #[default]
    Always,
    /// 1: validate only fields that already carry an error.
    OnlyAfterFirstErrorOnField,
    /// 2: validate only after the form has been fully validated once.
    OnlyAfterFormValidated,
}

impl TryFrom<u8> for Mode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mode::Always),
            1 => Ok(Mode::OnlyAfterFirstErrorOnField),
            2 => Ok(Mode::OnlyAfterFormValidated),
            other => Err(format!("mode must be 0, 1 or 2, got {other}")),
        }
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> u8 {
        match mode {
            Mode::Always => 0,
            Mode::OnlyAfterFirstErrorOnField => 1,
            Mode::OnlyAfterFormValidated => 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Intercept form submission for validation.
    #[serde(default = "default_true")]
    pub submit: bool,
    #[serde(default)]
    pub mode: Mode,
    /// Auto-scroll to the first failing field on submission.
    #[serde(default = "default_true")]
    pub scroll: bool,
    /// Stop a field's condition chain at its first failure.
    #[serde(default)]
    pub one_by_one: bool,
    #[serde(default)]
    pub scroll_target: ScrollTargetKind,
    /// Ancestor selector the host uses to compute offsets within a custom
    /// container. Passed through to the host's geometry; empty = parent.
    #[serde(default)]
    pub parent_selector: String,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            submit: true,
            mode: Mode::Always,
            scroll: true,
            one_by_one: false,
            scroll_target: ScrollTargetKind::Page,
            parent_selector: String::new(),
        }
    }
}

/// A queued `checkon*` trigger: validate another field after this pass.
#[derive(Debug, Clone)]
pub struct DeferredTrigger {
    pub source_vid: String,
    pub name: String,
    pub params: Vec<String>,
}

/// Outcome of a submission event. When `proceed` is false the host must
/// suppress the default submit action and halt propagation.
#[derive(Debug, Clone)]
pub struct SubmitDecision {
    pub proceed: bool,
    pub scroll: Option<ScrollRequest>,
}

/// Orchestrates single-field and whole-form validation passes.
pub struct ValidationEngine {
    scope: FormScope,
    config: Config,
    errors: ErrorState,
    checkons: Vec<DeferredTrigger>,
    validated: bool,
}

impl ValidationEngine {
    pub fn new(scope: FormScope, config: Config) -> Self {
        let mut engine = Self {
            scope,
            config,
            errors: ErrorState::new(),
            checkons: Vec::new(),
            validated: false,
        };
        engine.errors.sync();
        engine
    }

    pub fn from_definition(definition: FormDefinition) -> Self {
        let mut engine = Self::new(
            FormScope::from_fields(definition.fields),
            definition.config,
        );
        engine.errors.bind_all(definition.indicators);
        engine.errors.sync();
        engine
    }

    pub fn scope(&self) -> &FormScope {
        &self.scope
    }

    pub fn scope_mut(&mut self) -> &mut FormScope {
        &mut self.scope
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn set_text(&mut self, vid: &str, text: impl Into<String>) -> Result<(), EngineError> {
        self.scope.set_text(vid, text)
    }

    /// Lifecycle gating: does an event on this field trigger validation?
    pub fn should_validate(&self, vid: &str) -> bool {
        match self.config.mode {
            Mode::Always => true,
            Mode::OnlyAfterFirstErrorOnField => self.errors.is_active(vid),
            Mode::OnlyAfterFormValidated => self.validated,
        }
    }

    /// Change event: validate the field if gating permits, then drain.
    pub fn on_change(&mut self, vid: &str) -> Result<bool, EngineError> {
        if self.scope.get(vid).is_none() {
            return Err(EngineError::FieldNotFound(vid.to_string()));
        }
        if !self.should_validate(vid) {
            log::debug!("[validate:{}] change on {vid} gated off", self.scope.instance_id());
            return Ok(true);
        }
        Ok(self.run_field_pass(vid))
    }

    /// Loss-of-focus event: apply full2half normalization first if the
    /// field's spec asks for it, then validate as a change would.
    pub fn on_blur(&mut self, vid: &str) -> Result<bool, EngineError> {
        let field = self
            .scope
            .get(vid)
            .ok_or_else(|| EngineError::FieldNotFound(vid.to_string()))?;
        if FieldSpec::parse(&field.rules).has_full2half() {
            if let FieldValue::Text(text) = &field.value {
                let normalized = rules::full2half(text);
                if let Some(field) = self.scope.get_mut(vid) {
                    field.value = FieldValue::Text(normalized);
                }
            }
        }
        if !self.should_validate(vid) {
            return Ok(true);
        }
        Ok(self.run_field_pass(vid))
    }

    /// Submission event: whole-form pass, then compute the scroll target.
    pub fn on_submit(&mut self, geometry: &dyn FieldGeometry) -> SubmitDecision {
        if !self.config.submit {
            return SubmitDecision { proceed: true, scroll: None };
        }
        let proceed = self.validate_form();
        let scroll = if self.config.scroll {
            self.first_error_target(geometry)
        } else {
            None
        };
        SubmitDecision { proceed, scroll }
    }

    /// Validate a single field, with group expansion, then drain the
    /// deferred-trigger queue once.
    pub fn validate_field(&mut self, vid: &str) -> Result<bool, EngineError> {
        if self.scope.get(vid).is_none() {
            return Err(EngineError::FieldNotFound(vid.to_string()));
        }
        Ok(self.run_field_pass(vid))
    }

    /// Validate every field carrying a rule-spec, in definition order, then
    /// drain the deferred-trigger queue once and mark the form validated.
    pub fn validate_form(&mut self) -> bool {
        let now = Utc::now();
        let vids: Vec<String> = self.scope.list().iter().map(|f| f.vid.clone()).collect();
        let mut result = true;
        for vid in &vids {
            // Every field gets its own top-level validation here; group
            // expansion is suppressed since siblings are covered anyway.
            let mut visited = HashSet::from([vid.clone()]);
            if !self.validate_one(vid, now, &mut visited, false) {
                result = false;
            }
        }
        self.drain_checkons();
        self.validated = true;
        log::debug!(
            "[validate:{}] form pass: {} ({} active keys)",
            self.scope.instance_id(),
            if result { "passed" } else { "failed" },
            self.errors.active_keys().count()
        );
        result
    }

    /// Clear every error key and re-sync all indicators.
    pub fn reset(&mut self) {
        self.errors.clear_all();
        self.errors.sync();
    }

    /// Topmost failing field as a scroll request, if any.
    pub fn first_error_target(&self, geometry: &dyn FieldGeometry) -> Option<ScrollRequest> {
        scroll::first_error_target(&self.errors, self.config.scroll_target, geometry)
    }

    /// Compute the scroll target and hand it to the host's animator.
    pub fn scroll_to_first_error(
        &self,
        geometry: &dyn FieldGeometry,
        animator: &mut dyn Animator,
    ) {
        if let Some(request) = self.first_error_target(geometry) {
            animator.scroll_to(request);
        }
    }

    fn run_field_pass(&mut self, vid: &str) -> bool {
        let now = Utc::now();
        let mut visited = HashSet::from([vid.to_string()]);
        let result = self.validate_one(vid, now, &mut visited, true);
        self.drain_checkons();
        result
    }

    /// One field's validation: clear-then-rebuild its error keys, run the
    /// condition chain in order, then re-validate group siblings. `visited`
    /// holds every vid already validated in this expansion, so overlapping
    /// groups converge and recursion is bounded.
    fn validate_one(
        &mut self,
        vid: &str,
        now: DateTime<Utc>,
        visited: &mut HashSet<String>,
        expand_groups: bool,
    ) -> bool {
        let Some(field) = self.scope.get(vid).cloned() else {
            return true;
        };
        if field.disabled || field.rules.trim().is_empty() {
            return true;
        }
        let parsed = FieldSpec::parse(&field.rules);
        let empty = field.value.joined().is_empty();

        let mut failed: Vec<String> = Vec::new();
        let mut group_vids: Vec<String> = Vec::new();
        {
            let ctx = EvalContext { scope: &self.scope, now };
            for condition in &parsed.conditions {
                if condition.kind.is_normalization() {
                    continue;
                }
                if empty && !condition.kind.is_required() {
                    continue;
                }
                if expand_groups && condition.kind.is_group() {
                    group_vids.extend(condition.params.iter().cloned());
                }
                if !rules::evaluate(&condition.kind, &field, &condition.params, &ctx) {
                    failed.push(condition.kind.name().to_string());
                    if condition.kind == ConditionKind::Required || self.config.one_by_one {
                        break;
                    }
                }
            }
        }

        for deferred in parsed.deferred {
            self.checkons.push(DeferredTrigger {
                source_vid: vid.to_string(),
                name: deferred.name,
                params: deferred.params,
            });
        }

        self.errors.clear_field(vid);
        for name in &failed {
            self.errors.add_condition_error(vid, name);
        }
        self.errors.sync();

        if expand_groups && !group_vids.is_empty() {
            for sibling in group_vids {
                if sibling == vid || !visited.insert(sibling.clone()) {
                    continue;
                }
                log::debug!(
                    "[validate:{}] group: {vid} -> {sibling}",
                    self.scope.instance_id()
                );
                self.validate_one(&sibling, now, visited, false);
            }
        }

        failed.is_empty()
    }

    /// Drain the deferred-trigger queue once. The queue is cleared
    /// unconditionally afterwards; triggers queued while draining do not
    /// extend this drain.
    fn drain_checkons(&mut self) {
        let pending = std::mem::take(&mut self.checkons);
        let now = Utc::now();
        for trigger in &pending {
            if trigger.name != "empty" {
                log::debug!(
                    "[validate:{}] ignoring unsupported trigger checkon{}",
                    self.scope.instance_id(),
                    trigger.name
                );
                continue;
            }
            let source_empty = self
                .scope
                .get(&trigger.source_vid)
                .map(|f| f.value.joined().is_empty())
                .unwrap_or(false);
            if !source_empty {
                continue;
            }
            let Some(target) = trigger.params.first() else {
                continue;
            };
            if self.scope.get(target).is_none() || !self.should_validate(target) {
                continue;
            }
            log::debug!(
                "[validate:{}] trigger: {} empty -> validating {target}",
                self.scope.instance_id(),
                trigger.source_vid
            );
            let mut visited = HashSet::from([target.clone()]);
            self.validate_one(target, now, &mut visited, true);
            self.errors.sync();
        }
        self.checkons.clear();
    }
}
