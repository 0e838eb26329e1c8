//! Error State Tracker - active error keys and bound indicator views.
//!
//! Keys come in two forms: field-level (`vid`) and condition-level
//! (`vid-name`). Vids therefore must not contain `-`; the hyphen is what
//! separates the two key forms.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Build a condition-level error key.
pub fn condition_key(vid: &str, name: &str) -> String {
    format!("{vid}-{name}")
}

/// Field-level keys carry no hyphen.
pub fn is_field_key(key: &str) -> bool {
    !key.contains('-')
}

/// Which view an indicator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    /// Hide-marker view: the flag is set when NO listed key is active.
    Hidden,
    /// Error-marker view: the flag is set when ANY listed key is active.
    Active,
}

/// A message or highlight element bound to one or more error keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Indicator {
    /// Space-separated list of `vid` or `vid-name` keys; the indicator
    /// fires when any listed key is active.
    pub keys: String,
    pub kind: IndicatorKind,
    /// Current flag state, maintained by [`ErrorState::sync`].
    #[serde(default)]
    pub on: bool,
}

impl Indicator {
    pub fn bind(keys: impl Into<String>, kind: IndicatorKind) -> Self {
        Self { keys: keys.into(), kind, on: false }
    }

    fn desired(&self, active: &BTreeSet<String>) -> bool {
        let any = self.keys.split_whitespace().any(|k| active.contains(k));
        match self.kind {
            IndicatorKind::Hidden => !any,
            IndicatorKind::Active => any,
        }
    }
}

/// The set of currently-active error keys for one form instance, plus the
/// indicator bindings synchronized from it.
#[derive(Debug, Default)]
pub struct ErrorState {
    active: BTreeSet<String>,
    indicators: Vec<Indicator>,
}

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, indicator: Indicator) {
        self.indicators.push(indicator);
    }

    pub fn bind_all(&mut self, indicators: impl IntoIterator<Item = Indicator>) {
        self.indicators.extend(indicators);
    }

    pub fn add_field_error(&mut self, vid: &str) {
        self.active.insert(vid.to_string());
    }

    /// Records a condition-level key. The field-level key is implied and
    /// inserted alongside.
    pub fn add_condition_error(&mut self, vid: &str, name: &str) {
        self.active.insert(vid.to_string());
        self.active.insert(condition_key(vid, name));
    }

    /// Remove the field-level key and every condition-level key under it.
    pub fn clear_field(&mut self, vid: &str) {
        let prefix = format!("{vid}-");
        self.active
            .retain(|key| key != vid && !key.starts_with(&prefix));
    }

    pub fn clear_all(&mut self) {
        self.active.clear();
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.contains(key)
    }

    pub fn has_errors(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn active_keys(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    /// Field-level keys only, the ones the scroll targeter resolves.
    pub fn field_keys(&self) -> impl Iterator<Item = &str> {
        self.active_keys().filter(|k| is_field_key(k))
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    /// Recompute every indicator flag from the active set. Writes only on
    /// change (toggle, don't blink) and returns how many flags changed.
    pub fn sync(&mut self) -> usize {
        let mut changed = 0;
        for indicator in &mut self.indicators {
            let desired = indicator.desired(&self.active);
            if indicator.on != desired {
                indicator.on = desired;
                changed += 1;
            }
        }
        changed
    }
}
