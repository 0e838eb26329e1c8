//! formcheck-core - rule-based field validation engine for interactive forms.
//!
//! Declarative validation rules bind to form fields and are evaluated on
//! lifecycle events (change, loss-of-focus, submission). The flow: a
//! lifecycle event selects field(s), the rule-spec parser supplies the
//! ordered condition list, registry predicates evaluate against the field
//! scope, the error state updates its active keys and bound indicators,
//! group resolution re-validates linked fields, deferred triggers drain,
//! and on submission the scroll targeter picks the topmost failing field.

pub mod engine;
pub mod fields;
pub mod kanji;
pub mod rules;
pub mod scroll;
pub mod spec;
pub mod state;

pub use engine::{Config, DeferredTrigger, EngineError, Mode, SubmitDecision, ValidationEngine};
pub use fields::{Choice, ChoiceKind, Field, FieldValue, FormDefinition, FormScope};
pub use rules::{ConditionKind, EvalContext};
pub use scroll::{Animator, FieldGeometry, FieldMetrics, ScrollRequest, ScrollTargetKind};
pub use spec::{Condition, FieldSpec, LintFinding};
pub use state::{ErrorState, Indicator, IndicatorKind};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
