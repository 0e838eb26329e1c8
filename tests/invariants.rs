//! Contract Invariant Tests
//!
//! These tests verify the engine-level guarantees: idempotent error state,
//! group convergence, deferred-trigger draining, lifecycle gating, and the
//! submission decision.

use std::collections::HashMap;

use formcheck_core::{
    Animator, Config, Field, FieldGeometry, FieldMetrics, FormDefinition, FormScope, Indicator,
    IndicatorKind, Mode, ScrollRequest, ValidationEngine,
};

fn engine_with(fields: Vec<Field>, config: Config) -> ValidationEngine {
    ValidationEngine::new(FormScope::from_fields(fields), config)
}

fn date_form() -> ValidationEngine {
    engine_with(
        vec![
            Field::new("year", "validymd-year-month-day").with_text("2023"),
            Field::new("month", "validymd-year-month-day").with_text("02"),
            Field::new("day", "validymd-year-month-day").with_text("30"),
        ],
        Config::default(),
    )
}

struct FixedGeometry {
    tops: HashMap<String, f64>,
}

impl FixedGeometry {
    fn new(entries: &[(&str, f64)]) -> Self {
        Self {
            tops: entries.iter().map(|(v, t)| (v.to_string(), *t)).collect(),
        }
    }
}

impl FieldGeometry for FixedGeometry {
    fn metrics(&self, vid: &str) -> Option<FieldMetrics> {
        self.tops.get(vid).map(|&top| FieldMetrics { top, height: 20.0 })
    }
    fn scroll_position(&self) -> f64 {
        0.0
    }
}

#[derive(Default)]
struct RecordingAnimator {
    requests: Vec<ScrollRequest>,
}

impl Animator for RecordingAnimator {
    fn scroll_to(&mut self, request: ScrollRequest) {
        self.requests.push(request);
    }
}

#[test]
fn invariant_revalidation_is_idempotent() {
    let mut engine = engine_with(
        vec![Field::new("mail", "required email len-1-5").with_text("not-an-address")],
        Config::default(),
    );

    assert!(!engine.validate_field("mail").unwrap());
    let first: Vec<String> = engine.errors().active_keys().map(String::from).collect();

    assert!(!engine.validate_field("mail").unwrap());
    let second: Vec<String> = engine.errors().active_keys().map(String::from).collect();

    // no duplicate or accreted keys on an unchanged field
    assert_eq!(first, second);
    assert_eq!(first, ["mail", "mail-email", "mail-len"]);
}

#[test]
fn invariant_required_whitespace_parity() {
    let mut engine = engine_with(
        vec![
            Field::new("a", "required").with_text("  "),
            Field::new("b", "required_notrim").with_text("  "),
        ],
        Config::default(),
    );
    assert!(!engine.validate_field("a").unwrap());
    assert!(!engine.validate_field("b").unwrap());
    assert!(engine.errors().is_active("a-required"));
    assert!(engine.errors().is_active("b-required_notrim"));
}

#[test]
fn invariant_date_triple_group_revalidation() {
    let mut engine = date_form();

    // 2023-02-30 does not exist; validating one member fails all three
    assert!(!engine.validate_field("day").unwrap());
    for key in [
        "year",
        "month",
        "day",
        "year-validymd",
        "month-validymd",
        "day-validymd",
    ] {
        assert!(engine.errors().is_active(key), "missing {key}");
    }

    engine.set_text("day", "28").unwrap();
    assert!(engine.validate_field("day").unwrap());
    assert!(!engine.errors().has_errors());
}

#[test]
fn invariant_partial_date_passes_while_typing() {
    let mut engine = date_form();
    engine.set_text("day", "").unwrap();
    assert!(engine.validate_field("year").unwrap());
    assert!(!engine.errors().has_errors());
}

#[test]
fn invariant_equal_pair_scenario() {
    let mut engine = engine_with(
        vec![
            Field::new("a", "equal-b").with_text("y"),
            Field::new("b", "").with_text("x"),
        ],
        Config::default(),
    );

    assert!(!engine.validate_field("a").unwrap());
    assert!(engine.errors().is_active("a"));
    assert!(engine.errors().is_active("a-equal"));

    engine.set_text("b", "y").unwrap();
    assert!(engine.validate_field("a").unwrap());
    assert!(!engine.errors().is_active("a"));
    assert!(!engine.errors().is_active("a-equal"));
}

#[test]
fn invariant_self_referencing_group_terminates() {
    let mut engine = engine_with(
        vec![Field::new("x", "validymd-x-x-x").with_text("1")],
        Config::default(),
    );
    // must not recurse; "1" is not a valid year so the condition fails
    assert!(!engine.validate_field("x").unwrap());
    assert!(engine.errors().is_active("x-validymd"));
}

#[test]
fn invariant_required_failure_stops_chain() {
    let mut engine = engine_with(
        vec![Field::new("f", "required int len-1-1").with_text("  ")],
        Config::default(),
    );
    assert!(!engine.validate_field("f").unwrap());
    assert!(engine.errors().is_active("f-required"));
    // chain stopped at required; later conditions never recorded
    assert!(!engine.errors().is_active("f-int"));
    assert!(!engine.errors().is_active("f-len"));
}

#[test]
fn invariant_one_by_one_stops_at_first_failure() {
    let config = Config { one_by_one: true, ..Config::default() };
    let mut engine = engine_with(vec![Field::new("f", "int len-1-2").with_text("abc")], config);
    assert!(!engine.validate_field("f").unwrap());
    assert!(engine.errors().is_active("f-int"));
    assert!(!engine.errors().is_active("f-len"));
}

#[test]
fn invariant_unknown_rule_fails_closed() {
    let mut engine = engine_with(
        vec![Field::new("f", "bogus_rule").with_text("anything")],
        Config::default(),
    );
    assert!(!engine.validate_field("f").unwrap());
    assert!(engine.errors().is_active("f-bogus_rule"));
}

#[test]
fn invariant_disabled_field_skipped() {
    let mut field = Field::new("f", "required");
    field.disabled = true;
    let mut engine = engine_with(vec![field], Config::default());
    assert!(engine.validate_field("f").unwrap());
    assert!(!engine.errors().has_errors());
}

#[test]
fn invariant_checkon_validates_target_when_source_empty() {
    let mut engine = engine_with(
        vec![
            Field::new("opt", "checkonempty-dep").with_text(""),
            Field::new("dep", "required").with_text(""),
        ],
        Config::default(),
    );

    // the change pass on "opt" passes itself, then the drained trigger
    // validates "dep"
    assert!(engine.on_change("opt").unwrap());
    assert!(engine.errors().is_active("dep-required"));

    engine.set_text("dep", "filled").unwrap();
    assert!(engine.on_change("opt").unwrap());
    assert!(!engine.errors().has_errors());
}

#[test]
fn invariant_checkon_inert_when_source_filled() {
    let mut engine = engine_with(
        vec![
            Field::new("opt", "checkonempty-dep").with_text("present"),
            Field::new("dep", "required").with_text(""),
        ],
        Config::default(),
    );
    assert!(engine.on_change("opt").unwrap());
    assert!(!engine.errors().has_errors());
}

#[test]
fn invariant_mode_gates_until_form_validated() {
    let config = Config { mode: Mode::OnlyAfterFormValidated, ..Config::default() };
    let mut engine = engine_with(vec![Field::new("f", "required").with_text("")], config);

    // before the first whole-form pass, single-field events are gated off
    assert!(engine.on_change("f").unwrap());
    assert!(!engine.errors().has_errors());

    assert!(!engine.validate_form());
    assert!(engine.errors().is_active("f"));

    engine.set_text("f", "ok").unwrap();
    assert!(engine.on_change("f").unwrap());
    assert!(!engine.errors().has_errors());
}

#[test]
fn invariant_mode_gates_to_error_fields_only() {
    let config = Config { mode: Mode::OnlyAfterFirstErrorOnField, ..Config::default() };
    let mut engine = engine_with(
        vec![
            Field::new("f", "int").with_text("abc"),
            Field::new("g", "int").with_text("abc"),
        ],
        config,
    );

    // no active error on "f" yet: gated off
    assert!(engine.on_change("f").unwrap());
    assert!(!engine.errors().has_errors());

    engine.validate_form();
    assert!(engine.errors().is_active("f"));
    assert!(engine.errors().is_active("g"));

    engine.set_text("f", "42").unwrap();
    assert!(engine.on_change("f").unwrap());
    assert!(!engine.errors().is_active("f"));
    assert!(engine.errors().is_active("g"));
}

#[test]
fn invariant_blur_applies_full2half_before_validation() {
    let mut engine = engine_with(
        vec![Field::new("num", "full2half int").with_text("\u{FF11}\u{FF12}\u{FF13}")],
        Config::default(),
    );
    assert!(engine.on_blur("num").unwrap());
    assert_eq!(engine.scope().get("num").unwrap().value.joined(), "123");
    assert!(!engine.errors().has_errors());
}

#[test]
fn invariant_submit_blocks_and_targets_topmost_error() {
    let mut engine = engine_with(
        vec![
            Field::new("lower", "required").with_text(""),
            Field::new("upper", "required").with_text(""),
        ],
        Config::default(),
    );
    let geometry = FixedGeometry::new(&[("lower", 800.0), ("upper", 250.0)]);

    let decision = engine.on_submit(&geometry);
    assert!(!decision.proceed);
    let request = decision.scroll.expect("scroll request");
    assert_eq!(request.offset, 250.0);

    let mut animator = RecordingAnimator::default();
    engine.scroll_to_first_error(&geometry, &mut animator);
    assert_eq!(animator.requests.len(), 1);
    assert_eq!(animator.requests[0].offset, 250.0);
}

#[test]
fn invariant_submit_proceeds_when_valid() {
    let mut engine = engine_with(
        vec![Field::new("f", "required").with_text("ok")],
        Config::default(),
    );
    let geometry = FixedGeometry::new(&[("f", 100.0)]);
    let decision = engine.on_submit(&geometry);
    assert!(decision.proceed);
    assert!(decision.scroll.is_none());
}

#[test]
fn invariant_submit_scroll_disabled_by_config() {
    let config = Config { scroll: false, ..Config::default() };
    let mut engine = engine_with(vec![Field::new("f", "required").with_text("")], config);
    let geometry = FixedGeometry::new(&[("f", 100.0)]);
    let decision = engine.on_submit(&geometry);
    assert!(!decision.proceed);
    assert!(decision.scroll.is_none());
}

#[test]
fn invariant_indicator_views_follow_error_state() {
    let mut definition = FormDefinition::default();
    definition.fields.push(Field::new("mail", "required").with_text(""));
    definition.indicators.push(Indicator::bind("mail", IndicatorKind::Hidden));
    definition
        .indicators
        .push(Indicator::bind("mail mail-required", IndicatorKind::Active));
    let mut engine = ValidationEngine::from_definition(definition);

    // clean state: hide marker set, error marker clear
    assert!(engine.errors().indicators()[0].on);
    assert!(!engine.errors().indicators()[1].on);

    engine.validate_form();
    assert!(!engine.errors().indicators()[0].on);
    assert!(engine.errors().indicators()[1].on);

    engine.set_text("mail", "x").unwrap();
    engine.validate_field("mail").unwrap();
    assert!(engine.errors().indicators()[0].on);
    assert!(!engine.errors().indicators()[1].on);
}

#[test]
fn invariant_reset_clears_all_keys() {
    let mut engine = engine_with(
        vec![Field::new("f", "required").with_text("")],
        Config::default(),
    );
    engine.validate_form();
    assert!(engine.errors().has_errors());
    engine.reset();
    assert!(!engine.errors().has_errors());
}

#[test]
fn invariant_definition_loads_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "fields": [
                {{"vid": "mail", "rules": "required email", "value": "a@b.co"}},
                {{"vid": "age", "rules": "int", "value": "abc"}}
            ],
            "indicators": [
                {{"keys": "age", "kind": "active"}}
            ],
            "config": {{"mode": 0, "oneByOne": false}}
        }}"#
    )
    .unwrap();

    let definition = FormDefinition::load_from_path(file.path()).unwrap();
    let mut engine = ValidationEngine::from_definition(definition);
    assert!(!engine.validate_form());
    assert!(engine.errors().is_active("age-int"));
    assert!(!engine.errors().is_active("mail"));
    assert!(engine.errors().indicators()[0].on);
}

#[test]
fn invariant_unknown_field_is_an_error() {
    let mut engine = engine_with(vec![], Config::default());
    let err = engine.validate_field("ghost").unwrap_err();
    assert!(err.to_string().contains("Field not found"));
}
