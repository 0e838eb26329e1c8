//! Rule Spec Parser - turns a field's rule-spec string into conditions.
//!
//! A rule-spec is space-separated tokens, each token hyphen-separated as
//! `name[-param]*`. Tokens whose name starts with `checkon` are not
//! conditions of this field; they schedule validation of another field once
//! the current pass completes.

use serde::Serialize;

use crate::fields::FormScope;
use crate::rules::ConditionKind;

/// One parsed condition: a rule name and its ordered parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub kind: ConditionKind,
    pub params: Vec<String>,
}

/// A deferred `checkon*` token, with the `checkon` prefix stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct DeferredSpec {
    pub name: String,
    pub params: Vec<String>,
}

/// The parsed form of one field's rule-spec string.
#[derive(Debug, Clone, Default)]
pub struct FieldSpec {
    pub conditions: Vec<Condition>,
    pub deferred: Vec<DeferredSpec>,
}

impl FieldSpec {
    pub fn parse(spec: &str) -> Self {
        let mut parsed = FieldSpec::default();
        for token in spec.split_whitespace() {
            let mut parts = token.split('-');
            let name = parts.next().unwrap_or("");
            let params: Vec<String> = parts.map(str::to_string).collect();
            if let Some(stripped) = name.strip_prefix("checkon") {
                if !stripped.is_empty() {
                    parsed.deferred.push(DeferredSpec {
                        name: stripped.to_string(),
                        params,
                    });
                    continue;
                }
            }
            parsed.conditions.push(Condition {
                kind: ConditionKind::from_name(name),
                params,
            });
        }
        parsed
    }

    /// Whether the rule-spec carries the blur-time full2half normalization.
    pub fn has_full2half(&self) -> bool {
        self.conditions
            .iter()
            .any(|c| c.kind == ConditionKind::Full2half)
    }
}

/// A configuration problem found by linting. Not fatal at runtime (the
/// engine degrades such conditions to "always failed"), but worth reporting
/// eagerly.
#[derive(Debug, Clone, Serialize)]
pub struct LintFinding {
    pub vid: String,
    pub condition: String,
    pub message: String,
}

/// Check every field's rule-spec against the scope: unknown rule names,
/// group rules with too few parameters or naming nonexistent siblings.
pub fn lint_scope(scope: &FormScope) -> Vec<LintFinding> {
    let mut findings = Vec::new();
    for field in scope.list() {
        let spec = FieldSpec::parse(&field.rules);
        for condition in &spec.conditions {
            match &condition.kind {
                ConditionKind::Unknown(name) => findings.push(LintFinding {
                    vid: field.vid.clone(),
                    condition: name.clone(),
                    message: format!("unknown rule name: {name}"),
                }),
                kind if kind.is_group() => {
                    if condition.params.len() < 3 {
                        findings.push(LintFinding {
                            vid: field.vid.clone(),
                            condition: kind.name().to_string(),
                            message: "needs three field parameters (year, month, day)".to_string(),
                        });
                    }
                    for vid in &condition.params {
                        if scope.get(vid).is_none() {
                            findings.push(LintFinding {
                                vid: field.vid.clone(),
                                condition: kind.name().to_string(),
                                message: format!("references missing field: {vid}"),
                            });
                        }
                    }
                }
                ConditionKind::Equal => {
                    match condition.params.first() {
                        Some(vid) if scope.get(vid).is_none() => findings.push(LintFinding {
                            vid: field.vid.clone(),
                            condition: "equal".to_string(),
                            message: format!("references missing field: {vid}"),
                        }),
                        None => findings.push(LintFinding {
                            vid: field.vid.clone(),
                            condition: "equal".to_string(),
                            message: "needs a field parameter".to_string(),
                        }),
                        _ => {}
                    }
                }
                _ => {}
            }
        }
        for deferred in &spec.deferred {
            match deferred.params.first() {
                Some(vid) if scope.get(vid).is_none() => findings.push(LintFinding {
                    vid: field.vid.clone(),
                    condition: format!("checkon{}", deferred.name),
                    message: format!("references missing field: {vid}"),
                }),
                None => findings.push(LintFinding {
                    vid: field.vid.clone(),
                    condition: format!("checkon{}", deferred.name),
                    message: "needs a field parameter".to_string(),
                }),
                _ => {}
            }
        }
    }
    findings
}
