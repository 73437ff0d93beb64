//! Declarative request validation
//!
//! Handlers describe their input as a set of field rules and evaluate them
//! uniformly before any business logic runs. A non-empty violation list is
//! returned to the client as a 400 with field-level detail.

use serde::Serialize;

/// A single constraint applied to a field value.
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// Value must be at least this many characters long.
    MinLen(usize),
    /// Value must look like an email address.
    Email,
}

/// A field paired with the constraints it must satisfy.
pub struct FieldRule<'a> {
    pub field: &'static str,
    pub value: &'a str,
    pub constraints: &'a [Constraint],
}

/// A failed constraint, reported back to the client.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

/// Evaluate every rule and collect all violations.
///
/// All rules are checked so the client sees the full list of problems in
/// one response rather than one at a time.
pub fn evaluate(rules: &[FieldRule<'_>]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for rule in rules {
        for constraint in rule.constraints {
            if let Some(message) = check(rule.value, *constraint) {
                violations.push(Violation {
                    field: rule.field.to_string(),
                    message,
                });
            }
        }
    }

    violations
}

fn check(value: &str, constraint: Constraint) -> Option<String> {
    match constraint {
        Constraint::MinLen(min) => {
            if value.chars().count() < min {
                Some(format!("must be at least {} characters", min))
            } else {
                None
            }
        }
        Constraint::Email => {
            if is_valid_email(value) {
                None
            } else {
                Some("must be a valid email address".to_string())
            }
        }
    }
}

/// Basic structural email check: one '@' with a non-empty local part and a
/// dotted, non-empty domain.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
