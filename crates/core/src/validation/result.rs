//! Violation records and the aggregated outcome of a validation run.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The kind of rule that produced a [`Violation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCode {
    /// The value was an empty string or a nil identity.
    NotEmpty,
    /// The value was not strictly greater than the rule's threshold.
    GreaterThan,
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEmpty => f.write_str("not_empty"),
            Self::GreaterThan => f.write_str("greater_than"),
        }
    }
}

/// A single failed rule.
///
/// `message` is the user-facing text (for example
/// `'Zip Code' must not be empty.`) and is safe to surface verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted path of the failing field, e.g. `shipping_address.street`.
    pub property: String,
    /// Human-readable field label, e.g. `Zip Code`.
    pub label: String,
    /// Complete user-facing message.
    pub message: String,
    /// Rule that failed.
    pub code: RuleCode,
    /// The rejected value, rendered as text.
    pub attempted_value: String,
}

impl Violation {
    pub(crate) fn not_empty(property: &str, label: &str, attempted_value: String) -> Self {
        Self {
            property: property.to_owned(),
            label: label.to_owned(),
            message: format!("'{label}' must not be empty."),
            code: RuleCode::NotEmpty,
            attempted_value,
        }
    }

    pub(crate) fn greater_than(
        property: &str,
        label: &str,
        threshold: &dyn fmt::Display,
        attempted_value: String,
    ) -> Self {
        Self {
            property: property.to_owned(),
            label: label.to_owned(),
            message: format!("'{label}' must be greater than '{threshold}'."),
            code: RuleCode::GreaterThan,
            attempted_value,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Every violation found for one instance, in rule declaration order.
///
/// An empty result is the only success signal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    /// Returns `true` if no rule failed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_empty()
    }

    /// Number of failed rules.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Iterate over the user-facing messages.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.message.as_str())
    }

    /// Returns `true` if any violation carries exactly this message.
    #[must_use]
    pub fn contains_message(&self, message: &str) -> bool {
        self.messages().any(|m| m == message)
    }

    /// Convert into a `Result`, failing with every violation if any rule failed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when at least one rule failed.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Append a child result, prefixing each property path with `property`.
    pub(crate) fn extend_nested(&mut self, property: &str, child: Self) {
        self.violations
            .extend(child.violations.into_iter().map(|mut violation| {
                violation.property = format!("{property}.{}", violation.property);
                violation
            }));
    }
}

impl IntoIterator for ValidationResult {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

/// An instance failed one or more business rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {}", join_messages(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
