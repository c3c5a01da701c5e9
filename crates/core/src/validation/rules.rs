//! Declarative rule sets.
//!
//! A [`RuleSet`] is built once, field by field, and then evaluated against
//! any number of instances. Evaluation never stops early: every rule runs
//! and each failing rule adds exactly one violation.

use core::fmt;

use super::Validator;
use super::result::{ValidationResult, Violation};

/// Values that a `not_empty` rule can inspect.
pub trait IsEmpty {
    /// Returns `true` if the value counts as empty.
    fn is_empty_value(&self) -> bool;
}

impl IsEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

type Rule<T> = Box<dyn Fn(&T, &mut ValidationResult) + Send + Sync>;

/// An ordered list of rules for values of type `T`.
///
/// ```
/// use clean_orders_core::{Address, RuleSet};
///
/// let rules = RuleSet::new("Address")
///     .not_empty("street", "Street", Address::street)
///     .not_empty("city", "City", Address::city);
///
/// let result = rules.evaluate(&Address::new("", "", "ST", "00000"));
/// assert_eq!(result.len(), 2);
/// ```
pub struct RuleSet<T: ?Sized> {
    entity: &'static str,
    rules: Vec<Rule<T>>,
}

impl<T: ?Sized + 'static> RuleSet<T> {
    /// Start an empty rule set. `entity` names the validated type in logs.
    #[must_use]
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            rules: Vec::new(),
        }
    }

    /// The field must not be an empty string or a nil identity.
    #[must_use]
    pub fn not_empty<V>(
        mut self,
        property: &'static str,
        label: &'static str,
        field: fn(&T) -> &V,
    ) -> Self
    where
        V: IsEmpty + fmt::Display + ?Sized + 'static,
    {
        self.rules.push(Box::new(move |instance: &T, result: &mut ValidationResult| {
            let value = field(instance);
            if value.is_empty_value() {
                result.push(Violation::not_empty(property, label, value.to_string()));
            }
        }));
        self
    }

    /// The field must be strictly greater than `threshold`.
    #[must_use]
    pub fn greater_than<V>(
        mut self,
        property: &'static str,
        label: &'static str,
        field: fn(&T) -> V,
        threshold: V,
    ) -> Self
    where
        V: PartialOrd + fmt::Display + Send + Sync + 'static,
    {
        self.rules.push(Box::new(move |instance: &T, result: &mut ValidationResult| {
            let value = field(instance);
            if value <= threshold {
                result.push(Violation::greater_than(
                    property,
                    label,
                    &threshold,
                    value.to_string(),
                ));
            }
        }));
        self
    }

    /// Run `validator` on a nested value and include all of its violations,
    /// with their property paths prefixed by `property`.
    #[must_use]
    pub fn nested<C, V>(
        mut self,
        property: &'static str,
        field: fn(&T) -> &C,
        validator: V,
    ) -> Self
    where
        C: ?Sized + 'static,
        V: Validator<C> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(move |instance: &T, result: &mut ValidationResult| {
            result.extend_nested(property, validator.validate(field(instance)));
        }));
        self
    }

    /// Number of declared rules. A nested rule counts once.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule against `instance`.
    #[must_use]
    pub fn evaluate(&self, instance: &T) -> ValidationResult {
        let mut result = ValidationResult::default();
        for rule in &self.rules {
            rule(instance, &mut result);
        }

        if result.is_valid() {
            tracing::trace!(entity = self.entity, "Validation passed");
        } else {
            tracing::debug!(
                entity = self.entity,
                violations = result.len(),
                "Validation failed"
            );
        }

        result
    }
}

impl<T: ?Sized> fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("entity", &self.entity)
            .field("rules", &self.rules.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::RuleCode;

    struct Line {
        label: String,
        amount: i32,
    }

    fn label(line: &Line) -> &String {
        &line.label
    }

    const fn amount(line: &Line) -> i32 {
        line.amount
    }

    fn rules() -> RuleSet<Line> {
        RuleSet::new("Line")
            .not_empty("label", "Label", label)
            .greater_than("amount", "Amount", amount, 0)
    }

    #[test]
    fn test_passing_instance_has_no_violations() {
        let line = Line {
            label: "x".to_owned(),
            amount: 1,
        };
        assert!(rules().evaluate(&line).is_valid());
    }

    #[test]
    fn test_every_rule_is_evaluated() {
        let line = Line {
            label: String::new(),
            amount: 0,
        };
        let result = rules().evaluate(&line);
        let codes: Vec<_> = result.violations().iter().map(|v| v.code).collect();
        assert_eq!(codes, [RuleCode::NotEmpty, RuleCode::GreaterThan]);
    }

    #[test]
    fn test_greater_than_is_strict() {
        for amount in [0, -1, i32::MIN] {
            let line = Line {
                label: "x".to_owned(),
                amount,
            };
            let result = rules().evaluate(&line);
            assert!(result.contains_message("'Amount' must be greater than '0'."));
            assert_eq!(
                result.violations().first().map(|v| v.attempted_value.clone()),
                Some(amount.to_string())
            );
        }
    }

    #[test]
    fn test_nested_prefixes_child_properties() {
        struct Order {
            line: Line,
        }

        fn line(order: &Order) -> &Line {
            &order.line
        }

        let order_rules = RuleSet::new("Order").nested("line", line, rules());
        let order = Order {
            line: Line {
                label: String::new(),
                amount: 5,
            },
        };

        let result = order_rules.evaluate(&order);
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.violations().first().map(|v| v.property.as_str()),
            Some("line.label")
        );
    }

    #[test]
    fn test_debug_reports_rule_count() {
        assert_eq!(format!("{:?}", rules()), "RuleSet { entity: \"Line\", rules: 2 }");
        assert_eq!(rules().len(), 2);
    }
}
