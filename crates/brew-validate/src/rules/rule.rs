//! Rule definitions and evaluation.

use std::fmt;

use crate::checks::{inclusion, presence, range};
use crate::row::Row;
use crate::violation::Violation;

/// Column that conditional rules key on.
const TYPE_COLUMN: &str = "TYPE";

/// The check a rule applies to its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Non-empty value.
    Presence,
    /// Value in a fixed set.
    Inclusion(&'static [&'static str]),
    /// `min-max` pair within inclusive bounds.
    Range { min: i64, max: i64 },
}

/// When a rule applies, based on the row's `TYPE` cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    TypeIn(&'static [&'static str]),
    TypeNotIn(&'static [&'static str]),
}

impl Condition {
    pub fn holds(&self, row: &Row<'_>) -> bool {
        let is_member = |set: &[&str]| row.get(TYPE_COLUMN).is_some_and(|t| set.contains(&t));
        match *self {
            Condition::Always => true,
            Condition::TypeIn(set) => is_member(set),
            Condition::TypeNotIn(set) => !is_member(set),
        }
    }
}

/// One row-level rule: a labelled check on a source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Label used in messages (`grain type`).
    pub field: &'static str,
    /// Source CSV header (`GRAIN_TYPE`).
    pub column: &'static str,
    pub check: Check,
    pub when: Condition,
}

impl FieldRule {
    /// Evaluates the rule. Rules whose condition does not hold pass.
    pub fn evaluate(&self, row: &Row<'_>) -> Result<(), Violation> {
        if !self.when.holds(row) {
            return Ok(());
        }
        let value = row.get(self.column);
        match self.check {
            Check::Presence => presence::check(self.field, value),
            Check::Inclusion(allowed) => inclusion::check(self.field, value, allowed),
            Check::Range { min, max } => range::check(self.field, value, min, max),
        }
    }
}

impl fmt::Display for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.check {
            Check::Presence => write!(f, "{} non-empty", self.field)?,
            Check::Inclusion(allowed) => write!(f, "{} in {{{}}}", self.field, allowed.join(", "))?,
            Check::Range { min, max } => write!(f, "{} range within [{min}, {max}]", self.field)?,
        }
        match self.when {
            Condition::Always => Ok(()),
            Condition::TypeIn(set) => write!(f, " if type in {{{}}}", set.join(", ")),
            Condition::TypeNotIn(set) => write!(f, " unless type in {{{}}}", set.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::StringRecord;

    const GRAIN_ONLY: &[&str] = &["Grain"];

    #[test]
    fn test_condition() {
        let headers = StringRecord::from(vec!["NAME", "TYPE"]);
        let grain = StringRecord::from(vec!["Pilsner", "Grain"]);
        let sugar = StringRecord::from(vec!["Dextrose", "Sugar"]);

        assert!(Condition::TypeIn(GRAIN_ONLY).holds(&Row::new(&headers, &grain)));
        assert!(!Condition::TypeIn(GRAIN_ONLY).holds(&Row::new(&headers, &sugar)));
        assert!(Condition::TypeNotIn(GRAIN_ONLY).holds(&Row::new(&headers, &sugar)));
        assert!(Condition::Always.holds(&Row::new(&headers, &sugar)));
    }

    #[test]
    fn test_conditional_rule_skips() {
        let rule = FieldRule {
            field: "supplier",
            column: "SUPPLIER",
            check: Check::Presence,
            when: Condition::TypeIn(GRAIN_ONLY),
        };
        let headers = StringRecord::from(vec!["TYPE", "SUPPLIER"]);
        let sugar = StringRecord::from(vec!["Sugar", ""]);
        let grain = StringRecord::from(vec!["Grain", ""]);

        assert!(rule.evaluate(&Row::new(&headers, &sugar)).is_ok());
        assert!(rule.evaluate(&Row::new(&headers, &grain)).is_err());
    }

    #[test]
    fn test_display() {
        let rule = FieldRule {
            field: "attenuation",
            column: "ATTENUATION",
            check: Check::Presence,
            when: Condition::TypeNotIn(&["Grain", "Malt Extract"]),
        };
        assert_eq!(
            rule.to_string(),
            "attenuation non-empty unless type in {Grain, Malt Extract}"
        );
    }
}
