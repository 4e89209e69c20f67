//! Rule tables per category.

use brew_model::Category;

use super::rule::{Check, Condition, FieldRule};
use super::sets::{
    FERMENTABLE_GRAIN_TYPES, FERMENTABLE_TYPES, GRAIN, ORIGINS, SUPPLIED_FERMENTABLES,
    YEAST_TYPES,
};

const FERMENTABLE_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        column: "NAME",
        check: Check::Presence,
        when: Condition::Always,
    },
    FieldRule {
        field: "supplier",
        column: "SUPPLIER",
        check: Check::Presence,
        when: Condition::TypeIn(SUPPLIED_FERMENTABLES),
    },
    FieldRule {
        field: "origin",
        column: "ORIGIN",
        check: Check::Inclusion(ORIGINS),
        when: Condition::TypeIn(GRAIN),
    },
    FieldRule {
        field: "type",
        column: "TYPE",
        check: Check::Inclusion(FERMENTABLE_TYPES),
        when: Condition::Always,
    },
    FieldRule {
        field: "grain type",
        column: "GRAIN_TYPE",
        check: Check::Inclusion(FERMENTABLE_GRAIN_TYPES),
        when: Condition::TypeIn(GRAIN),
    },
    FieldRule {
        field: "color",
        column: "COLOR",
        check: Check::Presence,
        when: Condition::Always,
    },
    FieldRule {
        field: "extraction",
        column: "EXTRACTION",
        check: Check::Presence,
        when: Condition::Always,
    },
    FieldRule {
        field: "attenuation",
        column: "ATTENUATION",
        check: Check::Presence,
        when: Condition::TypeNotIn(SUPPLIED_FERMENTABLES),
    },
];

const HOP_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        column: "NAME",
        check: Check::Presence,
        when: Condition::Always,
    },
    FieldRule {
        field: "origin",
        column: "ORIGIN",
        check: Check::Inclusion(ORIGINS),
        when: Condition::Always,
    },
    FieldRule {
        field: "alpha",
        column: "ALPHA",
        check: Check::Presence,
        when: Condition::Always,
    },
];

const YEAST_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        column: "NAME",
        check: Check::Presence,
        when: Condition::Always,
    },
    FieldRule {
        field: "supplier",
        column: "SUPPLIER",
        check: Check::Presence,
        when: Condition::Always,
    },
    FieldRule {
        field: "type",
        column: "TYPE",
        check: Check::Inclusion(YEAST_TYPES),
        when: Condition::Always,
    },
    FieldRule {
        field: "attenuation",
        column: "ATTENUATION_RANGE",
        check: Check::Range { min: 13, max: 102 },
        when: Condition::Always,
    },
    FieldRule {
        field: "temperature",
        column: "TEMPERATURE_RANGE",
        check: Check::Range { min: 5, max: 40 },
        when: Condition::Always,
    },
];

/// Rules applied to every data row of a category, in evaluation order.
pub fn rules_for(category: Category) -> &'static [FieldRule] {
    match category {
        Category::Fermentable => FERMENTABLE_RULES,
        Category::Hop => HOP_RULES,
        Category::Yeast => YEAST_RULES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_counts() {
        assert_eq!(rules_for(Category::Fermentable).len(), 8);
        assert_eq!(rules_for(Category::Hop).len(), 3);
        assert_eq!(rules_for(Category::Yeast).len(), 5);
    }

    #[test]
    fn test_rules_start_with_name() {
        for category in Category::ALL {
            assert_eq!(rules_for(category)[0].column, "NAME");
        }
    }
}
