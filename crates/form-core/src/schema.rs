use crate::field::{Field, SectionKind};

/// One constraint in a field's rule chain.
///
/// Rules are pure data; [`crate::validate::validate`] interprets them against
/// the full current value tree. `MatchesField` is the cross-field variant: it
/// compares against the *current* value of another scalar, which is why
/// validation always re-runs over the whole tree rather than incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required { message: &'static str },
    MinLen { limit: usize, message: &'static str },
    MaxLen { limit: usize, message: &'static str },
    Email { message: &'static str },
    MatchesField { other: Field, message: &'static str },
}

/// Rule chain for one scalar field, evaluated in order, first error wins.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: Field,
    pub rules: &'static [Rule],
}

const SCALAR_RULES: &[FieldRules] = &[
    FieldRules {
        field: Field::Fullname,
        rules: &[Rule::Required {
            message: "Fullname is required",
        }],
    },
    FieldRules {
        field: Field::Username,
        rules: &[
            Rule::Required {
                message: "Username is required",
            },
            Rule::MinLen {
                limit: 6,
                message: "Username must be at least 6 characters",
            },
            Rule::MaxLen {
                limit: 20,
                message: "Username must not exceed 20 characters",
            },
        ],
    },
    FieldRules {
        field: Field::Email,
        rules: &[
            Rule::Required {
                message: "Email is required",
            },
            Rule::Email {
                message: "Email is invalid",
            },
        ],
    },
    FieldRules {
        field: Field::Password,
        rules: &[
            Rule::Required {
                message: "Password is required",
            },
            Rule::MinLen {
                limit: 6,
                message: "Password must be at least 6 characters",
            },
            Rule::MaxLen {
                limit: 40,
                message: "Password must not exceed 40 characters",
            },
        ],
    },
    FieldRules {
        field: Field::ConfirmPassword,
        rules: &[
            Rule::Required {
                message: "Confirm Password is required",
            },
            Rule::MatchesField {
                other: Field::Password,
                message: "Confirm Password does not match",
            },
        ],
    },
];

/// The declarative schema for all scalar fields.
pub fn scalar_rules() -> &'static [FieldRules] {
    SCALAR_RULES
}

/// Per-row required-rule message for a repeated section. Applied to every
/// row regardless of the section's toggle state.
pub const fn entry_required_message(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Education => "Education is required",
        SectionKind::Company => "Company is required",
    }
}
