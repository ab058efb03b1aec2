use std::sync::LazyLock;

use regex::Regex;

use crate::field::SectionKind;
use crate::result::ValidationResult;
use crate::schema::{Rule, entry_required_message, scalar_rules};
use crate::value::FormValue;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    // Anchored local@domain.tld shape; the literal pattern is known-good so
    // the expect cannot fire at runtime.
    Regex::new(r"^[^@\s]+@[^@\s]+\.[A-Za-z]{2,}$").expect("email pattern is valid")
});

/// Evaluates the declarative schema against the full current value tree.
///
/// Pure and synchronous: no side effects, no dependence on prior results.
/// Per field the first failing rule short-circuits the rest of that field's
/// chain ("first error" mode). Repeated-section rows validate independently,
/// addressed by display position.
pub fn validate(value: &FormValue) -> ValidationResult {
    let mut result = ValidationResult::new();

    for entry in scalar_rules() {
        let text = value.scalar(entry.field);
        for rule in entry.rules {
            if let Some(message) = check_rule(rule, text, value) {
                result.push(entry.field.key(), message);
                break;
            }
        }
    }

    for kind in SectionKind::ALL {
        for (index, (_, row)) in value.section(kind).iter().enumerate() {
            if row.name.is_empty() {
                result.push(kind.entry_path(index), entry_required_message(kind));
            }
        }
    }

    result
}

fn check_rule(rule: &Rule, text: &str, value: &FormValue) -> Option<&'static str> {
    match rule {
        Rule::Required { message } => text.is_empty().then_some(*message),
        Rule::MinLen { limit, message } => (text.len() < *limit).then_some(*message),
        Rule::MaxLen { limit, message } => (text.len() > *limit).then_some(*message),
        Rule::Email { message } => (!EMAIL.is_match(text)).then_some(*message),
        Rule::MatchesField { other, message } => {
            (text != value.scalar(*other)).then_some(*message)
        }
    }
}
