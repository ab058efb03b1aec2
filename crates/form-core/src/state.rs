use crate::exclusive;
use crate::field::{Field, SectionKind, Toggle};
use crate::result::ValidationResult;
use crate::section::RowId;
use crate::submit;
use crate::validate::validate;
use crate::value::{EntryValue, FormValue, RegistrationPayload};

/// Whether the form has been accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitted,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitted => "submitted",
        }
    }
}

/// Single source of truth for the form: the current value tree, the last
/// validation result, and the submission status.
///
/// Every mutation re-runs the schema against the whole tree, so cross-field
/// rules (confirmPassword against the current password) stay correct without
/// any subscription wiring.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    value: FormValue,
    result: ValidationResult,
    status: SubmissionStatus,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &FormValue {
        &self.value
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.result
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitted(&self) -> bool {
        self.status == SubmissionStatus::Submitted
    }

    pub fn set_field(&mut self, field: Field, text: impl Into<String>) {
        self.value.set_scalar(field, text.into());
        self.revalidate();
    }

    /// Routes through the mutual-exclusion controller; returns whether the
    /// change was applied. A refused change leaves value and errors untouched.
    pub fn set_toggle(&mut self, toggle: Toggle, on: bool) -> bool {
        let applied = exclusive::apply_toggle(&mut self.value, toggle, on);
        if applied {
            self.revalidate();
        }
        applied
    }

    pub fn toggle_locked(&self, toggle: Toggle) -> bool {
        exclusive::toggle_locked(&self.value, toggle)
    }

    pub fn section_visible(&self, kind: SectionKind) -> bool {
        exclusive::section_visible(&self.value, kind)
    }

    /// Appends an empty row to the section and returns its stable id.
    pub fn append_row(&mut self, kind: SectionKind) -> RowId {
        let id = self.value.section_mut(kind).append(EntryValue::default());
        self.revalidate();
        id
    }

    /// Removes the row at the given display position; stale indices no-op.
    pub fn remove_row(&mut self, kind: SectionKind, index: usize) {
        self.value.section_mut(kind).remove(index);
        self.revalidate();
    }

    /// Rewrites the row value at the given display position, keeping its id;
    /// stale indices no-op.
    pub fn update_row(&mut self, kind: SectionKind, index: usize, name: impl Into<String>) {
        self.value
            .section_mut(kind)
            .update(index, EntryValue::new(name));
        self.revalidate();
    }

    /// Validates and, on success, finalizes the current value and hands it
    /// off. An invalid form is the normal failure outcome: status stays
    /// `Idle` and further edits or resubmission remain possible.
    pub fn submit(&mut self) -> Result<RegistrationPayload, ValidationResult> {
        match submit::submit(&self.value) {
            Ok(payload) => {
                self.result = ValidationResult::new();
                self.status = SubmissionStatus::Submitted;
                Ok(payload)
            }
            Err(result) => {
                self.result = result.clone();
                Err(result)
            }
        }
    }

    /// Restores the initial state: scalars empty, flags false, sections
    /// empty, no errors, status `Idle`. Callable at any time; calling it
    /// twice is the same as once.
    pub fn reset(&mut self) {
        *self = FormState::new();
    }

    fn revalidate(&mut self) {
        self.result = validate(&self.value);
    }
}
