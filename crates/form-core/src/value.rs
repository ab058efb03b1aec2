use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::field::{Field, SectionKind, Toggle};
use crate::section::RepeatedSection;

/// Value of one repeated-section row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EntryValue {
    pub name: String,
}

impl EntryValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The full current value tree of the registration form.
///
/// Created with all scalars empty, both flags false, and both repeated
/// sections empty. Mutated only through [`crate::FormState`] actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValue {
    pub fullname: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub designation: bool,
    pub working: bool,
    pub education: RepeatedSection<EntryValue>,
    pub company: RepeatedSection<EntryValue>,
}

impl FormValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(&self, field: Field) -> &str {
        match field {
            Field::Fullname => &self.fullname,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set_scalar(&mut self, field: Field, text: String) {
        let slot = match field {
            Field::Fullname => &mut self.fullname,
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = text;
    }

    pub fn toggle(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Designation => self.designation,
            Toggle::Working => self.working,
        }
    }

    pub fn set_toggle_raw(&mut self, toggle: Toggle, on: bool) {
        match toggle {
            Toggle::Designation => self.designation = on,
            Toggle::Working => self.working = on,
        }
    }

    pub fn section(&self, kind: SectionKind) -> &RepeatedSection<EntryValue> {
        match kind {
            SectionKind::Education => &self.education,
            SectionKind::Company => &self.company,
        }
    }

    pub fn section_mut(&mut self, kind: SectionKind) -> &mut RepeatedSection<EntryValue> {
        match kind {
            SectionKind::Education => &mut self.education,
            SectionKind::Company => &mut self.company,
        }
    }

    /// Finalized serializable view of the current tree. Row ids are
    /// engine-internal and do not appear in the handoff payload.
    pub fn to_payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            fullname: self.fullname.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            designation: self.designation,
            working: self.working,
            education: self.education.values().cloned().collect(),
            company: self.company.values().cloned().collect(),
        }
    }
}

/// The payload handed off after a successful submit.
///
/// Field names follow the original wire shape (`confirmPassword` camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub fullname: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub designation: bool,
    pub working: bool,
    pub education: Vec<EntryValue>,
    pub company: Vec<EntryValue>,
}
