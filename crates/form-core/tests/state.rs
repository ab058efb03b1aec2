use regform_core::{
    EntryValue, ExclusiveState, Field, FormState, RepeatedSection, RowId, SectionKind,
    SubmissionStatus, Toggle, payload_schema,
};
use serde_json::Value;

fn fill_valid_scalars(state: &mut FormState) {
    state.set_field(Field::Fullname, "Jane Doe");
    state.set_field(Field::Username, "janedoe");
    state.set_field(Field::Email, "jane@x.com");
    state.set_field(Field::Password, "secret1");
    state.set_field(Field::ConfirmPassword, "secret1");
}

fn snapshot(section: &RepeatedSection<EntryValue>) -> Vec<(RowId, EntryValue)> {
    section.iter().map(|(id, row)| (id, row.clone())).collect()
}

#[test]
fn valid_form_submits_successfully() {
    let mut state = FormState::new();
    fill_valid_scalars(&mut state);

    let payload = state.submit().expect("submit should accept a valid form");
    assert!(state.is_submitted());
    assert!(state.validation().is_empty());
    assert_eq!(payload.fullname, "Jane Doe");
    assert!(!payload.designation);
    assert!(payload.education.is_empty());
}

#[test]
fn short_username_blocks_submission() {
    let mut state = FormState::new();
    fill_valid_scalars(&mut state);
    state.set_field(Field::Username, "abc");

    let result = state.submit().expect_err("submit should refuse");
    assert_eq!(
        result.messages("username"),
        ["Username must be at least 6 characters".to_string()]
    );
    assert_eq!(result.error_count(), 1);
    assert!(!state.is_submitted());
    assert_eq!(state.status(), SubmissionStatus::Idle);
}

#[test]
fn empty_education_row_blocks_submission() {
    let mut state = FormState::new();
    fill_valid_scalars(&mut state);
    assert!(state.set_toggle(Toggle::Designation, true));
    state.append_row(SectionKind::Education);

    let result = state.submit().expect_err("submit should refuse");
    assert_eq!(
        result.messages("education[0].name"),
        ["Education is required".to_string()]
    );
}

#[test]
fn empty_confirmation_reports_required() {
    let mut state = FormState::new();
    fill_valid_scalars(&mut state);
    state.set_field(Field::ConfirmPassword, "");

    assert_eq!(
        state.validation().messages("confirmPassword"),
        ["Confirm Password is required".to_string()]
    );
}

#[test]
fn remaining_row_keeps_its_original_id() {
    let mut state = FormState::new();
    state.set_toggle(Toggle::Designation, true);
    let first = state.append_row(SectionKind::Education);
    let second = state.append_row(SectionKind::Education);
    state.update_row(SectionKind::Education, 1, "MIT");
    assert_ne!(first, second);

    state.remove_row(SectionKind::Education, 0);

    let section = state.value().section(SectionKind::Education);
    assert_eq!(section.len(), 1);
    assert_eq!(section.row_id(0), Some(second));
    assert_eq!(section.get(0), Some(&EntryValue::new("MIT")));
}

#[test]
fn append_then_remove_restores_prior_content() {
    let mut state = FormState::new();
    state.set_toggle(Toggle::Working, true);
    state.append_row(SectionKind::Company);
    state.update_row(SectionKind::Company, 0, "Acme");

    let before = snapshot(state.value().section(SectionKind::Company));
    state.append_row(SectionKind::Company);
    state.remove_row(SectionKind::Company, 1);
    let after = snapshot(state.value().section(SectionKind::Company));

    assert_eq!(before, after);
}

#[test]
fn stale_indices_are_no_ops() {
    let mut state = FormState::new();
    state.append_row(SectionKind::Education);
    state.update_row(SectionKind::Education, 0, "MIT");

    // Index captured before a removal must not corrupt another row.
    state.remove_row(SectionKind::Education, 5);
    state.update_row(SectionKind::Education, 3, "stale");

    let section = state.value().section(SectionKind::Education);
    assert_eq!(section.len(), 1);
    assert_eq!(section.get(0), Some(&EntryValue::new("MIT")));
}

#[test]
fn toggles_are_mutually_exclusive() {
    let mut state = FormState::new();
    assert_eq!(ExclusiveState::of(state.value()), ExclusiveState::Neither);

    assert!(state.set_toggle(Toggle::Designation, true));
    assert!(state.toggle_locked(Toggle::Working));
    assert!(!state.set_toggle(Toggle::Working, true));
    assert_eq!(
        ExclusiveState::of(state.value()),
        ExclusiveState::OnlyDesignation
    );

    assert!(state.set_toggle(Toggle::Designation, false));
    assert!(!state.toggle_locked(Toggle::Working));
    assert!(state.set_toggle(Toggle::Working, true));
    assert!(state.toggle_locked(Toggle::Designation));
    assert!(!state.set_toggle(Toggle::Designation, true));
    assert_eq!(
        ExclusiveState::of(state.value()),
        ExclusiveState::OnlyWorking
    );
    assert!(!(state.value().designation && state.value().working));
}

#[test]
fn section_visibility_follows_its_gate() {
    let mut state = FormState::new();
    assert!(!state.section_visible(SectionKind::Education));
    state.set_toggle(Toggle::Designation, true);
    assert!(state.section_visible(SectionKind::Education));
    assert!(!state.section_visible(SectionKind::Company));
}

#[test]
fn hiding_a_section_keeps_rows_and_errors() {
    let mut state = FormState::new();
    fill_valid_scalars(&mut state);
    state.set_toggle(Toggle::Designation, true);
    state.append_row(SectionKind::Education);
    state.set_toggle(Toggle::Designation, false);

    assert_eq!(state.value().section(SectionKind::Education).len(), 1);
    assert_eq!(
        state.validation().first_message("education[0].name"),
        Some("Education is required")
    );
}

#[test]
fn reset_is_idempotent() {
    let mut state = FormState::new();
    fill_valid_scalars(&mut state);
    state.set_toggle(Toggle::Working, true);
    state.append_row(SectionKind::Company);

    state.reset();
    let once = state.value().clone();
    state.reset();
    assert_eq!(&once, state.value());
    assert!(state.validation().is_empty());
    assert_eq!(state.status(), SubmissionStatus::Idle);
}

#[test]
fn reset_clears_submitted_status() {
    let mut state = FormState::new();
    fill_valid_scalars(&mut state);
    state.submit().expect("valid form");
    assert!(state.is_submitted());

    state.reset();
    assert!(!state.is_submitted());
    assert!(state.value().fullname.is_empty());
}

#[test]
fn failed_submit_allows_fixing_and_resubmitting() {
    let mut state = FormState::new();
    fill_valid_scalars(&mut state);
    state.set_field(Field::Email, "broken");
    assert!(state.submit().is_err());

    state.set_field(Field::Email, "jane@x.com");
    assert!(state.submit().is_ok());
    assert!(state.is_submitted());
}

#[test]
fn payload_uses_original_field_names() {
    let mut state = FormState::new();
    fill_valid_scalars(&mut state);
    state.set_toggle(Toggle::Working, true);
    state.append_row(SectionKind::Company);
    state.update_row(SectionKind::Company, 0, "Acme");

    let payload = state.submit().expect("valid form");
    let json = serde_json::to_value(&payload).expect("payload serializes");
    assert_eq!(json["confirmPassword"], Value::String("secret1".into()));
    assert_eq!(json["company"][0]["name"], Value::String("Acme".into()));
    assert!(json.get("confirm_password").is_none());
}

#[test]
fn payload_schema_describes_the_handoff() {
    let schema = payload_schema();
    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .expect("schema has properties");
    assert!(properties.contains_key("username"));
    assert!(properties.contains_key("confirmPassword"));
    assert!(properties.contains_key("education"));
}
