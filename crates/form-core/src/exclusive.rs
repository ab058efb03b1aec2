use crate::field::{SectionKind, Toggle};
use crate::value::FormValue;

/// The reachable states of the `(designation, working)` pair.
/// Both-true does not appear: [`apply_toggle`] refuses the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusiveState {
    Neither,
    OnlyDesignation,
    OnlyWorking,
}

impl ExclusiveState {
    pub fn of(value: &FormValue) -> Self {
        match (value.designation, value.working) {
            (true, _) => ExclusiveState::OnlyDesignation,
            (_, true) => ExclusiveState::OnlyWorking,
            _ => ExclusiveState::Neither,
        }
    }
}

/// Whether a toggle's control is disabled because the opposite flag is set.
/// Mirrors the `disabled` gating on the checkbox inputs: enforcement happens
/// at the input, not by correcting after the fact.
pub fn toggle_locked(value: &FormValue, toggle: Toggle) -> bool {
    value.toggle(toggle.opposite())
}

/// Applies a toggle change unless the control is locked.
///
/// Returns whether the change was applied. Refusing every change to a locked
/// toggle keeps the both-true state unreachable under any call sequence.
pub fn apply_toggle(value: &mut FormValue, toggle: Toggle, on: bool) -> bool {
    if toggle_locked(value, toggle) {
        return false;
    }
    value.set_toggle_raw(toggle, on);
    true
}

/// Whether a repeated section is currently presented.
///
/// Hiding a section does not clear its rows, and the schema keeps validating
/// them; visibility only scopes what the presentation layer shows.
pub fn section_visible(value: &FormValue, kind: SectionKind) -> bool {
    value.toggle(kind.gate())
}
