#![allow(missing_docs)]

pub mod exclusive;
pub mod field;
pub mod result;
pub mod schema;
pub mod section;
pub mod state;
pub mod submit;
pub mod validate;
pub mod value;

pub use exclusive::{ExclusiveState, apply_toggle, section_visible, toggle_locked};
pub use field::{Field, SectionKind, Toggle};
pub use result::ValidationResult;
pub use schema::{FieldRules, Rule, entry_required_message, scalar_rules};
pub use section::{RepeatedSection, Row, RowId};
pub use state::{FormState, SubmissionStatus};
pub use submit::{payload_schema, submit};
pub use validate::validate;
pub use value::{EntryValue, FormValue, RegistrationPayload};
