use log::info;
use schemars::schema_for;
use serde_json::Value;

use crate::result::ValidationResult;
use crate::validate::validate;
use crate::value::{FormValue, RegistrationPayload};

/// Runs the schema over the current tree and finalizes on success.
///
/// The accepted payload is serialized and logged; there is no network
/// handoff. A non-empty result is returned as data for field-level display
/// and never raises.
pub fn submit(value: &FormValue) -> Result<RegistrationPayload, ValidationResult> {
    let result = validate(value);
    if !result.is_empty() {
        return Err(result);
    }

    let payload = value.to_payload();
    let rendered = serde_json::to_string_pretty(&payload)
        .unwrap_or_else(|error| format!("<payload not serializable: {error}>"));
    info!("registration accepted:\n{rendered}");
    Ok(payload)
}

/// JSON Schema describing the accepted payload shape.
pub fn payload_schema() -> Value {
    serde_json::to_value(schema_for!(RegistrationPayload)).unwrap_or_default()
}
