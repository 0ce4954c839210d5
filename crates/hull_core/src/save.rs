//! Save payload contract and version migration.
//!
//! A save payload is a JSON object with eight top-level keys. Payloads
//! written before versioning existed (version 0) lack `time_steps` and
//! `roaming`; [`migrate_save`] fills those in before validation.

use serde_json::{json, Map, Value};

use crate::error::{InvariantViolation, Result};

/// Current save payload version.
pub const SAVE_VERSION: i32 = 1;

/// Top-level keys every save payload must contain.
pub const REQUIRED_SAVE_KEYS: [&str; 8] = [
    "save_version",
    "player",
    "party",
    "inventory",
    "world_flags",
    "npc_states",
    "roaming",
    "time_steps",
];

/// Starting clock for payloads that predate time tracking.
fn default_time_steps() -> Value {
    json!({ "total_steps": 0, "clock_hours": 8, "clock_minutes": 0 })
}

/// Roaming encounter state for payloads that predate roaming creatures.
fn default_roaming() -> Value {
    json!({ "rng_seed": 777, "step_counter": 0, "rare_counter": 0 })
}

/// Read the payload's version. Missing or non-numeric versions read as 0.
///
/// Any JSON number counts, so `2.0` reads as version 2.
#[must_use]
pub fn save_version(payload: &Value) -> f64 {
    payload
        .get("save_version")
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

/// Upgrade a payload to [`SAVE_VERSION`].
///
/// Keys already present are never overwritten. Payloads that are not JSON
/// objects are returned unchanged so validation can reject them.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn migrate_save(payload: &Value) -> Value {
    let Some(object) = payload.as_object() else {
        return payload.clone();
    };
    let mut out: Map<String, Value> = object.clone();

    if save_version(payload) == 0.0 {
        if is_missing(&out, "time_steps") {
            out.insert("time_steps".to_string(), default_time_steps());
        }
        if is_missing(&out, "roaming") {
            out.insert("roaming".to_string(), default_roaming());
        }
        out.insert("save_version".to_string(), Value::from(1));
        tracing::debug!("Migrated save payload from version 0 to 1");
    }

    Value::Object(out)
}

/// Absent keys and falsy values both count as missing for migration.
fn is_missing(object: &Map<String, Value>, key: &str) -> bool {
    match object.get(key) {
        None | Some(Value::Null | Value::Bool(false)) => true,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Required keys absent from the payload, in contract order.
///
/// Every key is reported missing when the payload is not an object.
#[must_use]
pub fn missing_save_keys(payload: &Value) -> Vec<String> {
    REQUIRED_SAVE_KEYS
        .iter()
        .filter(|key| payload.get(**key).is_none())
        .map(|key| (*key).to_string())
        .collect()
}

/// Validate a (migrated) save payload.
///
/// # Errors
///
/// Returns [`InvariantViolation::UnsupportedSaveVersion`] for payloads newer
/// than [`SAVE_VERSION`], or [`InvariantViolation::MissingSaveKeys`] when
/// required keys are absent.
pub fn validate_save(payload: &Value) -> Result<()> {
    if save_version(payload) > f64::from(SAVE_VERSION) {
        return Err(InvariantViolation::UnsupportedSaveVersion {
            found: payload["save_version"].to_string(),
            supported: SAVE_VERSION,
        });
    }

    let missing = missing_save_keys(payload);
    if !missing.is_empty() {
        return Err(InvariantViolation::MissingSaveKeys(missing));
    }

    Ok(())
}
