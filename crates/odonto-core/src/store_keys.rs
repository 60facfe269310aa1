//! Object key conventions.
//!
//! Records live under a per-application public collection, so every
//! examiner sharing the bucket and application id sees the same survey set.

use uuid::Uuid;

pub const DEFAULT_APP_ID: &str = "default-dental-survey";

pub fn surveys_prefix(app_id: &str) -> String {
    format!("artifacts/{app_id}/public/data/surveys/")
}

pub fn survey(app_id: &str, id: Uuid) -> String {
    format!("{}{id}.json", surveys_prefix(app_id))
}

/// Recover the record id from a survey object key.
pub fn survey_id(key: &str) -> Option<Uuid> {
    let name = key.rsplit('/').next()?;
    let stem = name.strip_suffix(".json")?;
    Uuid::parse_str(stem).ok()
}
