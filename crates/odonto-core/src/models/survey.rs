use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use odonto_chart::{DeftIndex, DmftIndex, SurveyIndices, ToothStatuses};

use super::patient::{Examination, Patient};

/// One submitted survey. Immutable once stored; the only later operation
/// is deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurveyRecord {
    pub id: Uuid,
    pub patient: Patient,
    pub examination: Examination,
    #[ts(type = "Record<string, string>")]
    pub teeth: ToothStatuses,
    #[serde(default)]
    pub deft: DeftIndex,
    #[serde(default)]
    pub dmft: DmftIndex,
    pub created_at: jiff::Timestamp,
    pub created_by: String,
    #[serde(default)]
    pub session_id: String,
}

impl SurveyRecord {
    pub fn indices(&self) -> SurveyIndices {
        SurveyIndices {
            deft: self.deft,
            dmft: self.dmft,
        }
    }
}

/// Order records newest first by creation time.
pub fn sort_newest_first(records: &mut [SurveyRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
