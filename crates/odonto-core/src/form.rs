//! In-progress survey form.
//!
//! Owns the tooth statuses and indices until submission. Every edit
//! recomputes the indices immediately: an age edit reclassifies deciduous
//! teeth first, a tooth edit only recounts.

use jiff::civil::Date;
use uuid::Uuid;

use odonto_chart::{
    ChartError, SurveyIndices, ToothStatuses, compute_indices, initial_statuses, reclassify,
    set_status,
};

use crate::error::CoreError;
use crate::models::patient::{Examination, Gender, Patient, Referral};
use crate::models::survey::SurveyRecord;

/// Metadata stamped onto a record at submission.
#[derive(Debug, Clone)]
pub struct SubmissionMeta {
    pub created_by: String,
    pub session_id: String,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone)]
pub struct SurveyForm {
    pub name: String,
    pub gender: Gender,
    pub birth_date: Option<Date>,
    pub occupation: String,
    pub address: String,
    pub exam_date: Date,
    pub bleeding_gums: bool,
    pub oral_mucosal_lesion: bool,
    pub recommendation: String,
    pub referral: Referral,
    age: Option<u32>,
    teeth: ToothStatuses,
    indices: SurveyIndices,
}

impl SurveyForm {
    pub fn new(exam_date: Date) -> Self {
        let teeth = initial_statuses();
        let indices = compute_indices(&teeth);
        SurveyForm {
            name: String::new(),
            gender: Gender::default(),
            birth_date: None,
            occupation: String::new(),
            address: String::new(),
            exam_date,
            bleeding_gums: false,
            oral_mucosal_lesion: false,
            recommendation: String::new(),
            referral: Referral::default(),
            age: None,
            teeth,
            indices,
        }
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn teeth(&self) -> &ToothStatuses {
        &self.teeth
    }

    pub fn indices(&self) -> SurveyIndices {
        self.indices
    }

    /// Set or clear the patient's age. Returns whether any tooth status was
    /// reclassified. Clearing the age leaves the teeth as they are.
    pub fn set_age(&mut self, age: Option<u32>) -> bool {
        self.age = age;
        let Some(age) = age else {
            return false;
        };

        let next = match reclassify(&self.teeth, age) {
            std::borrow::Cow::Borrowed(_) => return false,
            std::borrow::Cow::Owned(next) => next,
        };
        self.teeth = next;
        self.indices = compute_indices(&self.teeth);
        true
    }

    /// Record one tooth's condition. A rejected edit leaves the form as it
    /// was.
    pub fn set_tooth(&mut self, tooth: u8, code: &str) -> Result<(), ChartError> {
        self.teeth = set_status(&self.teeth, tooth, code)?;
        self.indices = compute_indices(&self.teeth);
        Ok(())
    }

    /// Snapshot the form into a record and reset to a fresh form dated on
    /// the submission's local day.
    pub fn submit(&mut self, meta: SubmissionMeta) -> Result<SurveyRecord, CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::MissingField("name".to_string()));
        }
        let Some(age) = self.age else {
            return Err(CoreError::MissingField("age".to_string()));
        };

        let today = meta
            .created_at
            .to_zoned(jiff::tz::TimeZone::system())
            .date();
        let form = std::mem::replace(self, SurveyForm::new(today));

        Ok(SurveyRecord {
            id: Uuid::new_v4(),
            patient: Patient {
                name: form.name.trim().to_string(),
                age,
                gender: form.gender,
                birth_date: form.birth_date,
                occupation: form.occupation,
                address: form.address,
            },
            examination: Examination {
                date: form.exam_date,
                bleeding_gums: form.bleeding_gums,
                oral_mucosal_lesion: form.oral_mucosal_lesion,
                recommendation: form.recommendation,
                referral: form.referral,
            },
            teeth: form.teeth,
            deft: form.indices.deft,
            dmft: form.indices.dmft,
            created_at: meta.created_at,
            created_by: meta.created_by,
            session_id: meta.session_id,
        })
    }
}
