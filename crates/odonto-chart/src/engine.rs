//! Survey index engine.
//!
//! Pure functions over a [`ToothStatuses`] mapping. Callers run
//! [`reclassify`] whenever the patient's age changes and then
//! [`compute_indices`], so the indices never reflect a stale age.

use std::borrow::Cow;

use crate::codes::{DeciduousCode, PermanentCode, StatusCode};
use crate::error::ChartError;
use crate::indices::{DeftIndex, DmftIndex, SurveyIndices};
use crate::statuses::ToothStatuses;
use crate::topology::{Dentition, ToothNumber};

/// From this age on, deciduous teeth are treated as shed.
pub const DECIDUOUS_AGE_LIMIT: u32 = 15;

/// Baseline before any examination input: every tooth healthy.
pub fn initial_statuses() -> ToothStatuses {
    ToothStatuses::healthy()
}

/// Apply the age rule to deciduous teeth.
///
/// At or above [`DECIDUOUS_AGE_LIMIT`] every deciduous tooth becomes
/// not-applicable. Below it, not-applicable deciduous teeth revert to
/// healthy and every other status is kept. Permanent teeth are never
/// touched. Returns `Cow::Borrowed` when nothing changed.
pub fn reclassify(statuses: &ToothStatuses, age: u32) -> Cow<'_, ToothStatuses> {
    let not_applicable = StatusCode::Deciduous(DeciduousCode::NotApplicable);
    let healthy = StatusCode::Deciduous(DeciduousCode::Healthy);

    let updates: Vec<(ToothNumber, StatusCode)> = statuses
        .iter()
        .filter(|(tooth, _)| tooth.is_deciduous())
        .filter_map(|(tooth, status)| {
            if age >= DECIDUOUS_AGE_LIMIT {
                (*status != not_applicable).then(|| (tooth, not_applicable.clone()))
            } else {
                (*status == not_applicable).then(|| (tooth, healthy.clone()))
            }
        })
        .collect();

    if updates.is_empty() {
        return Cow::Borrowed(statuses);
    }

    let mut next = statuses.clone();
    for (tooth, status) in updates {
        next.replace(tooth, status);
    }
    Cow::Owned(next)
}

/// Count def-t over deciduous teeth and DMF-T over permanent teeth.
/// Codes outside a tooth's alphabet count for nothing.
pub fn compute_indices(statuses: &ToothStatuses) -> SurveyIndices {
    let (mut d, mut e, mut f) = (0, 0, 0);
    let (mut big_d, mut big_m, mut big_f) = (0, 0, 0);

    for (tooth, status) in statuses.iter() {
        match (tooth.dentition(), status) {
            (Dentition::Deciduous, StatusCode::Deciduous(code)) => match code {
                DeciduousCode::Caries | DeciduousCode::FilledWithCaries => d += 1,
                DeciduousCode::ExtractedCaries => e += 1,
                DeciduousCode::FilledNoCaries => f += 1,
                DeciduousCode::Healthy
                | DeciduousCode::FissureSealant
                | DeciduousCode::Prosthesis
                | DeciduousCode::Other
                | DeciduousCode::NotApplicable => {}
            },
            (Dentition::Permanent, StatusCode::Permanent(code)) => match code {
                PermanentCode::Caries | PermanentCode::FilledWithCaries => big_d += 1,
                PermanentCode::ExtractedCaries | PermanentCode::ExtractedOther => big_m += 1,
                PermanentCode::FilledNoCaries => big_f += 1,
                PermanentCode::Healthy
                | PermanentCode::FissureSealant
                | PermanentCode::Prosthesis
                | PermanentCode::NotErupted
                | PermanentCode::Other => {}
            },
            _ => {}
        }
    }

    SurveyIndices {
        deft: DeftIndex::new(d, e, f),
        dmft: DmftIndex::new(big_d, big_m, big_f),
    }
}

/// Set one tooth's status, returning the updated mapping.
///
/// Rejects tooth numbers outside the odontogram, codes outside the tooth's
/// alphabet, and the deciduous not-applicable marker; the input mapping is
/// left as it was.
pub fn set_status(
    statuses: &ToothStatuses,
    tooth: u8,
    code: &str,
) -> Result<ToothStatuses, ChartError> {
    let tooth = ToothNumber::new(tooth)?;
    let status = StatusCode::parse(tooth.dentition(), code)
        .filter(StatusCode::is_pickable)
        .ok_or_else(|| ChartError::InvalidCode {
            tooth: tooth.get(),
            code: code.to_string(),
            dentition: tooth.dentition(),
        })?;

    let mut next = statuses.clone();
    next.replace(tooth, status);
    Ok(next)
}
