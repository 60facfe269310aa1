use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// def-t: decayed, extracted, and filled deciduous teeth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeftIndex {
    #[serde(rename = "d")]
    pub decayed: u32,
    #[serde(rename = "e")]
    pub extracted: u32,
    #[serde(rename = "f")]
    pub filled: u32,
    pub total: u32,
}

/// DMF-T: decayed, missing, and filled permanent teeth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DmftIndex {
    #[serde(rename = "D")]
    pub decayed: u32,
    #[serde(rename = "M")]
    pub missing: u32,
    #[serde(rename = "F")]
    pub filled: u32,
    pub total: u32,
}

impl DeftIndex {
    pub fn new(decayed: u32, extracted: u32, filled: u32) -> Self {
        DeftIndex {
            decayed,
            extracted,
            filled,
            total: decayed + extracted + filled,
        }
    }
}

impl DmftIndex {
    pub fn new(decayed: u32, missing: u32, filled: u32) -> Self {
        DmftIndex {
            decayed,
            missing,
            filled,
            total: decayed + missing + filled,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurveyIndices {
    pub deft: DeftIndex,
    pub dmft: DmftIndex,
}
