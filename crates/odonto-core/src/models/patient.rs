use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Gender {
    #[default]
    #[serde(rename = "Laki-laki")]
    Male,
    #[serde(rename = "Perempuan")]
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Laki-laki",
            Gender::Female => "Perempuan",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "laki-laki" | "laki" | "l" | "male" | "m" => Ok(Gender::Male),
            "perempuan" | "p" | "female" | "f" => Ok(Gender::Female),
            _ => Err(CoreError::InvalidField {
                field: "gender".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Where the patient was referred after the examination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Referral {
    #[default]
    #[serde(rename = "Tidak Dirujuk")]
    NotReferred,
    #[serde(rename = "Puskesmas")]
    Puskesmas,
    #[serde(rename = "Klinik Pratama")]
    PrimaryClinic,
    #[serde(rename = "Klinik Utama")]
    MainClinic,
    #[serde(rename = "Rumah Sakit")]
    Hospital,
}

impl Referral {
    pub const ALL: [Referral; 5] = [
        Referral::NotReferred,
        Referral::Puskesmas,
        Referral::PrimaryClinic,
        Referral::MainClinic,
        Referral::Hospital,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Referral::NotReferred => "Tidak Dirujuk",
            Referral::Puskesmas => "Puskesmas",
            Referral::PrimaryClinic => "Klinik Pratama",
            Referral::MainClinic => "Klinik Utama",
            Referral::Hospital => "Rumah Sakit",
        }
    }
}

impl fmt::Display for Referral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Referral {
    type Err = CoreError;

    /// Accepts the label in any case, with spaces or dashes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', " ");
        Referral::ALL
            .into_iter()
            .find(|r| r.label().to_lowercase() == wanted)
            .ok_or_else(|| CoreError::InvalidField {
                field: "referral".to_string(),
                value: s.to_string(),
            })
    }
}

/// Demographic fields captured for each surveyed patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub birth_date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub address: String,
}

/// Findings and follow-up recorded alongside the odontogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Examination {
    pub date: jiff::civil::Date,
    pub bleeding_gums: bool,
    pub oral_mucosal_lesion: bool,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub referral: Referral,
}
