//! Condition catalog: display metadata for every status code.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::codes::{DeciduousCode, PermanentCode, StatusCode};
use crate::topology::Dentition;

/// Label shown for a code that is not in the tooth's alphabet.
pub const UNAVAILABLE_LABEL: &str = "N/A";

/// Visual grouping of a condition, used for colouring the odontogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConditionCategory {
    Healthy,
    Caries,
    FilledWithCaries,
    Filled,
    ExtractedCaries,
    ExtractedOther,
    Sealant,
    Prosthesis,
    NotErupted,
    NotApplicable,
    Other,
}

impl ConditionCategory {
    /// Palette colour name for this category.
    pub fn color(self) -> &'static str {
        match self {
            ConditionCategory::Healthy => "green",
            ConditionCategory::Caries => "red",
            ConditionCategory::FilledWithCaries => "yellow",
            ConditionCategory::Filled => "blue",
            ConditionCategory::ExtractedCaries => "dark-gray",
            ConditionCategory::ExtractedOther => "gray",
            ConditionCategory::Sealant => "purple",
            ConditionCategory::Prosthesis => "indigo",
            ConditionCategory::NotErupted => "light-gray",
            ConditionCategory::NotApplicable | ConditionCategory::Other => "white",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub code: char,
    pub label: &'static str,
    pub category: ConditionCategory,
}

const fn condition(code: char, label: &'static str, category: ConditionCategory) -> Condition {
    Condition {
        code,
        label,
        category,
    }
}

static PERMANENT: [Condition; 10] = [
    condition('0', "Sehat", ConditionCategory::Healthy),
    condition('1', "Karies", ConditionCategory::Caries),
    condition('2', "Tumpatan dg Karies", ConditionCategory::FilledWithCaries),
    condition('3', "Tumpatan tanpa Karies", ConditionCategory::Filled),
    condition('4', "Cabut krn Karies", ConditionCategory::ExtractedCaries),
    condition('5', "Cabut krn Lain", ConditionCategory::ExtractedOther),
    condition('6', "Fissure Sealant", ConditionCategory::Sealant),
    condition('7', "Protesa/Implan", ConditionCategory::Prosthesis),
    condition('8', "Tidak Tumbuh", ConditionCategory::NotErupted),
    condition('-', "Lain-lain", ConditionCategory::Other),
];

static DECIDUOUS: [Condition; 8] = [
    condition('A', "Sehat", ConditionCategory::Healthy),
    condition('B', "Karies", ConditionCategory::Caries),
    condition('C', "Tumpatan dg Karies", ConditionCategory::FilledWithCaries),
    condition('D', "Tumpatan tanpa Karies", ConditionCategory::Filled),
    condition('E', "Cabut krn Karies", ConditionCategory::ExtractedCaries),
    condition('F', "Fissure Sealant", ConditionCategory::Sealant),
    condition('G', "Protesa/Implan", ConditionCategory::Prosthesis),
    condition('-', "Lain-lain", ConditionCategory::Other),
];

static DECIDUOUS_NOT_APPLICABLE: Condition =
    condition('8', UNAVAILABLE_LABEL, ConditionCategory::NotApplicable);

/// Pickable conditions of an alphabet, in picker order.
pub fn conditions(dentition: Dentition) -> &'static [Condition] {
    match dentition {
        Dentition::Permanent => &PERMANENT,
        Dentition::Deciduous => &DECIDUOUS,
    }
}

/// Look up a raw code in the given alphabet. Unknown codes yield `None`.
pub fn lookup(dentition: Dentition, code: &str) -> Option<&'static Condition> {
    match StatusCode::parse(dentition, code)? {
        StatusCode::Permanent(code) => Some(code.condition()),
        StatusCode::Deciduous(code) => Some(code.condition()),
        StatusCode::Unknown(_) => None,
    }
}

impl PermanentCode {
    pub fn condition(self) -> &'static Condition {
        let index = PermanentCode::ALL
            .iter()
            .position(|&c| c == self)
            .unwrap_or_default();
        &PERMANENT[index]
    }
}

impl DeciduousCode {
    pub fn condition(self) -> &'static Condition {
        match DeciduousCode::ALL.iter().position(|&c| c == self) {
            Some(index) => &DECIDUOUS[index],
            None => &DECIDUOUS_NOT_APPLICABLE,
        }
    }
}

impl StatusCode {
    pub fn condition(&self) -> Option<&'static Condition> {
        match self {
            StatusCode::Permanent(code) => Some(code.condition()),
            StatusCode::Deciduous(code) => Some(code.condition()),
            StatusCode::Unknown(_) => None,
        }
    }

    /// Display label, or [`UNAVAILABLE_LABEL`] for unknown codes.
    pub fn label(&self) -> &'static str {
        self.condition().map_or(UNAVAILABLE_LABEL, |c| c.label)
    }
}
