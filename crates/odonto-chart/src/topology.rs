//! Tooth topology.
//!
//! Static FDI layout of the odontogram: four quadrants, each with eight
//! permanent and five deciduous positions in outer-to-inner display order.
//! Dentition membership is answered by table lookup.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ChartError;

/// Which set of teeth (and therefore which code alphabet) a tooth belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Dentition {
    Permanent,
    Deciduous,
}

impl fmt::Display for Dentition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dentition::Permanent => f.write_str("permanent"),
            Dentition::Deciduous => f.write_str("deciduous"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuadrantId {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

/// One quadrant of the odontogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quadrant {
    pub id: QuadrantId,
    pub permanent: [u8; 8],
    pub deciduous: [u8; 5],
}

static QUADRANTS: [Quadrant; 4] = [
    Quadrant {
        id: QuadrantId::UpperRight,
        permanent: [18, 17, 16, 15, 14, 13, 12, 11],
        deciduous: [55, 54, 53, 52, 51],
    },
    Quadrant {
        id: QuadrantId::UpperLeft,
        permanent: [21, 22, 23, 24, 25, 26, 27, 28],
        deciduous: [61, 62, 63, 64, 65],
    },
    Quadrant {
        id: QuadrantId::LowerLeft,
        permanent: [31, 32, 33, 34, 35, 36, 37, 38],
        deciduous: [71, 72, 73, 74, 75],
    },
    Quadrant {
        id: QuadrantId::LowerRight,
        permanent: [48, 47, 46, 45, 44, 43, 42, 41],
        deciduous: [85, 84, 83, 82, 81],
    },
];

static DENTITION_BY_TOOTH: LazyLock<BTreeMap<u8, Dentition>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    for quadrant in &QUADRANTS {
        for &n in &quadrant.permanent {
            map.insert(n, Dentition::Permanent);
        }
        for &n in &quadrant.deciduous {
            map.insert(n, Dentition::Deciduous);
        }
    }
    map
});

static ALL_TEETH: LazyLock<Vec<ToothNumber>> = LazyLock::new(|| {
    DENTITION_BY_TOOTH
        .iter()
        .map(|(&number, &dentition)| ToothNumber { number, dentition })
        .collect()
});

/// A tooth from the fixed odontogram set. Only constructible through
/// [`ToothNumber::new`], so every value is a known tooth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToothNumber {
    number: u8,
    dentition: Dentition,
}

impl ToothNumber {
    pub fn new(number: u8) -> Result<Self, ChartError> {
        DENTITION_BY_TOOTH
            .get(&number)
            .map(|&dentition| ToothNumber { number, dentition })
            .ok_or(ChartError::UnknownTooth(number))
    }

    pub fn get(self) -> u8 {
        self.number
    }

    pub fn dentition(self) -> Dentition {
        self.dentition
    }

    pub fn is_deciduous(self) -> bool {
        self.dentition == Dentition::Deciduous
    }
}

impl fmt::Display for ToothNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// The four quadrants in display order: upper-right, upper-left,
/// lower-left, lower-right.
pub fn quadrants() -> &'static [Quadrant; 4] {
    &QUADRANTS
}

/// Every tooth in the odontogram, ascending by number.
pub fn all_teeth() -> &'static [ToothNumber] {
    &ALL_TEETH
}

pub fn is_deciduous(number: u8) -> bool {
    DENTITION_BY_TOOTH.get(&number) == Some(&Dentition::Deciduous)
}

/// Check that the quadrant tables partition the standard FDI numbers:
/// 32 permanent (11–18 … 41–48) and 20 deciduous (51–55 … 81–85), with no
/// tooth listed twice.
pub fn validate() -> Result<(), ChartError> {
    let expected_permanent: BTreeSet<u8> = (1..=4u8)
        .flat_map(|q| (1..=8u8).map(move |i| q * 10 + i))
        .collect();
    let expected_deciduous: BTreeSet<u8> = (5..=8u8)
        .flat_map(|q| (1..=5u8).map(move |i| q * 10 + i))
        .collect();

    let mut seen = BTreeSet::new();
    let mut permanent = BTreeSet::new();
    let mut deciduous = BTreeSet::new();

    for quadrant in &QUADRANTS {
        for &n in &quadrant.permanent {
            if !seen.insert(n) {
                return Err(ChartError::Topology(format!("tooth {n} listed twice")));
            }
            permanent.insert(n);
        }
        for &n in &quadrant.deciduous {
            if !seen.insert(n) {
                return Err(ChartError::Topology(format!("tooth {n} listed twice")));
            }
            deciduous.insert(n);
        }
    }

    if permanent != expected_permanent {
        let stray: Vec<_> = permanent.symmetric_difference(&expected_permanent).collect();
        return Err(ChartError::Topology(format!(
            "permanent quadrants do not cover the standard set (mismatch: {stray:?})"
        )));
    }
    if deciduous != expected_deciduous {
        let stray: Vec<_> = deciduous.symmetric_difference(&expected_deciduous).collect();
        return Err(ChartError::Topology(format!(
            "deciduous quadrants do not cover the standard set (mismatch: {stray:?})"
        )));
    }

    Ok(())
}
