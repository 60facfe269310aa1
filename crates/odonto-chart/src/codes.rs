//! Condition code alphabets.
//!
//! Permanent teeth are coded `0`-`8` and `-`; deciduous teeth `A`-`G` and
//! `-`. Deciduous teeth can also hold `8` (not applicable), but only age
//! reclassification writes it. A code only means something relative to its
//! tooth's alphabet.

use std::fmt;

use crate::topology::Dentition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermanentCode {
    Healthy,
    Caries,
    FilledWithCaries,
    FilledNoCaries,
    ExtractedCaries,
    ExtractedOther,
    FissureSealant,
    Prosthesis,
    NotErupted,
    Other,
}

impl PermanentCode {
    /// Picker order.
    pub const ALL: [PermanentCode; 10] = [
        PermanentCode::Healthy,
        PermanentCode::Caries,
        PermanentCode::FilledWithCaries,
        PermanentCode::FilledNoCaries,
        PermanentCode::ExtractedCaries,
        PermanentCode::ExtractedOther,
        PermanentCode::FissureSealant,
        PermanentCode::Prosthesis,
        PermanentCode::NotErupted,
        PermanentCode::Other,
    ];

    pub fn as_char(self) -> char {
        match self {
            PermanentCode::Healthy => '0',
            PermanentCode::Caries => '1',
            PermanentCode::FilledWithCaries => '2',
            PermanentCode::FilledNoCaries => '3',
            PermanentCode::ExtractedCaries => '4',
            PermanentCode::ExtractedOther => '5',
            PermanentCode::FissureSealant => '6',
            PermanentCode::Prosthesis => '7',
            PermanentCode::NotErupted => '8',
            PermanentCode::Other => '-',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.as_char() == c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeciduousCode {
    Healthy,
    Caries,
    FilledWithCaries,
    FilledNoCaries,
    ExtractedCaries,
    FissureSealant,
    Prosthesis,
    Other,
    NotApplicable,
}

impl DeciduousCode {
    /// Picker order. `NotApplicable` is not pickable.
    pub const ALL: [DeciduousCode; 8] = [
        DeciduousCode::Healthy,
        DeciduousCode::Caries,
        DeciduousCode::FilledWithCaries,
        DeciduousCode::FilledNoCaries,
        DeciduousCode::ExtractedCaries,
        DeciduousCode::FissureSealant,
        DeciduousCode::Prosthesis,
        DeciduousCode::Other,
    ];

    pub fn as_char(self) -> char {
        match self {
            DeciduousCode::Healthy => 'A',
            DeciduousCode::Caries => 'B',
            DeciduousCode::FilledWithCaries => 'C',
            DeciduousCode::FilledNoCaries => 'D',
            DeciduousCode::ExtractedCaries => 'E',
            DeciduousCode::FissureSealant => 'F',
            DeciduousCode::Prosthesis => 'G',
            DeciduousCode::Other => '-',
            DeciduousCode::NotApplicable => '8',
        }
    }

    /// Any deciduous code, including the not-applicable marker.
    pub fn from_char(c: char) -> Option<Self> {
        if c == DeciduousCode::NotApplicable.as_char() {
            return Some(DeciduousCode::NotApplicable);
        }
        Self::ALL.into_iter().find(|code| code.as_char() == c)
    }
}

/// A tooth's recorded status.
///
/// `Unknown` carries raw text read back from storage that does not belong
/// to the tooth's alphabet. It is never produced by an explicit edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Permanent(PermanentCode),
    Deciduous(DeciduousCode),
    Unknown(String),
}

impl StatusCode {
    /// The healthy code of the given alphabet.
    pub fn healthy(dentition: Dentition) -> Self {
        match dentition {
            Dentition::Permanent => StatusCode::Permanent(PermanentCode::Healthy),
            Dentition::Deciduous => StatusCode::Deciduous(DeciduousCode::Healthy),
        }
    }

    /// Whether an examiner may enter this status by hand.
    pub fn is_pickable(&self) -> bool {
        !matches!(
            self,
            StatusCode::Deciduous(DeciduousCode::NotApplicable) | StatusCode::Unknown(_)
        )
    }

    /// Strict parse: `None` unless `raw` is exactly one character from the
    /// alphabet of `dentition`.
    pub fn parse(dentition: Dentition, raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match dentition {
            Dentition::Permanent => PermanentCode::from_char(c).map(StatusCode::Permanent),
            Dentition::Deciduous => DeciduousCode::from_char(c).map(StatusCode::Deciduous),
        }
    }

    /// Lenient parse for stored data: anything outside the alphabet is kept
    /// as `Unknown`.
    pub fn parse_lenient(dentition: Dentition, raw: &str) -> Self {
        Self::parse(dentition, raw).unwrap_or_else(|| StatusCode::Unknown(raw.to_string()))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, StatusCode::Unknown(_))
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCode::Permanent(code) => write!(f, "{}", code.as_char()),
            StatusCode::Deciduous(code) => write!(f, "{}", code.as_char()),
            StatusCode::Unknown(raw) => f.write_str(raw),
        }
    }
}
