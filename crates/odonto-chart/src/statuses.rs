use std::collections::BTreeMap;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::codes::StatusCode;
use crate::topology::{self, ToothNumber};

/// Status of every tooth in the odontogram.
///
/// Always total over [`topology::all_teeth`]. Serialized as a JSON object
/// keyed by tooth number (`{"11": "0", "55": "B", ...}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToothStatuses {
    entries: BTreeMap<ToothNumber, StatusCode>,
}

impl ToothStatuses {
    /// Every tooth at its alphabet's healthy code.
    pub fn healthy() -> Self {
        let entries = topology::all_teeth()
            .iter()
            .map(|&tooth| (tooth, StatusCode::healthy(tooth.dentition())))
            .collect();
        ToothStatuses { entries }
    }

    /// Rebuild from stored raw codes. Missing teeth become `Unknown("")`,
    /// keys outside the odontogram are dropped, and codes outside a tooth's
    /// alphabet are kept as `Unknown`.
    pub fn from_raw<K, V>(raw: &BTreeMap<K, V>) -> Self
    where
        K: AsRef<str> + Ord,
        V: AsRef<str>,
    {
        let mut by_number: BTreeMap<u8, &str> = BTreeMap::new();
        for (key, value) in raw {
            if let Ok(n) = key.as_ref().trim().parse::<u8>() {
                by_number.insert(n, value.as_ref());
            }
        }

        let entries = topology::all_teeth()
            .iter()
            .map(|&tooth| {
                let status = match by_number.get(&tooth.get()) {
                    Some(raw) => StatusCode::parse_lenient(tooth.dentition(), raw),
                    None => StatusCode::Unknown(String::new()),
                };
                (tooth, status)
            })
            .collect();
        ToothStatuses { entries }
    }

    pub fn get(&self, tooth: ToothNumber) -> &StatusCode {
        // Every ToothNumber is in the map by construction.
        &self.entries[&tooth]
    }

    /// Ascending by tooth number.
    pub fn iter(&self) -> impl Iterator<Item = (ToothNumber, &StatusCode)> {
        self.entries.iter().map(|(&tooth, status)| (tooth, status))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn replace(&mut self, tooth: ToothNumber, status: StatusCode) {
        self.entries.insert(tooth, status);
    }
}

impl Default for ToothStatuses {
    fn default() -> Self {
        Self::healthy()
    }
}

impl Serialize for ToothStatuses {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (tooth, status) in &self.entries {
            map.serialize_entry(&tooth.get().to_string(), &status.to_string())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ToothStatuses {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(ToothStatuses::from_raw(&raw))
    }
}
