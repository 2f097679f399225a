//! Spacecraft identities and instrument generations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrument-suite generation.
///
/// POD and KLM spacecraft carry structurally different onboard calibration
/// electronics: single- vs dual-gain solar channels and different thermal
/// nonlinearity conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    Pod,
    Klm,
}

/// A spacecraft with a coefficient record in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacecraft {
    Noaa14,
    Noaa15,
    Noaa19,
}

impl Spacecraft {
    /// The generation this spacecraft belongs to.
    pub fn generation(&self) -> Generation {
        match self {
            Spacecraft::Noaa14 => Generation::Pod,
            Spacecraft::Noaa15 | Spacecraft::Noaa19 => Generation::Klm,
        }
    }

    /// Resolve a lowercase mission name (e.g. `"noaa19"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "noaa14" => Some(Spacecraft::Noaa14),
            "noaa15" => Some(Spacecraft::Noaa15),
            "noaa19" => Some(Spacecraft::Noaa19),
            _ => None,
        }
    }

    /// Resolve a POD TBM-header spacecraft code.
    pub fn from_pod_code(code: u8) -> Option<Self> {
        match code {
            3 => Some(Spacecraft::Noaa14),
            _ => None,
        }
    }

    /// Resolve a KLM header spacecraft code.
    pub fn from_klm_code(code: u8) -> Option<Self> {
        match code {
            4 => Some(Spacecraft::Noaa15),
            8 => Some(Spacecraft::Noaa19),
            _ => None,
        }
    }

    /// The mission name used in coefficient tables.
    pub fn name(&self) -> &'static str {
        match self {
            Spacecraft::Noaa14 => "noaa14",
            Spacecraft::Noaa15 => "noaa15",
            Spacecraft::Noaa19 => "noaa19",
        }
    }
}

impl fmt::Display for Spacecraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An opaque spacecraft identity as supplied by the ingestion collaborator.
///
/// POD and KLM data streams key their headers differently: POD records
/// carry a TBM spacecraft code, KLM records their own code table, and
/// mission names appear in both. All three resolve to the same coefficient
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpacecraftId {
    /// Mission name, e.g. `"noaa19"`.
    Name(String),
    /// POD-generation header code.
    PodCode(u8),
    /// KLM-generation header code.
    KlmCode(u8),
}

impl SpacecraftId {
    /// Resolve to a known spacecraft, if any.
    pub fn resolve(&self) -> Option<Spacecraft> {
        match self {
            SpacecraftId::Name(name) => Spacecraft::from_name(name),
            SpacecraftId::PodCode(code) => Spacecraft::from_pod_code(*code),
            SpacecraftId::KlmCode(code) => Spacecraft::from_klm_code(*code),
        }
    }
}

impl fmt::Display for SpacecraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpacecraftId::Name(name) => f.write_str(name),
            SpacecraftId::PodCode(code) => write!(f, "pod:{}", code),
            SpacecraftId::KlmCode(code) => write!(f, "klm:{}", code),
        }
    }
}

impl From<&str> for SpacecraftId {
    fn from(name: &str) -> Self {
        SpacecraftId::Name(name.to_string())
    }
}
