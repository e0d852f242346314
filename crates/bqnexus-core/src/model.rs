//! Core data model types for bqnexus.
//!
//! These are the record types the question bank is made of. Every enum
//! serializes to the value used in `questoes.json`. Cycle and modality parse
//! leniently (case, accents, and English aliases are accepted); status
//! values must match the bank exactly.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Academic phase a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Cycle {
    #[default]
    Basic,
    Clinical,
    Internship,
}

impl Cycle {
    pub const ALL: [Cycle; 3] = [Cycle::Basic, Cycle::Clinical, Cycle::Internship];

    /// Value as it appears in the question bank.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cycle::Basic => "Ciclo Básico",
            Cycle::Clinical => "Ciclo Clínico",
            Cycle::Internship => "Internato",
        }
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = fold(s);
        let key = folded.strip_prefix("ciclo ").unwrap_or(folded.as_str()).trim();
        match key {
            "basico" | "basic" => Ok(Cycle::Basic),
            "clinico" | "clinical" => Ok(Cycle::Clinical),
            "internato" | "internship" => Ok(Cycle::Internship),
            _ => Err(format!("unknown cycle: {s}")),
        }
    }
}

/// Pedagogical track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Modality {
    #[default]
    Pbl,
    Traditional,
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Pbl => "PBL",
            Modality::Traditional => "Tradicional",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold(s).as_str() {
            "pbl" => Ok(Modality::Pbl),
            "tradicional" | "traditional" => Ok(Modality::Traditional),
            _ => Err(format!("unknown modality: {s}")),
        }
    }
}

/// Per-question answer state.
///
/// Only "not answered" and "error" are meaningful to the filter; every other
/// value in the source data is treated as answered. Matching is exact apart
/// from surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    Unanswered,
    Error,
    Answered,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Unanswered => "Nao Respondida",
            Status::Error => "Erro",
            Status::Answered => "Respondida",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s.trim() {
            "Nao Respondida" | "Não Respondida" => Status::Unanswered,
            "Erro" => Status::Error,
            _ => Status::Answered,
        }
    }
}

macro_rules! wire_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

wire_serde!(Cycle);
wire_serde!(Modality);
wire_serde!(Status);

impl<'de> Deserialize<'de> for Cycle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Modality {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Status::from(raw.as_str()))
    }
}

/// A single question record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Explicit identifier, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "ciclo")]
    pub cycle: Cycle,
    /// Free-text module label with an embedded ordinal (e.g. "Módulo 3").
    #[serde(rename = "modulo")]
    pub module: String,
    #[serde(rename = "modalidade")]
    pub modality: Modality,
    pub status: Status,
}

/// Sort key of a module label: its first run of digits, or 0 if it has none.
///
/// Runs too long for a `u64` saturate instead of failing.
pub fn module_ordinal(label: &str) -> u64 {
    let digits: String = label
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

/// Lowercase, trim, and strip the Portuguese diacritics that show up in the data.
fn fold(s: &str) -> String {
    s.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}
