use serde::{Deserialize, Serialize};

/// Fixed textual format batch birth dates must parse in (day-first).
pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

/// CSV row structure (flat deserialization)
#[derive(Debug, Clone, Deserialize)]
pub struct CsvParticipantRow {
    pub name: String,
    pub birth_date: String,
    pub gender: String,
    pub inscription_type: String,
}

/// One raw batch row as handed to the staging engine, carrying the source
/// line number it came from for error reporting.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub line: u32,
    pub name: String,
    pub birth_date: String,
    pub gender: String,
    pub inscription_type: String,
}

impl RawRow {
    pub fn from_csv(line: u32, row: CsvParticipantRow) -> Self {
        Self {
            line,
            name: row.name,
            birth_date: row.birth_date,
            gender: row.gender,
            inscription_type: row.inscription_type,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    /// Parse the closed gender set, accepting full words or single letters,
    /// case-insensitively.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "f" | "female" => Some(Gender::Female),
            "m" | "male" => Some(Gender::Male),
            "o" | "other" => Some(Gender::Other),
            _ => None,
        }
    }
}
