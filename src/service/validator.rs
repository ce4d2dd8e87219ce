use chrono::NaiveDate;

use crate::domain::{
    Gender, InscriptionType, RawRow, RowError, RowRule, StagedItem, BIRTH_DATE_FORMAT,
};

/// Validates one uploaded batch row against event-scoped reference data.
///
/// Leaf dependency of the staging engine: pure and synchronous, so a whole
/// batch can be checked without touching any store.
pub struct RowValidator<'a> {
    types: &'a [InscriptionType],
}

impl<'a> RowValidator<'a> {
    pub fn new(types: &'a [InscriptionType]) -> Self {
        Self { types }
    }

    /// Validate and normalize a single row into a staged item.
    ///
    /// Checks, in order: the name carries at least two tokens; the birth
    /// date parses in the fixed format and is a real calendar date; the
    /// gender belongs to the closed set; the type label resolves
    /// (case-insensitively, trimmed) to a type registered for the event.
    pub fn validate(&self, row: &RawRow) -> Result<StagedItem, RowError> {
        let name = row.name.trim();
        if name.split_whitespace().count() < 2 {
            return Err(RowError {
                line: row.line,
                reason: RowRule::IncompleteName,
            });
        }

        let birth_date = NaiveDate::parse_from_str(row.birth_date.trim(), BIRTH_DATE_FORMAT)
            .map_err(|_| RowError {
                line: row.line,
                reason: RowRule::InvalidBirthDate(row.birth_date.clone()),
            })?;

        let gender = Gender::parse(&row.gender).ok_or_else(|| RowError {
            line: row.line,
            reason: RowRule::InvalidGender(row.gender.clone()),
        })?;

        let wanted = row.inscription_type.trim();
        let inscription_type = self
            .types
            .iter()
            .find(|t| t.description.trim().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RowError {
                line: row.line,
                reason: RowRule::UnknownInscriptionType(row.inscription_type.clone()),
            })?;

        Ok(StagedItem {
            name: name.to_string(),
            birth_date,
            gender,
            inscription_type_id: inscription_type.id,
            inscription_type_label: inscription_type.description.clone(),
            unit_value: inscription_type.unit_value,
        })
    }
}
