use std::{fmt, str::FromStr};

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// A medication entry the clinician is still editing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Eq, PartialEq, new)]
#[serde(rename_all = "camelCase")]
pub struct MedicationDraft {
    pub name: String,
    pub dosage: String,
    pub quantity: String,
    pub start_date: String,
    pub end_date: String,
    pub instructions: String,
}

/// Editable draft fields
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DraftField {
    Name,
    Dosage,
    Quantity,
    StartDate,
    EndDate,
    Instructions,
}

impl MedicationDraft {
    /// Name, dosage, quantity and start date must be filled in.
    pub fn is_valid(&self) -> bool {
        [&self.name, &self.dosage, &self.quantity, &self.start_date]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Dosage => &self.dosage,
            DraftField::Quantity => &self.quantity,
            DraftField::StartDate => &self.start_date,
            DraftField::EndDate => &self.end_date,
            DraftField::Instructions => &self.instructions,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Dosage => &mut self.dosage,
            DraftField::Quantity => &mut self.quantity,
            DraftField::StartDate => &mut self.start_date,
            DraftField::EndDate => &mut self.end_date,
            DraftField::Instructions => &mut self.instructions,
        };
        *slot = value.into();
    }
}

impl DraftField {
    pub const ALL: [DraftField; 6] = [
        DraftField::Name,
        DraftField::Dosage,
        DraftField::Quantity,
        DraftField::StartDate,
        DraftField::EndDate,
        DraftField::Instructions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Dosage => "dosage",
            DraftField::Quantity => "quantity",
            DraftField::StartDate => "startDate",
            DraftField::EndDate => "endDate",
            DraftField::Instructions => "instructions",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, DraftField::EndDate | DraftField::Instructions)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(DraftField::Name),
            "dosage" => Ok(DraftField::Dosage),
            "quantity" => Ok(DraftField::Quantity),
            "startDate" | "start_date" | "start" => Ok(DraftField::StartDate),
            "endDate" | "end_date" | "end" => Ok(DraftField::EndDate),
            "instructions" => Ok(DraftField::Instructions),
            other => Err(Error::Validation {
                message: format!("unknown medication field '{}'", other),
            }),
        }
    }
}
