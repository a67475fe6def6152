//! Backend field-name synonyms.
//!
//! The patient service has shipped several spellings for the same concept over
//! time. Each canonical field lists the keys it accepts, tried in order; the
//! first usable one wins.

use serde_json::{Map, Value};

use super::display::display_value;

/// Placeholder for a scalar the backend did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldSynonyms {
    pub canonical: &'static str,
    pub keys: &'static [&'static str],
}

/// Only the backend `id`; callers fall back to the identifier looked up.
pub const ID: FieldSynonyms = FieldSynonyms {
    canonical: "id",
    keys: &["id"],
};
pub const NAME: FieldSynonyms = FieldSynonyms {
    canonical: "name",
    keys: &["name", "fullName"],
};
pub const AGE: FieldSynonyms = FieldSynonyms {
    canonical: "age",
    keys: &["age"],
};
pub const GENDER: FieldSynonyms = FieldSynonyms {
    canonical: "gender",
    keys: &["gender"],
};
pub const PHONE: FieldSynonyms = FieldSynonyms {
    canonical: "phone",
    keys: &["phone", "phoneNumber"],
};
pub const EMAIL: FieldSynonyms = FieldSynonyms {
    canonical: "email",
    keys: &["email"],
};
pub const ADDRESS: FieldSynonyms = FieldSynonyms {
    canonical: "address",
    keys: &["address"],
};
pub const BLOOD_TYPE: FieldSynonyms = FieldSynonyms {
    canonical: "bloodType",
    keys: &["bloodType", "blood_type"],
};

pub const ALLERGIES: FieldSynonyms = FieldSynonyms {
    canonical: "allergies",
    keys: &["allergies"],
};
pub const MEDICAL_HISTORY: FieldSynonyms = FieldSynonyms {
    canonical: "medicalHistory",
    keys: &["medicalHistory", "medical_history"],
};
pub const CURRENT_MEDICATIONS: FieldSynonyms = FieldSynonyms {
    canonical: "currentMedications",
    keys: &["currentMedications", "current_medications"],
};
pub const MEDICATION_REMINDERS: FieldSynonyms = FieldSynonyms {
    canonical: "medicationReminders",
    keys: &["medicationReminders", "medication_reminders"],
};
pub const MEDICAL_REMINDERS: FieldSynonyms = FieldSynonyms {
    canonical: "medicalReminders",
    keys: &["medicalReminders", "medical_reminders"],
};

impl FieldSynonyms {
    /// First displayable value among the synonyms.
    pub fn scalar(&self, raw: &Map<String, Value>) -> Option<String> {
        self.keys
            .iter()
            .find_map(|key| raw.get(*key).and_then(display_value))
    }

    /// Like [`Self::scalar`], falling back to [`NOT_AVAILABLE`].
    pub fn scalar_or_na(&self, raw: &Map<String, Value>) -> String {
        self.scalar(raw).unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// First synonym holding an array; empty when none does.
    pub fn sequence<'a>(&self, raw: &'a Map<String, Value>) -> &'a [Value] {
        self.keys
            .iter()
            .find_map(|key| raw.get(*key).and_then(Value::as_array))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Displayable items of [`Self::sequence`].
    pub fn text_sequence(&self, raw: &Map<String, Value>) -> Vec<String> {
        self.sequence(raw).iter().filter_map(display_value).collect()
    }
}
