use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::Error;

use super::fields;
use super::reminders::{MedicalReminder, MedicationReminder};

/// Field-complete patient view-model.
///
/// Every field is populated whatever spelling the backend used: scalars fall
/// back to [`fields::NOT_AVAILABLE`], sequences to empty.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub id: String,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub blood_type: String,
    pub allergies: Vec<String>,
    pub medical_history: Vec<String>,
    pub current_medications: Vec<CurrentMedication>,
    pub medication_reminders: Vec<MedicationReminder>,
    pub medical_reminders: Vec<MedicalReminder>,
}

/// Current medications arrive either as plain names or as objects.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum CurrentMedication {
    Name(String),
    Summary(MedicationSummary),
}

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct MedicationSummary {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl MedicationSummary {
    pub fn medicine_name(&self) -> Option<&str> {
        self.fields
            .get("medicineName")
            .and_then(Value::as_str)
            .filter(|name| !name.trim().is_empty())
    }
}

impl CurrentMedication {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) if !name.trim().is_empty() => Some(Self::Name(name.clone())),
            Value::Object(fields) => Some(Self::Summary(MedicationSummary {
                fields: fields.clone(),
            })),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Name(name) => name.clone(),
            Self::Summary(summary) => summary
                .medicine_name()
                .map(str::to_string)
                .unwrap_or_else(|| Value::Object(summary.fields.clone()).to_string()),
        }
    }
}

impl PatientRecord {
    /// Coalesce a raw backend payload into the canonical shape.
    ///
    /// `requested_id` stands in for the id when the payload carries none.
    pub fn from_raw(raw: &Value, requested_id: &str) -> Result<Self, Error> {
        let raw = raw.as_object().ok_or_else(|| Error::InvalidPayload {
            expected: "patient record object".to_string(),
        })?;

        Ok(Self {
            id: fields::ID
                .scalar(raw)
                .unwrap_or_else(|| requested_id.to_string()),
            name: fields::NAME.scalar_or_na(raw),
            age: fields::AGE.scalar_or_na(raw),
            gender: fields::GENDER.scalar_or_na(raw),
            phone: fields::PHONE.scalar_or_na(raw),
            email: fields::EMAIL.scalar_or_na(raw),
            address: fields::ADDRESS.scalar_or_na(raw),
            blood_type: fields::BLOOD_TYPE.scalar_or_na(raw),
            allergies: fields::ALLERGIES.text_sequence(raw),
            medical_history: fields::MEDICAL_HISTORY.text_sequence(raw),
            current_medications: fields::CURRENT_MEDICATIONS
                .sequence(raw)
                .iter()
                .filter_map(CurrentMedication::from_value)
                .collect(),
            medication_reminders: fields::MEDICATION_REMINDERS
                .sequence(raw)
                .iter()
                .filter_map(MedicationReminder::from_value)
                .collect(),
            medical_reminders: fields::MEDICAL_REMINDERS
                .sequence(raw)
                .iter()
                .filter_map(MedicalReminder::from_value)
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patients::NOT_AVAILABLE;
    use serde_json::json;

    #[test]
    fn test_alternate_field_names() {
        let raw = json!({"fullName": "Jane Doe", "phoneNumber": "555-1000"});
        let record = PatientRecord::from_raw(&raw, "P100").unwrap();

        assert_eq!(record.id, "P100");
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.phone, "555-1000");
        assert!(record.allergies.is_empty());
        assert!(record.medical_history.is_empty());
    }

    #[test]
    fn test_missing_scalars_are_na() {
        let record = PatientRecord::from_raw(&json!({}), "P1").unwrap();

        for value in [
            &record.name,
            &record.age,
            &record.gender,
            &record.phone,
            &record.email,
            &record.address,
            &record.blood_type,
        ] {
            assert_eq!(value, NOT_AVAILABLE);
        }
        assert!(record.current_medications.is_empty());
        assert!(record.medication_reminders.is_empty());
        assert!(record.medical_reminders.is_empty());
    }

    #[test]
    fn test_serialized_record_has_every_key() {
        let record = PatientRecord::from_raw(&json!({"name": "Sam"}), "P2").unwrap();
        let value = serde_json::to_value(&record).unwrap();
        let keys = value.as_object().unwrap();

        for key in [
            "id",
            "name",
            "age",
            "gender",
            "phone",
            "email",
            "address",
            "bloodType",
            "allergies",
            "medicalHistory",
            "currentMedications",
            "medicationReminders",
            "medicalReminders",
        ] {
            assert!(keys.contains_key(key), "missing {key}");
        }
        assert_eq!(keys["allergies"], json!([]));
    }

    #[test]
    fn test_mongo_style_payload() {
        let raw = json!({
            "_id": "64ab",
            "name": "Ann Lee",
            "age": 42,
            "blood_type": "O+",
            "allergies": ["Penicillin"],
            "medical_history": ["Asthma"],
            "currentMedications": ["Ventolin", {"medicineName": "Lisinopril"}, {"dose": "5mg"}],
            "medicationReminders": [{"medicineName": "Metformin", "times": ["08:00"]}]
        });
        let record = PatientRecord::from_raw(&raw, "P7").unwrap();

        assert_eq!(record.id, "P7");
        assert_eq!(record.age, "42");
        assert_eq!(record.blood_type, "O+");
        assert_eq!(record.allergies, vec!["Penicillin"]);
        assert_eq!(record.medical_history, vec!["Asthma"]);

        let labels: Vec<String> = record.current_medications.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["Ventolin", "Lisinopril", r#"{"dose":"5mg"}"#]);
        assert_eq!(record.medication_reminders[0].title(), "Metformin");
    }

    #[test]
    fn test_backend_id_beats_requested_id() {
        let raw = json!({"id": "P100", "_id": "64ab"});
        let record = PatientRecord::from_raw(&raw, "p100").unwrap();
        assert_eq!(record.id, "P100");
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        let err = PatientRecord::from_raw(&json!(["P1"]), "P1").unwrap_err();
        assert!(matches!(err, Error::InvalidPayload { .. }));
    }
}
