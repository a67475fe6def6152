use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::display::display_value;

const MEDICATION_REMINDER_FIELDS: &[&str] = &[
    "medicineName",
    "dosage",
    "quantity",
    "times",
    "durationDays",
    "startDate",
    "endDate",
    "instructions",
    "frequency",
    "prescribedBy",
    "createdAt",
];

const MEDICAL_REMINDER_FIELDS: &[&str] =
    &["title", "type", "date", "time", "location", "status", "notes"];

/// Storage bookkeeping keys that never reach the view.
const MEDICATION_REMINDER_HIDDEN: &[&str] = &["_id", "id", "updatedAt", "__v"];
const MEDICAL_REMINDER_HIDDEN: &[&str] = &["_id", "id", "createdAt", "updatedAt", "__v"];

/// A medication schedule previously prescribed to the patient.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationReminder {
    pub medicine_name: Option<String>,
    pub dosage: Option<String>,
    pub quantity: Option<String>,
    pub times: Vec<String>,
    pub duration_days: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub instructions: Option<String>,
    pub frequency: Option<String>,
    pub prescribed_by: Option<String>,
    pub created_at: Option<String>,
    /// Keys the backend sent beyond the known set.
    pub additional: BTreeMap<String, String>,
}

impl MedicationReminder {
    /// Build from a backend object. Non-objects are skipped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let raw = value.as_object()?;
        Some(Self {
            medicine_name: text(raw, "medicineName"),
            dosage: text(raw, "dosage"),
            quantity: text(raw, "quantity"),
            times: raw
                .get("times")
                .and_then(Value::as_array)
                .map(|times| times.iter().filter_map(display_value).collect())
                .unwrap_or_default(),
            duration_days: text(raw, "durationDays"),
            start_date: text(raw, "startDate"),
            end_date: text(raw, "endDate"),
            instructions: text(raw, "instructions"),
            frequency: text(raw, "frequency"),
            prescribed_by: text(raw, "prescribedBy"),
            created_at: text(raw, "createdAt"),
            additional: additional(raw, MEDICATION_REMINDER_FIELDS, MEDICATION_REMINDER_HIDDEN),
        })
    }

    pub fn title(&self) -> &str {
        self.medicine_name.as_deref().unwrap_or("Medication Reminder")
    }
}

/// A non-medication reminder (appointment, test, follow-up).
#[derive(Clone, Debug, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalReminder {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub additional: BTreeMap<String, String>,
}

impl MedicalReminder {
    pub fn from_value(value: &Value) -> Option<Self> {
        let raw = value.as_object()?;
        Some(Self {
            title: text(raw, "title"),
            kind: text(raw, "type"),
            date: text(raw, "date"),
            time: text(raw, "time"),
            location: text(raw, "location"),
            status: text(raw, "status"),
            notes: text(raw, "notes"),
            additional: additional(raw, MEDICAL_REMINDER_FIELDS, MEDICAL_REMINDER_HIDDEN),
        })
    }

    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.kind.as_deref())
            .unwrap_or("Medical Reminder")
    }
}

fn text(raw: &Map<String, Value>, key: &str) -> Option<String> {
    raw.get(key).and_then(display_value)
}

fn additional(
    raw: &Map<String, Value>,
    known: &[&str],
    hidden: &[&str],
) -> BTreeMap<String, String> {
    raw.iter()
        .filter(|(key, _)| !known.contains(&key.as_str()) && !hidden.contains(&key.as_str()))
        .filter_map(|(key, value)| display_value(value).map(|text| (key.clone(), text)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_medication_reminder_known_fields() {
        let reminder = MedicationReminder::from_value(&json!({
            "_id": "65f0",
            "medicineName": "Metformin",
            "dosage": "500mg",
            "times": ["08:00", "20:00"],
            "durationDays": 30,
            "prescribedBy": {"name": "Dr. Grey"},
            "__v": 0
        }))
        .unwrap();

        assert_eq!(reminder.title(), "Metformin");
        assert_eq!(reminder.times, vec!["08:00", "20:00"]);
        assert_eq!(reminder.duration_days.as_deref(), Some("30"));
        assert_eq!(reminder.prescribed_by.as_deref(), Some(r#"{"name":"Dr. Grey"}"#));
        assert!(reminder.additional.is_empty());
    }

    #[test]
    fn test_medication_reminder_keeps_unknown_keys() {
        let reminder = MedicationReminder::from_value(&json!({
            "refills": 2,
            "pharmacy": "Main St",
            "taken": false
        }))
        .unwrap();

        assert_eq!(reminder.title(), "Medication Reminder");
        assert_eq!(reminder.additional.len(), 2);
        assert_eq!(reminder.additional["refills"], "2");
        assert_eq!(reminder.additional["pharmacy"], "Main St");
    }

    #[test]
    fn test_medical_reminder_title_fallbacks() {
        let with_type = MedicalReminder::from_value(&json!({"type": "Lab test"})).unwrap();
        assert_eq!(with_type.title(), "Lab test");

        let bare = MedicalReminder::from_value(&json!({"createdAt": "2024-01-01"})).unwrap();
        assert_eq!(bare.title(), "Medical Reminder");
        assert!(bare.additional.is_empty());
    }

    #[test]
    fn test_non_object_is_skipped() {
        assert!(MedicationReminder::from_value(&json!("Metformin")).is_none());
        assert!(MedicalReminder::from_value(&json!(null)).is_none());
    }
}
