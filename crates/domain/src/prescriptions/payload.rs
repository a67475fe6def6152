use serde::{Deserialize, Serialize};

use super::draft::MedicationDraft;

/// Body of `POST /add_medication_reminder`.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub patient_id: String,
    pub medications: Vec<MedicationItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationItem {
    pub medicine_name: String,
    pub dosage: String,
    pub quantity: String,
    pub start_date: String,
    /// Serialized as `null` when the draft left it blank.
    pub end_date: Option<String>,
    pub instructions: String,
    /// The form has no separate frequency input; the backend receives the
    /// quantity text here.
    pub frequency: String,
}

impl From<&MedicationDraft> for MedicationItem {
    fn from(draft: &MedicationDraft) -> Self {
        let end_date = Some(draft.end_date.trim())
            .filter(|date| !date.is_empty())
            .map(str::to_string);

        Self {
            medicine_name: draft.name.clone(),
            dosage: draft.dosage.clone(),
            quantity: draft.quantity.clone(),
            start_date: draft.start_date.clone(),
            end_date,
            instructions: draft.instructions.clone(),
            frequency: draft.quantity.clone(),
        }
    }
}

impl SubmissionPayload {
    /// Map the valid drafts for `patient_id`. `None` when none is valid.
    pub fn from_drafts(patient_id: &str, drafts: &[MedicationDraft]) -> Option<Self> {
        let medications: Vec<MedicationItem> = drafts
            .iter()
            .filter(|draft| draft.is_valid())
            .map(MedicationItem::from)
            .collect();

        if medications.is_empty() {
            return None;
        }

        Some(Self {
            patient_id: patient_id.to_string(),
            medications,
        })
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::prescriptions::DraftField;
    use proptest::prelude::*;

    const REQUIRED: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Dosage,
        DraftField::Quantity,
        DraftField::StartDate,
    ];

    /// A filled-in draft, plus which required field (if any) to blank out.
    fn draft_strategy() -> impl Strategy<Value = (MedicationDraft, Option<usize>)> {
        (
            "[A-Za-z]{1,10}",
            "[0-9]{1,3}mg",
            "[0-9]x/day",
            "2024-0[1-9]-1[0-9]",
            prop_oneof![Just(String::new()), "2024-1[0-2]-01"],
            "[a-z ]{0,12}",
            proptest::option::of(0..REQUIRED.len()),
        )
            .prop_map(|(name, dosage, quantity, start, end, instructions, blank)| {
                let mut draft =
                    MedicationDraft::new(name, dosage, quantity, start, end, instructions);
                if let Some(index) = blank {
                    draft.set(REQUIRED[index], "  ");
                }
                (draft, blank)
            })
    }

    proptest! {
        #[test]
        fn only_valid_drafts_are_sent_in_order(
            generated in proptest::collection::vec(draft_strategy(), 0..8),
        ) {
            let drafts: Vec<MedicationDraft> =
                generated.iter().map(|(draft, _)| draft.clone()).collect();
            let expected: Vec<MedicationItem> = generated
                .iter()
                .filter(|(_, blank)| blank.is_none())
                .map(|(draft, _)| MedicationItem::from(draft))
                .collect();

            match SubmissionPayload::from_drafts("P100", &drafts) {
                Some(payload) => {
                    prop_assert_eq!(payload.patient_id, "P100");
                    prop_assert_eq!(payload.medications, expected);
                }
                None => prop_assert!(expected.is_empty()),
            }
        }

        #[test]
        fn no_valid_drafts_means_no_payload(
            generated in proptest::collection::vec(draft_strategy(), 0..8),
        ) {
            let drafts: Vec<MedicationDraft> = generated
                .into_iter()
                .map(|(mut draft, blank)| {
                    draft.set(REQUIRED[blank.unwrap_or(0)], "");
                    draft
                })
                .collect();

            prop_assert!(SubmissionPayload::from_drafts("P100", &drafts).is_none());
        }
    }
}
