use crate::errors::Error;

use super::draft::{DraftField, MedicationDraft};

/// Ordered medication drafts. Never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrescriptionForm {
    drafts: Vec<MedicationDraft>,
}

impl Default for PrescriptionForm {
    fn default() -> Self {
        Self {
            drafts: vec![MedicationDraft::default()],
        }
    }
}

impl PrescriptionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drafts(&self) -> &[MedicationDraft] {
        &self.drafts
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.iter().all(MedicationDraft::is_empty)
    }

    /// Append an empty draft and return its index.
    pub fn add_draft(&mut self) -> usize {
        self.drafts.push(MedicationDraft::default());
        self.drafts.len() - 1
    }

    pub fn remove_draft(&mut self, index: usize) -> Result<MedicationDraft, Error> {
        self.validate_index(index)?;
        if self.drafts.len() == 1 {
            return Err(Error::Forbidden {
                action: "remove the last medication entry".to_string(),
            });
        }
        Ok(self.drafts.remove(index))
    }

    pub fn update_draft(
        &mut self,
        index: usize,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<(), Error> {
        self.validate_index(index)?;
        self.drafts[index].set(field, value);
        Ok(())
    }

    /// Drafts with every required field filled in, in form order.
    pub fn valid_drafts(&self) -> Vec<MedicationDraft> {
        self.drafts
            .iter()
            .filter(|draft| draft.is_valid())
            .cloned()
            .collect()
    }

    /// At least one draft is complete enough to send.
    pub fn is_submittable(&self) -> bool {
        self.drafts.iter().any(MedicationDraft::is_valid)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn validate_index(&self, index: usize) -> Result<(), Error> {
        if index >= self.drafts.len() {
            return Err(Error::NotFound {
                entity: format!("medication entry #{}", index + 1),
            });
        }
        Ok(())
    }
}
