use std::fmt;

use domain::{
    patients::{format_date, format_timestamp, MedicalReminder, MedicationReminder},
    DraftField, MedicationDraft, PatientRecord,
};

/// Patient details as shown after a lookup.
pub struct PatientCard<'a>(&'a PatientRecord);

/// The prescription form, one block per draft.
pub struct DraftList<'a>(&'a [MedicationDraft]);

pub fn patient_card(patient: &PatientRecord) -> PatientCard<'_> {
    PatientCard(patient)
}

pub fn drafts(drafts: &[MedicationDraft]) -> DraftList<'_> {
    DraftList(drafts)
}

impl fmt::Display for PatientCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patient = self.0;
        writeln!(f, "Patient Information")?;
        writeln!(f, "  Full Name:    {}", patient.name)?;
        writeln!(f, "  Patient ID:   {}", patient.id)?;
        writeln!(f, "  Phone:        {}", patient.phone)?;
        writeln!(f, "  Email:        {}", patient.email)?;
        writeln!(f, "  Address:      {}", patient.address)?;
        writeln!(f, "  Age & Gender: {} years, {}", patient.age, patient.gender)?;
        writeln!(f, "  Blood Type:   {}", patient.blood_type)?;
        writeln!(f, "  Allergies:    {}", list(&patient.allergies))?;
        writeln!(f, "  History:      {}", list(&patient.medical_history))?;

        if !patient.current_medications.is_empty() {
            let labels: Vec<String> = patient
                .current_medications
                .iter()
                .map(|m| m.label())
                .collect();
            writeln!(f, "  Current:      {}", list(&labels))?;
        }

        if !patient.medication_reminders.is_empty() {
            writeln!(f, "Past Medications")?;
            for reminder in &patient.medication_reminders {
                medication_reminder(f, reminder)?;
            }
        }

        if !patient.medical_reminders.is_empty() {
            writeln!(f, "Medical Reminders")?;
            for reminder in &patient.medical_reminders {
                medical_reminder(f, reminder)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for DraftList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, draft) in self.0.iter().enumerate() {
            let status = if draft.is_valid() { "ready" } else { "incomplete" };
            writeln!(f, "Medication #{} ({})", i + 1, status)?;
            for field in DraftField::ALL {
                let marker = if field.is_required() { "*" } else { " " };
                writeln!(f, "  {}{:<13} {}", marker, field.as_str(), draft.get(field))?;
            }
        }
        Ok(())
    }
}

fn list(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

fn line(f: &mut fmt::Formatter<'_>, label: &str, value: Option<String>) -> fmt::Result {
    match value {
        Some(value) => writeln!(f, "    {}: {}", label, value),
        None => Ok(()),
    }
}

fn medication_reminder(f: &mut fmt::Formatter<'_>, reminder: &MedicationReminder) -> fmt::Result {
    writeln!(f, "  - {}", reminder.title())?;
    line(f, "Dosage", reminder.dosage.clone())?;
    line(f, "Quantity", reminder.quantity.clone())?;
    if !reminder.times.is_empty() {
        line(f, "Times", Some(reminder.times.join(", ")))?;
    }
    line(f, "Duration (days)", reminder.duration_days.clone())?;
    line(f, "Start Date", reminder.start_date.as_deref().map(format_date))?;
    line(f, "End Date", reminder.end_date.as_deref().map(format_date))?;
    line(f, "Instructions", reminder.instructions.clone())?;
    line(f, "Frequency", reminder.frequency.clone())?;
    line(f, "Prescribed By", reminder.prescribed_by.clone())?;
    line(f, "Created At", reminder.created_at.as_deref().map(format_timestamp))?;
    for (key, value) in &reminder.additional {
        line(f, key, Some(value.clone()))?;
    }
    Ok(())
}

fn medical_reminder(f: &mut fmt::Formatter<'_>, reminder: &MedicalReminder) -> fmt::Result {
    writeln!(f, "  - {}", reminder.title())?;
    line(f, "Date", reminder.date.as_deref().map(format_timestamp))?;
    line(f, "Time", reminder.time.clone())?;
    line(f, "Location", reminder.location.clone())?;
    line(f, "Status", reminder.status.clone())?;
    line(f, "Notes", reminder.notes.clone())?;
    for (key, value) in &reminder.additional {
        line(f, key, Some(value.clone()))?;
    }
    Ok(())
}
