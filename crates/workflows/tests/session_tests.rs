mod common;

use std::sync::Arc;

use chrono::{Duration, Utc};
use common::{server_error, FakeApi};
use domain::{DraftField, MedicationDraft};
use serde_json::json;
use workflows::{Ignored, Outcome, Session};

fn fill_first(session: &Session) {
    let values = ["Amoxicillin", "500mg", "2x/day", "2024-01-01", "", ""];
    for (field, value) in DraftField::ALL.into_iter().zip(values) {
        session.update_medication(0, field, value).unwrap();
    }
}

fn patient_api() -> FakeApi {
    FakeApi::new().with_patient(Ok(json!({"_id": "64ab", "name": "Ann Lee"})))
}

#[tokio::test]
async fn blank_search_leaves_state_alone() {
    let api = Arc::new(patient_api());
    let session = Session::new(api.clone());
    session.search("P1").await;
    let before = session.patient();

    let outcome = session.search("  ").await;

    assert_eq!(outcome, Outcome::Ignored(Ignored::BlankIdentifier));
    assert_eq!(session.patient(), before);
    assert_eq!(api.fetch_count(), 1);
}

#[tokio::test]
async fn failed_search_clears_patient_and_sets_error() {
    let api = Arc::new(FakeApi::new().with_patient(Err(server_error("No such patient"))));
    let session = Session::new(api);

    session.search("P9").await;

    assert_eq!(session.patient(), None);
    assert_eq!(session.error().as_deref(), Some("No such patient"));
}

#[tokio::test]
async fn save_without_patient_is_ignored() {
    let api = Arc::new(FakeApi::new());
    let session = Session::new(api.clone());
    fill_first(&session);

    assert_eq!(session.save().await, Outcome::Ignored(Ignored::NoPatient));
    assert!(api.submitted().is_empty());
}

#[tokio::test]
async fn save_uses_looked_up_id_and_raises_banner() {
    let api = Arc::new(patient_api());
    let session = Session::new(api.clone());
    session.search("P1").await;
    fill_first(&session);
    assert!(session.can_save());

    let outcome = session.save().await;

    assert!(matches!(outcome, Outcome::Completed(Ok(_))));
    assert_eq!(api.submitted()[0].patient_id, "P1");
    assert_eq!(
        session.success_message().as_deref(),
        Some("Prescription saved successfully for Ann Lee")
    );
    assert_eq!(session.error(), None);
    assert_eq!(session.drafts(), vec![MedicationDraft::default()]);
    assert!(!session.can_save());

    let later = Utc::now() + Duration::seconds(6);
    assert_eq!(session.success_message_at(later), None);
    assert_eq!(session.success_message(), None);
}

#[tokio::test]
async fn failed_save_keeps_patient_and_drafts() {
    let api = Arc::new(patient_api().with_submit(Err(server_error("Backend down"))));
    let session = Session::new(api);
    session.search("P1").await;
    fill_first(&session);
    let drafts = session.drafts();

    session.save().await;

    assert_eq!(session.error().as_deref(), Some("Backend down"));
    assert_eq!(session.patient().map(|p| p.name), Some("Ann Lee".to_string()));
    assert_eq!(session.drafts(), drafts);
    assert_eq!(session.success_message(), None);
}

#[tokio::test]
async fn reset_clears_everything() {
    let api = Arc::new(patient_api());
    let session = Session::new(api);
    session.search("P1").await;
    fill_first(&session);
    session.add_medication();

    session.reset_patient();

    assert_eq!(session.patient(), None);
    assert_eq!(session.error(), None);
    assert_eq!(session.drafts(), vec![MedicationDraft::default()]);
}

#[tokio::test]
async fn lookup_landing_after_reset_is_dropped() {
    let api = Arc::new(FakeApi::holding().with_patient(Ok(json!({"name": "Late Larry"}))));
    let session = Session::new(api.clone());

    let search = session.search("P7");
    let reset = async {
        api.started().await;
        assert!(session.is_loading());
        session.reset_patient();
        api.release();
    };
    let (outcome, _) = tokio::join!(search, reset);

    assert_eq!(outcome, Outcome::Stale);
    assert_eq!(session.patient(), None);
}

#[tokio::test]
async fn last_medication_cannot_be_removed() {
    let session = Session::new(Arc::new(FakeApi::new()));

    assert!(session.remove_medication(0).is_err());
    session.add_medication();
    assert!(session.remove_medication(1).is_ok());
    assert_eq!(session.drafts().len(), 1);
}
