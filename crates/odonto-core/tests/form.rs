use jiff::civil::date;

use odonto_chart::topology::ToothNumber;
use odonto_chart::{ChartError, DeciduousCode, DeftIndex, DmftIndex, StatusCode};
use odonto_core::error::CoreError;
use odonto_core::form::{SubmissionMeta, SurveyForm};
use odonto_core::models::patient::{Gender, Referral};

fn meta() -> SubmissionMeta {
    SubmissionMeta {
        created_by: "examiner-1".to_string(),
        session_id: "posyandu-melati".to_string(),
        created_at: "2026-03-02T03:15:00Z".parse().unwrap(),
    }
}

fn tooth(n: u8) -> ToothNumber {
    ToothNumber::new(n).unwrap()
}

#[test]
fn new_form_has_survey_defaults() {
    let form = SurveyForm::new(date(2026, 3, 2));
    assert_eq!(form.gender, Gender::Male);
    assert_eq!(form.referral, Referral::NotReferred);
    assert!(!form.bleeding_gums);
    assert!(!form.oral_mucosal_lesion);
    assert_eq!(form.age(), None);
    assert_eq!(form.indices().deft.total, 0);
    assert_eq!(form.indices().dmft.total, 0);
}

#[test]
fn tooth_edits_recount_indices() {
    let mut form = SurveyForm::new(date(2026, 3, 2));
    form.set_age(Some(10));
    form.set_tooth(55, "B").unwrap();
    form.set_tooth(16, "3").unwrap();

    assert_eq!(form.indices().deft, DeftIndex::new(1, 0, 0));
    assert_eq!(form.indices().dmft, DmftIndex::new(0, 0, 1));
}

#[test]
fn rejected_edit_leaves_form_unchanged() {
    let mut form = SurveyForm::new(date(2026, 3, 2));
    form.set_tooth(55, "B").unwrap();
    let before = form.teeth().clone();

    assert!(matches!(
        form.set_tooth(55, "1"),
        Err(ChartError::InvalidCode { tooth: 55, .. })
    ));
    assert_eq!(form.set_tooth(90, "0"), Err(ChartError::UnknownTooth(90)));
    assert_eq!(*form.teeth(), before);
    assert_eq!(form.indices().deft.total, 1);
}

#[test]
fn raising_age_reclassifies_before_recount() {
    let mut form = SurveyForm::new(date(2026, 3, 2));
    form.set_age(Some(10));
    form.set_tooth(55, "B").unwrap();

    assert!(form.set_age(Some(16)));
    assert_eq!(
        *form.teeth().get(tooth(55)),
        StatusCode::Deciduous(DeciduousCode::NotApplicable)
    );
    assert_eq!(form.indices().deft.total, 0);

    assert!(!form.set_age(Some(17)));
    assert!(form.set_age(Some(12)));
    assert_eq!(
        *form.teeth().get(tooth(55)),
        StatusCode::Deciduous(DeciduousCode::Healthy)
    );
}

#[test]
fn clearing_age_keeps_teeth() {
    let mut form = SurveyForm::new(date(2026, 3, 2));
    form.set_age(Some(20));
    let adult = form.teeth().clone();

    assert!(!form.set_age(None));
    assert_eq!(*form.teeth(), adult);
    assert_eq!(form.age(), None);
}

#[test]
fn submit_requires_name_and_age() {
    let mut form = SurveyForm::new(date(2026, 3, 2));
    form.set_age(Some(9));
    assert!(matches!(
        form.submit(meta()),
        Err(CoreError::MissingField(field)) if field == "name"
    ));

    let mut form = SurveyForm::new(date(2026, 3, 2));
    form.name = "Siti".to_string();
    assert!(matches!(
        form.submit(meta()),
        Err(CoreError::MissingField(field)) if field == "age"
    ));
    assert_eq!(form.name, "Siti");
}

#[test]
fn submit_snapshots_and_resets() {
    let mut form = SurveyForm::new(date(2026, 3, 1));
    form.name = "  Budi  ".to_string();
    form.set_age(Some(20));
    form.set_tooth(16, "1").unwrap();
    form.bleeding_gums = true;
    form.referral = Referral::Puskesmas;

    let record = form.submit(meta()).unwrap();

    assert_eq!(record.patient.name, "Budi");
    assert_eq!(record.patient.age, 20);
    assert_eq!(record.examination.date, date(2026, 3, 1));
    assert!(record.examination.bleeding_gums);
    assert_eq!(record.examination.referral, Referral::Puskesmas);
    assert_eq!(record.dmft, DmftIndex::new(1, 0, 0));
    assert_eq!(record.deft, DeftIndex::new(0, 0, 0));
    assert_eq!(record.created_by, "examiner-1");
    assert_eq!(record.session_id, "posyandu-melati");
    assert_eq!(
        *record.teeth.get(tooth(55)),
        StatusCode::Deciduous(DeciduousCode::NotApplicable)
    );

    assert!(form.name.is_empty());
    assert_eq!(form.age(), None);
    assert_eq!(form.indices().dmft.total, 0);
    assert!(!form.bleeding_gums);
}
