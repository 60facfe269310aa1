use jiff::civil::date;
use uuid::Uuid;

use odonto_chart::{compute_indices, initial_statuses, reclassify, set_status};
use odonto_core::models::patient::{Examination, Gender, Patient, Referral};
use odonto_core::models::survey::SurveyRecord;
use odonto_export::error::ExportError;
use odonto_export::render::render_detail;
use odonto_export::rows::{Cell, columns, format_date, survey_row, tooth_cell};
use odonto_export::xlsx::{export_file_name, write_workbook};

fn record() -> SurveyRecord {
    let teeth = set_status(&initial_statuses(), 55, "B").unwrap();
    let teeth = set_status(&teeth, 16, "1").unwrap();
    let teeth = reclassify(&teeth, 9).into_owned();
    let indices = compute_indices(&teeth);
    SurveyRecord {
        id: Uuid::new_v4(),
        patient: Patient {
            name: "Siti".to_string(),
            age: 9,
            gender: Gender::Female,
            birth_date: Some(date(2017, 1, 5)),
            occupation: "Pelajar".to_string(),
            address: String::new(),
        },
        examination: Examination {
            date: date(2026, 3, 2),
            bleeding_gums: true,
            oral_mucosal_lesion: false,
            recommendation: String::new(),
            referral: Referral::Puskesmas,
        },
        teeth,
        deft: indices.deft,
        dmft: indices.dmft,
        created_at: "2026-03-02T03:15:00Z".parse().unwrap(),
        created_by: "examiner-1".to_string(),
        session_id: "sesi-a".to_string(),
    }
}

fn column_of(name: &str) -> usize {
    columns().iter().position(|c| c == name).unwrap()
}

#[test]
fn header_has_fixed_columns_then_every_tooth() {
    let cols = columns();
    assert_eq!(cols.len(), 20 + 52);
    assert_eq!(cols[0], "ID Sesi");
    assert_eq!(cols[19], "Rujukan");
    assert_eq!(cols[20], "Gigi 11");
    assert_eq!(cols.last().map(String::as_str), Some("Gigi 85"));
}

#[test]
fn row_matches_header_and_formats_values() {
    let record = record();
    let row = survey_row(&record);
    assert_eq!(row.len(), columns().len());

    assert_eq!(row[column_of("Nama")], Cell::Text("Siti".to_string()));
    assert_eq!(row[column_of("Usia")], Cell::Number(9.0));
    assert_eq!(row[column_of("Jenis Kelamin")], Cell::Text("Perempuan".to_string()));
    assert_eq!(row[column_of("Tanggal Lahir")], Cell::Text("5/1/2017".to_string()));
    assert_eq!(row[column_of("Gusi Berdarah")], Cell::Text("Ya".to_string()));
    assert_eq!(row[column_of("Lesi Mukosa Oral")], Cell::Text("Tidak".to_string()));
    assert_eq!(row[column_of("def-d")], Cell::Number(1.0));
    assert_eq!(row[column_of("DMF-T (Total)")], Cell::Number(1.0));
    assert_eq!(row[column_of("Rujukan")], Cell::Text("Puskesmas".to_string()));
    assert_eq!(row[column_of("Gigi 16")], Cell::Text("1 - Karies".to_string()));
    assert_eq!(row[column_of("Gigi 55")], Cell::Text("B - Karies".to_string()));
    assert_eq!(row[column_of("Gigi 51")], Cell::Text("A - Sehat".to_string()));
}

#[test]
fn unknown_codes_and_missing_dates_render_unavailable() {
    let status = odonto_chart::StatusCode::Unknown("Z".to_string());
    assert_eq!(tooth_cell(&status), "Z - N/A");
    assert_eq!(format_date(None), "N/A");
}

#[test]
fn workbook_is_a_zip_container() {
    let bytes = write_workbook(&[record(), record()]).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn empty_export_is_refused() {
    assert!(matches!(write_workbook(&[]), Err(ExportError::NoRecords)));
}

#[test]
fn export_file_name_carries_the_date() {
    assert_eq!(
        export_file_name(date(2026, 10, 16)),
        "DataSurveiGigi_2026-10-16.xlsx"
    );
}

#[test]
fn detail_view_lists_conditions_and_blanks_as_dashes() {
    let text = render_detail(&record()).unwrap();

    assert!(text.starts_with("# Siti (9 th, Perempuan)"));
    assert!(text.contains("- 16: Karies"));
    assert!(text.contains("- 55: Karies"));
    assert!(text.contains("- Alamat: -"));
    assert!(text.contains("- ID Sesi: sesi-a"));
    assert!(text.contains("- Tgl Lahir: 5/1/2017"));
    assert!(text.contains("def-t: 1"));
    assert!(text.contains("DMF-T: 1"));

    let recommendation = text.split("## Rekomendasi\n").nth(1).unwrap();
    assert!(recommendation.starts_with("-\n"));
}
