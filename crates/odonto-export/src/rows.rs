//! Tabular layout of survey records: one row per record, demographic and
//! index columns followed by one column per tooth.

use jiff::civil::Date;

use odonto_chart::topology;
use odonto_chart::StatusCode;
use odonto_core::models::survey::SurveyRecord;

/// Shown for an absent date.
pub const NOT_AVAILABLE: &str = "N/A";

const FIXED_COLUMNS: [&str; 20] = [
    "ID Sesi",
    "Nama",
    "Usia",
    "Jenis Kelamin",
    "Tanggal Lahir",
    "Pekerjaan",
    "Alamat",
    "Tanggal Pemeriksaan",
    "Gusi Berdarah",
    "Lesi Mukosa Oral",
    "def-d",
    "def-e",
    "def-f",
    "def-t (Total)",
    "DMF-D",
    "DMF-M",
    "DMF-F",
    "DMF-T (Total)",
    "Rekomendasi",
    "Rujukan",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    fn count(n: u32) -> Self {
        Cell::Number(f64::from(n))
    }
}

/// Header row.
pub fn columns() -> Vec<String> {
    FIXED_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .chain(topology::all_teeth().iter().map(|t| format!("Gigi {t}")))
        .collect()
}

/// One record as cells, aligned with [`columns`].
pub fn survey_row(record: &SurveyRecord) -> Vec<Cell> {
    let patient = &record.patient;
    let exam = &record.examination;

    let mut row = vec![
        Cell::text(&record.session_id),
        Cell::text(&patient.name),
        Cell::count(patient.age),
        Cell::text(patient.gender.label()),
        Cell::text(format_date(patient.birth_date)),
        Cell::text(&patient.occupation),
        Cell::text(&patient.address),
        Cell::text(format_date(Some(exam.date))),
        Cell::text(yes_no(exam.bleeding_gums)),
        Cell::text(yes_no(exam.oral_mucosal_lesion)),
        Cell::count(record.deft.decayed),
        Cell::count(record.deft.extracted),
        Cell::count(record.deft.filled),
        Cell::count(record.deft.total),
        Cell::count(record.dmft.decayed),
        Cell::count(record.dmft.missing),
        Cell::count(record.dmft.filled),
        Cell::count(record.dmft.total),
        Cell::text(&exam.recommendation),
        Cell::text(exam.referral.label()),
    ];

    row.extend(
        record
            .teeth
            .iter()
            .map(|(_, status)| Cell::Text(tooth_cell(status))),
    );
    row
}

/// `"<code> - <label>"`, e.g. `"1 - Karies"`.
pub fn tooth_cell(status: &StatusCode) -> String {
    format!("{status} - {}", status.label())
}

/// Day/month/year without padding, e.g. `5/1/2026`.
pub fn format_date(date: Option<Date>) -> String {
    match date {
        Some(d) => d.strftime("%-d/%-m/%Y").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Ya" } else { "Tidak" }
}
