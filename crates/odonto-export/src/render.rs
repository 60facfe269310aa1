use serde::Serialize;
use tera::{Context, Tera};

use odonto_core::models::survey::SurveyRecord;

use crate::error::ExportError;
use crate::rows::{format_date, yes_no};

const DETAIL_TEMPLATE_NAME: &str = "survey_detail";

const DETAIL_TEMPLATE: &str = r#"# {{ name }} ({{ age }} th, {{ gender }})
Tanggal Pemeriksaan: {{ exam_date }}
Rujukan: {{ referral }}

## Detail Kondisi Gigi
{% for t in teeth -%}
- {{ t.tooth }}: {{ t.label }}
{% endfor %}
## Rekomendasi
{{ recommendation }}

## Info Tambahan
- ID Sesi: {{ session_id }}
- Pekerjaan: {{ occupation }}
- Tgl Lahir: {{ birth_date }}
- Alamat: {{ address }}
- Gusi Berdarah: {{ bleeding_gums }}
- Lesi Mukosa Oral: {{ oral_mucosal_lesion }}

def-t: {{ deft_total }}
DMF-T: {{ dmft_total }}
"#;

#[derive(Serialize)]
struct ToothLine {
    tooth: u8,
    label: &'static str,
}

#[derive(Serialize)]
struct DetailView<'a> {
    name: &'a str,
    age: u32,
    gender: &'static str,
    exam_date: String,
    referral: &'static str,
    teeth: Vec<ToothLine>,
    recommendation: &'a str,
    session_id: &'a str,
    occupation: &'a str,
    birth_date: String,
    address: &'a str,
    bleeding_gums: &'static str,
    oral_mucosal_lesion: &'static str,
    deft_total: u32,
    dmft_total: u32,
}

fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "-" } else { s }
}

/// Render the detail view of one survey record.
pub fn render_detail(record: &SurveyRecord) -> Result<String, ExportError> {
    let patient = &record.patient;
    let exam = &record.examination;

    let view = DetailView {
        name: &patient.name,
        age: patient.age,
        gender: patient.gender.label(),
        exam_date: format_date(Some(exam.date)),
        referral: exam.referral.label(),
        teeth: record
            .teeth
            .iter()
            .map(|(tooth, status)| ToothLine {
                tooth: tooth.get(),
                label: status.label(),
            })
            .collect(),
        recommendation: or_dash(&exam.recommendation),
        session_id: or_dash(&record.session_id),
        occupation: or_dash(&patient.occupation),
        birth_date: format_date(patient.birth_date),
        address: or_dash(&patient.address),
        bleeding_gums: yes_no(exam.bleeding_gums),
        oral_mucosal_lesion: yes_no(exam.oral_mucosal_lesion),
        deft_total: record.deft.total,
        dmft_total: record.dmft.total,
    };

    let mut tera = Tera::default();
    tera.add_raw_template(DETAIL_TEMPLATE_NAME, DETAIL_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(&view)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    Ok(tera.render(DETAIL_TEMPLATE_NAME, &context)?)
}
