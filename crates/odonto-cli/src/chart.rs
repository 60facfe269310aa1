//! Plain-text odontogram and catalog rendering.

use std::fmt::Write;

use odonto_chart::catalog;
use odonto_chart::topology::{self, Dentition, ToothNumber};
use odonto_chart::{StatusCode, SurveyIndices, ToothStatuses};

const CELL_WIDTH: usize = 6;

fn cell(statuses: &ToothStatuses, number: u8) -> String {
    let code = ToothNumber::new(number)
        .map(|t| statuses.get(t).to_string())
        .unwrap_or_default();
    let code = if code.is_empty() { "?".to_string() } else { code };
    format!("{:<width$}", format!("{number}:{code}"), width = CELL_WIDTH)
}

fn row(statuses: &ToothStatuses, right: &[u8], left: &[u8], indent: usize) -> String {
    let pad = " ".repeat(indent * CELL_WIDTH);
    let right: String = right.iter().map(|&n| cell(statuses, n)).collect();
    let left: String = left.iter().map(|&n| cell(statuses, n)).collect();
    format!("{pad}{right}| {left}").trim_end().to_string()
}

/// Upper jaw (deciduous above permanent), then lower jaw (permanent above
/// deciduous); patient's right on the left of each line.
pub fn render_odontogram(statuses: &ToothStatuses) -> String {
    let [upper_right, upper_left, lower_left, lower_right] = topology::quadrants();
    let width = 16 * CELL_WIDTH + 2;

    let mut out = String::new();
    let _ = writeln!(out, "Rahang Atas");
    let _ = writeln!(
        out,
        "{}",
        row(statuses, &upper_right.deciduous, &upper_left.deciduous, 3)
    );
    let _ = writeln!(
        out,
        "{}",
        row(statuses, &upper_right.permanent, &upper_left.permanent, 0)
    );
    let _ = writeln!(out, "{}", "-".repeat(width));
    let _ = writeln!(
        out,
        "{}",
        row(statuses, &lower_right.permanent, &lower_left.permanent, 0)
    );
    let _ = writeln!(
        out,
        "{}",
        row(statuses, &lower_right.deciduous, &lower_left.deciduous, 3)
    );
    let _ = writeln!(out, "Rahang Bawah");
    out
}

/// Teeth that are not at their healthy (or not-applicable) code, with labels.
pub fn render_findings(statuses: &ToothStatuses) -> String {
    let mut out = String::new();
    for (tooth, status) in statuses.iter() {
        let unremarkable = *status == StatusCode::healthy(tooth.dentition())
            || *status == StatusCode::Deciduous(odonto_chart::DeciduousCode::NotApplicable);
        if !unremarkable {
            let _ = writeln!(out, "  {tooth}: {status} - {}", status.label());
        }
    }
    out
}

pub fn render_indices(indices: &SurveyIndices) -> String {
    let deft = indices.deft;
    let dmft = indices.dmft;
    format!(
        "def-t: d={} e={} f={} total={}\nDMF-T: D={} M={} F={} total={}\n",
        deft.decayed,
        deft.extracted,
        deft.filled,
        deft.total,
        dmft.decayed,
        dmft.missing,
        dmft.filled,
        dmft.total,
    )
}

/// Both condition alphabets.
pub fn render_catalog() -> String {
    let mut out = String::new();
    for (title, dentition) in [
        ("Gigi Tetap", Dentition::Permanent),
        ("Gigi Sulung", Dentition::Deciduous),
    ] {
        let _ = writeln!(out, "{title}");
        for condition in catalog::conditions(dentition) {
            let _ = writeln!(
                out,
                "  {}  {:<24}{}",
                condition.code,
                condition.label,
                condition.category.color()
            );
        }
    }
    out
}
