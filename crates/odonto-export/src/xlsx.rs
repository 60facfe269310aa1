use jiff::civil::Date;
use rust_xlsxwriter::{Format, Workbook};

use odonto_core::models::survey::SurveyRecord;

use crate::error::ExportError;
use crate::rows::{self, Cell};

pub const SHEET_NAME: &str = "Data Survei Gigi";

/// `DataSurveiGigi_<yyyy-mm-dd>.xlsx`
pub fn export_file_name(date: Date) -> String {
    format!("DataSurveiGigi_{date}.xlsx")
}

/// Build an XLSX workbook with a header row and one row per record.
pub fn write_workbook(records: &[SurveyRecord]) -> Result<Vec<u8>, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoRecords);
    }

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in rows::columns().iter().enumerate() {
        sheet.write_string_with_format(0, col_index(col), title, &header)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = u32::try_from(i + 1).unwrap_or(u32::MAX);
        for (col, cell) in rows::survey_row(record).into_iter().enumerate() {
            match cell {
                Cell::Text(text) => sheet.write_string(row, col_index(col), text)?,
                Cell::Number(n) => sheet.write_number(row, col_index(col), n)?,
            };
        }
    }

    sheet.autofit();
    let bytes = workbook.save_to_buffer()?;
    tracing::info!(records = records.len(), bytes = bytes.len(), "survey workbook built");
    Ok(bytes)
}

fn col_index(col: usize) -> u16 {
    u16::try_from(col).unwrap_or(u16::MAX)
}
