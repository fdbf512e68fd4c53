//! xlsx workbook reading

use std::path::Path;

use umya_spreadsheet::reader::xlsx;
use umya_spreadsheet::{Spreadsheet, Worksheet};

use super::table::{CellValue, SheetTable};
use super::{LoadError, SheetRef};

/// The only workbook extension the loader accepts.
const WORKBOOK_EXTENSION: &str = "xlsx";

/// Returns the ordered list of sheet names in a workbook.
///
/// # Errors
///
/// Returns [`LoadError::InvalidPath`] when the path fails the up-front
/// checks, or [`LoadError::Workbook`] when the file cannot be parsed.
pub fn sheet_names(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let book = open_workbook(path)?;
    let names: Vec<String> = book
        .get_sheet_collection()
        .iter()
        .map(|sheet| sheet.get_name().to_string())
        .collect();
    tracing::debug!(path = ?path, count = names.len(), "listed workbook sheets");
    Ok(names)
}

/// Loads one worksheet into a [`SheetTable`].
///
/// The first row supplies the column names; the remaining rows become typed
/// data rows. Pass [`SheetRef::default()`] for the first sheet.
///
/// # Errors
///
/// Returns [`LoadError::InvalidPath`] when the path fails the up-front
/// checks, [`LoadError::Workbook`] when the file cannot be parsed, or
/// [`LoadError::SheetNotFound`] when the selector matches no sheet.
pub fn load_table(path: impl AsRef<Path>, sheet: impl Into<SheetRef>) -> Result<SheetTable, LoadError> {
    let path = path.as_ref();
    let sheet = sheet.into();
    let book = open_workbook(path)?;
    let worksheet = resolve_sheet(&book, path, &sheet)?;
    let table = materialize(worksheet);
    tracing::debug!(
        path = ?path,
        sheet = %sheet,
        rows = table.len(),
        columns = table.columns().len(),
        "loaded worksheet"
    );
    Ok(table)
}

/// Fails fast on paths that cannot be a readable workbook, before any open
/// attempt.
fn validate_path(path: &Path) -> Result<(), LoadError> {
    let invalid = |reason: &str| LoadError::InvalidPath {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };
    if path.extension().and_then(|extension| extension.to_str()) != Some(WORKBOOK_EXTENSION) {
        return Err(invalid("expected a file with the `xlsx` extension"));
    }
    if !path.is_file() {
        return Err(invalid("file does not exist"));
    }
    Ok(())
}

fn open_workbook(path: &Path) -> Result<Spreadsheet, LoadError> {
    validate_path(path)?;
    xlsx::read(path).map_err(|source| LoadError::Workbook {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

fn resolve_sheet<'a>(
    book: &'a Spreadsheet,
    path: &Path,
    sheet: &SheetRef,
) -> Result<&'a Worksheet, LoadError> {
    let found = match sheet {
        SheetRef::Index(index) => book.get_sheet_collection().get(*index),
        SheetRef::Name(name) => book
            .get_sheet_collection()
            .iter()
            .find(|worksheet| worksheet.get_name() == name.as_str()),
    };
    found.ok_or_else(|| LoadError::SheetNotFound {
        path: path.to_path_buf(),
        sheet: sheet.clone(),
    })
}

fn materialize(worksheet: &Worksheet) -> SheetTable {
    let name = worksheet.get_name().to_string();
    let (max_column, max_row) = worksheet.get_highest_column_and_row();
    if max_row == 0 || max_column == 0 {
        return SheetTable::new(name, Vec::new(), Vec::new());
    }

    let columns = (1..=max_column)
        .map(|column| match worksheet.get_cell((column, 1u32)) {
            Some(cell) if !cell.get_value().is_empty() => cell.get_value().to_string(),
            _ => format!("column_{column}"),
        })
        .collect();

    let rows = (2..=max_row)
        .map(|row| {
            (1..=max_column)
                .map(|column| {
                    worksheet
                        .get_cell((column, row))
                        .map_or(CellValue::Empty, |cell| CellValue::from_raw(&cell.get_value()))
                })
                .collect()
        })
        .collect();

    SheetTable::new(name, columns, rows)
}
