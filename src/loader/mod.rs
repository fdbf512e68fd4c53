//! Spreadsheet ingestion
//!
//! Loads xlsx workbooks into [`SheetTable`] values: named columns taken from
//! the header row, typed cells below it. The loader validates the path up
//! front and fails fast with a descriptive [`LoadError`] before attempting to
//! open the file; parser failures keep the underlying cause attached as a
//! chained source error.
//!
//! Record construction from loaded rows is application glue and lives
//! outside this crate.

mod table;
mod xlsx;

pub use table::{CellValue, SheetTable};
pub use xlsx::{load_table, sheet_names};

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selects a worksheet by name or by 0-based position.
///
/// The default selector is the first sheet of the workbook.
///
/// # Examples
///
/// ```
/// use sales_records::loader::SheetRef;
///
/// assert_eq!(SheetRef::default(), SheetRef::Index(0));
/// assert_eq!(SheetRef::from("Clients"), SheetRef::Name("Clients".to_string()));
/// assert_eq!(SheetRef::from(2usize), SheetRef::Index(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetRef {
    /// A sheet addressed by its name.
    Name(String),
    /// A sheet addressed by its 0-based position.
    Index(usize),
}

impl Default for SheetRef {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl From<&str> for SheetRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for SheetRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for SheetRef {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for SheetRef {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(formatter, "`{name}`"),
            Self::Index(index) => write!(formatter, "#{index}"),
        }
    }
}

/// Error raised by the loader operations.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path failed the up-front checks (extension or existence), before
    /// any attempt to open the file.
    #[error("invalid workbook path {path:?}: {reason}")]
    InvalidPath {
        /// The rejected path.
        path: PathBuf,
        /// Why the path was rejected.
        reason: String,
    },
    /// Opening or parsing the workbook failed; the parser's error is kept as
    /// the source cause.
    #[error("failed to read workbook {path:?}")]
    Workbook {
        /// The workbook that failed to load.
        path: PathBuf,
        /// The underlying reader error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The workbook opened but the selector matched no sheet.
    #[error("sheet {sheet} not found in workbook {path:?}")]
    SheetNotFound {
        /// The workbook that was searched.
        path: PathBuf,
        /// The selector that failed to resolve.
        sheet: SheetRef,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_sheet_ref_default_is_first_sheet() {
        assert_eq!(SheetRef::default(), SheetRef::Index(0));
    }

    #[rstest]
    fn test_sheet_ref_display() {
        assert_eq!(SheetRef::from("Clients").to_string(), "`Clients`");
        assert_eq!(SheetRef::from(3).to_string(), "#3");
    }

    #[rstest]
    fn test_load_error_display() {
        let error = LoadError::SheetNotFound {
            path: PathBuf::from("sales.xlsx"),
            sheet: SheetRef::from("Missing"),
        };

        assert_eq!(
            error.to_string(),
            "sheet `Missing` not found in workbook \"sales.xlsx\""
        );
    }
}
