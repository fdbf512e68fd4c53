//! Tabular sheet representation

use serde::{Deserialize, Serialize};

/// A typed spreadsheet cell.
///
/// Cells are classified from their raw string form: numbers first, then
/// booleans, falling back to text. Absent or blank cells are `Empty`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellValue {
    /// An absent or blank cell.
    Empty,
    /// A boolean cell (`true`/`false`, case-insensitive in the raw form).
    Bool(bool),
    /// A numeric cell.
    Number(f64),
    /// Any other non-empty cell.
    Text(String),
}

impl CellValue {
    /// Classifies a raw cell string.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Empty;
        }
        if let Ok(number) = raw.parse::<f64>() {
            return Self::Number(number);
        }
        match raw.to_ascii_lowercase().as_str() {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => Self::Text(raw.to_string()),
        }
    }

    /// Returns `true` for an absent or blank cell.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the text content, if this is a text cell.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the numeric content, if this is a numeric cell.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a boolean cell.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }
}

/// A loaded worksheet: named columns and typed data rows.
///
/// The first spreadsheet row supplies the column names; a blank header cell
/// gets a positional fallback name (`column_N`, 1-based) so every column
/// stays addressable. Data rows follow in sheet order, each as wide as the
/// column list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SheetTable {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    pub(crate) const fn new(name: String, columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name,
            columns,
            rows,
        }
    }

    /// Returns the worksheet name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column names in sheet order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the data rows (the header row is not included).
    #[must_use]
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Returns the number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the position of a named column.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Returns a named column as a vector of cell references, one per data
    /// row.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<&CellValue>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().filter_map(|row| row.get(index)).collect())
    }

    /// Returns the cell at a data-row index and named column.
    #[must_use]
    pub fn get(&self, row: usize, column: &str) -> Option<&CellValue> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_table() -> SheetTable {
        SheetTable::new(
            "Products".to_string(),
            vec!["Id".to_string(), "Name".to_string(), "Qty".to_string()],
            vec![
                vec![
                    CellValue::Number(1.0),
                    CellValue::Text("Notebook".to_string()),
                    CellValue::Number(12.0),
                ],
                vec![
                    CellValue::Number(2.0),
                    CellValue::Text("Mouse".to_string()),
                    CellValue::Empty,
                ],
            ],
        )
    }

    // =========================================================================
    // CellValue Tests
    // =========================================================================

    #[rstest]
    #[case("", CellValue::Empty)]
    #[case("30", CellValue::Number(30.0))]
    #[case("19.99", CellValue::Number(19.99))]
    #[case("-4", CellValue::Number(-4.0))]
    #[case("true", CellValue::Bool(true))]
    #[case("FALSE", CellValue::Bool(false))]
    #[case("Notebook", CellValue::Text("Notebook".to_string()))]
    fn test_cell_value_from_raw(#[case] raw: &str, #[case] expected: CellValue) {
        assert_eq!(CellValue::from_raw(raw), expected);
    }

    #[rstest]
    fn test_cell_value_accessors() {
        assert!(CellValue::Empty.is_empty());
        assert_eq!(CellValue::from_raw("42").as_number(), Some(42.0));
        assert_eq!(CellValue::from_raw("true").as_bool(), Some(true));
        assert_eq!(CellValue::from_raw("abc").as_text(), Some("abc"));
        assert_eq!(CellValue::from_raw("abc").as_number(), None);
    }

    // =========================================================================
    // SheetTable Tests
    // =========================================================================

    #[rstest]
    fn test_sheet_table_dimensions() {
        let table = sample_table();

        assert_eq!(table.name(), "Products");
        assert_eq!(table.columns().len(), 3);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }

    #[rstest]
    fn test_sheet_table_column_lookup() {
        let table = sample_table();

        assert_eq!(table.column_index("Name"), Some(1));
        assert_eq!(table.column_index("Missing"), None);

        let quantities = table.column("Qty").unwrap();
        assert_eq!(quantities, [&CellValue::Number(12.0), &CellValue::Empty]);
    }

    #[rstest]
    fn test_sheet_table_get() {
        let table = sample_table();

        assert_eq!(
            table.get(1, "Name"),
            Some(&CellValue::Text("Mouse".to_string()))
        );
        assert_eq!(table.get(2, "Name"), None);
        assert_eq!(table.get(0, "Missing"), None);
    }
}
