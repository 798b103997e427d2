//! Tab-separated table loader.
//!
//! Every stat export shares one physical format: a header line followed by
//! tab-separated rows. Two indexings exist over it:
//!
//! ```text
//! Row-indexed (chancetomeleecrit.txt)      Column-indexed (combatratings.txt)
//!
//! level  Warrior  Paladin  ...             level  weapon skill  defense skill  ...
//! 1      0.0025   0.0020   ...             1      2.5           1.5            ...
//! 2      0.0024   0.0019   ...             2      2.5           1.5            ...
//!
//! table["1"] == [0.0025, 0.0020, ...]      table["weapon skill"] == [2.5, 2.5, ...]
//! ```
//!
//! Value cells are parsed to `f64` once, here; the key cell stays a string.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, StatsError};
use crate::loaders::read_file;

/// How a table is keyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexMode {
    /// Header line dropped; column 0 of each line is the key.
    Row,
    /// Grid transposed; each column after the first is keyed by its header cell.
    Column,
}

/// String-keyed table of numeric value sequences.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexedTable {
    name: String,
    rows: BTreeMap<String, Vec<f64>>,
}

/// A physical line of the file, with its 1-based line number.
struct Line {
    number: usize,
    cells: Vec<String>,
}

impl IndexedTable {
    /// Load a table from a file. The file name becomes the table name.
    pub fn load(path: &Path, mode: IndexMode) -> Result<Self> {
        let content = read_file(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let lines = split_lines(path, &content)?;
        let table = Self::from_lines(name, lines, mode)?;

        tracing::debug!(
            table = %table.name,
            ?mode,
            rows = table.len(),
            "loaded stat table"
        );
        Ok(table)
    }

    /// Parse a table from in-memory content.
    pub fn parse(name: &str, content: &str, mode: IndexMode) -> Result<Self> {
        let lines = split_lines(Path::new(name), content)?;
        Self::from_lines(name.to_string(), lines, mode)
    }

    fn from_lines(name: String, lines: Vec<Line>, mode: IndexMode) -> Result<Self> {
        let mut table = Self {
            name,
            rows: BTreeMap::new(),
        };
        match mode {
            IndexMode::Row => table.fill_by_row(lines)?,
            IndexMode::Column => table.fill_by_column(lines)?,
        }
        Ok(table)
    }

    fn fill_by_row(&mut self, lines: Vec<Line>) -> Result<()> {
        for line in lines.into_iter().skip(1) {
            let mut cells = line.cells.into_iter();
            let Some(key) = cells.next() else {
                continue;
            };
            let values = cells
                .enumerate()
                .map(|(column, cell)| self.parse_cell(&key, column, cell))
                .collect::<Result<Vec<_>>>()?;
            self.insert(key, values);
        }
        Ok(())
    }

    fn fill_by_column(&mut self, lines: Vec<Line>) -> Result<()> {
        let Some(width) = lines.first().map(|line| line.cells.len()) else {
            return Ok(());
        };
        if let Some(ragged) = lines.iter().find(|line| line.cells.len() != width) {
            return Err(StatsError::RaggedRow {
                file: self.name.clone(),
                line: ragged.number,
                expected: width,
                found: ragged.cells.len(),
            });
        }

        // Column 0 (the row labels) is dropped, as is the header row of every other column.
        for column in 1..width {
            let key = lines[0].cells[column].clone();
            let values = lines[1..]
                .iter()
                .enumerate()
                .map(|(row, line)| self.parse_cell(&key, row, line.cells[column].clone()))
                .collect::<Result<Vec<_>>>()?;
            self.insert(key, values);
        }
        Ok(())
    }

    fn parse_cell(&self, key: &str, column: usize, cell: String) -> Result<f64> {
        // Non-finite values have no Go literal form.
        match cell.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(StatsError::NotANumber {
                file: self.name.clone(),
                key: key.to_string(),
                column,
                value: cell,
            }),
        }
    }

    fn insert(&mut self, key: String, values: Vec<f64>) {
        if self.rows.contains_key(&key) {
            tracing::warn!(table = %self.name, %key, "duplicate key, later row wins");
        }
        self.rows.insert(key, values);
    }

    /// Table name used in error messages (the source file name).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.rows.get(key).map(Vec::as_slice)
    }

    /// Values keyed by `key`, or a lookup error naming this table.
    pub fn row(&self, key: &str) -> Result<&[f64]> {
        self.get(key).ok_or_else(|| StatsError::MissingKey {
            table: self.name.clone(),
            key: key.to_string(),
        })
    }

    /// Value at `offset` of the row keyed by `key`.
    pub fn value(&self, key: &str, offset: usize) -> Result<f64> {
        let row = self.row(key)?;
        row.get(offset)
            .copied()
            .ok_or_else(|| StatsError::MissingColumn {
                table: self.name.clone(),
                key: key.to_string(),
                offset,
                width: row.len(),
            })
    }
}

/// Split tab-separated content into trimmed cells, skipping blank lines.
fn split_lines(path: &Path, content: &str) -> Result<Vec<Line>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut lines = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| StatsError::Csv {
            path: PathBuf::from(path),
            source,
        })?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let number = record
            .position()
            .map_or(lines.len() + 1, |pos| pos.line() as usize);
        let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
        // Exports often carry a trailing tab.
        while cells.last().is_some_and(String::is_empty) {
            cells.pop();
        }
        lines.push(Line { number, cells });
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const MELEE_CRIT: &str = "level\tWarrior\tPaladin\tHunter\n\
                              1\t0.0025\t0.0020\t0.0030\n\
                              60\t0.05\t0.04\t0.0333\n";

    const RATINGS: &str = "level\tweapon skill\tdodge\n\
                           1\t2.5\t12\n\
                           2\t2.6\t13\n\
                           3\t2.7\t14\n";

    #[test]
    fn test_row_index_uses_first_column() {
        let table = IndexedTable::parse("crit.txt", MELEE_CRIT, IndexMode::Row).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("60"), Some(&[0.05, 0.04, 0.0333][..]));
        assert_eq!(table.get("1"), Some(&[0.0025, 0.0020, 0.0030][..]));
        assert!(table.get("level").is_none());
    }

    #[test]
    fn test_column_index_reads_down_columns() {
        let table = IndexedTable::parse("ratings.txt", RATINGS, IndexMode::Column).unwrap();
        assert_eq!(
            table.keys().collect::<Vec<_>>(),
            vec!["dodge", "weapon skill"]
        );
        assert_eq!(table.get("weapon skill"), Some(&[2.5, 2.6, 2.7][..]));
        assert_eq!(table.get("dodge"), Some(&[12.0, 13.0, 14.0][..]));
        assert!(table.get("level").is_none());
        assert!(table.get("1").is_none());
    }

    #[test]
    fn test_duplicate_row_last_wins() {
        let content = "level\tWarrior\n1\t0.1\n1\t0.2\n";
        let table = IndexedTable::parse("dup.txt", content, IndexMode::Row).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.value("1", 0).unwrap(), 0.2);
    }

    #[test]
    fn test_ragged_rows_allowed_by_row() {
        let content = "level\ta\tb\n1\t1\n2\t1\t2\n";
        let table = IndexedTable::parse("ragged.txt", content, IndexMode::Row).unwrap();
        assert_eq!(table.get("1").map(<[f64]>::len), Some(1));
        assert_eq!(table.get("2").map(<[f64]>::len), Some(2));
    }

    #[test]
    fn test_ragged_rows_rejected_by_column() {
        let content = "level\ta\tb\n1\t1\t2\n2\t1\n";
        let err = IndexedTable::parse("ragged.txt", content, IndexMode::Column).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
        match err {
            StatsError::RaggedRow {
                file,
                line,
                expected,
                found,
            } => {
                assert_eq!(file, "ragged.txt");
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_cell_names_location() {
        let content = "level\tWarrior\tPaladin\n25\t0.1\tabc\n";
        let err = IndexedTable::parse("crit.txt", content, IndexMode::Row).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
        assert_eq!(
            err.to_string(),
            "crit.txt: row '25' column 1 is not a number: 'abc'"
        );
    }

    #[test]
    fn test_non_finite_cell_rejected() {
        for value in ["NaN", "inf", "-infinity"] {
            let content = format!("level\tWarrior\n60\t{value}\n");
            let err = IndexedTable::parse("crit.txt", &content, IndexMode::Row).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Structure);
            assert_eq!(
                err.to_string(),
                format!("crit.txt: row '60' column 0 is not a number: '{value}'")
            );
        }
    }

    #[test]
    fn test_trailing_tabs_ignored() {
        let content = "level\tWarrior\tPaladin\t\n60\t0.05\t0.04\t\n";
        let table = IndexedTable::parse("crit.txt", content, IndexMode::Row).unwrap();
        assert_eq!(table.get("60"), Some(&[0.05, 0.04][..]));

        let table = IndexedTable::parse("ratings.txt", content, IndexMode::Column).unwrap();
        assert_eq!(table.get("Paladin"), Some(&[0.04][..]));
    }

    #[test]
    fn test_interior_empty_cell_rejected() {
        let content = "level\tWarrior\tPaladin\n60\t\t0.04\n";
        let err = IndexedTable::parse("crit.txt", content, IndexMode::Row).unwrap_err();
        assert_eq!(
            err.to_string(),
            "crit.txt: row '60' column 0 is not a number: ''"
        );
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let content = "level\tWarrior\r\n\r\n40\t0.5\r\n\n";
        let table = IndexedTable::parse("crlf.txt", content, IndexMode::Row).unwrap();
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["40"]);
        assert_eq!(table.value("40", 0).unwrap(), 0.5);
    }

    #[test]
    fn test_header_only_is_empty() {
        let table =
            IndexedTable::parse("empty.txt", "level\tWarrior\n", IndexMode::Row).unwrap();
        assert!(table.is_empty());
        let table = IndexedTable::parse("empty.txt", "", IndexMode::Column).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_lookup_errors() {
        let table = IndexedTable::parse("crit.txt", MELEE_CRIT, IndexMode::Row).unwrap();

        let err = table.row("25").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert!(err.to_string().contains("'25'"));

        match table.value("60", 7).unwrap_err() {
            StatsError::MissingColumn { offset, width, .. } => {
                assert_eq!(offset, 7);
                assert_eq!(width, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err =
            IndexedTable::load(Path::new("/nonexistent/crit.txt"), IndexMode::Row).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileAccess);
        assert!(err.to_string().contains("/nonexistent/crit.txt"));
    }

    #[test]
    fn test_load_uses_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chancetomeleecrit.txt");
        std::fs::write(&path, MELEE_CRIT).unwrap();

        let table = IndexedTable::load(&path, IndexMode::Row).unwrap();
        assert_eq!(table.name(), "chancetomeleecrit.txt");
        assert_eq!(table.value("60", 0).unwrap(), 0.05);
    }

    #[test]
    fn test_row_order_does_not_matter() {
        let shuffled = "level\tWarrior\tPaladin\tHunter\n\
                        60\t0.05\t0.04\t0.0333\n\
                        1\t0.0025\t0.0020\t0.0030\n";
        let a = IndexedTable::parse("crit.txt", MELEE_CRIT, IndexMode::Row).unwrap();
        let b = IndexedTable::parse("crit.txt", shuffled, IndexMode::Row).unwrap();
        assert_eq!(a, b);
    }
}
