//! Structural table model: header cells plus one row of cells per record.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use tokens_states::{Memo, RcKey};

use crate::{Cell, ColumnDescriptor, ColumnId, DeleteCallback, Error, TokenRecord, token_columns};

/// Marker carried by every body row.
pub const TOKEN_ROW_CLASS: &str = "qa-token-row";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub column: ColumnId,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRowModel {
    /// The record's token, unique within the table.
    pub key: String,
    pub cells: Vec<Cell>,
}

impl TableRowModel {
    pub fn class(&self) -> &'static str {
        TOKEN_ROW_CLASS
    }
}

/// A rendered token table, addressed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTableModel {
    pub id: String,
    pub header: Vec<HeaderCell>,
    pub rows: Vec<TableRowModel>,
}

impl TokenTableModel {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn column_ids(&self) -> impl Iterator<Item = ColumnId> + '_ {
        self.header.iter().map(|cell| cell.column)
    }

    pub fn cell(&self, row: usize, column: ColumnId) -> Option<&Cell> {
        let index = self.header.iter().position(|cell| cell.column == column)?;
        self.rows.get(row)?.cells.get(index)
    }
}

/// Applies every column to every record, in input order.
pub fn build_table(
    id: &str,
    columns: &[ColumnDescriptor],
    data: &[TokenRecord],
    now: DateTime<Utc>,
) -> Result<TokenTableModel, Error> {
    let header = columns
        .iter()
        .map(|column| HeaderCell {
            column: column.id,
            label: column.header,
        })
        .collect();

    let rows = data
        .iter()
        .map(|record| {
            let cells = columns
                .iter()
                .map(|column| column.render_cell(record, now))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(TableRowModel {
                key: record.token.clone(),
                cells,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(TokenTableModel {
        id: id.to_owned(),
        header,
        rows,
    })
}

/// Everything a token table render depends on.
#[derive(Debug, Clone, Copy)]
pub struct TableInputs<'a> {
    pub id: &'a str,
    pub include_name: bool,
    pub on_delete: &'a DeleteCallback,
    pub data: &'a Rc<[TokenRecord]>,
    pub now: DateTime<Utc>,
}

type ColumnsKey = (bool, DeleteCallback);

#[derive(Debug, PartialEq)]
struct TableKey {
    columns_generation: u64,
    data: RcKey<[TokenRecord]>,
    id: String,
    /// Relative times only need refreshing once per second.
    second: i64,
}

/// Caches the column model and the table model across frames.
///
/// Columns are rebuilt only when `include_name` or the callback identity
/// changes. The table is rebuilt when the columns, the data allocation, the
/// id or the current second changes; a new data slice never rebuilds columns.
#[derive(Debug)]
pub struct TokenTableMemo {
    columns: Memo<ColumnsKey, Rc<[ColumnDescriptor]>>,
    table: Memo<TableKey, Rc<TokenTableModel>>,
}

impl Default for TokenTableMemo {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenTableMemo {
    pub const fn new() -> Self {
        Self {
            columns: Memo::new("token_columns"),
            table: Memo::new("token_table"),
        }
    }

    pub fn columns(&mut self, include_name: bool, on_delete: &DeleteCallback) -> Rc<[ColumnDescriptor]> {
        let columns = self
            .columns
            .get_or_compute((include_name, on_delete.clone()), |(include_name, on_delete)| {
                log::debug!("Building token columns, include_name = {include_name}");
                Rc::from(token_columns(*include_name, on_delete))
            });
        Rc::clone(columns)
    }

    pub fn table(&mut self, inputs: &TableInputs<'_>) -> Result<Rc<TokenTableModel>, Error> {
        let columns = self.columns(inputs.include_name, inputs.on_delete);
        let key = TableKey {
            columns_generation: self.columns.computations(),
            data: RcKey::new(inputs.data),
            id: inputs.id.to_owned(),
            second: inputs.now.timestamp(),
        };

        let table = self.table.try_get_or_compute(key, |_| {
            log::debug!(
                "Building token table `{}` with {} row(s)",
                inputs.id,
                inputs.data.len()
            );
            build_table(inputs.id, &columns, inputs.data, inputs.now).map(Rc::new)
        })?;
        Ok(Rc::clone(table))
    }

    /// How many times the column model has been built.
    pub fn column_computations(&self) -> u64 {
        self.columns.computations()
    }

    /// How many times the table model has been built.
    pub fn table_computations(&self) -> u64 {
        self.table.computations()
    }
}
