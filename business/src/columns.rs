//! Column model for the token table.
//!
//! A column is a header label, an accessor picking a field out of a
//! [`TokenRecord`], and a renderer turning that field into a [`Cell`].
//! The order is fixed for every configuration:
//! identity (Name or Token), Scopes, Created, Expires, delete.

use chrono::{DateTime, Utc};

use crate::{
    DeleteButton, DeleteCallback, Direction, Error, TimeDisplay, TokenRecord, format_timestamp,
    render_delete_action,
};

/// Separator between scopes in the Scopes column.
pub const SCOPE_SEPARATOR: &str = ", ";

/// Marker of the code-styled token cell.
pub const TOKEN_CLASS: &str = "qa-token";

/// Marker of the token-name cell.
pub const TOKEN_NAME_CLASS: &str = "qa-token-name";

/// Stable identity of a column, independent of its header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    Name,
    Token,
    Scopes,
    Created,
    Expires,
    Delete,
}

impl ColumnId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Token => "token",
            Self::Scopes => "scopes",
            Self::Created => "created",
            Self::Expires => "expires",
            Self::Delete => "delete",
        }
    }
}

/// The record field a column reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor {
    Token,
    TokenName,
    Scopes,
    Created,
    Expires,
}

impl Accessor {
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::TokenName => "token_name",
            Self::Scopes => "scopes",
            Self::Created => "created",
            Self::Expires => "expires",
        }
    }

    pub fn access(self, record: &TokenRecord) -> CellValue<'_> {
        match self {
            Self::Token => CellValue::Text(Some(&record.token)),
            Self::TokenName => CellValue::Text(record.token_name.as_deref()),
            Self::Scopes => CellValue::List(&record.scopes),
            Self::Created => CellValue::Timestamp(record.created),
            Self::Expires => CellValue::Timestamp(record.expires),
        }
    }
}

/// A field value on its way to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue<'a> {
    Text(Option<&'a str>),
    List(&'a [String]),
    Timestamp(Option<i64>),
}

impl CellValue<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::List(_) => "a list",
            Self::Timestamp(_) => "a timestamp",
        }
    }
}

/// A rendered cell, ready to be painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Token name, styled as an identifier.
    Name(String),
    /// The token itself, styled as code.
    Code(String),
    Text(String),
    Time(TimeDisplay),
    Delete(DeleteButton),
}

impl Cell {
    /// Visible text of the cell. The delete control has none.
    pub fn text(&self) -> &str {
        match self {
            Self::Name(text) | Self::Code(text) | Self::Text(text) => text,
            Self::Time(time) => time.text(),
            Self::Delete(_) => "",
        }
    }

    pub fn tooltip(&self) -> Option<&str> {
        match self {
            Self::Time(time) => time.tooltip(),
            _ => None,
        }
    }

    pub fn class(&self) -> Option<&'static str> {
        match self {
            Self::Name(_) => Some(TOKEN_NAME_CLASS),
            Self::Code(_) => Some(TOKEN_CLASS),
            Self::Delete(_) => Some(crate::DELETE_BUTTON_CLASS),
            Self::Text(_) | Self::Time(_) => None,
        }
    }

    pub fn as_delete(&self) -> Option<&DeleteButton> {
        match self {
            Self::Delete(button) => Some(button),
            _ => None,
        }
    }
}

/// How a column turns its value into a [`Cell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellRenderer {
    Name,
    Code,
    JoinedScopes,
    Timestamp(Direction),
    /// Carries the callback the delete control is bound to.
    Delete(DeleteCallback),
}

impl CellRenderer {
    fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Code => "code",
            Self::JoinedScopes => "scopes",
            Self::Timestamp(Direction::Past) => "created",
            Self::Timestamp(Direction::Future) => "expires",
            Self::Delete(_) => "delete",
        }
    }

    pub fn render(&self, value: CellValue<'_>, now: DateTime<Utc>) -> Result<Cell, Error> {
        match (self, value) {
            (Self::Name, CellValue::Text(name)) => Ok(Cell::Name(name.unwrap_or_default().to_owned())),
            (Self::Code, CellValue::Text(token)) => Ok(Cell::Code(token.unwrap_or_default().to_owned())),
            (Self::JoinedScopes, CellValue::List(scopes)) => Ok(Cell::Text(join_scopes(scopes))),
            (Self::Timestamp(direction), CellValue::Timestamp(timestamp)) => {
                format_timestamp(timestamp, *direction, now).map(Cell::Time)
            }
            (Self::Delete(on_delete), CellValue::Text(Some(token))) => {
                Ok(Cell::Delete(render_delete_action(token, on_delete)))
            }
            (renderer, value) => Err(Error::unexpected_cell_value(
                renderer.name(),
                renderer.expects(),
                value.kind(),
            )),
        }
    }

    fn expects(&self) -> &'static str {
        match self {
            Self::Name | Self::Code => "text",
            Self::JoinedScopes => "a list",
            Self::Timestamp(_) => "a timestamp",
            Self::Delete(_) => "a token",
        }
    }
}

/// One column of the token table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub id: ColumnId,
    /// Empty for the delete column.
    pub header: &'static str,
    pub accessor: Accessor,
    pub renderer: CellRenderer,
}

impl ColumnDescriptor {
    pub fn render_cell(&self, record: &TokenRecord, now: DateTime<Utc>) -> Result<Cell, Error> {
        self.renderer.render(self.accessor.access(record), now)
    }
}

/// Builds the ordered columns for a table.
///
/// `include_name` swaps the Token column for a Name column; the two are never
/// shown together. The delete column is bound to `on_delete`.
pub fn token_columns(include_name: bool, on_delete: &DeleteCallback) -> Vec<ColumnDescriptor> {
    let identity = if include_name {
        ColumnDescriptor {
            id: ColumnId::Name,
            header: "Name",
            accessor: Accessor::TokenName,
            renderer: CellRenderer::Name,
        }
    } else {
        ColumnDescriptor {
            id: ColumnId::Token,
            header: "Token",
            accessor: Accessor::Token,
            renderer: CellRenderer::Code,
        }
    };

    vec![
        identity,
        ColumnDescriptor {
            id: ColumnId::Scopes,
            header: "Scopes",
            accessor: Accessor::Scopes,
            renderer: CellRenderer::JoinedScopes,
        },
        ColumnDescriptor {
            id: ColumnId::Created,
            header: "Created",
            accessor: Accessor::Created,
            renderer: CellRenderer::Timestamp(Direction::Past),
        },
        ColumnDescriptor {
            id: ColumnId::Expires,
            header: "Expires",
            accessor: Accessor::Expires,
            renderer: CellRenderer::Timestamp(Direction::Future),
        },
        ColumnDescriptor {
            id: ColumnId::Delete,
            header: "",
            accessor: Accessor::Token,
            renderer: CellRenderer::Delete(on_delete.clone()),
        },
    ]
}

pub fn join_scopes(scopes: &[String]) -> String {
    scopes.join(SCOPE_SEPARATOR)
}
