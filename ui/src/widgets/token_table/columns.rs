//! Column widths for the token table.

use egui_extras::Column;
use tokens_business::ColumnId;

pub const IDENTITY_MIN_WIDTH: f32 = 140.0;
pub const SCOPES_MIN_WIDTH: f32 = 100.0;
pub const TIME_WIDTH: f32 = 130.0;
pub const DELETE_WIDTH: f32 = 36.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Layout of a column:
/// - Name / Token: fills the remaining space, clipped
/// - Scopes: sized to content
/// - Created / Expires: fixed
/// - delete: fixed, just wide enough for the button
#[inline]
pub fn table_column(id: ColumnId) -> Column {
    match id {
        ColumnId::Name | ColumnId::Token => Column::remainder().at_least(IDENTITY_MIN_WIDTH).clip(true),
        ColumnId::Scopes => Column::auto().at_least(SCOPES_MIN_WIDTH),
        ColumnId::Created | ColumnId::Expires => Column::exact(TIME_WIDTH),
        ColumnId::Delete => Column::exact(DELETE_WIDTH),
    }
}
