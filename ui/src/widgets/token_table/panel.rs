//! Token table entry point.

use std::rc::Rc;

use bon::Builder;
use chrono::{DateTime, Utc};
use egui::{Align, Layout, Response, Ui};
use egui_extras::TableBuilder;
use tokens_business::{DeleteCallback, TableInputs, TokenRecord, TokenTableMemo, TokenTableModel};

use super::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_column};
use super::header::render_table_header;
use super::row::render_token_row;
use crate::widgets::error_banner;

/// Inputs of [`token_table`].
#[derive(Debug, Clone, Builder)]
pub struct TokenTableProps {
    /// Root identifier, used as the table's id salt.
    #[builder(into)]
    pub id: String,
    /// Rows, painted in this order.
    pub data: Rc<[TokenRecord]>,
    /// Called with a row's token when its delete button is clicked.
    #[builder(default)]
    pub on_delete_token: DeleteCallback,
    /// Show the Name column instead of the Token column.
    #[builder(default)]
    pub include_name: bool,
}

/// Displays a table of tokens.
///
/// Column and table models come from `memo`, so a frame with the same props
/// in the same second paints the previous model. If the model cannot be
/// built, an error banner is painted instead.
pub fn token_table(
    ui: &mut Ui,
    memo: &mut TokenTableMemo,
    props: &TokenTableProps,
    now: DateTime<Utc>,
) -> Response {
    let inputs = TableInputs {
        id: &props.id,
        include_name: props.include_name,
        on_delete: &props.on_delete_token,
        data: &props.data,
        now,
    };

    match memo.table(&inputs) {
        Ok(model) => render_table(ui, &model),
        Err(err) => {
            log::warn!("Failed to build token table `{}`: {err}", props.id);
            error_banner(ui, &err.to_string())
        }
    }
}

fn render_table(ui: &mut Ui, model: &TokenTableModel) -> Response {
    ui.push_id(&model.id, |ui| {
        let mut builder = TableBuilder::new(ui)
            .id_salt(&model.id)
            .striped(true)
            .resizable(false)
            .cell_layout(Layout::left_to_right(Align::Center));
        for column in model.column_ids() {
            builder = builder.column(table_column(column));
        }

        builder
            .header(HEADER_HEIGHT, |mut header| {
                render_table_header(&mut header, &model.header);
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, model.row_count(), |mut row| {
                    if let Some(data) = model.rows.get(row.index()) {
                        render_token_row(&mut row, data);
                    }
                });
            });
    })
    .response
}
