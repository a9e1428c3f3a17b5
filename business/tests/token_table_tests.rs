//! End-to-end checks of the token table model: JSON in, cells out.

use std::{cell::RefCell, rc::Rc};

use chrono::{DateTime, Duration, Utc};
use tokens_business::{
    Cell, ColumnId, DeleteCallback, Error, NEVER, TableInputs, TokenRecord, TokenTableMemo,
    build_table, parse_token_records, token_columns,
};

const TOKENS_JSON: &str = r#"[
    {"token": "gt-first", "token_name": "laptop", "scopes": ["read", "write"], "created": 1700000000, "expires": 1700086400},
    {"token": "gt-second", "token_name": "ci", "scopes": [], "created": 0},
    {"token": "abc123", "scopes": ["exec:admin"], "expires": null}
]"#;

fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap() + Duration::hours(2)
}

fn data() -> Rc<[TokenRecord]> {
    Rc::from(parse_token_records(TOKENS_JSON).unwrap())
}

mod rendering_tests {
    use super::*;

    #[test]
    fn row_count_and_order_follow_data() {
        let data = data();
        let columns = token_columns(false, &DeleteCallback::noop());
        let table = build_table("tokens", &columns, &data, now()).unwrap();

        assert_eq!(table.row_count(), data.len());
        for (row, record) in table.rows.iter().zip(data.iter()) {
            assert_eq!(row.key, record.token);
        }
    }

    #[test]
    fn unset_and_zero_timestamps_render_never_without_tooltip() {
        let columns = token_columns(false, &DeleteCallback::noop());
        let table = build_table("tokens", &columns, &data(), now()).unwrap();

        let created_zero = table.cell(1, ColumnId::Created).unwrap();
        let expires_missing = table.cell(1, ColumnId::Expires).unwrap();
        let expires_null = table.cell(2, ColumnId::Expires).unwrap();
        for cell in [created_zero, expires_missing, expires_null] {
            assert_eq!(cell.text(), NEVER);
            assert_eq!(cell.tooltip(), None);
        }
    }

    #[test]
    fn set_timestamps_render_relative_with_exact_tooltip() {
        let columns = token_columns(false, &DeleteCallback::noop());
        let table = build_table("tokens", &columns, &data(), now()).unwrap();

        let created = table.cell(0, ColumnId::Created).unwrap();
        assert_eq!(created.text(), "about 2 hours ago");
        assert_eq!(created.tooltip(), Some("2023-11-14T22:13:20Z"));

        let expires = table.cell(0, ColumnId::Expires).unwrap();
        assert_eq!(expires.text(), "about 22 hours");
        assert_eq!(expires.tooltip(), Some("2023-11-15T22:13:20Z"));
    }

    #[test]
    fn identity_column_follows_include_name() {
        let named = build_table("tokens", &token_columns(true, &DeleteCallback::noop()), &data(), now())
            .unwrap();
        assert_eq!(named.header[0].label, "Name");
        assert_eq!(named.cell(0, ColumnId::Name), Some(&Cell::Name("laptop".to_owned())));
        assert!(named.cell(0, ColumnId::Token).is_none());

        let coded = build_table("tokens", &token_columns(false, &DeleteCallback::noop()), &data(), now())
            .unwrap();
        assert_eq!(coded.header[0].label, "Token");
        assert_eq!(coded.cell(0, ColumnId::Token), Some(&Cell::Code("gt-first".to_owned())));
    }

    #[test]
    fn scopes_join_or_stay_empty() {
        let table = build_table("tokens", &token_columns(false, &DeleteCallback::noop()), &data(), now())
            .unwrap();
        assert_eq!(table.cell(0, ColumnId::Scopes).unwrap().text(), "read, write");
        assert_eq!(table.cell(1, ColumnId::Scopes).unwrap().text(), "");
    }

    #[test]
    fn malformed_scopes_never_reach_the_table() {
        let err = parse_token_records(r#"[{"token": "gt-x", "scopes": {"read": true}}]"#).unwrap_err();
        assert!(matches!(err, Error::MalformedRecords(_)));
    }
}

mod delete_tests {
    use super::*;

    #[test]
    fn delete_control_reports_its_row_token_once() {
        let deleted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&deleted);
        let on_delete = DeleteCallback::new(move |token| sink.borrow_mut().push(token.to_owned()));
        let table = build_table("tokens", &token_columns(false, &on_delete), &data(), now()).unwrap();

        table
            .cell(2, ColumnId::Delete)
            .and_then(Cell::as_delete)
            .unwrap()
            .activate();

        assert_eq!(*deleted.borrow(), ["abc123"]);
    }

    #[test]
    fn delete_control_without_callback_is_inert() {
        let table = build_table("tokens", &token_columns(false, &DeleteCallback::default()), &data(), now())
            .unwrap();
        for row in 0..table.row_count() {
            table.cell(row, ColumnId::Delete).and_then(Cell::as_delete).unwrap().activate();
        }
    }
}

mod memo_tests {
    use super::*;

    #[test]
    fn frames_with_same_inputs_share_one_model() {
        let mut memo = TokenTableMemo::new();
        let data = data();
        let on_delete = DeleteCallback::noop();

        for _ in 0..10 {
            memo.table(&TableInputs {
                id: "tokens",
                include_name: true,
                on_delete: &on_delete,
                data: &data,
                now: now(),
            })
            .unwrap();
        }

        assert_eq!(memo.column_computations(), 1);
        assert_eq!(memo.table_computations(), 1);
    }

    #[test]
    fn failed_build_is_retried_on_next_frame() {
        let mut memo = TokenTableMemo::new();
        let on_delete = DeleteCallback::noop();
        let bad: Rc<[TokenRecord]> = Rc::from(vec![TokenRecord::new("gt-x", ["read"]).expires_at(i64::MIN)]);
        let inputs = TableInputs {
            id: "tokens",
            include_name: false,
            on_delete: &on_delete,
            data: &bad,
            now: now(),
        };

        assert!(memo.table(&inputs).is_err());
        assert!(memo.table(&inputs).is_err());
        assert_eq!(memo.table_computations(), 0);
        assert_eq!(memo.column_computations(), 1);
    }
}
