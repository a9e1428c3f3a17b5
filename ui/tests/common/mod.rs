use chrono::{DateTime, Utc};
use egui_kittest::Harness;
use tokens_business::TokenRecord;
use tokens_ui::TokensApp;
use tokens_ui::state::State;

pub const CREATED: i64 = 1_700_000_000;

pub fn test_now() -> DateTime<Utc> {
    DateTime::from_timestamp(CREATED + 600, 0).unwrap_or_default()
}

pub fn test_tokens() -> Vec<TokenRecord> {
    vec![
        TokenRecord::new("gt-alpha", ["read:all", "exec:admin"])
            .with_name("laptop")
            .created_at(CREATED),
        TokenRecord::new("gt-bravo", ["read:all"])
            .with_name("ci")
            .created_at(CREATED)
            .expires_at(CREATED + 3 * 86_400),
        TokenRecord::new("abc123", Vec::<String>::new()).with_name("scratch"),
    ]
}

/// Full app harness with a frozen clock, stepped once so the table exists.
pub fn app_harness(tokens: Vec<TokenRecord>) -> Harness<'static, TokensApp> {
    let app = TokensApp::new(State::test(tokens, test_now()));
    let mut harness = Harness::new_eframe(|_| app);
    harness.step();
    harness
}
