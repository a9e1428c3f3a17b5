use std::{fmt::Display, rc::Rc};

use anyhow::Context as _;
use chrono::{DateTime, Duration, Utc};
use flume::{Receiver, Sender, TryRecvError};
use tokens_business::{
    DeleteCallback, TableConfig, TokenRecord, TokenTableMemo, parse_token_records,
};
use tokens_states::Time;

use crate::widgets::TokenTableProps;

/// Error-reporting channel shared by the page: the last error, if any.
#[derive(Debug, Default, Clone)]
pub struct ErrorReport {
    error: Option<String>,
}

impl ErrorReport {
    pub fn on_error(&mut self, error: impl Display) {
        let message = error.to_string();
        log::error!("{message}");
        self.error = Some(message);
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// The main application state.
///
/// Note: Default is implemented manually because the deletion channel
/// has to be created together with the callback feeding it.
pub struct State {
    pub time: Time,
    pub config: TableConfig,
    pub tokens: Rc<[TokenRecord]>,
    pub memo: TokenTableMemo,
    pub errors: ErrorReport,
    on_delete: DeleteCallback,
    deletions: Receiver<String>,
}

impl Default for State {
    fn default() -> Self {
        Self::from_config(TableConfig::default())
    }
}

impl State {
    /// Reads `TOKEN_TABLE_*` configuration, falling back to defaults (and
    /// reporting the error) when it is invalid.
    pub fn from_env() -> Self {
        match TableConfig::from_env() {
            Ok(config) => Self::from_config(config),
            Err(err) => {
                let mut state = Self::default();
                state.errors.on_error(err);
                state
            }
        }
    }

    pub fn from_config(config: TableConfig) -> Self {
        let time = Time::default();
        let mut errors = ErrorReport::default();
        let tokens = match &config.data_path {
            Some(path) => load_tokens(path).unwrap_or_else(|err| {
                errors.on_error(format!("{err:#}"));
                Vec::new()
            }),
            None => sample_tokens(time.now()),
        };

        Self::new(time, config, tokens, errors)
    }

    /// Test state with a frozen clock.
    pub fn test(tokens: Vec<TokenRecord>, now: DateTime<Utc>) -> Self {
        Self::new(
            Time::fixed(now),
            TableConfig::default(),
            tokens,
            ErrorReport::default(),
        )
    }

    fn new(time: Time, config: TableConfig, tokens: Vec<TokenRecord>, errors: ErrorReport) -> Self {
        let (sender, deletions) = flume::unbounded();

        Self {
            time,
            config,
            tokens: Rc::from(tokens),
            memo: TokenTableMemo::new(),
            errors,
            on_delete: delete_sender(sender),
            deletions,
        }
    }

    pub fn table_props(&self) -> TokenTableProps {
        TokenTableProps::builder()
            .id(self.config.table_id.as_str())
            .data(Rc::clone(&self.tokens))
            .on_delete_token(self.on_delete.clone())
            .include_name(self.config.include_name)
            .build()
    }

    /// Applies deletions requested since the last frame.
    ///
    /// Removing a token replaces `tokens` with a new allocation, which is
    /// what invalidates the memoized table. Returns how many were removed.
    pub fn apply_deletions(&mut self) -> usize {
        let mut removed = 0;
        loop {
            match self.deletions.try_recv() {
                Ok(token) => {
                    let before = self.tokens.len();
                    self.tokens = self
                        .tokens
                        .iter()
                        .filter(|record| record.token != token)
                        .cloned()
                        .collect();
                    let count = before - self.tokens.len();
                    if count == 0 {
                        log::warn!("Deletion requested for a token that is not listed");
                    }
                    removed += count;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Deletion channel disconnected");
                    break;
                }
            }
        }
        if removed > 0 {
            log::info!("Removed {removed} token(s), {} left", self.tokens.len());
        }
        removed
    }
}

fn delete_sender(sender: Sender<String>) -> DeleteCallback {
    DeleteCallback::new(move |token| {
        if sender.send(token.to_owned()).is_err() {
            log::warn!("Deletion dropped, receiver is gone");
        }
    })
}

fn load_tokens(path: &str) -> anyhow::Result<Vec<TokenRecord>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read token data from {path}"))?;
    let tokens = parse_token_records(&json)
        .with_context(|| format!("Failed to parse token data from {path}"))?;
    log::info!("Loaded {} token(s) from {path}", tokens.len());
    Ok(tokens)
}

/// Rows shown when no data file is configured.
fn sample_tokens(now: DateTime<Utc>) -> Vec<TokenRecord> {
    let now = now.timestamp();
    vec![
        TokenRecord::new("gt-L9kHV2lQqsXyaE5tfWwB2g", ["read:all", "exec:admin"])
            .with_name("laptop")
            .created_at(now - Duration::days(40).num_seconds())
            .expires_at(now + Duration::days(320).num_seconds()),
        TokenRecord::new("gt-Fh3bCg0RPnnWzfIcb1oJ8A", ["read:all"])
            .with_name("ci")
            .created_at(now - Duration::hours(5).num_seconds()),
        TokenRecord::new("gt-r0ZUq6DaS8OD9Ykhxj4iAQ", Vec::<String>::new())
            .with_name("scratch"),
    ]
}
