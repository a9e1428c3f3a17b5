use serde::Deserialize;

use crate::Error;

/// Prefix of every environment variable read by [`TableConfig::from_env`],
/// joined to the field name with `_`.
pub const ENV_PREFIX: &str = "TOKEN_TABLE";

const DEFAULT_TABLE_ID: &str = "tokens";

/// Host configuration of the token table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Show the Name column instead of the Token column.
    pub include_name: bool,
    pub table_id: String,
    /// JSON file with the records to show. Built-in sample rows when unset.
    pub data_path: Option<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            include_name: false,
            table_id: DEFAULT_TABLE_ID.to_owned(),
            data_path: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    include_name: Option<bool>,
    table_id: Option<String>,
    data_path: Option<String>,
}

impl TableConfig {
    /// Reads `TOKEN_TABLE_*` variables from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(std::env::vars())
    }

    /// Reads configuration from `(name, value)` pairs. Names without the
    /// `TOKEN_TABLE_` prefix are ignored.
    pub fn from_vars<S: AsRef<str>>(vars: impl IntoIterator<Item = (S, S)>) -> Result<Self, Error> {
        let raw: RawConfig = serde_env::from_iter_with_prefix(vars, ENV_PREFIX)
            .map_err(|err| Error::Config(err.to_string()))?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        let RawConfig {
            include_name,
            table_id,
            data_path,
        } = raw;

        let table_id = match table_id {
            Some(id) if !id.is_empty() => id,
            _ => {
                log::info!("TOKEN_TABLE_TABLE_ID not set, defaulting to `{DEFAULT_TABLE_ID}`");
                DEFAULT_TABLE_ID.to_owned()
            }
        };

        Self {
            include_name: include_name.unwrap_or(false),
            table_id,
            data_path: data_path.filter(|path| !path.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = TableConfig::from_vars([("PATH", "/usr/bin")]).unwrap();
        assert_eq!(config, TableConfig::default());
        assert!(!config.include_name);
        assert_eq!(config.table_id, "tokens");
    }

    #[test]
    fn reads_prefixed_variables() {
        let config = TableConfig::from_vars([
            ("TOKEN_TABLE_INCLUDE_NAME", "true"),
            ("TOKEN_TABLE_TABLE_ID", "user-tokens"),
            ("TOKEN_TABLE_DATA_PATH", "tokens.json"),
            ("INCLUDE_NAME", "false"),
        ])
        .unwrap();

        assert!(config.include_name);
        assert_eq!(config.table_id, "user-tokens");
        assert_eq!(config.data_path.as_deref(), Some("tokens.json"));
    }

    #[test]
    fn invalid_flag_is_a_config_error() {
        let err = TableConfig::from_vars([("TOKEN_TABLE_INCLUDE_NAME", "sometimes")]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
