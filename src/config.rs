use std::env;
use thiserror::Error;

use crate::domain::LateFeePerDay;

/// 設定値の読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be set")]
    Missing { name: &'static str },

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// 貸出可能な登録番号の選び方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopySelection {
    /// 先頭の1冊
    First,
    /// 乱数で1冊（シード指定で再現可能）
    Random { seed: Option<u64> },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_address: String,
    /// 新規貸出に適用する1日あたりの延滞料金
    pub late_fee_per_day: LateFeePerDay,
    pub copy_selection: CopySelection,
}

impl Config {
    /// 環境変数（と `.env`）から読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から読み込む
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing {
            name: "DATABASE_URL",
        })?;

        let database_max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?;
        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let late_fee_per_day = LateFeePerDay::new(parse_or(&lookup, "LATE_FEE_PER_DAY", 5)?);

        let seed = match lookup("COPY_SELECTION_SEED") {
            Some(value) => Some(parse_value("COPY_SELECTION_SEED", value)?),
            None => None,
        };
        let copy_selection = match lookup("COPY_SELECTION").as_deref() {
            None | Some("random") => CopySelection::Random { seed },
            Some("first") => CopySelection::First,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "COPY_SELECTION",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            database_url,
            database_max_connections,
            bind_address,
            late_fee_per_day,
            copy_selection,
        })
    }
}

fn parse_value<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}

fn parse_or<T, F>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => parse_value(name, value),
        None => Ok(default),
    }
}
