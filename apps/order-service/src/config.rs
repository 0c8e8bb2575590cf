//! # Order Service 設定
//!
//! 環境変数から Order Service サーバーの設定を読み込む。

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// 設定読み込みのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   #[error("{0} が設定されていません")]
   Missing(&'static str),

   #[error("{name} の値が不正です: {value:?}")]
   Invalid { name: &'static str, value: String },
}

/// Order Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderServiceConfig {
   /// バインドアドレス
   pub host:            String,
   /// ポート番号
   pub port:            u16,
   /// データベース接続 URL
   pub database_url:    String,
   /// 接続プールの最大接続数
   pub max_connections: u32,
}

impl OrderServiceConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// | 変数名 | 必須 | デフォルト |
   /// |--------|------|-----------|
   /// | `ORDER_SERVICE_HOST` | No | `0.0.0.0` |
   /// | `ORDER_SERVICE_PORT` | **Yes** | - |
   /// | `DATABASE_URL` | **Yes** | - |
   /// | `DATABASE_MAX_CONNECTIONS` | No | `10` |
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

      let port = parse_var("ORDER_SERVICE_PORT", required("ORDER_SERVICE_PORT")?)?;
      let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
         Some(value) => parse_var("DATABASE_MAX_CONNECTIONS", value)?,
         None => DEFAULT_MAX_CONNECTIONS,
      };

      Ok(Self {
         host: lookup("ORDER_SERVICE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
         port,
         database_url: required("DATABASE_URL")?,
         max_connections,
      })
   }

   /// `host:port` 形式のバインドアドレス
   pub fn bind_address(&self) -> String {
      format!("{}:{}", self.host, self.port)
   }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
   value
      .parse()
      .map_err(|_| ConfigError::Invalid { name, value })
}

#[cfg(test)]
mod tests {
   use std::collections::HashMap;

   use pretty_assertions::assert_eq;

   use super::*;

   fn load(vars: &[(&str, &str)]) -> Result<OrderServiceConfig, ConfigError> {
      let vars: HashMap<String, String> = vars
         .iter()
         .map(|(k, v)| (k.to_string(), v.to_string()))
         .collect();
      OrderServiceConfig::from_lookup(|name| vars.get(name).cloned())
   }

   #[test]
   fn test_必須項目のみでデフォルト値が補われる() {
      let config = load(&[
         ("ORDER_SERVICE_PORT", "8080"),
         ("DATABASE_URL", "postgres://localhost/orderflow"),
      ])
      .unwrap();

      assert_eq!(
         config,
         OrderServiceConfig {
            host:            "0.0.0.0".to_string(),
            port:            8080,
            database_url:    "postgres://localhost/orderflow".to_string(),
            max_connections: 10,
         }
      );
      assert_eq!(config.bind_address(), "0.0.0.0:8080");
   }

   #[test]
   fn test_任意項目を上書きできる() {
      let config = load(&[
         ("ORDER_SERVICE_HOST", "127.0.0.1"),
         ("ORDER_SERVICE_PORT", "3000"),
         ("DATABASE_URL", "postgres://db/orders"),
         ("DATABASE_MAX_CONNECTIONS", "2"),
      ])
      .unwrap();

      assert_eq!(config.bind_address(), "127.0.0.1:3000");
      assert_eq!(config.max_connections, 2);
   }

   #[test]
   fn test_ポート未設定はmissingエラーになる() {
      let result = load(&[("DATABASE_URL", "postgres://localhost/orderflow")]);

      assert_eq!(result, Err(ConfigError::Missing("ORDER_SERVICE_PORT")));
   }

   #[test]
   fn test_database_url未設定はmissingエラーになる() {
      let result = load(&[("ORDER_SERVICE_PORT", "8080")]);

      assert_eq!(result, Err(ConfigError::Missing("DATABASE_URL")));
   }

   #[test]
   fn test_数値でないポートはinvalidエラーになる() {
      let result = load(&[
         ("ORDER_SERVICE_PORT", "eighty"),
         ("DATABASE_URL", "postgres://localhost/orderflow"),
      ]);

      assert_eq!(
         result,
         Err(ConfigError::Invalid {
            name:  "ORDER_SERVICE_PORT",
            value: "eighty".to_string(),
         })
      );
   }
}
