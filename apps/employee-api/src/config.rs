//! # Employee API 設定
//!
//! 環境変数から Employee API サーバーの設定を読み込む。
//!
//! | 変数名 | デフォルト |
//! |--------|-----------|
//! | `EMPLOYEE_API_HOST` | `0.0.0.0` |
//! | `EMPLOYEE_API_PORT` | `3000` |
//! | `MONGODB_URI` | `mongodb://localhost:27017` |
//! | `MONGODB_DATABASE` | `fiber-hrms` |

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_MONGODB_DATABASE: &str = "fiber-hrms";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   /// 値を解釈できない
   #[error("{key} の値が不正です: {value:?} ({reason})")]
   Invalid {
      key:    &'static str,
      value:  String,
      reason: String,
   },
}

/// Employee API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeApiConfig {
   /// バインドアドレス
   pub host:             String,
   /// ポート番号
   pub port:             u16,
   /// MongoDB 接続 URI
   pub mongodb_uri:      String,
   /// データベース名
   pub mongodb_database: String,
}

impl EmployeeApiConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|key| std::env::var(key).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// 未設定の項目はデフォルト値を使う。
   pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
   where
      F: Fn(&str) -> Option<String>,
   {
      let port = match lookup("EMPLOYEE_API_PORT") {
         Some(value) => value.parse().map_err(|e: std::num::ParseIntError| {
            ConfigError::Invalid {
               key: "EMPLOYEE_API_PORT",
               value: value.clone(),
               reason: e.to_string(),
            }
         })?,
         None => DEFAULT_PORT,
      };

      Ok(Self {
         host: lookup("EMPLOYEE_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
         port,
         mongodb_uri: lookup("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string()),
         mongodb_database: lookup("MONGODB_DATABASE")
            .unwrap_or_else(|| DEFAULT_MONGODB_DATABASE.to_string()),
      })
   }

   /// `host:port` 形式のバインドアドレス
   pub fn bind_address(&self) -> String {
      format!("{}:{}", self.host, self.port)
   }
}

#[cfg(test)]
mod tests {
   use std::collections::HashMap;

   use pretty_assertions::assert_eq;

   use super::*;

   fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
      let map: HashMap<String, String> = pairs
         .iter()
         .map(|(k, v)| (k.to_string(), v.to_string()))
         .collect();
      move |key| map.get(key).cloned()
   }

   #[test]
   fn test_未設定ならデフォルト値を使う() {
      let config = EmployeeApiConfig::from_lookup(lookup_from(&[])).unwrap();

      assert_eq!(
         config,
         EmployeeApiConfig {
            host:             "0.0.0.0".to_string(),
            port:             3000,
            mongodb_uri:      "mongodb://localhost:27017".to_string(),
            mongodb_database: "fiber-hrms".to_string(),
         }
      );
   }

   #[test]
   fn test_環境変数の値が優先される() {
      let config = EmployeeApiConfig::from_lookup(lookup_from(&[
         ("EMPLOYEE_API_HOST", "127.0.0.1"),
         ("EMPLOYEE_API_PORT", "8080"),
         ("MONGODB_URI", "mongodb://db:27017"),
         ("MONGODB_DATABASE", "staff"),
      ]))
      .unwrap();

      assert_eq!(config.bind_address(), "127.0.0.1:8080");
      assert_eq!(config.mongodb_uri, "mongodb://db:27017");
      assert_eq!(config.mongodb_database, "staff");
   }

   #[test]
   fn test_不正なポートはエラーになる() {
      let result =
         EmployeeApiConfig::from_lookup(lookup_from(&[("EMPLOYEE_API_PORT", "not-a-port")]));

      assert!(matches!(
         result,
         Err(ConfigError::Invalid { key: "EMPLOYEE_API_PORT", .. })
      ));
   }
}
