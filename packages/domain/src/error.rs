//! # ドメイン層エラー定義
//!
//! ビジネスルール違反を表現するエラー型。API 層で HTTP ステータスに変換する。
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 識別子の形式不正 |

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// メッセージは下位ライブラリのパースエラー文字列をそのまま保持する。
   /// API 層はこの文字列をレスポンスボディとして返す。
   #[error("{0}")]
   Validation(String),
}
