//! # Employee API エラー定義
//!
//! API 層のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! エラーボディはプレーンテキスト。JSON 形式のエンベロープは使わない。
//!
//! | バリアント | ステータス | ボディ |
//! |-----------|-----------|--------|
//! | `BadRequest` | 400 | パースエラーの原文 |
//! | `NotFound` | 404 | なし |
//! | `NothingDeleted` | 400 | なし |
//! | `Database` | 500 | ドライバのエラー原文 |
//! | `Internal` | 500 | なし（ログのみ） |

use axum::{
   extract::rejection::JsonRejection,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use hrms_domain::DomainError;
use hrms_infra::InfraError;
use thiserror::Error;

/// Employee API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// 不正なリクエスト（ボディまたはパスの ID が解釈できない）
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// 更新対象が存在しない
   #[error("リソースが見つかりません")]
   NotFound,

   /// 削除件数が 0 件
   #[error("削除対象がありません")]
   NothingDeleted,

   /// ストアのエラー（原文をクライアントに返す）
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),

   /// 内部エラー（詳細はログのみ）
   #[error("内部エラー: {0}")]
   Internal(String),
}

impl From<DomainError> for ApiError {
   fn from(err: DomainError) -> Self {
      match err {
         DomainError::Validation(msg) => ApiError::BadRequest(msg),
      }
   }
}

impl From<JsonRejection> for ApiError {
   fn from(rejection: JsonRejection) -> Self {
      ApiError::BadRequest(rejection.body_text())
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      match self {
         ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
         ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
         ApiError::NothingDeleted => StatusCode::BAD_REQUEST.into_response(),
         ApiError::Database(e) => {
            tracing::error!(
               error.kind = ?e.kind(),
               span_trace = %e.span_trace(),
               "ストア操作に失敗しました: {}",
               e
            );
            (StatusCode::INTERNAL_SERVER_ERROR, e.detail()).into_response()
         }
         ApiError::Internal(msg) => {
            tracing::error!("内部エラー: {}", msg);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
         }
      }
   }
}

#[cfg(test)]
mod tests {
   use axum::body::to_bytes;
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   async fn body_text(response: Response) -> String {
      let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
      String::from_utf8(bytes.to_vec()).unwrap()
   }

   #[rstest]
   #[case(ApiError::BadRequest("invalid hex".to_string()), StatusCode::BAD_REQUEST, "invalid hex")]
   #[case(ApiError::NotFound, StatusCode::NOT_FOUND, "")]
   #[case(ApiError::NothingDeleted, StatusCode::BAD_REQUEST, "")]
   #[case(ApiError::Internal("boom".to_string()), StatusCode::INTERNAL_SERVER_ERROR, "")]
   #[tokio::test]
   async fn test_各バリアントのステータスとボディ(
      #[case] error: ApiError,
      #[case] expected_status: StatusCode,
      #[case] expected_body: &str,
   ) {
      let response = error.into_response();

      assert_eq!(response.status(), expected_status);
      assert_eq!(body_text(response).await, expected_body);
   }

   #[tokio::test]
   async fn test_データベースエラーは原文をボディに含む() {
      let error = ApiError::from(InfraError::unexpected("server selection timeout"));

      let response = error.into_response();

      assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
      assert_eq!(body_text(response).await, "server selection timeout");
   }

   #[test]
   fn test_ドメインのバリデーションエラーはbad_requestになる() {
      let error = ApiError::from(DomainError::Validation("bad id".to_string()));

      assert!(matches!(error, ApiError::BadRequest(msg) if msg == "bad id"));
   }
}
