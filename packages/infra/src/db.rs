//! # MongoDB 接続管理（Storage Gateway）
//!
//! ドキュメントストアへの接続を 1 つ保持し、従業員コレクションを公開する。
//!
//! ## 設計方針
//!
//! - **起動時に一度だけ接続**: [`MongoGateway::connect`] は `ping` まで行い、
//!   到達できないストアはその場でエラーにする（呼び出し側で起動を中止する）
//! - **明示的な受け渡し**: グローバル変数は使わず、`main` で作ったゲートウェイを
//!   リポジトリとハンドラの State に渡す
//! - **共有可能**: `mongodb::Client` は内部でコネクションプールを持ち、
//!   Clone しても同じプールを共有する。並行リクエストから安全に使える
//! - **再接続・リトライなし**: ドライバの既定動作以上のことはしない
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use hrms_infra::db::MongoGateway;
//!
//! let gateway = MongoGateway::connect("mongodb://localhost:27017", "fiber-hrms").await?;
//! let employees = gateway.employees();
//! ```

use mongodb::{Client, Collection, Database, bson::doc};

use crate::{error::InfraError, repository::EmployeeDocument};

/// 従業員レコードを格納するコレクション名
pub const EMPLOYEE_COLLECTION: &str = "employees";

/// ドキュメントストアへのゲートウェイ
#[derive(Debug, Clone)]
pub struct MongoGateway {
   database: Database,
}

impl MongoGateway {
   /// 作成済みのクライアントから作成する（I/O なし）
   ///
   /// ドライバは最初の操作まで接続を確立しない。
   pub fn new(client: &Client, database_name: &str) -> Self {
      Self {
         database: client.database(database_name),
      }
   }

   /// 接続 URI からクライアントを作成し、`ping` で疎通を確認する
   ///
   /// # 引数
   ///
   /// * `uri` - `mongodb://host:port` 形式の接続 URI
   /// * `database_name` - 使用するデータベース名
   ///
   /// # エラー
   ///
   /// - URI のパースエラー
   /// - サーバー選択タイムアウト（ストアに到達できない）
   pub async fn connect(uri: &str, database_name: &str) -> Result<Self, InfraError> {
      let client = Client::with_uri_str(uri).await?;
      let gateway = Self::new(&client, database_name);
      gateway.ping().await?;
      Ok(gateway)
   }

   /// サーバーに `ping` コマンドを送る
   #[tracing::instrument(skip_all, level = "debug")]
   pub async fn ping(&self) -> Result<(), InfraError> {
      self.database.run_command(doc! { "ping": 1 }).await?;
      Ok(())
   }

   /// 従業員コレクションのハンドル
   pub fn employees(&self) -> Collection<EmployeeDocument> {
      self.database.collection(EMPLOYEE_COLLECTION)
   }

   /// データベース名
   pub fn database_name(&self) -> &str {
      self.database.name()
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_ゲートウェイはsendとsyncを実装している() {
      fn assert_send_sync<T: Send + Sync + Clone>() {}
      assert_send_sync::<MongoGateway>();
   }

   #[tokio::test]
   async fn test_不正なuriでconnectはエラーを返す() {
      let result = MongoGateway::connect("not-a-mongodb-uri", "hrms").await;
      assert!(result.is_err());
   }

   #[tokio::test]
   async fn test_newは指定したデータベースと従業員コレクションを使う() {
      let client = Client::with_uri_str("mongodb://localhost:27017").await.unwrap();
      let gateway = MongoGateway::new(&client, "hrms_test");

      assert_eq!(gateway.database_name(), "hrms_test");
      assert_eq!(gateway.employees().name(), EMPLOYEE_COLLECTION);
   }
}
