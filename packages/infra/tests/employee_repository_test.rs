//! MongoEmployeeRepository 統合テスト
//!
//! 実際の MongoDB を使用するため `#[ignore]` を付けている。
//! テストごとに専用のデータベースを作成し、終了時に削除する。
//!
//! 実行方法:
//! ```bash
//! docker run -d -p 27017:27017 mongo:7
//! MONGODB_URI=mongodb://localhost:27017 cargo test -p hrms-infra --test employee_repository_test -- --ignored
//! ```

use bson::oid::ObjectId;
use hrms_domain::employee::{EmployeeId, EmployeeProfile};
use hrms_infra::{
   db::MongoGateway,
   repository::{EmployeeRepository, MongoEmployeeRepository},
};
use mongodb::Client;
use pretty_assertions::assert_eq;

/// テスト専用データベース
struct TestDatabase {
   client:   Client,
   gateway:  MongoGateway,
   database: String,
}

impl TestDatabase {
   async fn new() -> Self {
      dotenvy::dotenv().ok();
      let uri =
         std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
      let database = format!("hrms_test_{}", ObjectId::new().to_hex());

      let client = Client::with_uri_str(&uri).await.expect("クライアント作成に失敗");
      let gateway = MongoGateway::connect(&uri, &database)
         .await
         .expect("MongoDB に接続できません");

      Self {
         client,
         gateway,
         database,
      }
   }

   fn repository(&self) -> MongoEmployeeRepository {
      MongoEmployeeRepository::new(&self.gateway)
   }

   async fn cleanup(self) {
      self.client
         .database(&self.database)
         .drop()
         .await
         .expect("テスト用データベースの削除に失敗");
   }
}

#[tokio::test]
#[ignore = "MongoDB が必要"]
async fn test_空のコレクションでfind_allは空のvecを返す() {
   let db = TestDatabase::new().await;
   let sut = db.repository();

   let employees = sut.find_all().await.unwrap();

   assert!(employees.is_empty());
   db.cleanup().await;
}

#[tokio::test]
#[ignore = "MongoDB が必要"]
async fn test_insertでストアが採番したidで検索できる() {
   let db = TestDatabase::new().await;
   let sut = db.repository();
   let profile = EmployeeProfile::new("Alice", 1000.0, 30.0);

   let id = sut.insert(&profile).await.unwrap();
   let found = sut.find_by_id(&id).await.unwrap().unwrap();

   assert_eq!(found.id(), &id);
   assert_eq!(found.profile(), &profile);
   db.cleanup().await;
}

#[tokio::test]
#[ignore = "MongoDB が必要"]
async fn test_replace_profileで3フィールドが置き換わりidは変わらない() {
   let db = TestDatabase::new().await;
   let sut = db.repository();
   let id = sut
      .insert(&EmployeeProfile::new("Alice", 1000.0, 30.0))
      .await
      .unwrap();

   let matched = sut
      .replace_profile(&id, &EmployeeProfile::new("Bob", 2000.0, 40.0))
      .await
      .unwrap();

   assert!(matched);
   let employees = sut.find_all().await.unwrap();
   assert_eq!(employees.len(), 1);
   assert_eq!(employees[0].id(), &id);
   assert_eq!(employees[0].name(), "Bob");
   assert_eq!(employees[0].salary(), 2000.0);
   assert_eq!(employees[0].age(), 40.0);
   db.cleanup().await;
}

#[tokio::test]
#[ignore = "MongoDB が必要"]
async fn test_存在しないidのreplace_profileはfalseを返す() {
   let db = TestDatabase::new().await;
   let sut = db.repository();

   let matched = sut
      .replace_profile(&EmployeeId::new(), &EmployeeProfile::default())
      .await
      .unwrap();

   assert!(!matched);
   db.cleanup().await;
}

#[tokio::test]
#[ignore = "MongoDB が必要"]
async fn test_deleteは1件目で1を返し2回目は0を返す() {
   let db = TestDatabase::new().await;
   let sut = db.repository();
   let id = sut.insert(&EmployeeProfile::default()).await.unwrap();

   assert_eq!(sut.delete(&id).await.unwrap(), 1);
   assert_eq!(sut.delete(&id).await.unwrap(), 0);
   assert!(sut.find_by_id(&id).await.unwrap().is_none());
   db.cleanup().await;
}
