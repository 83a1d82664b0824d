//! # EmployeeRepository
//!
//! 従業員レコードの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - 各メソッドはストアへのネイティブ操作 1 回（1 ラウンドトリップ）に対応する
//! - 変換以外のロジックは持たない。エラー → HTTP の対応はユースケース層の責務
//! - クライアント側のリトライはしない
//!
//! ## 永続化形式
//!
//! ```text
//! { _id: ObjectId, name: string, salary: double, age: double }
//! ```

use async_trait::async_trait;
use bson::oid::ObjectId;
use futures::TryStreamExt;
use hrms_domain::employee::{Employee, EmployeeId, EmployeeProfile};
use mongodb::{Collection, bson::doc};
use serde::{Deserialize, Serialize};

use crate::{db::MongoGateway, error::InfraError};

/// 従業員リポジトリトレイト
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
   /// 全件取得する
   ///
   /// 順序はストアのカーソル順（保証なし）。0 件なら空の Vec を返す。
   async fn find_all(&self) -> Result<Vec<Employee>, InfraError>;

   /// 新しいドキュメントとして挿入し、ストアが採番した ID を返す
   async fn insert(&self, profile: &EmployeeProfile) -> Result<EmployeeId, InfraError>;

   /// ID で検索する
   async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, InfraError>;

   /// name / salary / age を 1 回のアトミック操作で置き換える
   ///
   /// `_id` は更新対象に含めない。一致するドキュメントがあれば `true`。
   async fn replace_profile(
      &self,
      id: &EmployeeId,
      profile: &EmployeeProfile,
   ) -> Result<bool, InfraError>;

   /// 最大 1 件削除し、削除件数を返す
   async fn delete(&self, id: &EmployeeId) -> Result<u64, InfraError>;
}

/// `employees` コレクションのドキュメント
///
/// 欠けているフィールドはゼロ値でデコードする。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDocument {
   /// 挿入時は `None`（`_id` はストア側で採番させる）
   #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
   pub id:     Option<ObjectId>,
   #[serde(default)]
   pub name:   String,
   #[serde(default)]
   pub salary: f64,
   #[serde(default)]
   pub age:    f64,
}

impl EmployeeDocument {
   /// 挿入用のドキュメントを作成する（`_id` なし）
   pub fn for_insert(profile: &EmployeeProfile) -> Self {
      Self {
         id:     None,
         name:   profile.name.clone(),
         salary: profile.salary,
         age:    profile.age,
      }
   }
}

impl TryFrom<EmployeeDocument> for Employee {
   type Error = InfraError;

   fn try_from(document: EmployeeDocument) -> Result<Self, Self::Error> {
      let Some(oid) = document.id else {
         return Err(InfraError::unexpected("ドキュメントに _id がありません"));
      };
      Ok(Employee::from_db(
         EmployeeId::from_object_id(oid),
         EmployeeProfile::new(document.name, document.salary, document.age),
      ))
   }
}

/// `_id` による検索フィルタ
fn by_id(id: &EmployeeId) -> bson::Document {
   doc! { "_id": *id.as_object_id() }
}

/// MongoDB 実装の EmployeeRepository
#[derive(Debug, Clone)]
pub struct MongoEmployeeRepository {
   collection: Collection<EmployeeDocument>,
}

impl MongoEmployeeRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(gateway: &MongoGateway) -> Self {
      Self {
         collection: gateway.employees(),
      }
   }
}

#[async_trait]
impl EmployeeRepository for MongoEmployeeRepository {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
      let cursor = self.collection.find(doc! {}).await?;
      let documents: Vec<EmployeeDocument> = cursor.try_collect().await?;

      documents.into_iter().map(Employee::try_from).collect()
   }

   #[tracing::instrument(skip_all, level = "debug")]
   async fn insert(&self, profile: &EmployeeProfile) -> Result<EmployeeId, InfraError> {
      let result = self
         .collection
         .insert_one(EmployeeDocument::for_insert(profile))
         .await?;

      let oid = result.inserted_id.as_object_id().ok_or_else(|| {
         InfraError::unexpected(format!(
            "挿入結果の _id が ObjectId ではありません: {}",
            result.inserted_id
         ))
      })?;

      Ok(EmployeeId::from_object_id(oid))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, InfraError> {
      let document = self.collection.find_one(by_id(id)).await?;

      document.map(Employee::try_from).transpose()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn replace_profile(
      &self,
      id: &EmployeeId,
      profile: &EmployeeProfile,
   ) -> Result<bool, InfraError> {
      let update = doc! {
         "$set": {
            "name": profile.name.as_str(),
            "salary": profile.salary,
            "age": profile.age,
         }
      };

      let result = self.collection.update_one(by_id(id), update).await?;

      Ok(result.matched_count > 0)
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn delete(&self, id: &EmployeeId) -> Result<u64, InfraError> {
      let result = self.collection.delete_one(by_id(id)).await?;

      Ok(result.deleted_count)
   }
}
