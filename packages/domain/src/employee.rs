//! # 従業員
//!
//! HRMS が管理する唯一のエンティティ。
//!
//! ## 不変条件
//!
//! - `EmployeeId` はストレージ層が採番する。サービスが生成した値を永続化に使わない
//! - 一度採番された `EmployeeId` は変更されない
//! - 置き換え可能なのは [`EmployeeProfile`]（name / salary / age）のみで、
//!   常に 3 フィールドまとめて置き換える（部分更新はない）
//! - name の空文字、salary / age の負数は受け付ける（範囲制約なし）

use std::str::FromStr;

use bson::oid::ObjectId;
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 従業員の一意識別子
///
/// ドキュメントストアのネイティブ識別子（12 バイトの ObjectId）をラップする。
/// 文字列表現は 24 文字の 16 進数。JSON では文字列としてシリアライズされる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{_0}")]
#[serde(into = "String", try_from = "String")]
pub struct EmployeeId(ObjectId);

impl EmployeeId {
   /// 新しい ID を生成する
   ///
   /// MongoDB 実装では使わない（`_id` はドライバ／サーバーが採番する）。
   /// インメモリ実装がストレージ採番を再現するために使う。
   pub fn new() -> Self {
      Self(ObjectId::new())
   }

   /// 24 文字の 16 進数文字列から ID を作成する
   ///
   /// 失敗時のメッセージはパーサーのエラー文字列そのまま。
   ///
   /// ```rust
   /// use hrms_domain::employee::EmployeeId;
   ///
   /// assert!(EmployeeId::parse_str("65f1c0ffee00000000000001").is_ok());
   /// assert!(EmployeeId::parse_str("not-an-id").is_err());
   /// ```
   pub fn parse_str(s: &str) -> Result<Self, DomainError> {
      ObjectId::parse_str(s)
         .map(Self)
         .map_err(|e| DomainError::Validation(e.to_string()))
   }

   /// ストアから取得した ObjectId から ID を作成する
   pub fn from_object_id(oid: ObjectId) -> Self {
      Self(oid)
   }

   /// 内部の ObjectId を取得する
   pub fn as_object_id(&self) -> &ObjectId {
      &self.0
   }

   /// 24 文字の 16 進数表現
   pub fn to_hex(self) -> String {
      self.0.to_hex()
   }
}

impl Default for EmployeeId {
   fn default() -> Self {
      Self::new()
   }
}

impl FromStr for EmployeeId {
   type Err = DomainError;

   fn from_str(s: &str) -> Result<Self, Self::Err> {
      Self::parse_str(s)
   }
}

impl From<EmployeeId> for String {
   fn from(id: EmployeeId) -> Self {
      id.to_hex()
   }
}

impl TryFrom<String> for EmployeeId {
   type Error = DomainError;

   fn try_from(value: String) -> Result<Self, Self::Error> {
      Self::parse_str(&value)
   }
}

/// 従業員の置き換え可能なフィールド群（値オブジェクト）
///
/// 作成時の入力であり、更新時の置き換え単位でもある。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmployeeProfile {
   pub name:   String,
   pub salary: f64,
   pub age:    f64,
}

impl EmployeeProfile {
   pub fn new(name: impl Into<String>, salary: f64, age: f64) -> Self {
      Self {
         name: name.into(),
         salary,
         age,
      }
   }
}

/// 従業員エンティティ
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
   id:      EmployeeId,
   profile: EmployeeProfile,
}

impl Employee {
   /// 採番済みの ID とプロフィールから復元する
   ///
   /// ID は必ずストアか、ストアに存在する ID を指すリクエストパスから来る。
   pub fn from_db(id: EmployeeId, profile: EmployeeProfile) -> Self {
      Self { id, profile }
   }

   pub fn id(&self) -> &EmployeeId {
      &self.id
   }

   pub fn name(&self) -> &str {
      &self.profile.name
   }

   pub fn salary(&self) -> f64 {
      self.profile.salary
   }

   pub fn age(&self) -> f64 {
      self.profile.age
   }

   pub fn profile(&self) -> &EmployeeProfile {
      &self.profile
   }

   /// プロフィールを丸ごと置き換えた新しいインスタンスを返す（ID は不変）
   pub fn with_profile(self, profile: EmployeeProfile) -> Self {
      Self {
         id: self.id,
         profile,
      }
   }
}
