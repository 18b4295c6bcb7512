//! # DepartmentRepository
//!
//! 部署の永続化を担当するリポジトリ。
//!
//! ## ドキュメント形式
//!
//! ```json
//! { "_id": ObjectId("..."), "name": "Eng", "location": "NYC" }
//! ```

use async_trait::async_trait;
use meibo_domain::department::{Department, DepartmentId, DepartmentPatch, NewDepartment};
use mongodb::{
    Collection,
    bson::{Document, doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};

use crate::{
    db::{DEPARTMENT_COLLECTION, DocumentStore},
    error::InfraError,
};

/// 部署リポジトリトレイト
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// 識別子を採番して部署を挿入し、挿入した部署を返す
    async fn insert(&self, input: &NewDepartment) -> Result<Department, InfraError>;

    /// 全部署を取得する（順序はストレージ任せ）
    async fn find_all(&self) -> Result<Vec<Department>, InfraError>;

    /// ID で部署を検索する
    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, InfraError>;

    /// 部署を部分更新する
    ///
    /// 一致するドキュメントがなくてもエラーにしない。
    async fn update(&self, id: &DepartmentId, patch: &DepartmentPatch) -> Result<(), InfraError>;

    /// 部署を削除する
    ///
    /// 一致するドキュメントがなくてもエラーにしない。
    async fn delete(&self, id: &DepartmentId) -> Result<(), InfraError>;
}

/// `departments` コレクションのドキュメント
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DepartmentDocument {
    #[serde(rename = "_id")]
    id:       ObjectId,
    name:     String,
    location: String,
}

impl DepartmentDocument {
    fn new(id: ObjectId, input: &NewDepartment) -> Self {
        Self {
            id,
            name: input.name.clone(),
            location: input.location.clone(),
        }
    }

    fn into_entity(self) -> Department {
        Department::new(
            DepartmentId::from_bytes(self.id.bytes()),
            NewDepartment {
                name:     self.name,
                location: self.location,
            },
        )
    }
}

fn object_id(id: &DepartmentId) -> ObjectId {
    ObjectId::from_bytes(id.bytes())
}

/// 部分更新の `$set` ドキュメントを組み立てる
fn set_document(patch: &DepartmentPatch) -> Document {
    let mut set = Document::new();
    if let Some(name) = &patch.name {
        set.insert("name", name.as_str());
    }
    if let Some(location) = &patch.location {
        set.insert("location", location.as_str());
    }
    set
}

/// MongoDB 実装の DepartmentRepository
#[derive(Debug, Clone)]
pub struct MongoDepartmentRepository {
    collection: Collection<DepartmentDocument>,
}

impl MongoDepartmentRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(store: &DocumentStore) -> Self {
        Self {
            collection: store.collection(DEPARTMENT_COLLECTION),
        }
    }
}

#[async_trait]
impl DepartmentRepository for MongoDepartmentRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, input: &NewDepartment) -> Result<Department, InfraError> {
        let document = DepartmentDocument::new(ObjectId::new(), input);
        self.collection.insert_one(&document).await?;

        Ok(document.into_entity())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Department>, InfraError> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut departments = Vec::new();
        while cursor.advance().await? {
            departments.push(cursor.deserialize_current()?.into_entity());
        }

        Ok(departments)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, InfraError> {
        let document = self
            .collection
            .find_one(doc! { "_id": object_id(id) })
            .await?;

        Ok(document.map(DepartmentDocument::into_entity))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(&self, id: &DepartmentId, patch: &DepartmentPatch) -> Result<(), InfraError> {
        let set = set_document(patch);
        // 空の $set はサーバーがエラーにするため書き込み自体を省く
        if set.is_empty() {
            return Ok(());
        }

        self.collection
            .update_one(doc! { "_id": object_id(id) }, doc! { "$set": set })
            .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &DepartmentId) -> Result<(), InfraError> {
        self.collection
            .delete_one(doc! { "_id": object_id(id) })
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MongoDepartmentRepository>();
    }

    #[test]
    fn test_set_documentは指定したフィールドのみ含む() {
        let patch = DepartmentPatch {
            name:     None,
            location: Some("SF".to_string()),
        };

        assert_eq!(set_document(&patch), doc! { "location": "SF" });
    }

    #[test]
    fn test_空の部分更新ではset_documentが空になる() {
        assert!(set_document(&DepartmentPatch::default()).is_empty());
    }

    #[test]
    fn test_ドキュメントからエンティティへの変換で識別子が保たれる() {
        let oid = ObjectId::new();
        let document = DepartmentDocument {
            id:       oid,
            name:     "Eng".to_string(),
            location: "NYC".to_string(),
        };

        let department = document.into_entity();

        assert_eq!(department.id().to_string(), oid.to_hex());
        assert_eq!(object_id(department.id()), oid);
        assert_eq!(department.name(), "Eng");
        assert_eq!(department.location(), "NYC");
    }
}
