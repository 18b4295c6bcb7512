//! # 部署
//!
//! 部署エンティティと、その作成・部分更新の入力値を定義する。
//!
//! ## 使用例
//!
//! ```rust
//! use meibo_domain::department::{Department, DepartmentId, DepartmentPatch, NewDepartment};
//!
//! let department = Department::new(
//!     DepartmentId::from_bytes([1; 12]),
//!     NewDepartment {
//!         name:     "Eng".to_string(),
//!         location: "NYC".to_string(),
//!     },
//! );
//!
//! let moved = department.patched(&DepartmentPatch {
//!     location: Some("SF".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(moved.name(), "Eng");
//! assert_eq!(moved.location(), "SF");
//! ```

use serde::Deserialize;

define_object_id! {
    /// 部署の一意識別子
    pub struct DepartmentId {
        label: "部署 ID",
    }
}

/// 部署作成の入力値
///
/// 省略したフィールドは空文字列になる。識別子はストレージ層が採番する。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewDepartment {
    pub name:     String,
    pub location: String,
}

/// 部署の部分更新
///
/// `Some` のフィールドのみ書き換える。識別子は更新対象にならない。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DepartmentPatch {
    pub name:     Option<String>,
    pub location: Option<String>,
}

impl DepartmentPatch {
    /// 更新対象のフィールドを一つも持たないか
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none()
    }
}

/// 部署エンティティ
///
/// # 不変条件
///
/// - `id` は作成後に変化しない
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    id:       DepartmentId,
    name:     String,
    location: String,
}

impl Department {
    /// 採番済みの識別子と入力値から部署を作成する
    pub fn new(id: DepartmentId, input: NewDepartment) -> Self {
        Self {
            id,
            name: input.name,
            location: input.location,
        }
    }

    /// 部分更新を適用した部署を返す
    pub fn patched(self, patch: &DepartmentPatch) -> Self {
        Self {
            id:       self.id,
            name:     patch.name.clone().unwrap_or(self.name),
            location: patch.location.clone().unwrap_or(self.location),
        }
    }

    // Getter メソッド

    pub fn id(&self) -> &DepartmentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::DomainError;

    fn eng_department() -> Department {
        Department::new(
            DepartmentId::from_bytes([7; 12]),
            NewDepartment {
                name:     "Eng".to_string(),
                location: "NYC".to_string(),
            },
        )
    }

    #[test]
    fn test_部分更新でlocationのみ書き換わる() {
        let sut = eng_department();

        let patched = sut.clone().patched(&DepartmentPatch {
            name:     None,
            location: Some("SF".to_string()),
        });

        assert_eq!(patched.id(), sut.id());
        assert_eq!(patched.name(), "Eng");
        assert_eq!(patched.location(), "SF");
    }

    #[test]
    fn test_空の部分更新では何も変わらない() {
        let sut = eng_department();
        let patch = DepartmentPatch::default();

        assert!(patch.is_empty());
        assert_eq!(sut.clone().patched(&patch), sut);
    }

    #[test]
    fn test_部分更新のjsonで省略したフィールドはnoneになる() {
        let patch: DepartmentPatch = serde_json::from_str(r#"{"location":"SF"}"#).unwrap();

        assert_eq!(patch.name, None);
        assert_eq!(patch.location.as_deref(), Some("SF"));
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_作成入力のjsonにidが含まれていても無視される() {
        let input: NewDepartment = serde_json::from_str(
            r#"{"id":"65f1a2b3c4d5e6f708192a3b","name":"Eng","location":"NYC"}"#,
        )
        .unwrap();

        assert_eq!(
            input,
            NewDepartment {
                name:     "Eng".to_string(),
                location: "NYC".to_string(),
            }
        );
    }

    #[test]
    fn test_作成入力で省略したフィールドは空文字列になる() {
        let input: NewDepartment = serde_json::from_str(r#"{"name":"Eng"}"#).unwrap();

        assert_eq!(
            input,
            NewDepartment {
                name:     "Eng".to_string(),
                location: String::new(),
            }
        );
    }

    #[test]
    fn test_部署idのserializeは16進文字列になる() {
        let id = DepartmentId::from_bytes([0x0f; 12]);

        let json = serde_json::to_value(id).unwrap();

        assert_eq!(json, serde_json::json!("0f0f0f0f0f0f0f0f0f0f0f0f"));
    }

    #[test]
    fn test_部署idのparse失敗はinvalid_idになる() {
        let err = DepartmentId::parse("not-an-id").unwrap_err();

        assert!(matches!(
            err,
            DomainError::InvalidId { label: "部署 ID", ref value } if value == "not-an-id"
        ));
    }
}
