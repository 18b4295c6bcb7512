//! # 社員
//!
//! 社員エンティティと、その作成・部分更新の入力値を定義する。
//!
//! 所属部署は [`DepartmentId`] で参照するが、参照整合性は検証しない。
//! 存在しない部署を指す社員も作成・更新できる。

use serde::Deserialize;

use crate::department::DepartmentId;

define_object_id! {
    /// 社員の一意識別子
    pub struct EmployeeId {
        label: "社員 ID",
    }
}

/// 社員作成の入力値
///
/// 省略したフィールドはゼロ値（空文字列、`0.0`、`false`、全ゼロの部署 ID）になる。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewEmployee {
    pub first_name:    String,
    pub last_name:     String,
    pub position:      String,
    pub salary:        f64,
    pub full_time:     bool,
    pub department_id: DepartmentId,
}

/// 社員の部分更新
///
/// 更新可能な 6 フィールドのうち `Some` のもののみ書き換える。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EmployeePatch {
    pub first_name:    Option<String>,
    pub last_name:     Option<String>,
    pub position:      Option<String>,
    pub salary:        Option<f64>,
    pub full_time:     Option<bool>,
    pub department_id: Option<DepartmentId>,
}

impl EmployeePatch {
    /// 更新対象のフィールドを一つも持たないか
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.position.is_none()
            && self.salary.is_none()
            && self.full_time.is_none()
            && self.department_id.is_none()
    }
}

/// 社員エンティティ
///
/// # 不変条件
///
/// - `id` は作成後に変化しない
/// - `salary` の値域は検証しない（負数も受け付ける）
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    id:            EmployeeId,
    first_name:    String,
    last_name:     String,
    position:      String,
    salary:        f64,
    full_time:     bool,
    department_id: DepartmentId,
}

impl Employee {
    /// 採番済みの識別子と入力値から社員を作成する
    pub fn new(id: EmployeeId, input: NewEmployee) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            position: input.position,
            salary: input.salary,
            full_time: input.full_time,
            department_id: input.department_id,
        }
    }

    /// 部分更新を適用した社員を返す
    pub fn patched(self, patch: &EmployeePatch) -> Self {
        Self {
            id:            self.id,
            first_name:    patch.first_name.clone().unwrap_or(self.first_name),
            last_name:     patch.last_name.clone().unwrap_or(self.last_name),
            position:      patch.position.clone().unwrap_or(self.position),
            salary:        patch.salary.unwrap_or(self.salary),
            full_time:     patch.full_time.unwrap_or(self.full_time),
            department_id: patch.department_id.unwrap_or(self.department_id),
        }
    }

    // Getter メソッド

    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn full_time(&self) -> bool {
        self.full_time
    }

    pub fn department_id(&self) -> &DepartmentId {
        &self.department_id
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn employee() -> Employee {
        Employee::new(
            EmployeeId::from_bytes([1; 12]),
            NewEmployee {
                first_name:    "Ada".to_string(),
                last_name:     "Lovelace".to_string(),
                position:      "Engineer".to_string(),
                salary:        120_000.5,
                full_time:     true,
                department_id: DepartmentId::from_bytes([2; 12]),
            },
        )
    }

    #[rstest]
    fn test_部分更新でsalaryのみ書き換わる(employee: Employee) {
        let patched = employee.clone().patched(&EmployeePatch {
            salary: Some(99.0),
            ..Default::default()
        });

        assert_eq!(patched.salary(), 99.0);
        assert_eq!(patched.id(), employee.id());
        assert_eq!(patched.first_name(), "Ada");
        assert_eq!(patched.department_id(), employee.department_id());
    }

    #[rstest]
    fn test_全フィールドの部分更新でidは変わらない(employee: Employee) {
        let new_department = DepartmentId::from_bytes([9; 12]);
        let patch = EmployeePatch {
            first_name:    Some("Grace".to_string()),
            last_name:     Some("Hopper".to_string()),
            position:      Some("Admiral".to_string()),
            salary:        Some(-1.0),
            full_time:     Some(false),
            department_id: Some(new_department),
        };

        let patched = employee.clone().patched(&patch);

        assert_eq!(patched.id(), employee.id());
        assert_eq!(patched.first_name(), "Grace");
        assert_eq!(patched.last_name(), "Hopper");
        assert_eq!(patched.position(), "Admiral");
        assert_eq!(patched.salary(), -1.0);
        assert!(!patched.full_time());
        assert_eq!(patched.department_id(), &new_department);
    }

    #[test]
    fn test_空の部分更新はis_emptyになる() {
        assert!(EmployeePatch::default().is_empty());
        assert!(
            !EmployeePatch {
                full_time: Some(false),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn test_作成入力のjsonをデコードできる() {
        let input: NewEmployee = serde_json::from_value(serde_json::json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "position": "Engineer",
            "salary": 100,
            "full_time": true,
            "department_id": "0202020202020202020202AB"
        }))
        .unwrap();

        assert_eq!(input.salary, 100.0);
        assert_eq!(input.department_id.to_string(), "0202020202020202020202ab");
    }

    #[rstest]
    #[case::department_idの形式不正(serde_json::json!({
        "first_name": "Ada", "last_name": "L", "position": "E",
        "salary": 1.0, "full_time": true, "department_id": "xyz"
    }))]
    #[case::salaryが文字列(serde_json::json!({
        "first_name": "Ada", "last_name": "L", "position": "E",
        "salary": "1.0", "full_time": true, "department_id": "020202020202020202020202"
    }))]
    #[case::文字列フィールドにnull(serde_json::json!({
        "first_name": null
    }))]
    fn test_作成入力のjsonが型に合わないとデコードに失敗する(#[case] body: serde_json::Value) {
        assert!(serde_json::from_value::<NewEmployee>(body).is_err());
    }

    #[test]
    fn test_作成入力で省略したフィールドはゼロ値になる() {
        let input: NewEmployee =
            serde_json::from_value(serde_json::json!({ "first_name": "Ada" })).unwrap();

        assert_eq!(
            input,
            NewEmployee {
                first_name:    "Ada".to_string(),
                last_name:     String::new(),
                position:      String::new(),
                salary:        0.0,
                full_time:     false,
                department_id: DepartmentId::from_bytes([0; 12]),
            }
        );
    }
}
