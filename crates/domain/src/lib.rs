//! # Meibo ドメイン層
//!
//! 社員名簿サービスのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: ストレージが採番する識別子を持つレコード（Employee, Department）
//! - **入力値**: 作成用（`NewEmployee` 等）と部分更新用（`EmployeePatch` 等）を分離
//! - **識別子**: 外部表現は 24 桁の 16 進文字列。ストレージ固有の型には依存しない
//!
//! ## 依存関係の方向
//!
//! ```text
//! core-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（MongoDB ドライバ）に一切依存しない。
//! 識別子のネイティブ形式への変換はインフラ層の境界で行う。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`object_id`] - 識別子の 16 進エンコード/デコード
//! - [`employee`] - 社員
//! - [`department`] - 部署
//!
//! ## 使用例
//!
//! ```rust
//! use meibo_domain::department::DepartmentId;
//!
//! let id = DepartmentId::parse("65f1a2b3c4d5e6f708192a3b").unwrap();
//! assert_eq!(id.to_string(), "65f1a2b3c4d5e6f708192a3b");
//! ```

#[macro_use]
mod macros;

pub mod department;
pub mod employee;
pub mod error;
pub mod object_id;

pub use error::DomainError;
