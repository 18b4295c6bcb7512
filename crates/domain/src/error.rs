//! # ドメイン層エラー定義
//!
//! ドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `InvalidId` | 400 Bad Request | 識別子の形式不正 |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// 識別子の形式が不正
    ///
    /// 24 桁の 16 進文字列として解釈できない値を受け取った場合に使用する。
    #[error("{label}の形式が不正です: {value}")]
    InvalidId {
        /// 識別子の種類（"社員 ID" など）
        label: &'static str,
        /// 受け取った値
        value: String,
    },
}
