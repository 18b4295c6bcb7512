/// ストレージ採番の 12 バイト識別子型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`[u8; 12]` をラップ）
/// - `derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)`（`Default` は全ゼロ）
/// - `parse()`: 24 桁の 16 進文字列から復元
/// - `from_bytes()` / `bytes()`: ネイティブ形式との相互変換
/// - `Display` / `FromStr`: 小文字 16 進表現
/// - `Serialize` / `Deserialize`: 16 進文字列として入出力
///
/// # 使用例
///
/// ```rust
/// use meibo_domain::employee::EmployeeId;
///
/// let id = EmployeeId::from_bytes([0xab; 12]);
/// let restored = EmployeeId::parse(&id.to_string()).unwrap();
/// assert_eq!(id, restored);
/// ```
macro_rules! define_object_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $Name([u8; $crate::object_id::ID_LEN]);

        impl $Name {
            /// 16 進文字列から ID を復元する
            ///
            /// 24 桁の 16 進数（大文字小文字不問）以外はエラー。
            pub fn parse(value: &str) -> Result<Self, $crate::DomainError> {
                $crate::object_id::decode_hex(value)
                    .map(Self)
                    .ok_or_else(|| $crate::DomainError::InvalidId {
                        label: $label,
                        value: value.to_string(),
                    })
            }

            /// ネイティブ形式のバイト列から ID を作成する
            pub fn from_bytes(bytes: [u8; $crate::object_id::ID_LEN]) -> Self {
                Self(bytes)
            }

            /// ネイティブ形式のバイト列を取得する
            pub fn bytes(&self) -> [u8; $crate::object_id::ID_LEN] {
                self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::object_id::encode_hex(&self.0))
            }
        }

        impl std::str::FromStr for $Name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl serde::Serialize for $Name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $Name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Self::parse(&value).map_err(serde::de::Error::custom)
            }
        }
    };
}
