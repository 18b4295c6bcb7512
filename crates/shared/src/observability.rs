//! # Observability 基盤
//!
//! トレーシング初期化とログ出力形式の設定を提供する。
//!
//! - `LOG_FORMAT`: `json` / `pretty` の切り替え（大文字小文字・前後の空白は無視）
//! - `RUST_LOG`: ログレベル（未設定時は [`DEFAULT_FILTER`]）
//!
//! サービス名は全ログの親となる `app` スパンの `service` フィールドに記録する。

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_FILTER: &str = "info,meibo=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON 形式（本番環境向け）
    Json,
    /// 人間が読みやすい形式（開発環境向け）
    #[default]
    Pretty,
}

impl LogFormat {
    /// 文字列からログ形式をパースする
    ///
    /// 未知の値は `None`。
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }

    /// `LOG_FORMAT` の値からログ形式を決める
    ///
    /// 未設定なら [`Pretty`](LogFormat::Pretty)。未知の値も `Pretty` に倒し、
    /// subscriber 初期化前のため stderr に警告を出す。
    pub fn from_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };
        Self::parse(raw).unwrap_or_else(|| {
            eprintln!("WARNING: unknown LOG_FORMAT={raw:?}, falling back to pretty");
            Self::default()
        })
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// サービス名（`app` スパンの `service` フィールド）
    pub service_name: String,
    /// ログ出力形式
    pub log_format:   LogFormat,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
        }
    }

    /// 環境変数 `LOG_FORMAT` から出力形式を読み取る
    pub fn from_env(service_name: impl Into<String>) -> Self {
        let log_format = LogFormat::from_value(std::env::var("LOG_FORMAT").ok().as_deref());
        Self::new(service_name, log_format)
    }
}

/// サービス全体の親スパンを作成する
pub fn service_span(service_name: &str) -> tracing::Span {
    tracing::info_span!("app", service = service_name)
}

/// トレーシングを初期化し、サービススパンに入る
///
/// `ErrorLayer` を登録し、インフラ層エラーの `SpanTrace` に
/// スパン情報が記録されるようにする。
///
/// 戻り値のガードを保持している間、以降のログはすべてサービススパンの子になる。
#[cfg(feature = "observability")]
pub fn init_tracing(config: TracingConfig) -> tracing::span::EnteredSpan {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();

    let guard = service_span(&config.service_name).entered();
    tracing::info!(log_format = ?config.log_format, "トレーシングを初期化しました");
    guard
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tracing_error::SpanTrace;
    use tracing_subscriber::layer::SubscriberExt as _;

    use super::*;

    #[rstest]
    #[case::json("json", Some(LogFormat::Json))]
    #[case::pretty("pretty", Some(LogFormat::Pretty))]
    #[case::大文字("JSON", Some(LogFormat::Json))]
    #[case::前後の空白(" json\n", Some(LogFormat::Json))]
    #[case::未知の値("yaml", None)]
    #[case::空文字列("", None)]
    fn test_parseはログ形式を判定する(#[case] input: &str, #[case] expected: Option<LogFormat>) {
        assert_eq!(LogFormat::parse(input), expected);
    }

    #[test]
    fn test_from_valueは未設定と未知の値でprettyになる() {
        assert_eq!(LogFormat::from_value(None), LogFormat::Pretty);
        assert_eq!(LogFormat::from_value(Some("xml")), LogFormat::Pretty);
        assert_eq!(LogFormat::from_value(Some("Json")), LogFormat::Json);
    }

    #[test]
    fn test_サービススパンにサービス名が記録される() {
        let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
        let _default = tracing::subscriber::set_default(subscriber);
        let config = TracingConfig::new("core-service", LogFormat::Json);

        let _entered = service_span(&config.service_name).entered();
        let trace = SpanTrace::capture().to_string();

        assert!(trace.contains("app"), "スパン名が含まれること: {trace}");
        assert!(
            trace.contains("core-service"),
            "サービス名が含まれること: {trace}"
        );
    }
}
