//! # Observability 基盤
//!
//! トレーシング初期化、ログ出力形式、Request ID 付与を提供する。
//!
//! - `LOG_FORMAT=json` で JSON ログ（本番向け）、それ以外は Pretty
//! - `RUST_LOG` 未設定時のフィルタは `"info,hrms=debug"`
//! - Request ID は UUID v7。クライアントが `X-Request-Id` を送った場合はそれを使う

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
   /// 1 行 1 JSON（集約基盤向け）
   Json,
   /// 端末向け
   #[default]
   Pretty,
}

impl LogFormat {
   /// `LOG_FORMAT` の値から決定する
   ///
   /// 未設定なら Pretty。不明な値も Pretty にして stderr に警告する
   /// （subscriber 初期化前なので tracing は使えない）。
   pub fn from_value(value: Option<&str>) -> Self {
      match value.map(str::trim) {
         Some("json") => Self::Json,
         Some("pretty") | None => Self::Pretty,
         Some(other) => {
            eprintln!("WARNING: unknown LOG_FORMAT={other:?}, falling back to pretty");
            Self::Pretty
         }
      }
   }

   pub fn from_env() -> Self {
      Self::from_value(std::env::var("LOG_FORMAT").ok().as_deref())
   }
}

/// トレーシングを初期化する
///
/// プロセス起動時に一度だけ呼び出す。`service` は起動ログにのみ出力する。
#[cfg(feature = "observability")]
pub fn init_tracing(service: &str, format: LogFormat) {
   use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

   let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| "info,hrms=debug".into());

   let fmt_layer = match format {
      LogFormat::Json => tracing_subscriber::fmt::layer()
         .json()
         .flatten_event(true)
         .with_current_span(true)
         .with_span_list(false)
         .boxed(),
      LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
   };

   // ErrorLayer は InfraError の SpanTrace キャプチャに必要
   tracing_subscriber::registry()
      .with(env_filter)
      .with(fmt_layer)
      .with(tracing_error::ErrorLayer::default())
      .init();

   tracing::info!(service, ?format, "トレーシングを初期化しました");
}

/// リクエスト ID ヘッダー名
#[cfg(feature = "observability")]
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v7 で Request ID を生成する `MakeRequestId` 実装
///
/// `SetRequestIdLayer::x_request_id(MakeRequestUuidV7)` として使用する。
/// 既に `X-Request-Id` が付いているリクエストには呼ばれない。
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
   fn make_request_id<B>(
      &mut self,
      _request: &http::Request<B>,
   ) -> Option<tower_http::request_id::RequestId> {
      let id = uuid::Uuid::now_v7().to_string();
      http::HeaderValue::from_str(&id)
         .ok()
         .map(tower_http::request_id::RequestId::new)
   }
}

/// `TraceLayer::make_span_with` 用のスパン生成関数
///
/// `SetRequestIdLayer` の内側で使うことで、リクエスト中のすべてのログに
/// `request_id` が付与される。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
   let request_id = request
      .headers()
      .get(REQUEST_ID_HEADER)
      .and_then(|v| v.to_str().ok())
      .unwrap_or("-");

   tracing::info_span!(
      "request",
      method = %request.method(),
      uri = %request.uri(),
      request_id = %request_id,
   )
}
