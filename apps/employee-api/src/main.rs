//! # Employee API サーバー
//!
//! 従業員レコードを MongoDB に保存する CRUD API。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `EMPLOYEE_API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `EMPLOYEE_API_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `MONGODB_URI` | No | MongoDB 接続 URI（デフォルト: `mongodb://localhost:27017`） |
//! | `MONGODB_DATABASE` | No | データベース名（デフォルト: `fiber-hrms`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! docker run -d -p 27017:27017 mongo:7
//! cargo run -p hrms-employee-api
//! ```
//!
//! 起動時に MongoDB へ ping できなければ、リクエストを受け付けずに終了する。

use std::sync::Arc;

use anyhow::Context as _;
use hrms_employee_api::{
   build_app,
   config::EmployeeApiConfig,
   handler::{EmployeeState, ReadinessState},
   usecase::EmployeeUseCaseImpl,
};
use hrms_infra::{db::MongoGateway, repository::MongoEmployeeRepository};
use hrms_shared::observability::{LogFormat, init_tracing};
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   init_tracing("employee-api", LogFormat::from_env());

   let config = EmployeeApiConfig::from_env().context("設定の読み込みに失敗しました")?;

   tracing::info!(
      "Employee API サーバーを起動します: {}",
      config.bind_address()
   );

   let gateway = MongoGateway::connect(&config.mongodb_uri, &config.mongodb_database)
      .await
      .context("MongoDB への接続に失敗しました")?;
   tracing::info!(database = %gateway.database_name(), "MongoDB に接続しました");

   // 依存コンポーネントを初期化
   let employee_repository = Arc::new(MongoEmployeeRepository::new(&gateway));
   let employee_state = Arc::new(EmployeeState {
      usecase: EmployeeUseCaseImpl::new(employee_repository),
   });
   let readiness_state = Arc::new(ReadinessState { gateway });

   let app = build_app(employee_state, readiness_state);

   let listener = TcpListener::bind(config.bind_address())
      .await
      .with_context(|| format!("{} にバインドできません", config.bind_address()))?;
   tracing::info!("Employee API サーバーが起動しました: {}", config.bind_address());

   axum::serve(listener, app)
      .with_graceful_shutdown(shutdown_signal())
      .await
      .context("サーバーが異常終了しました")?;

   tracing::info!("Employee API サーバーを停止しました");
   Ok(())
}

/// Ctrl+C または SIGTERM を待つ
async fn shutdown_signal() {
   let ctrl_c = async {
      if let Err(e) = signal::ctrl_c().await {
         tracing::error!(error = %e, "Ctrl+C ハンドラを登録できません");
         std::future::pending::<()>().await;
      }
   };

   #[cfg(unix)]
   let terminate = async {
      match signal::unix::signal(signal::unix::SignalKind::terminate()) {
         Ok(mut sigterm) => {
            sigterm.recv().await;
         }
         Err(e) => {
            tracing::error!(error = %e, "SIGTERM ハンドラを登録できません");
            std::future::pending::<()>().await;
         }
      }
   };

   #[cfg(not(unix))]
   let terminate = std::future::pending::<()>();

   tokio::select! {
      _ = ctrl_c => tracing::info!("Ctrl+C を受信しました。シャットダウンします"),
      _ = terminate => tracing::info!("SIGTERM を受信しました。シャットダウンします"),
   }
}
