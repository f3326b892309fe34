//! # Blog Service サーバー
//!
//! ブログ記事とコメントの CRUD API を提供する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `BLOG_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `BLOG_PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,blogapi=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p blogapi-blog-service
//!
//! # 本番環境
//! BLOG_PORT=5000 DATABASE_URL=postgres://... cargo run -p blogapi-blog-service --release
//! ```

use std::sync::Arc;

use blogapi_blog_service::{
   app_builder::build_app,
   config::BlogConfig,
   handler::{BlogState, CommentState},
   usecase::{BlogUseCaseImpl, CommentUseCaseImpl},
};
use blogapi_domain::clock::{Clock, SystemClock};
use blogapi_infra::{
   db,
   repository::{
      BlogRepository,
      CommentRepository,
      PostgresBlogRepository,
      PostgresCommentRepository,
   },
};
use blogapi_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;
use tracing::Instrument;

/// Blog Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   let tracing_config = TracingConfig::from_env("blog-service");
   init_tracing(&tracing_config);

   // 設定読み込み
   let config = BlogConfig::from_env()?;

   run(config).instrument(tracing_config.service_span()).await
}

/// 依存コンポーネントを組み立て、サーバーを起動する
async fn run(config: BlogConfig) -> anyhow::Result<()> {
   tracing::info!(
      "Blog Service サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // データベース接続プールを作成し、マイグレーションを適用
   let pool = db::create_pool(&config.database_url).await?;
   db::run_migrations(&pool).await?;
   tracing::info!("データベースに接続しました");

   // 依存コンポーネントを初期化
   let blog_repository: Arc<dyn BlogRepository> =
      Arc::new(PostgresBlogRepository::new(pool.clone()));
   let comment_repository: Arc<dyn CommentRepository> =
      Arc::new(PostgresCommentRepository::new(pool));
   let clock: Arc<dyn Clock> = Arc::new(SystemClock);

   let blog_state = Arc::new(BlogState {
      usecase: BlogUseCaseImpl::new(
         blog_repository.clone(),
         comment_repository.clone(),
         clock.clone(),
      ),
   });
   let comment_state = Arc::new(CommentState {
      usecase: CommentUseCaseImpl::new(blog_repository, comment_repository, clock),
   });

   let app = build_app(blog_state, comment_state);

   // サーバー起動
   let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
   tracing::info!(
      "Blog Service サーバーが起動しました: {}",
      listener.local_addr()?
   );

   axum::serve(listener, app).await?;

   Ok(())
}
