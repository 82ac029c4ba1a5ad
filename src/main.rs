use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use news_digest_backend::controllers::{
    activity::ActivityController, auth::AuthController, digest::DigestController,
};
use news_digest_backend::domain::{
    activity::ActivityService, digest::DigestService, news::NewsService,
    summary::SummaryService, user::UserService,
};
use news_digest_backend::infrastructure::config::{Config, LogFormat};
use news_digest_backend::infrastructure::db::{check_connection, create_pool, run_migrations};
use news_digest_backend::infrastructure::http::{build_router, start_http_server};
use news_digest_backend::infrastructure::repositories::{
    ActivityRepository, GeminiSummaryRepository, NewsDataRepository, NewsRepository,
    SummaryRepository, UserRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    init_logging(&config);

    tracing::info!(
        development = config.is_development(),
        "Starting News Digest Backend on {}:{}",
        config.host,
        config.port
    );

    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    run_migrations(&pool).await?;
    tracing::info!("Database schema ready");

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream_timeout_secs))
        .build()?;

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // Repositories
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let activity_repo = Arc::new(ActivityRepository::new(pool.clone()));
    let news_repo = config.newsdata_api_key.clone().map(|key| {
        Arc::new(NewsDataRepository::new(
            http_client.clone(),
            config.newsdata_base_url.clone(),
            key,
        )) as Arc<dyn NewsRepository>
    });
    let summary_repo = config.gemini_api_key.clone().map(|key| {
        Arc::new(GeminiSummaryRepository::new(
            http_client.clone(),
            config.gemini_base_url.clone(),
            config.gemini_model.clone(),
            key,
        )) as Arc<dyn SummaryRepository>
    });

    // Services
    let news_service = Arc::new(NewsService::new(news_repo));
    let summary_service = Arc::new(SummaryService::new(
        summary_repo,
        config.summary_cache_enabled,
    ));
    tracing::info!(
        news_provider = news_service.is_configured(),
        summarizer = summary_service.is_configured(),
        "Outbound API key check"
    );
    if !config.api_keys_configured() {
        tracing::warn!("API keys missing, digests will be degraded");
    }
    let digest_service = Arc::new(DigestService::new(news_service, summary_service));
    let user_service = Arc::new(UserService::new(user_repo));
    let activity_service = Arc::new(ActivityService::new(activity_repo));

    // Controllers
    let auth_controller = Arc::new(AuthController::new(user_service));
    let digest_controller = Arc::new(DigestController::new(digest_service));
    let activity_controller = Arc::new(ActivityController::new(activity_service));

    let app = build_router(
        pool,
        config.clone(),
        auth_controller,
        digest_controller,
        activity_controller,
    );

    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "news_digest_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
