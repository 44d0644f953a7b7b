use bronews::application::{
    notifications::ApprovalNotifier,
    ports::{
        notification::{EmailSender, SocialPoster},
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use bronews::config::AppConfig;
use bronews::domain::{
    content::{ContentReadRepository, ContentWriteRepository},
    publisher::PublisherRepository,
    subscription::SubscriptionRepository,
    user::UserRepository,
};
use bronews::infrastructure::{
    database,
    notifications::{
        HttpSocialPoster, LoggingEmailSender, LoggingSocialPoster, SmtpEmailSender,
    },
    repositories::{
        PostgresContentReadRepository, PostgresContentWriteRepository,
        PostgresPublisherRepository, PostgresSubscriptionRepository, PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
};
use bronews::presentation::http::{
    routes::{RouterSettings, build_router},
    state::HttpState,
};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let publisher_repo: Arc<dyn PublisherRepository> =
        Arc::new(PostgresPublisherRepository::new(pool.clone()));
    let content_write_repo: Arc<dyn ContentWriteRepository> =
        Arc::new(PostgresContentWriteRepository::new(pool.clone()));
    let content_read_repo: Arc<dyn ContentReadRepository> =
        Arc::new(PostgresContentReadRepository::new(pool.clone()));
    let subscription_repo: Arc<dyn SubscriptionRepository> =
        Arc::new(PostgresSubscriptionRepository::new(pool));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = match config.biscuit_private_key() {
        Some(key) => Arc::new(BiscuitTokenManager::new(key, config.token_ttl())?),
        None => {
            tracing::warn!(
                "BISCUIT_ROOT_PRIVATE_KEY not set; using a random key, sessions end on restart"
            );
            Arc::new(BiscuitTokenManager::ephemeral(config.token_ttl()))
        }
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let notifier = Arc::new(build_notifier(&config)?);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        publisher_repo,
        content_write_repo,
        content_read_repo,
        subscription_repo,
        password_hasher,
        token_manager,
        notifier,
        clock,
    ));

    let state = HttpState { services };
    let settings = RouterSettings {
        allowed_origins: config.allowed_origins().to_vec(),
        rate_limit: config.rate_limit_enabled(),
    };

    let app = build_router(state, &settings);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn build_notifier(config: &AppConfig) -> Result<ApprovalNotifier> {
    let email_sender: Arc<dyn EmailSender> = match config.smtp() {
        Some(settings) => {
            tracing::info!(host = %settings.host, port = settings.port, "approval emails go through SMTP");
            Arc::new(SmtpEmailSender::new(settings)?)
        }
        None => {
            tracing::info!("SMTP_HOST not set; approval emails are only logged");
            Arc::new(LoggingEmailSender)
        }
    };

    let social_poster: Arc<dyn SocialPoster> = match config.social() {
        Some(social) => Arc::new(HttpSocialPoster::new(&social.endpoint, &social.token)?),
        None => {
            tracing::info!("SOCIAL_POST_TOKEN not set; announcements are only logged");
            Arc::new(LoggingSocialPoster)
        }
    };

    Ok(ApprovalNotifier::new(
        email_sender,
        social_poster,
        config.default_from_email(),
        config.notify_retry(),
    ))
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
