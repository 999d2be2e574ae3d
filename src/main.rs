//! Leadership diagnosis HTTP service.
//!
//! Reads configuration from the environment, wires adapters to the
//! application handlers, and serves the REST API until interrupted.

use std::error::Error;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use leadership_diagnosis::adapters::http::{diagnosis_router, DiagnosisAppState};
use leadership_diagnosis::adapters::{
    InMemoryDiagnosisRepository, PostgresContentReader, PostgresDiagnosisRepository,
    StaticContentReader,
};
use leadership_diagnosis::config::{AppConfig, ContentSource, ServerConfig};
use leadership_diagnosis::domain::content::ReferenceContent;
use leadership_diagnosis::ports::{ContentReader, DiagnosisRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);
    if config.server.is_production() && config.features.verbose_errors {
        tracing::warn!("verbose_errors is enabled in production; 5xx responses expose internal messages");
    }

    let (content, repository) = build_adapters(&config).await?;
    let state = DiagnosisAppState {
        content,
        repository,
        max_selected_concerns: config.diagnosis.max_selected_concerns,
        verbose_errors: config.features.verbose_errors,
    };

    let mut app = diagnosis_router(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server));
    if config.features.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    serve(app, &config.server).await
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.features.json_logs {
        let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
        Registry::default().with(filter).with(fmt_layer).init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
        Registry::default().with(filter).with(fmt_layer).init();
    }
}

async fn build_adapters(
    config: &AppConfig,
) -> Result<(Arc<dyn ContentReader>, Arc<dyn DiagnosisRepository>), Box<dyn Error>> {
    let Some(database) = &config.database else {
        tracing::info!("No database configured; using embedded content and in-memory storage");
        return Ok((
            Arc::new(StaticContentReader::embedded()),
            Arc::new(InMemoryDiagnosisRepository::new()),
        ));
    };

    let pool = database.pool_options().connect(&database.url).await?;
    tracing::info!(
        max_connections = database.max_connections,
        "Connected to PostgreSQL"
    );

    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let repository: Arc<dyn DiagnosisRepository> =
        Arc::new(PostgresDiagnosisRepository::new(pool.clone()));

    let content: Arc<dyn ContentReader> = match config.content.source {
        ContentSource::Static => Arc::new(StaticContentReader::embedded()),
        ContentSource::Postgres => {
            let reader = PostgresContentReader::new(pool);
            if config.content.seed_on_start {
                let seeded = reader.seed_if_empty(ReferenceContent::embedded()).await?;
                tracing::info!(seeded, "Content tables checked");
            }
            Arc::new(reader)
        }
    };

    Ok((content, repository))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if server.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}

async fn serve(app: Router, server: &ServerConfig) -> Result<(), Box<dyn Error>> {
    let addr = server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
