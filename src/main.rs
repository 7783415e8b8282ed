use library_circulation::{
    adapters::postgres::{
        PostgresAccessionRecordRepository, PostgresIssuedItemRepository, PostgresItemRepository,
        PostgresMemberRepository,
    },
    api::{handlers::AppState, router::create_router},
    application::{
        ServiceDependencies,
        issued_item::{CopySelector, FirstAvailable, RandomAvailable},
    },
    config::{Config, CopySelection},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_circulation=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Initialize database connection pool
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let copy_selector: Arc<dyn CopySelector> = match config.copy_selection {
        CopySelection::First => Arc::new(FirstAvailable),
        CopySelection::Random { seed: Some(seed) } => Arc::new(RandomAvailable::seeded(seed)),
        CopySelection::Random { seed: None } => Arc::new(RandomAvailable::from_entropy()),
    };

    // Create service dependencies
    let service_deps = ServiceDependencies {
        item_repository: Arc::new(PostgresItemRepository::new(pool.clone())),
        accession_record_repository: Arc::new(PostgresAccessionRecordRepository::new(pool.clone())),
        member_repository: Arc::new(PostgresMemberRepository::new(pool.clone())),
        issued_item_repository: Arc::new(PostgresIssuedItemRepository::new(pool.clone())),
        copy_selector,
        late_fee_per_day: config.late_fee_per_day,
    };

    let app_state = Arc::new(AppState { service_deps });
    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!(
        address = %config.bind_address,
        late_fee_per_day = config.late_fee_per_day.value(),
        "Server listening"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
