use library_circulation::{
    adapters::in_memory::{
        CatalogStore as InMemoryCatalogStore, FixedTitlesPolicy,
        MembershipStore as InMemoryMembershipStore, load_sample_data,
    },
    adapters::logging::LoggingNotificationService,
    adapters::postgres::{PostgresCatalogStore, PostgresMembershipStore},
    api::{handlers::AppState, router::create_router},
    application::circulation::{CirculationPolicy, ServiceDependencies},
    config::Config,
    ports::{CatalogStore, MembershipStore},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "library_circulation=debug,tower_http=debug,axum=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Initialize adapters
    let (catalog_store, membership_store): (Arc<dyn CatalogStore>, Arc<dyn MembershipStore>) =
        match &config.database_url {
            Some(database_url) => {
                let pool = sqlx::postgres::PgPoolOptions::new()
                    .max_connections(config.database_max_connections)
                    .connect(database_url)
                    .await?;

                sqlx::migrate!("./migrations").run(&pool).await?;
                tracing::info!("Using PostgreSQL stores");

                let catalog_store: Arc<dyn CatalogStore> =
                    Arc::new(PostgresCatalogStore::new(pool.clone()));
                let membership_store: Arc<dyn MembershipStore> =
                    Arc::new(PostgresMembershipStore::new(pool));
                (catalog_store, membership_store)
            }
            None => {
                tracing::warn!(
                    "DATABASE_URL not set, using in-memory stores with sample data (not persisted)"
                );
                let catalog = InMemoryCatalogStore::new();
                let members = InMemoryMembershipStore::new();
                load_sample_data(&catalog, &members);

                let catalog_store: Arc<dyn CatalogStore> = Arc::new(catalog);
                let membership_store: Arc<dyn MembershipStore> = Arc::new(members);
                (catalog_store, membership_store)
            }
        };

    // Create service dependencies
    let service_deps = ServiceDependencies {
        catalog_store,
        membership_store,
        notification_service: Arc::new(LoggingNotificationService::new()),
        due_date_policy: Arc::new(FixedTitlesPolicy::default()),
        policy: CirculationPolicy {
            borrow_limit: config.borrow_limit,
        },
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        borrow_limit = config.borrow_limit.value(),
        "Server listening on {}",
        addr
    );

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
