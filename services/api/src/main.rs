use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use api::config::ServerConfig;
use api::jwt::{JwtConfig, JwtService};
use api::repositories::{ContactRepository, ItemRepository, UserRepository};
use api::routes;
use api::state::AppState;
use common::database::{self, DatabaseConfig};

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting Scanventory API service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = database::init_pool(&db_config).await?;

    // Check database connectivity
    if database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    database::run_migrations(&pool, &MIGRATOR).await?;

    // Initialize JWT service
    let jwt_config = JwtConfig::from_env()?;
    let jwt_service = JwtService::new(&jwt_config);

    let app_state = AppState {
        db_pool: pool.clone(),
        jwt_service,
        user_repository: UserRepository::new(pool.clone()),
        item_repository: ItemRepository::new(pool.clone()),
        contact_repository: ContactRepository::new(pool),
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let server_config = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(server_config.bind_addr()).await?;
    info!("Scanventory API listening on {}", server_config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
