use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date, including the booking overlap triggers. This function must complete
/// successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the CORS layer from configuration.
///
/// Allows the configured origin only, or any origin when none is configured.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer ready to attach to the router
/// - `Err(AppError::ConfigErr)` - Configured origin is not a valid header value
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    let Some(origin) = &config.cors_allowed_origin else {
        return Ok(cors.allow_origin(Any));
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "CORS_ALLOWED_ORIGIN".to_string(),
            value: origin.clone(),
            reason: e.to_string(),
        })?;

    Ok(cors.allow_origin(origin))
}
