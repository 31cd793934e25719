use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use tokio::sync::OnceCell;
use tracing::info;

static SHARED: OnceCell<Arc<DatabaseService>> = OnceCell::const_new();

#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DatabaseService {
    /// Connects and brings the schema up to date.
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let database_connection = Database::connect(uri).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Connected to database.");
        Ok(Self { database_connection })
    }

    /// Process-wide handle, created on first use and kept for the lifetime
    /// of the process. Later calls ignore `uri`.
    pub async fn shared(uri: &str) -> Result<Arc<Self>, DbErr> {
        SHARED
            .get_or_try_init(|| async { Self::new(uri).await.map(Arc::new) })
            .await
            .cloned()
    }
}
