use migration::MigratorTrait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::{env, sync::Arc};
use tracing::log::LevelFilter;

// `mode=rwc` creates the database file on first start.
const DEFAULT_DATABASE_URL: &str = "sqlite://./air_guitar.db?mode=rwc";

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone;

    fn db(&self) -> &Self::Db;
}

pub struct State {
    database: DbConn,
}

impl State {
    pub async fn new() -> Arc<Self> {
        let db = Self::connect_database().await;

        migration::Migrator::up(&db, None)
            .await
            .expect("failed to apply migrations");

        Self::with_database(db)
    }

    pub fn with_database(conn: DbConn) -> Arc<Self> {
        Arc::new(Self { database: conn })
    }

    async fn connect_database() -> DbConn {
        info!("Trying to connect to database");

        let url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());
        let mut opts = ConnectOptions::new(url);
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts)
            .await
            .expect("failed to connect to database");

        info!("Connected to database");

        db
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;

    fn db(&self) -> &Self::Db {
        &self.database
    }
}
