use super::request::RequestBuilder;
use air_guitar_backend::State;
use migration::MigratorTrait;
use reqwest::Client;
use sea_orm::{ConnectOptions, Database, DbConn};
use std::net::SocketAddr;
use tokio::net::TcpListener;

async fn setup_database() -> DbConn {
    // a single connection keeps the whole test on one in-memory database
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);

    let db = Database::connect(opts)
        .await
        .expect("failed to connect to database");

    migration::Migrator::fresh(&db)
        .await
        .expect("failed to apply migrations");

    db
}

async fn setup_backend(db: DbConn) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let state = State::with_database(db);

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        air_guitar_backend::run(listener, state).await.unwrap();
    });

    addr
}

#[allow(unused)]
pub async fn setup() -> Env {
    let db = setup_database().await;
    let addr = setup_backend(db).await;

    Env {
        addr,
        client: Client::new(),
    }
}

#[derive(Clone)]
pub struct Env {
    pub addr: SocketAddr,
    client: Client,
}

#[allow(unused)]
impl Env {
    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }
}
