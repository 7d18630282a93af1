//! Taskboard HTTP server binary.
//!
//! Reads configuration from the environment, selects the persistence
//! backend, and serves the REST API together with the rendered UI.

use actix_web::{App, HttpServer, web};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::io;
use std::sync::Arc;
use taskboard::config::{Config, StoreConfig};
use taskboard::task::adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository};
use taskboard::task::ports::TaskRepository;
use taskboard::task::services::TaskService;
use taskboard::web::{configure_app, json_config, pages::PageRenderer};

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let Config { bind_addr, store } = Config::from_env().map_err(io::Error::other)?;
    let renderer = PageRenderer::new().map_err(io::Error::other)?;

    match store {
        StoreConfig::Memory => {
            log::info!("using in-memory task store");
            serve(
                Arc::new(InMemoryTaskRepository::new()),
                &bind_addr,
                renderer,
            )
            .await
        }
        StoreConfig::Postgres { database_url } => {
            let manager = ConnectionManager::<PgConnection>::new(database_url);
            let pool = Pool::builder().build(manager).map_err(io::Error::other)?;
            log::info!("using postgres task store");
            serve(
                Arc::new(PostgresTaskRepository::new(pool)),
                &bind_addr,
                renderer,
            )
            .await
        }
    }
}

async fn serve<R>(repository: Arc<R>, bind_addr: &str, renderer: PageRenderer) -> io::Result<()>
where
    R: TaskRepository + 'static,
{
    let service = web::Data::new(TaskService::new(repository, Arc::new(DefaultClock)));
    let renderer = web::Data::new(renderer);
    log::info!("listening on http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .app_data(renderer.clone())
            .app_data(json_config())
            .configure(configure_app::<R, DefaultClock>)
    })
    .bind(bind_addr)?
    .run()
    .await
}
