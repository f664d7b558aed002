use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use docflow::config::Config;
use docflow::state::AppState;
use docflow::storage::FileStorage;
use docflow::store::{MemoryStore, PgStore, Store};
use docflow::{db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = Config::from_env().map_err(|e| std::io::Error::other(e.to_string()))?;

    std::fs::create_dir_all(&config.storage_dir)?;
    let files = FileStorage::new(&config.storage_dir);

    let store: Arc<dyn Store> = match &config.database_url {
        Some(url) => {
            let pool = db::init_pool(url).await.map_err(|e| std::io::Error::other(e.to_string()))?;
            db::run_migrations(&pool).await.map_err(|e| std::io::Error::other(e.to_string()))?;
            log::info!("Using PostgreSQL store");
            Arc::new(PgStore::new(pool))
        }
        None => {
            log::warn!("No DATABASE_URL set, using in-memory store (data lost on restart)");
            Arc::new(MemoryStore::new())
        }
    };

    if config.seed_demo {
        db::seed_demo(store.as_ref(), &files, &config.seed_password)
            .await
            .map_err(|e| std::io::Error::other(e.to_string()))?;
    }

    // Session key from SESSION_KEY so sessions survive restarts
    let secret_key = match &config.session_key {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let state = AppState::new(store, files, config.max_upload_bytes);
    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
            .cookie_secure(false)
            .cookie_http_only(true)
            .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
