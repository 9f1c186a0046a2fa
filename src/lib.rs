pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::settings::{Backend, Config};
use crate::services::db_service::MongoUserStore;
use crate::services::memory_store::MemoryUserStore;
use crate::services::user_store::Store;
use crate::utils::access_log::AccessLogFairing;
use crate::utils::cors::configure_cors;
use rocket::data::{Limits, ToByteUnit};
use rocket::{Build, Rocket};

// Re-exports
pub use utils::errors::Error;

// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// 按配置创建存储后端
pub async fn connect_store(config: &Config) -> Result<Store> {
    match config.storage.backend {
        Backend::Mongo => Ok(Box::new(MongoUserStore::connect(&config.mongo).await?)),
        Backend::Memory => {
            log::warn!("Using in-memory storage, data is lost on restart");
            Ok(Box::new(MemoryUserStore::new()))
        }
    }
}

/// 组装 Rocket 实例，存储在此注入并由所有路由共享
pub fn build_rocket(config: &Config, store: Store) -> Result<Rocket<Build>> {
    let limits = Limits::default().limit("json", config.server.json_limit_mib.mebibytes());
    let figment = rocket::Config::figment()
        .merge(("address", config.server.address.as_str()))
        .merge(("port", config.server.port))
        .merge(("limits", limits));

    let rocket = rocket::custom(figment)
        .attach(configure_cors(&config.cors)?)
        .attach(AccessLogFairing)
        .mount("/", routes::user::routes())
        .mount("/", routes::stats::routes())
        .register("/", utils::errors::catchers())
        .manage(store);

    Ok(rocket)
}
