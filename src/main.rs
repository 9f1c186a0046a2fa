use dotenv::dotenv;
use env_logger::Env;
use typing_stats_api::config::settings::load_config;
use typing_stats_api::{build_rocket, connect_store};

// Configure jemallocator
#[cfg(not(target_os = "windows"))]
#[global_allocator]
static ALLOC: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let store = match connect_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            log::error!("Storage initialization failed: {}", e);
            return Err(e.into());
        }
    };

    let rocket = build_rocket(&config, store)?;

    log::info!(
        "typing-stats-api v{} listening on {}:{}",
        env!("CARGO_PKG_VERSION"),
        config.server.address,
        config.server.port
    );
    rocket.launch().await?;

    Ok(())
}
