use std::net::SocketAddr;
use std::sync::Arc;

use linkshelf::libs::{
    api::{router, AppState},
    category::CategoryMatcher,
    config::Config,
    defaults::default_categories,
    redis::get_redis_service,
    store::{CategoryStore, DefaultCategoryStore},
    version::print_version,
};
use log::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    print_version("webserver service");

    let config = Config::from_env()?;

    let store: Arc<dyn CategoryStore> = match get_redis_service(config.redis_url.as_deref()) {
        Ok(redis_service) => {
            info!("Reading categories from redis");
            Arc::new(redis_service)
        }
        Err(e) => {
            warn!("{}, serving default categories", e);
            Arc::new(DefaultCategoryStore)
        }
    };

    let state = AppState {
        store,
        matcher: Arc::new(CategoryMatcher::new(config.reserved.clone(), default_categories())),
    };

    let app = router(state);

    info!("Listening on {}", config.listen_addr);

    axum::Server::bind(&config.listen_addr)
        .serve(app.into_make_service_with_connect_info::<SocketAddr>())
        .await?;

    Ok(())
}
