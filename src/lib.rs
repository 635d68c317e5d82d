use cache::store::CacheStore;
use config::Config;

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod utils;

pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub cache: CacheStore,
}
