use crate::config;
use crate::movies::MovieSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub config: config::Config,
    pub movie_source: Arc<dyn MovieSource>,
    /// Runtime that movie requests are spawned on
    pub runtime: tokio::runtime::Handle,
}
