use std::sync::Arc;
use mongodb::Database;

use crate::config::AppConfig;
use crate::services::payhero_service::PayHeroService;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: AppConfig,
    pub payhero: Arc<PayHeroService>,
}

impl AppState {
    pub fn new(db: Database, config: AppConfig) -> Self {
        let payhero = Arc::new(PayHeroService::new(config.clone()));
        AppState {
            db,
            config,
            payhero,
        }
    }
}
