pub mod config;
pub mod models;
pub mod store;
pub mod services;
pub mod controllers;

use std::sync::Arc;

// Shared state для всего приложения
#[derive(Debug)]
pub struct AppState {
    pub config: config::Config,
    pub identity: store::IdentityStore,
    pub catalog: store::CatalogStore,
    pub sessions: store::SessionRegistry,
}

impl AppState {
    // Хранилища живут только в памяти процесса и заполняются стартовыми
    // данными при создании.
    pub fn new(config: config::Config) -> Arc<Self> {
        let identity = store::IdentityStore::with_admin(&config.seed);
        let catalog = store::CatalogStore::seed();
        let sessions = store::SessionRegistry::seed();

        Arc::new(Self {
            config,
            identity,
            catalog,
            sessions,
        })
    }
}
