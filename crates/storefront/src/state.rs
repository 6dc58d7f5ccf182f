use crate::{config::Config, di::DependenciesInject};
use anyhow::Result;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{ConnectionPool, Hashing, JwtConfig},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let hashing: DynHashing = Arc::new(Hashing::new());
        let jwt_config: DynJwtService = Arc::new(JwtConfig::new(&config.jwt_secret));

        let di_container = DependenciesInject::new(pool, hashing, jwt_config.clone());

        Ok(Self {
            di_container,
            jwt_config,
        })
    }
}
