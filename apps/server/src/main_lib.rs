use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use wealthnest_core::{
    portfolio::valuation::{ValuationService, ValuationServiceTrait},
    prices::{
        JsonFilePriceSource, PriceService, PriceServiceTrait, PriceStoreTrait, SnapshotPriceStore,
    },
    transactions::{TransactionService, TransactionServiceTrait},
    users::{UserService, UserServiceTrait},
};
use wealthnest_storage_sqlite::{
    db, PriceRepository, TransactionRepository, UserRepository,
};

use crate::{
    auth::{Argon2PasswordHasher, AuthManager},
    config::Config,
};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub valuation_service: Arc<dyn ValuationServiceTrait>,
    pub price_service: Arc<dyn PriceServiceTrait>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let log_format = std::env::var("WN_LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("text") {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    } else {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let transaction_repository = Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let price_repository = Arc::new(PriceRepository::new(pool.clone(), writer.clone()));

    let user_service = Arc::new(UserService::new(
        user_repository,
        Arc::new(Argon2PasswordHasher::default()),
    ));
    let transaction_service = Arc::new(TransactionService::new(transaction_repository.clone()));

    let price_store: Arc<dyn PriceStoreTrait> = Arc::new(SnapshotPriceStore::new());
    let mut price_source = JsonFilePriceSource::new(&config.prices_file);
    if let Some(factor) = config.price_drift {
        tracing::info!("Price drift enabled: x{}", factor);
        price_source = price_source.with_drift(factor);
    }
    let price_service = Arc::new(PriceService::new(
        price_store.clone(),
        Arc::new(price_source),
        price_repository,
    ));
    price_service.initialize()?;

    let valuation_service = Arc::new(ValuationService::new(transaction_repository, price_store));

    Ok(Arc::new(AppState {
        user_service,
        transaction_service,
        valuation_service,
        price_service,
        auth: Arc::new(AuthManager::new(&config.jwt_secret, config.access_token_ttl)),
    }))
}
