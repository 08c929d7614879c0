//! Background scheduler for periodic price refreshes.

use std::sync::Arc;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{info, warn};
use wealthnest_core::prices::PriceServiceTrait;

use crate::main_lib::AppState;

/// Starts the price refresh loop.
///
/// The first tick fires immediately, so prices are refreshed once at startup
/// and then every `period`. A failed refresh keeps the previous snapshot and
/// the loop carries on.
pub fn start_price_refresh_scheduler(state: Arc<AppState>, period: Duration) {
    tokio::spawn(async move {
        info!("Price refresh scheduler started ({}s interval)", period.as_secs());

        let mut refresh_interval = interval(period);
        refresh_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            refresh_interval.tick().await;
            run_scheduled_refresh(&state).await;
        }
    });
}

async fn run_scheduled_refresh(state: &Arc<AppState>) {
    match state.price_service.refresh_prices().await {
        Ok(result) => info!(
            "Scheduled price refresh completed: {} symbols at {}",
            result.symbols_updated, result.refreshed_at
        ),
        Err(e) => warn!("Scheduled price refresh failed: {}", e),
    }
}
