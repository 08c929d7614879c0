use crate::errors::Result;

use super::PortfolioSummary;

/// Trait defining the contract for portfolio valuation.
pub trait ValuationServiceTrait: Send + Sync {
    /// Values the user's full ledger against the current price snapshot.
    fn get_portfolio_summary(&self, user_id: i64) -> Result<PortfolioSummary>;
}
