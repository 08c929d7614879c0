/// Transaction side: units acquired
pub const TRANSACTION_SIDE_BUY: &str = "BUY";

/// Transaction side: units disposed
pub const TRANSACTION_SIDE_SELL: &str = "SELL";
