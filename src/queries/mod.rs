pub mod payment_queries;
pub mod member_queries;
pub mod deposit_queries;
pub mod fund_queries;
pub mod reminder_queries;
pub mod stats_queries;
