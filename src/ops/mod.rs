pub mod member_ops;
pub mod fund_ops;
pub mod team_ops;
pub mod group_ops;
pub mod ledger_ops;
