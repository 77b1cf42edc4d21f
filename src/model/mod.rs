pub mod ids;
pub mod member;
pub mod fund;
pub mod team;
pub mod group;
pub mod ledger;
pub mod payment_status;
mod lenient;

// Re-exports for convenience
pub use ids::Id;
pub use member::{FinancialStatus, JobStatus, Member, PaymentRecord};
pub use fund::{Frequency, Fund};
pub use team::Team;
pub use group::Group;
pub use ledger::{Deposit, DepositStatus, Withdrawal};
pub use payment_status::PaymentStatus;
