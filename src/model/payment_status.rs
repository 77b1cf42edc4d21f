use serde::{Deserialize, Serialize};

/// Where a member stands against one fund (or overall).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Unknown,
    Unpaid,
    Pending,
    Completed,
    Delayed,
}

impl PaymentStatus {
    pub const ALL: &'static [PaymentStatus] = &[
        PaymentStatus::Unknown,
        PaymentStatus::Unpaid,
        PaymentStatus::Pending,
        PaymentStatus::Completed,
        PaymentStatus::Delayed,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Unknown => "Unknown",
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Completed => "Paid",
            PaymentStatus::Delayed => "Delayed",
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unknown => "unknown",
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Delayed => "delayed",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "unknown" => Some(PaymentStatus::Unknown),
            "unpaid" => Some(PaymentStatus::Unpaid),
            "pending" => Some(PaymentStatus::Pending),
            "completed" => Some(PaymentStatus::Completed),
            "delayed" => Some(PaymentStatus::Delayed),
            _ => None,
        }
    }

    /// Rank used when folding several fund statuses into one overall status.
    /// Higher wins. `Unknown` never outranks a real status.
    pub fn severity(&self) -> u8 {
        match self {
            PaymentStatus::Delayed => 4,
            PaymentStatus::Unpaid => 3,
            PaymentStatus::Pending => 2,
            PaymentStatus::Completed => 1,
            PaymentStatus::Unknown => 0,
        }
    }

    /// Statuses that warrant a reminder message.
    pub fn needs_reminder(&self) -> bool {
        matches!(self, PaymentStatus::Unpaid | PaymentStatus::Delayed)
    }
}
