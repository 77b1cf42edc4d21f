//! Text for outbound WhatsApp reminders.

use crate::model::PaymentStatus;

/// Country calling code prefixed to local mobile numbers.
pub const COUNTRY_CODE: &str = "966";

/// Builds the reminder message for a member's status in one fund.
/// Statuses without a dedicated template use the unpaid one.
pub fn generate_message(member_name: &str, fund_name: &str, status: PaymentStatus) -> String {
    match status {
        PaymentStatus::Completed => format!(
            "السلام عليكم {member_name}،\nنشكرك على سداد اشتراكك في صندوق \"{fund_name}\". تم استلام الدفعة بنجاح."
        ),
        PaymentStatus::Delayed => format!(
            "السلام عليكم {member_name}،\nنود تذكيرك بأن اشتراكك في صندوق \"{fund_name}\" متأخر عن موعد الاستحقاق. نرجو المبادرة بالسداد."
        ),
        PaymentStatus::Unpaid
        | PaymentStatus::Pending
        | PaymentStatus::Unknown => format!(
            "السلام عليكم {member_name}،\nنود تذكيرك بسداد اشتراكك في صندوق \"{fund_name}\". نرجو السداد في أقرب وقت."
        ),
    }
}

/// Normalizes a phone number into a messaging address: digits only, and a
/// local `05…` mobile number (at least 9 digits) becomes `9665…`.
pub fn format_phone_for_messaging(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.starts_with("05") && digits.len() >= 9 {
        format!("{COUNTRY_CODE}{}", &digits[1..])
    } else {
        digits
    }
}
