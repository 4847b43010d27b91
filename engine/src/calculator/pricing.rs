// Total price and down payment for a contract
use shared::models::ContractRecord;

/// Share of the total paid in advance.
pub const DOWN_PAYMENT_RATE: f64 = 0.4;

// Negative or non-finite prices count as zero.
fn unit_price(price: f64) -> f64 {
    if price.is_finite() && price > 0.0 {
        price
    } else {
        0.0
    }
}

pub fn total_value(record: &ContractRecord) -> f64 {
    record.adult_count as f64 * unit_price(record.adult_price)
        + record.child_count as f64 * unit_price(record.child_price)
        + record.extra_waiters as f64 * unit_price(record.extra_waiter_price)
}

/// Rounded half away from zero to the whole Real, not to the centavo.
pub fn down_payment(total_value: f64) -> f64 {
    (total_value * DOWN_PAYMENT_RATE).round()
}
