// Waiter staffing derived from the guest count

/// Guests served by one waiter.
pub const GUESTS_PER_WAITER: u64 = 30;

/// One waiter per 30 guests, never fewer than one.
pub fn calculate_base_waiters(adult_count: u32, child_count: u32) -> u32 {
    let guests = adult_count as u64 + child_count as u64;
    let waiters = guests.div_ceil(GUESTS_PER_WAITER).max(1);
    u32::try_from(waiters).unwrap_or(u32::MAX)
}

/// Staffing sentence used by the contract, e.g. "2 garçons + 1 garçons adicionais".
pub fn waiters_narrative(base_waiters: u32, extra_waiters: u32) -> String {
    if extra_waiters > 0 {
        format!("{} garçons + {} garçons adicionais", base_waiters, extra_waiters)
    } else {
        format!("{} garçons", base_waiters)
    }
}
