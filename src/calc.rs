// Fixed annual rate assumed by the estimate; the form has no rate input.
pub const ANNUAL_RATE: f64 = 0.06;

/// Monthly payment for a fixed-rate loan using the standard amortization
/// formula. Nothing owed on a non-positive principal; a zero rate splits the
/// principal evenly across the term.
pub fn monthly_payment(principal: f64, annual_rate: f64, term_years: u32) -> f64 {
    if principal <= 0.0 {
        return 0.0;
    }
    let monthly_rate = annual_rate / 12.0;
    let num_payments = (term_years * 12) as f64;
    if monthly_rate > 0.0 {
        let growth = (1.0 + monthly_rate).powf(num_payments);
        principal * (monthly_rate * growth) / (growth - 1.0)
    } else {
        principal / num_payments
    }
}
