use chrono::{DateTime, Utc};

use crate::PayoneerApiError;

/// Payoneer expects payment dates as `MM/DD/YYYY HH:MM:SS`, in UTC.
pub fn payoneer_date(date: &DateTime<Utc>) -> String {
    date.format("%m/%d/%Y %H:%M:%S").to_string()
}

/// Amounts travel as decimal strings, e.g. "42" or "42.50". Anything else, or a value that is not strictly
/// positive, is rejected before it reaches the API.
pub fn check_payout_amount(amount: &str) -> Result<(), PayoneerApiError> {
    let amount = amount.trim();
    let mut parts = amount.split('.');
    let whole = parts.next().unwrap_or_default();
    let cents = parts.next();
    let is_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    let well_formed = is_digits(whole) && cents.map_or(true, |c| is_digits(c) && c.len() <= 2) && parts.next().is_none();
    if !well_formed {
        return Err(PayoneerApiError::InvalidInput(format!("Invalid payout amount: {amount}")));
    }
    if amount.chars().all(|c| c == '0' || c == '.') {
        return Err(PayoneerApiError::InvalidInput(format!("Payout amount must be positive, not {amount}")));
    }
    Ok(())
}
