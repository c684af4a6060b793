//! Conversion between user-entered decimal strings and token base units.
//!
//! All amounts past this boundary are integer base units.

use crate::error::{ClientError, ClientResult};

pub const MAX_DECIMALS: u8 = 18;

/// Micro-USD per cent
const MICRO_USD_PER_CENT: u128 = 10_000;
const BPS: u128 = 10_000;

fn pow10(decimals: u8) -> ClientResult<u128> {
    if decimals > MAX_DECIMALS {
        return Err(ClientError::Validation(format!(
            "At most {} decimals are supported",
            MAX_DECIMALS
        )));
    }
    Ok(10u128.pow(decimals as u32))
}

/// Parse `"12.5"` into base units for a token with `decimals` decimals.
pub fn parse_units(text: &str, decimals: u8) -> ClientResult<u64> {
    let scale = pow10(decimals)?;
    let text = text.trim();
    let invalid = || ClientError::Validation(format!("Invalid amount: {:?}", text));

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (text, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if fraction.len() > decimals as usize {
        return Err(ClientError::Validation(format!(
            "Amount has more than {} decimal places",
            decimals
        )));
    }

    let too_large = || ClientError::Validation("Amount is too large".to_string());

    let whole_units: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| too_large())?
    };
    let fraction_units: u128 = if fraction.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", fraction, width = decimals as usize);
        padded.parse().map_err(|_| invalid())?
    };

    let total = whole_units
        .checked_mul(scale)
        .and_then(|units| units.checked_add(fraction_units))
        .ok_or_else(too_large)?;
    u64::try_from(total).map_err(|_| too_large())
}

/// Render base units as a decimal string without trailing zeros.
pub fn format_units(amount: u64, decimals: u8) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let scale = 10u128.pow(decimals as u32);
    let amount = amount as u128;
    let whole = amount / scale;
    let fraction = amount % scale;

    if fraction == 0 {
        return whole.to_string();
    }
    let fraction = format!("{:0>width$}", fraction, width = decimals as usize);
    format!("{}.{}", whole, fraction.trim_end_matches('0'))
}

/// Token base units needed to pay `usd_cents` at `price_micro_usd` per whole
/// token, plus a `buffer_bps` safety margin. Rounded up so the result always
/// covers the price.
pub fn usd_to_token(usd_cents: u64, price_micro_usd: u64, buffer_bps: u16, decimals: u8) -> ClientResult<u64> {
    if price_micro_usd == 0 {
        return Err(ClientError::Validation("Token price is not available".to_string()));
    }
    let scale = pow10(decimals)?;
    let too_large = || ClientError::Validation("Amount is too large".to_string());

    let numerator = (usd_cents as u128)
        .checked_mul(MICRO_USD_PER_CENT)
        .and_then(|v| v.checked_mul(scale))
        .and_then(|v| v.checked_mul(BPS + buffer_bps as u128))
        .ok_or_else(too_large)?;
    let denominator = (price_micro_usd as u128) * BPS;

    let amount = numerator.div_ceil(denominator);
    u64::try_from(amount).map_err(|_| too_large())
}
