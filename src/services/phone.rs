// services/phone.rs
use crate::errors::{AppError, Result};

/// Normalizes a raw phone input to the canonical Safaricom form
/// `254[71]XXXXXXXX`.
///
/// Two stages: first the shape fixups (strip non-digits, repair the
/// `2540...` duplicated-prefix mistake, prefix local forms with `254`),
/// then a strict carrier check. Each stage rejects with its own message.
pub fn normalize_phone(raw: &str) -> Result<String> {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    // Fix numbers wrongly sent as 25407XXXXXXXX
    if digits.starts_with("2540") && digits.len() == 13 {
        digits = format!("254{}", &digits[4..]);
    }

    let phone = if digits.starts_with("254") && digits.len() == 12 {
        digits
    } else if (digits.starts_with("07") || digits.starts_with("01")) && digits.len() == 10 {
        format!("254{}", &digits[1..])
    } else if (digits.starts_with('7') || digits.starts_with('1')) && digits.len() == 9 {
        format!("254{}", digits)
    } else {
        return Err(AppError::InvalidPhone("Invalid phone number".to_string()));
    };

    // Final Safaricom validation: 254, then 7 or 1, then 8 digits.
    if !is_safaricom(&phone) {
        return Err(AppError::InvalidPhone("Invalid Safaricom number".to_string()));
    }

    Ok(phone)
}

fn is_safaricom(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    bytes.len() == 12
        && phone.starts_with("254")
        && (bytes[3] == b'7' || bytes[3] == b'1')
        && bytes[4..].iter().all(|b| b.is_ascii_digit())
}
