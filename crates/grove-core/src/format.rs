//! Input formatters
//!
//! Pure functions that turn whatever the user typed or pasted into the masked
//! text a field displays. They run on every keystroke, never fail, and are
//! idempotent on already-formatted input.

/// Digits that make up a full `MM/YY` expiry.
pub const EXPIRY_DIGITS: usize = 4;

/// Digits accepted in the CVC field.
pub const CVC_DIGITS: usize = 3;

/// Longest custom amount the amount field accepts.
pub const MAX_CUSTOM_AMOUNT_DIGITS: usize = 9;

/// Keep only ASCII digits.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Group card digits in fours: `"4111111111111111"` → `"4111 1111 1111 1111"`.
///
/// When `raw` contains no digits at all it is returned unchanged, so pasted
/// non-numeric text stays visible instead of blanking the field.
pub fn format_card_number(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return raw.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(digit);
    }
    out
}

/// Mask an expiry as `MM/YY`.
///
/// The slash only appears once a third digit arrives. As soon as two month
/// digits exist the month is clamped into `01..=12`.
pub fn format_expiry(raw: &str) -> String {
    let digits: String = digits_only(raw).chars().take(EXPIRY_DIGITS).collect();
    if digits.len() < 2 {
        return digits;
    }

    let (month, year) = digits.split_at(2);
    let month = clamp_month(month);
    if year.is_empty() {
        month
    } else {
        format!("{month}/{year}")
    }
}

/// `"00"` → `"01"`, anything above 12 → `"12"`.
fn clamp_month(two_digits: &str) -> String {
    match two_digits.parse::<u32>() {
        Ok(0) => "01".to_string(),
        Ok(m) if m > 12 => "12".to_string(),
        _ => two_digits.to_string(),
    }
}

/// Digits only, at most three.
pub fn format_cvc(raw: &str) -> String {
    digits_only(raw).chars().take(CVC_DIGITS).collect()
}

/// Filter for the custom amount field.
///
/// The candidate replaces the current text only if it is empty or made of
/// digits (and not absurdly long); otherwise the keystroke is dropped.
pub fn sanitize_custom_amount(current: &str, candidate: &str) -> String {
    let acceptable = candidate.is_empty()
        || (candidate.len() <= MAX_CUSTOM_AMOUNT_DIGITS
            && candidate.chars().all(|c| c.is_ascii_digit()));
    if acceptable {
        candidate.to_string()
    } else {
        current.to_string()
    }
}
