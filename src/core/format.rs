// src/core/format.rs
//
// Display formatting for the free-text numeric columns (Price, Mileage).
// Anything that doesn't yield a number is shown exactly as typed.

/// Three fraction digits.
const ROUND_SCALE: f64 = 1000.0;

/// "45000" → "45,000 miles". Empty → "". Non-numeric → unchanged.
pub fn format_mileage(raw: &str) -> String {
    match parse_loose(raw) {
        Some(n) => join!(&group_thousands(n), " miles"),
        None if raw.is_empty() => s!(),
        None => s!(raw),
    }
}

/// "12345" → "$12,345". Empty → "". Non-numeric → unchanged.
pub fn format_price(raw: &str) -> String {
    match parse_loose(raw) {
        Some(n) => join!("$", &group_thousands(n)),
        None if raw.is_empty() => s!(),
        None => s!(raw),
    }
}

/// Keep only digits and '.', then read the longest leading decimal
/// (`12.5.3` → 12.5). Needs at least one digit.
pub fn parse_loose(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();

    let int_len = cleaned.bytes().take_while(u8::is_ascii_digit).count();
    let int_part = &cleaned[..int_len];
    let rest = &cleaned[int_len..];

    let frac_part = match rest.strip_prefix('.') {
        Some(after) => {
            let n = after.bytes().take_while(u8::is_ascii_digit).count();
            &after[..n]
        }
        None => "",
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac_part = if frac_part.is_empty() { "0" } else { frac_part };
    join!(int_part, ".", frac_part).parse().ok()
}

/// en-US grouping: `1234567.5` → "1,234,567.5"; at most three fraction
/// digits, ties rounded away from zero, trailing zeros dropped.
pub fn group_thousands(value: f64) -> String {
    if value.is_nan() {
        return s!("NaN");
    }
    if value.is_infinite() {
        return s!(if value < 0.0 { "-∞" } else { "∞" });
    }

    let abs = value.abs();
    // past 2^53 there is no fraction left to round, and *1000 could overflow
    let rounded = if abs < 1e15 { (abs * ROUND_SCALE).round() / ROUND_SCALE } else { abs };
    let shown = rounded.to_string();
    let (int_digits, frac) = shown.split_once('.').unwrap_or((shown.as_str(), ""));

    let mut out = String::with_capacity(int_digits.len() + int_digits.len() / 3 + frac.len() + 2);
    if value.is_sign_negative() && rounded != 0.0 {
        out.push('-');
    }
    for (i, ch) in int_digits.chars().enumerate() {
        if i > 0 && (int_digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}
