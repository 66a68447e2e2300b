use num_format::Locale;

/// Separator between amount and currency symbol (`U+00A0`).
pub const CURRENCY_SPACE: char = '\u{a0}';
pub const CURRENCY_SYMBOL: &str = "€";
/// `es-ES` only groups thousands once the integer part has five digits.
const MIN_GROUPED_DIGITS: usize = 5;

/// Formats `amount` as `es-ES` euros with no fraction digits.
///
/// Output matches the host application's formatter: `950 €`, `1234 €`,
/// `12.345 €`, `-1000 €`. Rounding is half away from zero and affects the
/// text only; amounts rounding to negative zero keep their sign (`-0 €`).
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("NaN{CURRENCY_SPACE}{CURRENCY_SYMBOL}");
    }

    let rounded = amount.round();
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let magnitude = if rounded.is_infinite() {
        "∞".to_owned()
    } else {
        group_digits(&format!("{:.0}", rounded.abs()))
    };

    format!("{sign}{magnitude}{CURRENCY_SPACE}{CURRENCY_SYMBOL}")
}

/// Formats a progress percentage with one decimal, e.g. `64.0%`.
#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.1}%")
}

/// Rounds `value` to the nearest multiple of `step`.
#[must_use]
pub fn round_to_nearest(value: f64, step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}

/// Inserts the `es-ES` thousands separator into an ASCII digit string.
fn group_digits(digits: &str) -> String {
    if digits.len() < MIN_GROUPED_DIGITS {
        return digits.to_owned();
    }

    let separator = Locale::es.separator();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}
