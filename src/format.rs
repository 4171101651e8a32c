use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"$1,234,567.89"`, `-42.5` → `"-$42.50"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let digits = grouped_digits(val);
    if val < Decimal::ZERO {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

/// Currency with an explicit sign: `+` for credits (including zero), `-` for debits.
pub(crate) fn format_signed_amount(val: Decimal) -> String {
    let sign = if val < Decimal::ZERO { '-' } else { '+' };
    format!("{sign}${}", grouped_digits(val))
}

/// One-decimal percentage, e.g. `60` → `"60.0%"`.
pub(crate) fn format_percent(val: Decimal) -> String {
    format!("{:.1}%", round_half_up(val, 1))
}

fn round_half_up(val: Decimal, dp: u32) -> Decimal {
    val.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn grouped_digits(val: Decimal) -> String {
    let abs = round_half_up(val.abs(), 2);
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    format!("{with_commas}.{dec_part}")
}

/// Human relative time at day granularity ("3 days ago", "in a month").
pub(crate) fn time_from_now(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();
    match days {
        0 => return "today".into(),
        1 => return "yesterday".into(),
        -1 => return "tomorrow".into(),
        _ => {}
    }

    let span = describe_span(days.unsigned_abs());
    if days > 0 {
        format!("{span} ago")
    } else {
        format!("in {span}")
    }
}

fn describe_span(days: u64) -> String {
    match days {
        0..=1 => "a day".into(),
        2..=25 => format!("{days} days"),
        26..=45 => "a month".into(),
        46..=319 => {
            // Average month length, rounded to the nearest whole month
            let months = ((days as f64) / 30.44).round().max(2.0) as u64;
            format!("{months} months")
        }
        320..=547 => "a year".into(),
        _ => {
            let years = ((days as f64) / 365.25).round().max(2.0) as u64;
            format!("{years} years")
        }
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
