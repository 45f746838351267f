//! Display formatting for prices, volumes and percentages

/// Thousands-separated number with a fixed number of decimals
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "--".to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

/// Plain quantity: whole units from 1,000 up, up to 3 decimals below
pub fn format_number(value: f64) -> String {
    if value.abs() >= 1_000.0 {
        format_grouped(value, 0)
    } else {
        trim_zeros(format_grouped(value, 3))
    }
}

/// Price in dollars; sub-dollar prices keep 6 decimals of precision
pub fn format_usd(value: f64) -> String {
    let digits = if value.abs() >= 1.0 || value == 0.0 {
        format_grouped(value, 2)
    } else {
        trim_zeros(format_grouped(value, 6))
    };
    format!("${}", digits)
}

/// Short dollar amount for narrow cells (e.g., "$1.32T")
pub fn format_compact_usd(value: f64) -> String {
    if !value.is_finite() {
        return "--".to_string();
    }
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e12 {
        (value / 1e12, "T")
    } else if abs >= 1e9 {
        (value / 1e9, "B")
    } else if abs >= 1e6 {
        (value / 1e6, "M")
    } else if abs >= 1e3 {
        (value / 1e3, "K")
    } else {
        return format_usd(value);
    };
    format!("${:.2}{}", scaled, suffix)
}

/// Signed 24h change with two decimals (e.g., "+1.23%")
pub fn format_change(change: f64) -> String {
    if !change.is_finite() {
        return "--%".to_string();
    }
    format!("{:+.2}%", change)
}

/// Supply is unbounded when the API reports none
pub fn format_supply(supply: Option<f64>) -> String {
    supply.map(format_number).unwrap_or_else(|| "∞".to_string())
}

fn trim_zeros(formatted: String) -> String {
    if !formatted.contains('.') {
        return formatted;
    }
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
