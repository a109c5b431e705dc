//! Money formatting helpers shared by engine messages and the CLI

/// Round to a whole number and group thousands, e.g. 5250.4 -> "5,250"
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Prefix a formatted amount with a currency symbol
pub fn format_money(currency: &str, value: f64) -> String {
    if value < 0.0 {
        format!("-{}{}", currency, format_amount(-value))
    } else {
        format!("{}{}", currency, format_amount(value))
    }
}
