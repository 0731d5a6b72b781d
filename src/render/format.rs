/// Formats pesos the way es-AR locales do: `$ 16.490,00`
pub fn format_ars(value: f64) -> String {
    format_currency(value, "$")
}

/// Formats dollars in es-AR style: `US$ 14,99`
pub fn format_usd(value: f64) -> String {
    format_currency(value, "US$")
}

fn format_currency(value: f64, symbol: &str) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let units = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{} {},{:02}", sign, symbol, grouped, fraction)
}
