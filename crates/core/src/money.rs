use rust_decimal::Decimal;

/// Formats an amount using the pt-BR currency convention, e.g. `R$ 1.850,00`.
///
/// Values are rounded to two fraction digits; the thousands separator is a
/// dot and the decimal separator a comma. Total over the whole `Decimal`
/// range, including `Decimal::MAX`.
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();

    let text = rounded.abs().to_string();
    let (reais, centavos) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, format!("{fraction:0<2}")),
        None => (text.as_str(), "00".to_string()),
    };

    let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
    let digits = reais.len();
    for (index, ch) in reais.chars().enumerate() {
        if index > 0 && (digits - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{centavos}")
}

/// Renders an order total for the dashboard feed.
///
/// Unpriced orders carry a zero total and render as a placeholder instead of
/// `R$ 0,00`. Negative amounts are a data-quality defect owned upstream; they
/// also render as the placeholder rather than being clamped.
pub fn display_amount(amount: Decimal) -> String {
    if amount > Decimal::ZERO {
        format_brl(amount)
    } else {
        "-".to_string()
    }
}
