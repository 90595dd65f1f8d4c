//! Display Formatting
//!
//! Brazilian Real currency, plain numbers and filter normalization.

/// Placeholder for values the backend did not provide
pub const NOT_AVAILABLE: &str = "N/D";

/// Format a value as Brazilian Real, e.g. `R$ 1.234,50`.
///
/// Matches `Intl.NumberFormat("pt-BR", { style: "currency", currency: "BRL" })`:
/// `.` groups thousands, `,` separates cents, and the symbol is followed by a
/// non-breaking space. Absent or non-finite values yield [`NOT_AVAILABLE`].
pub fn format_brl(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return NOT_AVAILABLE.to_string();
    };

    // Whole cents, ties away from zero like `Intl`
    let total_cents = (value.abs() * 100.0).round();
    let digits = format!("{:03.0}", total_cents);
    let (int_part, cents) = digits.split_at(digits.len() - 2);
    let negative = value < 0.0 && total_cents > 0.0;

    format!(
        "{}R$\u{a0}{},{}",
        if negative { "-" } else { "" },
        group_thousands(int_part),
        cents
    )
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Render a quantity the way the page always has: integers without a
/// fractional part, zero or absent as [`NOT_AVAILABLE`].
pub fn format_quantity(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v != 0.0 => {
            if v.fract() == 0.0 && v.abs() < 1e15 {
                format!("{}", v as i64)
            } else {
                format!("{}", v)
            }
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Text or [`NOT_AVAILABLE`] when empty or absent
pub fn text_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Keep only ASCII digits: `2024-03-01` → `20240301`,
/// `12.345.678/0001-90` → `12345678000190`.
pub fn strip_separators(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Drop CNPJ punctuation (`.`, `/`, `-`, whitespace) but keep letters, so
/// alphanumeric CNPJs survive: `12.ABC.345/01DE-35` → `12ABC34501DE35`.
pub fn strip_cnpj_punctuation(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '.' | '/' | '-') && !c.is_whitespace())
        .collect()
}

/// First `max_chars` characters followed by `...`
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}
