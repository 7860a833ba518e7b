//! Text helpers for SVG output: escaping and number formatting.

/// Escape text for use in SVG/XML content and attribute values.
#[must_use]
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Integer with thousands separators: `8395` → `"8,395"`.
#[must_use]
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Signed whole-number percentage: `240.0` → `"+240%"`, `-12.4` → `"-12%"`.
#[must_use]
pub fn format_growth(value: f64) -> String {
    let rounded = value.round();
    if rounded > 0.0 {
        format!("+{rounded}%")
    } else if rounded < 0.0 {
        format!("{rounded}%")
    } else {
        "0%".to_string()
    }
}

/// Round a value to one decimal for labels: `15.0` → `"15"`, `15.866` → `"15.9"`.
#[must_use]
pub fn format_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded}")
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
