//! FILENAME: core/engine/src/number_format.rs
//! PURPOSE: Number formatting utilities for metric cards, tables and insights.
//! CONTEXT: Converts raw aggregate values to display strings. The dashboard
//! uses US-style currency ("$1,234.56") and plain counts ("120").

use serde::{Deserialize, Serialize};

/// Display format of a numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NumberFormat {
    /// Whole number with thousands separators.
    Count,
    Number {
        decimal_places: u8,
        use_thousands_separator: bool,
    },
    /// Symbol-prefixed amount with thousands separators.
    Currency {
        decimal_places: u8,
        symbol: String,
    },
    /// A fraction shown as a percentage (0.25 -> "25%").
    Percentage {
        decimal_places: u8,
    },
}

impl NumberFormat {
    /// "$1,234.56"
    pub fn currency_usd() -> NumberFormat {
        NumberFormat::Currency {
            decimal_places: 2,
            symbol: "$".to_string(),
        }
    }

    /// Plain decimal without separators, e.g. a profit margin "38.50".
    pub fn number(decimal_places: u8) -> NumberFormat {
        NumberFormat::Number {
            decimal_places,
            use_thousands_separator: false,
        }
    }
}

/// Format a number according to the specified format.
pub fn format_number(value: f64, format: &NumberFormat) -> String {
    match format {
        NumberFormat::Count => add_thousands_separator(&format!("{:.0}", value)),
        NumberFormat::Number {
            decimal_places,
            use_thousands_separator,
        } => format_decimal(value, *decimal_places, *use_thousands_separator),
        NumberFormat::Currency {
            decimal_places,
            symbol,
        } => format_currency(value, *decimal_places, symbol),
        NumberFormat::Percentage { decimal_places } => format_percentage(value, *decimal_places),
    }
}

/// Format a number with specified decimal places and optional thousands separator.
fn format_decimal(value: f64, decimal_places: u8, use_thousands_separator: bool) -> String {
    let rounded = format!("{:.prec$}", value, prec = decimal_places as usize);

    if use_thousands_separator {
        add_thousands_separator(&rounded)
    } else {
        rounded
    }
}

/// Add thousands separators to a numeric string.
fn add_thousands_separator(s: &str) -> String {
    let (integer_part, decimal_part) = match s.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (s, None),
    };

    let negative = integer_part.starts_with('-');
    let digits: Vec<char> = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    let mut result = String::with_capacity(s.len() + len / 3 + 1);
    if negative {
        result.push('-');
    }
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    if let Some(decimal) = decimal_part {
        result.push('.');
        result.push_str(decimal);
    }

    result
}

/// Format a number as currency. Negative amounts are wrapped in parentheses.
fn format_currency(value: f64, decimal_places: u8, symbol: &str) -> String {
    let formatted = add_thousands_separator(&format!("{:.prec$}", value.abs(), prec = decimal_places as usize));
    let with_symbol = format!("{}{}", symbol, formatted);

    if value < 0.0 {
        format!("({})", with_symbol)
    } else {
        with_symbol
    }
}

/// Format a fraction as percentage.
fn format_percentage(value: f64, decimal_places: u8) -> String {
    let percentage = value * 100.0;
    format!("{:.prec$}%", percentage, prec = decimal_places as usize)
}
