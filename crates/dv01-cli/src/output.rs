//! Output formatting utilities.

use colored::Colorize;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Prints data as a formatted table.
pub fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
}

/// Prints data as JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
pub fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Rounds to `dp` places, half away from zero, as a decimal.
///
/// Returns `None` for NaN or infinity.
fn round_decimal(value: f64, dp: u32) -> Option<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
}

/// Formats a decimal rate as a percentage string.
pub fn format_percent(rate: f64, precision: u32) -> String {
    match round_decimal(rate * 100.0, precision) {
        Some(pct) => format!("{pct:.prec$}%", prec = precision as usize),
        None => format!("{rate}"),
    }
}

/// Formats an amount with thousands separators and 2 decimals.
pub fn format_amount(value: f64) -> String {
    let Some(amount) = round_decimal(value, 2) else {
        return format!("{value}");
    };
    let text = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(973_050.084_380_229), "973,050.08");
        assert_eq!(format_amount(1_000_000.0), "1,000,000.00");
        assert_eq!(format_amount(61.646), "61.65");
        assert_eq!(format_amount(-1234.5), "-1,234.50");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-0.001), "0.00");
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.055, 4), "5.5000%");
        assert_eq!(format_percent(0.05, 2), "5.00%");
        assert_eq!(format_percent(0.051, 2), "5.10%");
        assert_eq!(format_percent(0.056_25, 3), "5.625%");
    }
}
