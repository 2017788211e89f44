//! Utility functions and helpers

use solana_sdk::pubkey::Pubkey;

/// Format a non-negative quantity with grouped thousands, e.g. 1234567.891 -> "1,234,567.89"
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

/// Format a USD amount, e.g. 1234567.891 -> "$1,234,567.89"
pub fn format_usd(value: f64) -> String {
    format!("${}", format_grouped(value, 2))
}

/// Format a percentage with two decimals, e.g. 12.3456 -> "12.35%"
pub fn format_pct(value: f64) -> String {
    format!("{value:.2}%")
}

/// Shorten a pool/mint address for log and report output
pub fn format_address(address: &Pubkey) -> String {
    let s = address.to_string();
    format!("{}...{}", &s[..8], &s[s.len() - 8..])
}
