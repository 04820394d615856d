/// Display formatting for sizes, counts and timestamps.
///
/// All sizes are `u64` bytes internally. Floating point is only used at the
/// formatting boundary.
use chrono::{DateTime, Local};

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with a binary unit (1 KB = 1024 B).
///
/// Bytes are printed as integers; KB and MB with one decimal; GB and TB
/// with two.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    match unit {
        0 => format!("{bytes} B"),
        1 | 2 => format!("{value:.1} {}", UNITS[unit]),
        _ => format!("{value:.2} {}", UNITS[unit]),
    }
}

/// Format a byte count as megabytes with two decimals, e.g. `"5.00 MB"`.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Format a modification time as `YYYY-MM-DD HH:MM`, or `Unknown`.
pub fn format_modified(modified: Option<&DateTime<Local>>) -> String {
    match modified {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => "Unknown".to_string(),
    }
}

/// Format an item count with thousand separators.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
