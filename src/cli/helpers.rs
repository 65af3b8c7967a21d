//! Shared helper functions for CLI commands

/// Parse a numeric field the way the menu accepts it
///
/// Anything that is not a finite, non-negative number becomes 0. Fractions
/// are truncated and values beyond `u32::MAX` saturate.
pub fn parse_lenient_number(input: &str) -> u32 {
    match input.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => n as u32,
        _ => 0,
    }
}

/// Truncate a string to `max_len` characters, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
