//! Character variety section - bonuses for uppercase, lowercase, digits and symbols.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Symbols recognised by the meter. Wider than the generator's symbol group (`"`).
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:\",.<>?/";

const UPPER_POINTS: i64 = 15;
const LOWER_POINTS: i64 = 15;
const DIGIT_POINTS: i64 = 15;
const SYMBOL_POINTS: i64 = 20;

/// Adds a bonus for every character class present.
///
/// # Returns
/// The summed bonus, with a hint listing the missing classes.
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_symbol = pwd.chars().any(|c| SYMBOLS.contains(c));

    let classes = [
        (has_upper, UPPER_POINTS, "uppercase"),
        (has_lower, LOWER_POINTS, "lowercase"),
        (has_digit, DIGIT_POINTS, "numbers"),
        (has_symbol, SYMBOL_POINTS, "symbols"),
    ];

    let points: i64 = classes
        .iter()
        .filter(|(present, _, _)| *present)
        .map(|(_, points, _)| points)
        .sum();

    let missing: Vec<_> = classes
        .iter()
        .filter(|(present, _, _)| !present)
        .map(|(_, _, name)| *name)
        .collect();

    if !missing.is_empty() {
        return SectionResult::with_reason(points, format!("Missing: {}", missing.join(", ")));
    }
    SectionResult::points(points)
}
