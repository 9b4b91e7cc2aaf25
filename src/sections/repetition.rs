//! Repetition section - penalises repeated characters in short passwords.

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const REPEAT_PENALTY: i64 = -10;
/// Passwords at least this long are not penalised for repeats.
const REPEAT_FREE_LENGTH: usize = 12;

/// Subtracts 10 points when any character occurs twice in a password
/// shorter than 12 characters.
pub fn repetition_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let mut seen = HashSet::new();
    let mut len = 0;
    let mut repeated = false;

    for c in pwd.chars() {
        len += 1;
        if !seen.insert(c) {
            repeated = true;
        }
    }

    if repeated && len < REPEAT_FREE_LENGTH {
        return SectionResult::with_reason(REPEAT_PENALTY, "Password repeats characters");
    }
    SectionResult::points(0)
}
