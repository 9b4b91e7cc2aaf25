//! Password strength evaluator - main scoring logic.
//!
//! The score is a UX signal for the strength meter, not a security
//! guarantee: it only looks at length, character classes and repeats.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{
    SectionResult, character_variety_section, length_section, repetition_section,
};
use crate::types::{PasswordEvaluation, PasswordScore, PasswordStrength};

/// Scores a password on a 0-100 scale.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordEvaluation` with score, strength band and reasons. The empty
/// password scores 0 and is `NotEvaluated`.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    if password.expose_secret().is_empty() {
        return PasswordEvaluation::not_evaluated();
    }

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionResult); 3] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("repetition", repetition_section),
    ];

    let mut total = 0;
    let mut reasons = Vec::new();

    for (_section_name, section_fn) in sections {
        let result = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!("Section {} scored {}", _section_name, result.points);

        total += result.points;
        reasons.extend(result.reason);
    }

    let score = PasswordScore::new(total);
    PasswordEvaluation {
        score,
        strength: PasswordStrength::from_score(score),
        reasons,
    }
}

/// Scores the password a strength meter shows for a result set.
///
/// Only the first password is scored, and only for single-password
/// requests; bulk results and empty results show no meter.
pub fn evaluate_for_display(passwords: &[String], bulk_count: usize) -> Option<PasswordEvaluation> {
    if bulk_count != 1 {
        return None;
    }
    let first = passwords.first()?;
    let secret = SecretString::new(first.clone().into());
    Some(evaluate_password_strength(&secret))
}
