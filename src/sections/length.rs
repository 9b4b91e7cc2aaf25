//! Length section - base points for password length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const POINTS_PER_CHAR: i64 = 4;
const MAX_LENGTH_POINTS: i64 = 40;
const RECOMMENDED_LENGTH: usize = 12;

/// Awards 4 points per character, capped at 40.
///
/// # Returns
/// The base points, with a hint when the password is shorter than recommended.
pub fn length_section(password: &SecretString) -> SectionResult {
    let len = password.expose_secret().chars().count();
    let points = (len as i64 * POINTS_PER_CHAR).min(MAX_LENGTH_POINTS);

    if len < RECOMMENDED_LENGTH {
        return SectionResult::with_reason(
            points,
            format!("Password is shorter than {} characters", RECOMMENDED_LENGTH),
        );
    }
    SectionResult::points(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        let result = length_section(&pwd);
        assert_eq!(result.points, 28);
        assert_eq!(
            result.reason,
            Some("Password is shorter than 12 characters".to_string())
        );
    }

    #[test]
    fn test_length_section_capped() {
        let pwd = SecretString::new("LongEnough123!".to_string().into());
        let result = length_section(&pwd);
        assert_eq!(result, SectionResult::points(40));
    }

    #[test]
    fn test_length_section_counts_chars() {
        let pwd = SecretString::new("ééé".to_string().into());
        assert_eq!(length_section(&pwd).points, 12);
    }
}
