//! Password evaluation sections
//!
//! Each section scores a specific aspect of password strength.

mod length;
mod repetition;
mod variety;

pub use length::length_section;
pub use repetition::repetition_section;
pub use variety::character_variety_section;

/// Outcome of one section.
/// - `points` - contribution to the score (negative for penalties)
/// - `reason` - optional hint shown alongside the score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionResult {
    pub points: i64,
    pub reason: Option<String>,
}

impl SectionResult {
    pub fn points(points: i64) -> Self {
        Self {
            points,
            reason: None,
        }
    }

    pub fn with_reason(points: i64, reason: impl Into<String>) -> Self {
        Self {
            points,
            reason: Some(reason.into()),
        }
    }
}
