//! Strength evaluation result types.

/// Heuristic strength score, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: i64 = 100;

    /// Builds a score, clamping `value` into `0..=100`.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, Self::MAX) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Qualitative strength band of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    /// Nothing to score (empty password).
    NotEvaluated,
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    /// Band for a score; upper bounds are inclusive.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            0..=25 => PasswordStrength::Weak,
            26..=50 => PasswordStrength::Fair,
            51..=75 => PasswordStrength::Good,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::NotEvaluated => "",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Fair => "Fair",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
        }
    }

    /// Display color tag of the strength meter.
    pub fn color(&self) -> &'static str {
        match self {
            PasswordStrength::NotEvaluated => "bg-gray-600",
            PasswordStrength::Weak => "bg-red-600",
            PasswordStrength::Fair => "bg-orange-500",
            PasswordStrength::Good => "bg-yellow-500",
            PasswordStrength::Strong => "bg-green-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    pub strength: PasswordStrength,
    /// Human readable hints; they never change the score.
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    pub fn not_evaluated() -> Self {
        Self {
            score: PasswordScore::default(),
            strength: PasswordStrength::NotEvaluated,
            reasons: Vec::new(),
        }
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    pub fn label(&self) -> &'static str {
        self.strength.label()
    }

    pub fn color(&self) -> &'static str {
        self.strength.color()
    }
}
