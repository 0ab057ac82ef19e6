//! Scoring configuration.
//!
//! The defaults reproduce the classic game: one point per correct answer,
//! ten questions per round and percentage-based star tiers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Points awarded per correct answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScoringMode {
    /// +1 per correct answer.
    Flat,
    /// `full` points for an unaided correct answer, `hinted` once any hint was used.
    Weighted { full: u32, hinted: u32 },
}

impl ScoringMode {
    pub const WEIGHTED: ScoringMode = ScoringMode::Weighted { full: 10, hinted: 5 };

    pub fn delta(self, correct: bool, hint_used: bool) -> u32 {
        if !correct {
            return 0;
        }
        match self {
            Self::Flat => 1,
            Self::Weighted { full, hinted } => {
                if hint_used {
                    hinted
                } else {
                    full
                }
            }
        }
    }

    /// Best score obtainable for a single question.
    pub fn max_per_question(self) -> u32 {
        match self {
            Self::Flat => 1,
            Self::Weighted { full, hinted } => full.max(hinted),
        }
    }
}

impl Default for ScoringMode {
    fn default() -> Self {
        Self::Flat
    }
}

/// How many questions a round contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum QuestionLimit {
    /// At most this many questions, fewer if the set is smaller.
    Fixed(usize),
    /// Every word of the set.
    WholeSet,
}

impl QuestionLimit {
    pub fn question_count(self, set_len: usize) -> usize {
        match self {
            Self::Fixed(n) => n.min(set_len),
            Self::WholeSet => set_len,
        }
    }
}

impl Default for QuestionLimit {
    fn default() -> Self {
        Self::Fixed(10)
    }
}

/// Which thresholds map a final score to a star tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RatingPolicy {
    /// 90 / 80 / 70 / 60 percent.
    #[default]
    Percentage,
    /// Perfect / 8 / 6 / 4 on a ten-point scale.
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringConfig {
    pub mode: ScoringMode,
    pub question_limit: QuestionLimit,
    pub rating: RatingPolicy,
}

impl ScoringConfig {
    pub fn weighted() -> Self {
        Self {
            mode: ScoringMode::WEIGHTED,
            ..Self::default()
        }
    }

    pub fn max_possible_score(&self, question_count: usize) -> u32 {
        self.mode.max_per_question() * question_count as u32
    }

    /// Parse a config from JSON, e.g. `{"mode":{"weighted":{"full":10,"hinted":5}}}`.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::QuizError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_delta() {
        assert_eq!(ScoringMode::Flat.delta(true, false), 1);
        assert_eq!(ScoringMode::Flat.delta(true, true), 1);
        assert_eq!(ScoringMode::Flat.delta(false, false), 0);
    }

    #[test]
    fn test_weighted_delta() {
        let mode = ScoringMode::WEIGHTED;
        assert_eq!(mode.delta(true, false), 10);
        assert_eq!(mode.delta(true, true), 5);
        assert_eq!(mode.delta(false, true), 0);
    }

    #[test]
    fn test_question_limit() {
        assert_eq!(QuestionLimit::default().question_count(12), 10);
        assert_eq!(QuestionLimit::Fixed(10).question_count(4), 4);
        assert_eq!(QuestionLimit::WholeSet.question_count(12), 12);
    }

    #[test]
    fn test_max_possible_score() {
        assert_eq!(ScoringConfig::default().max_possible_score(10), 10);
        assert_eq!(ScoringConfig::weighted().max_possible_score(10), 100);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_from_json() {
        let cfg = ScoringConfig::from_json(
            r#"{"mode":{"weighted":{"full":10,"hinted":5}},"question_limit":"whole_set"}"#,
        )
        .unwrap();
        assert_eq!(cfg.mode, ScoringMode::WEIGHTED);
        assert_eq!(cfg.question_limit, QuestionLimit::WholeSet);
        assert_eq!(cfg.rating, RatingPolicy::Percentage);
        assert!(ScoringConfig::from_json("{").is_err());
    }
}
