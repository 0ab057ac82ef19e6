//! End-of-round scoring: percentage, star rating and tier message.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::config::RatingPolicy;
use crate::types::HistoryEntry;

/// Qualitative performance bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Tier {
    KeepPracticing,
    Good,
    Great,
    Excellent,
    Outstanding,
}

impl Tier {
    pub fn stars(self) -> u8 {
        match self {
            Self::KeepPracticing => 1,
            Self::Good => 2,
            Self::Great => 3,
            Self::Excellent => 4,
            Self::Outstanding => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::KeepPracticing => "Keep practicing",
            Self::Good => "Good",
            Self::Great => "Great",
            Self::Excellent => "Excellent",
            Self::Outstanding => "Outstanding",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Outstanding => "Outstanding! You're a spelling champion! 🏆",
            Self::Excellent => "Excellent work! Almost perfect! 🌟",
            Self::Great => "Good job! Keep practicing! 👍",
            Self::Good => "Not bad! You're improving! 📚",
            Self::KeepPracticing => "Keep trying! Practice makes perfect! 💪",
        }
    }

    /// Star string for display, e.g. "⭐⭐⭐".
    pub fn star_string(self) -> String {
        "⭐".repeat(self.stars() as usize)
    }

    /// Highest tier whose threshold `percentage` reaches.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::Outstanding
        } else if percentage >= 80.0 {
            Self::Excellent
        } else if percentage >= 70.0 {
            Self::Great
        } else if percentage >= 60.0 {
            Self::Good
        } else {
            Self::KeepPracticing
        }
    }

    /// Ten-point thresholds: perfect, 8, 6, 4. Other maxima are rescaled to ten.
    pub fn from_absolute(score: u32, max: u32) -> Self {
        if max == 0 {
            return Self::KeepPracticing;
        }
        if score >= max {
            return Self::Outstanding;
        }
        let points = score as f64 * 10.0 / max as f64;
        if points >= 8.0 {
            Self::Excellent
        } else if points >= 6.0 {
            Self::Great
        } else if points >= 4.0 {
            Self::Good
        } else {
            Self::KeepPracticing
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SessionSummary {
    pub final_score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub star_rating: u8,
    pub tier: Tier,
    pub correct_count: usize,
    pub incorrect_count: usize,
}

impl SessionSummary {
    pub fn is_perfect(&self) -> bool {
        self.max_score > 0 && self.final_score >= self.max_score
    }

    /// Closing message; only a full score is called perfect.
    pub fn message(&self) -> &'static str {
        if self.is_perfect() {
            "Perfect! You're a spelling champion! 🏆"
        } else {
            self.tier.message()
        }
    }
}

/// Build the round summary from the final score and answer history.
pub fn summarize(
    final_score: u32,
    max_possible_score: u32,
    history: &[HistoryEntry],
    policy: RatingPolicy,
) -> SessionSummary {
    let percentage = if max_possible_score == 0 {
        0.0
    } else {
        final_score as f64 / max_possible_score as f64 * 100.0
    };
    let tier = match policy {
        RatingPolicy::Percentage => Tier::from_percentage(percentage),
        RatingPolicy::Absolute => Tier::from_absolute(final_score, max_possible_score),
    };
    let correct_count = history.iter().filter(|h| h.correct).count();
    SessionSummary {
        final_score,
        max_score: max_possible_score,
        percentage,
        star_rating: tier.stars(),
        tier,
        correct_count,
        incorrect_count: history.len() - correct_count,
    }
}
