//! Core data types shared by the session engine, the game controller and the
//! browser adapter.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::QuizError;
use crate::summary::SessionSummary;

/// One quizzable word. Catalog data is static and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WordEntry {
    pub word: &'static str,
    pub pronunciation: &'static str,
    /// Candidate spellings; exactly one equals `word`.
    pub options: &'static [&'static str],
    pub definition: &'static str,
    pub origin: &'static str,
    pub part_of_speech: &'static str,
    pub sentence: &'static str,
}

impl WordEntry {
    pub fn correct_spelling(&self) -> &'static str {
        self.word
    }

    /// Number of options equal to the correct spelling. Valid entries return 1.
    pub fn correct_option_count(&self) -> usize {
        self.options.iter().filter(|o| **o == self.word).count()
    }
}

/// Named, ordered catalog of quiz entries.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct WordSet {
    pub key: &'static str,
    pub name: &'static str,
    pub words: &'static [WordEntry],
}

impl WordSet {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A question as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Question {
    pub entry: WordEntry,
    /// Shuffled copy of `entry.options`.
    pub options: Vec<&'static str>,
}

/// Outcome of submitting one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnswerResult {
    pub correct: bool,
    pub chosen: String,
    pub correct_spelling: &'static str,
    pub score_delta: u32,
}

/// One answered question, appended to the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HistoryEntry {
    pub word: &'static str,
    pub correct: bool,
}

/// The kinds of hint a learner can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum HintKind {
    Definition,
    Origin,
    PartOfSpeech,
    Example,
}

impl HintKind {
    pub const ALL: [HintKind; 4] = [
        HintKind::Definition,
        HintKind::Origin,
        HintKind::PartOfSpeech,
        HintKind::Example,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Definition => "Definition",
            Self::Origin => "Origin",
            Self::PartOfSpeech => "Part of Speech",
            Self::Example => "Example",
        }
    }
}

impl FromStr for HintKind {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "definition" => Ok(Self::Definition),
            "origin" => Ok(Self::Origin),
            "partOfSpeech" | "part_of_speech" => Ok(Self::PartOfSpeech),
            "example" | "sentence" => Ok(Self::Example),
            other => Err(QuizError::InvalidInput {
                reason: format!("unknown hint kind '{other}'"),
            }),
        }
    }
}

/// What a hint request produces. Example sentences are only ever spoken.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum HintContent {
    Display { kind: HintKind, text: &'static str },
    Speak { text: &'static str },
}

impl fmt::Display for HintContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Display { kind, text } => write!(f, "{}: {}", kind.label(), text),
            Self::Speak { .. } => f.write_str("Playing example sentence..."),
        }
    }
}

/// Result of moving to the next question.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStatus {
    InProgress(Question),
    Completed(SessionSummary),
}

impl SessionStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Progress counters shown alongside each question.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Progress {
    /// 1-based number of the current question.
    pub question_number: usize,
    pub question_count: usize,
    pub score: u32,
}

impl Progress {
    /// Fill ratio of the progress bar in percent.
    pub fn percent(&self) -> f64 {
        if self.question_count == 0 {
            return 0.0;
        }
        self.question_number as f64 / self.question_count as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_kind_parse() {
        assert_eq!("definition".parse::<HintKind>(), Ok(HintKind::Definition));
        assert_eq!("partOfSpeech".parse::<HintKind>(), Ok(HintKind::PartOfSpeech));
        assert_eq!("example".parse::<HintKind>(), Ok(HintKind::Example));
        assert!("spelling".parse::<HintKind>().is_err());
    }

    #[test]
    fn test_speak_hint_display_hides_text() {
        let hint = HintContent::Speak { text: "The necessary tools arrived." };
        assert!(!hint.to_string().contains("necessary"));
    }

    #[test]
    fn test_progress_percent() {
        let p = Progress { question_number: 3, question_count: 10, score: 2 };
        assert!((p.percent() - 30.0).abs() < 1e-9);
    }
}
