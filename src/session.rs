//! Quiz session lifecycle: start, question, answer, hint, advance, summary.
//!
//! A `SessionState` is a single owned value; every operation takes it by
//! reference. One question is current at a time (`position`), and once the
//! round is over every per-question operation fails with `OutOfRange`.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::catalog::FUN_FACTS;
use crate::config::ScoringConfig;
use crate::error::{QuizError, Result};
use crate::shuffle::shuffled;
use crate::summary::{self, SessionSummary};
use crate::types::{
    AnswerResult, HintContent, HintKind, HistoryEntry, Progress, Question, SessionStatus,
    WordEntry, WordSet,
};

#[derive(Debug, Clone)]
pub struct SessionState {
    set_key: &'static str,
    active_set: Vec<WordEntry>,
    question_count: usize,
    position: usize,
    score: u32,
    hint_used: bool,
    answered: bool,
    history: Vec<HistoryEntry>,
    facts: &'static [&'static str],
    used_facts: Vec<&'static str>,
    config: ScoringConfig,
    rng: StdRng,
}

/// Start a session on a shuffled copy of `set`, seeding the RNG from entropy.
pub fn start_session(set: &WordSet, config: ScoringConfig) -> Result<SessionState> {
    start_session_with_rng(set, config, StdRng::from_entropy())
}

/// Start a session with a caller-supplied RNG (deterministic in tests).
pub fn start_session_with_rng(
    set: &WordSet,
    config: ScoringConfig,
    mut rng: StdRng,
) -> Result<SessionState> {
    if set.is_empty() {
        return Err(QuizError::EmptyWordSet {
            key: set.key.to_string(),
        });
    }
    let question_count = config.question_limit.question_count(set.len());
    if question_count == 0 {
        return Err(QuizError::InvalidInput {
            reason: "question limit must be at least 1".to_string(),
        });
    }
    let active_set = shuffled(set.words, &mut rng);
    info!(
        "starting session on '{}' ({} words, {} questions)",
        set.key,
        active_set.len(),
        question_count
    );
    Ok(SessionState {
        set_key: set.key,
        active_set,
        question_count,
        position: 0,
        score: 0,
        hint_used: false,
        answered: false,
        history: Vec::with_capacity(question_count),
        facts: FUN_FACTS,
        used_facts: Vec::new(),
        config,
        rng,
    })
}

impl SessionState {
    /// Replace the flavour-fact pool shown with feedback.
    pub fn with_facts(mut self, facts: &'static [&'static str]) -> Self {
        self.facts = facts;
        self.used_facts.clear();
        self
    }

    pub fn set_key(&self) -> &'static str {
        self.set_key
    }

    pub fn active_set(&self) -> &[WordEntry] {
        &self.active_set
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn is_completed(&self) -> bool {
        self.position >= self.question_count
    }

    pub fn progress(&self) -> Progress {
        Progress {
            question_number: (self.position + 1).min(self.question_count),
            question_count: self.question_count,
            score: self.score,
        }
    }

    pub fn current_entry(&self) -> Result<&WordEntry> {
        if self.is_completed() {
            return Err(QuizError::OutOfRange {
                position: self.position,
                length: self.question_count,
            });
        }
        Ok(&self.active_set[self.position])
    }

    /// Present the current question. Call once per question transition: this
    /// resets the hint flag. Use [`Self::shuffled_options`] to redraw.
    pub fn current_question(&mut self) -> Result<Question> {
        let entry = *self.current_entry()?;
        self.hint_used = false;
        Ok(Question {
            entry,
            options: shuffled(entry.options, &mut self.rng),
        })
    }

    /// Reshuffle the current options without touching any session flag.
    pub fn shuffled_options(&mut self) -> Result<Vec<&'static str>> {
        let entry = *self.current_entry()?;
        Ok(shuffled(entry.options, &mut self.rng))
    }

    /// Score `chosen` against the current word. Each question accepts one answer.
    pub fn submit_answer(&mut self, chosen: &str) -> Result<AnswerResult> {
        let entry = *self.current_entry()?;
        if self.answered {
            return Err(QuizError::AlreadyAnswered);
        }
        let correct = chosen == entry.correct_spelling();
        let score_delta = self.config.mode.delta(correct, self.hint_used);
        self.score += score_delta;
        self.answered = true;
        self.history.push(HistoryEntry {
            word: entry.correct_spelling(),
            correct,
        });
        debug!(
            "answer '{}' for '{}': correct={} delta={}",
            chosen, entry.word, correct, score_delta
        );
        Ok(AnswerResult {
            correct,
            chosen: chosen.to_string(),
            correct_spelling: entry.correct_spelling(),
            score_delta,
        })
    }

    /// Reveal a hint for the current word. Never changes score or history.
    pub fn request_hint(&mut self, kind: HintKind) -> Result<HintContent> {
        let entry = *self.current_entry()?;
        self.hint_used = true;
        Ok(match kind {
            HintKind::Definition => HintContent::Display {
                kind,
                text: entry.definition,
            },
            HintKind::Origin => HintContent::Display {
                kind,
                text: entry.origin,
            },
            HintKind::PartOfSpeech => HintContent::Display {
                kind,
                text: entry.part_of_speech,
            },
            HintKind::Example => HintContent::Speak {
                text: entry.sentence,
            },
        })
    }

    /// Move past an answered question.
    pub fn advance(&mut self) -> Result<SessionStatus> {
        self.current_entry()?;
        if !self.answered {
            return Err(QuizError::Unanswered);
        }
        self.position += 1;
        self.answered = false;
        if self.is_completed() {
            let summary = self.summary();
            info!(
                "session on '{}' completed: {}/{} ({} stars)",
                self.set_key, summary.final_score, summary.max_score, summary.star_rating
            );
            return Ok(SessionStatus::Completed(summary));
        }
        self.current_question().map(SessionStatus::InProgress)
    }

    pub fn max_possible_score(&self) -> u32 {
        self.config.max_possible_score(self.question_count)
    }

    pub fn summarize(&self, max_possible_score: u32) -> SessionSummary {
        summary::summarize(
            self.score,
            max_possible_score,
            &self.history,
            self.config.rating,
        )
    }

    /// Summary against the best score this configuration allows.
    pub fn summary(&self) -> SessionSummary {
        self.summarize(self.max_possible_score())
    }

    /// Pick a flavour fact not shown yet this round; the pool refills once exhausted.
    pub fn next_fact(&mut self) -> Option<&'static str> {
        let mut available: Vec<&'static str> = self
            .facts
            .iter()
            .copied()
            .filter(|f| !self.used_facts.contains(f))
            .collect();
        if available.is_empty() {
            self.used_facts.clear();
            available = self.facts.to_vec();
        }
        let fact = *available.choose(&mut self.rng)?;
        self.used_facts.push(fact);
        Some(fact)
    }
}
