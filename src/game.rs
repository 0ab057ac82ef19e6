//! Game controller: drives one `SessionState` through the screens of the
//! quiz and forwards everything visible to a `Presenter` and everything
//! audible to a `Narrator`.

use log::{info, warn};

use crate::catalog;
use crate::config::ScoringConfig;
use crate::error::{QuizError, Result};
use crate::session::{self, SessionState};
use crate::speech::{FollowUp, Narrator, Playback, SpeechPort, Utterance};
use crate::summary::SessionSummary;
use crate::types::{
    AnswerResult, HintContent, HintKind, Progress, Question, SessionStatus, WordSet,
};

pub const SENTENCE_PLAYING: &str = "🗣️ Playing example sentence...";
pub const SPEECH_UNSUPPORTED: &str = "Speech synthesis not supported in your browser.";

/// Which screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Feedback shown after an answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub result: AnswerResult,
    pub fact: Option<&'static str>,
}

impl Feedback {
    pub fn icon(&self) -> &'static str {
        if self.result.correct { "✅" } else { "❌" }
    }

    pub fn headline(&self) -> &'static str {
        if self.result.correct {
            "Excellent!"
        } else {
            "Not quite!"
        }
    }

    /// "Correct: <word>" after a miss, nothing after a hit.
    pub fn correction(&self) -> Option<String> {
        (!self.result.correct).then(|| format!("Correct: {}", self.result.correct_spelling))
    }
}

/// Rendering side of the game, implemented by the host UI.
pub trait Presenter {
    fn show_screen(&mut self, screen: Screen);
    fn render_question(&mut self, question: &Question, progress: &Progress);
    fn render_progress(&mut self, progress: &Progress);
    fn render_feedback(&mut self, feedback: &Feedback);
    fn render_summary(&mut self, summary: &SessionSummary);
    fn show_info(&mut self, text: &str);
    fn hide_info(&mut self);
    /// Blocking notice (an alert in the browser).
    fn notify(&mut self, message: &str);
}

fn lookup_set(key: &str) -> Result<&'static WordSet> {
    catalog::word_set(key).ok_or_else(|| QuizError::UnknownWordSet {
        key: key.to_string(),
    })
}

pub struct Game<P: Presenter, S: SpeechPort> {
    presenter: P,
    narrator: Narrator<S>,
    config: ScoringConfig,
    session: Option<SessionState>,
    screen: Screen,
}

impl<P: Presenter, S: SpeechPort> Game<P, S> {
    pub fn new(presenter: P, speech: S, config: ScoringConfig) -> Self {
        Self {
            presenter,
            narrator: Narrator::new(speech),
            config,
            session: None,
            screen: Screen::Menu,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn narrator(&self) -> &Narrator<S> {
        &self.narrator
    }

    pub fn narrator_mut(&mut self) -> &mut Narrator<S> {
        &mut self.narrator
    }

    pub fn session(&self) -> Option<&SessionState> {
        self.session.as_ref()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ScoringConfig) {
        self.config = config;
    }

    /// Start a round on the catalog set named `key`.
    pub fn start(&mut self, key: &str) -> Result<Question> {
        self.start_set(lookup_set(key)?)
    }

    pub fn start_set(&mut self, set: &WordSet) -> Result<Question> {
        let state = session::start_session(set, self.config)?;
        self.start_with(state)
    }

    /// Start a round under `config`. The config is kept only if the round starts.
    pub fn start_configured(&mut self, key: &str, config: ScoringConfig) -> Result<Question> {
        let set = lookup_set(key)?;
        let question = self.start_with(session::start_session(set, config)?)?;
        self.config = config;
        Ok(question)
    }

    /// Start a round from an already initialised session.
    pub fn start_with(&mut self, mut state: SessionState) -> Result<Question> {
        let question = state.current_question()?;
        self.narrator.cancel();
        self.session = Some(state);
        self.set_screen(Screen::Playing);
        self.present(&question);
        Ok(question)
    }

    /// Speak the current word, or fall back to a written clue.
    pub fn pronounce_word(&mut self) -> Result<()> {
        let entry = *self.playing()?.current_entry()?;
        if !self.narrator.pronounce(entry.word) {
            warn!("speech unavailable, showing text fallback");
            self.presenter.notify(&format!(
                "Speech synthesis not supported. The word is related to: {}",
                entry.definition
            ));
        }
        Ok(())
    }

    pub fn choose(&mut self, option: &str) -> Result<Feedback> {
        let state = self.playing_mut()?;
        let result = state.submit_answer(option)?;
        let fact = state.next_fact();
        let progress = state.progress();
        let feedback = Feedback { result, fact };
        self.presenter.render_progress(&progress);
        self.presenter.render_feedback(&feedback);
        Ok(feedback)
    }

    pub fn hint(&mut self, kind: HintKind) -> Result<HintContent> {
        let content = self.playing_mut()?.request_hint(kind)?;
        match content {
            HintContent::Display { .. } => self.presenter.show_info(&content.to_string()),
            HintContent::Speak { text } => {
                if self.narrator.speak_sentence(text) {
                    self.presenter.show_info(SENTENCE_PLAYING);
                } else {
                    self.presenter.notify(SPEECH_UNSUPPORTED);
                }
            }
        }
        Ok(content)
    }

    pub fn next(&mut self) -> Result<SessionStatus> {
        let status = self.playing_mut()?.advance()?;
        match &status {
            SessionStatus::InProgress(question) => self.present(question),
            SessionStatus::Completed(summary) => {
                self.narrator.cancel();
                self.set_screen(Screen::GameOver);
                self.presenter.render_summary(summary);
            }
        }
        Ok(status)
    }

    pub fn back_to_menu(&mut self) {
        self.narrator.cancel();
        self.session = None;
        self.set_screen(Screen::Menu);
    }

    /// Speech report from the host; may ask for the slow repeat to be scheduled.
    pub fn on_speech_end(&mut self, ticket: u64) -> Option<FollowUp> {
        let was_sentence = self.narrator.playback() == Playback::Playing(Utterance::Sentence);
        let follow_up = self.narrator.on_speech_end(ticket);
        if was_sentence && self.narrator.playback() == Playback::Idle {
            self.presenter.hide_info();
        }
        follow_up
    }

    pub fn on_speech_error(&mut self, ticket: u64) {
        self.narrator.on_speech_error(ticket);
    }

    pub fn resume(&mut self, follow_up: &FollowUp) -> bool {
        self.narrator.resume(follow_up)
    }

    fn present(&mut self, question: &Question) {
        let progress = match &self.session {
            Some(state) => state.progress(),
            None => return,
        };
        self.presenter.hide_info();
        self.presenter.render_question(question, &progress);
    }

    fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            info!("screen {:?} -> {:?}", self.screen, screen);
        }
        self.screen = screen;
        self.presenter.show_screen(screen);
    }

    fn playing(&self) -> Result<&SessionState> {
        match (&self.session, self.screen) {
            (Some(state), Screen::Playing) => Ok(state),
            _ => Err(QuizError::NotPlaying),
        }
    }

    fn playing_mut(&mut self) -> Result<&mut SessionState> {
        match (&mut self.session, self.screen) {
            (Some(state), Screen::Playing) => Ok(state),
            _ => Err(QuizError::NotPlaying),
        }
    }
}
