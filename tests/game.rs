// Game controller tests with a recording presenter and a fake speech port.

use std::cell::RefCell;
use std::rc::Rc;

use spelling_cat::game::{SENTENCE_PLAYING, SPEECH_UNSUPPORTED};
use spelling_cat::speech::Utterance;
use spelling_cat::{
    Feedback, Game, HintContent, HintKind, Playback, Presenter, Progress, Question, QuizError,
    ScoringConfig, Screen, SessionStatus, SessionSummary, SpeechPort, SpeechRequest,
};

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Screen(Screen),
    Question(usize),
    Progress(usize, u32),
    Feedback(bool, Option<String>),
    Summary(u32, u8),
    Info(String),
    HideInfo,
    Notice(String),
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<Event>>>);

impl Recorder {
    fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }
    fn push(&self, e: Event) {
        self.0.borrow_mut().push(e);
    }
}

impl Presenter for Recorder {
    fn show_screen(&mut self, screen: Screen) {
        self.push(Event::Screen(screen));
    }
    fn render_question(&mut self, question: &Question, progress: &Progress) {
        assert_eq!(question.options.len(), 4);
        self.push(Event::Question(progress.question_number));
    }
    fn render_progress(&mut self, progress: &Progress) {
        self.push(Event::Progress(progress.question_number, progress.score));
    }
    fn render_feedback(&mut self, feedback: &Feedback) {
        self.push(Event::Feedback(feedback.result.correct, feedback.correction()));
    }
    fn render_summary(&mut self, summary: &SessionSummary) {
        self.push(Event::Summary(summary.final_score, summary.star_rating));
    }
    fn show_info(&mut self, text: &str) {
        self.push(Event::Info(text.to_string()));
    }
    fn hide_info(&mut self) {
        self.push(Event::HideInfo);
    }
    fn notify(&mut self, message: &str) {
        self.push(Event::Notice(message.to_string()));
    }
}

#[derive(Default)]
struct FakeSpeech {
    available: bool,
    spoken: Vec<(String, u64)>,
}

impl SpeechPort for FakeSpeech {
    fn is_available(&self) -> bool {
        self.available
    }
    fn speak(&mut self, request: &SpeechRequest, ticket: u64) {
        self.spoken.push((request.text.clone(), ticket));
    }
    fn cancel(&mut self) {}
}

fn game(available: bool) -> (Game<Recorder, FakeSpeech>, Recorder) {
    let rec = Recorder::default();
    let speech = FakeSpeech { available, ..FakeSpeech::default() };
    (Game::new(rec.clone(), speech, ScoringConfig::default()), rec)
}

fn current_word(g: &Game<Recorder, FakeSpeech>) -> &'static str {
    g.session().unwrap().current_entry().unwrap().word
}

#[test]
fn unknown_set_is_rejected_without_state() {
    let (mut g, rec) = game(true);
    let err = g.start("set42").unwrap_err();
    assert!(err.is_invalid_input());
    assert!(g.session().is_none());
    assert_eq!(g.screen(), Screen::Menu);
    assert!(rec.events().is_empty());
}

#[test]
fn actions_before_start_fail() {
    let (mut g, _) = game(true);
    assert_eq!(g.choose("x").unwrap_err(), QuizError::NotPlaying);
    assert_eq!(g.next().unwrap_err(), QuizError::NotPlaying);
    assert_eq!(g.hint(HintKind::Definition).unwrap_err(), QuizError::NotPlaying);
}

#[test]
fn full_round_reaches_game_over() {
    let (mut g, rec) = game(true);
    g.start("set1").unwrap();
    assert_eq!(g.screen(), Screen::Playing);

    for i in 0..10 {
        let word = current_word(&g);
        let feedback = g.choose(if i == 0 { "nope" } else { word }).unwrap();
        assert_eq!(feedback.result.correct, i != 0);
        assert!(feedback.fact.is_some());
        let status = g.next().unwrap();
        assert_eq!(status.is_completed(), i == 9);
    }

    assert_eq!(g.screen(), Screen::GameOver);
    let events = rec.events();
    assert_eq!(events.last(), Some(&Event::Summary(9, 5)));
    assert!(events.contains(&Event::Question(10)));
    let misses: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, Event::Feedback(false, Some(_))))
        .collect();
    assert_eq!(misses.len(), 1);
    assert!(matches!(g.choose("x"), Err(QuizError::NotPlaying)));
}

#[test]
fn next_without_answer_is_refused() {
    let (mut g, _) = game(true);
    g.start("set3").unwrap();
    assert_eq!(g.next().unwrap_err(), QuizError::Unanswered);
    let word = current_word(&g);
    g.choose(word).unwrap();
    assert_eq!(g.choose(word).unwrap_err(), QuizError::AlreadyAnswered);
    assert!(matches!(g.next().unwrap(), SessionStatus::InProgress(_)));
}

#[test]
fn pronounce_speaks_word_twice() {
    let (mut g, _) = game(true);
    g.start("set2").unwrap();
    let word = current_word(&g);
    g.pronounce_word().unwrap();
    let ticket = g.narrator().port().spoken[0].1;
    let follow = g.on_speech_end(ticket).expect("repeat scheduled");
    assert!(g.resume(&follow));
    let spoken: Vec<_> = g.narrator().port().spoken.iter().map(|(t, _)| t.clone()).collect();
    assert_eq!(spoken, vec![word.to_string(), word.to_string()]);
}

#[test]
fn example_hint_is_spoken_not_shown() {
    let (mut g, rec) = game(true);
    g.start("set4").unwrap();
    let entry = *g.session().unwrap().current_entry().unwrap();
    let content = g.hint(HintKind::Example).unwrap();
    assert_eq!(content, HintContent::Speak { text: entry.sentence });
    assert_eq!(g.narrator().playback(), Playback::Playing(Utterance::Sentence));
    assert_eq!(rec.events().last(), Some(&Event::Info(SENTENCE_PLAYING.to_string())));
    assert!(g.session().unwrap().history().is_empty());

    let ticket = g.narrator().port().spoken.last().unwrap().1;
    assert_eq!(g.on_speech_end(ticket), None);
    assert_eq!(rec.events().last(), Some(&Event::HideInfo));
}

#[test]
fn display_hint_shows_label_and_text() {
    let (mut g, rec) = game(true);
    g.start("set5").unwrap();
    let entry = *g.session().unwrap().current_entry().unwrap();
    g.hint(HintKind::Origin).unwrap();
    assert_eq!(rec.events().last(), Some(&Event::Info(format!("Origin: {}", entry.origin))));
}

#[test]
fn missing_speech_falls_back_to_text() {
    let (mut g, rec) = game(false);
    g.start("set1").unwrap();
    let definition = g.session().unwrap().current_entry().unwrap().definition;
    g.pronounce_word().unwrap();
    g.hint(HintKind::Example).unwrap();
    let events = rec.events();
    assert!(events.contains(&Event::Notice(format!(
        "Speech synthesis not supported. The word is related to: {}",
        definition
    ))));
    assert_eq!(events.last(), Some(&Event::Notice(SPEECH_UNSUPPORTED.to_string())));
    // Scoring carries on without audio.
    let word = current_word(&g);
    assert!(g.choose(word).unwrap().result.correct);
}

#[test]
fn config_is_kept_only_when_the_round_starts() {
    let (mut g, _) = game(true);
    assert!(g.start_configured("set42", ScoringConfig::weighted()).is_err());
    assert_eq!(*g.config(), ScoringConfig::default());
    assert!(g.session().is_none());

    g.start_configured("set1", ScoringConfig::weighted()).unwrap();
    assert_eq!(*g.config(), ScoringConfig::weighted());
    let word = current_word(&g);
    assert_eq!(g.choose(word).unwrap().result.score_delta, 10);
}

#[test]
fn back_to_menu_discards_session() {
    let (mut g, rec) = game(true);
    g.start("set1").unwrap();
    g.back_to_menu();
    assert!(g.session().is_none());
    assert_eq!(g.screen(), Screen::Menu);
    assert_eq!(rec.events().last(), Some(&Event::Screen(Screen::Menu)));
    g.start("2").unwrap();
    assert_eq!(g.session().unwrap().set_key(), "set2");
}
