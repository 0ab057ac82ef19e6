//! Spelling Cat core crate.
//!
//! Listen-and-spell vocabulary quiz. The learner hears a word, picks the
//! correct spelling from four options, can ask for hints, and gets a star
//! rating at the end of the round.
//!
//! The session engine (`session`, `summary`, `config`) is plain Rust and runs
//! natively under `cargo test`. `game` drives it through a `Presenter` and a
//! `SpeechPort`; the `web` module implements both on top of the DOM and the
//! Web Speech API and is only compiled for `wasm32`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod shuffle;
pub mod speech;
pub mod summary;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{QuestionLimit, RatingPolicy, ScoringConfig, ScoringMode};
pub use error::{QuizError, Result};
pub use game::{Feedback, Game, Presenter, Screen};
pub use session::{SessionState, start_session, start_session_with_rng};
pub use speech::{Narrator, Playback, SpeechPort, SpeechRequest};
pub use summary::{SessionSummary, Tier, summarize};
pub use types::{
    AnswerResult, HintContent, HintKind, HistoryEntry, Progress, Question, SessionStatus,
    WordEntry, WordSet,
};

// Optional small allocator for size (feature gated)
#[cfg(all(target_arch = "wasm32", feature = "wee_alloc"))]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}
