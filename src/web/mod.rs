//! Browser bindings: DOM rendering, Web Speech output and the exported
//! `#[wasm_bindgen]` entry points the page's buttons call.

mod dom;
mod speech;

use std::cell::RefCell;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

pub use dom::DomPresenter;
pub use speech::WebSpeech;

use crate::config::ScoringConfig;
use crate::game::Game;
use crate::speech::FollowUp;
use crate::types::{HintKind, SessionStatus};

/// Delay before a new word is read aloud.
const PRONOUNCE_DELAY_MS: i32 = 700;

type WebGame = Game<DomPresenter, WebSpeech>;

thread_local! {
    static GAME: RefCell<Option<WebGame>> = const { RefCell::new(None) };
}

fn to_js(err: crate::QuizError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn with_game<T>(f: impl FnOnce(&mut WebGame) -> crate::Result<T>) -> Result<T, JsValue> {
    GAME.with(|cell| {
        let mut slot = cell
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("game busy"))?;
        if slot.is_none() {
            *slot = Some(Game::new(
                DomPresenter::new()?,
                WebSpeech::new(),
                ScoringConfig::default(),
            ));
        }
        let Some(game) = slot.as_mut() else {
            return Err(JsValue::from_str("no game"));
        };
        f(game).map_err(to_js)
    })
}

fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    let Some(win) = window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    if win
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
        .is_err()
    {
        warn!("could not schedule timer");
    }
}

fn schedule_pronunciation() {
    set_timeout(PRONOUNCE_DELAY_MS, || {
        let _ = pronounce_word();
    });
}

fn parse_config(config_json: Option<String>) -> crate::Result<Option<ScoringConfig>> {
    let Some(json) = config_json else {
        return Ok(None);
    };
    #[cfg(feature = "serde_json")]
    {
        ScoringConfig::from_json(&json).map(Some)
    }
    #[cfg(not(feature = "serde_json"))]
    {
        let _ = json;
        warn!("scoring config ignored: built without the serde_json feature");
        Ok(None)
    }
}

/// Start a round on `set_key` ("set1".."set5"), optionally with a JSON scoring config.
#[wasm_bindgen]
pub fn start_game(set_key: &str, config_json: Option<String>) -> Result<(), JsValue> {
    let config = parse_config(config_json).map_err(to_js)?;
    with_game(|game| {
        let started = match config {
            Some(config) => game.start_configured(set_key, config),
            None => game.start(set_key),
        };
        started.map(|_| ())
    })?;
    schedule_pronunciation();
    Ok(())
}

#[wasm_bindgen]
pub fn pronounce_word() -> Result<(), JsValue> {
    with_game(|game| game.pronounce_word())
}

#[wasm_bindgen]
pub fn check_answer(option: &str) -> Result<bool, JsValue> {
    with_game(|game| game.choose(option).map(|f| f.result.correct))
}

/// Reveal a hint: "definition", "origin", "partOfSpeech" or "example".
#[wasm_bindgen]
pub fn show_info(kind: &str) -> Result<(), JsValue> {
    let kind: HintKind = kind.parse().map_err(to_js)?;
    with_game(|game| game.hint(kind).map(|_| ()))
}

#[wasm_bindgen]
pub fn speak_sentence() -> Result<(), JsValue> {
    with_game(|game| game.hint(HintKind::Example).map(|_| ()))
}

#[wasm_bindgen]
pub fn next_question() -> Result<(), JsValue> {
    let status = with_game(|game| game.next())?;
    if let SessionStatus::InProgress(_) = status {
        schedule_pronunciation();
    }
    Ok(())
}

#[wasm_bindgen]
pub fn back_to_menu() -> Result<(), JsValue> {
    with_game(|game| {
        game.back_to_menu();
        Ok(())
    })
}

pub(crate) fn handle_speech_end(ticket: u64) {
    let follow_up = with_game(|game| Ok(game.on_speech_end(ticket))).ok().flatten();
    if let Some(follow_up) = follow_up {
        let delay = follow_up.delay_ms;
        set_timeout(delay, move || resume(follow_up));
    }
}

pub(crate) fn handle_speech_error(ticket: u64) {
    let _ = with_game(|game| {
        game.on_speech_error(ticket);
        Ok(())
    });
}

fn resume(follow_up: FollowUp) {
    let _ = with_game(|game| Ok(game.resume(&follow_up)));
}
