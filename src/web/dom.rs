//! `Presenter` that writes into the game page by element id.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent, window};

use crate::game::{Feedback, Presenter, Screen};
use crate::summary::SessionSummary;
use crate::types::{Progress, Question};

pub struct DomPresenter {
    doc: Document,
}

impl DomPresenter {
    pub fn new() -> Result<Self, JsValue> {
        let doc = window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        Ok(Self { doc })
    }

    fn el(&self, id: &str) -> Option<Element> {
        self.doc.get_element_by_id(id)
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.el(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_display(&self, id: &str, display: &str) {
        if let Some(el) = self.el(id) {
            let _ = el.set_attribute("style", &format!("display:{display}"));
        }
    }

    fn option_buttons(&self) -> Vec<Element> {
        let Ok(list) = self.doc.query_selector_all(".word-option") else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

impl Presenter for DomPresenter {
    fn show_screen(&mut self, screen: Screen) {
        let (start, game, over) = match screen {
            Screen::Menu => ("flex", "none", "none"),
            Screen::Playing => ("none", "flex", "none"),
            Screen::GameOver => ("none", "none", "flex"),
        };
        self.set_display("startScreen", start);
        self.set_display("gameScreen", game);
        self.set_display("gameOver", over);
    }

    fn render_question(&mut self, question: &Question, progress: &Progress) {
        self.set_display("sideSection", "none");
        self.render_progress(progress);
        self.set_text("phonetic", question.entry.pronunciation);

        let Some(container) = self.el("wordOptions") else {
            return;
        };
        container.set_inner_html("");
        for &option in &question.options {
            let Ok(button) = self.doc.create_element("button") else {
                continue;
            };
            button.set_class_name("word-option");
            button.set_text_content(Some(option));
            let chosen = option.to_string();
            let closure = Closure::wrap(Box::new(move |_e: MouseEvent| {
                if let Err(err) = super::check_answer(&chosen) {
                    log::debug!("answer ignored: {:?}", err);
                }
            }) as Box<dyn FnMut(_)>);
            let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
            let _ = container.append_child(&button);
        }
    }

    fn render_progress(&mut self, progress: &Progress) {
        self.set_text("currentQuestion", &progress.question_number.to_string());
        self.set_text("score", &progress.score.to_string());
        if let Some(fill) = self.el("progressFill") {
            let _ = fill.set_attribute("style", &format!("width:{}%", progress.percent()));
        }
    }

    fn render_feedback(&mut self, feedback: &Feedback) {
        let result = &feedback.result;
        for button in self.option_buttons() {
            let _ = button.set_attribute("disabled", "");
            let text = button.text_content().unwrap_or_default();
            if text == result.correct_spelling {
                button.set_class_name("word-option correct");
            } else if !result.correct && text == result.chosen {
                button.set_class_name("word-option incorrect");
            }
        }
        self.set_text("resultIcon", feedback.icon());
        self.set_text("resultText", feedback.headline());
        self.set_text("correctSpelling", &feedback.correction().unwrap_or_default());
        self.set_text("carFactText", feedback.fact.unwrap_or_default());
        self.set_display("sideSection", "flex");
    }

    fn render_summary(&mut self, summary: &SessionSummary) {
        self.set_text("finalScore", &summary.final_score.to_string());
        self.set_text("performanceMessage", summary.message());
        self.set_text("starRating", &summary.tier.star_string());
    }

    fn show_info(&mut self, text: &str) {
        self.set_text("infoDisplay", text);
        self.set_display("infoDisplay", "block");
    }

    fn hide_info(&mut self) {
        self.set_display("infoDisplay", "none");
    }

    fn notify(&mut self, message: &str) {
        if let Some(win) = window() {
            let _ = win.alert_with_message(message);
        }
    }
}
