//! `SpeechPort` backed by the Web Speech API.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance, SpeechSynthesisVoice, window};

use crate::speech::{SpeechPort, SpeechRequest, VoiceInfo, preferred_voice};

pub struct WebSpeech {
    synth: Option<SpeechSynthesis>,
    voice: Rc<RefCell<Option<SpeechSynthesisVoice>>>,
    // Kept alive for as long as the synthesizer may fire `voiceschanged`.
    _on_voices_changed: Option<Closure<dyn FnMut()>>,
}

impl WebSpeech {
    pub fn new() -> Self {
        let synth = window().and_then(|w| w.speech_synthesis().ok());
        let voice = Rc::new(RefCell::new(None));
        let mut on_voices_changed = None;
        if let Some(s) = &synth {
            *voice.borrow_mut() = pick_voice(s);
            // Some browsers only populate voices after this event.
            let synth_ref = s.clone();
            let voice_ref = voice.clone();
            let closure = Closure::wrap(Box::new(move || {
                *voice_ref.borrow_mut() = pick_voice(&synth_ref);
            }) as Box<dyn FnMut()>);
            s.set_onvoiceschanged(Some(closure.as_ref().unchecked_ref()));
            on_voices_changed = Some(closure);
        } else {
            warn!("speech synthesis not available");
        }
        Self {
            synth,
            voice,
            _on_voices_changed: on_voices_changed,
        }
    }
}

impl Default for WebSpeech {
    fn default() -> Self {
        Self::new()
    }
}

fn pick_voice(synth: &SpeechSynthesis) -> Option<SpeechSynthesisVoice> {
    let voices: Vec<SpeechSynthesisVoice> = synth
        .get_voices()
        .iter()
        .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
        .collect();
    let infos: Vec<VoiceInfo> = voices
        .iter()
        .map(|v| VoiceInfo {
            lang: v.lang(),
            name: v.name(),
        })
        .collect();
    let idx = preferred_voice(&infos)?;
    debug!("using voice {} ({})", infos[idx].name, infos[idx].lang);
    voices.into_iter().nth(idx)
}

impl SpeechPort for WebSpeech {
    fn is_available(&self) -> bool {
        self.synth.is_some()
    }

    fn speak(&mut self, request: &SpeechRequest, ticket: u64) {
        let Some(synth) = &self.synth else {
            return;
        };
        let utterance = match SpeechSynthesisUtterance::new_with_text(&request.text) {
            Ok(u) => u,
            Err(err) => {
                warn!("could not create utterance: {:?}", err);
                return;
            }
        };
        utterance.set_rate(request.rate);
        utterance.set_pitch(request.pitch);
        utterance.set_volume(1.0);
        if let Some(voice) = self.voice.borrow().as_ref() {
            utterance.set_voice(Some(voice));
        }
        let on_end = Closure::once_into_js(move || super::handle_speech_end(ticket));
        utterance.set_onend(Some(on_end.unchecked_ref()));
        let on_error = Closure::once_into_js(move || super::handle_speech_error(ticket));
        utterance.set_onerror(Some(on_error.unchecked_ref()));
        synth.speak(&utterance);
    }

    fn cancel(&mut self) {
        if let Some(synth) = &self.synth {
            synth.cancel();
        }
    }
}
