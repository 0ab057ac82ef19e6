//! Speech output: the port the browser implements, and the `Narrator` that
//! decides what to say.
//!
//! Speech is fire-and-forget. Every request gets a ticket; a newer request
//! cancels the older one, and completion reports carrying a stale ticket are
//! ignored. Nothing here feeds back into scoring.

use log::warn;

/// Rate used for the first reading of a word.
pub const WORD_RATE: f32 = 0.7;
/// Rate used for the slower repeat of a word.
pub const WORD_REPEAT_RATE: f32 = 0.6;
/// Rate used for example sentences.
pub const SENTENCE_RATE: f32 = 0.9;
/// Pause between the two readings of a word.
pub const REPEAT_DELAY_MS: i32 = 500;

/// What an utterance is for; drives the cosmetic "now playing" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utterance {
    Word,
    WordRepeat,
    Sentence,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub kind: Utterance,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>, rate: f32, kind: Utterance) -> Self {
        Self {
            text: text.into(),
            rate,
            pitch: 1.0,
            kind,
        }
    }
}

/// Text-to-speech capability supplied by the host.
///
/// Implementations report back through [`Narrator::on_speech_end`] and
/// [`Narrator::on_speech_error`] with the ticket they were given.
pub trait SpeechPort {
    fn is_available(&self) -> bool;
    fn speak(&mut self, request: &SpeechRequest, ticket: u64);
    fn cancel(&mut self);
}

/// Cosmetic playback indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Idle,
    Playing(Utterance),
    Failed,
}

/// A follow-up utterance the host should schedule after a short delay.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowUp {
    pub ticket: u64,
    pub delay_ms: i32,
}

pub struct Narrator<S: SpeechPort> {
    port: S,
    ticket: u64,
    playback: Playback,
    pending_repeat: Option<SpeechRequest>,
}

impl<S: SpeechPort> Narrator<S> {
    pub fn new(port: S) -> Self {
        Self {
            port,
            ticket: 0,
            playback: Playback::Idle,
            pending_repeat: None,
        }
    }

    pub fn port(&self) -> &S {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut S {
        &mut self.port
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_available(&self) -> bool {
        self.port.is_available()
    }

    /// Speak `request`, superseding anything already queued or playing.
    /// Returns false when speech is unavailable.
    pub fn say(&mut self, request: SpeechRequest) -> bool {
        self.pending_repeat = None;
        self.start(request)
    }

    /// Read a word twice, the second time slower.
    pub fn pronounce(&mut self, word: &str) -> bool {
        let spoken = self.say(SpeechRequest::new(word, WORD_RATE, Utterance::Word));
        if spoken {
            self.pending_repeat = Some(SpeechRequest::new(
                word,
                WORD_REPEAT_RATE,
                Utterance::WordRepeat,
            ));
        }
        spoken
    }

    pub fn speak_sentence(&mut self, sentence: &str) -> bool {
        self.say(SpeechRequest::new(sentence, SENTENCE_RATE, Utterance::Sentence))
    }

    /// Stop all speech and drop any queued repeat.
    pub fn cancel(&mut self) {
        self.pending_repeat = None;
        self.ticket += 1;
        self.playback = Playback::Idle;
        if self.port.is_available() {
            self.port.cancel();
        }
    }

    /// The utterance with `ticket` finished. Returns a follow-up to schedule, if any.
    pub fn on_speech_end(&mut self, ticket: u64) -> Option<FollowUp> {
        if ticket != self.ticket {
            return None;
        }
        self.playback = Playback::Idle;
        self.pending_repeat.as_ref().map(|_| FollowUp {
            ticket,
            delay_ms: REPEAT_DELAY_MS,
        })
    }

    pub fn on_speech_error(&mut self, ticket: u64) {
        if ticket != self.ticket {
            return;
        }
        warn!("speech utterance {} failed", ticket);
        self.pending_repeat = None;
        self.playback = Playback::Failed;
    }

    /// Play the queued repeat, unless a newer request has taken over since.
    pub fn resume(&mut self, follow_up: &FollowUp) -> bool {
        if follow_up.ticket != self.ticket {
            return false;
        }
        match self.pending_repeat.take() {
            Some(request) => self.start(request),
            None => false,
        }
    }

    fn start(&mut self, request: SpeechRequest) -> bool {
        if !self.port.is_available() {
            return false;
        }
        self.port.cancel();
        self.ticket += 1;
        self.playback = Playback::Playing(request.kind);
        self.port.speak(&request, self.ticket);
        true
    }
}

/// Language and name of an installed voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    pub lang: String,
    pub name: String,
}

/// Index of the preferred voice: a female US English voice, then any US
/// English voice, then any English voice, then whatever comes first.
pub fn preferred_voice(voices: &[VoiceInfo]) -> Option<usize> {
    voices
        .iter()
        .position(|v| v.lang == "en-US" && v.name.contains("Female"))
        .or_else(|| voices.iter().position(|v| v.lang == "en-US"))
        .or_else(|| voices.iter().position(|v| v.lang.starts_with("en")))
        .or_else(|| (!voices.is_empty()).then_some(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        available: bool,
        spoken: Vec<(String, f32, u64)>,
        cancels: usize,
    }

    impl SpeechPort for Recorder {
        fn is_available(&self) -> bool {
            self.available
        }
        fn speak(&mut self, request: &SpeechRequest, ticket: u64) {
            self.spoken.push((request.text.clone(), request.rate, ticket));
        }
        fn cancel(&mut self) {
            self.cancels += 1;
        }
    }

    fn narrator() -> Narrator<Recorder> {
        Narrator::new(Recorder { available: true, ..Recorder::default() })
    }

    #[test]
    fn test_pronounce_repeats_slower() {
        let mut n = narrator();
        assert!(n.pronounce("rhythm"));
        let ticket = n.port().spoken[0].2;
        let follow = n.on_speech_end(ticket).expect("repeat queued");
        assert_eq!(follow.delay_ms, REPEAT_DELAY_MS);
        assert!(n.resume(&follow));
        let spoken = n.port().spoken.clone();
        assert_eq!(spoken.len(), 2);
        assert_eq!(spoken[0].1, WORD_RATE);
        assert_eq!(spoken[1].1, WORD_REPEAT_RATE);
        assert_eq!(n.on_speech_end(spoken[1].2), None);
        assert_eq!(n.playback(), Playback::Idle);
    }

    #[test]
    fn test_new_request_supersedes_repeat() {
        let mut n = narrator();
        n.pronounce("rhythm");
        let first = n.port().spoken[0].2;
        n.speak_sentence("A steady beat.");
        assert!(n.port().cancels >= 2);
        // The interrupted utterance reports back late.
        assert_eq!(n.on_speech_end(first), None);
        assert_eq!(n.playback(), Playback::Playing(Utterance::Sentence));
        let stale = FollowUp { ticket: first, delay_ms: 0 };
        assert!(!n.resume(&stale));
        assert_eq!(n.port().spoken.len(), 2);
    }

    #[test]
    fn test_unavailable_speech() {
        let mut n = Narrator::new(Recorder::default());
        assert!(!n.pronounce("rhythm"));
        assert!(n.port().spoken.is_empty());
        assert_eq!(n.playback(), Playback::Idle);
    }

    #[test]
    fn test_error_clears_repeat() {
        let mut n = narrator();
        n.pronounce("rhythm");
        let t = n.port().spoken[0].2;
        n.on_speech_error(t);
        assert_eq!(n.playback(), Playback::Failed);
        assert_eq!(n.on_speech_end(t), None);
    }

    fn voice(lang: &str, name: &str) -> VoiceInfo {
        VoiceInfo { lang: lang.to_string(), name: name.to_string() }
    }

    #[test]
    fn test_preferred_voice_order() {
        let voices = vec![
            voice("fr-FR", "Amelie"),
            voice("en-GB", "Daniel"),
            voice("en-US", "Alex"),
            voice("en-US", "Samantha Female"),
        ];
        assert_eq!(preferred_voice(&voices), Some(3));
        assert_eq!(preferred_voice(&voices[..3]), Some(2));
        assert_eq!(preferred_voice(&voices[..2]), Some(1));
        assert_eq!(preferred_voice(&voices[..1]), Some(0));
        assert_eq!(preferred_voice(&[]), None);
    }
}
