// Word set 2: double letters.
use super::entry;
use crate::types::{WordEntry, WordSet};

static WORDS: [WordEntry; 10] = [
    entry("necessary", "NES-uh-ser-ee", &["neccessary", "necessary", "necesary", "neccesary"],
        "Needed or required", "Latin necessarius", "adjective",
        "Sleep is necessary for good health."),
    entry("accommodate", "uh-KOM-uh-dayt", &["accomodate", "acommodate", "accommodate", "acomodate"],
        "To provide room or space for", "Latin accommodare, to fit", "verb",
        "The hotel can accommodate two hundred guests."),
    entry("embarrass", "em-BAIR-uhs", &["embarass", "embarrass", "embaras", "embarras"],
        "To make someone feel awkward", "French embarrasser", "verb",
        "Please do not embarrass me in front of my class."),
    entry("committee", "kuh-MIT-ee", &["commitee", "comittee", "committee", "committe"],
        "A group chosen to do a task", "Anglo-French commettre, to entrust", "noun",
        "The committee voted on the new park."),
    entry("occasion", "uh-KAY-zhuhn", &["occasion", "ocassion", "occassion", "ocasion"],
        "A particular time or event", "Latin occasio, opportunity", "noun",
        "A birthday is a special occasion."),
    entry("address", "uh-DRES", &["adress", "addres", "address", "adddress"],
        "Where someone lives or receives mail", "Old French adresser, to direct", "noun",
        "Write your address on the envelope."),
    entry("tomorrow", "tuh-MOR-oh", &["tommorow", "tomorow", "tommorrow", "tomorrow"],
        "The day after today", "Old English to morgenne", "noun",
        "We will visit the museum tomorrow."),
    entry("possess", "puh-ZES", &["posess", "possess", "possses", "posses"],
        "To have or own", "Latin possidere", "verb",
        "Cats possess excellent night vision."),
    entry("millennium", "mih-LEN-ee-uhm", &["millenium", "milennium", "millennium", "milenium"],
        "A period of one thousand years", "Latin mille, thousand + annus, year", "noun",
        "Fireworks marked the start of the new millennium."),
    entry("parallel", "PAIR-uh-lel", &["paralel", "parrallel", "parallell", "parallel"],
        "Side by side and never meeting", "Greek parallelos, beside one another", "adjective",
        "Railway tracks run parallel to each other."),
];

pub static SET2: WordSet = WordSet {
    key: "set2",
    name: "Double Trouble",
    words: &WORDS,
};
