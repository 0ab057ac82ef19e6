// Word set 1: everyday words that are often misspelled.
use super::entry;
use crate::types::{WordEntry, WordSet};

static WORDS: [WordEntry; 10] = [
    entry("because", "bih-KAWZ", &["because", "becuase", "becaus", "beacause"],
        "For the reason that", "Middle English, from \"by cause\"", "conjunction",
        "We stayed inside because it was raining."),
    entry("friend", "FREND", &["freind", "friend", "frend", "friende"],
        "A person you know well and like", "Old English freond", "noun",
        "My friend lent me her bicycle."),
    entry("people", "PEE-puhl", &["poeple", "peple", "people", "peopel"],
        "Human beings in general", "Old French peupel, from Latin populus", "noun",
        "Many people came to the fair."),
    entry("beautiful", "BYOO-tuh-fuhl", &["beautiful", "beutiful", "beautifull", "beatiful"],
        "Very pleasing to look at", "Middle English, from beauty + -ful", "adjective",
        "The sunset was beautiful tonight."),
    entry("Wednesday", "WENZ-day", &["Wensday", "Wednesday", "Wendsday", "Wedensday"],
        "The day after Tuesday", "Old English Wodnesdaeg, Woden's day", "noun",
        "The library closes early on Wednesday."),
    entry("answer", "AN-ser", &["anser", "answere", "awnser", "answer"],
        "A reply to a question", "Old English andswaru", "noun",
        "She raised her hand to give the answer."),
    entry("different", "DIF-er-uhnt", &["diffrent", "different", "diferent", "differant"],
        "Not the same as another", "Latin differre, to carry apart", "adjective",
        "Each snowflake has a different shape."),
    entry("separate", "SEP-uh-rayt", &["seperate", "separete", "separate", "saparate"],
        "To set or keep apart", "Latin separare", "verb",
        "Please separate the paper from the plastic."),
    entry("enough", "ih-NUF", &["enuff", "enough", "enogh", "enought"],
        "As much as is needed", "Old English genog", "adjective",
        "We have enough chairs for everyone."),
    entry("library", "LY-brer-ee", &["libary", "liberry", "library", "librery"],
        "A place where books are kept for borrowing", "Latin librarium, bookcase", "noun",
        "I borrowed three books from the library."),
];

pub static SET1: WordSet = WordSet {
    key: "set1",
    name: "Everyday Words",
    words: &WORDS,
};
