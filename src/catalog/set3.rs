// Word set 3: silent letters.
use super::entry;
use crate::types::{WordEntry, WordSet};

static WORDS: [WordEntry; 10] = [
    entry("knight", "NYT", &["night", "knight", "knite", "nite"],
        "An armoured warrior serving a king", "Old English cniht, boy or servant", "noun",
        "The knight rode out to defend the castle."),
    entry("island", "EYE-luhnd", &["iland", "island", "ilande", "islend"],
        "Land surrounded by water", "Old English igland", "noun",
        "We took a ferry to the island."),
    entry("rhythm", "RITH-uhm", &["rythm", "rhythem", "rhythm", "rhytm"],
        "A regular repeated pattern of sound", "Greek rhythmos, measured flow", "noun",
        "Clap along to the rhythm of the song."),
    entry("doubt", "DOWT", &["dout", "doubt", "dowt", "doubte"],
        "A feeling of being unsure", "Latin dubitare, to hesitate", "noun",
        "There is no doubt that she will win."),
    entry("wrinkle", "RING-kuhl", &["rinkle", "wrinkel", "wrinkle", "wrinckle"],
        "A small line or fold in skin or cloth", "Middle English wrinkel", "noun",
        "Iron the shirt to remove the wrinkle."),
    entry("honest", "ON-ist", &["onest", "honist", "honnest", "honest"],
        "Truthful and fair", "Latin honestus, honourable", "adjective",
        "Thank you for your honest answer."),
    entry("climb", "KLYM", &["clime", "climb", "clim", "climbe"],
        "To go up using hands and feet", "Old English climban", "verb",
        "Squirrels climb trees with ease."),
    entry("psychology", "sy-KOL-uh-jee", &["sychology", "psycology", "psychology", "physchology"],
        "The study of the mind and behaviour", "Greek psyche, soul + -logia, study", "noun",
        "She wants to study psychology at university."),
    entry("answerable", "AN-ser-uh-buhl", &["anserable", "answerible", "answerabel", "answerable"],
        "Responsible to someone for something", "Middle English, from answer + -able", "adjective",
        "The captain is answerable for the whole crew."),
    entry("gnome", "NOHM", &["nome", "gnome", "gnoam", "knome"],
        "A small creature from folk tales", "French, from Latin gnomus", "noun",
        "A stone gnome guarded the garden."),
];

pub static SET3: WordSet = WordSet {
    key: "set3",
    name: "Silent Letters",
    words: &WORDS,
};
