// Word set 5: challenge words.
use super::entry;
use crate::types::{WordEntry, WordSet};

static WORDS: [WordEntry; 10] = [
    entry("conscience", "KON-shuhns", &["concience", "conscience", "consience", "conscence"],
        "The inner sense of right and wrong", "Latin conscientia, knowledge within oneself", "noun",
        "His conscience told him to return the wallet."),
    entry("definitely", "DEF-uh-nit-lee", &["definately", "definitly", "definitely", "defenitely"],
        "Without any doubt", "Latin definire, to set bounds", "adverb",
        "I will definitely finish my homework tonight."),
    entry("mischievous", "MIS-chuh-vuhs", &["mischievious", "mischevous", "mischievous", "mischivous"],
        "Playfully causing small trouble", "Old French meschief, misfortune", "adjective",
        "The mischievous puppy hid my slipper."),
    entry("restaurant", "RES-tuh-ront", &["resturant", "restaurant", "restarant", "restaraunt"],
        "A place where meals are bought and eaten", "French restaurer, to restore", "noun",
        "We ate pizza at the new restaurant."),
    entry("guarantee", "gair-uhn-TEE", &["garantee", "guarentee", "gaurantee", "guarantee"],
        "A firm promise that something will happen", "Spanish garante, from Old French", "noun",
        "The toaster comes with a one-year guarantee."),
    entry("privilege", "PRIV-uh-lij", &["privilege", "priviledge", "privelege", "privilage"],
        "A special right or advantage", "Latin privilegium, law for one person", "noun",
        "It was a privilege to meet the author."),
    entry("rhinoceros", "ry-NOS-er-uhs", &["rhinocerous", "rinoceros", "rhinoceros", "rhinosceros"],
        "A large animal with one or two horns on its snout", "Greek rhis, nose + keras, horn", "noun",
        "A rhinoceros can weigh more than a car."),
    entry("silhouette", "sil-oo-ET", &["silhouete", "silouette", "silhuette", "silhouette"],
        "A dark outline seen against a light background", "Named after Etienne de Silhouette", "noun",
        "We saw the silhouette of a cat in the window."),
    entry("vacuum", "VAK-yoom", &["vaccum", "vacuum", "vacum", "vaccuum"],
        "A space with no air in it", "Latin vacuus, empty", "noun",
        "Sound cannot travel through a vacuum."),
    entry("onomatopoeia", "on-uh-mat-uh-PEE-uh", &["onomatopoeia", "onomatopeia", "onomatapoeia", "onamatopoeia"],
        "A word that imitates the sound it names", "Greek onoma, name + poiein, to make", "noun",
        "Buzz and hiss are examples of onomatopoeia."),
];

pub static SET5: WordSet = WordSet {
    key: "set5",
    name: "Challenge Words",
    words: &WORDS,
};
