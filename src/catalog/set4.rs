// Word set 4: science words.
use super::entry;
use crate::types::{WordEntry, WordSet};

static WORDS: [WordEntry; 10] = [
    entry("photosynthesis", "foh-toh-SIN-thuh-sis", &["photosynthesis", "fotosynthesis", "photosynthisis", "photosinthesis"],
        "How plants turn sunlight into food", "Greek photo-, light + synthesis, putting together", "noun",
        "Leaves use photosynthesis to make sugar."),
    entry("molecule", "MOL-uh-kyool", &["molecule", "molecuel", "molekule", "mollecule"],
        "The smallest unit of a chemical compound", "French molecule, from Latin moles, mass", "noun",
        "A water molecule has one oxygen atom."),
    entry("gravity", "GRAV-ih-tee", &["gravaty", "gravitty", "gravity", "gravety"],
        "The force that pulls objects toward each other", "Latin gravitas, heaviness", "noun",
        "Gravity keeps the moon in orbit."),
    entry("orbit", "OR-bit", &["orbet", "orbit", "orbitt", "orbite"],
        "The curved path of one body around another", "Latin orbita, wheel track", "noun",
        "The satellite completed its orbit in ninety minutes."),
    entry("oxygen", "OK-sih-juhn", &["oxigen", "oxygin", "oxygen", "oxegen"],
        "A gas that living things need to breathe", "French oxygene, acid former", "noun",
        "Fish take oxygen from the water."),
    entry("microscope", "MY-kruh-skohp", &["microscope", "mikroscope", "microscop", "microskope"],
        "An instrument that makes tiny things look larger", "Greek mikros, small + skopein, to look", "noun",
        "We looked at pond water under a microscope."),
    entry("evaporate", "ih-VAP-uh-rayt", &["evaperate", "evaporate", "evapourate", "evaporat"],
        "To turn from liquid into vapour", "Latin evaporare", "verb",
        "Puddles evaporate quickly in the sun."),
    entry("hypothesis", "hy-POTH-uh-sis", &["hypothesis", "hypothisis", "hipothesis", "hypotesis"],
        "An idea that can be tested by experiment", "Greek hypothesis, foundation", "noun",
        "Her hypothesis was that plants grow faster with music."),
    entry("thermometer", "ther-MOM-ih-ter", &["thermometer", "thermomiter", "termometer", "thermometre"],
        "A tool for measuring temperature", "Greek thermos, hot + metron, measure", "noun",
        "The thermometer showed a fever."),
    entry("skeleton", "SKEL-ih-tuhn", &["skeleten", "skelaton", "skeletin", "skeleton"],
        "The frame of bones supporting a body", "Greek skeletos, dried up", "noun",
        "The museum displayed a dinosaur skeleton."),
];

pub static SET4: WordSet = WordSet {
    key: "set4",
    name: "Science Words",
    words: &WORDS,
};
