use serde::Serialize;

/// Base phoneme of a script character with its descriptive name and default
/// articulation attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhonemeEntry {
    pub character: char,
    pub phoneme: &'static str,
    pub name: &'static str,
    pub attributes: &'static [&'static str],
}

const fn entry(
    character: char,
    phoneme: &'static str,
    name: &'static str,
    attributes: &'static [&'static str],
) -> PhonemeEntry {
    PhonemeEntry { character, phoneme, name, attributes }
}

/// Phoneme map for the Hafs reading.
pub fn hafs() -> Vec<PhonemeEntry> {
    vec![
        // Consonants
        entry('ء', "ʔ", "hamz", &["J", "S"]),
        entry('ا', "ʔ", "alif", &[]),
        entry('ب', "b", "ba", &["J", "R", "Q"]),
        entry('ت', "t", "ta", &["H", "S"]),
        entry('ث', "θ", "tha", &["H", "R"]),
        entry('ج', "dʒ", "jeem", &["J", "S", "Q"]),
        entry('ح', "ħ", "ha", &["H", "R"]),
        entry('خ', "x", "kha", &["H", "R", "I"]),
        entry('د', "d", "dal", &["J", "S", "Q"]),
        entry('ذ', "ð", "dhal", &["J", "R"]),
        entry('ر', "r", "ra", &["J", "T", "Rr"]),
        entry('ز', "z", "zay", &["J", "R"]),
        entry('س', "s", "seen", &["H", "R", "Sf"]),
        entry('ش', "ʃ", "sheen", &["H", "R"]),
        entry('ص', "sˤ", "sad", &["J", "R", "I", "B", "Sf"]),
        entry('ض', "dˤ", "dad", &["J", "R", "I", "B"]),
        entry('ط', "tˤ", "ta", &["J", "S", "I", "B", "Q"]),
        entry('ظ', "ðˤ", "za", &["J", "R", "I", "B"]),
        entry('ع', "ʕ", "ayn", &["J", "T"]),
        entry('غ', "ɣ", "ghayn", &["J", "R", "I"]),
        entry('ف', "f", "fa", &["J", "R", "F"]),
        entry('ق', "q", "qaf", &["J", "S", "I", "Q"]),
        entry('ك', "k", "kaf", &["H", "S"]),
        entry('ل', "l", "lam", &["J", "R", "Y"]),
        entry('م', "m", "meem", &["J", "R", "F"]),
        entry('ن', "n", "noon", &["J", "T", "Y"]),
        entry('ه', "h", "ha", &["H", "R"]),
        entry('و', "w", "waw", &["J", "R"]),
        entry('ي', "j", "ya", &["J", "R"]),
        // Letter variants
        entry('ة', "t", "ta_marbuta", &["H", "S"]),
        entry('ى', "ā", "alif_maqsura", &[]),
        entry('ؤ', "ʔ", "hamza_on_waw", &["J", "S"]),
        entry('ئ', "ʔ", "hamza_on_ya", &["J", "S"]),
        // Short vowels
        entry('\u{064E}', "a", "fatha", &[]),
        entry('\u{0650}', "i", "kasra", &[]),
        entry('\u{064F}', "u", "damma", &[]),
        // Tanwin
        entry('\u{064B}', "an", "tanween_fath", &["G"]),
        entry('\u{064D}', "in", "tanween_kasr", &["G"]),
        entry('\u{064C}', "un", "tanween_damm", &["G"]),
        // Sukun and shadda
        entry('\u{0652}', "", "sukun", &[]),
        entry('\u{0651}', "ː", "shadda", &[]),
        // Alif forms
        entry('إ', "ʔi", "alif_with_kasra", &[]),
        entry('أ', "ʔa", "alif_with_fatha", &[]),
        entry('آ', "ʔā", "alif_madd", &["M"]),
        entry('ٱ', "ʔ", "alif_wasl", &[]),
        entry('\u{0670}', "ā", "alif_khanjariya", &["M"]),
    ]
}
