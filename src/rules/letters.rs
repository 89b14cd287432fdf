//! Letter classification tables.
//!
//! Every rule predicate consults these classes. Membership is exact: a
//! character belongs to a class only if it is listed for it, and nothing is
//! coerced by substring or normalization.

use std::collections::HashMap;

use crate::rules::phonemes::{self, PhonemeEntry};

// Letters referenced by name in predicates.
pub const HAMZA: char = '\u{0621}';
pub const ALIF: char = '\u{0627}';
pub const ALIF_WASL: char = '\u{0671}';
pub const BA: char = '\u{0628}';
pub const RA: char = '\u{0631}';
pub const LAM: char = '\u{0644}';
pub const MEEM: char = '\u{0645}';
pub const NOON: char = '\u{0646}';
pub const HA: char = '\u{0647}';
pub const WAW: char = '\u{0648}';
pub const YA: char = '\u{064A}';

// Diacritics.
pub const FATHATAN: char = '\u{064B}';
pub const DAMMATAN: char = '\u{064C}';
pub const KASRATAN: char = '\u{064D}';
pub const FATHA: char = '\u{064E}';
pub const DAMMA: char = '\u{064F}';
pub const KASRA: char = '\u{0650}';
pub const SHADDA: char = '\u{0651}';
pub const SUKUN: char = '\u{0652}';
pub const DAGGER_ALIF: char = '\u{0670}';

/// Returns true for the three short-vowel marks (fatha, damma, kasra).
pub fn is_short_vowel(c: char) -> bool {
    matches!(c, FATHA | DAMMA | KASRA)
}

/// Returns true for any vowel, tanwin, shadda or sukun mark, and the dagger
/// alif.
pub fn is_mark(c: char) -> bool {
    matches!(c, FATHATAN..=SUKUN | DAGGER_ALIF)
}

/// Returns true for the three tanwin marks.
pub fn is_tanwin(c: char) -> bool {
    matches!(c, FATHATAN | DAMMATAN | KASRATAN)
}

bitflags::bitflags! {
    /// Articulation classes of a letter. A letter may belong to several.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LetterClass: u32 {
        /// Throat letters (clear pronunciation of noon).
        const THROAT            = 1 << 0;
        /// Merge with nasalization.
        const IDGHAM_GHUNNAH    = 1 << 1;
        /// Merge without nasalization.
        const IDGHAM_PLAIN      = 1 << 2;
        /// The single conversion letter.
        const IQLAB             = 1 << 3;
        /// Concealment letters.
        const IKHFAA            = 1 << 4;
        /// Echo letters.
        const QALQALAH          = 1 << 5;
        /// Always-heavy letters.
        const HEAVY             = 1 << 6;
        const SUN               = 1 << 7;
        const MOON              = 1 << 8;
        /// Long-vowel letters.
        const MADD              = 1 << 9;
        /// Nasalization letters.
        const GHUNNAH           = 1 << 10;
        /// Labial letters.
        const SHAFAWI           = 1 << 11;
        /// Whistling letters.
        const SAFEER            = 1 << 12;
        /// Repetition letter.
        const TAKREER           = 1 << 13;
        /// Deviation letters.
        const INHIRAF           = 1 << 14;
        /// Whispered letters.
        const HAMS              = 1 << 15;
        /// Voiced letters.
        const JAHR              = 1 << 16;
    }
}

/// Classification tables and the phoneme map for one recitation tradition.
///
/// Built once per engine and shared read-only by every rule.
#[derive(Debug, Clone)]
pub struct LetterTable {
    classes: HashMap<char, LetterClass>,
    long_vowels: HashMap<char, &'static str>,
    phonemes: HashMap<char, PhonemeEntry>,
}

impl LetterTable {
    /// Tables for the Hafs reading.
    pub fn hafs() -> Self {
        const GROUPS: &[(LetterClass, &str)] = &[
            (LetterClass::THROAT, "ءهعحغخ"),
            (LetterClass::IDGHAM_GHUNNAH, "يومن"),
            (LetterClass::IDGHAM_PLAIN, "رل"),
            (LetterClass::IQLAB, "ب"),
            (LetterClass::IKHFAA, "صضطظسشثدذز"),
            (LetterClass::QALQALAH, "قطبد"),
            (LetterClass::HEAVY, "خصضغظقط"),
            (LetterClass::SUN, "تثدذرزسشصضطظلن"),
            (LetterClass::MOON, "ءبغحجفكوهي"),
            (LetterClass::MADD, "اوي"),
            (LetterClass::GHUNNAH, "نوم"),
            (LetterClass::SHAFAWI, "فمب"),
            (LetterClass::SAFEER, "صسز"),
            (LetterClass::TAKREER, "ر"),
            (LetterClass::INHIRAF, "لر"),
            (LetterClass::HAMS, "فحثهسشكخت"),
            (LetterClass::JAHR, "ءبجدذرزصضطظعغقلمنوي"),
        ];

        Self::from_groups(GROUPS, &[(ALIF, "ā"), (WAW, "ū"), (YA, "ī")], phonemes::hafs())
    }

    fn from_groups(
        groups: &[(LetterClass, &str)],
        long_vowels: &[(char, &'static str)],
        phonemes: Vec<PhonemeEntry>,
    ) -> Self {
        let mut classes: HashMap<char, LetterClass> = HashMap::new();
        for (class, letters) in groups {
            for c in letters.chars() {
                *classes.entry(c).or_insert_with(LetterClass::empty) |= *class;
            }
        }

        LetterTable {
            classes,
            long_vowels: long_vowels.iter().copied().collect(),
            phonemes: phonemes.into_iter().map(|entry| (entry.character, entry)).collect(),
        }
    }

    /// All classes `c` belongs to (empty for unclassified characters).
    pub fn class_of(&self, c: char) -> LetterClass {
        self.classes.get(&c).copied().unwrap_or_else(LetterClass::empty)
    }

    /// Returns true when `c` belongs to any of the classes in `class`.
    pub fn is(&self, c: char, class: LetterClass) -> bool {
        self.class_of(c).intersects(class)
    }

    /// Target long-vowel phoneme of a madd letter.
    pub fn long_vowel(&self, c: char) -> Option<&'static str> {
        self.long_vowels.get(&c).copied()
    }

    pub fn phoneme(&self, c: char) -> Option<&PhonemeEntry> {
        self.phonemes.get(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throat_and_heavy_overlap_on_kha() {
        let table = LetterTable::hafs();
        let class = table.class_of('خ');
        assert!(class.contains(LetterClass::THROAT | LetterClass::HEAVY | LetterClass::HAMS));
        assert!(!class.contains(LetterClass::JAHR));
    }

    #[test]
    fn sun_and_moon_are_disjoint() {
        let table = LetterTable::hafs();
        for c in "ءابتثجحخدذرزسشصضطظعغفقكلمنهوي".chars() {
            let class = table.class_of(c);
            assert!(
                !(class.contains(LetterClass::SUN) && class.contains(LetterClass::MOON)),
                "{c} is both sun and moon"
            );
        }
    }

    #[test]
    fn whispered_and_voiced_are_complements() {
        let table = LetterTable::hafs();
        for c in "ءبتثجحخدذرزسشصضطظعغفقكلمنهوي".chars() {
            assert!(
                table.is(c, LetterClass::HAMS) ^ table.is(c, LetterClass::JAHR),
                "{c} must be exactly one of whispered/voiced"
            );
        }
    }

    #[test]
    fn diacritics_are_unclassified() {
        let table = LetterTable::hafs();
        for c in [FATHA, DAMMA, KASRA, SUKUN, SHADDA, FATHATAN] {
            assert!(table.class_of(c).is_empty());
        }
        assert!(table.class_of('x').is_empty());
    }

    #[test]
    fn long_vowel_targets() {
        let table = LetterTable::hafs();
        assert_eq!(table.long_vowel(ALIF), Some("ā"));
        assert_eq!(table.long_vowel(WAW), Some("ū"));
        assert_eq!(table.long_vowel(YA), Some("ī"));
        assert_eq!(table.long_vowel(BA), None);
        assert!(table.is(ALIF, LetterClass::MADD));
    }

    #[test]
    fn phoneme_lookup() {
        let table = LetterTable::hafs();
        let entry = table.phoneme('ق').unwrap();
        assert_eq!(entry.phoneme, "q");
        assert_eq!(entry.name, "qaf");
        assert!(table.phoneme('x').is_none());
    }
}
