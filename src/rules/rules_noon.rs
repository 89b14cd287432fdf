//! Noon sakinah and tanwin: clear pronunciation, merging, conversion and
//! concealment, depending on the letter that follows.

use crate::rules::letters::LetterClass;
use crate::rules::predicates::noon_followed_by;
use crate::rules::sifa;
use crate::{Category, PhonemeEffect, Rule};

fn rule_izhaar_halqi() -> Rule {
    rule! {
        name: "izhaar_halqi",
        category: Category::Izhaar,
        duration: 1,
        attribute: sifa::IZHAAR,
        description: "Clear pronunciation of noon sakinah/tanwin before throat letters",
        when: |w| noon_followed_by(w, LetterClass::THROAT),
    }
}

fn rule_idgham_bi_ghunnah() -> Rule {
    rule! {
        name: "idgham_bi_ghunnah",
        category: Category::Idgham,
        duration: 2,
        attribute: sifa::IDGHAM_GHUNNAH,
        effect: PhonemeEffect::Elide,
        description: "Merging with nasalization",
        when: |w| noon_followed_by(w, LetterClass::IDGHAM_GHUNNAH),
    }
}

fn rule_idgham_bila_ghunnah() -> Rule {
    rule! {
        name: "idgham_bila_ghunnah",
        category: Category::Idgham,
        duration: 1,
        attribute: sifa::IDGHAM,
        description: "Merging without nasalization",
        when: |w| noon_followed_by(w, LetterClass::IDGHAM_PLAIN),
    }
}

fn rule_iqlab() -> Rule {
    rule! {
        name: "iqlab",
        category: Category::Iqlab,
        duration: 2,
        attribute: sifa::IQLAB_GHUNNAH,
        effect: PhonemeEffect::Replace("m"),
        description: "Conversion of noon to meem before ba",
        when: |w| noon_followed_by(w, LetterClass::IQLAB),
    }
}

fn rule_ikhfaa() -> Rule {
    rule! {
        name: "ikhfaa",
        category: Category::Ikhfaa,
        duration: 2,
        attribute: sifa::IKHFAA_GHUNNAH,
        description: "Concealment of noon",
        when: |w| noon_followed_by(w, LetterClass::IKHFAA),
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_izhaar_halqi(), rule_idgham_bi_ghunnah(), rule_idgham_bila_ghunnah(), rule_iqlab(), rule_ikhfaa()]
}
