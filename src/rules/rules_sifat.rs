//! Per-letter attribute tags. These fire on class membership alone.

use crate::rules::letters::LetterClass;
use crate::rules::sifa;
use crate::{Category, Rule};

fn rule_hams() -> Rule {
    rule! {
        name: "hams",
        category: Category::Hams,
        duration: 1,
        attribute: sifa::HAMS,
        description: "Whispered articulation",
        when: |w| w.is(Some(w.current()), LetterClass::HAMS),
    }
}

fn rule_jahr() -> Rule {
    rule! {
        name: "jahr",
        category: Category::Jahr,
        duration: 1,
        attribute: sifa::JAHR,
        description: "Voiced articulation",
        when: |w| w.is(Some(w.current()), LetterClass::JAHR),
    }
}

fn rule_safeer() -> Rule {
    rule! {
        name: "safeer",
        category: Category::Safeer,
        duration: 1,
        attribute: sifa::SAFEER,
        description: "Whistling sound",
        when: |w| w.is(Some(w.current()), LetterClass::SAFEER),
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_hams(), rule_jahr(), rule_safeer()]
}
