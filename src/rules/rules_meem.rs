//! Meem sakinah: labial concealment, labial merge and labial clarity.

use crate::rules::letters::{BA, MEEM};
use crate::rules::predicates::letter_after_meem_sakinah;
use crate::rules::sifa;
use crate::{Category, Rule};

fn rule_ikhfaa_shafawi() -> Rule {
    rule! {
        name: "ikhfaa_shafawi",
        category: Category::Ikhfaa,
        duration: 2,
        attribute: sifa::IKHFAA_SHAFAWI,
        description: "Labial concealment of meem sakinah before ba",
        when: |w| letter_after_meem_sakinah(w) == Some(BA),
    }
}

fn rule_idgham_shafawi() -> Rule {
    rule! {
        name: "idgham_shafawi",
        category: Category::Idgham,
        duration: 2,
        attribute: sifa::IDGHAM_SHAFAWI,
        description: "Labial merging of meem sakinah into meem",
        when: |w| letter_after_meem_sakinah(w) == Some(MEEM),
    }
}

fn rule_izhaar_shafawi() -> Rule {
    rule! {
        name: "izhaar_shafawi",
        category: Category::Izhaar,
        duration: 1,
        attribute: sifa::IZHAAR_SHAFAWI,
        description: "Labial clarity of meem sakinah",
        when: |w| matches!(letter_after_meem_sakinah(w), Some(c) if c != BA && c != MEEM),
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_ikhfaa_shafawi(), rule_idgham_shafawi(), rule_izhaar_shafawi()]
}
