//! Heavy (tafkhim) and light (tarqeeq) articulation.

use crate::rules::letters::{KASRA, KASRATAN, LetterClass};
use crate::rules::predicates::{is_lam_of_divine_name, ra_is_heavy, ra_is_light, vowel_before_article};
use crate::rules::sifa;
use crate::{Category, Rule};

fn rule_tafkhim_daim() -> Rule {
    rule! {
        name: "tafkhim_daim",
        category: Category::Tafkhim,
        duration: 1,
        attribute: sifa::TAFKHIM,
        description: "Always heavy letters",
        when: |w| w.is(Some(w.current()), LetterClass::HEAVY),
    }
}

fn rule_tafkhim_ra() -> Rule {
    rule! {
        name: "tafkhim_ra",
        category: Category::Tafkhim,
        duration: 1,
        attribute: sifa::TAFKHIM,
        description: "Heavy ra",
        when: |w| ra_is_heavy(w),
    }
}

fn rule_tarqeeq_ra() -> Rule {
    rule! {
        name: "tarqeeq_ra",
        category: Category::Tarqeeq,
        duration: 1,
        attribute: sifa::TARQEEQ,
        description: "Light ra",
        when: |w| ra_is_light(w),
    }
}

fn rule_tafkhim_lam_allah() -> Rule {
    rule! {
        name: "tafkhim_lam_allah",
        category: Category::Tafkhim,
        duration: 1,
        attribute: sifa::TAFKHIM,
        description: "Heavy lam in the divine name",
        when: |w| is_lam_of_divine_name(w) && !matches!(vowel_before_article(w), Some(KASRA | KASRATAN)),
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_tafkhim_daim(), rule_tafkhim_ra(), rule_tarqeeq_ra(), rule_tafkhim_lam_allah()]
}
