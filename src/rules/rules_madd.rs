//! Madd: elongation of the long-vowel letters.
//!
//! `madd_tabii` is the fallback. The specialised rules share its category and
//! carry a higher tie-break priority, so where both match the specialised one
//! wins the category.
//!
//! Durations are fixed per rule. `madd_lin` is recited 2, 4 or 6 counts
//! depending on the stop; the catalog records 4.

use crate::rules::letters::{HAMZA, LetterClass, SUKUN, WAW, YA};
use crate::rules::sifa;
use crate::{Category, Rule};

fn rule_madd_tabii() -> Rule {
    rule! {
        name: "madd_tabii",
        category: Category::Madd,
        duration: 2,
        attribute: sifa::DUR_2,
        description: "Natural elongation - 2 counts",
        when: |w| {
            w.is(Some(w.current()), LetterClass::MADD)
                && !matches!(w.ctx.next, Some(HAMZA | SUKUN))
                && !w.carries_shadda(1)
        },
    }
}

fn rule_madd_wajib_muttasil() -> Rule {
    rule! {
        name: "madd_wajib_muttasil",
        category: Category::Madd,
        duration: 5,
        attribute: sifa::DUR_5,
        priority: 3,
        description: "Required connected madd - 4-5 counts",
        when: |w| w.is(Some(w.current()), LetterClass::MADD) && w.ctx.next == Some(HAMZA),
    }
}

fn rule_madd_jaiz_munfasil() -> Rule {
    rule! {
        name: "madd_jaiz_munfasil",
        category: Category::Madd,
        duration: 4,
        attribute: sifa::DUR_4,
        priority: 2,
        description: "Permitted separate madd - 4-5 counts",
        when: |w| {
            w.is(Some(w.current()), LetterClass::MADD)
                && w.ctx.next.is_some_and(char::is_whitespace)
                && w.ctx.next_next == Some(HAMZA)
        },
    }
}

fn rule_madd_lazim() -> Rule {
    rule! {
        name: "madd_lazim",
        category: Category::Madd,
        duration: 6,
        attribute: sifa::DUR_6,
        priority: 4,
        description: "Necessary heavy madd - 6 counts",
        when: |w| w.is(Some(w.current()), LetterClass::MADD) && w.carries_shadda(1),
    }
}

fn rule_madd_lin() -> Rule {
    rule! {
        name: "madd_lin",
        category: Category::Madd,
        duration: 4,
        attribute: sifa::DUR_4,
        priority: 1,
        description: "Lin madd - waw or ya with sukun",
        when: |w| {
            matches!(w.current(), WAW | YA)
                && w.ctx.has_sukun
                && w.ctx.next_next.is_some_and(|c| !w.letters.is(c, LetterClass::MADD))
        },
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_madd_tabii(), rule_madd_wajib_muttasil(), rule_madd_jaiz_munfasil(), rule_madd_lazim(), rule_madd_lin()]
}
