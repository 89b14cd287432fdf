//! Qalqalah: the echo of a stopped qalqalah letter.

use crate::rules::letters::LetterClass;
use crate::rules::sifa;
use crate::{Category, Rule};

fn rule_qalqalah_kubra() -> Rule {
    rule! {
        name: "qalqalah_kubra",
        category: Category::Qalqalah,
        duration: 2,
        attribute: sifa::QALQALAH_KUBRA,
        description: "Major echo - at a stop",
        when: |w| {
            w.is(Some(w.current()), LetterClass::QALQALAH)
                && w.ctx.has_sukun
                && w.ctx.next_next.is_none_or(char::is_whitespace)
        },
    }
}

fn rule_qalqalah_wusta() -> Rule {
    rule! {
        name: "qalqalah_wusta",
        category: Category::Qalqalah,
        duration: 1,
        attribute: sifa::QALQALAH,
        description: "Medium echo - within a word",
        when: |w| {
            w.is(Some(w.current()), LetterClass::QALQALAH)
                && w.ctx.has_sukun
                && w.ctx.next_next.is_some_and(|c| !c.is_whitespace())
        },
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_qalqalah_kubra(), rule_qalqalah_wusta()]
}
