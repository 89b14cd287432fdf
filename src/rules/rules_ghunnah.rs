use crate::rules::letters::LetterClass;
use crate::rules::sifa;
use crate::{Category, Rule};

fn rule_ghunnah_mushaddad() -> Rule {
    rule! {
        name: "ghunnah_mushaddad",
        category: Category::Ghunnah,
        duration: 3,
        attribute: sifa::GHUNNAH_MUSHADDAD,
        description: "Nasalization with shadda",
        when: |w| w.is(Some(w.current()), LetterClass::GHUNNAH) && w.ctx.has_shadda,
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_ghunnah_mushaddad()]
}
